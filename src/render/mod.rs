//! Map rendering seam
//!
//! The core never touches a map widget. Anything that wants pixels on a
//! screen implements `MapRenderer` and gets handed the candidate marker, the
//! boundary ring, and the points to frame. `GeoJsonRenderer` is the built-in
//! implementation: it records draw calls as GeoJSON features for whatever
//! front-end ultimately draws them.

use crate::area::boundary::BoundaryPolygon;
use crate::error::Result;
use crate::geo::GeoPoint;
use serde_json::json;

/// Capability interface for map display
pub trait MapRenderer {
    /// Place a marker at a point
    fn draw_marker(&mut self, point: GeoPoint);

    /// Draw a filled region from a boundary ring
    fn draw_polygon(&mut self, polygon: &BoundaryPolygon);

    /// Frame the view so all given points are visible
    fn fit_bounds(&mut self, points: &[GeoPoint]);
}

/// Renderer that accumulates draw calls as GeoJSON features
#[derive(Debug, Default)]
pub struct GeoJsonRenderer {
    features: Vec<serde_json::Value>,
    // [min_lon, min_lat, max_lon, max_lat]
    bbox: Option<[f64; 4]>,
}

impl GeoJsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything drawn so far, as a FeatureCollection value
    pub fn collection(&self) -> serde_json::Value {
        let mut collection = json!({
            "type": "FeatureCollection",
            "features": self.features,
        });
        if let Some(bbox) = self.bbox {
            collection["bbox"] = json!(bbox);
        }
        collection
    }

    /// Serialize everything drawn so far as pretty-printed GeoJSON
    pub fn finish(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.collection())?)
    }
}

impl MapRenderer for GeoJsonRenderer {
    fn draw_marker(&mut self, point: GeoPoint) {
        self.features.push(json!({
            "type": "Feature",
            "properties": { "kind": "marker" },
            "geometry": {
                "type": "Point",
                // GeoJSON positions are longitude-first
                "coordinates": [point.longitude, point.latitude],
            },
        }));
    }

    fn draw_polygon(&mut self, polygon: &BoundaryPolygon) {
        let mut ring: Vec<[f64; 2]> = polygon
            .vertices
            .iter()
            .map(|p| [p.longitude, p.latitude])
            .collect();

        // GeoJSON rings are explicitly closed: repeat the first vertex
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }

        self.features.push(json!({
            "type": "Feature",
            "properties": { "kind": "boundary" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring],
            },
        }));
    }

    fn fit_bounds(&mut self, points: &[GeoPoint]) {
        for point in points {
            let bbox = self.bbox.get_or_insert([
                point.longitude,
                point.latitude,
                point.longitude,
                point.latitude,
            ]);
            bbox[0] = bbox[0].min(point.longitude);
            bbox[1] = bbox[1].min(point.latitude);
            bbox[2] = bbox[2].max(point.longitude);
            bbox[3] = bbox[3].max(point.latitude);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[test]
    fn test_marker_is_longitude_first() {
        let mut renderer = GeoJsonRenderer::new();
        renderer.draw_marker(GeoPoint::new(34.1, -84.5));

        let collection = renderer.collection();
        let coords = &collection["features"][0]["geometry"]["coordinates"];
        assert_eq!(coords[0], -84.5);
        assert_eq!(coords[1], 34.1);
    }

    #[test]
    fn test_polygon_ring_is_closed() {
        let config = ServiceConfig::default();
        let ring = crate::area::boundary::boundary_polygon(&config, 5).unwrap();

        let mut renderer = GeoJsonRenderer::new();
        renderer.draw_polygon(&ring);

        let collection = renderer.collection();
        let coords = collection["features"][0]["geometry"]["coordinates"][0]
            .as_array()
            .unwrap();
        // 72 vertices plus the repeated first one
        assert_eq!(coords.len(), 73);
        assert_eq!(coords[0], coords[72]);
    }

    #[test]
    fn test_fit_bounds() {
        let mut renderer = GeoJsonRenderer::new();
        renderer.fit_bounds(&[GeoPoint::new(34.0, -85.0), GeoPoint::new(35.0, -84.0)]);

        let collection = renderer.collection();
        let bbox = collection["bbox"].as_array().unwrap();
        assert_eq!(bbox[0], -85.0);
        assert_eq!(bbox[1], 34.0);
        assert_eq!(bbox[2], -84.0);
        assert_eq!(bbox[3], 35.0);
    }

    #[test]
    fn test_fit_bounds_empty_is_noop() {
        let mut renderer = GeoJsonRenderer::new();
        renderer.fit_bounds(&[]);
        assert!(renderer.collection().get("bbox").is_none());
    }

    #[test]
    fn test_finish_is_valid_json() {
        let mut renderer = GeoJsonRenderer::new();
        renderer.draw_marker(GeoPoint::new(34.1, -84.5));

        let output = renderer.finish().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["type"], "FeatureCollection");
    }
}
