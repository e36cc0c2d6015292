//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API with `format=geojson`, so candidate
//! coordinates arrive as GeoJSON positions (longitude first) and get flipped
//! into (latitude, longitude) here, exactly once.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::config::GeocoderConfig;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::geocode::{GeocodeBackend, GeocodeMatch};
use serde::Deserialize;

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
    endpoint: String,
}

/// Nominatim geojson search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
    geometry: FeatureGeometry,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct FeatureGeometry {
    /// GeoJSON position: [longitude, latitude]
    coordinates: Vec<f64>,
}

impl NominatimBackend {
    /// Create a new Nominatim backend
    pub fn new(config: &GeocoderConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    /// Turn a GeoJSON position into a GeoPoint
    ///
    /// Positions are longitude-first; this flip is the only one in the crate.
    fn position_to_point(position: &[f64]) -> Result<GeoPoint> {
        if position.len() < 2 {
            return Err(Error::Geocoding(format!(
                "Malformed position: expected [lon, lat], got {} values",
                position.len()
            )));
        }
        let point = GeoPoint::from_lon_lat(position[0], position[1]);
        point.validate()?;
        Ok(point)
    }
}

impl GeocodeBackend for NominatimBackend {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeMatch>> {
        let url = format!(
            "{}/search?q={}&format=geojson&limit=1",
            self.endpoint,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))?;

        if let Some(feature) = results.features.into_iter().next() {
            let point = Self::position_to_point(&feature.geometry.coordinates)?;
            Ok(Some(GeocodeMatch {
                point,
                display_name: feature.properties.display_name,
            }))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_to_point_reorders() {
        // Canton, GA as a geojson position: longitude first
        let point = NominatimBackend::position_to_point(&[-84.5, 34.1]).unwrap();
        assert_eq!(point.latitude, 34.1);
        assert_eq!(point.longitude, -84.5);
    }

    #[test]
    fn test_position_to_point_short() {
        assert!(NominatimBackend::position_to_point(&[34.1]).is_err());
        assert!(NominatimBackend::position_to_point(&[]).is_err());
    }

    #[test]
    fn test_position_to_point_out_of_range() {
        // Out-of-range values are rejected, never clamped
        let result = NominatimBackend::position_to_point(&[34.1, -184.5]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "display_name": "Canton, Cherokee County, Georgia" },
                "geometry": { "type": "Point", "coordinates": [-84.49, 34.23] }
            }]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.features.len(), 1);

        let point =
            NominatimBackend::position_to_point(&parsed.features[0].geometry.coordinates).unwrap();
        assert_eq!(point.latitude, 34.23);
        assert_eq!(point.longitude, -84.49);
    }

    #[test]
    fn test_parse_empty_response() {
        let body = r#"{ "type": "FeatureCollection", "features": [] }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.features.is_empty());
    }

    #[test]
    fn test_backend_creation() {
        let backend = NominatimBackend::new(&GeocoderConfig::default());
        assert!(format!("{:?}", backend).contains("NominatimBackend"));
    }
}
