//! GeoJSON output formatter
//!
//! Hands the renderer the same three things any map front-end needs: the
//! candidate marker, the boundary ring, and the points to frame.

use crate::area::boundary::boundary_polygon;
use crate::area::CheckReport;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::render::{GeoJsonRenderer, MapRenderer};

/// GeoJSON formatter - marker plus boundary as a FeatureCollection
pub struct GeoJsonFormatter;

impl OutputFormatter for GeoJsonFormatter {
    fn name(&self) -> &str {
        "geojson"
    }

    fn description(&self) -> &str {
        "Marker and boundary as GeoJSON"
    }

    fn format(&self, report: &CheckReport, config: &Config) -> Result<String> {
        let ring = boundary_polygon(&config.service, config.service.vertex_step_degrees)?;

        let mut renderer = GeoJsonRenderer::new();
        renderer.draw_polygon(&ring);
        renderer.draw_marker(report.candidate);
        renderer.fit_bounds(&ring.vertices);
        renderer.fit_bounds(&[report.candidate, report.center]);

        renderer.finish()
    }
}
