//! Boundary polygon generation
//!
//! Approximates the service-radius circle as a ring of vertices for display.
//! The construction is deliberately planar: the radius is converted to
//! decimal degrees with the flat 1° ≈ 69 miles ratio and applied equally on
//! both axes, so the ring does not correct for longitude compression away
//! from the equator or for great-circle curvature. It is a coarse visual
//! aid only; eligibility always comes from `area::evaluate`, never from a
//! point-in-polygon test against this ring.

use crate::config::ServiceConfig;
use crate::constants::geo::MILES_PER_DEGREE;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Default angular step between vertices, in degrees (72 vertices)
pub const DEFAULT_VERTEX_STEP_DEGREES: u32 = 5;

/// An ordered ring of vertices approximating the service circle
///
/// The ring is implicitly closed: the first and last vertices are distinct
/// entries, and renderers close the ring by repeating the first vertex or
/// treating the sequence as cyclic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryPolygon {
    pub vertices: Vec<GeoPoint>,
}

impl BoundaryPolygon {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Generate the boundary ring for a service configuration
///
/// Walks the angle parameter from 0° to 360° in `vertex_step_degrees` steps,
/// placing each vertex at `(lat + r·cos θ, lng + r·sin θ)` where `r` is the
/// radius in planar degrees. Produces exactly `360 / vertex_step_degrees`
/// vertices.
pub fn boundary_polygon(
    config: &ServiceConfig,
    vertex_step_degrees: u32,
) -> Result<BoundaryPolygon> {
    config.validate()?;
    if vertex_step_degrees == 0 || 360 % vertex_step_degrees != 0 {
        return Err(Error::InvalidServiceConfig(format!(
            "Vertex step {} must be positive and divide 360 evenly",
            vertex_step_degrees
        )));
    }

    let radius_degrees = config.radius_miles / MILES_PER_DEGREE;
    let count = (360 / vertex_step_degrees) as usize;
    let mut vertices = Vec::with_capacity(count);

    for i in 0..count {
        let theta = f64::from(i as u32 * vertex_step_degrees).to_radians();
        vertices.push(GeoPoint::new(
            config.center.latitude + radius_degrees * theta.cos(),
            config.center.longitude + radius_degrees * theta.sin(),
        ));
    }

    Ok(BoundaryPolygon { vertices })
}
