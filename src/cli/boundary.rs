//! Boundary command handler
//!
//! Emits the service-area boundary polygon for display.

use crate::area::boundary::boundary_polygon;
use crate::config::Config;
use crate::error::Result;
use crate::render::{GeoJsonRenderer, MapRenderer};
use clap::Args;

/// Boundary command arguments
#[derive(Args)]
pub struct BoundaryArgs {
    /// Angular step between vertices, in degrees (must divide 360)
    #[arg(long, short = 's')]
    pub step: Option<u32>,

    /// Emit the raw vertex list as JSON instead of GeoJSON
    #[arg(long)]
    pub raw: bool,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the boundary command
pub fn run(args: BoundaryArgs) -> Result<()> {
    let config = Config::load()?;
    let step = args.step.unwrap_or(config.service.vertex_step_degrees);

    let ring = boundary_polygon(&config.service, step)?;

    let output = if args.raw {
        serde_json::to_string_pretty(&ring)?
    } else {
        let mut renderer = GeoJsonRenderer::new();
        renderer.draw_polygon(&ring);
        renderer.draw_marker(config.service.center);
        renderer.fit_bounds(&ring.vertices);
        renderer.finish()?
    };

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
