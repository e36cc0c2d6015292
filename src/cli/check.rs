//! Check command handler
//!
//! Geocodes an address (or takes a raw coordinate) and reports whether it
//! falls within the configured service area.

use crate::area;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::GeoPoint;
use crate::geocode::{get_geocoder, GeocodeBackend};
use clap::Args;

/// Check command arguments
#[derive(Args)]
pub struct CheckArgs {
    /// Free-text address to geocode
    #[arg(conflicts_with_all = ["lat", "lng"])]
    pub address: Option<String>,

    /// Candidate latitude
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Candidate longitude
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,

    /// Override the configured service radius in miles
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the check command
pub async fn run(args: CheckArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let mut config = Config::load()?;

    if let Some(radius) = args.radius {
        config.service.radius_miles = radius;
        config.service.validate()?;
    }

    // Resolve the candidate point
    let (candidate, address, matched) = if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let candidate = GeoPoint::new(lat, lng);
        candidate.validate()?;
        (candidate, None, None)
    } else if let Some(address) = args.address.clone() {
        let geocoder = get_geocoder(&config.geocoder);
        match geocoder.geocode(&address).await? {
            Some(m) => {
                eprintln!("Matched: {}", m.display_name);
                (m.point, Some(address), Some(m.display_name))
            }
            None => return Err(Error::AddressNotFound(address)),
        }
    } else {
        eprintln!("Error: No candidate specified. Pass an address or --lat/--lng");
        std::process::exit(1);
    };

    let mut report = area::report(candidate, &config.service)?;
    report.address = address;
    report.matched = matched;

    // Format output
    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format(&report, &config)?;

    // Write output
    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:8} - {}", format.name, format.description);
    }
}
