//! Human-readable text output formatter

use crate::area::CheckReport;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// Text formatter - outputs a human-readable verdict summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable verdict"
    }

    fn format(&self, report: &CheckReport, _config: &Config) -> Result<String> {
        let mut output = String::new();

        if let Some(address) = &report.address {
            output.push_str(&format!("Address: {}\n", address));
        }
        if let Some(matched) = &report.matched {
            output.push_str(&format!("Matched: {}\n", matched));
        }

        output.push_str(&format!(
            "Candidate: ({:.6}, {:.6})\n",
            report.candidate.latitude, report.candidate.longitude
        ));
        output.push_str(&format!(
            "Center: ({:.6}, {:.6}), radius {} miles\n",
            report.center.latitude, report.center.longitude, report.radius_miles
        ));
        output.push_str(&format!(
            "Distance: {:.2} miles\n",
            report.result.distance_miles
        ));

        if report.result.within_service {
            output.push_str("Verdict: within the service area\n");
        } else {
            output.push_str("Verdict: outside the service area\n");
        }

        Ok(output)
    }
}
