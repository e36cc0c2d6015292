//! Map URL output formatter

use crate::area::CheckReport;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// URL formatter - outputs a map URL for the candidate point
pub struct UrlFormatter;

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the candidate point"
    }

    fn format(&self, report: &CheckReport, config: &Config) -> Result<String> {
        config.format_url(
            None,
            report.candidate.latitude,
            report.candidate.longitude,
        )
    }
}
