//! service-area CLI entry point
//!
//! Service-radius eligibility checker - CLI + web API

use service_area::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
