use serde_json::json;

use crate::cli::OutputFormat;
use crate::routing::{classify_host, rewrite_path, HostClassification};

/// Debug aid: run the live routing config through the classifier.
pub fn handle(host: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = &crate::config::config().routing;
    let classification = classify_host(host, config);
    let rewrite = rewrite_path(&classification, "/");

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "host": host,
                    "classification": classification,
                    "rewrite_root": rewrite,
                }))?
            );
        }
        OutputFormat::Text => match &classification {
            HostClassification::Platform => {
                println!("{} -> platform (no rewrite)", host);
            }
            HostClassification::ReservedSubdomain { handle } => {
                println!("{} -> tenant subdomain, handle '{}'", host, handle);
            }
            HostClassification::CustomDomain { hostname } => {
                println!(
                    "{} -> custom domain '{}' (routes only if a verified claim exists)",
                    host, hostname
                );
            }
        },
    }

    Ok(())
}
