use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::cli::OutputFormat;
use crate::database::manager::DatabaseManager;
use crate::dns::{self, VerifyOutcome};
use crate::services::DomainService;

#[derive(Subcommand)]
pub enum DomainCommands {
    #[command(about = "List domain claims for a tenant")]
    List {
        #[arg(help = "Tenant id")]
        tenant: Uuid,
    },

    #[command(about = "Run the DNS ownership check for a claimed hostname")]
    Verify {
        #[arg(help = "Claimed hostname, e.g. blog.acme.com")]
        hostname: String,
    },
}

pub async fn handle(cmd: DomainCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::pool().await?;
    let service = DomainService::new(pool);

    match cmd {
        DomainCommands::List { tenant } => {
            let claims = service.list_by_tenant(tenant).await?;

            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({ "claims": claims }))?
                    );
                }
                OutputFormat::Text => {
                    if claims.is_empty() {
                        println!("No domain claims for tenant {}", tenant);
                        return Ok(());
                    }
                    println!("{:<40} {:<10} {}", "HOSTNAME", "STATUS", "CREATED");
                    println!("{}", "-".repeat(70));
                    for claim in &claims {
                        println!(
                            "{:<40} {:<10} {}",
                            claim.hostname,
                            format!("{:?}", claim.status).to_lowercase(),
                            claim.created_at.format("%Y-%m-%d %H:%M")
                        );
                    }
                }
            }
            Ok(())
        }
        DomainCommands::Verify { hostname } => {
            let verifier = dns::default_verifier();
            let (claim, outcome) = service.verify_by_hostname(&hostname, verifier).await?;

            match output_format {
                OutputFormat::Json => {
                    let verified = matches!(outcome, VerifyOutcome::Verified { .. });
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "claim": claim,
                            "verified": verified,
                        }))?
                    );
                }
                OutputFormat::Text => match outcome {
                    VerifyOutcome::Verified { proof } => {
                        println!("{} verified ({:?} proof)", claim.hostname, proof);
                    }
                    VerifyOutcome::StillPending => {
                        let instructions = verifier.instructions(&claim.hostname);
                        println!("{} is still pending verification.", claim.hostname);
                        println!("Publish one of these records and retry:");
                        println!("  {}", instructions.cname);
                        println!("  {}", instructions.txt);
                    }
                },
            }
            Ok(())
        }
    }
}
