pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "writine")]
#[command(about = "Writine CLI - operator tooling for the blog publishing backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the HTTP server")]
    Server,

    #[command(about = "Show how a Host header value would be routed")]
    Classify {
        #[arg(help = "Host header value, e.g. alice.writine.com:443")]
        host: String,
    },

    #[command(about = "Custom domain claim management")]
    Domains {
        #[command(subcommand)]
        cmd: commands::domains::DomainCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Server => crate::server::serve().await,
        Commands::Classify { host } => commands::classify::handle(&host, output_format),
        Commands::Domains { cmd } => commands::domains::handle(cmd, output_format).await,
    }
}
