use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use rfpcheck::compare::compare;
use rfpcheck::documents::read_document;
use rfpcheck::extract::{extract_rfp_requirements, parse_company_text, RfpRequirements};

/// rfpcheck: compare a company profile against an RFP.
///
/// Pulls business details out of a company profile and requirements out of a
/// request for proposal, then reports field by field whether the company
/// qualifies.
#[derive(Parser)]
#[command(name = "rfpcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a company profile against an RFP and print the report
    Check {
        /// Company profile document (PDF or text)
        company: PathBuf,

        /// RFP document (PDF or text)
        rfp: PathBuf,

        /// Print {"report": "..."} JSON instead of a table
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print the plain-text report without colors
        #[arg(long)]
        plain: bool,
    },

    /// Show the fields extracted from a company profile
    Company {
        /// Company profile document (PDF or text)
        file: PathBuf,
    },

    /// Show the requirements extracted from an RFP
    Rfp {
        /// RFP document (PDF or text)
        file: PathBuf,
    },

    /// Run the HTTP upload endpoint
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: RFPCHECK_PORT or 7860)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: RFPCHECK_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rfpcheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            company,
            rfp,
            json,
            plain,
        } => {
            info!(company = %company.display(), rfp = %rfp.display(), "Checking compliance");

            let company_text = read_document(&company).await?;
            let rfp_text = read_document(&rfp).await?;

            let profile = parse_company_text(&company_text);
            let requirements = extract_rfp_requirements(&rfp_text);
            let report = compare(&profile, &requirements);

            if json {
                let body = serde_json::json!({ "report": report.to_string() });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else if plain {
                println!("{report}");
            } else {
                rfpcheck::output::terminal::display_report(&report);
            }
        }

        Commands::Company { file } => {
            let text = read_document(&file).await?;
            let profile = parse_company_text(&text);
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }

        Commands::Rfp { file } => {
            let text = read_document(&file).await?;
            let requirements = extract_rfp_requirements(&text);
            println!("{}", serde_json::to_string_pretty(&requirements)?);
            if requirements == RfpRequirements::default() {
                println!(
                    "{}",
                    "No recognizable requirements found in this document.".dimmed()
                );
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = rfpcheck::config::Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            println!("Upload directory: {}", config.upload_dir.display());
            println!("Allowed origin:   {}", config.cors_origin);
            rfpcheck::web::run_server(config).await?;
        }
    }

    Ok(())
}
