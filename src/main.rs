use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use raidlogs::model::report_id_from_url;
use raidlogs::{ApiManager, Config, Error, logging, render};
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Warcraft Logs reports for your guild", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show a report by URL, or list the guild's latest reports
    Log(LogCmd),
    /// Show a report by its code
    Report(ReportCmd),
}

#[derive(Args, Debug)]
struct LogCmd {
    /// Report URL; leave out to list recent reports
    pub url: Option<String>,
}

#[derive(Args, Debug)]
struct ReportCmd {
    pub id: String,
}

async fn show_report(api: &ApiManager, id: &str) -> Result<(), Error> {
    match api.fetch_report(id).await? {
        Some(report) => print!("{}", render::report_summary(&report)),
        None => println!("No report with code {id}."),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::from_env()?;
    let api = ApiManager::new(&config);
    api.authenticate().await?;

    match &cli.command {
        Commands::Log(args) => {
            let url = args.url.as_deref().map(str::trim).unwrap_or_default();
            match report_id_from_url(url) {
                Some(id) => show_report(&api, id).await?,
                None => {
                    let listing = api.fetch_recent_reports(config.guild_id).await?;
                    if listing.is_empty() {
                        println!("No reports found for the guild.");
                    } else {
                        println!("Latest reports for the guild\n");
                        print!("{}", render::listing_summary(&listing));
                    }
                }
            }
        }
        Commands::Report(args) => show_report(&api, args.id.trim()).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init("raidlogs");

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("{}", render::failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
