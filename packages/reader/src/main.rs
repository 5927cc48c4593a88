#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the Espírito Santo COVID-19 line-list reader.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use covid_es_reader::ReportReader;
use covid_es_report::Registry;
use covid_es_source::registry::{DEFAULT_SOURCE_ID, all_sources, find_source};

#[derive(Parser)]
#[command(
    name = "covid_es",
    about = "COVID-19 case and death counts for Espírito Santo municipalities"
)]
struct Cli {
    /// Read a local CSV instead of downloading the latest line-list
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    /// Only count confirmed cases dated on or before this day (e.g. `11/03/2020`)
    #[arg(long, global = true, conflicts_with = "on")]
    until: Option<String>,
    /// Only count cases dated exactly this day
    #[arg(long, global = true)]
    on: Option<String>,
    /// Source identifier (see `sources`)
    #[arg(long, global = true, default_value = DEFAULT_SOURCE_ID)]
    source: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print statewide totals (default)
    Summary,
    /// Print the counts of one municipality
    Municipality {
        /// Municipality name, accents and case optional (e.g., "Vitória")
        name: String,
    },
    /// List every municipality with its counts
    Municipalities,
    /// List all configured data sources
    Sources,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Summary);

    if matches!(command, Commands::Sources) {
        let sources = all_sources();
        println!("{:<20} NAME", "ID");
        println!("{}", "-".repeat(50));
        for source in &sources {
            println!("{:<20} {}", source.id(), source.name());
            println!("{:<20} estado: {}", "", source.state);
            println!("{:<20} licença: {}", "", source.license.license_type);
            if let Some(portal) = &source.portal_url {
                println!("{:<20} painel: {portal}", "");
            }
            if let Some(attribution) = source.attribution() {
                println!("{:<20} atribuição: {attribution}", "");
            }
        }
        return Ok(());
    }

    let definition =
        find_source(&cli.source).ok_or_else(|| format!("Unknown source: {}", cli.source))?;

    let mut reader = ReportReader::new(Registry::espirito_santo());
    match &cli.file {
        Some(path) => reader.load_file(path, &definition)?,
        None => reader.load_latest(&definition).await?,
    }
    log::info!("{reader}");

    if let Some(date) = &cli.until {
        reader.filter_up_to(date)?;
    } else if let Some(date) = &cli.on {
        reader.filter_on(date)?;
    }

    match command {
        Commands::Summary => println!("{}", reader.report()),
        Commands::Municipality { name } => println!("{}", reader.municipality(&name)?),
        Commands::Municipalities => {
            let report = reader.report();
            println!("{:<28} {:>10} {:>8}", "MUNICÍPIO", "CASOS", "ÓBITOS");
            println!("{}", "-".repeat(48));
            for municipality in report.sorted_municipalities() {
                println!(
                    "{:<28} {:>10} {:>8}",
                    municipality.name,
                    municipality.confirmed(),
                    municipality.deaths()
                );
            }
            println!(
                "{:<28} {:>10} {:>8}",
                "SEM MUNICÍPIO", report.unclassified.confirmed, report.unclassified.deaths
            );
        }
        Commands::Sources => {}
    }

    if let Some(attribution) = definition.attribution() {
        println!("\nFonte: {attribution}");
    }

    Ok(())
}
