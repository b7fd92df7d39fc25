//! bet-report: KPI summaries, record pages, CSV exports and analysis briefs
//! for a betting-performance spreadsheet.

mod config;
mod constants;
mod reports;
mod watch;

use anyhow::{Context, Result, bail};
use bet_ledger::filter::{competition_options, tipster_options};
use bet_ledger::http::HttpSource;
use bet_ledger::ingestion;
use bet_ledger::{AnalysisBrief, FilterState, LedgerStore, calculate_kpis, filter_records};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, FileConfig, Input};

#[derive(Parser)]
#[command(name = "bet-report")]
#[command(version, about = "Betting performance reports from a shared spreadsheet", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = constants::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Shared Google Sheets link (overrides config.toml)
    #[arg(long, global = true, env = "BET_SHEET_URL")]
    sheet: Option<String>,

    /// Read a local CSV export instead of the sheet
    #[arg(long, global = true, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Use generated demo data
    #[arg(long, global = true)]
    demo: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Dashboard filters. "all" (or an empty date) disables a clause.
#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Competition (exact match)
    #[arg(long, default_value = "all")]
    competition: String,

    /// Tipster (exact match)
    #[arg(long, default_value = "all")]
    tipster: String,

    /// Outcome: WIN, LOSS, VOID or PENDING
    #[arg(long, default_value = "all")]
    result: String,

    /// Single day, YYYY-MM-DD
    #[arg(long, default_value = "")]
    date: String,
}

impl FilterArgs {
    fn to_state(&self) -> Result<FilterState> {
        FilterState::from_selection(&self.competition, &self.tipster, &self.result, &self.date)
            .context("Invalid --result (expected WIN, LOSS, VOID, PENDING or all)")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the KPI summary and outcome breakdown
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print one page of the records table
    Records {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page number (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Write the filtered records to a CSV file
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output file
        #[arg(short, long, default_value = constants::DEFAULT_EXPORT_FILENAME)]
        out: PathBuf,
    },

    /// Print the analysis brief (JSON) for one record
    Brief {
        /// Record id, e.g. row-3
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the competition and tipster filter options
    Options,

    /// Reload on an interval and print the KPI line after each load
    Watch {
        #[command(flatten)]
        filters: FilterArgs,

        /// Minutes between reloads (overrides config.toml)
        #[arg(short, long)]
        interval_mins: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file_config = FileConfig::load_or_default(&cli.config)?;
    let config = Config::resolve(&file_config, cli.demo, cli.csv, cli.sheet);
    debug!("Input: {:?}", config.input);

    let http = HttpSource::new(config.http_timeout);
    let store = LedgerStore::new();

    if let Commands::Watch { filters, interval_mins } = &cli.command {
        let config = config.clone().with_watch_interval(*interval_mins);
        return watch::run(&store, &http, &config, &filters.to_state()?).await;
    }

    load(&store, &http, &config.input).await?;
    let snapshot = store.snapshot();

    match cli.command {
        Commands::Summary { filters } => {
            let filters = filters.to_state()?;
            let view = filter_records(&snapshot.records, &filters);
            let kpis = calculate_kpis(&view);
            reports::write_summary(&mut std::io::stdout().lock(), &snapshot, &filters, &view, &kpis)?;
        }
        Commands::Records { filters, page } => {
            let view = filter_records(&snapshot.records, &filters.to_state()?);
            reports::write_page(&mut std::io::stdout().lock(), &view, page)?;
        }
        Commands::Export { filters, out } => {
            let view = filter_records(&snapshot.records, &filters.to_state()?);
            reports::export_records(&out, &view)?;
        }
        Commands::Brief { id, filters } => {
            let view = filter_records(&snapshot.records, &filters.to_state()?);
            let Some(record) = view.iter().find(|r| r.id == id) else {
                bail!("No record with id {} in the current view", id);
            };
            let brief = AnalysisBrief::new(record, &calculate_kpis(&view));
            println!("{}", serde_json::to_string_pretty(&brief)?);
        }
        Commands::Options => {
            println!("Competitions:");
            for competition in competition_options(&snapshot.records) {
                println!("  {}", competition);
            }
            println!("\nTipsters:");
            for tipster in tipster_options(&snapshot.records) {
                println!("  {}", tipster);
            }
        }
        // Runs before the one-shot load
        Commands::Watch { .. } => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load `input` into `store`. `Ok(false)` means a newer load won the race.
async fn load(store: &LedgerStore, http: &HttpSource, input: &Input) -> Result<bool> {
    Ok(match input {
        Input::Demo => ingestion::load_demo(store),
        Input::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
            ingestion::load_file_text(store, &path.display().to_string(), &text)?
        }
        Input::Sheet(url) => ingestion::load_sheet(store, http, url).await?,
    })
}
