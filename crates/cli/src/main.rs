//! Order Desk CLI - inspect a generated order snapshot from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Dashboard summary and regional breakdown
//! od-cli stats
//!
//! # Filter orders the way the dashboard does
//! od-cli orders --region UK --status Pending --search sofa --from 2024-01-01 --to 2024-01-31
//!
//! # Customer detail
//! od-cli customer AB12CD --json
//!
//! # Reproducible snapshot
//! od-cli --seed 7 stats
//! ```
//!
//! Results go to stdout; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orderdesk_admin::{
    config::DashboardConfig,
    services::{RegionFilter, StatusFilter},
    state::AppState,
};

mod commands;

#[derive(Parser)]
#[command(name = "od-cli")]
#[command(author, version, about = "Order Desk dashboard CLI")]
struct Cli {
    /// Seed for the generated snapshot (overrides `ORDERDESK_SEED`)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dashboard totals and the regional breakdown
    Stats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List orders matching the given filters
    Orders {
        /// Region (`APAC`, `UK`, `US`) or `All`
        #[arg(short, long, default_value = "All")]
        region: RegionFilter,

        /// Order status or `All`
        #[arg(short, long, default_value = "All")]
        status: StatusFilter,

        /// Case-insensitive search over order ID, product, customer name and status
        #[arg(long)]
        search: Option<String>,

        /// Earliest order date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest order date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Maximum rows to print in table output
        #[arg(long, default_value_t = 25)]
        limit: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one customer with their totals and recent orders
    Customer {
        /// Customer ID
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "orderdesk_cli=info,orderdesk_admin=info".into());

    // JSON for log shippers, text for humans
    let json = std::env::var_os("ORDERDESK_LOG_JSON").is_some();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::from_env()?.with_seed(cli.seed);
    let state = AppState::new(config, Utc::now());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Stats { json } => commands::stats::show(&state, json, &mut out)?,
        Commands::Orders {
            region,
            status,
            search,
            from,
            to,
            limit,
            json,
        } => {
            let query = commands::orders::OrderQuery {
                region,
                status,
                search,
                from,
                to,
            };
            commands::orders::list(&state, &query, limit, json, &mut out)?;
        }
        Commands::Customer { id, json } => {
            commands::customer::show(&state, &id.into(), json, &mut out)?;
        }
    }
    Ok(())
}
