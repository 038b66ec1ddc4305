//! Stock Alchemist CLI - The inventory and order dashboard from a terminal.
//!
//! Every command builds a fresh in-memory store (the built-in demo catalog or
//! a seed file), logs in, renders one view as JSON on stdout and exits.
//! Nothing is persisted between runs.
//!
//! # Usage
//!
//! ```bash
//! # Home page stats for the demo catalog
//! sa-cli --username user --password pass dashboard
//!
//! # Low-stock apparel from a seed file
//! SA_USERNAME=user SA_PASSWORD=pass sa-cli --seed seeds/demo.yaml \
//!     inventory --category Apparel --low-stock
//!
//! # Restock a product and show the refreshed dashboard
//! sa-cli --username user --password pass restock 2 25
//!
//! # Validate a seed file
//! sa-cli seed check seeds/demo.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `SA_USERNAME` / `SA_PASSWORD` - Login credentials
//! - `SA_LOG_FORMAT` - `json` for structured logs on stderr
//! - `RUST_LOG` - Log filter (default `stock_alchemist_admin=info,sa_cli=info`)
//! - `SA_DEMO_*`, `SA_RANKING_LIMIT`, `SA_RECENT_ORDERS`, `SA_WHOLESALE_DISCOUNT` -
//!   Dashboard configuration, see `AdminConfig::from_env`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stock_alchemist_admin::seed::{demo_catalog, load_catalog};
use stock_alchemist_admin::views::{StatusFilter, TimeRange};
use stock_alchemist_admin::{AdminConfig, AppError, AppState};
use stock_alchemist_core::{OrderId, OrderStatus, ProductId};

mod commands;

#[derive(Parser)]
#[command(name = "sa-cli")]
#[command(author, version, about = "Stock Alchemist dashboard CLI")]
struct Cli {
    /// Login username
    #[arg(long, env = "SA_USERNAME", global = true)]
    username: Option<String>,

    /// Login password
    #[arg(long, env = "SA_PASSWORD", global = true, hide_env_values = true)]
    password: Option<String>,

    /// Seed catalog (YAML, or JSON with a `.json` extension) instead of the
    /// built-in demo data
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Home page: stats, recent orders, low-stock alerts
    Dashboard,
    /// Product list with search and category filter
    Inventory {
        /// Match against name or SKU (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category name, or `all`
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Only show products below their reorder point
        #[arg(long)]
        low_stock: bool,
    },
    /// Order list with search and status filter
    Orders {
        /// Match against order id (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// `pending`, `processing`, `shipped`, `delivered`, or `all`
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Products ranked by revenue, with a category rollup
    Rankings {
        /// Reporting window in days: 7, 30, 90 or 365
        #[arg(short, long, default_value = "30")]
        range: TimeRange,

        /// Include simulated growth badges
        #[arg(long)]
        simulated: bool,
    },
    /// Sales summary and channel breakdown
    Report {
        /// Reporting window in days: 7, 30, 90 or 365
        #[arg(short, long, default_value = "30")]
        range: TimeRange,

        /// Include simulated "vs last period" badges
        #[arg(long)]
        simulated: bool,
    },
    /// Catalog at wholesale prices
    Wholesale {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// The logged-in account
    Me,
    /// Add stock to a product
    Restock {
        product_id: ProductId,
        quantity: u32,
    },
    /// Change an order's status
    SetStatus { order_id: OrderId, status: OrderStatus },
    /// Seed file tools
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Parse and validate a seed file without starting the dashboard
    Check {
        /// Path to the YAML or JSON catalog
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        writeln!(std::io::stderr(), "{}", failure_message(e.as_ref())).ok();
        std::process::exit(1);
    }
}

/// Short message for the terminal. Dashboard errors use their user-facing
/// wording; anything else prints as is.
fn failure_message(error: &(dyn std::error::Error + 'static)) -> String {
    error
        .downcast_ref::<AppError>()
        .map_or_else(|| error.to_string(), AppError::user_message)
}

/// Logs go to stderr so stdout carries only the JSON view.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stock_alchemist_admin=info,sa_cli=info".into());

    let json = std::env::var("SA_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Seed {
        action: SeedAction::Check { file },
    } = &cli.command
    {
        return commands::seed::check(file).await;
    }

    let config = AdminConfig::from_env().map_err(AppError::from)?;
    let catalog = match &cli.seed {
        Some(path) => load_catalog(path).await.map_err(AppError::from)?,
        None => demo_catalog(),
    };
    let state = AppState::new(config, catalog);

    if let Some(username) = &cli.username {
        let password = SecretString::from(cli.password.unwrap_or_default());
        state.login(username, password.expose_secret())?;
    }
    let auth = state.require_auth()?;

    match cli.command {
        Commands::Dashboard => commands::views::dashboard(&state, &auth)?,
        Commands::Inventory {
            search,
            category,
            low_stock,
        } => commands::views::inventory(&state, &auth, search, &category, low_stock)?,
        Commands::Orders { search, status } => {
            commands::views::orders(&state, &auth, search, status)?;
        }
        Commands::Rankings { range, simulated } => {
            commands::views::rankings(&state, &auth, range, simulated)?;
        }
        Commands::Report { range, simulated } => {
            commands::views::report(&state, &auth, range, simulated)?;
        }
        Commands::Wholesale { search, category } => {
            commands::views::wholesale(&state, &auth, search, &category)?;
        }
        Commands::Me => commands::views::me(&state, &auth)?,
        Commands::Restock {
            product_id,
            quantity,
        } => commands::mutate::restock(&state, &auth, &product_id, quantity)?,
        Commands::SetStatus { order_id, status } => {
            commands::mutate::set_status(&state, &auth, &order_id, status)?;
        }
        Commands::Seed { .. } => {}
    }
    Ok(())
}
