//! One-shot commands: open the files, run one action, save if it changed
//! anything.

use acervus_core::validation::{parse_price, parse_quantity};
use acervus_store::{InventoryStore, StoreConfig, StoreError, StoreResult};
use clap::Subcommand;
use tracing::debug;

use crate::render::{self, EntryView, ReportView};

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;

/// Inventory actions shared by the subcommands and the interactive menu.
///
/// Quantities and prices are taken as raw text so that a typo is reported
/// as `INVALID_INPUT` like every other domain error.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    #[command(about = "Add a product to the catalog")]
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    #[command(about = "Delete the first product matching NAME")]
    Delete { name: String },
    #[command(about = "Set the stock quantity of a product")]
    Update {
        name: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    #[command(about = "Sell units of a product and record the sale")]
    Sell {
        name: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    #[command(about = "List the catalog")]
    View {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show the first product matching NAME")]
    Search {
        name: String,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show every sale priced at current catalog prices")]
    Report {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            exit_code: EXIT_OK,
            output: output.into(),
        }
    }

    pub fn failure(err: &StoreError) -> Self {
        Self {
            exit_code: EXIT_FAILURE,
            output: render::error(err),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == EXIT_OK
    }
}

/// Runs `action` against the files named by `config`.
pub fn execute(config: &StoreConfig, action: Action) -> CommandResult {
    debug!(?action, "Running command");
    match run_once(config, action) {
        Ok(output) => CommandResult::success(output),
        Err(err) => {
            debug!(code = err.code().as_str(), error = %err, "Command failed");
            CommandResult::failure(&err)
        }
    }
}

fn run_once(config: &StoreConfig, action: Action) -> StoreResult<String> {
    let mut store = InventoryStore::open(config)?;
    let output = apply(&mut store, action, &config.currency)?;
    if store.is_dirty() {
        store.save()?;
    }
    Ok(output)
}

/// Applies one action to an open store and renders the outcome.
///
/// Does not save.
pub fn apply(store: &mut InventoryStore, action: Action, currency: &str) -> StoreResult<String> {
    let output = match action {
        Action::Add {
            name,
            quantity,
            price,
        } => {
            let quantity = parse_quantity(&quantity, "quantity")?;
            let price = parse_price(&price)?;
            render::added(store.add(&name, quantity, price)?)
        }
        Action::Delete { name } => render::deleted(&store.delete(&name)?),
        Action::Update { name, quantity } => {
            let quantity = parse_quantity(&quantity, "quantity")?;
            render::updated(store.update_quantity(&name, quantity)?)
        }
        Action::Sell { name, quantity } => {
            let quantity = parse_quantity(&quantity, "quantity")?;
            let total = store.sell(&name, quantity)?;
            let sold_as = store
                .ledger()
                .last()
                .map_or(name.as_str(), |invoice| invoice.name.as_str());
            render::sold(sold_as, quantity, total, currency)
        }
        Action::View { json: true } => {
            let entries: Vec<EntryView> = store.view_all().map(EntryView::from).collect();
            render::to_json(&entries)
        }
        Action::View { json: false } => render::catalog_table(store.view_all()),
        Action::Search { name, json } => match (store.search(&name), json) {
            (Some(entry), true) => render::to_json(&EntryView::from(entry)),
            (Some(entry), false) => render::catalog_table([entry]),
            (None, true) => "null".to_string(),
            (None, false) => render::not_found(&name),
        },
        Action::Report { json } => {
            let report = store.sales_report()?;
            if json {
                render::to_json(&ReportView::new(&report, currency))
            } else {
                render::report_table(&report, currency)
            }
        }
    };
    Ok(output)
}
