//! # Interactive Menu
//!
//! The numbered console menu. Every choice prompts for its inputs, hands
//! them to [`commands::apply`], and prints the outcome or the error. An
//! error never ends the session.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  1 Add      2 Delete   3 Update Quantity │
//! │  4 View     5 Sell     6 Sales Report    │
//! │  7 Save     8 Search   9 Exit            │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Changes stay in memory until option 7. Leaving with unsaved changes
//! prints a warning and discards them. End of input counts as Exit.

use std::io::{self, BufRead, Write};

use acervus_store::{FileStorage, InventoryStore, StoreConfig, StoreResult};
use tracing::{debug, warn};

use crate::commands::{self, Action, CommandResult, EXIT_FAILURE};
use crate::render;

const BANNER: &str = "*******************************************";

const OPTIONS: [&str; 9] = [
    "Add Product",
    "Delete Product",
    "Update Product Quantity",
    "View Products",
    "Sell Product",
    "Sales Report",
    "Save Inventory",
    "Search Product",
    "Exit",
];

enum Flow {
    Continue,
    Exit,
}

/// Opens the store for `config` and runs the menu on stdin/stdout.
pub fn run(config: &StoreConfig) -> CommandResult {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_with(config, stdin.lock(), stdout.lock()) {
        Ok(()) => CommandResult::success(String::new()),
        Err(err) => CommandResult {
            exit_code: EXIT_FAILURE,
            output: format!("Error: console I/O failed: {err}"),
        },
    }
}

/// Opens the store for `config` and runs the menu over `input`/`output`.
///
/// Files that cannot be read are reported and the session starts with an
/// empty catalog and ledger.
pub fn run_with<R: BufRead, W: Write>(
    config: &StoreConfig,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut store = match InventoryStore::open(config) {
        Ok(store) => store,
        Err(err) => {
            warn!(error = %err, "Starting with an empty inventory");
            writeln!(output, "{}", render::error(&err))?;
            writeln!(output)?;
            InventoryStore::new(FileStorage::from_config(config))
        }
    };

    Menu::new(&mut store, &config.currency, input, output).run()
}

/// A menu session over any line source and sink.
pub struct Menu<'a, R, W> {
    store: &'a mut InventoryStore,
    currency: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut InventoryStore, currency: &'a str, input: R, output: W) -> Self {
        Menu {
            store,
            currency,
            input,
            output,
        }
    }

    /// Runs until option 9 or end of input.
    pub fn run(mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let flow = match choice.trim().parse::<u8>() {
                Ok(option @ 1..=9) => self.dispatch(option)?,
                Ok(_) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a valid option (1-9)."
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.finish()
    }

    fn dispatch(&mut self, option: u8) -> io::Result<Flow> {
        let action = match option {
            1 => {
                let Some(name) = self.prompt("Enter product name: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(quantity) = self.prompt("Enter product quantity: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(price) = self.prompt("Enter product price: ")? else {
                    return Ok(Flow::Exit);
                };
                Action::Add {
                    name,
                    quantity,
                    price,
                }
            }
            2 => {
                let Some(name) = self.prompt("Enter the product name to delete: ")? else {
                    return Ok(Flow::Exit);
                };
                Action::Delete { name }
            }
            3 => {
                let Some(name) = self.prompt("Enter the product name to update: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(quantity) = self.prompt("Enter new quantity: ")? else {
                    return Ok(Flow::Exit);
                };
                Action::Update { name, quantity }
            }
            4 => Action::View { json: false },
            5 => {
                let Some(name) = self.prompt("Enter the product name to sell: ")? else {
                    return Ok(Flow::Exit);
                };
                let label = format!("Enter quantity of {name} to sell: ");
                let Some(quantity) = self.prompt(&label)? else {
                    return Ok(Flow::Exit);
                };
                Action::Sell { name, quantity }
            }
            6 => Action::Report { json: false },
            7 => {
                let result = self.store.save().map(|()| render::saved());
                self.show(result)?;
                return Ok(Flow::Continue);
            }
            8 => {
                let Some(name) = self.prompt("Enter the product name to search: ")? else {
                    return Ok(Flow::Exit);
                };
                Action::Search { name, json: false }
            }
            _ => return Ok(Flow::Exit),
        };

        let result = commands::apply(self.store, action, self.currency);
        self.show(result)?;
        Ok(Flow::Continue)
    }

    fn finish(&mut self) -> io::Result<()> {
        debug!(dirty = self.store.is_dirty(), "Leaving menu");
        if self.store.is_dirty() {
            writeln!(
                self.output,
                "Warning: unsaved changes were discarded. Choose option 7 to save before exiting."
            )?;
        }
        writeln!(self.output, "Goodbye.")?;
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "ACERVUS INVENTORY SYSTEM")?;
        for (number, label) in OPTIONS.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, label)?;
        }
        write!(self.output, "Select an option (1-9): ")?;
        self.output.flush()
    }

    fn show(&mut self, result: StoreResult<String>) -> io::Result<()> {
        let text = match result {
            Ok(text) => text,
            Err(err) => render::error(&err),
        };
        writeln!(self.output, "{text}")?;
        writeln!(self.output)
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn session(store: &mut InventoryStore, input: &str) -> String {
        let mut output = Vec::new();
        Menu::new(store, "PESOS", input.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_sell_report_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        let mut store = InventoryStore::open(&config).unwrap();

        let out = session(&mut store, "1\nRice\n50\n45.00\n5\nrice\n20\n6\n9\n");

        assert!(out.contains("Product added: Rice (50 at 45.00)."));
        assert!(out.contains("Enter quantity of rice to sell: "));
        assert!(out.contains("Sold 20 Rice for a total of 900.00 PESOS."));
        assert!(out.contains("Total Sales: 900.00 PESOS"));
        assert!(out.contains("Warning: unsaved changes were discarded."));
        assert!(out.ends_with("Goodbye.\n"));
        assert_eq!(store.search("Rice").unwrap().quantity, 30);
        assert!(!config.catalog_path.exists());
    }

    #[test]
    fn test_save_then_exit_has_no_warning() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        let mut store = InventoryStore::open(&config).unwrap();

        let out = session(&mut store, "1\nPen\n10\n1.50\n7\n9\n");

        assert!(out.contains("Inventory saved."));
        assert!(!out.contains("Warning"));
        let text = fs::read_to_string(&config.catalog_path).unwrap();
        assert!(text.starts_with("Pen,10,"));
        assert!(text.ends_with(",1.50\n"));
    }

    #[test]
    fn test_errors_keep_the_session_going() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::open(&StoreConfig::in_dir(dir.path())).unwrap();

        let out = session(&mut store, "abc\n12\n5\nTea\n1\n1\nRice\nlots\n1.00\n4\n");

        assert!(out.contains("Invalid input. Please enter a valid option (1-9)."));
        assert!(out.contains("Invalid option. Please try again."));
        assert!(out.contains("Error [NOT_FOUND]: Product not found: Tea"));
        assert!(out.contains("Error [INVALID_INPUT]: quantity has invalid format"));
        assert!(out.contains("Inventory is empty."));
        // End of input after option 4 behaves like Exit.
        assert!(out.ends_with("Goodbye.\n"));
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_search_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::open(&StoreConfig::in_dir(dir.path())).unwrap();
        store.load_from_text("Rice,50,2026-10-18T09:30:00Z,45.00\n", "");

        let out = session(&mut store, "8\nRICE\n2\nrice\n8\nrice\n9\n");

        assert!(out.contains("Rice     50        2026-10-18 09:30:00  45.00"));
        assert!(out.contains("Rice deleted from the inventory."));
        assert!(out.contains("rice was not found in the inventory."));
        assert!(store.catalog().is_empty());
    }

    #[test]
    fn test_unreadable_catalog_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::in_dir(dir.path()).catalog_path(dir.path());

        let mut output = Vec::new();
        let input = "4\n1\nRice\n5\n1.00\n4\n9\n";
        run_with(&config, input.as_bytes(), &mut output).unwrap();
        let out = String::from_utf8(output).unwrap();

        assert!(out.starts_with("Error [PERSISTENCE_READ_FAILED]"), "{out}");
        assert!(out.contains("Inventory is empty."));
        assert!(out.contains("Product added: Rice (5 at 1.00)."));
        assert!(out.contains("Warning: unsaved changes were discarded."));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_mid_prompt_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::open(&StoreConfig::in_dir(dir.path())).unwrap();

        let out = session(&mut store, "1\nRice\n");

        assert!(out.ends_with("Goodbye.\n"));
        assert!(store.catalog().is_empty());
    }
}
