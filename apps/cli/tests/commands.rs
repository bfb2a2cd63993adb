#![allow(clippy::unwrap_used)]

use std::fs;

use acervus_cli::commands::{execute, Action, EXIT_FAILURE, EXIT_OK};
use acervus_store::StoreConfig;
use serde_json::Value;

fn add(name: &str, quantity: &str, price: &str) -> Action {
    Action::Add {
        name: name.to_string(),
        quantity: quantity.to_string(),
        price: price.to_string(),
    }
}

fn sell(name: &str, quantity: &str) -> Action {
    Action::Sell {
        name: name.to_string(),
        quantity: quantity.to_string(),
    }
}

#[test]
fn add_then_sell_persists_between_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::in_dir(dir.path());

    let result = execute(&config, add("Rice", "50", "45.00"));
    assert_eq!(result.exit_code, EXIT_OK, "{}", result.output);

    let result = execute(&config, sell("rice", "20"));
    assert_eq!(result.exit_code, EXIT_OK, "{}", result.output);
    assert_eq!(result.output, "Sold 20 Rice for a total of 900.00 PESOS.");

    let ledger = fs::read_to_string(&config.ledger_path).unwrap();
    assert!(ledger.starts_with("Rice,20,"));

    let result = execute(&config, Action::Report { json: true });
    let payload: Value = serde_json::from_str(&result.output).unwrap();
    assert_eq!(payload["total"], "900.00");
    assert_eq!(payload["units_sold"], 20);
    assert_eq!(payload["lines"][0]["unit_price"], "45.00");
}

#[test]
fn failures_exit_with_domain_code_and_leave_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::in_dir(dir.path());
    execute(&config, add("Rice", "5", "45.00"));
    let before = fs::read_to_string(&config.catalog_path).unwrap();

    let result = execute(&config, sell("Rice", "6"));
    assert_eq!(result.exit_code, EXIT_FAILURE);
    assert!(result.output.starts_with("Error [INSUFFICIENT_STOCK]"));

    let result = execute(&config, sell("Tea", "1"));
    assert_eq!(result.output, "Error [NOT_FOUND]: Product not found: Tea");

    let result = execute(&config, add("Pen", "-1", "1.00"));
    assert!(result.output.starts_with("Error [INVALID_INPUT]"));

    let result = execute(&config, add("Pen", "1", "1.005"));
    assert!(result.output.starts_with("Error [INVALID_INPUT]"));

    assert_eq!(fs::read_to_string(&config.catalog_path).unwrap(), before);
    assert_eq!(fs::read_to_string(&config.ledger_path).unwrap(), "");
}

#[test]
fn read_only_commands_do_not_create_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::in_dir(dir.path());

    let result = execute(&config, Action::View { json: false });
    assert_eq!(result.output, "Inventory is empty.");

    let result = execute(
        &config,
        Action::Search {
            name: "Rice".to_string(),
            json: true,
        },
    );
    assert_eq!(result.exit_code, EXIT_OK);
    assert_eq!(result.output, "null");

    assert!(!config.catalog_path.exists());
    assert!(!config.ledger_path.exists());
}

#[test]
fn update_and_delete_use_first_match() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::in_dir(dir.path()).currency("USD");
    execute(&config, add("Pen", "10", "1.50"));
    execute(&config, add("Pen", "99", "2.00"));

    let result = execute(
        &config,
        Action::Update {
            name: "PEN".to_string(),
            quantity: "3".to_string(),
        },
    );
    assert_eq!(result.output, "Quantity of Pen updated to 3.");

    let result = execute(
        &config,
        Action::Delete {
            name: "pen".to_string(),
        },
    );
    assert_eq!(result.exit_code, EXIT_OK);

    let result = execute(&config, Action::View { json: true });
    let payload: Value = serde_json::from_str(&result.output).unwrap();
    let entries = payload.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["quantity"], 99);
    assert_eq!(entries[0]["price"], "2.00");
}

#[test]
fn unwritable_location_is_a_persistence_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::in_dir(dir.path().join("missing"));

    let result = execute(&config, add("Rice", "1", "1.00"));

    assert_eq!(result.exit_code, EXIT_FAILURE);
    assert!(result.output.starts_with("Error [PERSISTENCE_WRITE_FAILED]"));
}

#[test]
fn report_with_overflowing_units_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::in_dir(dir.path());
    let max = i64::MAX;
    fs::write(&config.catalog_path, format!("Free,{max},2026-10-18T09:30:00Z,0.00\n")).unwrap();
    fs::write(
        &config.ledger_path,
        format!("Free,{max},2026-10-18T10:00:00Z\nFree,{max},2026-10-18T11:00:00Z\n"),
    )
    .unwrap();

    let result = execute(&config, Action::Report { json: true });

    assert_eq!(result.exit_code, EXIT_FAILURE);
    assert!(result.output.starts_with("Error [INVALID_INPUT]"), "{}", result.output);
}
