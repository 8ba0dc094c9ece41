//! End-to-end `process` and `inspect` runs over files on disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use msku_cli::cli::{InspectArgs, OutputFormatArg, ProcessArgs, ViewArg};
use msku_cli::commands::{InspectOutcome, run_inspect, run_process};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn fixtures(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let mapping = write_file(dir, "mapping.csv", "sku,msku\nAMZ-1,M1\nFK-1,M2\n");
    let combos = write_file(dir, "combos.csv", "Combo,Status,SKU1,SKU2\nC1,combo,M1,M2\n");
    let inventory = write_file(
        dir,
        "inventory.csv",
        "msku,Product Name,Opening Stock\nM1,Bottle,10\nM2,Mug,5\n",
    );
    (mapping, combos, inventory)
}

#[test]
fn process_reconciles_order_files() {
    let dir = TempDir::new().expect("temp dir");
    let (mapping, combos, inventory) = fixtures(&dir);
    let orders = write_file(
        &dir,
        "orders.csv",
        "SKU,ASIN,Quantity,Order Status\nC1,B0X,2,Delivered\nAMZ-1,B0Y,1,Cancelled\n",
    );

    let args = ProcessArgs {
        mapping,
        combos: Some(combos),
        inventory: Some(inventory),
        format: OutputFormatArg::Table,
        order_files: vec![orders],
    };
    let outcome = run_process(&args).expect("process run");
    let response = &outcome.response;
    assert!(response.file_errors.is_empty());
    assert_eq!(response.summary.total_orders_processed, 1);
    assert_eq!(response.summary.total_quantity_sold, 4);
    assert_eq!(outcome.ledger_diff.len(), 2);

    let m1 = response
        .inventory_updates
        .iter()
        .find(|update| update.msku == "M1")
        .expect("M1 update");
    assert_eq!(m1.new_stock, 8);
}

#[test]
fn process_fails_without_order_file_on_disk() {
    let dir = TempDir::new().expect("temp dir");
    let (mapping, _, _) = fixtures(&dir);
    let args = ProcessArgs {
        mapping,
        combos: None,
        inventory: None,
        format: OutputFormatArg::Table,
        order_files: vec![dir.path().join("missing.csv")],
    };
    let error = run_process(&args).expect_err("missing file");
    assert!(error.to_string().contains("read order file"));
}

#[test]
fn inspect_returns_requested_view() {
    let dir = TempDir::new().expect("temp dir");
    let (mapping, combos, inventory) = fixtures(&dir);
    let args = InspectArgs {
        mapping,
        combos: Some(combos),
        inventory: Some(inventory),
        view: ViewArg::Ledger,
        format: OutputFormatArg::Table,
    };
    match run_inspect(&args).expect("inspect run") {
        InspectOutcome::Ledger(view) => {
            assert_eq!(view.total, 2);
            assert_eq!(view.items[0].msku, "M1");
        }
        _ => panic!("expected ledger view"),
    }
}
