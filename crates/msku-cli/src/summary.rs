//! Terminal rendering of reconciliation results and table views.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use msku_model::{ReconcileResponse, StockStatus};

use crate::commands::{InspectOutcome, ProcessOutcome};

pub fn print_process_outcome(outcome: &ProcessOutcome) {
    let response = &outcome.response;
    let summary = &response.summary;
    println!("Orders processed: {}", summary.total_orders_processed);
    println!("Quantity sold: {}", summary.total_quantity_sold);
    println!("MSKUs affected: {}", summary.unique_mskus_affected);
    println!("Out of stock after run: {}", summary.out_of_stock_items_count);

    if !summary.marketplaces.is_empty() {
        let mut table = new_table(vec!["Marketplace", "Orders", "MSKUs", "Quantity", "Unmapped"]);
        for (marketplace, breakdown) in &summary.marketplaces {
            table.add_row(vec![
                Cell::new(marketplace).fg(Color::Blue),
                Cell::new(breakdown.orders_processed),
                Cell::new(breakdown.unique_mskus),
                Cell::new(breakdown.total_quantity),
                count_cell(breakdown.unmapped_skus),
            ]);
        }
        align_right(&mut table, &[1, 2, 3, 4]);
        println!("{table}");
    }

    if !response.inventory_updates.is_empty() {
        let mut table = new_table(vec![
            "MSKU", "Sold", "Original", "New", "Reduced", "Status", "Locations",
        ]);
        for update in &response.inventory_updates {
            let status_cell = if update.not_found_in_ledger {
                Cell::new("not in ledger").fg(Color::Yellow)
            } else {
                match update.status {
                    StockStatus::InStock => Cell::new("in stock").fg(Color::Green),
                    StockStatus::OutOfStock => Cell::new("out of stock").fg(Color::Red),
                }
            };
            table.add_row(vec![
                Cell::new(&update.msku),
                Cell::new(update.sold_quantity),
                Cell::new(update.original_stock),
                Cell::new(update.new_stock),
                Cell::new(update.stock_reduced),
                status_cell,
                Cell::new(&update.location_summary),
            ]);
        }
        align_right(&mut table, &[1, 2, 3, 4]);
        println!("{table}");
    }

    if response.processed_orders_total > response.processed_orders.len() {
        println!(
            "Showing {} of {} processed order lines.",
            response.processed_orders.len(),
            response.processed_orders_total
        );
    }

    if !response.unmapped_skus.is_empty() {
        println!("Unmapped SKUs: {}", response.unmapped_skus.join(", "));
    }

    if !outcome.ledger_diff.is_empty() {
        println!("Ledger entries changed: {}", outcome.ledger_diff.len());
    }

    if !response.file_errors.is_empty() {
        eprintln!("File errors:");
        for error in &response.file_errors {
            eprintln!("- {} [{}]: {}", error.file, error.reason, error.detail);
        }
    }
}

pub fn print_inspect_outcome(outcome: &InspectOutcome) {
    match outcome {
        InspectOutcome::Mappings(view) => {
            let mut table = new_table(vec!["SKU", "MSKU", "Status"]);
            for entry in &view.entries {
                table.add_row(vec![
                    Cell::new(&entry.raw_sku),
                    Cell::new(&entry.canonical_msku),
                    Cell::new(entry.status.as_deref().unwrap_or("-")),
                ]);
            }
            println!("{table}");
            println!("{} of {} mappings shown.", view.entries.len(), view.total);
        }
        InspectOutcome::Combos(view) => {
            let mut table = new_table(vec!["Combo", "Components"]);
            for (combo, components) in &view.combos {
                let parts: Vec<String> = components
                    .iter()
                    .map(|c| format!("{} x{}", c.msku, c.units_per_combo))
                    .collect();
                table.add_row(vec![Cell::new(combo), Cell::new(parts.join(", "))]);
            }
            println!("{table}");
        }
        InspectOutcome::Ledger(view) => {
            let mut table = new_table(vec!["MSKU", "Product", "Stock", "Buffer", "Locations"]);
            for item in &view.items {
                table.add_row(vec![
                    Cell::new(&item.msku),
                    Cell::new(&item.product_name),
                    Cell::new(item.current_stock),
                    Cell::new(item.declared_buffer_stock),
                    Cell::new(&item.location_summary),
                ]);
            }
            align_right(&mut table, &[2, 3]);
            println!("{table}");
            println!("{} of {} items shown.", view.items.len(), view.total);
        }
    }
}

pub fn render_response_json(response: &ReconcileResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

pub fn render_inspect_json(outcome: &InspectOutcome) -> Result<String> {
    let json = match outcome {
        InspectOutcome::Mappings(view) => serde_json::to_string_pretty(view)?,
        InspectOutcome::Combos(view) => serde_json::to_string_pretty(view)?,
        InspectOutcome::Ledger(view) => serde_json::to_string_pretty(view)?,
    };
    Ok(json)
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn align_right(table: &mut Table, indexes: &[usize]) {
    for index in indexes {
        if let Some(column) = table.column_mut(*index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}
