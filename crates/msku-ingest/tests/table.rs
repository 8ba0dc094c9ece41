//! Parser behavior across realistic marketplace export shapes.

use msku_ingest::{CellValue, parse_table, resolve_string};

#[test]
fn amazon_style_export_parses() {
    let text = "Order ID,SKU,ASIN,Quantity,Order Status,Ship City\n\
                171-001,AMZ-BTL-01,B0ABCDEFG,2,Delivered,Mumbai\n\
                171-002,AMZ-MUG-07,B0HIJKLMN,1,Cancelled,Pune\n";
    let table = parse_table(text).expect("parse amazon export");
    assert_eq!(table.rows.len(), 2);
    let sku = resolve_string(&table.rows[0], &["SKU", "sku"]);
    assert_eq!(sku.as_deref(), Some("AMZ-BTL-01"));
}

#[test]
fn tab_separated_export_parses() {
    let text = "MSKU\tQuantity\tStatus\nM1\t3\tShipped\nM2\t1\tReturned\n";
    let table = parse_table(text).expect("parse tsv export");
    assert_eq!(table.headers, vec!["MSKU", "Quantity", "Status"]);
    assert_eq!(
        table.rows[0].get("Quantity"),
        Some(&CellValue::Number(3.0))
    );
}

#[test]
fn ragged_rows_tolerated() {
    // Flexible tokenization: short rows simply lack the trailing keys.
    let text = "SKU,Qty,Status\nA1,2,Delivered\nB2,1\n";
    let table = parse_table(text).expect("parse ragged export");
    assert_eq!(table.rows.len(), 2);
    assert!(!table.rows[1].contains_key("Status"));
}

#[test]
fn row_order_matches_input_order() {
    let text = "SKU,Qty\nZ9,1\nA1,2\nM5,3\n";
    let table = parse_table(text).expect("parse export");
    let skus: Vec<_> = table
        .rows
        .iter()
        .map(|row| resolve_string(row, &["SKU"]).unwrap())
        .collect();
    assert_eq!(skus, vec!["Z9", "A1", "M5"]);
}

#[test]
fn unbalanced_quote_never_panics() {
    // A lone quote swallows the rest of the input; whatever rows
    // survive must come back as a table, not a panic.
    let table = parse_table("SKU,Qty\n\"A1,2\nB2,3\n").expect("parse quoted blob");
    assert!(table.rows.len() <= 2);
}
