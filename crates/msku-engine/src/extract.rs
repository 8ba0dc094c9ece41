//! Order-row field extraction.

use msku_ingest::{Row, resolve_int, resolve_string};
use msku_model::Marketplace;

use crate::aliases::order_aliases;

/// Fields pulled from one order row with the marketplace's alias policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedOrder {
    pub sku: Option<String>,
    /// Defaults to 1 when the column is absent or not an integer.
    pub quantity: i64,
    pub status: Option<String>,
    pub order_date: Option<String>,
    pub customer_location: Option<String>,
    pub product_name: Option<String>,
}

/// Extracts order fields from a row using the marketplace's alias lists.
#[must_use]
pub fn extract_order(marketplace: Marketplace, row: &Row) -> ExtractedOrder {
    let aliases = order_aliases(marketplace);
    ExtractedOrder {
        sku: resolve_string(row, aliases.sku),
        quantity: resolve_int(row, aliases.quantity).unwrap_or(1),
        status: resolve_string(row, aliases.status),
        order_date: resolve_string(row, aliases.order_date),
        customer_location: resolve_string(row, aliases.location),
        product_name: resolve_string(row, aliases.product_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msku_ingest::parse_table;

    #[test]
    fn amazon_row_extracts_sku_and_city() {
        let table =
            parse_table("SKU,ASIN,Quantity,Order Status,Ship City\nAMZ-1,B0X,2,Delivered,Mumbai\n")
                .unwrap();
        let order = extract_order(Marketplace::Amazon, &table.rows[0]);
        assert_eq!(order.sku.as_deref(), Some("AMZ-1"));
        assert_eq!(order.quantity, 2);
        assert_eq!(order.customer_location.as_deref(), Some("Mumbai"));
    }

    #[test]
    fn amazon_falls_back_to_asin() {
        let table = parse_table("ASIN,Quantity,Order Status\nB0X,1,Shipped\n").unwrap();
        let order = extract_order(Marketplace::Amazon, &table.rows[0]);
        assert_eq!(order.sku.as_deref(), Some("B0X"));
    }

    #[test]
    fn meesho_prefers_msku_column() {
        let table = parse_table("MSKU,SKU,Quantity,Status\nM1,raw-1,1,Shipped\n").unwrap();
        let order = extract_order(Marketplace::Meesho, &table.rows[0]);
        assert_eq!(order.sku.as_deref(), Some("M1"));
    }

    #[test]
    fn quantity_defaults_to_one() {
        let table = parse_table("SKU,Quantity,Status\nA1,lots,Delivered\n").unwrap();
        let order = extract_order(Marketplace::Generic, &table.rows[0]);
        assert_eq!(order.quantity, 1);

        let table = parse_table("SKU,Status\nA1,Delivered\n").unwrap();
        let order = extract_order(Marketplace::Generic, &table.rows[0]);
        assert_eq!(order.quantity, 1);
    }
}
