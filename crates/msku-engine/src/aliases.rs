//! Static column-alias policy tables.
//!
//! Every loader and extractor names its acceptable columns here, in
//! priority order. These are fixed policy, not configuration: header
//! variation between marketplaces is bounded and known, and encoding it
//! as data keeps the resolver a pure function.

use msku_model::Marketplace;

// Master mapping sheet.
pub const MAPPING_SKU: &[&str] = &["sku", "Sku", "SKU", "Seller SKU", "seller_sku"];
pub const MAPPING_MSKU: &[&str] = &["msku", "Msku", "MSKU", "Master SKU", "master_sku"];
pub const MAPPING_STATUS: &[&str] = &["status", "Status"];

// Combo definition sheet.
pub const COMBO_SKU: &[&str] = &["Combo", "combo", "Combo SKU", "combo_sku"];
pub const COMBO_STATUS: &[&str] = &["Status", "status"];
/// Component slots scanned on each combo row.
pub const COMBO_SLOT_COUNT: usize = 14;

/// The two case variants tried for a component slot column.
#[must_use]
pub fn combo_slot_aliases(slot: usize) -> [String; 2] {
    [format!("SKU{slot}"), format!("sku{slot}")]
}

// Current-inventory sheet.
pub const INVENTORY_MSKU: &[&str] = &["msku", "Msku", "MSKU", "sku", "SKU"];
pub const INVENTORY_PRODUCT_NAME: &[&str] =
    &["Product Name", "product_name", "Name", "Title", "Catalog Name"];
pub const INVENTORY_OPENING_STOCK: &[&str] =
    &["Opening Stock", "opening_stock", "Stock", "Current Stock", "stock"];
pub const INVENTORY_BUFFER_STOCK: &[&str] =
    &["Buffer Stock", "buffer_stock", "Buffer", "buffer"];

/// Closed set of warehouse location codes scanned for per-location stock.
pub const LOCATION_CODES: &[&str] = &["BLR7", "BOM5", "DEL4", "DEL5", "HYD8", "CCU1"];

/// Ordered alias lists for extracting one order row.
pub struct OrderAliases {
    pub sku: &'static [&'static str],
    pub quantity: &'static [&'static str],
    pub status: &'static [&'static str],
    pub order_date: &'static [&'static str],
    pub location: &'static [&'static str],
    pub product_name: &'static [&'static str],
}

/// Amazon order reports: seller SKU first, ASIN as fallback, ship city.
static AMAZON: OrderAliases = OrderAliases {
    sku: &["SKU", "sku", "Seller SKU", "seller-sku", "ASIN", "asin"],
    quantity: &["Quantity", "quantity", "Qty", "qty"],
    status: &["Order Status", "order-status", "Status", "status"],
    order_date: &["Order Date", "order-date", "Purchase Date", "purchase-date"],
    location: &["Ship City", "ship-city", "City", "city"],
    product_name: &["Product Name", "product-name", "Title", "title"],
};

/// Flipkart order reports: SKU first, FSN as fallback, customer state.
static FLIPKART: OrderAliases = OrderAliases {
    sku: &["SKU", "sku", "FSN", "fsn"],
    quantity: &["Quantity", "quantity", "Qty", "qty"],
    status: &["Order Status", "order_status", "Status", "status"],
    order_date: &["Order Date", "order_date", "Ordered On", "ordered_on"],
    location: &["Customer State", "customer_state", "State", "state"],
    product_name: &["Product", "product", "Product Name", "product_name"],
};

/// Meesho order reports: MSKU column first (already canonical).
static MEESHO: OrderAliases = OrderAliases {
    sku: &["MSKU", "msku", "SKU", "sku"],
    quantity: &["Quantity", "quantity", "Qty", "qty"],
    status: &["Reason for Credit Entry", "Status", "status"],
    order_date: &["Order Date", "order_date", "Created Date", "created_date"],
    location: &["Customer Location", "customer_location", "State", "City"],
    product_name: &["Product Name", "product_name", "Name"],
};

/// Broad alias union for generic and unknown tables.
static GENERIC: OrderAliases = OrderAliases {
    sku: &[
        "SKU",
        "sku",
        "MSKU",
        "msku",
        "Product Code",
        "product_code",
        "Item Code",
        "item_code",
    ],
    quantity: &[
        "Quantity", "quantity", "Qty", "qty", "Count", "count", "Amount", "amount",
    ],
    status: &[
        "Status",
        "status",
        "Order Status",
        "Reason for Credit Entry",
        "State",
    ],
    order_date: &["Order Date", "order_date", "Created Date", "created_date", "Date"],
    location: &["State", "state", "City", "city", "Location", "location"],
    product_name: &["Product Name", "product_name", "Product", "Name", "Title"],
};

/// The alias policy for a marketplace tag.
#[must_use]
pub fn order_aliases(marketplace: Marketplace) -> &'static OrderAliases {
    match marketplace {
        Marketplace::Amazon => &AMAZON,
        Marketplace::Flipkart => &FLIPKART,
        Marketplace::Meesho => &MEESHO,
        Marketplace::Generic | Marketplace::Unknown => &GENERIC,
    }
}
