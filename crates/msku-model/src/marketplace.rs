//! Marketplace tags assigned by the order-table classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The marketplace schema an order table was produced by.
///
/// `Generic` covers tables that expose a plain SKU column without any
/// marketplace-specific markers; `Unknown` is the fallback when no SKU
/// column is recognizable at all. Both are processed with the same broad
/// alias union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    Meesho,
    Amazon,
    Flipkart,
    Generic,
    Unknown,
}

impl Marketplace {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meesho => "meesho",
            Self::Amazon => "amazon",
            Self::Flipkart => "flipkart",
            Self::Generic => "generic",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
