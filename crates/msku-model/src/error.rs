use thiserror::Error;

/// Failures surfaced by the reconciliation core.
///
/// Row-level problems (missing fields, unmapped SKUs, empty combos) are
/// never errors; they are folded into counts and diagnostic lists so a
/// malformed row cannot abort a batch.
#[derive(Debug, Error)]
pub enum ReconError {
    /// The tabular text could not be tokenized. Aborts that file only.
    #[error("parse failure: {0}")]
    Parse(String),
    /// No master SKU mapping is loaded and none was supplied with the
    /// request. Checked before any order file is touched.
    #[error("no master SKU mapping loaded")]
    MissingMasterData,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReconError {
    /// Short machine-readable reason code for this failure.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse_failure",
            Self::MissingMasterData => "missing_master_data",
            Self::Io(_) => "io_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReconError>;
