//! Fulfillment-status gate.

/// Statuses that count as a completed, stock-affecting sale.
const POSITIVE_STATUSES: &[&str] = &[
    "delivered",
    "shipped",
    "ready_to_ship",
    "dispatched",
    "completed",
    "fulfilled",
    "out_for_delivery",
    "success",
    "confirmed",
    "processing",
    "packed",
    "in_transit",
];

/// Statuses that veto a sale even when a positive keyword also appears.
const NEGATIVE_STATUSES: &[&str] = &["cancelled", "returned", "refunded", "rejected", "failed"];

/// Whether an order row's status counts as a completed sale.
///
/// Case-insensitive substring matching against the fixed keyword sets.
/// No status means no sale. A negative match always vetoes.
#[must_use]
pub fn should_process(status: Option<&str>) -> bool {
    let Some(status) = status else {
        return false;
    };
    let folded = status.to_lowercase();
    let positive = POSITIVE_STATUSES.iter().any(|key| folded.contains(key));
    let negative = NEGATIVE_STATUSES.iter().any(|key| folded.contains(key));
    positive && !negative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_statuses_pass() {
        assert!(should_process(Some("Delivered")));
        assert!(should_process(Some("READY_TO_SHIP")));
        assert!(should_process(Some("Out for delivery - out_for_delivery")));
    }

    #[test]
    fn negative_statuses_fail() {
        assert!(!should_process(Some("Cancelled")));
        assert!(!should_process(Some("Returned to seller")));
    }

    #[test]
    fn negative_vetoes_positive() {
        assert!(!should_process(Some("cancelled - delivered")));
        assert!(!should_process(Some("Shipped then REFUNDED")));
    }

    #[test]
    fn missing_or_unrecognized_status_fails() {
        assert!(!should_process(None));
        assert!(!should_process(Some("pending")));
        assert!(!should_process(Some("")));
    }
}
