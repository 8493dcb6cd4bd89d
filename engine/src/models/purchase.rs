//! Purchase ledger records
//!
//! Every simulation run keeps an append-only history of purchases. The first
//! entry is always the sentinel "nothing bought at time zero"; each successful
//! purchase appends exactly one more entry, in chronological order (ties
//! broken by insertion order).

use serde::{Deserialize, Serialize};

/// One entry in the purchase history.
///
/// Records when an item was bought, what it cost, and the cumulative cookies
/// earned at that moment.
///
/// # Example
/// ```
/// use clicker_simulator_core::PurchaseRecord;
///
/// let first = PurchaseRecord::initial();
/// assert_eq!(first.time(), 0.0);
/// assert!(first.item().is_none());
///
/// let bought = PurchaseRecord::new(12.0, "Cursor", 15.0, 27.0);
/// assert_eq!(bought.item(), Some("Cursor"));
/// assert_eq!(bought.cost(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Simulated time (ticks) at which the purchase completed
    time: f64,

    /// Purchased item, `None` only for the initial sentinel entry
    item: Option<String>,

    /// Cookies paid for the item
    cost: f64,

    /// Cumulative cookies earned at the moment of purchase
    total_cookies: f64,
}

impl PurchaseRecord {
    /// Create a record for a completed purchase.
    pub fn new(time: f64, item: impl Into<String>, cost: f64, total_cookies: f64) -> Self {
        Self {
            time,
            item: Some(item.into()),
            cost,
            total_cookies,
        }
    }

    /// The sentinel entry every history starts with: nothing bought, time zero.
    pub fn initial() -> Self {
        Self {
            time: 0.0,
            item: None,
            cost: 0.0,
            total_cookies: 0.0,
        }
    }

    /// Simulated time at which the purchase completed
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Name of the purchased item (`None` for the sentinel entry)
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    /// Cookies paid
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Cumulative cookies earned at the moment of purchase
    pub fn total_cookies(&self) -> f64 {
        self.total_cookies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_sentinel() {
        let record = PurchaseRecord::initial();

        assert_eq!(record.time(), 0.0);
        assert_eq!(record.item(), None);
        assert_eq!(record.cost(), 0.0);
        assert_eq!(record.total_cookies(), 0.0);
    }

    #[test]
    fn test_new_purchase() {
        let record = PurchaseRecord::new(42.0, "Grandma", 100.0, 250.0);

        assert_eq!(record.time(), 42.0);
        assert_eq!(record.item(), Some("Grandma"));
        assert_eq!(record.cost(), 100.0);
        assert_eq!(record.total_cookies(), 250.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = PurchaseRecord::new(10.0, "Farm", 500.0, 510.0);

        let json = serde_json::to_string(&record).unwrap();
        let back: PurchaseRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back, record);
    }
}
