//! Fixed-item strategy
//!
//! Always proposes one configured item, regardless of price or funds.
//!
//! # Behavior
//!
//! - Answers the configured item name on every query
//! - Does not check affordability; the driver's feasibility gate ends the
//!   run once the item (at its inflated price) is out of reach
//! - A name the catalog does not sell ends the run on the first query
//!
//! # Use Case
//!
//! - Single-item runs ("all Cursors") for cost-curve analysis
//! - Exercising the driver's handling of infeasible and unknown proposals

use super::{Observation, Strategy};

/// Strategy that always proposes the same item
///
/// # Example
///
/// ```
/// use clicker_simulator_core::catalog::UpgradeCatalog;
/// use clicker_simulator_core::strategy::{FixedItemStrategy, Observation, Strategy};
///
/// let catalog = UpgradeCatalog::default();
/// let observation = Observation {
///     cookies: 0.0,
///     cps: 1.0,
///     history: &[],
///     time_left: 100.0,
///     catalog: &catalog,
/// };
///
/// let strategy = FixedItemStrategy::new("Cursor");
/// assert_eq!(strategy.propose(&observation), Some("Cursor".to_string()));
/// ```
pub struct FixedItemStrategy {
    /// Item proposed on every query
    item: String,
}

impl FixedItemStrategy {
    /// Create a strategy that always proposes `item`.
    pub fn new(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }

    /// The configured item name
    pub fn item(&self) -> &str {
        &self.item
    }
}

impl Strategy for FixedItemStrategy {
    fn propose(&self, _observation: &Observation<'_>) -> Option<String> {
        Some(self.item.clone())
    }
}
