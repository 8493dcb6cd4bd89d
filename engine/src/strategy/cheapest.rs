//! Cheapest-item strategy
//!
//! Proposes the cheapest item that can still be afforded before time runs
//! out.
//!
//! # Behavior
//!
//! - Budget is [`Observation::reachable_cookies`]: current balance plus all
//!   production left in the run
//! - Among items within budget, picks the lowest cost; ties go to the first
//!   item in catalog order
//! - Answers `None` once nothing is reachable, ending the run
//!
//! # Use Case
//!
//! - High purchase volume: maximizes the number of purchases per run

use super::{Observation, Strategy};

/// Strategy that proposes the cheapest reachable item
///
/// # Example
///
/// ```
/// use clicker_simulator_core::catalog::UpgradeCatalog;
/// use clicker_simulator_core::strategy::{CheapestStrategy, Observation, Strategy};
///
/// let catalog = UpgradeCatalog::default();
/// let observation = Observation {
///     cookies: 0.0,
///     cps: 1.0,
///     history: &[],
///     time_left: 200.0,
///     catalog: &catalog,
/// };
///
/// // Both Cursor (15) and Grandma (100) are reachable; Cursor is cheaper
/// let strategy = CheapestStrategy;
/// assert_eq!(strategy.propose(&observation), Some("Cursor".to_string()));
/// ```
pub struct CheapestStrategy;

impl CheapestStrategy {
    /// Create new cheapest-item strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheapestStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for CheapestStrategy {
    fn propose(&self, observation: &Observation<'_>) -> Option<String> {
        let budget = observation.reachable_cookies();
        let mut best: Option<(String, f64)> = None;

        for item in observation.catalog.items() {
            let cost = match observation.catalog.cost(&item) {
                Some(cost) => cost,
                None => continue,
            };
            if cost > budget {
                continue;
            }
            let replace = match &best {
                Some((_, best_cost)) => cost < *best_cost,
                None => true,
            };
            if replace {
                best = Some((item, cost));
            }
        }

        best.map(|(item, _)| item)
    }
}
