//! Most-expensive-item strategy
//!
//! Proposes the priciest item that can still be afforded before time runs
//! out.
//!
//! # Behavior
//!
//! - Budget is [`Observation::reachable_cookies`], the same horizon the
//!   cheapest strategy uses
//! - Among items within budget, picks the highest cost; ties go to the
//!   first item in catalog order
//! - Answers `None` once nothing is reachable, ending the run
//!
//! # Use Case
//!
//! - Big-ticket runs: spends each saving cycle on the largest unlock

use super::{Observation, Strategy};

/// Strategy that proposes the most expensive reachable item
///
/// # Example
///
/// ```
/// use clicker_simulator_core::catalog::UpgradeCatalog;
/// use clicker_simulator_core::strategy::{MostExpensiveStrategy, Observation, Strategy};
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
/// // Cursor (15) and Grandma (100) are reachable; Grandma costs more
/// let strategy = MostExpensiveStrategy;
/// assert_eq!(strategy.propose(&observation), Some("Grandma".to_string()));
/// ```
pub struct MostExpensiveStrategy;

impl MostExpensiveStrategy {
    /// Create new most-expensive-item strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for MostExpensiveStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MostExpensiveStrategy {
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
                Some((_, best_cost)) => cost > *best_cost,
                None => true,
            };
            if replace {
                best = Some((item, cost));
            }
        }

        best.map(|(item, _)| item)
    }
}
