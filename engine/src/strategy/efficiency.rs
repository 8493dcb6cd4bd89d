//! Best-efficiency strategy
//!
//! Proposes the item with the best production gained per cookie spent.
//!
//! # Behavior
//!
//! - Ranks every item by `cps_gain / cost` at current prices and proposes
//!   the best ratio; ties go to the first item in catalog order
//! - Deliberately ignores affordability: a proposal out of reach ends the
//!   run at the driver's feasibility gate rather than falling back to a
//!   worse ratio
//! - Answers `None` only for an empty catalog
//!
//! Rankings shift over a run as purchases inflate individual costs, so the
//! proposal migrates across the table instead of locking onto one item.
//!
//! # Use Case
//!
//! - Long-horizon runs: consistently strong total production

use super::{Observation, Strategy};

/// Strategy that proposes the best cps-per-cookie ratio
///
/// # Example
///
/// ```
/// use clicker_simulator_core::catalog::UpgradeCatalog;
/// use clicker_simulator_core::strategy::{BestEfficiencyStrategy, Observation, Strategy};
///
/// let catalog = UpgradeCatalog::default();
/// let observation = Observation {
///     cookies: 0.0,
///     cps: 1.0,
///     history: &[],
///     time_left: 10.0,
///     catalog: &catalog,
/// };
///
/// // Farm yields 4.0 cps for 500 cookies, the best ratio in the default
/// // table, and is proposed even though it is far out of reach here
/// let strategy = BestEfficiencyStrategy;
/// assert_eq!(strategy.propose(&observation), Some("Farm".to_string()));
/// ```
pub struct BestEfficiencyStrategy;

impl BestEfficiencyStrategy {
    /// Create new best-efficiency strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for BestEfficiencyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BestEfficiencyStrategy {
    fn propose(&self, observation: &Observation<'_>) -> Option<String> {
        let mut best: Option<(String, f64)> = None;

        for item in observation.catalog.items() {
            let cost = match observation.catalog.cost(&item) {
                Some(cost) => cost,
                None => continue,
            };
            let gain = match observation.catalog.cps_gain(&item) {
                Some(gain) => gain,
                None => continue,
            };
            let efficiency = gain / cost;
            let replace = match &best {
                Some((_, best_efficiency)) => efficiency > *best_efficiency,
                None => true,
            };
            if replace {
                best = Some((item, efficiency));
            }
        }

        best.map(|(item, _)| item)
    }
}
