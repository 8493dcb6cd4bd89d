//! Never-buy strategy
//!
//! Simplest baseline strategy: buy nothing, ever.
//!
//! # Behavior
//!
//! - Always answers `None`, so the driver ends the run on its first query
//! - The final state is pure passive production: `duration` cookies at the
//!   starting rate of 1.0 per tick
//!
//! # Use Case
//!
//! - Baseline for comparing purchase strategies against doing nothing
//! - Testing the driver's no-purchase path

use super::{Observation, Strategy};

/// Strategy that never proposes a purchase
///
/// # Example
///
/// ```
/// use clicker_simulator_core::catalog::UpgradeCatalog;
/// use clicker_simulator_core::strategy::{NeverBuyStrategy, Observation, Strategy};
///
/// let catalog = UpgradeCatalog::default();
/// let observation = Observation {
///     cookies: 1_000_000.0,
///     cps: 1.0,
///     history: &[],
///     time_left: 1_000.0,
///     catalog: &catalog,
/// };
///
/// let strategy = NeverBuyStrategy;
/// assert_eq!(strategy.propose(&observation), None);
/// ```
pub struct NeverBuyStrategy;

impl NeverBuyStrategy {
    /// Create new never-buy strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for NeverBuyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for NeverBuyStrategy {
    fn propose(&self, _observation: &Observation<'_>) -> Option<String> {
        None
    }
}
