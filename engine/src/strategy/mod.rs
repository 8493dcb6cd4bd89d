//! Purchase strategy module
//!
//! A strategy is the decision-maker of a simulation run: at every purchase
//! boundary the driver asks it which item to buy next. Strategies see a
//! read-only [`Observation`] of the run and answer with an item name, or
//! `None` to stop buying for the rest of the run.
//!
//! # Strategy Interface
//!
//! All strategies implement the `Strategy` trait:
//! ```rust
//! use clicker_simulator_core::catalog::Catalog;
//! use clicker_simulator_core::strategy::{Observation, Strategy};
//!
//! struct FirstListed;
//!
//! impl Strategy for FirstListed {
//!     fn propose(&self, observation: &Observation<'_>) -> Option<String> {
//!         observation.catalog.items().into_iter().next()
//!     }
//! }
//! ```
//!
//! Proposals are advisory. The driver checks that the named item exists and
//! can be afforded within the time remaining; an infeasible proposal ends
//! the run instead of erroring. Strategies are therefore free to name items
//! they cannot yet afford (see [`BestEfficiencyStrategy`]).
//!
//! # Reference Strategies
//!
//! 1. **NeverBuy**: always passes; measures passive production
//! 2. **Fixed**: always names one configured item
//! 3. **Cheapest**: cheapest item reachable before time runs out
//! 4. **MostExpensive**: priciest item reachable before time runs out
//! 5. **BestEfficiency**: best cps-per-cookie ratio, reachable or not
//!
//! Strategies are selected at runtime through [`StrategyConfig`], which
//! doubles as the command-line format via its `FromStr` implementation.

use std::str::FromStr;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::purchase::PurchaseRecord;

pub mod cheapest;
pub mod efficiency;
pub mod expensive;
pub mod fixed;
pub mod never;

// Re-export the reference strategies
pub use cheapest::CheapestStrategy;
pub use efficiency::BestEfficiencyStrategy;
pub use expensive::MostExpensiveStrategy;
pub use fixed::FixedItemStrategy;
pub use never::NeverBuyStrategy;

/// Read-only snapshot handed to a strategy at a purchase boundary.
///
/// Bundles everything a decision can legitimately depend on. The same
/// snapshot shape is used for both queries the driver makes per iteration,
/// so a pure strategy answers both identically.
///
/// # Example
/// ```
/// use clicker_simulator_core::catalog::UpgradeCatalog;
/// use clicker_simulator_core::strategy::Observation;
///
/// let catalog = UpgradeCatalog::default();
/// let observation = Observation {
///     cookies: 10.0,
///     cps: 2.0,
///     history: &[],
///     time_left: 5.0,
///     catalog: &catalog,
/// };
/// assert_eq!(observation.reachable_cookies(), 20.0);
/// ```
pub struct Observation<'a> {
    /// Cookies currently available to spend
    pub cookies: f64,

    /// Current production rate in cookies per tick
    pub cps: f64,

    /// Purchase history so far, sentinel entry first
    pub history: &'a [PurchaseRecord],

    /// Simulated time remaining before the run ends
    pub time_left: f64,

    /// Pricing oracle for the run (already reflects past purchases)
    pub catalog: &'a dyn Catalog,
}

impl Observation<'_> {
    /// Cookies that will be available if the rest of the run is spent
    /// waiting: current balance plus production over the time remaining.
    ///
    /// The affordability horizon used by the budget-aware strategies.
    pub fn reachable_cookies(&self) -> f64 {
        self.cookies + self.cps * self.time_left
    }
}

/// Decision-maker queried by the simulation driver.
///
/// Implementations should be pure functions of the observation: the driver
/// queries twice per purchase (once to decide whether to keep going, once
/// immediately before acting) and acts on the second answer.
pub trait Strategy: Send + Sync {
    /// Name the next item to buy, or `None` to stop buying.
    ///
    /// # Returns
    ///
    /// * `Some(name)` - buy this item next, waiting for funds if needed
    /// * `None` - make no further purchases; the run coasts to its end
    fn propose(&self, observation: &Observation<'_>) -> Option<String>;
}

/// Runtime-selectable strategy configuration.
///
/// [`build`](Self::build) turns a configuration into a boxed strategy via
/// the factory pattern, so callers hold a `Box<dyn Strategy>` and never
/// match on the variant themselves.
///
/// # Example
/// ```
/// use clicker_simulator_core::strategy::StrategyConfig;
///
/// let config: StrategyConfig = "fixed:Cursor".parse().unwrap();
/// assert_eq!(
///     config,
///     StrategyConfig::Fixed { item: "Cursor".to_string() }
/// );
///
/// let strategy = config.build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyConfig {
    /// Always propose one configured item
    Fixed { item: String },

    /// Never propose anything
    NeverBuy,

    /// Cheapest reachable item
    Cheapest,

    /// Most expensive reachable item
    MostExpensive,

    /// Best cps-per-cookie ratio, ignoring affordability
    BestEfficiency,
}

impl StrategyConfig {
    /// Instantiate the configured strategy.
    pub fn build(&self) -> Box<dyn Strategy> {
        match self {
            StrategyConfig::Fixed { item } => Box::new(FixedItemStrategy::new(item.clone())),
            StrategyConfig::NeverBuy => Box::new(NeverBuyStrategy),
            StrategyConfig::Cheapest => Box::new(CheapestStrategy),
            StrategyConfig::MostExpensive => Box::new(MostExpensiveStrategy),
            StrategyConfig::BestEfficiency => Box::new(BestEfficiencyStrategy),
        }
    }
}

/// Error returned when a strategy name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}, expected never, cheapest, expensive, efficiency, or fixed:<item>")]
pub struct ParseStrategyError(String);

impl FromStr for StrategyConfig {
    type Err = ParseStrategyError;

    /// Parse a command-line strategy name.
    ///
    /// Accepted forms: `never`, `cheapest`, `expensive`, `efficiency`, and
    /// `fixed:<item>` where `<item>` is a non-empty catalog item name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(item) = s.strip_prefix("fixed:") {
            if item.is_empty() {
                return Err(ParseStrategyError(s.to_string()));
            }
            return Ok(StrategyConfig::Fixed {
                item: item.to_string(),
            });
        }

        match s {
            "never" => Ok(StrategyConfig::NeverBuy),
            "cheapest" => Ok(StrategyConfig::Cheapest),
            "expensive" => Ok(StrategyConfig::MostExpensive),
            "efficiency" => Ok(StrategyConfig::BestEfficiency),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
