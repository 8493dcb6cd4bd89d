//! Clicker Simulator Core - Rust Engine
//!
//! Deterministic discrete-event simulator for the cookie-clicker resource
//! game: accumulate cookies at a rate, spend them on items that raise the
//! rate, and compare purchase strategies over a fixed horizon.
//!
//! # Architecture
//!
//! - **models**: Domain types (ClickerState, PurchaseRecord)
//! - **catalog**: Pricing interface and the standard upgrade table
//! - **strategy**: Purchase strategies (trait plus five references)
//! - **sim**: The simulation driver loop
//! - **bribes**: Companion integer-money bribe simulator
//!
//! # Critical Invariants
//!
//! 1. Runs are fully deterministic in (catalog, duration, strategy)
//! 2. Under a pure strategy, elapsed time ends exactly at the requested
//!    horizon
//! 3. Invalid operations are silent no-ops or loop exits, never panics

// Module declarations
pub mod bribes;
pub mod catalog;
pub mod models;
pub mod sim;
pub mod strategy;

// Re-exports for convenience
pub use bribes::{simulate_bribes, simulate_bribes_with, BribeConfig};
pub use catalog::{Catalog, CatalogError, ItemSpec, UpgradeCatalog};
pub use models::{purchase::PurchaseRecord, state::ClickerState};
pub use sim::simulate;
pub use strategy::{
    BestEfficiencyStrategy, CheapestStrategy, FixedItemStrategy, MostExpensiveStrategy,
    NeverBuyStrategy, Observation, ParseStrategyError, Strategy, StrategyConfig,
};
