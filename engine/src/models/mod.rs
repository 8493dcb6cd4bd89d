//! Domain models
//!
//! Core data structures shared across the simulator:
//! - `ClickerState`: full observable game state for one run
//! - `PurchaseRecord`: one entry in the purchase history

pub mod purchase;
pub mod state;

// Re-export commonly used types
pub use purchase::PurchaseRecord;
pub use state::ClickerState;
