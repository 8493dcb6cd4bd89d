//! Simulation driver module
//!
//! Entry point for running one clicker game end to end: see
//! [`simulate`](driver::simulate).

pub mod driver;

// Re-export the main entry point
pub use driver::simulate;
