//! Upgrade catalog module
//!
//! The catalog answers pricing questions for the simulation driver and the
//! strategies: what can be bought, what it costs right now, and how much
//! production it adds. Prices are allowed to change as a consequence of
//! purchases (the reference implementation inflates them geometrically), so
//! the driver works on its own clone and leaves the caller's catalog
//! untouched.
//!
//! # Catalog Interface
//!
//! All catalogs implement the `Catalog` trait:
//! ```rust
//! use clicker_simulator_core::catalog::Catalog;
//!
//! #[derive(Clone)]
//! struct FlatCatalog;
//!
//! impl Catalog for FlatCatalog {
//!     fn clone_catalog(&self) -> Box<dyn Catalog> {
//!         Box::new(self.clone())
//!     }
//!
//!     fn cost(&self, item: &str) -> Option<f64> {
//!         if item == "Widget" {
//!             Some(10.0)
//!         } else {
//!             None
//!         }
//!     }
//!
//!     fn cps_gain(&self, item: &str) -> Option<f64> {
//!         if item == "Widget" {
//!             Some(1.0)
//!         } else {
//!             None
//!         }
//!     }
//!
//!     fn apply_purchase(&mut self, _item: &str) {}
//!
//!     fn items(&self) -> Vec<String> {
//!         vec!["Widget".to_string()]
//!     }
//! }
//! ```
//!
//! The bundled implementation is [`UpgradeCatalog`], a validated item table
//! with geometric cost growth.

pub mod upgrades;

// Re-export commonly used types
pub use upgrades::{CatalogError, ItemSpec, UpgradeCatalog};

/// Pricing oracle for purchasable items.
///
/// Unknown item names answer `None` from the query methods and leave
/// `apply_purchase` a no-op; catalogs never panic on bad names. Implementors
/// must keep `cost` and `cps_gain` consistent: an item known to one is known
/// to the other.
pub trait Catalog: Send + Sync {
    /// Clone into a boxed trait object.
    ///
    /// The driver snapshots the catalog through this before a run so that
    /// purchase-driven price changes stay private to the run.
    fn clone_catalog(&self) -> Box<dyn Catalog>;

    /// Current cost of `item`, or `None` if the catalog does not sell it.
    fn cost(&self, item: &str) -> Option<f64>;

    /// Production gained by buying `item`, or `None` if unknown.
    fn cps_gain(&self, item: &str) -> Option<f64>;

    /// Record a completed purchase of `item`, repricing it if the catalog
    /// does so. Unknown items are ignored.
    fn apply_purchase(&mut self, item: &str);

    /// All purchasable item names, in a stable order.
    fn items(&self) -> Vec<String>;
}

impl Clone for Box<dyn Catalog> {
    fn clone(&self) -> Self {
        self.clone_catalog()
    }
}
