//! Validated upgrade catalog with geometric cost growth
//!
//! The standard pricing model: every item has a base cost and a production
//! gain, and each purchase multiplies that item's cost by the growth factor.
//! The table is validated at construction so the simulation core can assume
//! positive finite costs everywhere.
//!
//! # Critical Invariants
//!
//! 1. The table is never empty
//! 2. Every cost is positive and finite; every gain is non-negative and finite
//! 3. The growth factor is finite and at least 1.0, so repricing never makes
//!    an item cheaper
//!
//! Invariant 3 is what guarantees the driver loop terminates: repeated
//! purchases of the same item either drain the balance or keep costing at
//! least the original price, so waits eventually exceed the time remaining.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;

/// Cost multiplier applied after each purchase in the default catalog
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.15;

/// Errors raised when an upgrade table fails validation
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("upgrade table must contain at least one item")]
    EmptyTable,

    #[error("item {item:?} has cost {cost}, expected a positive finite value")]
    InvalidCost { item: String, cost: f64 },

    #[error("item {item:?} has cps gain {cps_gain}, expected a non-negative finite value")]
    InvalidCpsGain { item: String, cps_gain: f64 },

    #[error("growth factor {0} must be finite and at least 1.0")]
    InvalidGrowthFactor(f64),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pricing entry for one purchasable item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    /// Current cost in cookies
    pub cost: f64,

    /// Production added per purchase, in cookies per tick
    pub cps_gain: f64,
}

/// Item table with geometric cost inflation.
///
/// Items are keyed by name in a sorted map, so [`Catalog::items`] and every
/// strategy scan see a stable alphabetical order. `Default` builds the
/// classic ten-item table with a 1.15 growth factor.
///
/// # Example
/// ```
/// use clicker_simulator_core::catalog::{Catalog, UpgradeCatalog};
///
/// let mut catalog = UpgradeCatalog::default();
/// assert_eq!(catalog.cost("Cursor"), Some(15.0));
/// assert_eq!(catalog.cps_gain("Cursor"), Some(0.1));
///
/// catalog.apply_purchase("Cursor");
/// assert_eq!(catalog.cost("Cursor"), Some(15.0 * 1.15));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeCatalog {
    /// Item name to pricing entry, alphabetically ordered
    items: BTreeMap<String, ItemSpec>,

    /// Cost multiplier applied to an item after each purchase
    growth_factor: f64,
}

impl UpgradeCatalog {
    /// Build a catalog from an item table and growth factor.
    ///
    /// # Errors
    ///
    /// Rejects empty tables, non-positive or non-finite costs, negative or
    /// non-finite gains, and growth factors below 1.0 or non-finite.
    pub fn new(items: BTreeMap<String, ItemSpec>, growth_factor: f64) -> Result<Self, CatalogError> {
        Self::validate(&items, growth_factor)?;
        Ok(Self {
            items,
            growth_factor,
        })
    }

    /// Cost multiplier applied after each purchase
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Parse and validate a catalog from its JSON representation.
    ///
    /// # Example
    /// ```
    /// use clicker_simulator_core::catalog::{Catalog, UpgradeCatalog};
    ///
    /// let catalog = UpgradeCatalog::from_json(
    ///     r#"{
    ///         "items": { "Widget": { "cost": 10.0, "cps_gain": 1.0 } },
    ///         "growth_factor": 2.0
    ///     }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(catalog.cost("Widget"), Some(10.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, or the same
    /// validation errors as [`new`](Self::new) for well-formed tables with
    /// bad values.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        Self::validate(&catalog.items, catalog.growth_factor)?;
        Ok(catalog)
    }

    /// Serialize the catalog to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(items: &BTreeMap<String, ItemSpec>, growth_factor: f64) -> Result<(), CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyTable);
        }
        for (name, spec) in items {
            if !spec.cost.is_finite() || spec.cost <= 0.0 {
                return Err(CatalogError::InvalidCost {
                    item: name.clone(),
                    cost: spec.cost,
                });
            }
            if !spec.cps_gain.is_finite() || spec.cps_gain < 0.0 {
                return Err(CatalogError::InvalidCpsGain {
                    item: name.clone(),
                    cps_gain: spec.cps_gain,
                });
            }
        }
        if !growth_factor.is_finite() || growth_factor < 1.0 {
            return Err(CatalogError::InvalidGrowthFactor(growth_factor));
        }
        Ok(())
    }
}

impl Default for UpgradeCatalog {
    /// The classic ten-item table, from cheap trickle to endgame sinks.
    fn default() -> Self {
        fn entry(name: &str, cost: f64, cps_gain: f64) -> (String, ItemSpec) {
            (name.to_string(), ItemSpec { cost, cps_gain })
        }

        let items = BTreeMap::from([
            entry("Cursor", 15.0, 0.1),
            entry("Grandma", 100.0, 0.5),
            entry("Farm", 500.0, 4.0),
            entry("Factory", 3000.0, 10.0),
            entry("Mine", 10000.0, 40.0),
            entry("Shipment", 40000.0, 100.0),
            entry("Alchemy Lab", 200000.0, 400.0),
            entry("Portal", 1666666.0, 6666.0),
            entry("Time Machine", 123456789.0, 98765.0),
            entry("Antimatter Condenser", 3999999999.0, 999999.0),
        ]);

        // Hardcoded table passes validation by construction
        Self {
            items,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl Catalog for UpgradeCatalog {
    fn clone_catalog(&self) -> Box<dyn Catalog> {
        Box::new(self.clone())
    }

    fn cost(&self, item: &str) -> Option<f64> {
        self.items.get(item).map(|spec| spec.cost)
    }

    fn cps_gain(&self, item: &str) -> Option<f64> {
        self.items.get(item).map(|spec| spec.cps_gain)
    }

    fn apply_purchase(&mut self, item: &str) {
        if let Some(spec) = self.items.get_mut(item) {
            spec.cost *= self.growth_factor;
        }
    }

    fn items(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_item_table(cost: f64, cps_gain: f64) -> BTreeMap<String, ItemSpec> {
        BTreeMap::from([("Widget".to_string(), ItemSpec { cost, cps_gain })])
    }

    #[test]
    fn test_default_table_contents() {
        let catalog = UpgradeCatalog::default();

        assert_eq!(catalog.items().len(), 10);
        assert_eq!(catalog.growth_factor(), DEFAULT_GROWTH_FACTOR);
        assert_eq!(catalog.cost("Cursor"), Some(15.0));
        assert_eq!(catalog.cps_gain("Grandma"), Some(0.5));
        assert_eq!(catalog.cost("Antimatter Condenser"), Some(3999999999.0));
    }

    #[test]
    fn test_items_are_alphabetical() {
        let catalog = UpgradeCatalog::default();
        let names = catalog.items();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names[0], "Alchemy Lab");
    }

    #[test]
    fn test_unknown_item_queries_return_none() {
        let catalog = UpgradeCatalog::default();

        assert_eq!(catalog.cost("Moonbase"), None);
        assert_eq!(catalog.cps_gain("Moonbase"), None);
    }

    #[test]
    fn test_apply_purchase_inflates_only_that_item() {
        let mut catalog = UpgradeCatalog::default();

        catalog.apply_purchase("Cursor");
        assert_eq!(catalog.cost("Cursor"), Some(15.0 * 1.15));
        assert_eq!(catalog.cost("Grandma"), Some(100.0));

        catalog.apply_purchase("Cursor");
        assert_eq!(catalog.cost("Cursor"), Some(15.0 * 1.15 * 1.15));
    }

    #[test]
    fn test_apply_purchase_unknown_item_is_noop() {
        let mut catalog = UpgradeCatalog::default();
        let before: Vec<Option<f64>> = catalog.items().iter().map(|i| catalog.cost(i)).collect();

        catalog.apply_purchase("Moonbase");

        let after: Vec<Option<f64>> = catalog.items().iter().map(|i| catalog.cost(i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_rejects_empty_table() {
        let result = UpgradeCatalog::new(BTreeMap::new(), 1.15);
        assert!(matches!(result, Err(CatalogError::EmptyTable)));
    }

    #[test]
    fn test_rejects_bad_costs() {
        for cost in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = UpgradeCatalog::new(one_item_table(cost, 1.0), 1.15);
            assert!(matches!(result, Err(CatalogError::InvalidCost { .. })));
        }
    }

    #[test]
    fn test_rejects_bad_gains() {
        for cps_gain in [-0.5, f64::NAN, f64::INFINITY] {
            let result = UpgradeCatalog::new(one_item_table(10.0, cps_gain), 1.15);
            assert!(matches!(result, Err(CatalogError::InvalidCpsGain { .. })));
        }
    }

    #[test]
    fn test_rejects_bad_growth_factors() {
        for growth in [0.99, 0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = UpgradeCatalog::new(one_item_table(10.0, 1.0), growth);
            assert!(matches!(
                result,
                Err(CatalogError::InvalidGrowthFactor(_))
            ));
        }
    }

    #[test]
    fn test_accepts_flat_pricing() {
        // Growth of exactly 1.0 means prices never change
        let mut catalog = UpgradeCatalog::new(one_item_table(10.0, 1.0), 1.0).unwrap();

        catalog.apply_purchase("Widget");
        assert_eq!(catalog.cost("Widget"), Some(10.0));
    }

    #[test]
    fn test_zero_gain_is_allowed() {
        let catalog = UpgradeCatalog::new(one_item_table(10.0, 0.0), 1.15).unwrap();
        assert_eq!(catalog.cps_gain("Widget"), Some(0.0));
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = UpgradeCatalog::default();

        let json = catalog.to_json().unwrap();
        let back = UpgradeCatalog::from_json(&json).unwrap();

        assert_eq!(back.growth_factor(), catalog.growth_factor());
        assert_eq!(back.items(), catalog.items());
        assert_eq!(back.cost("Portal"), catalog.cost("Portal"));
    }

    #[test]
    fn test_from_json_validates_values() {
        let json = r#"{
            "items": { "Widget": { "cost": -5.0, "cps_gain": 1.0 } },
            "growth_factor": 1.15
        }"#;

        let result = UpgradeCatalog::from_json(json);
        assert!(matches!(result, Err(CatalogError::InvalidCost { .. })));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = UpgradeCatalog::from_json("not json at all");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_clone_catalog_is_independent() {
        let original = UpgradeCatalog::default();
        let mut cloned = original.clone_catalog();

        cloned.apply_purchase("Cursor");

        assert_eq!(cloned.cost("Cursor"), Some(15.0 * 1.15));
        assert_eq!(original.cost("Cursor"), Some(15.0));
    }
}
