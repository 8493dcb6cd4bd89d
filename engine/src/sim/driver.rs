//! Simulation driver
//!
//! Runs one clicker game from time zero to a fixed horizon under a purchase
//! strategy. The driver owns the event loop; state mutation stays in
//! [`ClickerState`] and pricing stays in the [`Catalog`].
//!
//! # Loop Structure
//!
//! Each iteration handles exactly one purchase:
//!
//! 1. Ask the strategy what to buy next
//! 2. Gate the proposal: the item must exist and be affordable before the
//!    horizon, otherwise the run ends
//! 3. Ask the strategy again immediately before acting, and act on that
//!    answer
//! 4. Wait until the item is affordable, buy it, and reprice the catalog
//!
//! Whichever way the loop ends, a final wait coasts the clock to exactly
//! the requested horizon.
//!
//! # Critical Invariants
//!
//! 1. For strategies that answer as a pure function of the observation,
//!    the returned state has `elapsed_time() == duration` for any
//!    non-negative finite horizon
//! 2. The caller's catalog is never modified; repricing happens on a
//!    private clone
//! 3. Waits are integral, so purchases land on whole ticks
//! 4. A `None` or unknown-item answer from either query ends the run;
//!    nothing panics on a bad proposal

use crate::catalog::Catalog;
use crate::models::state::ClickerState;
use crate::strategy::{Observation, Strategy};

/// Snapshot the queryable state for one strategy call.
fn observe<'a>(
    state: &'a ClickerState,
    catalog: &'a dyn Catalog,
    time_left: f64,
) -> Observation<'a> {
    Observation {
        cookies: state.cookies(),
        cps: state.cps(),
        history: state.history(),
        time_left,
        catalog,
    }
}

/// Run one game to the horizon and return the final state.
///
/// The strategy is consulted twice per purchase: once to decide whether the
/// run continues, and once immediately before buying. Time-aware strategies
/// may change their answer between the two; the purchase executes whatever
/// the second query names. The second answer skips the affordability gate,
/// so a strategy that switches to a pricier item extends the run past the
/// horizon check it just passed.
///
/// # Arguments
///
/// * `catalog` - Pricing for the run; cloned internally, never modified
/// * `duration` - Horizon in ticks. Zero is valid (strategies are still
///   consulted once); negative or NaN horizons return the initial state
/// * `strategy` - Purchase decision-maker
///
/// # Example
/// ```
/// use clicker_simulator_core::catalog::UpgradeCatalog;
/// use clicker_simulator_core::sim::simulate;
/// use clicker_simulator_core::strategy::NeverBuyStrategy;
///
/// let catalog = UpgradeCatalog::default();
/// let state = simulate(&catalog, 100.0, &NeverBuyStrategy);
///
/// assert_eq!(state.elapsed_time(), 100.0);
/// assert_eq!(state.cookies(), 100.0);
/// assert_eq!(state.history().len(), 1); // sentinel only, nothing bought
/// ```
pub fn simulate(catalog: &dyn Catalog, duration: f64, strategy: &dyn Strategy) -> ClickerState {
    // Private pricing table so purchase-driven repricing stays in this run
    let mut catalog = catalog.clone_catalog();
    let mut state = ClickerState::new();

    while state.elapsed_time() <= duration {
        let time_left = duration - state.elapsed_time();

        // STEP 1: PROPOSE
        // A None answer means the strategy is done buying for good
        let proposal = strategy.propose(&observe(&state, catalog.as_ref(), time_left));
        let item = match proposal {
            Some(item) => item,
            None => break,
        };

        // STEP 2: FEASIBILITY GATE
        // Unknown items and purchases that cannot complete before the
        // horizon end the run instead of erroring
        let cost = match catalog.cost(&item) {
            Some(cost) => cost,
            None => break,
        };
        if state.time_until(cost) > time_left {
            break;
        }

        // STEP 3: CONFIRM
        // Second query at the same observation point; the purchase executes
        // whatever this answer names
        let proposal = strategy.propose(&observe(&state, catalog.as_ref(), time_left));
        let item = match proposal {
            Some(item) => item,
            None => break,
        };
        let cost = match catalog.cost(&item) {
            Some(cost) => cost,
            None => break,
        };
        let cps_gain = match catalog.cps_gain(&item) {
            Some(cps_gain) => cps_gain,
            None => break,
        };

        // STEP 4: WAIT, BUY, REPRICE
        // The wait makes the item affordable, so the buy cannot be rejected
        let wait_needed = state.time_until(cost);
        state.wait(wait_needed);
        state.buy(&item, cost, cps_gain);
        catalog.apply_purchase(&item);
    }

    // Coast to the horizon; a no-op when the loop already reached it
    state.wait(duration - state.elapsed_time());

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, UpgradeCatalog};
    use crate::strategy::{FixedItemStrategy, NeverBuyStrategy};

    #[test]
    fn test_never_buy_coasts_to_horizon() {
        let catalog = UpgradeCatalog::default();
        let state = simulate(&catalog, 50.0, &NeverBuyStrategy);

        assert_eq!(state.elapsed_time(), 50.0);
        assert_eq!(state.cookies(), 50.0);
        assert_eq!(state.total_cookies(), 50.0);
        assert_eq!(state.cps(), 1.0);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_single_purchase_trace() {
        let catalog = UpgradeCatalog::default();
        let strategy = FixedItemStrategy::new("Cursor");
        let state = simulate(&catalog, 16.0, &strategy);

        // Cursor costs 15 at 1.0 cps: bought at t=15, then the second
        // Cursor (17.25 at 1.1 cps, 16 ticks away) no longer fits
        assert_eq!(state.elapsed_time(), 16.0);
        assert_eq!(state.history().len(), 2);

        let record = &state.history()[1];
        assert_eq!(record.time(), 15.0);
        assert_eq!(record.item(), Some("Cursor"));
        assert_eq!(record.cost(), 15.0);
        assert_eq!(record.total_cookies(), 15.0);

        assert_eq!(state.cps(), 1.1);
        assert!((state.cookies() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_negative_horizon_returns_initial_state() {
        let catalog = UpgradeCatalog::default();
        let state = simulate(&catalog, -5.0, &NeverBuyStrategy);

        assert_eq!(state.elapsed_time(), 0.0);
        assert_eq!(state.cookies(), 0.0);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_callers_catalog_is_untouched() {
        let catalog = UpgradeCatalog::default();
        let strategy = FixedItemStrategy::new("Cursor");
        let state = simulate(&catalog, 100.0, &strategy);

        assert!(state.history().len() > 2);
        assert_eq!(catalog.cost("Cursor"), Some(15.0));
    }
}
