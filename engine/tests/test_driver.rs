//! Integration tests for the simulation driver
//!
//! Runs whole games through `simulate` and checks the final state against
//! hand-computed traces, including the edge cases around infeasible
//! proposals and the horizon boundary.

use std::sync::atomic::{AtomicUsize, Ordering};

use clicker_simulator_core::catalog::{Catalog, UpgradeCatalog};
use clicker_simulator_core::strategy::{
    FixedItemStrategy, NeverBuyStrategy, Observation, Strategy,
};
use clicker_simulator_core::{simulate, PurchaseRecord};

#[test]
fn test_never_buy_runs_to_horizon() {
    let catalog = UpgradeCatalog::default();
    let state = simulate(&catalog, 1000.0, &NeverBuyStrategy);

    assert_eq!(state.elapsed_time(), 1000.0);
    assert_eq!(state.cookies(), 1000.0);
    assert_eq!(state.total_cookies(), 1000.0);
    assert_eq!(state.cps(), 1.0);
    assert_eq!(state.history(), &[PurchaseRecord::initial()]);
}

#[test]
fn test_zero_horizon_with_eager_strategy() {
    // The strategy is consulted, but the 15-tick save for a Cursor does
    // not fit in a zero-length run
    let catalog = UpgradeCatalog::default();
    let strategy = FixedItemStrategy::new("Cursor");
    let state = simulate(&catalog, 0.0, &strategy);

    assert_eq!(state.elapsed_time(), 0.0);
    assert_eq!(state.cookies(), 0.0);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_fixed_strategy_two_purchase_trace() {
    // Cursor #1: 15 cookies at 1.0/tick, bought at t=15
    // Cursor #2: 17.25 cookies at 1.1/tick, 16 more ticks, bought at t=31
    // Cursor #3: 19.8375 cookies, 17 ticks away, does not fit by t=31
    let catalog = UpgradeCatalog::default();
    let strategy = FixedItemStrategy::new("Cursor");
    let state = simulate(&catalog, 31.0, &strategy);

    assert_eq!(state.elapsed_time(), 31.0);

    let history = state.history();
    assert_eq!(history.len(), 3);

    assert_eq!(history[1].time(), 15.0);
    assert_eq!(history[1].cost(), 15.0);
    assert_eq!(history[1].total_cookies(), 15.0);

    assert_eq!(history[2].time(), 31.0);
    assert_eq!(history[2].cost(), 15.0 * 1.15);
    assert!((history[2].total_cookies() - 32.6).abs() < 1e-9);

    assert!((state.cps() - 1.2).abs() < 1e-12);
    assert_eq!(state.last_item_name(), Some("Cursor"));
}

#[test]
fn test_purchase_exactly_at_horizon_is_kept() {
    let catalog = UpgradeCatalog::default();
    let strategy = FixedItemStrategy::new("Cursor");
    let state = simulate(&catalog, 15.0, &strategy);

    assert_eq!(state.elapsed_time(), 15.0);
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.history()[1].time(), 15.0);
}

#[test]
fn test_unknown_item_ends_run_quietly() {
    let catalog = UpgradeCatalog::default();
    let strategy = FixedItemStrategy::new("Moonbase");
    let state = simulate(&catalog, 500.0, &strategy);

    assert_eq!(state.elapsed_time(), 500.0);
    assert_eq!(state.cookies(), 500.0);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_unreachable_item_ends_run_quietly() {
    // Antimatter Condenser costs ~4e9; at 1.0/tick the save is far longer
    // than the run
    let catalog = UpgradeCatalog::default();
    let strategy = FixedItemStrategy::new("Antimatter Condenser");
    let state = simulate(&catalog, 1000.0, &strategy);

    assert_eq!(state.elapsed_time(), 1000.0);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_repricing_stays_inside_the_run() {
    let catalog = UpgradeCatalog::default();
    let strategy = FixedItemStrategy::new("Cursor");

    let first = simulate(&catalog, 100.0, &strategy);
    assert!(first.history().len() > 2);

    // Caller's table still sells Cursors at base price
    assert_eq!(catalog.cost("Cursor"), Some(15.0));

    // A second run starts from the same prices and replays identically
    let second = simulate(&catalog, 100.0, &strategy);
    assert_eq!(second.history(), first.history());
}

/// Answers a cheap item to pass the horizon check, then switches to a
/// pricier one when asked to confirm.
struct BaitAndSwitch {
    calls: AtomicUsize,
}

impl Strategy for BaitAndSwitch {
    fn propose(&self, _observation: &Observation<'_>) -> Option<String> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if call == 0 {
            Some("Cursor".to_string())
        } else {
            Some("Grandma".to_string())
        }
    }
}

#[test]
fn test_confirm_answer_is_the_one_bought() {
    let catalog = UpgradeCatalog::default();
    let strategy = BaitAndSwitch {
        calls: AtomicUsize::new(0),
    };

    let state = simulate(&catalog, 50.0, &strategy);

    // The Grandma named at confirm time is bought, even though only the
    // Cursor passed the horizon check; the 100-tick save overshoots the
    // 50-tick horizon and the run ends there
    let history = state.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].item(), Some("Grandma"));
    assert_eq!(history[1].time(), 100.0);
    assert_eq!(state.elapsed_time(), 100.0);
}

/// Proposes once, then declines when asked to confirm.
struct ColdFeet {
    calls: AtomicUsize,
}

impl Strategy for ColdFeet {
    fn propose(&self, _observation: &Observation<'_>) -> Option<String> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if call == 0 {
            Some("Cursor".to_string())
        } else {
            None
        }
    }
}

#[test]
fn test_declining_at_confirm_ends_the_run() {
    let catalog = UpgradeCatalog::default();
    let strategy = ColdFeet {
        calls: AtomicUsize::new(0),
    };

    let state = simulate(&catalog, 40.0, &strategy);

    assert_eq!(state.elapsed_time(), 40.0);
    assert_eq!(state.cookies(), 40.0);
    assert_eq!(state.history().len(), 1);
}

/// Stops proposing once the ledger shows a purchase.
struct OneAndDone;

impl Strategy for OneAndDone {
    fn propose(&self, observation: &Observation<'_>) -> Option<String> {
        if observation.history.len() > 1 {
            None
        } else {
            Some("Cursor".to_string())
        }
    }
}

#[test]
fn test_history_driven_strategy_sees_its_own_purchase() {
    let catalog = UpgradeCatalog::default();
    let state = simulate(&catalog, 200.0, &OneAndDone);

    assert_eq!(state.history().len(), 2);
    assert_eq!(state.history()[1].time(), 15.0);
    assert_eq!(state.elapsed_time(), 200.0);

    // Coasts at the improved rate after the single purchase
    let expected = 1.1 * 185.0;
    assert!((state.cookies() - expected).abs() < 1e-9);
}

#[test]
fn test_negative_and_nan_horizons_return_initial_state() {
    let catalog = UpgradeCatalog::default();

    let negative = simulate(&catalog, -10.0, &NeverBuyStrategy);
    assert_eq!(negative.elapsed_time(), 0.0);
    assert_eq!(negative.history().len(), 1);

    let nan = simulate(&catalog, f64::NAN, &NeverBuyStrategy);
    assert_eq!(nan.elapsed_time(), 0.0);
    assert_eq!(nan.cookies(), 0.0);
}
