//! Clicker game state
//!
//! Tracks the full observable state of one simulation run: cookies banked,
//! cookies ever earned, elapsed time, production rate, and the purchase
//! history.
//!
//! # Critical Invariants
//!
//! 1. Time only moves forward: `wait()` ignores non-positive durations
//! 2. `total_cookies` never decreases; spending only reduces `current_cookies`
//! 3. `current_cps` starts at 1.0 and only grows through purchases
//! 4. The history always starts with the sentinel record and stays in
//!    chronological order
//!
//! Every mutation is a silent no-op when its preconditions do not hold, so
//! driver code never needs to branch on failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::purchase::PurchaseRecord;

/// Observable state of one clicker run.
///
/// Production is linear between events: the clicker earns `current_cps`
/// cookies per tick, and strategies only intervene at purchase boundaries.
/// All fields are private; mutation goes through [`wait`](Self::wait) and
/// [`buy`](Self::buy) so the invariants above cannot be violated from
/// outside.
///
/// # Example
/// ```
/// use clicker_simulator_core::ClickerState;
///
/// let mut state = ClickerState::new();
/// assert_eq!(state.cps(), 1.0);
///
/// state.wait(20.0);
/// assert_eq!(state.cookies(), 20.0);
///
/// assert!(state.buy("Cursor", 15.0, 0.1));
/// assert_eq!(state.cookies(), 5.0);
/// assert_eq!(state.cps(), 1.1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickerState {
    /// Cumulative cookies earned since time zero (never spent down)
    total_cookies: f64,

    /// Cookies currently available to spend
    current_cookies: f64,

    /// Elapsed simulated time in ticks
    current_time: f64,

    /// Production rate in cookies per tick
    current_cps: f64,

    /// Most recently purchased item, `None` until the first purchase
    last_item: Option<String>,

    /// Cost paid for the most recent purchase
    last_item_cost: f64,

    /// Append-only purchase log, starting with the sentinel record
    history: Vec<PurchaseRecord>,
}

impl ClickerState {
    /// Create a fresh state: no cookies, time zero, 1.0 cookies per tick.
    ///
    /// The history starts with the sentinel entry so plots and reports
    /// always have an origin point.
    pub fn new() -> Self {
        Self {
            total_cookies: 0.0,
            current_cookies: 0.0,
            current_time: 0.0,
            current_cps: 1.0,
            last_item: None,
            last_item_cost: 0.0,
            history: vec![PurchaseRecord::initial()],
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Cookies currently available to spend
    pub fn cookies(&self) -> f64 {
        self.current_cookies
    }

    /// Cumulative cookies earned since time zero
    pub fn total_cookies(&self) -> f64 {
        self.total_cookies
    }

    /// Production rate in cookies per tick
    pub fn cps(&self) -> f64 {
        self.current_cps
    }

    /// Elapsed simulated time in ticks
    pub fn elapsed_time(&self) -> f64 {
        self.current_time
    }

    /// Name of the most recently purchased item, `None` before any purchase
    pub fn last_item_name(&self) -> Option<&str> {
        self.last_item.as_deref()
    }

    /// Cost paid for the most recent purchase (0.0 before any purchase)
    pub fn last_item_cost(&self) -> f64 {
        self.last_item_cost
    }

    /// Full purchase history, sentinel entry first, in chronological order
    pub fn history(&self) -> &[PurchaseRecord] {
        &self.history
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ticks until `target` cookies are banked at the current rate.
    ///
    /// Returns 0.0 when the target is already affordable. Otherwise the
    /// result is the exact shortfall divided by the rate, rounded up to a
    /// whole number of ticks, so purchases land on integral times.
    ///
    /// Pure query: the state is not modified.
    ///
    /// # Example
    /// ```
    /// use clicker_simulator_core::ClickerState;
    ///
    /// let state = ClickerState::new();
    /// assert_eq!(state.time_until(15.0), 15.0);
    /// assert_eq!(state.time_until(0.0), 0.0);
    /// ```
    pub fn time_until(&self, target: f64) -> f64 {
        if target <= self.current_cookies {
            return 0.0;
        }
        ((target - self.current_cookies) / self.current_cps).ceil()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Advance time by `duration` ticks, accruing cookies at the current rate.
    ///
    /// Non-positive and NaN durations are silent no-ops. Production earned
    /// here raises both the spendable balance and the lifetime total.
    pub fn wait(&mut self, duration: f64) {
        if duration.is_nan() || duration <= 0.0 {
            return;
        }

        let earned = duration * self.current_cps;
        self.current_time += duration;
        self.current_cookies += earned;
        self.total_cookies += earned;
    }

    /// Buy an item, spending `cost` cookies and gaining `additional_cps`.
    ///
    /// Returns `true` and records the purchase when the balance covers the
    /// cost. An unaffordable purchase changes nothing and returns `false`.
    /// The rate increase takes effect for all subsequent waits; the history
    /// entry stamps the current time and lifetime total.
    pub fn buy(&mut self, item_name: &str, cost: f64, additional_cps: f64) -> bool {
        if self.current_cookies < cost {
            return false;
        }

        self.current_cookies -= cost;
        self.current_cps += additional_cps;
        self.last_item = Some(item_name.to_string());
        self.last_item_cost = cost;
        self.history.push(PurchaseRecord::new(
            self.current_time,
            item_name,
            cost,
            self.total_cookies,
        ));

        true
    }
}

impl Default for ClickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total cookies:   {}", self.total_cookies)?;
        writeln!(f, "Current cookies: {}", self.current_cookies)?;
        writeln!(f, "Current time:    {}", self.current_time)?;
        write!(f, "Current CPS:     {}", self.current_cps)
    }
}
