//! Greedy boss bribe simulator
//!
//! Companion simulator for the salary-and-bribes game: a worker earns a
//! fixed salary per day and can bribe the boss for a raise. Each bribe
//! costs more than the last (by a configurable increment) and raises the
//! salary by a fixed step. The simulation asks: how do cumulative earnings
//! grow over a horizon of days if the worker bribes as eagerly as possible?
//!
//! Unlike the clicker game this runs on integer money and integer days, so
//! results are exact and comparable across platforms.
//!
//! # Behavior
//!
//! Starting from day zero the worker saves for the next bribe, pays it the
//! day the savings suffice, and repeats. A bribe whose saving period would
//! run past the horizon is not taken; the run ends there. Earnings are
//! sampled once per bribe, so a day with several affordable bribes in a row
//! contributes several identical points to the output.

use serde::{Deserialize, Serialize};

/// Default daily salary before any bribes
pub const DEFAULT_INITIAL_SALARY: i64 = 100;

/// Default salary raise granted per bribe
pub const DEFAULT_SALARY_INCREMENT: i64 = 100;

/// Default cost of the first bribe
pub const DEFAULT_INITIAL_BRIBE_COST: i64 = 1000;

/// Starting conditions for a bribe run.
///
/// `Default` matches the classic scenario: 100 a day, bribes start at 1000,
/// and every bribe raises the salary by 100.
///
/// # Example
/// ```
/// use clicker_simulator_core::bribes::BribeConfig;
///
/// let config = BribeConfig::default();
/// assert_eq!(config.initial_salary, 100);
/// assert_eq!(config.initial_bribe_cost, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BribeConfig {
    /// Salary per day before the first bribe
    pub initial_salary: i64,

    /// Salary raise granted by each bribe
    pub salary_increment: i64,

    /// Cost of the first bribe
    pub initial_bribe_cost: i64,
}

impl Default for BribeConfig {
    fn default() -> Self {
        Self {
            initial_salary: DEFAULT_INITIAL_SALARY,
            salary_increment: DEFAULT_SALARY_INCREMENT,
            initial_bribe_cost: DEFAULT_INITIAL_BRIBE_COST,
        }
    }
}

/// Run the bribe game under the classic starting conditions.
///
/// Returns `(day, cumulative_earnings)` points: the origin `(0, 0)` first,
/// then one point per bribe paid, in order. Deterministic in its two
/// inputs.
///
/// # Arguments
///
/// * `days` - Horizon in days; bribes after this day are not taken
/// * `bribe_cost_increment` - How much more each successive bribe costs
///
/// # Example
/// ```
/// use clicker_simulator_core::bribes::simulate_bribes;
///
/// let earnings = simulate_bribes(35, 100);
/// assert_eq!(earnings[0], (0, 0));
/// assert_eq!(earnings[1], (10, 1000));
/// assert_eq!(earnings.last(), Some(&(35, 12700)));
/// ```
pub fn simulate_bribes(days: usize, bribe_cost_increment: i64) -> Vec<(usize, i64)> {
    simulate_bribes_with(&BribeConfig::default(), days, bribe_cost_increment)
}

/// Run the bribe game from explicit starting conditions.
///
/// Each iteration computes how many whole days of saving the next bribe
/// needs (zero when current savings already cover it), stops if that would
/// pass the horizon, and otherwise advances the clock, pays the bribe, and
/// records a `(day, cumulative_earnings)` point. Zero-day saves record a
/// point without advancing the clock, which is where duplicate points come
/// from.
///
/// # Panics
///
/// Panics if the salary or the first bribe cost is not positive, or if
/// either increment is negative. Those inputs would let the loop run
/// forever.
pub fn simulate_bribes_with(
    config: &BribeConfig,
    days: usize,
    bribe_cost_increment: i64,
) -> Vec<(usize, i64)> {
    assert!(
        config.initial_salary > 0,
        "initial salary must be positive, got {}",
        config.initial_salary
    );
    assert!(
        config.salary_increment >= 0,
        "salary increment must be non-negative, got {}",
        config.salary_increment
    );
    assert!(
        config.initial_bribe_cost > 0,
        "initial bribe cost must be positive, got {}",
        config.initial_bribe_cost
    );
    assert!(
        bribe_cost_increment >= 0,
        "bribe cost increment must be non-negative, got {}",
        bribe_cost_increment
    );

    let mut day: usize = 0;
    let mut total_earnings: i64 = 0;
    let mut net_earnings: i64 = 0;
    let mut salary = config.initial_salary;
    let mut bribe_cost = config.initial_bribe_cost;

    let mut earnings_by_day = vec![(0, 0)];

    while day <= days {
        // Whole days of saving until the next bribe is affordable
        let wait_days = if net_earnings >= bribe_cost {
            0
        } else {
            let shortfall = bribe_cost - net_earnings;
            ((shortfall + salary - 1) / salary) as usize
        };

        // The next bribe cannot complete inside the horizon
        if day + wait_days > days {
            break;
        }

        day += wait_days;
        let earned = salary * wait_days as i64;
        total_earnings += earned;
        net_earnings += earned;

        net_earnings -= bribe_cost;
        salary += config.salary_increment;
        bribe_cost += bribe_cost_increment;
        earnings_by_day.push((day, total_earnings));
    }

    earnings_by_day
}
