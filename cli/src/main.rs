//! Command-line front end for the clicker simulator
//!
//! Three subcommands: `run` plays one strategy to a horizon, `compare`
//! races the parameterless reference strategies on the same catalog, and
//! `bribes` runs the companion greedy-boss simulator.

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clicker_simulator_core::{
    simulate, simulate_bribes_with, BribeConfig, ClickerState, StrategyConfig, UpgradeCatalog,
};

#[derive(Parser)]
#[command(author, version, about = "Clicker strategy simulator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one strategy to the horizon and report the final state
    Run {
        /// Strategy: never, cheapest, expensive, efficiency, or fixed:<item>
        strategy: StrategyConfig,

        /// Horizon in simulated ticks
        #[arg(long, default_value_t = 10_000_000_000.0)]
        duration: f64,

        /// JSON file with a custom upgrade catalog
        #[arg(long)]
        catalog: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Race the reference strategies on one catalog
    Compare {
        /// Horizon in simulated ticks
        #[arg(long, default_value_t = 10_000_000_000.0)]
        duration: f64,

        /// JSON file with a custom upgrade catalog
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Run the greedy-boss bribe simulator
    Bribes {
        /// Horizon in days
        #[arg(long, default_value_t = 70)]
        days: usize,

        /// Cost increase per successive bribe
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..))]
        increment: i64,

        /// Daily salary before the first bribe
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(1..))]
        salary: i64,

        /// Raise granted per bribe
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(0..))]
        raise: i64,

        /// Cost of the first bribe
        #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(i64).range(1..))]
        bribe_cost: i64,

        /// Print the points as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Run {
            strategy,
            duration,
            catalog,
            json,
        } => run(&strategy, duration, catalog.as_deref(), json),
        Command::Compare { duration, catalog } => compare(duration, catalog.as_deref()),
        Command::Bribes {
            days,
            increment,
            salary,
            raise,
            bribe_cost,
            json,
        } => {
            let config = BribeConfig {
                initial_salary: salary,
                salary_increment: raise,
                initial_bribe_cost: bribe_cost,
            };
            bribes(&config, days, increment, json)
        }
    }
}

fn load_catalog(path: Option<&str>) -> Result<UpgradeCatalog> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {path}"))?;
            let catalog = UpgradeCatalog::from_json(&text)
                .with_context(|| format!("parsing catalog file {path}"))?;
            Ok(catalog)
        }
        None => Ok(UpgradeCatalog::default()),
    }
}

fn run(strategy: &StrategyConfig, duration: f64, catalog: Option<&str>, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let state = simulate(&catalog, duration, strategy.build().as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_state(&state);
    }
    Ok(())
}

fn print_state(state: &ClickerState) {
    println!("{state}");
    println!("Purchases:       {}", state.history().len() - 1);
    if let Some(item) = state.last_item_name() {
        println!("Last purchase:   {} ({})", item, state.last_item_cost());
    }
}

fn compare(duration: f64, catalog: Option<&str>) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let configs = [
        ("never", StrategyConfig::NeverBuy),
        ("cheapest", StrategyConfig::Cheapest),
        ("expensive", StrategyConfig::MostExpensive),
        ("efficiency", StrategyConfig::BestEfficiency),
    ];

    println!(
        "{:<12} {:>10} {:>16} {:>22}",
        "strategy", "purchases", "final cps", "total cookies"
    );
    for (name, config) in &configs {
        let state = simulate(&catalog, duration, config.build().as_ref());
        println!(
            "{:<12} {:>10} {:>16.3} {:>22.6e}",
            name,
            state.history().len() - 1,
            state.cps(),
            state.total_cookies(),
        );
    }
    Ok(())
}

fn bribes(config: &BribeConfig, days: usize, increment: i64, json: bool) -> Result<()> {
    let earnings = simulate_bribes_with(config, days, increment);

    if json {
        println!("{}", serde_json::to_string_pretty(&earnings)?);
    } else {
        println!("{:>6} {:>16}", "day", "total earnings");
        for (day, total) in &earnings {
            println!("{day:>6} {total:>16}");
        }
    }
    Ok(())
}
