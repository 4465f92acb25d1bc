//! Economy balance simulator CLI.
//!
//! Runs Monte Carlo case openings to analyze drop rates and payouts.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 10000 opens, best affordable case
//!   cargo run --bin simulate -- -n 500 --case gold
//!   cargo run --bin simulate -- --seed 42 --topup 5000

use std::env;
use unbox::simulator::{run_simulation, SimConfig};

fn main() {
    tracing_subscriber::fmt::try_init().ok();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              UNBOX ECONOMY SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Opens:          {}", config.num_opens);
    match &config.case_id {
        Some(id) => println!("  Case:           {}", id),
        None => println!("  Case:           priciest affordable"),
    }
    println!("  Balance:        {}", config.starting_balance);
    match config.topup_on_broke {
        Some(amount) => println!("  Top-up:         {} when broke", amount),
        None => println!("  Top-up:         none (stop when broke)"),
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Simulation failed: {}", err);
            std::process::exit(1);
        }
    };

    report.print_summary();

    if args.iter().any(|a| a == "--json") {
        match report.to_json() {
            Ok(json) => {
                let filename = format!(
                    "sim_report_{}.json",
                    chrono::Utc::now().format("%Y%m%d_%H%M%S")
                );
                if let Err(err) = std::fs::write(&filename, json) {
                    eprintln!("Failed to write JSON report: {}", err);
                } else {
                    println!();
                    println!("JSON report saved to: {}", filename);
                }
            }
            Err(err) => eprintln!("Failed to serialize report: {}", err),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--opens" => {
                if i + 1 < args.len() {
                    config.num_opens = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--case" => {
                if i + 1 < args.len() {
                    config.case_id = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-b" | "--balance" => {
                if i + 1 < args.len() {
                    config.starting_balance = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--topup" => {
                if i + 1 < args.len() {
                    config.topup_on_broke = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                // handled after the run
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Unbox Economy Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --opens <N>     Number of case openings (default: 10000)");
    println!("  -c, --case <ID>     Open this case every time (default: priciest affordable)");
    println!("  -b, --balance <N>   Starting balance (default: 1000)");
    println!("      --topup <N>     Credit N whenever the session goes broke");
    println!("  -s, --seed <N>      Random seed for reproducibility");
    println!("  -v, --verbose       Print every drop");
    println!("  -q, --quiet         Suppress per-open output");
    println!("      --json          Save a JSON report alongside the summary");
    println!("  -h, --help          Show this help");
}
