// Roulette series simulator — CLI front-end for the Castle / Opposite-Color engine
//
// Usage:
//   cargo run --release --bin sim                          # 100 spins, entropy wheel
//   cargo run --release --bin sim -- --spins 500           # longer series
//   cargo run --release --bin sim -- --threshold 50        # flag rows at/above 50
//   cargo run --release --bin sim -- --seed 42             # reproducible run
//   cargo run --release --bin sim -- --runs 30 --seed 0    # seeded batch with stats
//   cargo run --release --bin sim -- --json                # also write a JSON report

mod report;

use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;

use roulette_engine::{RngWheel, RouletteSimulation, SimulationRun, SpinRecord};

use report::{to_f64, BatchReport, BatchRunLine, RunReport, Stats};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    spins: u32,
    threshold: Decimal,
    seed: Option<u64>,
    runs: usize,
    json: bool,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        spins: 100,
        threshold: Decimal::ZERO,
        seed: None,
        runs: 1,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--spins" => {
                i += 1;
                if i < args.len() {
                    cli.spins = args[i].parse().unwrap_or(100);
                }
            }
            "--threshold" => {
                i += 1;
                if i < args.len() {
                    cli.threshold = args[i].parse().unwrap_or(Decimal::ZERO);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().ok();
                }
            }
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(1);
                }
            }
            "--json" => {
                cli.json = true;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Row Formatting ─────────────────────────────────────────────────────────

fn na<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

/// One output row, mirroring the original front-end's line structure.
fn format_row(record: &SpinRecord, threshold: Decimal, peak_index: u32) -> String {
    let symbol = if record.is_win() { "." } else { "X" };
    let situation = if record.is_win() { "Win" } else { "Loss" };
    let money = if record.result >= Decimal::ZERO {
        format!("Gain: {}", record.result)
    } else {
        format!("Loss: {}", -record.result)
    };
    let mut flags = String::new();
    if threshold > Decimal::ZERO && record.running_total >= threshold {
        flags.push_str(" *");
    }
    if record.index == peak_index {
        flags.push_str(" <<< peak");
    }
    format!(
        "{} {:>2} | Color: {:<5} | Parity: {:<4} | Range: {:<4} | Outcome: {:<4} | {} | Total: {} ({}){}",
        symbol,
        record.outcome,
        record.color.to_string(),
        na(record.parity),
        na(record.half),
        situation,
        money,
        record.running_total,
        record.strategy.label(),
        flags,
    )
}

fn print_run(run: &SimulationRun) {
    let peak_index = run.summary.max_profit_index;
    for record in &run.records {
        println!("  {}", format_row(record, run.capital_threshold, peak_index));
    }
    println!();
    println!("  Maximum profit reached:     {}", run.summary.max_profit);
    println!("  Position of maximum profit: {}", run.summary.max_profit_index + 1);
    println!("  Total profit/loss:          {}", run.summary.final_total);
}

// ─── Report Output ──────────────────────────────────────────────────────────

fn write_json<T: serde::Serialize>(report: &T, timestamp: &str) {
    let dir = std::path::Path::new("sim-results");
    if !dir.exists() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Failed to create sim-results/: {e}");
            return;
        }
    }
    let path = dir.join(format!("sim-{timestamp}.json"));
    match serde_json::to_string_pretty(report) {
        Ok(json) => match std::fs::write(&path, json) {
            Ok(()) => println!("\n  Results saved to: {}", path.display()),
            Err(e) => eprintln!("Failed to write {}: {e}", path.display()),
        },
        Err(e) => eprintln!("Failed to serialize report: {e}"),
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let timestamp = format!("{ts}");

    if cli.runs > 1 {
        run_batch(&cli, &timestamp);
        return;
    }

    let result = match cli.seed {
        Some(seed) => RouletteSimulation::new(RngWheel::seeded(seed)).run(cli.spins, cli.threshold),
        None => RouletteSimulation::new(RngWheel::from_entropy()).run(cli.spins, cli.threshold),
    };
    let run = match result {
        Ok(run) => run,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    println!("\n  Roulette series — {} spins, threshold {}\n", cli.spins, cli.threshold);
    print_run(&run);

    if cli.json {
        let report = RunReport::new(cli.seed, run);
        write_json(&report, &timestamp);
    }
}

/// Seeded batch mode: N independent runs with seeds base..base+N, aggregated
/// the way a Monte Carlo sweep reports its metrics.
fn run_batch(cli: &CliArgs, timestamp: &str) {
    let base_seed = cli.seed.unwrap_or(0);

    println!("\n  Roulette batch — {} runs x {} spins", cli.runs, cli.spins);
    println!("  PRNG: ChaCha8Rng | Base seed: {base_seed}\n");
    println!("  {:>6} {:>14} {:>14} {:>10}", "Seed", "Final", "Max profit", "Peak pos");
    println!("  {}", "-".repeat(48));

    let mut lines = Vec::with_capacity(cli.runs);
    for i in 0..cli.runs {
        let seed = base_seed + i as u64;
        let result =
            RouletteSimulation::new(RngWheel::seeded(seed)).run(cli.spins, cli.threshold);
        let run = match result {
            Ok(run) => run,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        };
        println!(
            "  {:>6} {:>14} {:>14} {:>10}",
            seed,
            run.summary.final_total.to_string(),
            run.summary.max_profit.to_string(),
            run.summary.max_profit_index + 1,
        );
        lines.push(BatchRunLine {
            seed,
            final_total: run.summary.final_total,
            max_profit: run.summary.max_profit,
            max_profit_position: run.summary.max_profit_index + 1,
        });
    }

    let finals: Vec<f64> = lines.iter().map(|l| to_f64(l.final_total)).collect();
    let peaks: Vec<f64> = lines.iter().map(|l| to_f64(l.max_profit)).collect();
    let final_stats = Stats::from_samples(&finals);
    let peak_stats = Stats::from_samples(&peaks);

    println!("  {}", "-".repeat(48));
    println!(
        "  Final total: mean {:.2} ± {:.2} (95% CI), min {:.2}, max {:.2}",
        final_stats.mean,
        (final_stats.ci_upper - final_stats.ci_lower) / 2.0,
        final_stats.min,
        final_stats.max,
    );
    println!(
        "  Max profit:  mean {:.2} ± {:.2} (95% CI), min {:.2}, max {:.2}",
        peak_stats.mean,
        (peak_stats.ci_upper - peak_stats.ci_lower) / 2.0,
        peak_stats.min,
        peak_stats.max,
    );

    if cli.json {
        let report = BatchReport {
            timestamp: timestamp.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            prng: "ChaCha8Rng",
            spins_per_run: cli.spins,
            capital_threshold: cli.threshold,
            base_seed,
            n_runs: cli.runs,
            final_total: final_stats,
            max_profit: peak_stats,
            runs: lines,
        };
        write_json(&report, timestamp);
    }
}
