// Structured report types for the sim CLI
// One RunReport per seeded run; BatchReport aggregates a whole --runs batch.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use roulette_engine::SimulationRun;

/// Lossy Decimal -> f64 for batch statistics only; per-run money stays exact.
pub fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

// ─── Statistics (per-metric batch aggregation) ──────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                ci_lower: 0.0,
                ci_upper: 0.0,
                min: 0.0,
                max: 0.0,
                n: 0,
            };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Single-Run Report ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: Option<u64>,
    pub spins: u32,
    pub capital_threshold: Decimal,
    pub final_total: Decimal,
    pub max_profit: Decimal,
    /// 1-based, as the original front-end displayed it.
    pub max_profit_position: u32,
    pub run: SimulationRun,
}

impl RunReport {
    pub fn new(seed: Option<u64>, run: SimulationRun) -> Self {
        Self {
            seed,
            spins: run.records.len() as u32,
            capital_threshold: run.capital_threshold,
            final_total: run.summary.final_total,
            max_profit: run.summary.max_profit,
            max_profit_position: run.summary.max_profit_index + 1,
            run,
        }
    }
}

// ─── Batch Report ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BatchRunLine {
    pub seed: u64,
    pub final_total: Decimal,
    pub max_profit: Decimal,
    pub max_profit_position: u32,
}

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub spins_per_run: u32,
    pub capital_threshold: Decimal,
    pub base_seed: u64,
    pub n_runs: usize,
    pub final_total: Stats,
    pub max_profit: Stats,
    pub runs: Vec<BatchRunLine>,
}
