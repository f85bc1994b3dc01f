// Roulette Strategy Engine - Simulation Runner

use rust_decimal::Decimal;

use crate::strategy::StrategyState;
use crate::types::{RunSummary, SimulationRun, SpinRecord};
use crate::wheel::Wheel;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Rejections raised before a run starts. Once the loop is running there is
/// nothing left to fail: the wheel is infallible and the loop does no I/O.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("spin count must be at least 1")]
    InvalidSpinCount,
    #[error("capital threshold must be non-negative, got {0}")]
    InvalidThreshold(Decimal),
}

// ─── RouletteSimulation ──────────────────────────────────────────────────────

/// Drives one run: wheel in, ordered spin records and a summary out.
///
/// Spins are strictly sequential; each bet depends on the strategy state the
/// previous spin left behind. Every simulation owns its wheel, its strategy
/// state, and its accumulators, so independent runs can proceed concurrently
/// without any shared mutable state.
pub struct RouletteSimulation<W: Wheel> {
    wheel: W,
    state: StrategyState,
    spin_index: u32,
    running_total: Decimal,
    /// Peak running total and the earliest index that reached it. `None`
    /// until the first spin, so the first total always becomes the peak.
    peak: Option<(Decimal, u32)>,
}

impl<W: Wheel> RouletteSimulation<W> {
    pub fn new(wheel: W) -> Self {
        Self {
            wheel,
            state: StrategyState::new(),
            spin_index: 0,
            running_total: Decimal::ZERO,
            peak: None,
        }
    }

    /// Spin once under the live scheme and advance all accumulators.
    pub fn spin_once(&mut self) -> SpinRecord {
        let outcome = self.wheel.spin();
        let resolution = self.state.resolve(outcome);
        self.running_total += resolution.result;

        let index = self.spin_index;
        self.spin_index += 1;

        // Strict improvement only, so ties keep the earliest peak.
        let improved = match self.peak {
            Some((best, _)) => self.running_total > best,
            None => true,
        };
        if improved {
            self.peak = Some((self.running_total, index));
        }

        SpinRecord {
            index,
            outcome,
            color: outcome.color(),
            parity: outcome.parity(),
            half: outcome.half(),
            dozen: outcome.dozen(),
            strategy: resolution.strategy,
            result: resolution.result,
            running_total: self.running_total,
        }
    }

    /// Run a complete series of `spin_count` spins.
    ///
    /// All validation happens up front; a rejected call starts no partial run
    /// and consumes no entropy. Consumes the simulation, so every run starts
    /// from a fresh castle with a zeroed total.
    pub fn run(
        mut self,
        spin_count: u32,
        capital_threshold: Decimal,
    ) -> Result<SimulationRun, SimulationError> {
        if spin_count == 0 {
            return Err(SimulationError::InvalidSpinCount);
        }
        if capital_threshold < Decimal::ZERO {
            return Err(SimulationError::InvalidThreshold(capital_threshold));
        }

        let mut records = Vec::with_capacity(spin_count as usize);
        for _ in 0..spin_count {
            records.push(self.spin_once());
        }

        // spin_count >= 1, so the peak was recorded on the first spin.
        let (max_profit, max_profit_index) = self.peak.unwrap_or((Decimal::ZERO, 0));

        Ok(SimulationRun {
            records,
            summary: RunSummary {
                max_profit,
                max_profit_index,
                final_total: self.running_total,
            },
            capital_threshold,
        })
    }
}
