// Roulette Strategy Engine - Record & Summary Types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::outcome::{Color, Dozen, Outcome, Parity, TableHalf};
use crate::strategy::StrategyKind;

// ─── SpinRecord ──────────────────────────────────────────────────────────────

/// One row of a run: the drawn pocket, its table classification, the scheme
/// that was live during the spin, and the money movement. Immutable once
/// emitted; the presentation layer renders these as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRecord {
    /// Zero-based spin index within the run.
    pub index: u32,
    pub outcome: Outcome,
    pub color: Color,
    /// None for zero.
    pub parity: Option<Parity>,
    /// None for zero.
    pub half: Option<TableHalf>,
    /// None for zero.
    pub dozen: Option<Dozen>,
    /// The scheme live during this spin (pre-transition).
    pub strategy: StrategyKind,
    /// Signed net result of this spin.
    pub result: Decimal,
    /// Cumulative net result through this spin.
    pub running_total: Decimal,
}

impl SpinRecord {
    pub fn is_win(&self) -> bool {
        self.result > Decimal::ZERO
    }
}

// ─── RunSummary ──────────────────────────────────────────────────────────────

/// End-of-run aggregate derived from the full record sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Highest running total seen during the run.
    pub max_profit: Decimal,
    /// Zero-based index of the EARLIEST spin that reached `max_profit`.
    pub max_profit_index: u32,
    /// Running total after the last spin.
    pub final_total: Decimal,
}

// ─── SimulationRun ───────────────────────────────────────────────────────────

/// Complete output of one run: every spin record in order plus the summary.
/// `capital_threshold` is caller metadata passed through untouched; the
/// display tier flags rows whose running total reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub records: Vec<SpinRecord>,
    pub summary: RunSummary,
    pub capital_threshold: Decimal,
}
