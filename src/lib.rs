// Roulette Strategy Engine
// European-wheel series simulator for the Castle / Opposite-Color scheme.

pub mod outcome;
pub mod simulation;
pub mod strategy;
pub mod types;
pub mod wheel;

pub use outcome::{Color, Dozen, Outcome, Parity, TableHalf};
pub use simulation::{RouletteSimulation, SimulationError};
pub use strategy::{SpinResolution, StrategyKind, StrategyState};
pub use types::{RunSummary, SimulationRun, SpinRecord};
pub use wheel::{RngWheel, ScriptedWheel, Wheel};
