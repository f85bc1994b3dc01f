// Roulette Strategy Engine - Bet Resolution & Strategy State Machine
//
// Two wager schemes alternate over a run. "Castle" places five simultaneous
// wagers every spin; the first losing spin hands over to "Opposite Color",
// a single even-money wager against the color that broke the castle, which
// always hands back after one spin regardless of its own result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::outcome::{Color, Dozen, Outcome};

// ─── Fixed wager scheme ──────────────────────────────────────────────────────
//
// Castle stakes 11.50 per spin: 0.50 straight-up on 0, 0.50 split on 25/28,
// 0.50 split on 31/34, 5.00 on the first dozen, 5.00 on the second dozen.
// Payouts are deterministic given the outcome; the four result cases below
// partition all 37 pockets.

/// Zero hits: 0.50 x 35 straight-up payout minus the four losing wagers.
pub const CASTLE_ZERO_NET: Decimal = dec!(6.50);
/// First or second dozen hits: 5 x 3 dozen payout minus the losing wagers.
pub const CASTLE_DOZEN_NET: Decimal = dec!(8.50);
/// Third dozen hits: at best a 0.50 x 2 split payout, everything else lost.
pub const CASTLE_THIRD_NET: Decimal = dec!(-9.50);
/// Amount credited on an Opposite-Color win (8.50 even money plus stake).
pub const OPPOSITE_WIN: Decimal = dec!(17.00);
/// The Opposite-Color stake, lost outright on a miss (zero included).
pub const OPPOSITE_STAKE: Decimal = dec!(8.50);

/// Net castle result for one outcome. Pure function of the outcome alone.
pub fn castle_net(outcome: Outcome) -> Decimal {
    match outcome.dozen() {
        None => CASTLE_ZERO_NET,
        Some(Dozen::First) | Some(Dozen::Second) => CASTLE_DOZEN_NET,
        Some(Dozen::Third) => CASTLE_THIRD_NET,
    }
}

// ─── StrategyKind ────────────────────────────────────────────────────────────

/// Which scheme was live during a spin. Closed enum; the original's free-form
/// string tags are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Castle,
    OppositeColor,
}

impl StrategyKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Castle => "Castle",
            Self::OppositeColor => "Opposite color",
        }
    }
}

// ─── StrategyState ───────────────────────────────────────────────────────────

/// Run-scoped strategy machine. The last-loss color exists only while the
/// Opposite-Color scheme is armed, so it lives inside that variant; there is
/// no way to enter the state without recording it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyState {
    Castle,
    OppositeColor { last_loss: Color },
}

/// Outcome of resolving one spin: the scheme that was live during the spin
/// (pre-transition) and its signed net result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinResolution {
    pub strategy: StrategyKind,
    pub result: Decimal,
}

impl StrategyState {
    /// Every run starts with the castle armed.
    pub fn new() -> Self {
        Self::Castle
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Castle => StrategyKind::Castle,
            Self::OppositeColor { .. } => StrategyKind::OppositeColor,
        }
    }

    /// Resolve one spin under the live scheme and advance the machine.
    pub fn resolve(&mut self, outcome: Outcome) -> SpinResolution {
        match *self {
            Self::Castle => {
                let result = castle_net(outcome);
                if result < Decimal::ZERO {
                    *self = Self::OppositeColor {
                        last_loss: outcome.color(),
                    };
                }
                SpinResolution {
                    strategy: StrategyKind::Castle,
                    result,
                }
            }
            Self::OppositeColor { last_loss } => {
                let target = last_loss.opposite();
                let result = if outcome.color() == target {
                    OPPOSITE_WIN
                } else {
                    -OPPOSITE_STAKE
                };
                // Win or lose, the next spin rebuilds the castle.
                *self = Self::Castle;
                SpinResolution {
                    strategy: StrategyKind::OppositeColor,
                    result,
                }
            }
        }
    }
}

impl Default for StrategyState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pocket(n: u8) -> Outcome {
        Outcome::new(n).unwrap()
    }

    #[test]
    fn test_castle_net_all_37_pockets() {
        assert_eq!(castle_net(pocket(0)), dec!(6.50));
        for n in 1..=24u8 {
            assert_eq!(castle_net(pocket(n)), dec!(8.50), "pocket {n}");
        }
        for n in 25..=36u8 {
            assert_eq!(castle_net(pocket(n)), dec!(-9.50), "pocket {n}");
        }
    }

    #[test]
    fn test_castle_holds_on_non_negative_result() {
        for n in 0..=24u8 {
            let mut state = StrategyState::new();
            let resolution = state.resolve(pocket(n));
            assert!(resolution.result > Decimal::ZERO);
            assert_eq!(state, StrategyState::Castle, "pocket {n}");
        }
    }

    #[test]
    fn test_castle_loss_arms_opposite_color() {
        for n in 25..=36u8 {
            let mut state = StrategyState::new();
            let resolution = state.resolve(pocket(n));
            assert_eq!(resolution.result, dec!(-9.50));
            assert_eq!(
                state,
                StrategyState::OppositeColor {
                    last_loss: pocket(n).color()
                },
                "pocket {n}"
            );
        }
    }

    #[test]
    fn test_opposite_color_win() {
        // 30 is black, so the follow-up wager targets red; 1 is red.
        let mut state = StrategyState::new();
        state.resolve(pocket(30));
        let resolution = state.resolve(pocket(1));
        assert_eq!(resolution.strategy, StrategyKind::OppositeColor);
        assert_eq!(resolution.result, dec!(17.00));
        assert_eq!(state, StrategyState::Castle);
    }

    #[test]
    fn test_opposite_color_loss_on_same_color() {
        // 2 is black, same as the losing color: miss.
        let mut state = StrategyState::new();
        state.resolve(pocket(30));
        let resolution = state.resolve(pocket(2));
        assert_eq!(resolution.result, dec!(-8.50));
        assert_eq!(state, StrategyState::Castle);
    }

    #[test]
    fn test_opposite_color_loss_on_zero() {
        // Green is neither the bet color nor its opposite: miss.
        let mut state = StrategyState::new();
        state.resolve(pocket(30));
        let resolution = state.resolve(pocket(0));
        assert_eq!(resolution.result, dec!(-8.50));
        assert_eq!(state, StrategyState::Castle);
    }

    #[test]
    fn test_opposite_color_always_returns_to_castle() {
        for n in 0..=36u8 {
            let mut state = StrategyState::OppositeColor {
                last_loss: Color::Black,
            };
            state.resolve(pocket(n));
            assert_eq!(state, StrategyState::Castle, "pocket {n}");
        }
    }

    #[test]
    fn test_red_loss_targets_black() {
        // 25 is red; the follow-up targets black, and 31 is black.
        let mut state = StrategyState::new();
        state.resolve(pocket(25));
        assert_eq!(
            state,
            StrategyState::OppositeColor {
                last_loss: Color::Red
            }
        );
        let resolution = state.resolve(pocket(31));
        assert_eq!(resolution.result, dec!(17.00));
    }
}
