// Roulette Strategy Engine - Wheel Sources

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::outcome::Outcome;

/// A source of wheel results. The production source draws from an RNG; a
/// scripted source replays a fixed sequence. Both are interchangeable, which
/// is what makes exact-scenario tests and reproducible batches possible.
pub trait Wheel {
    fn spin(&mut self) -> Outcome;
}

// ─── RngWheel ────────────────────────────────────────────────────────────────

/// Wheel backed by any `rand::Rng`; each pocket comes up with probability 1/37.
pub struct RngWheel<R: Rng> {
    rng: R,
}

impl<R: Rng> RngWheel<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngWheel<ChaCha8Rng> {
    /// Reproducible wheel for tests and seeded batch runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngWheel<ThreadRng> {
    /// Wheel drawing from the process-wide entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Wheel for RngWheel<R> {
    fn spin(&mut self) -> Outcome {
        Outcome(self.rng.gen_range(0..Outcome::POCKETS))
    }
}

// ─── ScriptedWheel ───────────────────────────────────────────────────────────

/// Wheel that replays a fixed outcome sequence, cycling when exhausted.
pub struct ScriptedWheel {
    outcomes: Vec<Outcome>,
    cursor: usize,
}

impl ScriptedWheel {
    /// The sequence must be non-empty.
    pub fn new(outcomes: Vec<Outcome>) -> Option<Self> {
        if outcomes.is_empty() {
            return None;
        }
        Some(Self { outcomes, cursor: 0 })
    }

    /// Convenience constructor from raw pocket numbers. Rejects an empty
    /// sequence or any number outside 0..=36.
    pub fn from_numbers(numbers: &[u8]) -> Option<Self> {
        let outcomes: Option<Vec<Outcome>> = numbers.iter().map(|&n| Outcome::new(n)).collect();
        Self::new(outcomes?)
    }
}

impl Wheel for ScriptedWheel {
    fn spin(&mut self) -> Outcome {
        let outcome = self.outcomes[self.cursor % self.outcomes.len()];
        self.cursor += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_wheel_in_range_and_covers_all_pockets() {
        let mut wheel = RngWheel::seeded(7);
        let mut seen = [false; 37];
        for _ in 0..10_000 {
            let o = wheel.spin();
            assert!(o.value() < 37);
            seen[o.value() as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "some pocket never drawn in 10k spins");
    }

    #[test]
    fn test_seeded_wheel_is_deterministic() {
        let mut a = RngWheel::seeded(42);
        let mut b = RngWheel::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.spin(), b.spin());
        }
    }

    #[test]
    fn test_scripted_wheel_replays_and_cycles() {
        let mut wheel = ScriptedWheel::from_numbers(&[30, 1]).unwrap();
        assert_eq!(wheel.spin().value(), 30);
        assert_eq!(wheel.spin().value(), 1);
        assert_eq!(wheel.spin().value(), 30);
    }

    #[test]
    fn test_scripted_wheel_rejects_bad_input() {
        assert!(ScriptedWheel::from_numbers(&[]).is_none());
        assert!(ScriptedWheel::from_numbers(&[12, 37]).is_none());
    }
}
