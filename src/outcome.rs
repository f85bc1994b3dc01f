// Roulette Strategy Engine - Outcome & Table Classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Red pockets on the standard European layout. Fixed table, never derived.
const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// A single wheel result: one of the 37 pockets, 0 through 36.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome(pub(crate) u8);

impl Outcome {
    /// Number of pockets on a European wheel (single zero).
    pub const POCKETS: u8 = 37;

    /// Build an outcome from an untrusted number. Valid pockets are 0..=36.
    pub fn new(n: u8) -> Option<Self> {
        (n < Self::POCKETS).then_some(Self(n))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Pocket color: 0 is Green, the red table holds 18 numbers, the
    /// remaining 18 non-zero numbers are black.
    pub fn color(&self) -> Color {
        if self.0 == 0 {
            Color::Green
        } else if RED_NUMBERS.contains(&self.0) {
            Color::Red
        } else {
            Color::Black
        }
    }

    /// Even/odd classification; zero is neither.
    pub fn parity(&self) -> Option<Parity> {
        if self.0 == 0 {
            None
        } else if self.0 % 2 == 0 {
            Some(Parity::Even)
        } else {
            Some(Parity::Odd)
        }
    }

    /// Low (1-18) / High (19-36) classification; zero is neither.
    pub fn half(&self) -> Option<TableHalf> {
        match self.0 {
            0 => None,
            1..=18 => Some(TableHalf::Low),
            _ => Some(TableHalf::High),
        }
    }

    /// Dozen-sector membership; zero belongs to no dozen.
    pub fn dozen(&self) -> Option<Dozen> {
        match self.0 {
            0 => None,
            1..=12 => Some(Dozen::First),
            13..=24 => Some(Dozen::Second),
            _ => Some(Dozen::Third),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    /// The even-money complement bet against this color.
    ///
    /// A castle loss only ever comes from the third dozen (25-36), which
    /// never contains zero, so Green cannot reach here as a last-loss color;
    /// the non-Red arm mirrors the original table's fallback of betting Red.
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black | Color::Green => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "Red",
            Color::Black => "Black",
            Color::Green => "Green",
        })
    }
}

// ─── Parity ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Parity::Even => "Even",
            Parity::Odd => "Odd",
        })
    }
}

// ─── TableHalf ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableHalf {
    Low,
    High,
}

impl fmt::Display for TableHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableHalf::Low => "Low",
            TableHalf::High => "High",
        })
    }
}

// ─── Dozen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dozen {
    First,
    Second,
    Third,
}

impl fmt::Display for Dozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dozen::First => "1st 12",
            Dozen::Second => "2nd 12",
            Dozen::Third => "3rd 12",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK_NUMBERS: [u8; 18] = [
        2, 4, 6, 8, 10, 11, 13, 15, 17, 20, 22, 24, 26, 28, 29, 31, 33, 35,
    ];

    #[test]
    fn test_pocket_bounds() {
        assert!(Outcome::new(0).is_some());
        assert!(Outcome::new(36).is_some());
        assert!(Outcome::new(37).is_none());
        assert!(Outcome::new(255).is_none());
    }

    #[test]
    fn test_color_table_exhaustive() {
        assert_eq!(Outcome::new(0).unwrap().color(), Color::Green);
        for n in RED_NUMBERS {
            assert_eq!(Outcome::new(n).unwrap().color(), Color::Red, "pocket {n}");
        }
        for n in BLACK_NUMBERS {
            assert_eq!(Outcome::new(n).unwrap().color(), Color::Black, "pocket {n}");
        }
        // The two tables plus zero cover every pocket exactly once
        assert_eq!(RED_NUMBERS.len() + BLACK_NUMBERS.len() + 1, 37);
    }

    #[test]
    fn test_parity_exhaustive() {
        assert_eq!(Outcome::new(0).unwrap().parity(), None);
        for n in 1..=36u8 {
            let expected = if n % 2 == 0 { Parity::Even } else { Parity::Odd };
            assert_eq!(Outcome::new(n).unwrap().parity(), Some(expected));
        }
    }

    #[test]
    fn test_half_exhaustive() {
        assert_eq!(Outcome::new(0).unwrap().half(), None);
        for n in 1..=18u8 {
            assert_eq!(Outcome::new(n).unwrap().half(), Some(TableHalf::Low));
        }
        for n in 19..=36u8 {
            assert_eq!(Outcome::new(n).unwrap().half(), Some(TableHalf::High));
        }
    }

    #[test]
    fn test_dozen_exhaustive() {
        assert_eq!(Outcome::new(0).unwrap().dozen(), None);
        for n in 1..=12u8 {
            assert_eq!(Outcome::new(n).unwrap().dozen(), Some(Dozen::First));
        }
        for n in 13..=24u8 {
            assert_eq!(Outcome::new(n).unwrap().dozen(), Some(Dozen::Second));
        }
        for n in 25..=36u8 {
            assert_eq!(Outcome::new(n).unwrap().dozen(), Some(Dozen::Third));
        }
    }

    #[test]
    fn test_opposite_color() {
        assert_eq!(Color::Red.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::Red);
    }

    #[test]
    fn test_third_dozen_excludes_zero() {
        // Guarantees a castle loss never records Green as last-loss color
        for n in 25..=36u8 {
            assert_ne!(Outcome::new(n).unwrap().color(), Color::Green);
        }
    }
}
