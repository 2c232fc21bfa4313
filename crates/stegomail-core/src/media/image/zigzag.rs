//! Zigzag traversal of the 8x8 frequency plane, low to high frequency.

use crate::error::StegoError;
use crate::result::Result;

/// Number of AC coefficients in an 8x8 block
pub const AC_SLOTS: usize = 63;

/// Maps zigzag index (0–63) to natural row-major index (row * 8 + col).
#[rustfmt::skip]
pub const ZIGZAG_TO_NATURAL: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Ordered `(row, col)` coefficient positions that carry one bit each.
///
/// Row is the vertical, col the horizontal frequency. Always a prefix of the
/// zigzag sequence with the DC term skipped, so `(0, 0)` never appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigzagPositions {
    positions: Vec<(usize, usize)>,
}

impl ZigzagPositions {
    /// the first `slots` AC positions in zigzag order
    pub fn with_slots(slots: usize) -> Result<Self> {
        if slots == 0 || slots > AC_SLOTS {
            return Err(StegoError::InvalidSlotCount(slots));
        }
        let positions = ZIGZAG_TO_NATURAL[1..=slots]
            .iter()
            .map(|&natural| (natural / 8, natural % 8))
            .collect();

        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_the_classic_low_frequency_slots() {
        let positions = ZigzagPositions::with_slots(8).unwrap();

        assert_eq!(
            positions.iter().collect::<Vec<_>>(),
            vec![
                (0, 1),
                (1, 0),
                (2, 0),
                (1, 1),
                (0, 2),
                (0, 3),
                (1, 2),
                (2, 1)
            ]
        );
    }

    #[test]
    fn should_never_contain_the_dc_term() {
        let positions = ZigzagPositions::with_slots(AC_SLOTS).unwrap();

        assert_eq!(positions.len(), 63);
        assert!(positions.iter().all(|p| p != (0, 0)));
        assert_eq!(positions.iter().last(), Some((7, 7)));
    }

    #[test]
    fn all_indices_covered() {
        let mut seen = [false; 64];
        for &natural in ZIGZAG_TO_NATURAL.iter() {
            assert!(!seen[natural], "natural index {natural} appears twice");
            seen[natural] = true;
        }
    }

    #[test]
    fn should_reject_slot_counts_outside_the_ac_range() {
        assert!(matches!(
            ZigzagPositions::with_slots(0),
            Err(StegoError::InvalidSlotCount(0))
        ));
        assert!(matches!(
            ZigzagPositions::with_slots(64),
            Err(StegoError::InvalidSlotCount(64))
        ));
    }
}
