//! Conceals single bits in the magnitude of low frequency AC coefficients.
//!
//! A coefficient is truncated, its sign kept (zero counts as positive) and its
//! magnitude snapped to the middle of a lattice cell of pitch `step`. The parity
//! of the cell index is the bit, so a reader only needs `floor(|c| / step) mod 2`
//! and any disturbance smaller than `step / 2` leaves the bit intact.

use crate::bit_stream::BitStream;
use crate::media::codec_options::CodecOptions;
use crate::media::image::dct::DctBlock;
use crate::media::image::zigzag::ZigzagPositions;
use crate::result::Result;

/// moves the coefficient `c` into a lattice cell whose parity equals `bit`
pub fn conceal(c: f64, bit: u8, step: f64) -> f64 {
    let truncated = c.trunc();
    let sign = if truncated < 0.0 { -1.0 } else { 1.0 };
    let ratio = truncated.abs() / step;
    let mut level = ratio.floor();

    if parity(level) != bit & 1 {
        if ratio - level < 0.5 && level >= 1.0 {
            level -= 1.0;
        } else {
            level += 1.0;
        }
    }

    sign * (level * step + step / 2.0)
}

/// the bit a coefficient carries
pub fn reveal(c: f64, step: f64) -> u8 {
    parity((c.abs() / step).floor())
}

#[inline]
fn parity(level: f64) -> u8 {
    (level as u64 % 2) as u8
}

/// Writes and reads bits over the zigzag slots of one [`DctBlock`]
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientEmbedder {
    positions: ZigzagPositions,
    step: f64,
}

impl CoefficientEmbedder {
    pub fn new(positions: ZigzagPositions, step: f64) -> Self {
        Self { positions, step }
    }

    pub fn from_options(options: &CodecOptions) -> Result<Self> {
        options.validate()?;
        let positions = ZigzagPositions::with_slots(options.slots_per_block)?;

        Ok(Self::new(positions, options.quantization_step))
    }

    /// capacity of a single block
    pub fn bits_per_block(&self) -> usize {
        self.positions.len()
    }

    /// Embeds bits starting at `cursor` until either the slots or the bits run out.
    /// Returns the advanced cursor, the DC coefficient is never written.
    pub fn embed(&self, block: &mut DctBlock, bits: &BitStream, cursor: usize) -> usize {
        let mut cursor = cursor;
        for (v, u) in self.positions.iter() {
            let Some(bit) = bits.get(cursor) else {
                break;
            };
            block.set(v, u, conceal(block.get(v, u), bit, self.step));
            cursor += 1;
        }

        cursor
    }

    /// Reads one bit per slot, in slot order
    pub fn extract(&self, block: &DctBlock) -> Vec<u8> {
        self.positions
            .iter()
            .map(|(v, u)| reveal(block.get(v, u), self.step))
            .collect()
    }
}
