//! Orthonormal 2-D DCT-II on 8x8 blocks and its inverse.

use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::sync::OnceLock;

use crate::media::image::blocks::{check_block_size, PixelBlock, BLOCK_SIZE};
use crate::result::Result;

const LEVEL_SHIFT: f64 = 128.0;

/// 8x8 frequency coefficients, indexed `[v][u]` with `v` the vertical and `u`
/// the horizontal frequency. `[0][0]` is the DC term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DctBlock {
    coefficients: [[f64; BLOCK_SIZE]; BLOCK_SIZE],
}

impl DctBlock {
    pub fn new(coefficients: [[f64; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        Self { coefficients }
    }

    pub fn try_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        check_block_size(rows.len(), rows.iter().map(|r| r.as_ref().len()))?;
        let mut coefficients = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (target, row) in coefficients.iter_mut().zip(rows) {
            target.copy_from_slice(row.as_ref());
        }

        Ok(Self::new(coefficients))
    }

    pub fn get(&self, v: usize, u: usize) -> f64 {
        self.coefficients[v][u]
    }

    pub fn set(&mut self, v: usize, u: usize, value: f64) {
        self.coefficients[v][u] = value;
    }

    pub fn dc(&self) -> f64 {
        self.coefficients[0][0]
    }

    pub fn rows(&self) -> &[[f64; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.coefficients
    }
}

/// `COSINE[k][x] = cos((2x + 1) k π / 16)` for frequency `k` and sample `x`
static COSINE: OnceLock<[[f64; BLOCK_SIZE]; BLOCK_SIZE]> = OnceLock::new();

fn cosine_table() -> &'static [[f64; BLOCK_SIZE]; BLOCK_SIZE] {
    COSINE.get_or_init(|| {
        let mut table = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (k, row) in table.iter_mut().enumerate() {
            for (x, entry) in row.iter_mut().enumerate() {
                *entry = ((2 * x + 1) as f64 * k as f64 * PI / 16.0).cos();
            }
        }
        table
    })
}

#[inline]
fn alpha(k: usize) -> f64 {
    if k == 0 {
        FRAC_1_SQRT_2
    } else {
        1.0
    }
}

/// Forward transform of a pixel block, intensities are level shifted by -128 first.
///
/// Infallible, a [`PixelBlock`] is always 8x8. Loosely sized input is checked by
/// [`PixelBlock::try_from_rows`] and [`DctBlock::try_from_rows`].
pub fn forward(block: &PixelBlock) -> DctBlock {
    let cos = cosine_table();
    let mut out = DctBlock::new([[0.0; BLOCK_SIZE]; BLOCK_SIZE]);

    for v in 0..BLOCK_SIZE {
        for u in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for y in 0..BLOCK_SIZE {
                for x in 0..BLOCK_SIZE {
                    let sample = block.get(x, y) as f64 - LEVEL_SHIFT;
                    sum += sample * cos[u][x] * cos[v][y];
                }
            }
            out.set(v, u, 0.25 * alpha(u) * alpha(v) * sum);
        }
    }

    out
}

/// Inverse transform back to intensities, rounded to nearest and clamped to 0..=255.
///
/// Clamping loses information, callers that need the coefficients back must
/// check the result.
pub fn inverse(block: &DctBlock) -> PixelBlock {
    let cos = cosine_table();
    let mut out = PixelBlock::uniform(0);

    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for v in 0..BLOCK_SIZE {
                for u in 0..BLOCK_SIZE {
                    sum += alpha(u) * alpha(v) * block.get(v, u) * cos[u][x] * cos[v][y];
                }
            }
            let value = (0.25 * sum + LEVEL_SHIFT).round().clamp(0.0, 255.0);
            out.set(x, y, value as u8);
        }
    }

    out
}
