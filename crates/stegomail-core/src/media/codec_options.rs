use crate::error::StegoError;
use crate::media::image::zigzag::AC_SLOTS;
use crate::result::Result;

/// Default number of zigzag AC slots used per 8x8 block
pub const DEFAULT_SLOTS_PER_BLOCK: usize = 8;

/// Default lattice pitch for concealing bits in coefficients
pub const DEFAULT_QUANTIZATION_STEP: f64 = 10.0;

/// Options for hiding data in the DCT domain of an image
#[derive(Debug, Clone, PartialEq)]
pub struct CodecOptions {
    /// How many of the low frequency AC coefficients, in zigzag order, carry a bit.
    /// The DC coefficient is never used.
    ///
    /// Note this number influences the capacity directly: `complete blocks × slots_per_block`.
    pub slots_per_block: usize,

    /// Pitch of the lattice the coefficient magnitudes are snapped to.
    ///
    /// Larger steps survive the rounding of pixels to integers with more margin,
    /// but distort the image more.
    pub quantization_step: f64,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            slots_per_block: DEFAULT_SLOTS_PER_BLOCK,
            quantization_step: DEFAULT_QUANTIZATION_STEP,
        }
    }
}

impl CodecOptions {
    pub fn with_slots_per_block(mut self, slots_per_block: usize) -> Self {
        self.slots_per_block = slots_per_block;
        self
    }

    pub fn with_quantization_step(mut self, quantization_step: f64) -> Self {
        self.quantization_step = quantization_step;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.slots_per_block == 0 || self.slots_per_block > AC_SLOTS {
            return Err(StegoError::InvalidSlotCount(self.slots_per_block));
        }
        if !self.quantization_step.is_finite() || self.quantization_step < 1.0 {
            return Err(StegoError::InvalidQuantizationStep(self.quantization_step));
        }

        Ok(())
    }
}
