pub mod codec_options;
pub mod image;
pub mod payload;
mod types;

use std::path::Path;

pub use codec_options::{CodecOptions, DEFAULT_QUANTIZATION_STEP, DEFAULT_SLOTS_PER_BLOCK};
pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
