pub mod blocks;
pub mod dct;
pub mod dct_codec;
pub mod embedder;
pub mod zigzag;

pub use blocks::{BlockPartitioner, PixelBlock, Tile};
pub use dct::DctBlock;
pub use dct_codec::StegoImageCodec;
pub use embedder::CoefficientEmbedder;
pub use zigzag::ZigzagPositions;
