use image::RgbaImage;
use log::{debug, info};

use crate::bit_stream::{self, BitStream};
use crate::error::StegoError;
use crate::media::codec_options::CodecOptions;
use crate::media::image::blocks::{read_block, write_block, BlockPartitioner, PixelBlock, Tile};
use crate::media::image::dct;
use crate::media::image::embedder::CoefficientEmbedder;
use crate::result::Result;

/// Margins tried in turn when a block clips at 0 or 255 after embedding
const CONTRACTION_MARGINS: [u8; 5] = [0, 24, 48, 80, 112];

/// Hides bits in the DCT domain of the grayscale version of an image.
///
/// Tiles are visited in raster order, each complete 8x8 tile carries
/// `slots_per_block` bits. Tiles that stick out of the image are skipped,
/// their padding would be lost on write back. The capacity of an image is
/// therefore `floor(width / 8) * floor(height / 8) * slots_per_block` bits,
/// partial tiles at the right and bottom edge do not count.
///
/// Every written block is read back before it is accepted. A block that
/// would clip at 0 or 255 has its intensities contracted towards the middle
/// and is embedded again, if no contraction helps the embedding fails with
/// [`StegoError::BitsLost`].
#[derive(Debug, Clone)]
pub struct StegoImageCodec {
    embedder: CoefficientEmbedder,
}

impl StegoImageCodec {
    pub fn new(options: &CodecOptions) -> Result<Self> {
        Ok(Self {
            embedder: CoefficientEmbedder::from_options(options)?,
        })
    }

    pub fn bits_per_block(&self) -> usize {
        self.embedder.bits_per_block()
    }

    /// number of bits a `width` x `height` image can carry
    pub fn capacity(&self, width: u32, height: u32) -> usize {
        BlockPartitioner::new(width, height).complete_tile_count() * self.bits_per_block()
    }

    pub fn capacity_of(&self, image: &RgbaImage) -> usize {
        let (width, height) = image.dimensions();
        self.capacity(width, height)
    }

    /// Returns a copy of `carrier` with `payload` concealed in it.
    ///
    /// Fails with [`StegoError::PayloadTooLarge`] before touching any pixel,
    /// and with [`StegoError::BitsLost`] rather than returning an image that
    /// would not give the payload back.
    pub fn embed(&self, carrier: &RgbaImage, payload: &[u8]) -> Result<RgbaImage> {
        let bits = bit_stream::to_bits(Some(payload))?;
        self.embed_bits(carrier, &bits)
    }

    pub fn embed_bits(&self, carrier: &RgbaImage, bits: &BitStream) -> Result<RgbaImage> {
        let capacity_bits = self.capacity_of(carrier);
        let required_bits = bits.len();
        debug!("embedding {required_bits} bits, capacity is {capacity_bits} bits");
        if required_bits > capacity_bits {
            return Err(StegoError::PayloadTooLarge {
                required_bits,
                capacity_bits,
            });
        }

        let mut image = carrier.clone();
        let mut cursor = 0;
        let mut touched = 0;
        for tile in BlockPartitioner::for_image(carrier)
            .tiles()
            .filter(|t| t.is_complete())
        {
            if cursor >= required_bits {
                break;
            }
            let (block, next) =
                self.conceal_in_block(&read_block(&image, &tile), &tile, bits, cursor)?;
            write_block(&mut image, &tile, &block);
            cursor = next;
            touched += 1;
        }

        info!("embedded {cursor} bits into {touched} blocks");
        Ok(image)
    }

    /// embeds the bits from `cursor` on into `block`, returns the new pixels and the advanced cursor
    fn conceal_in_block(
        &self,
        block: &PixelBlock,
        tile: &Tile,
        bits: &BitStream,
        cursor: usize,
    ) -> Result<(PixelBlock, usize)> {
        let mut lost_bits = 0;
        for margin in CONTRACTION_MARGINS {
            let mut coefficients = dct::forward(&block.contracted(margin));
            let next = self.embedder.embed(&mut coefficients, bits, cursor);
            let written = dct::inverse(&coefficients);

            lost_bits = self.count_lost_bits(&written, &bits.as_slice()[cursor..next]);
            if lost_bits == 0 {
                if margin > 0 {
                    debug!(
                        "block at ({}, {}) contracted by {margin} to keep clear of 0 and 255",
                        tile.x, tile.y
                    );
                }
                return Ok((written, next));
            }
        }

        Err(StegoError::BitsLost {
            x: tile.x,
            y: tile.y,
            lost_bits,
        })
    }

    /// gray pixels read back unchanged, so `written` is exactly what a reader will see
    fn count_lost_bits(&self, written: &PixelBlock, expected: &[u8]) -> usize {
        self.embedder
            .extract(&dct::forward(written))
            .into_iter()
            .zip(expected)
            .filter(|&(read, &bit)| read != bit)
            .count()
    }

    /// Reads `total_bits` bits back and turns them into bytes.
    pub fn extract(&self, image: &RgbaImage, total_bits: usize) -> Result<Vec<u8>> {
        let bits = self.extract_bits(image, total_bits)?;
        bit_stream::from_bits(&bits)
    }

    pub fn extract_bits(&self, image: &RgbaImage, total_bits: usize) -> Result<BitStream> {
        let capacity_bits = self.capacity_of(image);
        debug!("extracting {total_bits} bits, capacity is {capacity_bits} bits");
        if total_bits > capacity_bits {
            return Err(StegoError::PayloadTooLarge {
                required_bits: total_bits,
                capacity_bits,
            });
        }

        let mut bits = Vec::with_capacity(total_bits);
        for tile in BlockPartitioner::for_image(image)
            .tiles()
            .filter(|t| t.is_complete())
        {
            if bits.len() >= total_bits {
                break;
            }
            let coefficients = dct::forward(&read_block(image, &tile));
            bits.extend(self.embedder.extract(&coefficients));
        }
        bits.truncate(total_bits);

        Ok(BitStream::from_bits(bits))
    }
}
