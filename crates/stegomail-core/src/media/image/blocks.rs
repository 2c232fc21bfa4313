use image::{Rgba, RgbaImage};

use crate::error::StegoError;
use crate::result::Result;

/// Edge length of a square tile
pub const BLOCK_SIZE: usize = 8;

/// Intensity used for tile pixels that lie outside of the image
pub const PADDING_INTENSITY: u8 = 0;

/// 8x8 grayscale intensities, indexed `[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBlock {
    pixels: [[u8; BLOCK_SIZE]; BLOCK_SIZE],
}

impl PixelBlock {
    pub fn new(pixels: [[u8; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        Self { pixels }
    }

    pub fn uniform(intensity: u8) -> Self {
        Self::new([[intensity; BLOCK_SIZE]; BLOCK_SIZE])
    }

    /// builds a block from loosely sized rows, anything but 8x8 is rejected
    pub fn try_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let mut pixels = [[0u8; BLOCK_SIZE]; BLOCK_SIZE];
        check_block_size(rows.len(), rows.iter().map(|r| r.as_ref().len()))?;
        for (target, row) in pixels.iter_mut().zip(rows) {
            target.copy_from_slice(row.as_ref());
        }

        Ok(Self::new(pixels))
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, intensity: u8) {
        self.pixels[y][x] = intensity;
    }

    pub fn rows(&self) -> &[[u8; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.pixels
    }

    /// maps the intensities linearly into `margin..=255 - margin`, a margin of 0 is the identity
    pub fn contracted(&self, margin: u8) -> Self {
        let margin = u32::from(margin.min(127));
        let span = 255 - 2 * margin;
        let mut out = *self;
        for value in out.pixels.iter_mut().flatten() {
            *value = (margin + (u32::from(*value) * span + 127) / 255) as u8;
        }

        out
    }
}

/// `rows` x every entry of `cols` must be exactly 8x8
pub(crate) fn check_block_size(rows: usize, mut cols: impl Iterator<Item = usize>) -> Result<()> {
    if rows != BLOCK_SIZE {
        return Err(StegoError::BlockSize {
            rows,
            cols: cols.next().unwrap_or(0),
        });
    }
    if let Some(bad) = cols.find(|&c| c != BLOCK_SIZE) {
        return Err(StegoError::BlockSize { rows, cols: bad });
    }

    Ok(())
}

/// Position of one tile in the raster together with the part of it that lies inside the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// left edge in pixels
    pub x: u32,
    /// top edge in pixels
    pub y: u32,
    /// in-bounds width, 1..=8
    pub width: u32,
    /// in-bounds height, 1..=8
    pub height: u32,
}

impl Tile {
    /// true when no pixel of the tile needs padding
    pub fn is_complete(&self) -> bool {
        self.width as usize == BLOCK_SIZE && self.height as usize == BLOCK_SIZE
    }
}

/// Splits a `width` x `height` raster into 8x8 tiles, row-major, left-to-right, top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPartitioner {
    width: u32,
    height: u32,
}

impl BlockPartitioner {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn for_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(width, height)
    }

    pub fn tiles_wide(&self) -> u32 {
        self.width.div_ceil(BLOCK_SIZE as u32)
    }

    pub fn tiles_tall(&self) -> u32 {
        self.height.div_ceil(BLOCK_SIZE as u32)
    }

    /// all tiles, including the partial ones at the right and bottom edge
    pub fn tile_count(&self) -> usize {
        self.tiles_wide() as usize * self.tiles_tall() as usize
    }

    /// tiles that lie completely inside of the image
    pub fn complete_tile_count(&self) -> usize {
        let size = BLOCK_SIZE as u32;
        (self.width / size) as usize * (self.height / size) as usize
    }

    /// all tiles in raster order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> {
        let Self { width, height } = *self;
        let size = BLOCK_SIZE as u32;

        (0..self.tiles_tall()).flat_map(move |row| {
            (0..width.div_ceil(size)).map(move |col| {
                let (x, y) = (col * size, row * size);
                Tile {
                    x,
                    y,
                    width: size.min(width - x),
                    height: size.min(height - y),
                }
            })
        })
    }
}

/// grayscale intensity of a pixel, exact for pixels with R = G = B
pub fn luma(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    ((19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + (1 << 15)) >> 16) as u8
}

/// reads the tile as grayscale, coordinates outside of the image read as [`PADDING_INTENSITY`]
pub fn read_block(image: &RgbaImage, tile: &Tile) -> PixelBlock {
    let mut block = PixelBlock::uniform(PADDING_INTENSITY);
    for j in 0..tile.height {
        for i in 0..tile.width {
            let pixel = image.get_pixel(tile.x + i, tile.y + j);
            block.set(i as usize, j as usize, luma(pixel));
        }
    }

    block
}

/// writes the in-bounds part of `block` as gray pixels, the alpha channel is left alone
pub fn write_block(image: &mut RgbaImage, tile: &Tile, block: &PixelBlock) {
    for j in 0..tile.height {
        for i in 0..tile.width {
            let v = block.get(i as usize, j as usize);
            let pixel = image.get_pixel_mut(tile.x + i, tile.y + j);
            *pixel = Rgba([v, v, v, pixel.0[3]]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn should_partition_in_raster_order() {
        let tiles: Vec<(u32, u32)> = BlockPartitioner::new(16, 16)
            .tiles()
            .map(|t| (t.x, t.y))
            .collect();

        assert_eq!(tiles, vec![(0, 0), (8, 0), (0, 8), (8, 8)]);
    }

    #[test]
    fn should_count_partial_tiles_at_the_edges() {
        let partitioner = BlockPartitioner::new(20, 9);
        let tiles: Vec<Tile> = partitioner.tiles().collect();

        assert_eq!(partitioner.tile_count(), 6);
        assert_eq!(tiles.len(), 6);
        assert_eq!(partitioner.complete_tile_count(), 2);
        assert_eq!(
            tiles[2],
            Tile {
                x: 16,
                y: 0,
                width: 4,
                height: 8
            }
        );
        assert_eq!(
            tiles[5],
            Tile {
                x: 16,
                y: 8,
                width: 4,
                height: 1
            }
        );
        assert_eq!(tiles.iter().filter(|t| t.is_complete()).count(), 2);
    }

    #[test]
    fn should_have_no_tiles_for_an_empty_image() {
        let partitioner = BlockPartitioner::new(0, 0);

        assert_eq!(partitioner.tiles().count(), 0);
        assert_eq!(partitioner.complete_tile_count(), 0);
    }

    #[test]
    fn should_pad_pixels_outside_of_the_image() {
        let img = RgbaImage::from_pixel(5, 3, Rgba([200, 200, 200, 255]));
        let tile = BlockPartitioner::for_image(&img).tiles().next().unwrap();

        let block = read_block(&img, &tile);

        assert_eq!(block.get(4, 2), 200);
        assert_eq!(block.get(5, 2), PADDING_INTENSITY);
        assert_eq!(block.get(4, 3), PADDING_INTENSITY);
        assert_eq!(block.get(7, 7), PADDING_INTENSITY);
    }

    #[test]
    fn should_never_write_padded_coordinates_back() {
        let mut img = RgbaImage::from_pixel(5, 3, Rgba([10, 20, 30, 128]));
        let tile = BlockPartitioner::for_image(&img).tiles().next().unwrap();

        write_block(&mut img, &tile, &PixelBlock::uniform(77));

        assert_eq!(img.dimensions(), (5, 3));
        assert!(img.pixels().all(|p| *p == Rgba([77, 77, 77, 128])));
    }

    #[test]
    fn should_read_back_what_was_written() {
        let mut img = prepare_gradient_image(16, 16);
        let tile = BlockPartitioner::for_image(&img).tiles().nth(3).unwrap();
        let mut block = PixelBlock::uniform(0);
        for y in 0..BLOCK_SIZE {
            for x in 0..BLOCK_SIZE {
                block.set(x, y, (x * 30 + y) as u8);
            }
        }

        write_block(&mut img, &tile, &block);

        assert_eq!(read_block(&img, &tile), block);
    }

    #[test]
    fn contracted_should_pull_intensities_away_from_the_rails() {
        let mut block = PixelBlock::uniform(0);
        for x in 0..BLOCK_SIZE {
            block.set(x, 0, 255);
            block.set(x, 1, 128);
        }

        assert_eq!(block.contracted(0), block);

        let contracted = block.contracted(48);
        assert_eq!(contracted.get(0, 0), 207);
        assert_eq!(contracted.get(0, 1), 128);
        assert_eq!(contracted.get(0, 7), 48);
        assert_eq!(block.contracted(200), block.contracted(127));
    }

    #[test]
    fn luma_should_be_exact_for_gray_pixels() {
        for v in 0..=255u8 {
            assert_eq!(luma(&Rgba([v, v, v, 255])), v);
        }
        assert_eq!(luma(&Rgba([255, 0, 0, 255])), 76);
    }

    #[test]
    fn should_reject_blocks_that_are_not_8x8() {
        assert!(PixelBlock::try_from_rows(&[[0u8; 8]; 8]).is_ok());
        assert!(matches!(
            PixelBlock::try_from_rows(&[[0u8; 8]; 7]),
            Err(StegoError::BlockSize { rows: 7, cols: 8 })
        ));
        assert!(matches!(
            PixelBlock::try_from_rows(&[vec![0u8; 8], vec![0u8; 9]]),
            Err(StegoError::BlockSize { rows: 2, cols: 8 })
        ));

        let mut ragged = vec![vec![0u8; 8]; 8];
        ragged[5].pop();
        assert!(matches!(
            PixelBlock::try_from_rows(&ragged),
            Err(StegoError::BlockSize { rows: 8, cols: 7 })
        ));
    }
}
