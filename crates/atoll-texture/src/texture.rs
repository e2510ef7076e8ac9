//! Row-major RGBA rasterization of the terrain grid.

use std::path::Path;

use atoll_terrain::Grid;

use crate::color::ColorMap;

/// Errors from texture export.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// PNG encode or write failure.
    #[error("failed to write texture: {0}")]
    Image(#[from] image::ImageError),
}

/// A `size × size` RGBA pixel buffer, one pixel per grid cell.
///
/// Pixels are stored row-major (`index = y * size + x`), four bytes each.
#[derive(Clone, Debug)]
pub struct TerrainTexture {
    size: u32,
    pixels: Vec<u8>,
}

impl TerrainTexture {
    /// Rasterizes `grid` through `colors`.
    pub fn build(grid: &Grid, colors: &ColorMap) -> Self {
        let size = grid.size();
        let mut pixels = vec![0; size as usize * size as usize * 4];
        for (x, y, cell) in grid.cells() {
            let rgba = colors.color_for(cell.land_type);
            let idx = (y as usize * size as usize + x as usize) * 4;
            pixels[idx..idx + 4].copy_from_slice(&rgba);
        }
        Self { size, pixels }
    }

    /// Side length in pixels (equal to the grid size).
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes, row-major, length `size * size * 4`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel for cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.size && y < self.size,
            "pixel ({x}, {y}) out of bounds for size {}",
            self.size
        );
        let idx = (y as usize * self.size as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Copies the buffer into an [`image::RgbaImage`].
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.size, self.size, self.pixels.clone())
            .expect("pixel buffer length matches dimensions")
    }

    /// Writes the texture as a PNG file.
    ///
    /// An `upscale` factor above 1 enlarges the image by that integer factor
    /// with nearest-neighbor sampling, keeping each cell a crisp block.
    /// A factor of 0 is treated as 1.
    pub fn save_png(&self, path: &Path, upscale: u32) -> Result<(), TextureError> {
        let img = self.to_image();
        let factor = upscale.max(1);
        if factor == 1 {
            img.save(path)?;
        } else {
            let scaled = image::imageops::resize(
                &img,
                self.size * factor,
                self.size * factor,
                image::imageops::FilterType::Nearest,
            );
            scaled.save(path)?;
        }
        Ok(())
    }
}
