//! Grid rasterization: one flat color per cell and PNG export.

mod color;
mod texture;

pub use color::ColorMap;
pub use texture::{TerrainTexture, TextureError};
