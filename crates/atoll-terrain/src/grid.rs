//! The classified cell grid and its serial generation entry point.

use crate::classify::classify;
use crate::config::{GridConfig, GridConfigError};
use crate::falloff::FalloffField;
use crate::land::{Cell, LandType};
use crate::noise_field::NoiseField;

/// A fully generated `size × size` grid of classified cells.
///
/// Built in one shot by [`Grid::generate`] (or
/// [`generate_parallel`](crate::generate_parallel)) and read-only afterward;
/// mesh and texture builders consume it by shared reference. Cells are stored
/// row-major (`index = y * size + x`).
pub struct Grid {
    size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Generates a grid cell by cell on the calling thread.
    ///
    /// The config is validated first; an invalid config fails before any
    /// allocation. Identical configs reproduce bit-identical grids.
    pub fn generate(config: &GridConfig) -> Result<Self, GridConfigError> {
        config.validate()?;

        let noise = NoiseField::new(config.seed, config.noise_scale);
        let falloff = FalloffField::new(config.falloff_sharpness);
        let size = config.size;

        let mut cells = Vec::with_capacity(size as usize * size as usize);
        for y in 0..size {
            cells.extend(generate_row(config, &noise, &falloff, y));
        }
        Ok(Self { size, cells })
    }

    /// Builds a grid from pre-classified cells.
    ///
    /// # Panics
    ///
    /// Panics unless `cells.len() == size * size`.
    pub fn from_cells(size: u32, cells: Vec<Cell>) -> Self {
        assert_eq!(
            cells.len(),
            size as usize * size as usize,
            "cell count must match size²"
        );
        Self { size, cells }
    }

    /// Side length of the grid in cells.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Cell {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) out of bounds for size {}",
            self.size
        );
        self.cells[y as usize * self.size as usize + x as usize]
    }

    /// Iterates all cells with their coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        let size = self.size as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            ((i % size) as u32, (i / size) as u32, *cell)
        })
    }

    /// Number of cells classified as `land_type`.
    pub fn count_of(&self, land_type: LandType) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.land_type == land_type)
            .count()
    }

    /// Number of non-water cells.
    pub fn land_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.land_type.is_water())
            .count()
    }
}

/// Classifies one row of cells. Shared by the serial and parallel paths so
/// both produce identical output.
pub(crate) fn generate_row(
    config: &GridConfig,
    noise: &NoiseField,
    falloff: &FalloffField,
    y: u32,
) -> Vec<Cell> {
    (0..config.size)
        .map(|x| {
            let n = noise.sample(f64::from(x), f64::from(y));
            let b = falloff.bias(f64::from(x), f64::from(y), config.size);
            Cell {
                land_type: classify(n, b, &config.levels),
            }
        })
        .collect()
}
