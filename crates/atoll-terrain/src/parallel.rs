//! Parallel row-based grid generation on a bounded worker pool.

use crossbeam_channel::bounded;

use crate::config::{GridConfig, GridConfigError};
use crate::falloff::FalloffField;
use crate::grid::{Grid, generate_row};
use crate::land::Cell;
use crate::noise_field::NoiseField;

/// Worker count leaving one core free for the caller.
pub fn default_thread_count() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}

/// Generates a grid with `thread_count` worker threads, one row per task.
///
/// Output is bit-identical to [`Grid::generate`]: every worker builds its
/// own noise and falloff fields from the same config, each row is classified
/// independently, and rows are reassembled in index order regardless of
/// completion order.
pub fn generate_parallel(
    config: &GridConfig,
    thread_count: usize,
) -> Result<Grid, GridConfigError> {
    config.validate()?;

    let thread_count = thread_count.max(1);
    let size = config.size;

    let (row_tx, row_rx) = bounded::<u32>(size as usize);
    let (done_tx, done_rx) = bounded::<(u32, Vec<Cell>)>(size as usize);

    // Both channels hold every row, so neither send can block.
    for y in 0..size {
        row_tx.send(y).expect("row queue sized to hold every row");
    }
    drop(row_tx);

    let mut rows: Vec<Option<Vec<Cell>>> = (0..size).map(|_| None).collect();
    std::thread::scope(|scope| {
        for _ in 0..thread_count {
            let row_rx = row_rx.clone();
            let done_tx = done_tx.clone();
            std::thread::Builder::new()
                .name("terrain-gen-worker".into())
                .spawn_scoped(scope, move || {
                    let noise = NoiseField::new(config.seed, config.noise_scale);
                    let falloff = FalloffField::new(config.falloff_sharpness);
                    while let Ok(y) = row_rx.recv() {
                        let cells = generate_row(config, &noise, &falloff, y);
                        let _ = done_tx.send((y, cells));
                    }
                })
                .expect("failed to spawn terrain generation worker");
        }
        drop(done_tx);

        for (y, cells) in done_rx {
            rows[y as usize] = Some(cells);
        }
    });

    let mut cells = Vec::with_capacity(size as usize * size as usize);
    for row in rows {
        cells.extend(row.expect("worker pool completed every row"));
    }
    Ok(Grid::from_cells(size, cells))
}
