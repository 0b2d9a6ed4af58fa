use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use super::config::GenConfig;
use super::error::GenError;
use super::palette::*;
use super::table::ColorTable;

/// What happened to one palette of a run.
#[derive(Debug)]
pub struct TableOutcome {
    pub palette: PaletteName,
    pub result: Result<PathBuf, GenError>,
}

impl TableOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Interpolate one palette and write its table. Nothing is left on disk if
/// the resolution check or the write fails.
pub fn generate_table(palette: &Palette, cfg: &GenConfig) -> Result<PathBuf, GenError> {
    palette.check_resolution(cfg.samples)?;
    let path = cfg.table_path(palette.name);

    let before = Instant::now();
    let table = ColorTable::generate(palette, cfg.samples);
    log::debug!(
        "{}: interpolated {} samples over {} control points in {:?}",
        palette.name,
        table.len(),
        palette.points.len(),
        before.elapsed()
    );

    table.save(&path)?;
    Ok(path)
}

fn run_batch(palettes: &[Palette], cfg: &GenConfig) -> Vec<TableOutcome> {
    palettes
        .iter()
        .map(|palette| {
            log::info!("Generating {} table...", palette.name);
            let result = generate_table(palette, cfg);
            match &result {
                Ok(path) => log::info!("Wrote '{}'", path.display()),
                Err(e) => log::error!("Skipping {}: {}", palette.name, e),
            }
            TableOutcome { palette: palette.name, result }
        })
        .collect()
}

/// Generate every selected palette. Outcomes come back in catalog order
/// whatever the thread count.
pub fn generate(cfg: &GenConfig) -> Vec<TableOutcome> {
    let palettes = cfg.selected();
    let threads = cfg.threads.clamp(1, palettes.len().max(1));

    if threads == 1 {
        return run_batch(&palettes, cfg);
    }

    let per_thread = palettes.len().div_ceil(threads);
    thread::scope(|s| {
        let handles: Vec<_> = palettes
            .chunks(per_thread)
            .map(|batch| s.spawn(move || run_batch(batch, cfg)))
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}
