//! # Detection Labels
//!
//! Turns per-frame detection label files (one detection per line, class id
//! first) into tower configurations. Class 0, 1 and 2 count towards sectors
//! A, B and C; other classes are ignored.

use crate::error::{BuildError, BuildResult};
use crate::params::{Sector, SectorCounts, TowerConfig};
use config::constants::CONFIG_FILE_PREFIX;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn sector_for_class(class: u32) -> Option<Sector> {
    match class {
        0 => Some(Sector::A),
        1 => Some(Sector::B),
        2 => Some(Sector::C),
        _ => None,
    }
}

/// Counts detections per sector in the text of one label file.
///
/// Blank lines are skipped. A line whose first token is not a class id is
/// an error.
///
/// # Example
///
/// ```rust
/// use tower_builder::labels::count_labels;
/// use tower_builder::SectorCounts;
///
/// let text = "0 0.5 0.5 0.1 0.1\n2 0.1 0.2 0.1 0.1\n\n7 0.3 0.3 0.1 0.1\n";
/// assert_eq!(count_labels(text).unwrap(), SectorCounts::new(1, 0, 1));
/// ```
pub fn count_labels(text: &str) -> BuildResult<SectorCounts> {
    let mut counts = SectorCounts::default();
    for (i, line) in text.lines().enumerate() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let class: u32 = token.parse().map_err(|_| BuildError::Label {
            line: i + 1,
            message: format!("invalid class id {token:?}"),
        })?;
        if let Some(sector) = sector_for_class(class) {
            counts[sector] += 1;
        }
    }
    Ok(counts)
}

/// Reads a label file and builds a configuration with the default
/// dimensions and the counted antennas.
pub fn config_from_label_file(path: impl AsRef<Path>) -> BuildResult<TowerConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    Ok(TowerConfig::with_counts(count_labels(&text)?))
}

/// Name of the configuration generated for `label_path`.
pub fn config_file_name(label_path: &Path) -> String {
    let stem = label_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{CONFIG_FILE_PREFIX}{stem}.json")
}

/// Writes one configuration per `.txt` file in `label_dir` into
/// `output_dir`, creating it if needed. Returns the written paths in file
/// name order.
pub fn generate_configs(
    label_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> BuildResult<Vec<PathBuf>> {
    let label_dir = label_dir.as_ref();
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|e| BuildError::io(output_dir, e))?;

    let mut label_files = Vec::new();
    for entry in fs::read_dir(label_dir).map_err(|e| BuildError::io(label_dir, e))? {
        let path = entry.map_err(|e| BuildError::io(label_dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            label_files.push(path);
        }
    }
    label_files.sort();

    let mut written = Vec::with_capacity(label_files.len());
    for label_path in label_files {
        let config = config_from_label_file(&label_path)?;
        let out_path = output_dir.join(config_file_name(&label_path));
        fs::write(&out_path, config.to_json_string()?)
            .map_err(|e| BuildError::io(&out_path, e))?;
        debug!(labels = %label_path.display(), counts = ?config.antenna_counts, "Counted labels");
        debug!("Generated {}", out_path.display());
        written.push(out_path);
    }

    Ok(written)
}
