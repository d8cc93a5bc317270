//! Filesystem write adapter for converted timelines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::InterchangeError;
use crate::model::Timeline;

/// Canonical file extension for interchange documents.
pub const FILE_EXTENSION: &str = "timeline";

/// Writes `timeline` as pretty-printed JSON.
///
/// The canonical extension is appended unless the path already carries
/// it (case-insensitive). The destination directory must already exist.
/// Returns the path actually written.
pub fn write_timeline_file(timeline: &Timeline, path: &Path) -> Result<PathBuf, InterchangeError> {
    let path = normalize_extension(path);

    let file = File::create(&path).map_err(|e| InterchangeError::write(&path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, timeline)
        .map_err(|e| InterchangeError::write(&path, e))?;
    writer
        .flush()
        .map_err(|e| InterchangeError::write(&path, e))?;

    info!("wrote timeline '{}' to {}", timeline.name, path.display());

    Ok(path)
}

fn normalize_extension(path: &Path) -> PathBuf {
    let already_there = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION));

    if already_there {
        return path.to_path_buf();
    }

    // Appended, not replaced: "cut.v2" becomes "cut.v2.timeline".
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(FILE_EXTENSION);
    PathBuf::from(name)
}
