//! Writing exported series to disk.
//!
//! Files are written through a temporary file in the target directory and
//! then moved into place, so a failed write never leaves a partial file.

use crate::errors::PersistenceError;
use crate::storage::series::SeriesStore;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Data that can be written as a text export.
pub trait CsvExport {
    /// Default file stem for the export.
    fn export_name(&self) -> &str;

    /// Full export text.
    fn export_csv(&self) -> String;
}

impl CsvExport for SeriesStore {
    fn export_name(&self) -> &str {
        self.label()
    }

    fn export_csv(&self) -> String {
        self.to_csv()
    }
}

/// Append `.csv` unless the path already ends in it.
pub fn with_csv_extension(path: &Path) -> PathBuf {
    let has_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if has_csv {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".csv");
        PathBuf::from(name)
    }
}

/// Write `data` to `path` (with `.csv` appended if missing).
///
/// If the file already exists, `confirm_overwrite` is asked first; `false`
/// aborts with [`PersistenceError::OverwriteDeclined`]. Returns the path
/// actually written.
pub fn write_export<F>(
    path: &Path,
    data: &str,
    confirm_overwrite: F,
) -> Result<PathBuf, PersistenceError>
where
    F: FnOnce(&Path) -> bool,
{
    let target = with_csv_extension(path);

    if target.is_dir() {
        return Err(PersistenceError::IsDirectory(target));
    }
    if target.exists() {
        debug!("Export target {} exists, asking to overwrite", target.display());
        if !confirm_overwrite(&target) {
            return Err(PersistenceError::OverwriteDeclined(target));
        }
    }

    let io_err = |source| PersistenceError::Io {
        path: target.clone(),
        source,
    };

    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(data.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;

    info!("Wrote {} bytes to {}", data.len(), target.display());
    Ok(target)
}

/// Write an exporter's text to `path`.
pub fn save_export<E, F>(
    export: &E,
    path: &Path,
    confirm_overwrite: F,
) -> Result<PathBuf, PersistenceError>
where
    E: CsvExport + ?Sized,
    F: FnOnce(&Path) -> bool,
{
    write_export(path, &export.export_csv(), confirm_overwrite)
}
