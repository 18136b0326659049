use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use invite_core::InviteEntry;
use invite_logging::invite_info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::filename::qr_filename;
use crate::qr::render_svg;
use crate::SinkError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] SinkError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrExportSummary {
    pub written: Vec<PathBuf>,
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes one QR image per entry into `dir`, each via temp file then rename.
///
/// Entries with the same name and URL map to the same file.
pub fn export_qr_codes(
    dir: &Path,
    entries: &[InviteEntry],
    size_px: u32,
) -> Result<QrExportSummary, ExportError> {
    ensure_output_dir(dir)?;

    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        let svg = render_svg(&entry.url, size_px)?;
        let target = dir.join(qr_filename(&entry.name, &entry.url));
        write_atomic(dir, &target, &svg)?;
        written.push(target);
    }
    invite_info!("exported {} qr codes to {:?}", written.len(), dir);
    Ok(QrExportSummary { written })
}

fn write_atomic(dir: &Path, target: &Path, content: &str) -> Result<(), ExportError> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(target).map_err(|e| ExportError::Io(e.error))?;
    Ok(())
}
