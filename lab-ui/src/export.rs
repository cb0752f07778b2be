//! Writes the text report to disk, standing in for a browser download.

use std::{
    fs,
    path::{Path, PathBuf},
};

use lab_core::{REPORT_FILE_NAME, REPORT_MIME_TYPE};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("cannot write report to '{}': {source}", path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Where [`write_report`] puts the report inside `dir`.
pub fn report_path(dir: &Path) -> PathBuf {
    dir.join(REPORT_FILE_NAME)
}

/// Writes `report` to `dir/relatorio_reservas.txt`, creating `dir` if needed
/// and replacing any previous report.
pub fn write_report(
    dir: &Path,
    report: &str,
) -> Result<PathBuf, ExportError> {
    let path = report_path(dir);
    let fail = |source| ExportError {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(fail)?;
    fs::write(&path, report).map_err(fail)?;

    info!(path = %path.display(), mime = REPORT_MIME_TYPE, bytes = report.len(), "report written");
    Ok(path)
}
