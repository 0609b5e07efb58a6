use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};

/// Writes the document to `output_path` in a single call, overwriting any
/// existing file without a backup or diff check.
///
/// The path is made absolute first so the write target does not depend on
/// the working directory of whatever build step runs next. Returns the
/// resolved path.
pub fn write_document(output_path: &Path, document: &str) -> Result<PathBuf> {
    let resolved =
        std::path::absolute(output_path).map_err(|e| Error::resolve(output_path, e))?;
    fs::write(&resolved, document).map_err(|e| Error::write(&resolved, e))?;
    info!("wrote {}", resolved.display());
    Ok(resolved)
}
