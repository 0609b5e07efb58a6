use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension of the test sources the walk selects. The match is exact and
/// case-sensitive, so `lexer.C` is not a test source.
pub const TEST_SOURCE_EXTENSION: &str = "c";

/// Recursively collects every test source under `root`, in walk order.
///
/// The walk order is whatever order the filesystem yields. It is not
/// sorted, and it fixes both the include-directive order and the
/// invocation order of the generated document. A missing or non-directory
/// root yields an empty set rather than an error.
pub fn walk_test_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        debug!(
            "test directory {} does not exist, nothing to scan",
            root.display()
        );
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::scan(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension() == Some(OsStr::new(TEST_SOURCE_EXTENSION)) {
            files.push(entry.path().to_path_buf());
        }
    }

    debug!(
        "discovered {} test source file(s) under {}",
        files.len(),
        root.display()
    );
    Ok(files)
}
