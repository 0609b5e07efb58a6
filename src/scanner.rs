use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::error::{Error, Result};

/// One test function the generated entry point must invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationTarget {
    /// Captured suffix of the declaration, without the `test_` prefix.
    pub name: String,
}

/// Declaration shape of a test function in the suite's C sources:
/// `static char *test_<name>(`.
const TEST_DECL_PATTERN: &str = r"static char ?\* ?test_([\w_]+)\(";

fn test_decl_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(TEST_DECL_PATTERN).expect("declaration pattern compiles"))
}

/// Extracts every invocation target from `source`, in textual order.
///
/// Matches are non-overlapping. Names are not deduplicated and not checked
/// against C identifier rules; a duplicate or bogus declaration surfaces
/// when the generated file is compiled, not here.
pub fn extract_targets(source: &str) -> Vec<InvocationTarget> {
    test_decl_regex()
        .captures_iter(source)
        .map(|caps| InvocationTarget {
            name: caps[1].to_string(),
        })
        .collect()
}

/// Reads `path` and extracts its invocation targets.
pub fn scan_file(path: &Path) -> Result<Vec<InvocationTarget>> {
    let source = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let targets = extract_targets(&source);
    trace!(
        "{}: {} test declaration(s)",
        path.display(),
        targets.len()
    );
    Ok(targets)
}
