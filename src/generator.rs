use std::path::Path;

use tracing::debug;

use crate::discovery;
use crate::error::Result;
use crate::render::{render_document, DocumentInputs};
use crate::scanner;

/// Caller-controlled knobs of a generation pass.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Extra include paths emitted before the discovered-file includes, in
    /// the order given.
    pub includes: Vec<String>,
    /// Prefix prepended to every emitted include path.
    pub include_prefix: String,
}

/// Runs one full generation pass: discover test sources under `test_dir`,
/// extract their invocation targets, and render the aggregator document.
///
/// Include directives and invocation lines share the same discovery order,
/// and each file's targets keep their textual order. The first scan or
/// read failure aborts the pass; nothing is written here.
pub fn generate(test_dir: &Path, options: &GeneratorOptions) -> Result<String> {
    let test_files = discovery::walk_test_files(test_dir)?;

    let mut targets = Vec::new();
    for file in &test_files {
        targets.extend(scanner::scan_file(file)?);
    }
    debug!(
        "{} invocation target(s) across {} test file(s)",
        targets.len(),
        test_files.len()
    );

    Ok(render_document(&DocumentInputs {
        includes: options.includes.clone(),
        test_files,
        targets,
        include_prefix: options.include_prefix.clone(),
    }))
}
