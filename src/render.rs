use std::path::PathBuf;

use crate::scanner::InvocationTarget;

/// First line of every generated document.
pub const GENERATED_FILE_HEADER: &str = "// this is a generated file, DO NOT MODIFY!!";

/// Everything a document depends on, in the order the blocks are emitted.
#[derive(Debug, Clone, Default)]
pub struct DocumentInputs {
    /// Caller-supplied include paths, emitted before the discovered ones.
    pub includes: Vec<String>,
    /// Discovered test sources, in walk order.
    pub test_files: Vec<PathBuf>,
    /// Invocation targets, in discovery then intra-file textual order.
    pub targets: Vec<InvocationTarget>,
    /// Prefix prepended to every emitted include path.
    pub include_prefix: String,
}

/// Assembles the aggregator document as a single string.
///
/// Line order is fixed: disclaimer, caller-supplied includes, discovered
/// test file includes, then an entry point that runs every target and
/// returns nonzero when any test failed. The section comments are emitted
/// even when their blocks are empty, and the document always ends with a
/// trailing blank line.
pub fn render_document(inputs: &DocumentInputs) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(GENERATED_FILE_HEADER.to_string());
    lines.push(String::new());

    lines.push("// includes specified from tool invocation".to_string());
    for include in &inputs.includes {
        lines.push(include_directive(&inputs.include_prefix, include));
    }

    lines.push(String::new());
    lines.push("// test file includes".to_string());
    for file in &inputs.test_files {
        lines.push(include_directive(
            &inputs.include_prefix,
            &file.display().to_string(),
        ));
    }

    lines.push(String::new());
    lines.push("int main(int argc, char **argv) {".to_string());
    lines.push("    int number_of_tests_run = 0;".to_string());
    lines.push("    int number_of_tests_failed = 0;".to_string());
    lines.push(String::new());
    lines.push("    tt_test_header();".to_string());
    lines.push(String::new());

    lines.push("    // test invocations".to_string());
    for target in &inputs.targets {
        lines.push(invocation_line(target));
    }

    lines.push(String::new());
    lines.push("    tt_test_footer(number_of_tests_run, number_of_tests_failed);".to_string());
    lines.push(String::new());
    lines.push("    return number_of_tests_failed != 0;".to_string());
    lines.push("}".to_string());

    // the generated file always ends with a blank line
    lines.push(String::new());

    lines.join("\n")
}

fn include_directive(prefix: &str, path: &str) -> String {
    format!("#include \"{prefix}{path}\"")
}

fn invocation_line(target: &InvocationTarget) -> String {
    format!(
        "    tt_run_test(test_{}, number_of_tests_run, number_of_tests_failed);",
        target.name
    )
}
