use anyhow::{Context, Result};
use clap::Parser;

use ctestgen::logging::{self, Verbosity};
use ctestgen::{cli, generator, output};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let options = generator::GeneratorOptions {
        includes: args.includes,
        include_prefix: args.include_prefix,
    };

    let document = generator::generate(&args.test_dir, &options).with_context(|| {
        format!(
            "Failed to generate test runner from {}",
            args.test_dir.display()
        )
    })?;

    output::write_document(&args.output_path, &document)
        .with_context(|| format!("Failed to write {}", args.output_path.display()))?;

    Ok(())
}
