use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ctestgen")]
#[command(about = "Generate the aggregator source that runs every test in a C test tree", long_about = None)]
pub struct Args {
    /// File(s) to include at the top of the generated test file. Can be
    /// specified multiple times.
    #[arg(short = 'i', long = "additional-include", value_name = "PATH")]
    pub includes: Vec<String>,

    /// Base path of the directory to scan for test sources
    #[arg(short = 't', long = "test-dir", value_name = "PATH")]
    pub test_dir: PathBuf,

    /// Path to write the generated test source file to
    #[arg(short = 'o', value_name = "PATH")]
    pub output_path: PathBuf,

    /// Prefix prepended to every emitted include path
    #[arg(
        short = 'p',
        long = "include-prefix",
        value_name = "PREFIX",
        default_value = ""
    )]
    pub include_prefix: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// A missing test directory is not rejected here: the walk yields
    /// nothing and the generated runner has no invocations.
    pub fn validate(&self) -> Result<()> {
        if self.output_path.is_dir() {
            anyhow::bail!(
                "Output path is a directory: {}",
                self.output_path.display()
            );
        }
        Ok(())
    }
}
