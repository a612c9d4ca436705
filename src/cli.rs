use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flint")]
#[command(author, version, about = "Style checker for C and C++ sources")]
#[command(long_about = "Checks C and C++ files for common style problems.\n\n\
    Code between `// %flint: pause` and `// %flint: resume` is not checked.\n\n\
    Exit codes:\n  \
    0 - No errors (and no warnings when warnings are shown)\n  \
    1 - Errors found, or warnings found at level 1 or above\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files or directories to lint
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Treat every file as C; skips C++-only rules
    #[arg(short, long)]
    pub cmode: bool,

    /// Shorthand for `--format json`
    #[arg(short, long)]
    pub json: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Report level: 0 errors, 1 adds warnings, 2 adds advice (clamped)
    #[arg(short, long, allow_negative_numbers = true)]
    pub level: Option<i64>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Report paths as given instead of bare file names
    #[arg(long)]
    pub full_paths: bool,

    /// Path to configuration file
    #[arg(long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
