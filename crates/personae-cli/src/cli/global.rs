//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (messages recorded per entity)
    -vv     - Debug level (validator resolution)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress the entity listing; errors are still written to stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress the listing, keep errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes in the human listing.
    ///
    /// Also read from `NO_COLOR` (<https://no-color.org>): any value other
    /// than an empty string, `0`, `false`, `no`, `off`, `n` or `f` turns
    /// colour off, so `NO_COLOR=1` works.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output (also NO_COLOR=<any non-false value>)"
    )]
    pub no_color: bool,

    /// TOML configuration file. Must exist when given; otherwise the
    /// platform default location is read if present.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "TOML configuration file (overrides the default location)"
    )]
    pub config: Option<PathBuf>,

    /// Output format. When omitted, `output.format` from the configuration
    /// applies.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        help = "Output format [auto, human, plain, json]"
    )]
    pub output_format: Option<OutputFormat>,
}

/// How validation outcomes are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` when stdout is a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured entity listing.
    Human,
    /// `<name>-<validator>` listing without colour.
    Plain,
    /// Array of outcome objects.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, true)
    }
}
