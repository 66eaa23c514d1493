//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "personae",
    bin_name = "personae",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate people and organizations with per-kind strategies",
    long_about = "personae picks a validator for each entity from a registry \
                  keyed by the entity's kind, runs it, and prints any \
                  validation messages.",
    after_help = "EXAMPLES:\n\
        \x20 personae demo\n\
        \x20 personae validate --kind individual --name José --id 333.333.33-33\n\
        \x20 personae kinds\n\
        \x20 personae completions bash > /usr/share/bash-completion/completions/personae",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the built-in demonstration roster.
    #[command(
        about = "Validate the demonstration roster",
        after_help = "EXAMPLES:\n\
            \x20 personae demo\n\
            \x20 personae demo --strict\n\
            \x20 personae demo --output-format json"
    )]
    Demo(DemoArgs),

    /// Validate a single entity described on the command line.
    #[command(
        visible_alias = "v",
        about = "Validate one entity",
        after_help = "EXAMPLES:\n\
            \x20 personae validate --kind person       --name \"Ana\"\n\
            \x20 personae validate --kind individual   --name João  --id 333.333.333-33\n\
            \x20 personae validate --kind organization --name Maria --id 99.999.999/9999-99"
    )]
    Validate(ValidateArgs),

    /// List registered entity kinds.
    #[command(visible_alias = "ls", about = "List entity kinds and their validators")]
    Kinds(KindsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 personae completions bash > ~/.local/share/bash-completion/completions/personae\n\
            \x20 personae completions zsh  > ~/.zfunc/_personae\n\
            \x20 personae completions fish > ~/.config/fish/completions/personae.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 personae config show\n\
            \x20 personae config get validation.strict\n\
            \x20 personae config path"
    )]
    Config(ConfigCommands),
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `personae demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Fail (exit 2) when any entity records a validation message.
    #[arg(long = "strict", help = "Exit with an error if any messages were recorded")]
    pub strict: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `personae validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Entity kind tag, e.g. `person`, `individual`, `organization`.
    ///
    /// Parsed by the core so unknown tags surface as an unknown-variant
    /// error rather than a clap parse error.
    #[arg(short = 'k', long = "kind", value_name = "KIND", help = "Entity kind")]
    pub kind: String,

    /// Entity name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Entity name")]
    pub name: String,

    /// Identifier (required for individuals and organizations).
    #[arg(
        short = 'i',
        long = "id",
        value_name = "IDENTIFIER",
        help = "Identifier, e.g. 333.333.333-33 or 99.999.999/9999-99"
    )]
    pub identifier: Option<String>,

    /// Fail (exit 2) when the entity records a validation message.
    #[arg(long = "strict", help = "Exit with an error if any messages were recorded")]
    pub strict: bool,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `personae kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Listing format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Listing format"
    )]
    pub format: KindsFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindsFormat {
    /// Kind, validator, and identifier format.
    Table,
    /// One kind per line.
    List,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `personae completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `personae config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values as TOML.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from([
            "personae",
            "validate",
            "--kind",
            "individual",
            "--name",
            "José",
            "--id",
            "333.333.33-33",
        ]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.kind, "individual");
                assert_eq!(args.identifier.as_deref(), Some("333.333.33-33"));
                assert!(!args.strict);
            }
            other => panic!("expected Validate command, got {other:?}"),
        }
    }

    #[test]
    fn validate_requires_name() {
        let result = Cli::try_parse_from(["personae", "validate", "--kind", "person"]);
        assert!(result.is_err());
    }

    #[test]
    fn demo_strict_flag() {
        let cli = Cli::parse_from(["personae", "demo", "--strict"]);
        assert!(matches!(cli.command, Commands::Demo(DemoArgs { strict: true })));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["personae", "demo", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn no_color_flag_without_value() {
        let cli = Cli::parse_from(["personae", "--no-color", "kinds"]);
        assert!(cli.global.no_color);

        let cli = Cli::parse_from(["personae", "kinds"]);
        assert!(!cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["personae", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }
}
