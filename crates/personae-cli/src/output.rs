//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use personae_core::application::{MESSAGES_HEADER, ValidationOutcome};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args
            .output_format
            .unwrap_or_else(|| config.output_format().unwrap_or_default());

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Error indicator: `✗ <msg>` on stderr, so stdout stays a clean
    /// listing or JSON document. Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.err_term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Print one validation outcome in the console listing format.
    pub fn outcome(&self, outcome: &ValidationOutcome) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for line in self.outcome_lines(outcome) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// Pretty-printed JSON; suppressed in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    fn outcome_lines(&self, outcome: &ValidationOutcome) -> Vec<String> {
        if self.no_color {
            return outcome.lines();
        }

        let mut lines = vec![format!(
            "{}-{}",
            outcome.entity.bold(),
            outcome.validator.cyan()
        )];
        if !outcome.is_clean() {
            lines.push(MESSAGES_HEADER.yellow().bold().to_string());
            lines.extend(
                outcome
                    .messages
                    .messages()
                    .iter()
                    .map(|m| format!("    {} - {}", m.key.dimmed(), m.text.yellow())),
            );
        }
        lines
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use console::TermTarget;
    use personae_core::prelude::*;

    fn make_manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: Some(format),
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn failing_outcome() -> ValidationOutcome {
        ValidationService::default()
            .validate(&Entity::individual("José", "333.333.33-33").unwrap())
            .unwrap()
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn errors_go_to_stderr_and_listing_to_stdout() {
        let out = make_manager(OutputFormat::Json, false, true);
        assert!(matches!(out.err_term.target(), TermTarget::Stderr));
        assert!(matches!(out.term.target(), TermTarget::Stdout));
    }

    #[test]
    fn only_human_format_uses_color() {
        assert!(!make_manager(OutputFormat::Human, false, false).no_color);
        assert!(make_manager(OutputFormat::Human, false, true).no_color);
        assert!(make_manager(OutputFormat::Plain, false, false).no_color);
        assert!(make_manager(OutputFormat::Json, false, false).no_color);
    }

    #[test]
    fn flag_overrides_config_format() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: Some(OutputFormat::Plain),
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();

        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Plain);

        let args = GlobalArgs {
            output_format: None,
            ..args
        };
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn plain_outcome_lines_match_console_format() {
        let out = make_manager(OutputFormat::Plain, false, false);
        assert_eq!(
            out.outcome_lines(&failing_outcome()),
            vec![
                "José-IndividualValidator",
                "Validation messages:",
                "    IndividualValidator - identifier does not have the correct length",
            ]
        );
    }

    #[test]
    fn colored_outcome_keeps_line_structure() {
        let out = make_manager(OutputFormat::Human, false, false);
        let lines = out.outcome_lines(&failing_outcome());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("José"));
        assert!(lines[2].contains("identifier does not have the correct length"));
    }
}
