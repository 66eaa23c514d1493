//! Subcommand handlers.
//!
//! Each handler takes its parsed arguments plus whatever shared state it
//! needs (`AppConfig`, `OutputManager`) and returns a [`CliResult`].

pub mod completions;
pub mod config;
pub mod demo;
pub mod kinds;
pub mod validate;

use personae_core::{application::ValidationOutcome, error::PersonaeResult};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print every result, then turn failures into an error.
///
/// Lookup failures are shown in place and the remaining entities are still
/// printed; the first such failure becomes the command's error. In strict
/// mode recorded messages fail the command too.
pub(crate) fn render_results(
    results: Vec<PersonaeResult<ValidationOutcome>>,
    output: &OutputManager,
    strict: bool,
) -> CliResult<()> {
    let mut outcomes = Vec::with_capacity(results.len());
    let mut first_failure = None;

    for result in results {
        match result {
            Ok(outcome) => {
                if output.format() != OutputFormat::Json {
                    output.outcome(&outcome)?;
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                output.error(&e.to_string())?;
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    if output.format() == OutputFormat::Json {
        output.json(&outcomes)?;
    }

    if let Some(e) = first_failure {
        return Err(CliError::Core(e));
    }

    let count: usize = outcomes.iter().map(|o| o.messages.len()).sum();
    if strict && count > 0 {
        return Err(CliError::ValidationFailed { count });
    }
    Ok(())
}
