//! Implementation of the `personae demo` command.

use tracing::info;

use personae_core::{
    application::{ValidationService, demo_roster},
    domain::ValidatorRegistry,
};

use crate::{
    cli::DemoArgs, commands::render_results, config::AppConfig, error::CliResult,
    output::OutputManager,
};

pub fn execute(args: DemoArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let strict = args.strict || config.validation.strict;
    let roster = demo_roster()?;
    info!(entities = roster.len(), strict, "Validating demo roster");

    let service = ValidationService::new(ValidatorRegistry::new());
    render_results(service.validate_all(&roster), &output, strict)
}
