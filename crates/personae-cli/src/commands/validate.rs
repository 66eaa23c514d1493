//! Implementation of the `personae validate` command.

use tracing::{debug, instrument};

use personae_core::{
    application::ValidationService,
    domain::{Entity, EntityKind, ValidatorRegistry},
};

use crate::{
    cli::ValidateArgs, commands::render_results, config::AppConfig, error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = %args.kind))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let strict = args.strict || config.validation.strict;

    let kind: EntityKind = args.kind.parse()?;
    let entity = Entity::from_parts(kind, args.name, args.identifier)?;
    debug!(%entity, "Entity built from arguments");

    let service = ValidationService::new(ValidatorRegistry::new());
    render_results(vec![service.validate(&entity)], &output, strict)
}
