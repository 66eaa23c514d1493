//! Implementation of the `personae kinds` command.

use personae_core::domain::ValidatorRegistry;

use crate::{
    cli::{KindsArgs, KindsFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: KindsArgs, output: OutputManager) -> CliResult<()> {
    let registry = ValidatorRegistry::new();

    match args.format {
        KindsFormat::Table => {
            output.header("Registered kinds:")?;
            for (kind, validator) in registry.kinds() {
                output.print(&format!(
                    "  {:<14} {:<22} {}",
                    kind.as_str(),
                    validator,
                    kind.identifier_format().unwrap_or("-")
                ))?;
            }
        }

        KindsFormat::List => {
            for (kind, _) in registry.kinds() {
                output.print(kind.as_str())?;
            }
        }

        KindsFormat::Csv => {
            output.print("kind,validator,identifier_format")?;
            for (kind, validator) in registry.kinds() {
                output.print(&format!(
                    "{},{},{}",
                    kind,
                    validator,
                    kind.identifier_format().unwrap_or_default()
                ))?;
            }
        }
    }

    Ok(())
}
