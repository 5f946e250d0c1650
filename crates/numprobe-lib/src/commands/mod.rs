pub mod list;
pub mod lupn;
pub mod version;

use clap::ArgMatches;

use crate::cli::CommandRegistry;
use crate::config::OutputFormat;
use crate::errors::{NumprobeError, Result};
use crate::phone::{IsoRegionNames, PhoneDatabase, PhoneLookup};

/// Everything a command handler needs beyond its own arguments.
pub struct CommandContext {
    pub output: OutputFormat,
    pub lookup: PhoneLookup<PhoneDatabase, IsoRegionNames>,
}

impl CommandContext {
    pub fn new(output: OutputFormat) -> Self {
        Self {
            output,
            lookup: PhoneLookup::bundled(),
        }
    }
}

/// Register the full command set.
pub fn register_commands(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(lupn::lupn_meta())?;
    registry.register(version::version_meta())?;
    registry.register(list::list_meta())?;
    Ok(())
}

/// Dispatch a parsed command to its handler.
///
/// `name` is the canonical command name; clap resolves aliases before this point.
pub fn dispatch_command(name: &str, matches: &ArgMatches, ctx: &CommandContext) -> Result<()> {
    match name {
        "luPn" => lupn::handle_lupn(matches, ctx)?,
        "version" => version::handle_version(ctx)?,
        "commands" => list::handle_list(ctx)?,
        _ => return Err(NumprobeError::Command(format!("Unknown command: {}", name))),
    }
    Ok(())
}
