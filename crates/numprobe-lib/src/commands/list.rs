//! Commands CLI command — list registered commands (text and JSON).

use clap::Command;

use crate::cli::{create_root_command, CommandBuilder, CommandCategory, CommandMeta, CommandRegistry};
use crate::commands::{register_commands, CommandContext};
use crate::config::OutputFormat;
use crate::errors::Result;

/// Build the `commands` clap command.
pub fn list_command() -> Command {
    Command::new("commands").about("List available commands by category")
}

/// Build the `CommandMeta` for registry registration.
pub fn list_meta() -> CommandMeta {
    CommandBuilder::from_clap(list_command())
        .category(CommandCategory::Core)
        .build()
}

/// Handle the `commands` command.
pub fn handle_list(ctx: &CommandContext) -> Result<()> {
    let mut registry = CommandRegistry::new(create_root_command());
    register_commands(&mut registry)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.output {
        OutputFormat::Json => registry.write_listing_json(&mut out)?,
        OutputFormat::Text => registry.write_listing(&mut out)?,
    }
    Ok(())
}
