//! Version CLI command — display application version.

use std::io::Write;

use clap::Command;
use serde::Serialize;

use crate::cli::{CommandBuilder, CommandCategory, CommandMeta};
use crate::commands::CommandContext;
use crate::config::OutputFormat;
use crate::errors::Result;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

const VERSION_INFO: VersionInfo = VersionInfo {
    name: "numprobe",
    version: env!("CARGO_PKG_VERSION"),
};

/// Build the `version` clap command.
pub fn version_command() -> Command {
    Command::new("version")
        .about("Show version information")
        .visible_alias("v")
}

/// Build the `CommandMeta` for registry registration.
pub fn version_meta() -> CommandMeta {
    CommandBuilder::from_clap(version_command())
        .category(CommandCategory::Core)
        .build()
}

/// Handle the `version` command.
pub fn handle_version(ctx: &CommandContext) -> Result<()> {
    let stdout = std::io::stdout();
    write_version(ctx.output, &mut stdout.lock())
}

fn write_version<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &VERSION_INFO)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{} version {}", VERSION_INFO.name, VERSION_INFO.version)?;
        }
    }
    Ok(())
}
