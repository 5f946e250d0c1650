//! luPn CLI command — look up country information for a phone number or prefix.
//!
//! Supports the global `--json` flag for machine-readable output.

use std::io::Write;

use clap::{Arg, ArgMatches, Command};

use crate::cli::{CommandBuilder, CommandCategory, CommandMeta};
use crate::commands::CommandContext;
use crate::config::OutputFormat;
use crate::errors::{NumprobeError, Result};
use crate::phone::{NumberMetadata, PhoneLookup, RegionNames};

/// Build the `luPn` clap command.
pub fn lupn_command() -> Command {
    Command::new("luPn")
        .visible_alias("lupn")
        .about("Look up country info from a phone number or prefix")
        .long_about(
            "luPn (Lookup Phone Number) works with complete numbers like +4912345678\n\
             or country prefixes like +822 to return country information.",
        )
        .arg(
            Arg::new("number")
                .value_name("phone number or prefix")
                .required(true)
                .num_args(1)
                .help("Full international number or leading country calling code"),
        )
}

/// Build the `CommandMeta` for registry registration.
pub fn lupn_meta() -> CommandMeta {
    CommandBuilder::from_clap(lupn_command())
        .category(CommandCategory::Lookup)
        .build()
}

/// Handle the `luPn` command.
///
/// Lookup failures are part of the report; only output errors are returned.
pub fn handle_lupn(matches: &ArgMatches, ctx: &CommandContext) -> Result<()> {
    let input = matches
        .get_one::<String>("number")
        .ok_or_else(|| NumprobeError::Command("missing phone number or prefix".to_string()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_lupn(input, ctx.output, &ctx.lookup, &mut out)
}

/// Runs one lookup and writes the report in the requested format.
pub fn run_lupn<M, N, W>(
    input: &str,
    format: OutputFormat,
    lookup: &PhoneLookup<M, N>,
    out: &mut W,
) -> Result<()>
where
    M: NumberMetadata,
    N: RegionNames,
    W: Write,
{
    let report = lookup.lookup(input);
    tracing::debug!(
        input = report.input(),
        identified = report.is_identified(),
        format = %format,
        "lookup finished"
    );

    match format {
        OutputFormat::Text => report.render_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
