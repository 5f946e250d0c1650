use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumprobeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Command error: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, NumprobeError>;

/// Logs a fatal error and exits the process with code 1.
///
/// Intended for unrecoverable errors during startup, before any command runs.
pub fn handle_fatal(err: NumprobeError) -> ! {
    tracing::error!("Fatal error: {}", err);
    crate::output::error(&format!("{}", err));
    std::process::exit(1)
}

/// Maps a `NumprobeError` to user-friendly CLI output with actionable suggestions.
///
/// Everything goes to stderr; stdout is reserved for reports.
pub fn handle_command_error(err: &NumprobeError) {
    let _ = write_command_error(err, &mut std::io::stderr().lock());
}

/// Writes the message and hint lines for `err` to `out`.
pub fn write_command_error<W: std::io::Write>(
    err: &NumprobeError,
    out: &mut W,
) -> std::io::Result<()> {
    use crate::output::styled_line;
    use crossterm::style::Color;

    match err {
        NumprobeError::Config(msg) => {
            styled_line(out, &format!("Configuration error: {}", msg), Color::Red)?;
            styled_line(
                out,
                "Check the NUMPROBE_OUTPUT and NUMPROBE_LOG environment variables.",
                Color::Cyan,
            )?;
        }
        NumprobeError::Io(e) => {
            styled_line(out, &format!("Output error: {}", e), Color::Red)?;
        }
        NumprobeError::Json(e) => {
            styled_line(out, &format!("Could not encode report as JSON: {}", e), Color::Red)?;
        }
        NumprobeError::Command(msg) => {
            styled_line(out, &format!("Error: {}", msg), Color::Red)?;
            styled_line(
                out,
                "Run `numprobe commands` to see the available commands.",
                Color::Cyan,
            )?;
        }
    }

    if crate::logger::is_verbose() {
        styled_line(out, &format!("Details: {:?}", err), Color::Cyan)?;
    }
    Ok(())
}
