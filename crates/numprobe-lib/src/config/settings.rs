use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;

use crate::errors::{NumprobeError, Result};

/// How command reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = NumprobeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(NumprobeError::Config(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Immutable application settings initialized once at startup from environment variables.
///
/// Access via `Settings::get()` which returns a `&'static Settings`.
/// The singleton is lazily initialized on first access using `OnceLock`.
///
/// | Variable          | Effect                                         |
/// |-------------------|------------------------------------------------|
/// | `NUMPROBE_LOG`    | tracing filter directive, overrides `--verbose` |
/// | `NUMPROBE_OUTPUT` | `text` (default) or `json`                     |
/// | `NO_COLOR`        | disables coloured status messages              |
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub log_filter: Option<String>,
    pub output: OutputFormat,
    pub no_color: bool,
    rejected_output: Option<String>,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Returns a reference to the global `Settings` singleton.
    /// Initializes from environment variables on first call.
    pub fn get() -> &'static Settings {
        SETTINGS.get_or_init(|| Settings::from_vars(|key| std::env::var(key).ok()))
    }

    /// Builds settings from an arbitrary variable source.
    ///
    /// An unparseable `NUMPROBE_OUTPUT` falls back to text and is reported by `validate`.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (output, rejected_output) = match var("NUMPROBE_OUTPUT") {
            Some(raw) => match raw.parse::<OutputFormat>() {
                Ok(format) => (format, None),
                Err(_) => (OutputFormat::Text, Some(raw)),
            },
            None => (OutputFormat::Text, None),
        };

        Self {
            log_filter: var("NUMPROBE_LOG").filter(|s| !s.trim().is_empty()),
            output,
            no_color: var("NO_COLOR").is_some(),
            rejected_output,
        }
    }

    /// Reports settings that were read but could not be applied.
    pub fn validate(&self) -> Result<()> {
        match &self.rejected_output {
            Some(raw) => raw.parse::<OutputFormat>().map(|_| ()),
            None => Ok(()),
        }
    }

    /// Resolves the effective output format; an explicit `--json` always wins.
    pub fn output_format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}
