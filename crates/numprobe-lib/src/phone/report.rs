use std::io::{self, Write};

use serde::Serialize;

/// Shown under every "could not identify" message.
pub const USAGE_HINT: &str = "Hint: Try a valid prefix like +49 or a full number like +4912345678";

/// Outcome of a single `luPn` lookup.
///
/// `input` is always the normalized form, with a leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "match", rename_all = "lowercase")]
pub enum LookupReport {
    /// The whole input parsed as a phone number.
    Full {
        input: String,
        country_code: u16,
        region_code: String,
        country: String,
        national_number: u64,
        valid: bool,
        possible: bool,
    },
    /// Only a leading country calling code was recognized; validity is not known.
    Partial {
        input: String,
        country_code: u16,
        region_codes: Vec<String>,
        regions: Vec<String>,
    },
    #[serde(rename = "none")]
    Unidentified { input: String },
}

impl LookupReport {
    pub fn input(&self) -> &str {
        match self {
            LookupReport::Full { input, .. }
            | LookupReport::Partial { input, .. }
            | LookupReport::Unidentified { input } => input,
        }
    }

    pub fn is_identified(&self) -> bool {
        !matches!(self, LookupReport::Unidentified { .. })
    }

    /// Writes the human-readable report, one fact per line.
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            LookupReport::Full {
                input,
                country_code,
                country,
                national_number,
                valid,
                possible,
                ..
            } => {
                writeln!(out, "📞 Phone Number Analysis:")?;
                writeln!(out, "• Input: {}", input)?;
                writeln!(out, "• Country Code: +{}", country_code)?;
                writeln!(out, "• Country: {}", country)?;
                writeln!(out, "• National Number: {}", national_number)?;
                writeln!(out, "• Valid: {}", valid)?;
                writeln!(out, "• Possibly Valid: {}", possible)?;
            }
            LookupReport::Partial {
                input,
                country_code,
                regions,
                ..
            } => {
                writeln!(out, "📞 Partial Match (Country Code only):")?;
                writeln!(out, "• Input: {}", input)?;
                writeln!(out, "• Identified Country Code: +{}", country_code)?;
                writeln!(out, "• Possible Countries/Regions: {}", regions.join(", "))?;
            }
            LookupReport::Unidentified { input } => {
                writeln!(
                    out,
                    "❌ Could not identify country or region for input: {}",
                    input
                )?;
                writeln!(out, "{}", USAGE_HINT)?;
            }
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
