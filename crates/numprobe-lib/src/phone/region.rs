//! Region-code to English country-name resolution.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::metadata::UNKNOWN_REGION;

/// Placeholder shown when no region can be named.
pub const UNKNOWN_REGION_NAME: &str = "Unknown Region";

/// A structurally valid region identifier: two or three ASCII letters (ISO 3166-1
/// alpha-2 or alpha-3) or three ASCII digits (UN M.49 area code). Letters are
/// upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a region identifier: '{0}'")]
pub struct RegionParseError(String);

impl RegionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegionId {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alpha = matches!(s.len(), 2 | 3) && s.bytes().all(|b| b.is_ascii_alphabetic());
        let m49 = s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit());
        if alpha || m49 {
            Ok(RegionId(s.to_ascii_uppercase()))
        } else {
            Err(RegionParseError(s.to_string()))
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of English display names for regions.
pub trait RegionNames {
    /// Returns `None` when the region has no known display name.
    fn display_name(&self, region: &RegionId) -> Option<String>;
}

/// Regions libphonenumber assigns calling codes to that ISO 3166-1 does not list.
/// `001` is the M.49 code for non-geographic numbers; `AC` and `TA` are
/// exceptionally reserved; `XK` is user-assigned.
const EXTRA_REGION_NAMES: &[(&str, &str)] = &[
    ("001", "World"),
    ("AC", "Ascension Island"),
    ("TA", "Tristan da Cunha"),
    ("XK", "Kosovo"),
];

/// Display names from the ISO 3166-1 table shipped with `isocountry`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoRegionNames;

impl RegionNames for IsoRegionNames {
    fn display_name(&self, region: &RegionId) -> Option<String> {
        let code = region.as_str();
        if let Some((_, name)) = EXTRA_REGION_NAMES.iter().find(|(id, _)| *id == code) {
            return Some(name.to_string());
        }

        let country = match code.len() {
            2 => isocountry::CountryCode::for_alpha2(code).ok(),
            3 => isocountry::CountryCode::for_alpha3(code).ok(),
            _ => None,
        };
        country.map(|country| country.name().to_string())
    }
}

/// Maps a region code to a display name. Never fails.
///
/// Empty input and the `ZZ` sentinel yield [`UNKNOWN_REGION_NAME`]; codes that
/// cannot be parsed or have no known name are returned unchanged.
pub fn country_name<N: RegionNames + ?Sized>(names: &N, region_code: &str) -> String {
    if region_code.is_empty() {
        return UNKNOWN_REGION_NAME.to_string();
    }

    let region = match region_code.parse::<RegionId>() {
        Ok(region) => region,
        Err(e) => {
            tracing::debug!(error = %e, "region code kept as-is");
            return region_code.to_string();
        }
    };

    match names.display_name(&region) {
        Some(name) if !name.is_empty() => name,
        _ if region_code == UNKNOWN_REGION => UNKNOWN_REGION_NAME.to_string(),
        _ => region_code.to_string(),
    }
}
