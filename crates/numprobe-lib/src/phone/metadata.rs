//! Phone-number metadata seam.
//!
//! `NumberMetadata` is the capability the lookup needs from a phone-number
//! database. `PhoneDatabase` binds it to the metadata bundled with the
//! `phonenumber` crate.

use std::collections::BTreeSet;

use phonenumber::metadata::{Database, Descriptor, Metadata, DATABASE};
use phonenumber::PhoneNumber;

/// Region code reported for numbers that belong to no single region.
pub const UNKNOWN_REGION: &str = "ZZ";

/// Operations the lookup procedure performs against a phone-number database.
pub trait NumberMetadata {
    type Number;

    /// Parses a number in international format (no default region).
    fn parse(&self, input: &str) -> Result<Self::Number, String>;

    fn country_code(&self, number: &Self::Number) -> u16;

    fn national_number(&self, number: &Self::Number) -> u64;

    /// Region the number belongs to, or `UNKNOWN_REGION`.
    fn region_code(&self, number: &Self::Number) -> String;

    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Length-only plausibility check, weaker than `is_valid`.
    fn is_possible(&self, number: &Self::Number) -> bool;

    /// All region codes registered under a country calling code, main region first.
    /// Empty when the code is not assigned.
    fn region_codes_for_country_code(&self, code: u16) -> Vec<String>;
}

/// National number lengths dialable from abroad, across every number type of a region.
///
/// The general descriptor carries no lengths of its own, so they are collected
/// from the per-type descriptors. Local-only lengths are left out: a number that
/// can only be dialled inside its area is not possible in international format.
/// An empty set means no length is possible.
fn possible_lengths(metadata: &Metadata) -> BTreeSet<u16> {
    let descriptors = metadata.descriptors();
    let by_type: [Option<&Descriptor>; 10] = [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ];

    std::iter::once(descriptors.general())
        .chain(by_type.into_iter().flatten())
        .flat_map(|descriptor| descriptor.possible_length().iter().copied())
        .collect()
}

/// The metadata database compiled into the `phonenumber` crate.
pub struct PhoneDatabase {
    database: &'static Database,
}

impl PhoneDatabase {
    pub fn bundled() -> Self {
        Self {
            database: &DATABASE,
        }
    }
}

impl Default for PhoneDatabase {
    fn default() -> Self {
        Self::bundled()
    }
}

impl NumberMetadata for PhoneDatabase {
    type Number = PhoneNumber;

    fn parse(&self, input: &str) -> Result<PhoneNumber, String> {
        phonenumber::parse(None, input).map_err(|e| e.to_string())
    }

    fn country_code(&self, number: &PhoneNumber) -> u16 {
        number.code().value()
    }

    fn national_number(&self, number: &PhoneNumber) -> u64 {
        number.national().value()
    }

    fn region_code(&self, number: &PhoneNumber) -> String {
        number
            .country()
            .id()
            .map(|id| format!("{:?}", id))
            .unwrap_or_else(|| UNKNOWN_REGION.to_string())
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn is_possible(&self, number: &PhoneNumber) -> bool {
        let code = number.code().value();
        let metadata = match self
            .database
            .by_code(&code)
            .and_then(|regions| regions.into_iter().next())
        {
            Some(metadata) => metadata,
            None => return false,
        };

        let nsn_len = number.national().to_string().len();
        possible_lengths(metadata)
            .iter()
            .any(|&len| usize::from(len) == nsn_len)
    }

    fn region_codes_for_country_code(&self, code: u16) -> Vec<String> {
        self.database
            .by_code(&code)
            .map(|regions| regions.iter().map(|m| m.id().to_string()).collect())
            .unwrap_or_default()
    }
}
