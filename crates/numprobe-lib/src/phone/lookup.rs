//! Phone number / country-code prefix lookup.
//!
//! A lookup first tries to parse the whole input as an international number.
//! When that fails it falls back to matching the longest leading digit run
//! (at most [`MAX_PREFIX_LEN`] digits) against the country calling code table.

use tracing::debug;

use super::metadata::{NumberMetadata, PhoneDatabase};
use super::region::{country_name, IsoRegionNames, RegionNames};
use super::report::LookupReport;

/// Longest country calling code prefix tried by the fallback.
pub const MAX_PREFIX_LEN: usize = 4;

/// Prepends `+` unless the input already starts with one.
pub fn normalize(raw: &str) -> String {
    if raw.starts_with('+') {
        raw.to_string()
    } else {
        format!("+{}", raw)
    }
}

pub struct PhoneLookup<M, N> {
    metadata: M,
    names: N,
}

impl PhoneLookup<PhoneDatabase, IsoRegionNames> {
    /// Lookup backed by the bundled libphonenumber metadata and ISO 3166 names.
    pub fn bundled() -> Self {
        Self::new(PhoneDatabase::bundled(), IsoRegionNames)
    }
}

impl<M, N> PhoneLookup<M, N>
where
    M: NumberMetadata,
    N: RegionNames,
{
    pub fn new(metadata: M, names: N) -> Self {
        Self { metadata, names }
    }

    pub fn lookup(&self, raw: &str) -> LookupReport {
        let input = normalize(raw);

        match self.metadata.parse(&input) {
            Ok(number) => {
                let region_code = self.metadata.region_code(&number);
                LookupReport::Full {
                    country_code: self.metadata.country_code(&number),
                    country: country_name(&self.names, &region_code),
                    national_number: self.metadata.national_number(&number),
                    valid: self.metadata.is_valid(&number),
                    possible: self.metadata.is_possible(&number),
                    region_code,
                    input,
                }
            }
            Err(e) => {
                debug!(input = %input, error = %e, "full parse failed, trying country code prefixes");
                self.lookup_prefix(input)
            }
        }
    }

    fn lookup_prefix(&self, input: String) -> LookupReport {
        let digits = input.strip_prefix('+').unwrap_or(&input);
        if digits.is_empty() {
            return LookupReport::Unidentified { input };
        }

        for len in (1..=digits.len().min(MAX_PREFIX_LEN)).rev() {
            // `get` also rejects cuts inside a multi-byte character.
            let code = match digits.get(..len).map(str::parse::<u16>) {
                Some(Ok(code)) => code,
                _ => {
                    debug!(len, "prefix is not numeric, skipping");
                    continue;
                }
            };

            let region_codes = self.metadata.region_codes_for_country_code(code);
            debug!(code, regions = region_codes.len(), "tried country code prefix");
            if region_codes.is_empty() {
                continue;
            }

            let regions = region_codes
                .iter()
                .map(|region| country_name(&self.names, region))
                .collect();
            return LookupReport::Partial {
                input,
                country_code: code,
                region_codes,
                regions,
            };
        }

        LookupReport::Unidentified { input }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::region::RegionId;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Minimal in-memory database: a number parses when its digits are in `numbers`.
    #[derive(Default)]
    struct FakeMetadata {
        numbers: HashMap<&'static str, (u16, u64, &'static str, bool, bool)>,
        codes: HashMap<u16, Vec<&'static str>>,
        queried: RefCell<Vec<u16>>,
    }

    impl NumberMetadata for FakeMetadata {
        type Number = (u16, u64, &'static str, bool, bool);

        fn parse(&self, input: &str) -> Result<Self::Number, String> {
            self.numbers
                .get(input)
                .copied()
                .ok_or_else(|| "not a number".to_string())
        }

        fn country_code(&self, number: &Self::Number) -> u16 {
            number.0
        }

        fn national_number(&self, number: &Self::Number) -> u64 {
            number.1
        }

        fn region_code(&self, number: &Self::Number) -> String {
            number.2.to_string()
        }

        fn is_valid(&self, number: &Self::Number) -> bool {
            number.3
        }

        fn is_possible(&self, number: &Self::Number) -> bool {
            number.4
        }

        fn region_codes_for_country_code(&self, code: u16) -> Vec<String> {
            self.queried.borrow_mut().push(code);
            self.codes
                .get(&code)
                .map(|v| v.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default()
        }
    }

    struct FakeNames;

    impl RegionNames for FakeNames {
        fn display_name(&self, region: &RegionId) -> Option<String> {
            match region.as_str() {
                "DE" => Some("Germany".into()),
                "US" => Some("United States".into()),
                "CA" => Some("Canada".into()),
                "RU" => Some("Russia".into()),
                "KZ" => Some("Kazakhstan".into()),
                _ => None,
            }
        }
    }

    fn fake() -> PhoneLookup<FakeMetadata, FakeNames> {
        let mut metadata = FakeMetadata::default();
        metadata
            .numbers
            .insert("+4912345678", (49, 12345678, "DE", false, true));
        metadata
            .numbers
            .insert("+888123456", (888, 123456, "ZZ", true, true));
        metadata.codes.insert(1, vec!["US", "CA"]);
        metadata.codes.insert(7, vec!["RU", "KZ"]);
        metadata.codes.insert(49, vec!["DE"]);
        metadata.codes.insert(1268, vec!["AG"]);
        PhoneLookup::new(metadata, FakeNames)
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("49"), "+49");
        assert_eq!(normalize("+49"), "+49");
        assert_eq!(normalize(""), "+");
        assert_eq!(normalize("+"), "+");
    }

    #[test]
    fn test_full_number() {
        let report = fake().lookup("4912345678");
        assert_eq!(
            report,
            LookupReport::Full {
                input: "+4912345678".into(),
                country_code: 49,
                region_code: "DE".into(),
                country: "Germany".into(),
                national_number: 12345678,
                valid: false,
                possible: true,
            }
        );
    }

    #[test]
    fn test_full_number_with_unknown_region() {
        match fake().lookup("+888123456") {
            LookupReport::Full { country, .. } => assert_eq!(country, "Unknown Region"),
            other => panic!("expected full match, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_match() {
        let report = fake().lookup("49");
        assert_eq!(
            report,
            LookupReport::Partial {
                input: "+49".into(),
                country_code: 49,
                region_codes: vec!["DE".into()],
                regions: vec!["Germany".into()],
            }
        );
    }

    #[test]
    fn test_longest_prefix_wins() {
        let lookup = fake();
        match lookup.lookup("+12685551234") {
            LookupReport::Partial {
                country_code,
                regions,
                ..
            } => {
                assert_eq!(country_code, 1268);
                // No display name known, raw code is kept.
                assert_eq!(regions, vec!["AG".to_string()]);
            }
            other => panic!("expected partial match, got {:?}", other),
        }
        assert_eq!(*lookup.metadata.queried.borrow(), vec![1268]);
    }

    #[test]
    fn test_scans_four_down_to_one() {
        let lookup = fake();
        match lookup.lookup("+7999") {
            LookupReport::Partial {
                country_code,
                regions,
                ..
            } => {
                assert_eq!(country_code, 7);
                assert_eq!(regions, vec!["Russia".to_string(), "Kazakhstan".to_string()]);
            }
            other => panic!("expected partial match, got {:?}", other),
        }
        assert_eq!(*lookup.metadata.queried.borrow(), vec![7999, 799, 79, 7]);
    }

    #[test]
    fn test_short_input_limits_prefix_length() {
        let lookup = fake();
        lookup.lookup("15");
        assert_eq!(*lookup.metadata.queried.borrow(), vec![15, 1]);
    }

    #[test]
    fn test_non_numeric_prefixes_skipped() {
        let lookup = fake();
        match lookup.lookup("49a") {
            LookupReport::Partial { country_code, .. } => assert_eq!(country_code, 49),
            other => panic!("expected partial match, got {:?}", other),
        }
        // "49a" is skipped without a table query.
        assert_eq!(*lookup.metadata.queried.borrow(), vec![49]);
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let report = fake().lookup("4é9");
        match report {
            LookupReport::Unidentified { input } => assert_eq!(input, "+4é9"),
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[test]
    fn test_plus_only_is_unidentified() {
        let lookup = fake();
        assert_eq!(
            lookup.lookup("+"),
            LookupReport::Unidentified { input: "+".into() }
        );
        assert!(lookup.metadata.queried.borrow().is_empty());
    }

    #[test]
    fn test_empty_input_is_unidentified() {
        assert_eq!(
            fake().lookup(""),
            LookupReport::Unidentified { input: "+".into() }
        );
    }

    #[test]
    fn test_no_prefix_matches() {
        let lookup = fake();
        assert_eq!(
            lookup.lookup("9999"),
            LookupReport::Unidentified {
                input: "+9999".into()
            }
        );
        assert_eq!(*lookup.metadata.queried.borrow(), vec![9999, 999, 99, 9]);
    }

    #[test]
    fn test_bundled_full_german_number() {
        let report = PhoneLookup::bundled().lookup("+4912345678");
        match &report {
            LookupReport::Full {
                country_code,
                region_code,
                country,
                ..
            } => {
                assert_eq!(*country_code, 49);
                assert_eq!(region_code, "DE");
                assert!(country.contains("Germany"));
            }
            other => panic!("expected full match, got {:?}", other),
        }
        let text = report.to_text();
        assert!(text.contains("• Country Code: +49"));
        assert!(text.contains("• Valid: "));
        assert!(text.contains("• Possibly Valid: "));
    }

    #[test]
    fn test_bundled_prefix_only() {
        let report = PhoneLookup::bundled().lookup("49");
        match &report {
            LookupReport::Partial {
                input,
                country_code,
                regions,
                ..
            } => {
                assert_eq!(input, "+49");
                assert_eq!(*country_code, 49);
                assert!(regions.iter().any(|r| r.contains("Germany")));
            }
            other => panic!("expected partial match, got {:?}", other),
        }
        assert!(report.to_text().contains("Partial Match"));
    }

    #[test]
    fn test_bundled_too_short_numbers_are_not_possible() {
        let lookup = PhoneLookup::bundled();
        for input in ["+1650", "+4912"] {
            match lookup.lookup(input) {
                LookupReport::Full {
                    valid, possible, ..
                } => {
                    assert!(!valid, "{} should not be valid", input);
                    assert!(!possible, "{} should not be possible", input);
                }
                other => panic!("expected full match for {}, got {:?}", input, other),
            }
        }
        assert!(lookup
            .lookup("+1650")
            .to_text()
            .contains("• Possibly Valid: false"));
    }

    #[test]
    fn test_bundled_prefix_names_regions_outside_iso_table() {
        let lookup = PhoneLookup::bundled();
        for (input, expected) in [("247", "Ascension Island"), ("383", "Kosovo")] {
            match lookup.lookup(input) {
                LookupReport::Partial { regions, .. } => {
                    assert_eq!(regions, vec![expected.to_string()]);
                }
                other => panic!("expected partial match for {}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_bundled_unidentified() {
        let lookup = PhoneLookup::bundled();
        assert!(!lookup.lookup("+").is_identified());
        assert!(!lookup.lookup("9999").is_identified());
        assert!(lookup
            .lookup("9999")
            .to_text()
            .starts_with("❌ Could not identify country or region for input: +9999"));
    }

    #[test]
    fn test_bundled_lookup_is_idempotent() {
        let lookup = PhoneLookup::bundled();
        for input in ["+4912345678", "49", "+", "9999", "+822"] {
            assert_eq!(lookup.lookup(input), lookup.lookup(input));
        }
    }

    proptest! {
        #[test]
        fn prop_lookup_idempotent(input in "\\+?[0-9]{0,12}") {
            let lookup = PhoneLookup::bundled();
            let first = lookup.lookup(&input).to_text();
            let second = lookup.lookup(&input).to_text();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_input_always_normalized(input in "\\PC{0,10}") {
            let report = fake().lookup(&input);
            prop_assert!(report.input().starts_with('+'));
        }
    }
}
