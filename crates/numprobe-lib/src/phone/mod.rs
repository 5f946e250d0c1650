//! Phone number and country calling code lookups.

pub mod lookup;
pub mod metadata;
pub mod region;
pub mod report;

pub use lookup::{normalize, PhoneLookup, MAX_PREFIX_LEN};
pub use metadata::{NumberMetadata, PhoneDatabase, UNKNOWN_REGION};
pub use region::{country_name, IsoRegionNames, RegionId, RegionNames, UNKNOWN_REGION_NAME};
pub use report::{LookupReport, USAGE_HINT};
