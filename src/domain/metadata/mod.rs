// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types and the three EXIF analysis steps.
//!
//! Every function here is pure and total over a [`RawExifMap`]:
//!
//! - [`normalize`]: tag listing with resolved names and decoded text
//! - [`classify`] / [`SecureProfile::classify`]: camera profile verdict
//! - [`extract_geolocation`]: signed decimal coordinates from the GPS block
//!
//! The steps are independent; each reads the same raw mapping.

mod geolocation;
mod normalize;
mod security;
pub mod tags;
mod types;

pub use geolocation::{dms_to_decimal, extract_geolocation};
pub use normalize::normalize;
pub use security::{classify, Criterion, MatchPolicy, SecureProfile, SECURE_MAKE, SECURE_MODEL};
pub use types::{
    decode_text, GpsCoordinates, NormalizedTagEntry, Number, RawExifMap, RawValue,
    SecurityVerdict,
};
