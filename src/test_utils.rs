// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and EXIF fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::domain::metadata::{tags, RawExifMap, RawValue};
use std::collections::BTreeMap;

/// Tolerance for decimal degree comparisons.
pub const DEGREE_EPSILON: f64 = 1e-3;

/// Builds a raw mapping with the given make and model bytes.
#[must_use]
pub fn camera_exif(make: &[u8], model: &[u8]) -> RawExifMap {
    let mut raw = RawExifMap::new();
    raw.insert(tags::TAG_MAKE, RawValue::Bytes(make.to_vec()));
    raw.insert(tags::TAG_MODEL, RawValue::Bytes(model.to_vec()));
    raw
}

/// Builds a GPS directory value. Degrees and minutes become rationals,
/// seconds a float.
#[must_use]
pub fn gps_block(
    lat_ref: &str,
    lat: (i64, i64, f64),
    lon_ref: &str,
    lon: (i64, i64, f64),
) -> RawValue {
    let triple = |(d, m, s): (i64, i64, f64)| {
        RawValue::Tuple(vec![
            RawValue::rational(d, 1),
            RawValue::rational(m, 1),
            RawValue::float(s),
        ])
    };
    let mut block = BTreeMap::new();
    block.insert(tags::gps::LATITUDE_REF, RawValue::text(lat_ref));
    block.insert(tags::gps::LATITUDE, triple(lat));
    block.insert(tags::gps::LONGITUDE_REF, RawValue::text(lon_ref));
    block.insert(tags::gps::LONGITUDE, triple(lon));
    RawValue::Directory(block)
}
