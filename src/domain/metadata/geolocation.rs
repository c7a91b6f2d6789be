// SPDX-License-Identifier: MPL-2.0
//! GPS location extraction from the GPS sub-directory.

use super::tags::{gps, TAG_GPS_INFO};
use super::types::{GpsCoordinates, RawExifMap, RawValue};

/// Extracts decimal coordinates from the GPS block (tag 34853).
///
/// Returns `None` when the block is missing, is not a directory, lacks one
/// of the latitude/longitude values or references, or holds a DMS value that
/// is not a numeric triple. Results are not clamped to valid ranges.
#[must_use]
pub fn extract_geolocation(raw: &RawExifMap) -> Option<GpsCoordinates> {
    let RawValue::Directory(block) = raw.get(&TAG_GPS_INFO)? else {
        return None;
    };

    let latitude_ref = block.get(&gps::LATITUDE_REF)?;
    let latitude = dms_to_decimal(block.get(&gps::LATITUDE)?)?;
    let longitude_ref = block.get(&gps::LONGITUDE_REF)?;
    let longitude = dms_to_decimal(block.get(&gps::LONGITUDE)?)?;

    Some(GpsCoordinates::new(
        apply_hemisphere(latitude, latitude_ref, "S"),
        apply_hemisphere(longitude, longitude_ref, "W"),
    ))
}

/// Converts a degrees/minutes/seconds tuple to decimal degrees.
///
/// Only the first three components are read.
#[must_use]
pub fn dms_to_decimal(value: &RawValue) -> Option<f64> {
    let RawValue::Tuple(components) = value else {
        return None;
    };
    let [degrees, minutes, seconds, ..] = components.as_slice() else {
        return None;
    };
    Some(degrees.as_f64()? + minutes.as_f64()? / 60.0 + seconds.as_f64()? / 3600.0)
}

/// Negates the value when the reference text is exactly `negative_ref`.
fn apply_hemisphere(value: f64, reference: &RawValue, negative_ref: &str) -> f64 {
    if reference.to_text() == negative_ref {
        -value
    } else {
        value
    }
}
