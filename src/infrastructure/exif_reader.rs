// SPDX-License-Identifier: MPL-2.0
//! EXIF container parsing with `kamadak-exif`.
//!
//! Converts parsed fields into the domain [`RawExifMap`]. Only the primary
//! image is read: IFD0 and the Exif sub-IFD go to the top level, GPS fields
//! are gathered into a [`RawValue::Directory`] under the `GPSInfo` tag, and
//! thumbnail or interoperability fields are skipped.

use crate::domain::metadata::{tags, RawExifMap, RawValue};
use std::collections::BTreeMap;
use std::io::{BufRead, Seek};

/// Reads the EXIF block of an image container (JPEG, TIFF, PNG, WebP, HEIF).
///
/// Returns `None` when the container has no EXIF or when the block cannot
/// be parsed; parse failures are reported on stderr.
pub fn read_raw_exif<R: BufRead + Seek>(reader: &mut R) -> Option<RawExifMap> {
    into_raw_map(exif::Reader::new().read_from_container(reader))
}

/// Parses a bare TIFF-structured EXIF block (the payload after `Exif\0\0`).
#[must_use]
pub fn parse_raw_exif(data: Vec<u8>) -> Option<RawExifMap> {
    into_raw_map(exif::Reader::new().read_raw(data))
}

fn into_raw_map(result: Result<exif::Exif, exif::Error>) -> Option<RawExifMap> {
    match result {
        Ok(exif) => Some(raw_map_from_exif(&exif)).filter(|map| !map.is_empty()),
        Err(exif::Error::NotFound(_)) => None,
        Err(err) => {
            eprintln!("[WARN] Failed to read EXIF data: {err}");
            None
        }
    }
}

/// Builds the raw tag mapping from parsed EXIF fields.
#[must_use]
pub fn raw_map_from_exif(exif: &exif::Exif) -> RawExifMap {
    let mut raw = RawExifMap::new();
    let mut gps = BTreeMap::new();

    for field in exif.fields() {
        if field.ifd_num != exif::In::PRIMARY {
            continue;
        }
        let value = raw_value(&field.value);
        match field.tag.context() {
            exif::Context::Tiff | exif::Context::Exif => {
                raw.insert(field.tag.number(), value);
            }
            exif::Context::Gps => {
                gps.insert(field.tag.number(), value);
            }
            _ => {}
        }
    }

    if !gps.is_empty() {
        raw.insert(tags::TAG_GPS_INFO, RawValue::Directory(gps));
    }
    raw
}

/// Converts a `kamadak-exif` value. Single-component numeric fields become
/// scalars, longer ones tuples.
#[must_use]
pub fn raw_value(value: &exif::Value) -> RawValue {
    match value {
        exif::Value::Ascii(strings) => RawValue::Bytes(strings.join(&b", "[..])),
        exif::Value::Byte(bytes) | exif::Value::Undefined(bytes, _) => {
            RawValue::Bytes(bytes.clone())
        }
        exif::Value::Short(values) => collect(values.iter().map(|&v| RawValue::int(v.into()))),
        exif::Value::Long(values) => collect(values.iter().map(|&v| RawValue::int(v.into()))),
        exif::Value::SByte(values) => collect(values.iter().map(|&v| RawValue::int(v.into()))),
        exif::Value::SShort(values) => collect(values.iter().map(|&v| RawValue::int(v.into()))),
        exif::Value::SLong(values) => collect(values.iter().map(|&v| RawValue::int(v.into()))),
        exif::Value::Rational(values) => collect(
            values
                .iter()
                .map(|r| RawValue::rational(r.num.into(), r.denom.into())),
        ),
        exif::Value::SRational(values) => collect(
            values
                .iter()
                .map(|r| RawValue::rational(r.num.into(), r.denom.into())),
        ),
        exif::Value::Float(values) => collect(values.iter().map(|&v| RawValue::float(v.into()))),
        exif::Value::Double(values) => collect(values.iter().map(|&v| RawValue::float(v))),
        _ => RawValue::Bytes(Vec::new()),
    }
}

fn collect(values: impl Iterator<Item = RawValue>) -> RawValue {
    let mut items: Vec<RawValue> = values.collect();
    if items.len() == 1 {
        items.remove(0)
    } else {
        RawValue::Tuple(items)
    }
}
