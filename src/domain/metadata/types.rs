// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for EXIF metadata with no external dependencies.

use std::collections::BTreeMap;
use std::fmt;

/// Raw EXIF tag mapping: numeric tag ID to undecoded value.
///
/// Iterates in ascending tag ID order. The order carries no meaning beyond
/// making reports reproducible.
pub type RawExifMap = BTreeMap<u16, RawValue>;

// =============================================================================
// RawValue
// =============================================================================

/// A numeric EXIF value that is not a fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => f.write_str(&format_float(*value)),
        }
    }
}

/// A single undecoded EXIF value as handed over by the container reader.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Text or opaque bytes. Text is UTF-8 but may be malformed.
    Bytes(Vec<u8>),
    /// An exact fraction.
    Rational { numerator: i64, denominator: i64 },
    Number(Number),
    /// A multi-component value such as a DMS triple.
    Tuple(Vec<RawValue>),
    /// A nested IFD, keyed by sub-tag ID (e.g. the GPS block).
    Directory(BTreeMap<u16, RawValue>),
}

impl RawValue {
    /// Convenience constructor for text values.
    #[must_use]
    pub fn text(value: &str) -> Self {
        RawValue::Bytes(value.as_bytes().to_vec())
    }

    #[must_use]
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        RawValue::Rational {
            numerator,
            denominator,
        }
    }

    #[must_use]
    pub fn int(value: i64) -> Self {
        RawValue::Number(Number::Int(value))
    }

    #[must_use]
    pub fn float(value: f64) -> Self {
        RawValue::Number(Number::Float(value))
    }

    /// Decodes the value as display text.
    ///
    /// Byte sequences are read as UTF-8 with invalid sequences dropped; every
    /// other variant uses its natural textual form. Never fails.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Bytes(bytes) => decode_text(bytes),
            other => other.to_string(),
        }
    }

    /// Coerces a scalar numeric value to `f64`.
    ///
    /// Returns `None` for non-numeric variants and for fractions with a zero
    /// denominator.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(number) => Some(number.to_f64()).filter(|v| v.is_finite()),
            RawValue::Rational {
                numerator,
                denominator,
            } => {
                if *denominator == 0 {
                    None
                } else {
                    Some(*numerator as f64 / *denominator as f64)
                }
            }
            RawValue::Bytes(_) | RawValue::Tuple(_) | RawValue::Directory(_) => None,
        }
    }

    /// Writes the value as it appears nested inside a tuple or directory,
    /// where text is quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bytes(bytes) => write!(f, "'{}'", decode_text(bytes)),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bytes(bytes) => f.write_str(&decode_text(bytes)),
            RawValue::Rational {
                numerator,
                denominator,
            } => {
                #[allow(clippy::cast_precision_loss)]
                let value = *numerator as f64 / *denominator as f64;
                f.write_str(&format_float(value))
            }
            RawValue::Number(number) => write!(f, "{number}"),
            RawValue::Tuple(items) => {
                f.write_str("(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            RawValue::Directory(entries) => {
                f.write_str("{")?;
                for (index, (tag, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{tag}: ")?;
                    value.fmt_nested(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Formats a float the way a decimal literal reads: whole numbers keep a
/// trailing `.0`, non-finite values are spelled out.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}inf")
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

// =============================================================================
// NormalizedTagEntry
// =============================================================================

/// One display line of the tag listing: a resolved tag name and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTagEntry {
    pub tag_name: String,
    pub value: String,
}

// =============================================================================
// SecurityVerdict
// =============================================================================

/// Outcome of the camera profile check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityVerdict {
    Secure,
    NotSecure,
}

impl SecurityVerdict {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityVerdict::Secure => "Secure",
            SecurityVerdict::NotSecure => "Not Secure",
        }
    }
}

impl fmt::Display for SecurityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// GpsCoordinates
// =============================================================================

/// GPS coordinates in decimal degrees.
///
/// Values are stored exactly as computed from the source data. Malformed
/// sources can produce values outside the WGS84 ranges; use
/// [`GpsCoordinates::is_in_range`] to detect them.
///
/// # Example
///
/// ```ignore
/// let coords = GpsCoordinates::new(48.8566, 2.3522); // Paris
/// assert!(coords.is_in_range());
/// assert_eq!(coords.format(), "48.856600° N, 2.352200° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpsCoordinates {
    latitude: f64,
    longitude: f64,
}

impl GpsCoordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether both values are finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns whether latitude is within [-90, 90] and longitude within
    /// [-180, 180].
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Formats the coordinates as a human-readable string.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }

    /// Generates a URL to view these coordinates on a map.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={}&mlon={}#map=15/{}/{}",
            self.latitude, self.longitude, self.latitude, self.longitude
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
