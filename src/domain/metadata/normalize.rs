// SPDX-License-Identifier: MPL-2.0
//! Tag listing: raw tag mapping to display entries.

use super::tags::tag_name;
use super::types::{NormalizedTagEntry, RawExifMap};

/// Converts a raw tag mapping into one display entry per tag.
///
/// Names come from the standard tag table (unknown IDs keep their number),
/// values from [`RawValue::to_text`](super::RawValue::to_text). Nothing is
/// dropped or validated, so the output has exactly one entry per input tag.
#[must_use]
pub fn normalize(raw: &RawExifMap) -> Vec<NormalizedTagEntry> {
    raw.iter()
        .map(|(&tag_id, value)| NormalizedTagEntry {
            tag_name: tag_name(tag_id).into_owned(),
            value: value.to_text(),
        })
        .collect()
}
