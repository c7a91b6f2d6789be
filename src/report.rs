// SPDX-License-Identifier: MPL-2.0
//! Plain-text rendering of an [`AnalysisReport`].
//!
//! Every labelled line uses a left-aligned label column of
//! [`LABEL_WIDTH`] characters followed by `": "` and the value.

use crate::application::analysis::{AnalysisReport, ExifFindings};
use crate::config::LABEL_WIDTH;

pub const INFO_HEADING: &str = "Image Exchange Information";
pub const SECURITY_HEADING: &str = "Image Security Classification";
pub const LOCATION_HEADING: &str = "Image Location on Map";
pub const NO_LOCATION: &str = "No location details";
pub const NO_METADATA: &str =
    "This image does not have metadata or does not match secure criteria.";

/// Renders the report, one item per line, with a trailing newline.
#[must_use]
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let props = &report.properties;

    line(&mut out, INFO_HEADING);
    labelled(&mut out, "Filename", &report.filename);
    labelled(&mut out, "Image Size", &props.size_label());
    labelled(&mut out, "Image Width", &props.width.to_string());
    labelled(&mut out, "Image Height", &props.height.to_string());
    labelled(&mut out, "Image Format", &props.format);
    labelled(&mut out, "Image Mode", &props.mode);
    labelled(&mut out, "Image is Animated", &props.is_animated.to_string());
    labelled(&mut out, "Frames in Image", &props.frame_count.to_string());

    match &report.findings {
        ExifFindings::Missing => {
            line(&mut out, SECURITY_HEADING);
            line(&mut out, NO_METADATA);
        }
        ExifFindings::Present {
            tags,
            verdict,
            location,
        } => {
            for entry in tags {
                labelled(&mut out, &entry.tag_name, &entry.value);
            }

            line(&mut out, SECURITY_HEADING);
            line(&mut out, &format!("This image is: {verdict}"));

            match location {
                Some(coords) => {
                    line(&mut out, LOCATION_HEADING);
                    line(&mut out, &coords.format());
                    line(&mut out, &coords.map_url());
                }
                None => line(&mut out, NO_LOCATION),
            }
        }
    }

    out
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn labelled(out: &mut String, label: &str, value: &str) {
    line(out, &format!("{label:<width$}: {value}", width = LABEL_WIDTH));
}
