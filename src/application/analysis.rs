// SPDX-License-Identifier: MPL-2.0
//! Single-image EXIF analysis.
//!
//! One call analyses one image. The three metadata steps run independently
//! on the same raw mapping; when the image carries no EXIF at all they are
//! skipped and the report holds a single [`ExifFindings::Missing`] outcome.

use crate::application::port::ImageLoader;
use crate::domain::media::{DecodedImage, ImageProperties};
use crate::domain::metadata::{
    extract_geolocation, normalize, GpsCoordinates, NormalizedTagEntry, SecureProfile,
    SecurityVerdict,
};
use crate::error::Result;
use std::path::Path;

/// What the EXIF steps found.
#[derive(Debug, Clone, PartialEq)]
pub enum ExifFindings {
    /// The image has no (or an empty) EXIF mapping.
    Missing,
    Present {
        tags: Vec<NormalizedTagEntry>,
        verdict: SecurityVerdict,
        location: Option<GpsCoordinates>,
    },
}

impl ExifFindings {
    /// Returns the location, if one was found.
    #[must_use]
    pub fn location(&self) -> Option<GpsCoordinates> {
        match self {
            ExifFindings::Missing => None,
            ExifFindings::Present { location, .. } => *location,
        }
    }

    /// Returns the classification, or `None` when it was skipped.
    #[must_use]
    pub fn verdict(&self) -> Option<SecurityVerdict> {
        match self {
            ExifFindings::Missing => None,
            ExifFindings::Present { verdict, .. } => Some(*verdict),
        }
    }

    /// Returns the normalized tag listing (empty when EXIF is missing).
    #[must_use]
    pub fn tags(&self) -> &[NormalizedTagEntry] {
        match self {
            ExifFindings::Missing => &[],
            ExifFindings::Present { tags, .. } => tags,
        }
    }
}

/// Everything the presenter needs for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub filename: String,
    pub properties: ImageProperties,
    pub findings: ExifFindings,
}

/// Runs the metadata steps over an already decoded image.
#[must_use]
pub fn analyze(filename: &str, image: &DecodedImage, profile: &SecureProfile) -> AnalysisReport {
    let findings = match image.exif() {
        None => ExifFindings::Missing,
        Some(raw) => ExifFindings::Present {
            tags: normalize(raw),
            verdict: profile.classify(raw),
            location: extract_geolocation(raw),
        },
    };

    AnalysisReport {
        filename: filename.to_string(),
        properties: image.properties.clone(),
        findings,
    }
}

/// Loads `path` through `loader` and analyses it.
///
/// The report's filename is the final path component.
///
/// # Errors
///
/// Propagates loader errors (unreadable or undecodable file). Metadata
/// problems never produce errors.
pub fn analyze_file(
    loader: &impl ImageLoader,
    path: &Path,
    profile: &SecureProfile,
) -> Result<AnalysisReport> {
    let image = loader.load(path)?;
    let filename = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    Ok(analyze(&filename, &image, profile))
}
