// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types describe a decoded image without holding its pixels.

use crate::domain::metadata::RawExifMap;

/// Display properties of a decoded image.
///
/// # Example
///
/// ```
/// use exif_lens::domain::media::ImageProperties;
///
/// let props = ImageProperties::still(640, 480, "JPEG", "RGB");
/// assert_eq!(props.size_label(), "640x480");
/// assert!(!props.is_animated);
/// assert_eq!(props.frame_count, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProperties {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Container format name (e.g., "JPEG", "PNG").
    pub format: String,
    /// Pixel layout name (e.g., "RGB", "RGBA", "L").
    pub mode: String,
    pub is_animated: bool,
    pub frame_count: usize,
}

impl ImageProperties {
    /// Creates properties for a single-frame image.
    #[must_use]
    pub fn still(
        width: u32,
        height: u32,
        format: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            width,
            height,
            format: format.into(),
            mode: mode.into(),
            is_animated: false,
            frame_count: 1,
        }
    }

    /// Sets the frame count; more than one frame marks the image as animated.
    #[must_use]
    pub fn with_frames(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count.max(1);
        self.is_animated = self.frame_count > 1;
        self
    }

    /// Returns the dimensions as `WIDTHxHEIGHT`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// A decoded image as handed to the analysis step: its properties and the
/// raw EXIF mapping, if the file carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub properties: ImageProperties,
    pub exif: Option<RawExifMap>,
}

impl DecodedImage {
    #[must_use]
    pub fn new(properties: ImageProperties, exif: Option<RawExifMap>) -> Self {
        Self { properties, exif }
    }

    /// Returns the EXIF mapping when it holds at least one tag.
    #[must_use]
    pub fn exif(&self) -> Option<&RawExifMap> {
        self.exif.as_ref().filter(|map| !map.is_empty())
    }
}
