// SPDX-License-Identifier: MPL-2.0
//! Image loading port definition.
//!
//! The analysis use case never touches files or decoder crates directly. It
//! receives a [`DecodedImage`] from an [`ImageLoader`]; the filesystem
//! adapter lives in `infrastructure::loader`.

use crate::domain::media::DecodedImage;
use crate::error::Result;
use std::path::Path;

/// Decodes an image file into its display properties and raw EXIF mapping.
///
/// Implementations must report a file without EXIF as `exif: None` rather
/// than as an error.
pub trait ImageLoader {
    /// Loads the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a decodable image.
    fn load(&self, path: &Path) -> Result<DecodedImage>;
}
