// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the external decoding crates.
//!
//! # Available Adapters
//!
//! - [`exif_reader`]: EXIF parsing via `kamadak-exif`
//! - [`loader`]: Image probing via `image` (implements [`ImageLoader`])
//!
//! [`ImageLoader`]: crate::application::port::ImageLoader

pub mod exif_reader;
pub mod loader;

// Re-export main types for convenience
pub use exif_reader::{parse_raw_exif, read_raw_exif};
pub use loader::FileImageLoader;
