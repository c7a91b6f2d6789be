// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete decoders.
//!
//! # Available Ports
//!
//! - [`media`]: Image decoding and EXIF extraction

pub mod media;

// Re-export main types for convenience
pub use media::ImageLoader;
