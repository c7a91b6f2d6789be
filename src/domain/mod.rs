// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Decoded image description ([`ImageProperties`](media::ImageProperties),
//!   [`DecodedImage`](media::DecodedImage))
//! - [`metadata`]: EXIF values and the three analysis steps
//!   ([`normalize`](metadata::normalize), [`classify`](metadata::classify),
//!   [`extract_geolocation`](metadata::extract_geolocation))

pub mod media;
pub mod metadata;
