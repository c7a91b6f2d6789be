// SPDX-License-Identifier: MPL-2.0
//! `exif_lens` inspects the EXIF metadata of a single image.
//!
//! It lists every tag under a readable name, classifies the image against an
//! expected camera make/model profile and converts embedded GPS coordinates
//! to decimal degrees.
//!
//! The crate follows a layered layout:
//!
//! - [`domain`]: pure types and the metadata algorithms
//! - [`application`]: the analysis use case and its ports
//! - [`infrastructure`]: adapters over the `image` and `kamadak-exif` crates
//! - [`config`], [`report`] and [`app`]: settings, text output and the CLI

#![doc(html_root_url = "https://docs.rs/exif_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod report;

#[cfg(test)]
mod test_utils;
