// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`analysis`]: The single-image EXIF analysis use case
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer consumes [`analysis::AnalysisReport`]
//!
//! # Example
//!
//! ```ignore
//! use exif_lens::application::analysis::analyze_file;
//! use exif_lens::domain::metadata::SecureProfile;
//! use exif_lens::infrastructure::FileImageLoader;
//!
//! let report = analyze_file(&FileImageLoader, "photo.jpg".as_ref(), &SecureProfile::default())?;
//! ```

pub mod analysis;
pub mod port;
