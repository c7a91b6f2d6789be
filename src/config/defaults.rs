// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

use crate::domain::metadata::{MatchPolicy, SECURE_MAKE, SECURE_MODEL};

// ==========================================================================
// Classification Defaults
// ==========================================================================

/// Default expected camera make for a secure image.
pub const DEFAULT_SECURE_MAKE: &str = SECURE_MAKE;

/// Default expected camera model for a secure image.
pub const DEFAULT_SECURE_MODEL: &str = SECURE_MODEL;

/// Default criteria combination: make and model must both match.
pub const DEFAULT_MATCH_POLICY: MatchPolicy = MatchPolicy::All;

// ==========================================================================
// Report Layout
// ==========================================================================

/// Width of the left-aligned label column in the text report.
pub const LABEL_WIDTH: usize = 25;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(LABEL_WIDTH > 0);
    assert!(!DEFAULT_SECURE_MAKE.is_empty());
    assert!(!DEFAULT_SECURE_MODEL.is_empty());
};
