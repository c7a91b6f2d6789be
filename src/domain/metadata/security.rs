// SPDX-License-Identifier: MPL-2.0
//! Camera profile classification.
//!
//! An image is classified against a [`SecureProfile`]: an ordered list of
//! tag/expected-value criteria and a [`MatchPolicy`] deciding how many of
//! them must hold. The default profile expects `Make = "SecureMake"` and
//! `Model = "SecureModel"` and requires both.

use super::tags::{TAG_MAKE, TAG_MODEL};
use super::types::{RawExifMap, SecurityVerdict};

/// Expected make literal of the default profile.
pub const SECURE_MAKE: &str = "SecureMake";
/// Expected model literal of the default profile.
pub const SECURE_MODEL: &str = "SecureModel";

/// How many criteria must match for an image to be classified as secure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Every criterion must match.
    #[default]
    All,
    /// The first matching criterion is enough.
    Any,
}

impl MatchPolicy {
    /// Parses `"all"` or `"any"` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("all") {
            Some(MatchPolicy::All)
        } else if value.eq_ignore_ascii_case("any") {
            Some(MatchPolicy::Any)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchPolicy::All => "all",
            MatchPolicy::Any => "any",
        }
    }
}

/// A single expected tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub tag_id: u16,
    pub expected: String,
}

impl Criterion {
    #[must_use]
    pub fn new(tag_id: u16, expected: impl Into<String>) -> Self {
        Self {
            tag_id,
            expected: expected.into(),
        }
    }

    /// Compares the decoded tag text with the expected literal.
    ///
    /// A missing tag reads as empty text.
    #[must_use]
    pub fn matches(&self, raw: &RawExifMap) -> bool {
        let actual = raw
            .get(&self.tag_id)
            .map(|value| value.to_text())
            .unwrap_or_default();
        actual == self.expected
    }
}

/// Criteria plus the policy combining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecureProfile {
    criteria: Vec<Criterion>,
    policy: MatchPolicy,
}

impl Default for SecureProfile {
    fn default() -> Self {
        Self::camera(SECURE_MAKE, SECURE_MODEL, MatchPolicy::default())
    }
}

impl SecureProfile {
    #[must_use]
    pub fn new(criteria: Vec<Criterion>, policy: MatchPolicy) -> Self {
        Self { criteria, policy }
    }

    /// Builds the make/model profile, checked in that order.
    #[must_use]
    pub fn camera(make: impl Into<String>, model: impl Into<String>, policy: MatchPolicy) -> Self {
        Self::new(
            vec![Criterion::new(TAG_MAKE, make), Criterion::new(TAG_MODEL, model)],
            policy,
        )
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns `true` when every criterion matches.
    ///
    /// A profile without criteria never matches.
    #[must_use]
    pub fn matches_all_criteria(&self, raw: &RawExifMap) -> bool {
        !self.criteria.is_empty() && self.criteria.iter().all(|c| c.matches(raw))
    }

    /// Returns `true` as soon as one criterion matches, in declaration order.
    #[must_use]
    pub fn matches_any_criterion(&self, raw: &RawExifMap) -> bool {
        self.criteria.iter().any(|c| c.matches(raw))
    }

    /// Classifies the image according to the profile's policy.
    #[must_use]
    pub fn classify(&self, raw: &RawExifMap) -> SecurityVerdict {
        let matched = match self.policy {
            MatchPolicy::All => self.matches_all_criteria(raw),
            MatchPolicy::Any => self.matches_any_criterion(raw),
        };
        if matched {
            SecurityVerdict::Secure
        } else {
            SecurityVerdict::NotSecure
        }
    }
}

/// Classifies the image with the default profile (make and model must both
/// match).
#[must_use]
pub fn classify(raw: &RawExifMap) -> SecurityVerdict {
    SecureProfile::default().classify(raw)
}
