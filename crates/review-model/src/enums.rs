//! Type-safe labels and review codes.
//!
//! Two families live here:
//!
//! - **Ground truth labels** ([`PrivilegeLabel`], [`ResponsivenessLabel`]) are
//!   fixed-rule synthetic values attached to generated documents. They only
//!   drive training filters.
//! - **Reviewer codes** ([`ResponsivenessCode`], [`PrivilegeCode`]) are what a
//!   reviewer records when coding a document.
//!
//! All of them persist and export by their display string, so
//! `PrivilegeCode::NotPrivileged` is written as `Not Privileged`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Collapse a user-typed label for lenient matching ("not-privileged",
/// "NotPrivileged" and "Not Privileged" all normalize the same way).
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Synthetic privilege ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrivilegeLabel {
    #[serde(rename = "Privileged")]
    Privileged,
    #[serde(rename = "Not Privileged")]
    NotPrivileged,
}

impl PrivilegeLabel {
    pub const ALL: [PrivilegeLabel; 2] = [PrivilegeLabel::Privileged, PrivilegeLabel::NotPrivileged];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrivilegeLabel::Privileged => "Privileged",
            PrivilegeLabel::NotPrivileged => "Not Privileged",
        }
    }
}

impl fmt::Display for PrivilegeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrivilegeLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "privileged" => Ok(PrivilegeLabel::Privileged),
            "notprivileged" => Ok(PrivilegeLabel::NotPrivileged),
            _ => Err(ModelError::UnknownCode {
                kind: "privilege label",
                value: s.to_string(),
            }),
        }
    }
}

/// Synthetic responsiveness ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResponsivenessLabel {
    Responsive,
    Unreviewed,
}

impl ResponsivenessLabel {
    pub const ALL: [ResponsivenessLabel; 2] =
        [ResponsivenessLabel::Responsive, ResponsivenessLabel::Unreviewed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponsivenessLabel::Responsive => "Responsive",
            ResponsivenessLabel::Unreviewed => "Unreviewed",
        }
    }
}

impl fmt::Display for ResponsivenessLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponsivenessLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "responsive" => Ok(ResponsivenessLabel::Responsive),
            "unreviewed" => Ok(ResponsivenessLabel::Unreviewed),
            _ => Err(ModelError::UnknownCode {
                kind: "responsiveness label",
                value: s.to_string(),
            }),
        }
    }
}

/// Reviewer's responsiveness decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResponsivenessCode {
    #[default]
    Unreviewed,
    Responsive,
    #[serde(rename = "Not Responsive")]
    NotResponsive,
    #[serde(rename = "Needs Further Review")]
    NeedsFurtherReview,
}

impl ResponsivenessCode {
    pub const ALL: [ResponsivenessCode; 4] = [
        ResponsivenessCode::Unreviewed,
        ResponsivenessCode::Responsive,
        ResponsivenessCode::NotResponsive,
        ResponsivenessCode::NeedsFurtherReview,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponsivenessCode::Unreviewed => "Unreviewed",
            ResponsivenessCode::Responsive => "Responsive",
            ResponsivenessCode::NotResponsive => "Not Responsive",
            ResponsivenessCode::NeedsFurtherReview => "Needs Further Review",
        }
    }
}

impl fmt::Display for ResponsivenessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponsivenessCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "unreviewed" => Ok(ResponsivenessCode::Unreviewed),
            "responsive" => Ok(ResponsivenessCode::Responsive),
            "notresponsive" | "nonresponsive" => Ok(ResponsivenessCode::NotResponsive),
            "needsfurtherreview" | "furtherreview" => Ok(ResponsivenessCode::NeedsFurtherReview),
            _ => Err(ModelError::UnknownCode {
                kind: "responsiveness code",
                value: s.to_string(),
            }),
        }
    }
}

/// Reviewer's privilege decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrivilegeCode {
    #[default]
    Unreviewed,
    Privileged,
    #[serde(rename = "Not Privileged")]
    NotPrivileged,
    #[serde(rename = "Partially Privileged")]
    PartiallyPrivileged,
}

impl PrivilegeCode {
    pub const ALL: [PrivilegeCode; 4] = [
        PrivilegeCode::Unreviewed,
        PrivilegeCode::Privileged,
        PrivilegeCode::NotPrivileged,
        PrivilegeCode::PartiallyPrivileged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrivilegeCode::Unreviewed => "Unreviewed",
            PrivilegeCode::Privileged => "Privileged",
            PrivilegeCode::NotPrivileged => "Not Privileged",
            PrivilegeCode::PartiallyPrivileged => "Partially Privileged",
        }
    }
}

impl fmt::Display for PrivilegeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrivilegeCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "unreviewed" => Ok(PrivilegeCode::Unreviewed),
            "privileged" => Ok(PrivilegeCode::Privileged),
            "notprivileged" => Ok(PrivilegeCode::NotPrivileged),
            "partiallyprivileged" | "partial" => Ok(PrivilegeCode::PartiallyPrivileged),
            _ => Err(ModelError::UnknownCode {
                kind: "privilege code",
                value: s.to_string(),
            }),
        }
    }
}
