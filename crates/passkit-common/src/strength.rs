//! Coarse strength buckets.
//!
//! The class is a separate axis from the numeric score and the free-text
//! label: presentation keys off the class only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthClass {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthClass {
    /// Parse a wire tag. Matching is exact: `"Weak"` is not a known tag.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "weak" => Some(StrengthClass::Weak),
            "moderate" => Some(StrengthClass::Moderate),
            "strong" => Some(StrengthClass::Strong),
            "very-strong" => Some(StrengthClass::VeryStrong),
            _ => None,
        }
    }

    /// Bucket a raw (unclamped) analyzer score.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 7 => StrengthClass::VeryStrong,
            s if s >= 5 => StrengthClass::Strong,
            s if s >= 3 => StrengthClass::Moderate,
            _ => StrengthClass::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthClass::Weak => "weak",
            StrengthClass::Moderate => "moderate",
            StrengthClass::Strong => "strong",
            StrengthClass::VeryStrong => "very-strong",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            StrengthClass::Weak => "Weak",
            StrengthClass::Moderate => "Moderate",
            StrengthClass::Strong => "Strong",
            StrengthClass::VeryStrong => "Very Strong",
        }
    }

    /// Hex color the backend attaches to an analysis.
    pub fn hex_color(self) -> &'static str {
        match self {
            StrengthClass::Weak => "#dc2626",
            StrengthClass::Moderate => "#d97706",
            StrengthClass::Strong => "#059669",
            StrengthClass::VeryStrong => "#10b981",
        }
    }
}
