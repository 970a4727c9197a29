//! Structured analysis results from the remote analyzer.
//!
//! The wire contract is a closed set of labels; anything outside it fails
//! deserialization rather than producing a partially valid result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall strength rating assigned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    /// "Very Weak"
    #[serde(rename = "Very Weak")]
    VeryWeak,
    /// "Weak"
    Weak,
    /// "Moderate"
    Moderate,
    /// "Strong"
    Strong,
    /// "Very Strong"
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Display label, identical to the wire spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Likelihood that the password pattern appears in breached password lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompromiseRisk {
    /// "High"
    High,
    /// "Medium"
    Medium,
    /// "Low"
    Low,
    /// "Very Low"
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl CompromiseRisk {
    /// Display label, identical to the wire spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for CompromiseRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative password assessment returned by the remote analyzer.
///
/// Produced once per analysis request and replaced wholesale; a result
/// never describes any password other than the one it was requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Single rating of the password's strength.
    pub overall_strength: StrengthLabel,
    /// Actionable suggestions to improve the password.
    pub feedback: Vec<String>,
    /// Breach-risk rating for the password's pattern.
    pub compromise_risk: CompromiseRisk,
    /// Detected weak patterns, e.g. keyboard sequences or common words.
    pub common_patterns: Vec<String>,
}
