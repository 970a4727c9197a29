//! Password strength evaluator - local criterion scan and scoring.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::{CRITERIA, Criterion};

/// Result of a local strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    /// Per-criterion outcomes, in the fixed display order.
    pub criteria: Vec<Criterion>,
    /// Percentage of satisfied criteria (a multiple of 20).
    pub score: u8,
}

impl StrengthEvaluation {
    /// Meter band for the current score.
    pub fn band(&self) -> BasicStrength {
        BasicStrength::from_score(self.score)
    }
}

/// Banding of the local score for the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicStrength {
    /// Score below 40.
    Weak,
    /// Score from 40 to 79.
    Moderate,
    /// Score of 80 or above.
    Strong,
}

impl BasicStrength {
    /// Maps a 0-100 score to its band.
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            Self::Weak
        } else if score < 80 {
            Self::Moderate
        } else {
            Self::Strong
        }
    }

    /// Display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for BasicStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluates a password against the five fixed criteria.
///
/// All criteria are tested independently; there is no short-circuit. An
/// empty password fails every criterion and scores 0. The function is pure
/// and cheap enough to call on every input event.
///
/// # Example
/// ```
/// use pwd_analyzer::evaluate;
/// use secrecy::SecretString;
///
/// let evaluation = evaluate(&SecretString::from("Abcdefg1!"));
/// assert_eq!(evaluation.score, 100);
/// ```
pub fn evaluate(password: &SecretString) -> StrengthEvaluation {
    let pwd = password.expose_secret();

    let criteria: Vec<Criterion> = CRITERIA
        .iter()
        .map(|&(id, label, test)| Criterion {
            id,
            label,
            satisfied: test(pwd),
        })
        .collect();

    let satisfied = criteria.iter().filter(|c| c.satisfied).count();
    let score = (satisfied * 100 / CRITERIA.len()) as u8;

    StrengthEvaluation { criteria, score }
}
