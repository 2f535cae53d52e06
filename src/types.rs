//! Score, strength and evaluation types.

use std::fmt;

use crate::sections::{
    digit_section, length_section, lowercase_section, symbol_section, uppercase_section,
    SectionResult,
};

/// One of the five independent character-class checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Criterion {
    /// All criteria, in evaluation order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Symbol,
    ];

    /// Runs the section backing this criterion.
    pub fn check(self, password: &str) -> SectionResult {
        match self {
            Criterion::Length => length_section(password),
            Criterion::Uppercase => uppercase_section(password),
            Criterion::Lowercase => lowercase_section(password),
            Criterion::Digit => digit_section(password),
            Criterion::Symbol => symbol_section(password),
        }
    }

    pub fn is_met(self, password: &str) -> bool {
        self.check(password).is_none()
    }
}

/// Number of satisfied criteria, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = Criterion::ALL.len() as u8;

    /// Builds a score, clamping anything above [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Counts the criteria `password` satisfies.
    pub fn from_criteria(password: &str) -> Self {
        PasswordEvaluation::of(password).score
    }

    /// Score left when `unmet` criteria failed.
    pub fn from_unmet(unmet: usize) -> Self {
        Self::new(Criterion::ALL.len().saturating_sub(unmet) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Strength classification, ordered `Weak < Medium < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Maps a score to its classification. First match wins:
    /// 5 is strong, 3 or more is medium, anything else is weak.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            PasswordScore::MAX => PasswordStrength::Strong,
            s if s >= 3 => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }

    /// Label with its display marker, e.g. `"Strong password 💪"`.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Strong => "Strong password 💪",
            PasswordStrength::Medium => "Medium password ⚠️",
            PasswordStrength::Weak => "Weak password ❌",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            PasswordStrength::Strong => "💪",
            PasswordStrength::Medium => "⚠️",
            PasswordStrength::Weak => "❌",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a detailed evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    /// One reason per unmet criterion, in criterion order.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    /// Runs every criterion against `password`. The score is derived from
    /// the reasons collected.
    pub fn of(password: &str) -> Self {
        let reasons: Vec<String> = Criterion::ALL
            .iter()
            .filter_map(|criterion| criterion.check(password))
            .collect();

        Self {
            score: PasswordScore::from_unmet(reasons.len()),
            reasons,
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}
