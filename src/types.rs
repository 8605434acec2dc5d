//! Evaluation result types.

use std::fmt;

/// Number of satisfied predicates, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Highest reachable score (every predicate satisfied).
    pub const MAX: u8 = 5;

    /// Creates a score, saturating at [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of satisfied predicates, suitable for a progress bar.
    pub fn progress(&self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

/// Ordinal classification derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// `0..=2` is weak, `3..=4` is medium, `5` is strong.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            _ => Strength::Strong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Outcome of a single evaluation.
///
/// `hints` holds one entry per failed predicate, in predicate declaration
/// order, so `score + hints.len() == 5` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub strength: Strength,
    pub score: Score,
    pub hints: Vec<String>,
}

impl EvaluationResult {
    pub fn new(score: Score, hints: Vec<String>) -> Self {
        Self {
            strength: Strength::from_score(score),
            score,
            hints,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.strength == Strength::Strong
    }
}
