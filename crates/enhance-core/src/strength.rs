//! Password strength scoring.
//!
//! The meter is a UX hint, not an enforcement mechanism: the score is the
//! number of satisfied predicates out of five, recomputed from scratch on
//! every call with no memory of prior values.

use serde::{Deserialize, Serialize};

/// Symbols counted by the symbol predicate.
const SYMBOL_SET: &str = "!@#$%^&*(),.?\":{}|<>";

/// Highest reachable score.
pub const MAX_SCORE: u8 = 5;

/// Percentage of bar width one score point is worth.
const WIDTH_PER_POINT: u8 = 20;

/// One labeled strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    /// Score 0–1.
    Weak,
    /// Score 2–3.
    Medium,
    /// Score 4.
    Good,
    /// Score 5.
    Excellent,
}

impl StrengthTier {
    /// Map a score to its tier. Scores above [`MAX_SCORE`] clamp to
    /// [`StrengthTier::Excellent`].
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthTier::Weak,
            2 | 3 => StrengthTier::Medium,
            4 => StrengthTier::Good,
            _ => StrengthTier::Excellent,
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Слабый пароль",
            StrengthTier::Medium => "Средний пароль",
            StrengthTier::Good => "Хороший пароль",
            StrengthTier::Excellent => "Отличный пароль!",
        }
    }

    /// Color token used in the bar and label utility classes.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "red",
            StrengthTier::Medium => "yellow",
            StrengthTier::Good => "blue",
            StrengthTier::Excellent => "green",
        }
    }
}

/// Result of scoring a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Number of satisfied predicates, in `[0, 5]`.
    pub score: u8,
    /// Band the score falls into.
    pub tier: StrengthTier,
}

impl StrengthReport {
    /// Width of the proportional meter bar, in percent.
    pub fn bar_width_percent(&self) -> u8 {
        self.score * WIDTH_PER_POINT
    }
}

/// Score a password against the five independent predicates: length of at
/// least 8, an ASCII uppercase letter, an ASCII lowercase letter, an ASCII
/// digit, and a symbol from the fixed set.
///
/// ```
/// use enhance_core::strength::{score_password, StrengthTier};
///
/// let report = score_password("abc");
/// assert_eq!(report.score, 1);
/// assert_eq!(report.tier, StrengthTier::Weak);
/// ```
pub fn score_password(password: &str) -> StrengthReport {
    let predicates = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SYMBOL_SET.contains(c)),
    ];

    let score = predicates.iter().filter(|satisfied| **satisfied).count() as u8;
    StrengthReport {
        score,
        tier: StrengthTier::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        let report = score_password("");
        assert_eq!(report.score, 0);
        assert_eq!(report.tier, StrengthTier::Weak);
        assert_eq!(report.bar_width_percent(), 0);
    }

    #[test]
    fn test_score_is_bounded() {
        for password in ["", "a", "aA1!", "Tr0ub4dor&3", "пароль", "        "] {
            let report = score_password(password);
            assert!(report.score <= MAX_SCORE);
        }
    }

    #[test]
    fn test_each_predicate_counts_once() {
        assert_eq!(score_password("zzzzzzzz").score, 2); // length + lowercase
        assert_eq!(score_password("A").score, 1);
        assert_eq!(score_password("a").score, 1);
        assert_eq!(score_password("7").score, 1);
        assert_eq!(score_password("!").score, 1);
    }

    #[test]
    fn test_score_monotone_in_satisfied_predicates() {
        // Each step satisfies one more predicate than the last.
        let steps = ["", "a", "aB", "aB1", "aB1!", "aB1!aB1!"];
        let mut previous = 0;
        for password in steps {
            let score = score_password(password).score;
            assert!(score >= previous, "score regressed at {password:?}");
            previous = score;
        }
        assert_eq!(previous, MAX_SCORE);
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(1), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(2), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Good);
        assert_eq!(StrengthTier::from_score(5), StrengthTier::Excellent);
    }

    #[test]
    fn test_tier_labels_and_colors() {
        assert_eq!(StrengthTier::Weak.color(), "red");
        assert_eq!(StrengthTier::Medium.color(), "yellow");
        assert_eq!(StrengthTier::Good.color(), "blue");
        assert_eq!(StrengthTier::Excellent.color(), "green");
        assert_eq!(StrengthTier::Excellent.label(), "Отличный пароль!");
    }

    #[test]
    fn test_bar_width_tracks_score() {
        let report = score_password("aB1!aB1!");
        assert_eq!(report.score, 5);
        assert_eq!(report.bar_width_percent(), 100);

        let report = score_password("aB1!");
        assert_eq!(report.score, 4);
        assert_eq!(report.bar_width_percent(), 80);
    }

    #[test]
    fn test_non_ascii_letters_do_not_satisfy_case_predicates() {
        // Mirrors the page contract: case checks are ASCII classes.
        let report = score_password("ПАРОЛЬ");
        assert_eq!(report.score, 0);
    }
}
