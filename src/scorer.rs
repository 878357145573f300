//! Polarity scoring and threshold classification.

use crate::lexicon::{INTENSIFIERS, NEGATIONS, WORD_WEIGHTS};
use crate::model::SentimentLabel;

/// Lexicon-backed polarity scorer.
///
/// Pure and deterministic: the score is the clamped mean weight of lexicon
/// hits, with negation and intensifier modifiers applied to the word that
/// follows them. Text with no hits (including empty or whitespace-only text)
/// scores exactly 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        SentimentScorer
    }

    /// Score `text` in [-1.0, 1.0].
    pub fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let words = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty());

        let mut total = 0.0;
        let mut hits = 0u32;
        let mut negated = false;
        let mut boost = 1.0;

        for word in words {
            if NEGATIONS.contains(word) {
                negated = true;
                continue;
            }
            if let Some(&factor) = INTENSIFIERS.get(word) {
                boost *= factor;
                continue;
            }
            if let Some(&weight) = WORD_WEIGHTS.get(word) {
                let mut value = weight * boost;
                if negated {
                    // Negation flips and dampens: "not great" reads as
                    // mildly negative, not as the mirror of "great".
                    value = -value * 0.5;
                }
                total += value;
                hits += 1;
            }
            // Modifiers only reach across to the next sentiment word.
            negated = false;
            boost = 1.0;
        }

        if hits == 0 {
            return 0.0;
        }
        (total / f64::from(hits)).clamp(-1.0, 1.0)
    }
}

/// Map a polarity score to its label under the fixed thresholds.
///
/// Total over the reals: every score lands on exactly one label.
pub fn classify(score: f64) -> SentimentLabel {
    if score > 0.0 {
        SentimentLabel::Positive
    } else if score < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   \t\n"), 0.0);
    }

    #[test]
    fn no_lexicon_hits_scores_zero() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("The parcel arrived on a Tuesday."), 0.0);
    }

    #[test]
    fn positive_text_scores_positive() {
        let scorer = SentimentScorer::new();
        let score = scorer.score("This product is amazing and wonderful. Best purchase ever!");
        assert!(score > 0.0);
        assert!(score <= 1.0);
    }

    #[test]
    fn negative_text_scores_negative() {
        let scorer = SentimentScorer::new();
        let score = scorer.score("Terrible quality, broke immediately. Total waste of money.");
        assert!(score < 0.0);
        assert!(score >= -1.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = SentimentScorer::new();
        let text = "Great value, but the manual is confusing.";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn negation_flips_polarity() {
        let scorer = SentimentScorer::new();
        let plain = scorer.score("This is great");
        let negated = scorer.score("This is not great");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn intensifier_strengthens_score() {
        let scorer = SentimentScorer::new();
        let plain = scorer.score("good product");
        let boosted = scorer.score("extremely good product");
        assert!(boosted > plain);
    }

    #[test]
    fn score_stays_in_bounds() {
        let scorer = SentimentScorer::new();
        for text in [
            "extremely absolutely incredibly amazing perfect excellent",
            "extremely terrible horrible awful worst garbage trash",
        ] {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score), "out of range: {score}");
        }
    }

    #[test]
    fn classify_is_exhaustive_over_signs() {
        assert_eq!(classify(0.4), SentimentLabel::Positive);
        assert_eq!(classify(f64::MIN_POSITIVE), SentimentLabel::Positive);
        assert_eq!(classify(-0.4), SentimentLabel::Negative);
        assert_eq!(classify(-f64::MIN_POSITIVE), SentimentLabel::Negative);
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
        assert_eq!(classify(-0.0), SentimentLabel::Neutral);
    }
}
