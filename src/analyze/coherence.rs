use super::{MetricScorer, SummaryInput};
use crate::types::scoring::{Metric, Score};

const MULTI_SENTENCE_SCORE: Score = 80.0;
const SINGLE_SENTENCE_SCORE: Score = 60.0;

pub fn coherence(summary: &str) -> Score {
    if summary.split('.').count() > 2 {
        MULTI_SENTENCE_SCORE
    } else {
        SINGLE_SENTENCE_SCORE
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceCoherence;

impl MetricScorer for SentenceCoherence {
    fn metric(&self) -> Metric {
        Metric::Coherence
    }

    fn score(&self, input: &SummaryInput<'_>) -> Score {
        coherence(input.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_periods_make_three_fragments() {
        assert_eq!(coherence("First. Second."), 80.0);
    }

    #[test]
    fn single_sentence_gets_base_score() {
        assert_eq!(coherence("This is a test summary with about ten words."), 60.0);
        assert_eq!(coherence("no period at all"), 60.0);
        assert_eq!(coherence(""), 60.0);
    }
}
