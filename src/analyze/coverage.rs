use super::{MetricScorer, SummaryInput};
use crate::types::scoring::{Metric, Score};

fn containment_score<S: AsRef<str>>(summary: &str, needles: &[S]) -> Score {
    if needles.is_empty() {
        return 0.0;
    }
    let haystack = summary.to_lowercase();
    let found = needles
        .iter()
        .filter(|needle| haystack.contains(&needle.as_ref().to_lowercase()))
        .count();
    found as f64 / needles.len() as f64 * 100.0
}

pub fn coverage<S: AsRef<str>>(summary: &str, key_elements: &[S]) -> Score {
    containment_score(summary, key_elements)
}

pub fn faithfulness<S: AsRef<str>>(summary: &str, source_facts: &[S]) -> Score {
    containment_score(summary, source_facts)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCoverage;

impl MetricScorer for KeywordCoverage {
    fn metric(&self) -> Metric {
        Metric::Coverage
    }

    fn score(&self, input: &SummaryInput<'_>) -> Score {
        coverage(input.summary, input.references.key_elements.as_slice())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssumedFaithfulness;

impl AssumedFaithfulness {
    pub const SCORE: Score = 100.0;
}

impl MetricScorer for AssumedFaithfulness {
    fn metric(&self) -> Metric {
        Metric::Faithfulness
    }

    fn score(&self, _input: &SummaryInput<'_>) -> Score {
        Self::SCORE
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FactFaithfulness;

impl MetricScorer for FactFaithfulness {
    fn metric(&self) -> Metric {
        Metric::Faithfulness
    }

    fn score(&self, input: &SummaryInput<'_>) -> Score {
        faithfulness(input.summary, input.references.source_facts.as_slice())
    }
}
