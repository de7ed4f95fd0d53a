use super::{MetricScorer, SummaryInput};
use crate::types::config::{PromptRules, DEFAULT_STRUCTURE_MARKERS};
use crate::types::scoring::{Metric, Score};
use std::ops::RangeInclusive;

const WORD_RANGE_POINTS: Score = 40.0;
const STRUCTURE_POINTS: Score = 30.0;
const PARTIAL_STRUCTURE_POINTS: Score = 15.0;
// No tone analysis yet; every summary gets the neutral style credit.
const STYLE_POINTS: Score = 30.0;

pub fn prompt_adherence(
    summary: &str,
    word_count: usize,
    min_words: usize,
    max_words: usize,
) -> Score {
    adherence_with_markers(
        summary,
        word_count,
        min_words..=max_words,
        &DEFAULT_STRUCTURE_MARKERS,
    )
}

pub fn adherence_with_markers<S: AsRef<str>>(
    summary: &str,
    word_count: usize,
    word_range: RangeInclusive<usize>,
    markers: &[S],
) -> Score {
    let word_score = if word_range.contains(&word_count) {
        WORD_RANGE_POINTS
    } else {
        0.0
    };
    let structure_score = if markers
        .iter()
        .all(|marker| summary.contains(marker.as_ref()))
    {
        STRUCTURE_POINTS
    } else {
        PARTIAL_STRUCTURE_POINTS
    };
    word_score + structure_score + STYLE_POINTS
}

#[derive(Debug, Clone, Default)]
pub struct PromptAdherence {
    rules: PromptRules,
}

impl PromptAdherence {
    pub fn new(rules: PromptRules) -> Self {
        Self { rules }
    }
}

impl MetricScorer for PromptAdherence {
    fn metric(&self) -> Metric {
        Metric::PromptAdherence
    }

    fn score(&self, input: &SummaryInput<'_>) -> Score {
        adherence_with_markers(
            input.summary,
            input.word_count,
            self.rules.min_words..=self.rules.max_words,
            self.rules.structure_markers.as_slice(),
        )
    }
}
