use super::{MetricScorer, SummaryInput};
use crate::types::scoring::{Metric, Score};

pub fn compression_ratio(source_words: usize, summary_words: usize) -> Score {
    if summary_words == 0 {
        return 0.0;
    }
    source_words as f64 / summary_words as f64
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompressionRatio;

impl MetricScorer for CompressionRatio {
    fn metric(&self) -> Metric {
        Metric::Compression
    }

    fn score(&self, input: &SummaryInput<'_>) -> Score {
        compression_ratio(input.source.word_count, input.word_count)
    }
}
