pub mod adherence;
pub mod coherence;
pub mod compression;
pub mod coverage;

use crate::inputs::LoadedSummary;
use crate::types::config::{AnalyzerConfig, FaithfulnessMode, PromptRules};
use crate::types::scoring::{
    weighted_total, Metric, MetricWeights, References, Score, ScoreRecord, SourceStats,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    pub summary: &'a str,
    pub word_count: usize,
    pub source: &'a SourceStats,
    pub references: &'a References,
}

/// One metric's scoring strategy. Implementations must be pure.
pub trait MetricScorer: Send + Sync {
    fn metric(&self) -> Metric;
    fn score(&self, input: &SummaryInput<'_>) -> Score;
}

pub struct Analyzer {
    weights: MetricWeights,
    references: References,
    scorers: BTreeMap<Metric, Box<dyn MetricScorer>>,
}

impl Analyzer {
    pub fn new(weights: MetricWeights, references: References, rules: PromptRules) -> Self {
        let defaults: [Box<dyn MetricScorer>; 5] = [
            Box::new(coverage::AssumedFaithfulness),
            Box::new(coverage::KeywordCoverage),
            Box::new(adherence::PromptAdherence::new(rules)),
            Box::new(coherence::SentenceCoherence),
            Box::new(compression::CompressionRatio),
        ];
        let scorers = defaults
            .into_iter()
            .map(|scorer| (scorer.metric(), scorer))
            .collect();
        Self {
            weights,
            references,
            scorers,
        }
    }

    pub fn from_config(cfg: &AnalyzerConfig) -> Self {
        let analyzer = Self::new(cfg.weights(), cfg.references(), cfg.prompt_rules());
        match cfg.faithfulness_mode() {
            FaithfulnessMode::Assumed => analyzer,
            FaithfulnessMode::Facts => analyzer.with_scorer(coverage::FactFaithfulness),
        }
    }

    pub fn with_scorer<S: MetricScorer + 'static>(mut self, scorer: S) -> Self {
        self.scorers.insert(scorer.metric(), Box::new(scorer));
        self
    }

    pub fn weights(&self) -> &MetricWeights {
        &self.weights
    }

    pub fn analyze_model(
        &self,
        model_name: &str,
        summary: &str,
        source: &SourceStats,
    ) -> ScoreRecord {
        let word_count = word_count(summary);
        let input = SummaryInput {
            summary,
            word_count,
            source,
            references: &self.references,
        };

        let metrics: BTreeMap<Metric, Score> = self
            .scorers
            .iter()
            .map(|(metric, scorer)| (*metric, scorer.score(&input)))
            .collect();
        let total_score = weighted_total(&metrics, &self.weights);

        tracing::debug!(
            model = model_name,
            word_count,
            total_score,
            "scored summary"
        );

        ScoreRecord {
            model: model_name.to_string(),
            word_count,
            metrics,
            total_score,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(
            MetricWeights::default(),
            References::default(),
            PromptRules::default(),
        )
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn analyze(
    analyzer: &Analyzer,
    summaries: &[LoadedSummary],
    source: &SourceStats,
) -> Vec<ScoreRecord> {
    summaries
        .iter()
        .map(|loaded| analyzer.analyze_model(&loaded.model, &loaded.summary, source))
        .collect()
}
