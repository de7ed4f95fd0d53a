use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Faithfulness,
    Coverage,
    PromptAdherence,
    Coherence,
    Compression,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Faithfulness,
        Metric::Coverage,
        Metric::PromptAdherence,
        Metric::Coherence,
        Metric::Compression,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Faithfulness => "faithfulness",
            Self::Coverage => "coverage",
            Self::PromptAdherence => "prompt_adherence",
            Self::Coherence => "coherence",
            Self::Compression => "compression",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.as_str() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights need not sum to 1.0. `compression` is unbounded; the rest are 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricWeights([f64; 5]);

impl MetricWeights {
    pub const DEFAULT: MetricWeights = MetricWeights([0.30, 0.25, 0.20, 0.15, 0.10]);

    pub fn new(
        faithfulness: f64,
        coverage: f64,
        prompt_adherence: f64,
        coherence: f64,
        compression: f64,
    ) -> Self {
        Self([
            faithfulness,
            coverage,
            prompt_adherence,
            coherence,
            compression,
        ])
    }

    pub fn from_overrides(overrides: &HashMap<String, f64>) -> Self {
        let mut weights = Self::DEFAULT.0;
        for metric in Metric::ALL {
            if let Some(weight) = overrides.get(metric.as_str()) {
                weights[metric.index()] = *weight;
            }
        }
        Self(weights)
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.0[metric.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(|metric| (metric, self.get(metric)))
    }
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    pub word_count: usize,
}

impl SourceStats {
    pub const DEFAULT_WORD_COUNT: usize = 4200;

    pub fn new(word_count: usize) -> Self {
        Self { word_count }
    }
}

impl Default for SourceStats {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORD_COUNT)
    }
}

pub const DEFAULT_KEY_ELEMENTS: [&str; 14] = [
    "1,75 трлн $",
    "36%",
    "40%",
    "o3-mini",
    "DeepSeek R1",
    "Qwen 2.5 Max",
    "Grok",
    "YandexGPT",
    "GigaChat",
    "Cotype",
    "Humanities Last Exam",
    "13%",
    "128K",
    "1M токенов",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References {
    pub key_elements: Vec<String>,
    pub source_facts: Vec<String>,
}

impl Default for References {
    fn default() -> Self {
        Self {
            key_elements: DEFAULT_KEY_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            source_facts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub model: String,
    pub word_count: usize,
    pub metrics: BTreeMap<Metric, Score>,
    pub total_score: Score,
}

impl ScoreRecord {
    pub fn metric(&self, metric: Metric) -> Score {
        self.metrics.get(&metric).copied().unwrap_or(0.0)
    }
}

/// Exact halves round to the even neighbour: `57.125` becomes `57.12`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn weighted_total(metrics: &BTreeMap<Metric, Score>, weights: &MetricWeights) -> Score {
    let sum: f64 = weights
        .iter()
        .map(|(metric, weight)| metrics.get(&metric).copied().unwrap_or(0.0) * weight)
        .sum();
    round2(sum)
}
