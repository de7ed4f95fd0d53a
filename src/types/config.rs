use crate::error::AnalyzerError;
use crate::types::scoring::{Metric, MetricWeights, References, SourceStats};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

pub const DEFAULT_MIN_WORDS: usize = 100;
pub const DEFAULT_MAX_WORDS: usize = 150;
pub const DEFAULT_STRUCTURE_MARKERS: [&str; 3] = ["1.", "2.", "3."];
pub const DEFAULT_INPUT_DIR: &str = "results";
pub const DEFAULT_SUMMARY_MARKER: &str = "**Summary:**";
pub const DEFAULT_END_MARKER: &str = "**Statistics:**";
pub const DEFAULT_REPORT_OUTPUT: &str = "analysis_report.md";
pub const DEFAULT_BASE_REPORT: &str = "reports/FINAL_STRUCTURED_REPORT.md";
pub const DEFAULT_GENERATED_REPORT: &str = "reports/FINAL_STRUCTURED_REPORT_GENERATED.md";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzerConfig {
    pub project: Option<ProjectConfig>,
    pub source: Option<SourceConfig>,
    pub prompt: Option<PromptConfig>,
    pub metrics: Option<MetricsConfig>,
    pub inputs: Option<InputsConfig>,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub word_count: Option<usize>,
    pub key_elements: Option<Vec<String>>,
    #[serde(default)]
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    pub structure_markers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaithfulnessMode {
    #[default]
    Assumed,
    Facts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub weights: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub faithfulness: FaithfulnessMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputsConfig {
    pub dir: Option<PathBuf>,
    pub summary_marker: Option<String>,
    pub end_marker: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub output: Option<PathBuf>,
    pub base: Option<PathBuf>,
    pub generated: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRules {
    pub min_words: usize,
    pub max_words: usize,
    pub structure_markers: Vec<String>,
}

impl Default for PromptRules {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            structure_markers: DEFAULT_STRUCTURE_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMarkers {
    pub summary: String,
    pub end: String,
}

impl Default for ExtractionMarkers {
    fn default() -> Self {
        Self {
            summary: DEFAULT_SUMMARY_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn weights(&self) -> MetricWeights {
        match self.metrics.as_ref().and_then(|m| m.weights.as_ref()) {
            Some(weights) => MetricWeights::from_overrides(weights),
            None => MetricWeights::default(),
        }
    }

    pub fn faithfulness_mode(&self) -> FaithfulnessMode {
        self.metrics
            .as_ref()
            .map(|metrics| metrics.faithfulness)
            .unwrap_or_default()
    }

    pub fn source_stats(&self) -> SourceStats {
        self.source
            .as_ref()
            .and_then(|source| source.word_count)
            .map(SourceStats::new)
            .unwrap_or_default()
    }

    pub fn references(&self) -> References {
        let defaults = References::default();
        match &self.source {
            Some(source) => References {
                key_elements: source
                    .key_elements
                    .clone()
                    .unwrap_or(defaults.key_elements),
                source_facts: source.facts.clone(),
            },
            None => defaults,
        }
    }

    pub fn prompt_rules(&self) -> PromptRules {
        let defaults = PromptRules::default();
        match &self.prompt {
            Some(prompt) => PromptRules {
                min_words: prompt.min_words.unwrap_or(defaults.min_words),
                max_words: prompt.max_words.unwrap_or(defaults.max_words),
                structure_markers: prompt
                    .structure_markers
                    .clone()
                    .unwrap_or(defaults.structure_markers),
            },
            None => defaults,
        }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.inputs
            .as_ref()
            .and_then(|inputs| inputs.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
    }

    pub fn extraction_markers(&self) -> ExtractionMarkers {
        let defaults = ExtractionMarkers::default();
        match &self.inputs {
            Some(inputs) => ExtractionMarkers {
                summary: inputs.summary_marker.clone().unwrap_or(defaults.summary),
                end: inputs.end_marker.clone().unwrap_or(defaults.end),
            },
            None => defaults,
        }
    }

    pub fn report_output(&self) -> PathBuf {
        self.report
            .as_ref()
            .and_then(|report| report.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_OUTPUT))
    }

    pub fn base_report(&self) -> PathBuf {
        self.report
            .as_ref()
            .and_then(|report| report.base.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_REPORT))
    }

    pub fn generated_report(&self) -> PathBuf {
        self.report
            .as_ref()
            .and_then(|report| report.generated.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GENERATED_REPORT))
    }

    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if let Some(weights) = self.metrics.as_ref().and_then(|m| m.weights.as_ref()) {
            let mut unknown = weights
                .keys()
                .filter(|key| Metric::from_key(key).is_none())
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(AnalyzerError::ConfigParse(format!(
                    "metrics.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if let Some((metric, _)) = weights
            .iter()
            .find(|(_, weight)| !(0.0..=1.0).contains(weight))
        {
            return Err(AnalyzerError::ConfigParse(format!(
                "metrics.weights.{metric} must be between 0.0 and 1.0"
            )));
        }

        let rules = self.prompt_rules();
        if rules.min_words > rules.max_words {
            return Err(AnalyzerError::ConfigParse(format!(
                "prompt.min_words ({}) cannot exceed prompt.max_words ({})",
                rules.min_words, rules.max_words
            )));
        }

        let mut names = HashSet::new();
        for entry in &self.models {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(AnalyzerError::ConfigParse(
                    "models entries must have a non-empty name".to_string(),
                ));
            }
            if !names.insert(name) {
                return Err(AnalyzerError::ConfigParse(format!(
                    "models contains duplicate name: {name}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AnalyzerConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.weights(), MetricWeights::DEFAULT);
        assert_eq!(cfg.source_stats().word_count, 4200);
        assert_eq!(cfg.prompt_rules(), PromptRules::default());
        assert_eq!(cfg.faithfulness_mode(), FaithfulnessMode::Assumed);
        assert_eq!(cfg.references().key_elements.len(), 14);
        assert_eq!(cfg.input_dir(), PathBuf::from("results"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[project]
name = "article-summaries"

[source]
word_count = 3000
key_elements = ["rust", "tokio"]
facts = ["released in 2015"]

[prompt]
min_words = 50
max_words = 80
structure_markers = ["-"]

[metrics]
faithfulness = "facts"
weights = { coverage = 0.5, compression = 0.0 }

[inputs]
dir = "out"
summary_marker = "=== Summary"

[[models]]
name = "alpha"
path = "out/alpha.md"

[report]
output = "report.md"
"#;

        let cfg: AnalyzerConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.project.as_ref().map(|p| p.name.as_str()), Some("article-summaries"));
        assert_eq!(cfg.source_stats().word_count, 3000);
        assert_eq!(cfg.references().key_elements, ["rust", "tokio"]);
        assert_eq!(cfg.references().source_facts, ["released in 2015"]);
        assert_eq!(cfg.prompt_rules().min_words, 50);
        assert_eq!(cfg.prompt_rules().structure_markers, ["-"]);
        assert_eq!(cfg.faithfulness_mode(), FaithfulnessMode::Facts);
        assert_eq!(cfg.weights().get(Metric::Coverage), 0.5);
        assert_eq!(cfg.weights().get(Metric::Faithfulness), 0.30);
        assert_eq!(cfg.extraction_markers().summary, "=== Summary");
        assert_eq!(cfg.extraction_markers().end, DEFAULT_END_MARKER);
        assert_eq!(cfg.models.len(), 1);
        assert_eq!(cfg.report_output(), PathBuf::from("report.md"));
        assert_eq!(cfg.base_report(), PathBuf::from(DEFAULT_BASE_REPORT));
    }

    #[test]
    fn validate_rejects_unknown_weight_key() {
        let cfg: AnalyzerConfig = toml::from_str(
            r#"
[metrics]
weights = { fluency = 0.2 }
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("unknown key should fail");
        assert!(err.to_string().contains("fluency"));
    }

    #[test]
    fn validate_rejects_out_of_range_weight() {
        let cfg: AnalyzerConfig = toml::from_str(
            r#"
[metrics]
weights = { coherence = 1.5 }
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("weight above 1.0 should fail");
        assert!(err.to_string().contains("coherence"));
    }

    #[test]
    fn validate_allows_weights_not_summing_to_one() {
        let cfg: AnalyzerConfig = toml::from_str(
            r#"
[metrics]
weights = { faithfulness = 1.0, coverage = 1.0 }
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_word_range() {
        let cfg: AnalyzerConfig = toml::from_str(
            r#"
[prompt]
min_words = 200
max_words = 100
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(AnalyzerError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_duplicate_model_names() {
        let cfg: AnalyzerConfig = toml::from_str(
            r#"
[[models]]
name = "alpha"
path = "a.md"

[[models]]
name = "alpha"
path = "b.md"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("duplicate names should fail");
        assert!(err.to_string().contains("duplicate name: alpha"));
    }
}
