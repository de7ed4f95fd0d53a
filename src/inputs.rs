use crate::error::{AnalyzerError, Result};
use crate::types::config::{AnalyzerConfig, ExtractionMarkers};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SUMMARY_EXTENSIONS: [&str; 3] = ["md", "txt", "json"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSummary {
    pub model: String,
    pub path: PathBuf,
    pub summary: String,
}

pub fn load_summaries(root: &Path, config: &AnalyzerConfig) -> Result<Vec<LoadedSummary>> {
    let markers = config.extraction_markers();
    let sources = if config.models.is_empty() {
        discover(&root.join(config.input_dir()))
    } else {
        config
            .models
            .iter()
            .map(|entry| (entry.name.clone(), root.join(&entry.path)))
            .collect()
    };

    let mut loaded = Vec::with_capacity(sources.len());
    for (model, path) in sources {
        if !path.exists() {
            tracing::warn!(model = %model, path = %path.display(), "summary file missing; skipping");
            continue;
        }
        let summary = load_summary_file(&path, &markers)?;
        tracing::info!(model = %model, path = %path.display(), "loaded summary");
        loaded.push(LoadedSummary {
            model,
            path,
            summary,
        });
    }

    if loaded.is_empty() {
        return Err(AnalyzerError::NoInputs(root.display().to_string()));
    }
    Ok(loaded)
}

fn discover(dir: &Path) -> Vec<(String, PathBuf)> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SUMMARY_EXTENSIONS.contains(&ext))
        })
        .collect();
    files.sort();

    files
        .into_iter()
        .filter_map(|path| {
            let model = path.file_stem()?.to_string_lossy().into_owned();
            Some((model, path))
        })
        .collect()
}

pub fn load_summary_file(path: &Path, markers: &ExtractionMarkers) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        summary_from_json(&content)
            .map_err(|e| AnalyzerError::InvalidInput(format!("{}: {}", path.display(), e)))
    } else {
        Ok(extract_summary(&content, markers))
    }
}

fn summary_from_json(content: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let object = value
        .as_object()
        .ok_or_else(|| AnalyzerError::InvalidInput("expected a JSON object".to_string()))?;
    Ok(object
        .get("summary")
        .and_then(|summary| summary.as_str())
        .unwrap_or_default()
        .to_string())
}

pub fn extract_summary(content: &str, markers: &ExtractionMarkers) -> String {
    match content.split_once(markers.summary.as_str()) {
        Some((_, after)) => {
            let section = before(after, &markers.summary);
            before(section, &markers.end).trim().to_string()
        }
        None => content.to_string(),
    }
}

fn before<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.split_once(marker) {
        Some((head, _)) => head,
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extract_summary_cuts_between_markers() {
        let content = "# Run\n\n**Summary:**\n 1. Point one.\n\n**Statistics:**\nwords: 3\n";
        let summary = extract_summary(content, &ExtractionMarkers::default());
        assert_eq!(summary, "1. Point one.");
    }

    #[test]
    fn extract_summary_stops_at_a_repeated_summary_marker() {
        let content = "**Summary:**\nfirst pass\n**Summary:**\nsecond pass\n**Statistics:**\n";
        assert_eq!(
            extract_summary(content, &ExtractionMarkers::default()),
            "first pass"
        );
    }

    #[test]
    fn extract_summary_without_end_marker_takes_the_rest() {
        let content = "**Summary:** tail text  ";
        assert_eq!(extract_summary(content, &ExtractionMarkers::default()), "tail text");
    }

    #[test]
    fn extract_summary_without_marker_returns_content_verbatim() {
        let content = " raw summary \n";
        assert_eq!(extract_summary(content, &ExtractionMarkers::default()), content);
    }

    #[test]
    fn json_summary_field_is_used_and_missing_field_is_empty() {
        assert_eq!(
            summary_from_json(r#"{"summary": "from json", "model": "x"}"#).expect("valid json"),
            "from json"
        );
        assert_eq!(summary_from_json(r#"{"other": 1}"#).expect("valid json"), "");
        assert!(summary_from_json("[1, 2]").is_err());
    }

    #[test]
    fn discovers_supported_files_sorted_by_path() {
        let root = TempDir::new().expect("temp dir should be created");
        let results = root.path().join("results");
        fs::create_dir_all(&results).expect("results dir should create");
        fs::write(results.join("zeta.md"), "**Summary:** z").expect("md should write");
        fs::write(results.join("alpha.json"), r#"{"summary": "a"}"#).expect("json should write");
        fs::write(results.join("notes.csv"), "ignored").expect("csv should write");

        let loaded = load_summaries(root.path(), &AnalyzerConfig::default())
            .expect("summaries should load");
        let models: Vec<&str> = loaded.iter().map(|l| l.model.as_str()).collect();
        assert_eq!(models, ["alpha", "zeta"]);
        assert_eq!(loaded[0].summary, "a");
        assert_eq!(loaded[1].summary, "z");
    }

    #[test]
    fn configured_models_skip_missing_files() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(root.path().join("claude.md"), "plain summary").expect("md should write");
        let config: AnalyzerConfig = toml::from_str(
            r#"
[[models]]
name = "Claude 3.5 Sonnet"
path = "claude.md"

[[models]]
name = "Missing"
path = "missing.md"
"#,
        )
        .expect("config should parse");

        let loaded = load_summaries(root.path(), &config).expect("summaries should load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].model, "Claude 3.5 Sonnet");
        assert_eq!(loaded[0].summary, "plain summary");
    }

    #[test]
    fn empty_input_directory_is_an_error() {
        let root = TempDir::new().expect("temp dir should be created");
        let err = load_summaries(root.path(), &AnalyzerConfig::default())
            .expect_err("no inputs should fail");
        assert!(matches!(err, AnalyzerError::NoInputs(_)));
    }

    #[test]
    fn malformed_json_reports_the_file() {
        let root = TempDir::new().expect("temp dir should be created");
        let path = root.path().join("broken.json");
        fs::write(&path, "{not json").expect("json should write");
        let err = load_summary_file(&path, &ExtractionMarkers::default())
            .expect_err("malformed json should fail");
        assert!(err.to_string().contains("broken.json"));
    }
}
