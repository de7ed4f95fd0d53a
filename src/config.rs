use crate::error::{AnalyzerError, Result};
use crate::types::config::AnalyzerConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "analyzer.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".analyzer/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/summary-analyzer/config.toml";

#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: AnalyzerConfig,
    pub layers: Vec<PathBuf>,
    pub has_project_file: bool,
}

pub fn load_config(root: &Path) -> Result<LoadedConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_layers(root, global.as_deref())
}

pub(crate) fn load_layers(root: &Path, global_path: Option<&Path>) -> Result<LoadedConfig> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    let candidates = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([project_path.clone(), root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged = Table::new();
    let mut layers = Vec::new();
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        overlay(&mut merged, parse_layer(&path)?);
        tracing::debug!(path = %path.display(), "applied config layer");
        layers.push(path);
    }

    let has_project_file = layers.contains(&project_path);
    if !has_project_file {
        tracing::debug!(path = %project_path.display(), "no project config");
    }

    let config: AnalyzerConfig = Value::Table(merged).try_into()?;
    config.validate()?;
    Ok(LoadedConfig {
        config,
        layers,
        has_project_file,
    })
}

fn parse_layer(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path)?;
    text.parse::<Table>()
        .map_err(|e| AnalyzerError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn overlay(base: &mut Table, top: Table) {
    for (key, value) in top {
        match value {
            Value::Table(upper) => match base.get_mut(&key) {
                Some(Value::Table(lower)) => overlay(lower, upper),
                _ => {
                    base.insert(key, Value::Table(upper));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
