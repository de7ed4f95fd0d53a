use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config schema error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("no summary files found in {0}")]
    NoInputs(String),

    #[error("invalid summary input: {0}")]
    InvalidInput(String),

    #[error("report not found: {0}")]
    ReportNotFound(String),

    #[error("report source and destination are the same file: {0}")]
    SameFile(String),

    #[error("copied report does not match source: {0}")]
    CopyMismatch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
