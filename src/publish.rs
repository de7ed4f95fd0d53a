use crate::error::{AnalyzerError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CopyOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
    pub sha256: String,
}

pub fn copy_report(source: &Path, destination: &Path) -> Result<CopyOutcome> {
    if !source.is_file() {
        return Err(AnalyzerError::ReportNotFound(source.display().to_string()));
    }
    if destination.exists() && fs::canonicalize(source)? == fs::canonicalize(destination)? {
        return Err(AnalyzerError::SameFile(destination.display().to_string()));
    }
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let expected = sha256_hex(&fs::read(source)?);
    let bytes = fs::copy(source, destination)?;
    let actual = sha256_hex(&fs::read(destination)?);
    if expected != actual {
        return Err(AnalyzerError::CopyMismatch(destination.display().to_string()));
    }

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "report copied"
    );
    Ok(CopyOutcome {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        bytes,
        sha256: actual,
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
}

impl ReportStats {
    /// `\r\n` and lone `\r` count as a single newline character.
    pub fn from_text(text: &str) -> Self {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let breaks = text.chars().filter(|&c| is_line_break(c)).count();
        let unterminated = text.chars().last().is_some_and(|c| !is_line_break(c));
        Self {
            lines: breaks + usize::from(unterminated),
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AnalyzerError::ReportNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
