use std::{fs, path::Path};

use anyhow::Context;
use shared::domain::Thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    Json,
    Toml,
}

impl TranscriptFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => TranscriptFormat::Toml,
            _ => TranscriptFormat::Json,
        }
    }
}

pub fn parse_thread(raw: &str, format: TranscriptFormat) -> anyhow::Result<Thread> {
    let thread: Thread = match format {
        TranscriptFormat::Json => serde_json::from_str(raw).context("malformed JSON transcript")?,
        TranscriptFormat::Toml => toml::from_str(raw).context("malformed TOML transcript")?,
    };
    thread.validate().context("transcript failed validation")?;
    Ok(thread)
}

pub fn load_thread(path: &Path) -> anyhow::Result<Thread> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript '{}'", path.display()))?;
    parse_thread(&raw, TranscriptFormat::from_path(path))
        .with_context(|| format!("failed to load transcript '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/transcript_tests.rs"]
mod tests;
