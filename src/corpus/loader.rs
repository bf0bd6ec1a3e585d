use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::Document;

/// Load cleaned documents from a CSV (`id,role,feature,benefit`), JSON Lines
/// (`.jsonl`) or JSON array file, chosen by extension
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read documents from {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let documents = match extension.as_str() {
        "csv" => parse_csv(&content)
            .with_context(|| format!("Failed to parse CSV documents in {}", path.display()))?,
        "jsonl" => parse_json_lines(&content)?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON documents in {}", path.display()))?,
    };

    tracing::info!(
        "Loaded {} documents from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

/// Parse one document per non-blank line
pub fn parse_json_lines(content: &str) -> Result<Vec<Document>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid document on line {}", n + 1))
        })
        .collect()
}

/// Parse a headed CSV table. Columns other than `id,role,feature,benefit` are ignored
/// and rows may carry trailing cells past the header.
pub fn parse_csv(content: &str) -> Result<Vec<Document>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    reader
        .deserialize()
        .enumerate()
        .map(|(n, record)| record.with_context(|| format!("Invalid document in CSV row {}", n + 1)))
        .collect()
}
