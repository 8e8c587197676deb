//! JSON and Markdown output of background lists.
//!
//! Writes overwrite the destination unconditionally and are not atomic.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::entry::BackgroundEntry;
use crate::error::{Error, Result};

/// Renders entries as a JSON array with 4-space indentation.
pub fn to_json_string(entries: &[BackgroundEntry]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_json(path: &Path, entries: &[BackgroundEntry]) -> Result<()> {
    let json = to_json_string(entries).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "wrote JSON");
    Ok(())
}

/// Reads a JSON array of entries, each object having at least `url`.
pub fn load_json(path: &Path) -> Result<Vec<BackgroundEntry>> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let entries: Vec<BackgroundEntry> =
        serde_json::from_str(&data).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded JSON");
    Ok(entries)
}

/// One `![](url)` line per entry, each newline-terminated.
pub fn render_markdown(entries: &[BackgroundEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("![]({})\n", e.url))
        .collect()
}

pub fn write_markdown(path: &Path, entries: &[BackgroundEntry]) -> Result<()> {
    fs::write(path, render_markdown(entries)).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "wrote Markdown");
    Ok(())
}
