//! Concurrent image downloader.
//!
//! Every entry gets its own blocking curl transfer on a `JoinSet`; all
//! transfers start at once and the call returns after the last one finishes.
//! A failed entry never cancels the others.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CastbgConfig;
use crate::entry::BackgroundEntry;
use crate::error::{Error, Result};
use crate::http::{self, HttpOptions};
use crate::observer::Observer;
use crate::url_model;

/// Outcome of [`download_all`].
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Files written, in completion order.
    pub completed: Vec<PathBuf>,
    /// File names that an earlier entry already claimed.
    pub skipped: Vec<String>,
    /// File name and error for each failed entry.
    pub failed: Vec<(String, Error)>,
}

impl DownloadReport {
    pub fn total(&self) -> usize {
        self.completed.len() + self.skipped.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Creates `dir` if it does not exist. The parent must already exist.
fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => {
            tracing::debug!(dir = %dir.display(), "created download directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(Error::io(dir, e)),
    }
}

/// Downloads every entry into `dir`, naming each file by its decoded URL key.
///
/// Returns `Err` only for setup failures (directory creation) or a panicked
/// worker; per-entry failures are collected in the report.
pub async fn download_all(
    entries: &[BackgroundEntry],
    dir: &Path,
    cfg: &CastbgConfig,
    observer: &dyn Observer,
) -> Result<DownloadReport> {
    ensure_dir(dir)?;
    let opts = HttpOptions::from(cfg);
    let mut report = DownloadReport::default();
    let mut claimed: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut join_set = tokio::task::JoinSet::new();

    for entry in entries {
        let name = url_model::download_file_name(&entry.url);
        if !claimed.insert(name.clone()) {
            tracing::warn!(url = %entry.url, "skipping download: {} already claimed", name);
            report.skipped.push(name);
            continue;
        }
        let url = entry.url.clone();
        let dest = dir.join(&name);
        let opts = opts.clone();
        join_set.spawn_blocking(move || {
            let result = http::get_to_file(&url, &dest, &opts);
            (name, dest, result)
        });
    }
    tracing::info!(count = join_set.len(), dir = %dir.display(), "downloads started");

    while let Some(joined) = join_set.join_next().await {
        let (name, dest, result) = joined?;
        match result {
            Ok(bytes) => {
                tracing::debug!(path = %dest.display(), bytes, "downloaded");
                observer.downloaded(&dest);
                report.completed.push(dest);
            }
            Err(e) => {
                tracing::warn!(path = %dest.display(), "download failed: {}", e);
                if fs::remove_file(&dest).is_ok() {
                    tracing::debug!(path = %dest.display(), "removed incomplete file");
                }
                observer.download_failed(&name, &e);
                report.failed.push((name, e));
            }
        }
    }

    tracing::info!(
        completed = report.completed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "downloads finished"
    );
    Ok(report)
}
