//! Fixed-order stage sequence: fetch → size → load/merge → save → writemd →
//! verbose → download.

use std::path::PathBuf;

use crate::config::CastbgConfig;
use crate::downloader::{self, DownloadReport};
use crate::entry::BackgroundEntry;
use crate::error::{Error, Result};
use crate::fetch;
use crate::merge;
use crate::observer::{Observer, Stage};
use crate::persist;
use crate::resize;

/// Which optional stages run. Every `None`/`false` stage is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub size: Option<String>,
    pub load: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub writemd: Option<PathBuf>,
    pub verbose: bool,
    pub download: Option<PathBuf>,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct PipelineSummary {
    pub entries: Vec<BackgroundEntry>,
    /// Set when a saved list was loaded and merged.
    pub new_count: Option<usize>,
    pub download: Option<DownloadReport>,
}

pub async fn run(
    opts: &PipelineOptions,
    cfg: &CastbgConfig,
    observer: &dyn Observer,
) -> Result<PipelineSummary> {
    observer.stage(Stage::Fetching { url: &cfg.home_url });
    let fetched = fetch::fetch_backgrounds(cfg).await?;
    process(fetched, opts, cfg, observer).await
}

/// Runs every stage after the fetch on an already fetched list.
pub async fn process(
    mut entries: Vec<BackgroundEntry>,
    opts: &PipelineOptions,
    cfg: &CastbgConfig,
    observer: &dyn Observer,
) -> Result<PipelineSummary> {
    if let Some(token) = &opts.size {
        observer.stage(Stage::Resizing { token });
        resize::apply_size(token, &mut entries);
    }

    let mut new_count = None;
    if let Some(path) = &opts.load {
        observer.stage(Stage::Loading { path });
        let saved = persist::load_json(path)?;
        let outcome = merge::merge(entries, saved);
        tracing::info!(
            total = outcome.entries.len(),
            new = outcome.new_count,
            "merged with saved backgrounds"
        );
        if outcome.new_count > 0 {
            observer.new_backgrounds(outcome.new_count);
        }
        entries = outcome.entries;
        new_count = Some(outcome.new_count);
    }

    if let Some(path) = &opts.save {
        observer.stage(Stage::SavingJson { path });
        persist::write_json(path, &entries)?;
    }

    if let Some(path) = &opts.writemd {
        observer.stage(Stage::WritingMarkdown { path });
        persist::write_markdown(path, &entries)?;
    }

    if opts.verbose {
        let json = persist::to_json_string(&entries).map_err(Error::Serialize)?;
        observer.entries_dump(&json);
    }

    let mut download = None;
    if let Some(dir) = &opts.download {
        observer.stage(Stage::Downloading { dir });
        let report = downloader::download_all(&entries, dir, cfg, observer).await?;
        if !report.is_success() {
            return Err(Error::Download {
                failed: report.failed.len(),
                total: report.total(),
            });
        }
        download = Some(report);
    }

    observer.done();
    Ok(PipelineSummary {
        entries,
        new_count,
        download,
    })
}
