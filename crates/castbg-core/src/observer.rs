//! Progress reporting hooks for the pipeline.
//!
//! The library never prints; callers pass an [`Observer`] and decide how to
//! present progress. All methods default to doing nothing.

use std::path::Path;

use crate::error::Error;

/// Pipeline stage about to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    Fetching { url: &'a str },
    Resizing { token: &'a str },
    Loading { path: &'a Path },
    SavingJson { path: &'a Path },
    WritingMarkdown { path: &'a Path },
    Downloading { dir: &'a Path },
}

pub trait Observer: Send + Sync {
    fn stage(&self, _stage: Stage<'_>) {}

    /// Merge found `count` (> 0) backgrounds that were not in the loaded file.
    fn new_backgrounds(&self, _count: usize) {}

    /// Pretty JSON of the final list (verbose mode).
    fn entries_dump(&self, _json: &str) {}

    fn downloaded(&self, _path: &Path) {}

    fn download_failed(&self, _name: &str, _error: &Error) {}

    fn done(&self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Observer for Silent {}
