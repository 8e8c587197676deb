//! CLI for castbg.

mod console;

use anyhow::{Context, Result};
use castbg_core::config;
use castbg_core::pipeline::{self, PipelineOptions};
use castbg_core::resize;
use clap::Parser;
use std::path::PathBuf;

use console::{ColorChoice, Console};

/// Fetch Chromecast home backgrounds; optionally merge, save, and download them.
#[derive(Debug, Parser)]
#[command(name = "castbg", version)]
#[command(about = "Fetch, save and download Chromecast backgrounds", long_about = None)]
pub struct Cli {
    /// Rewrite the size segment of every fetched URL (e.g. s1920).
    #[arg(long, value_name = "SIZE", value_parser = parse_size_token)]
    pub size: Option<String>,

    /// Merge with backgrounds previously saved to this JSON file.
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Write the backgrounds as JSON to this file.
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Write the backgrounds as inline Markdown images to this file.
    #[arg(long, value_name = "FILE")]
    pub writemd: Option<PathBuf>,

    /// Download every image into this directory (created if missing).
    #[arg(long, value_name = "DIR")]
    pub download: Option<PathBuf>,

    /// Print the final background list as JSON.
    #[arg(short, long)]
    pub verbose: bool,

    /// Use this config file instead of ~/.config/castbg/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fetch from this URL instead of the configured home page.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Style progress output: auto (terminal only), always, or never.
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

fn parse_size_token(s: &str) -> Result<String, String> {
    if resize::is_valid_size_token(s) {
        Ok(s.to_string())
    } else {
        Err(format!("expected a single path segment like s1920, got {s:?}"))
    }
}

impl Cli {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            size: self.size.clone(),
            load: self.load.clone(),
            save: self.save.clone(),
            writemd: self.writemd.clone(),
            verbose: self.verbose,
            download: self.download.clone(),
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_or_init_at(path),
            None => config::load_or_init(),
        }
        .context("loading config")?;
        if let Some(url) = &cli.url {
            cfg.home_url = url.clone();
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let opts = cli.pipeline_options();
        let console = Console::new(cli.color.enabled());
        let summary = pipeline::run(&opts, &cfg, &console).await?;
        tracing::info!(entries = summary.entries.len(), "run completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
