//! Console progress output.

use castbg_core::observer::{Observer, Stage};
use castbg_core::Error;
use clap::ValueEnum;
use crossterm::style::Stylize;
use std::io::IsTerminal;
use std::path::Path;

/// When to style console output with ANSI escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Style only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Heading,
    Good,
    Muted,
    Bad,
}

/// Prints pipeline progress to stdout, failures to stderr.
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, tone: Tone, text: String) -> String {
        if !self.color {
            return text;
        }
        match tone {
            Tone::Heading => text.underlined().to_string(),
            Tone::Good => text.green().to_string(),
            Tone::Muted => text.grey().to_string(),
            Tone::Bad => text.red().to_string(),
        }
    }

    fn stage_line(&self, stage: &Stage<'_>) -> String {
        let (text, blank_after) = match stage {
            Stage::Fetching { .. } => ("Parsing Chromecast Home...".to_string(), true),
            Stage::Resizing { token } => (format!("Updating sizes to {token}"), false),
            Stage::Loading { path } => (
                format!("Loading previous backgrounds from {}", path.display()),
                false,
            ),
            Stage::SavingJson { path } => (
                format!("Writing backgrounds JSON to {}", path.display()),
                false,
            ),
            Stage::WritingMarkdown { path } => (
                format!("Writing backgrounds as inline markdown to {}", path.display()),
                false,
            ),
            Stage::Downloading { .. } => ("Downloading background images...".to_string(), true),
        };
        let mut line = self.paint(Tone::Heading, text);
        if blank_after {
            line.push('\n');
        }
        line
    }
}

impl Observer for Console {
    fn stage(&self, stage: Stage<'_>) {
        println!("{}", self.stage_line(&stage));
    }

    fn new_backgrounds(&self, count: usize) {
        println!("{}", self.paint(Tone::Good, format!("{count} new backgrounds!")));
    }

    fn entries_dump(&self, json: &str) {
        println!("{}", self.paint(Tone::Muted, json.to_string()));
    }

    fn downloaded(&self, path: &Path) {
        println!("{}", self.paint(Tone::Muted, path.display().to_string()));
    }

    fn download_failed(&self, name: &str, error: &Error) {
        eprintln!("{}", self.paint(Tone::Bad, format!("failed: {name}: {error}")));
    }

    fn done(&self) {
        println!("\n{}", self.paint(Tone::Good, "\u{2713} Done!".to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_console_has_no_escapes() {
        let console = Console::new(false);
        let line = console.stage_line(&Stage::Resizing { token: "s1920" });
        assert_eq!(line, "Updating sizes to s1920");
        assert_eq!(
            console.stage_line(&Stage::Downloading { dir: Path::new("imgs") }),
            "Downloading background images...\n"
        );
        assert!(!console
            .paint(Tone::Good, "3 new backgrounds!".into())
            .contains('\u{1b}'));
    }

    #[test]
    fn colored_console_underlines_stages() {
        let console = Console::new(true);
        let line = console.stage_line(&Stage::Loading { path: Path::new("old.json") });
        assert!(line.contains('\u{1b}'), "{line:?}");
        assert!(line.contains("Loading previous backgrounds from old.json"));
    }

    #[test]
    fn explicit_choices_ignore_terminal() {
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Never.enabled());
    }
}
