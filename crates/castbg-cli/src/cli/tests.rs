//! CLI parse tests.

use super::{Cli, ColorChoice};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_flags() {
    let cli = parse(&["castbg"]);
    assert!(cli.size.is_none());
    assert!(cli.load.is_none());
    assert!(cli.save.is_none());
    assert!(cli.writemd.is_none());
    assert!(cli.download.is_none());
    assert!(!cli.verbose);
    assert_eq!(cli.pipeline_options(), Default::default());
}

#[test]
fn cli_parse_equals_form() {
    let cli = parse(&[
        "castbg",
        "--size=s1920",
        "--load=old.json",
        "--save=new.json",
        "--writemd=README.md",
        "--download=images",
    ]);
    assert_eq!(cli.size.as_deref(), Some("s1920"));
    assert_eq!(cli.load.as_deref(), Some(Path::new("old.json")));
    assert_eq!(cli.save.as_deref(), Some(Path::new("new.json")));
    assert_eq!(cli.writemd.as_deref(), Some(Path::new("README.md")));
    assert_eq!(cli.download.as_deref(), Some(Path::new("images")));

    let opts = cli.pipeline_options();
    assert_eq!(opts.size.as_deref(), Some("s1920"));
    assert_eq!(opts.download.as_deref(), Some(Path::new("images")));
}

#[test]
fn cli_parse_space_form_and_verbose() {
    let cli = parse(&["castbg", "--size", "s400", "-v"]);
    assert_eq!(cli.size.as_deref(), Some("s400"));
    assert!(cli.verbose);
    let cli = parse(&["castbg", "--verbose"]);
    assert!(cli.verbose);
}

#[test]
fn cli_parse_config_and_url() {
    let cli = parse(&["castbg", "--config", "/tmp/c.toml", "--url", "http://localhost/home"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/c.toml")));
    assert_eq!(cli.url.as_deref(), Some("http://localhost/home"));
}

#[test]
fn cli_rejects_bad_size_token() {
    assert!(Cli::try_parse_from(["castbg", "--size="]).is_err());
    assert!(Cli::try_parse_from(["castbg", "--size=s1/2"]).is_err());
}

#[test]
fn cli_accepts_any_single_segment_size() {
    for token in ["s1920", "w1920", "w1920-h1080", "S1920"] {
        let arg = format!("--size={token}");
        let cli = parse(&["castbg", &arg]);
        assert_eq!(cli.size.as_deref(), Some(token));
    }
}

#[test]
fn cli_help_flags() {
    let err = Cli::try_parse_from(["castbg", "-h"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    let err = Cli::try_parse_from(["castbg", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn cli_rejects_positional_args() {
    assert!(Cli::try_parse_from(["castbg", "extra"]).is_err());
}

#[test]
fn cli_parse_color_choice() {
    assert_eq!(parse(&["castbg"]).color, ColorChoice::Auto);
    assert_eq!(parse(&["castbg", "--color=never"]).color, ColorChoice::Never);
    assert_eq!(parse(&["castbg", "--color", "always"]).color, ColorChoice::Always);
    assert!(Cli::try_parse_from(["castbg", "--color=sometimes"]).is_err());
}
