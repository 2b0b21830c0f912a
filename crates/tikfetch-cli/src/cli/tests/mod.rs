//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch() {
    match parse(&["tikfetch", "fetch", "https://www.tiktok.com/@u/video/1"]) {
        CliCommand::Fetch { url, endpoint } => {
            assert_eq!(url, "https://www.tiktok.com/@u/video/1");
            assert!(endpoint.is_none());
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_endpoint_override() {
    match parse(&[
        "tikfetch",
        "fetch",
        "https://vm.tiktok.com/ZMabc/",
        "--endpoint",
        "http://localhost:9999/extract",
    ]) {
        CliCommand::Fetch { url, endpoint } => {
            assert_eq!(url, "https://vm.tiktok.com/ZMabc/");
            assert_eq!(endpoint.as_deref(), Some("http://localhost:9999/extract"));
        }
        _ => panic!("expected Fetch with --endpoint"),
    }
}

#[test]
fn cli_parse_prompt() {
    match parse(&["tikfetch", "prompt"]) {
        CliCommand::Prompt { endpoint } => assert!(endpoint.is_none()),
        _ => panic!("expected Prompt"),
    }
}

#[test]
fn cli_parse_prompt_endpoint_override() {
    match parse(&["tikfetch", "prompt", "--endpoint", "http://localhost:9999/extract"]) {
        CliCommand::Prompt { endpoint } => {
            assert_eq!(endpoint.as_deref(), Some("http://localhost:9999/extract"));
        }
        _ => panic!("expected Prompt with --endpoint"),
    }
}

#[test]
fn cli_rejects_fetch_without_url() {
    assert!(Cli::try_parse_from(["tikfetch", "fetch"]).is_err());
}
