//! Tests for command-line parsing.

use clap::Parser;
use std::path::PathBuf;
use strictly_history::{Cli, Command};

#[test]
fn test_no_subcommand_means_play() {
    let cli = Cli::try_parse_from(["strictly_history"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.config, None);
}

#[test]
fn test_replay_arguments() {
    let cli = Cli::try_parse_from([
        "strictly_history",
        "replay",
        "--moves",
        "0,4,1",
        "--jump",
        "2",
        "--flip",
        "--config",
        "custom.toml",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(
        cli.command,
        Some(Command::Replay {
            moves: vec![0, 4, 1],
            jump: Some(2),
            flip: true,
            json: false,
        })
    );
}

#[test]
fn test_non_numeric_move_rejected() {
    assert!(Cli::try_parse_from(["strictly_history", "replay", "--moves", "a,b"]).is_err());
}
