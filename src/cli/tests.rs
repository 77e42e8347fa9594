//! Unit tests for CLI commands

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from([
        "routegen",
        "generate",
        "--api",
        "shop.yaml",
        "--dir",
        "out",
        "--root-package",
        "github.com/acme/shop",
        "--style",
        "go_zero",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            api,
            dir,
            root_package,
            config,
            template,
            style,
        } => {
            assert_eq!(api.to_string_lossy(), "shop.yaml");
            assert_eq!(dir.to_string_lossy(), "out");
            assert_eq!(root_package.as_deref(), Some("github.com/acme/shop"));
            assert!(config.is_none());
            assert!(template.is_none());
            assert_eq!(style.as_deref(), Some("go_zero"));
        }
        _ => panic!("Expected Generate command"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_generate_requires_dir() {
    assert!(Cli::try_parse_from(["routegen", "generate", "--api", "shop.yaml"]).is_err());
}

#[test]
fn test_verbose_is_global() {
    let cli = Cli::try_parse_from(["routegen", "inspect", "--api", "shop.yaml", "-v"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["routegen", "generate", "-a", "shop.yaml", "-d", "out"],
        vec!["routegen", "template"],
        vec!["routegen", "inspect", "--api", "shop.yaml"],
        vec!["routegen", "inspect", "--api", "shop.yaml", "--dir", "out"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}
