//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command};
use super::model::{Config, ModuleVerbosity};
use crate::output::OutputType;

mod parsing {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["logcfg"]);

        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(cli.output.is_none());
        assert!(cli.vmodule.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_all_outputs() {
        let file = Cli::parse_from_iter(["logcfg", "--output", "file"]);
        assert_eq!(file.output, Some(OutputType::File));

        let stderr = Cli::parse_from_iter(["logcfg", "--output", "stderr"]);
        assert_eq!(stderr.output, Some(OutputType::StdErr));

        let both = Cli::parse_from_iter(["logcfg", "--output", "both"]);
        assert_eq!(both.output, Some(OutputType::Both));
    }

    #[test]
    fn parse_level_options() {
        let cli = Cli::parse_from_iter([
            "logcfg",
            "--verbosity",
            "3",
            "--stderr-threshold",
            "1",
            "--output-dir",
            "/var/log/app",
        ]);

        assert_eq!(cli.verbosity, Some(3));
        assert_eq!(cli.stderr_threshold, Some(1));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/var/log/app")));
    }

    #[test]
    fn parse_repeated_vmodule() {
        let cli = Cli::parse_from_iter(["logcfg", "--vmodule", "net=2", "--vmodule", "auth=5"]);

        assert_eq!(
            cli.vmodule,
            vec![ModuleVerbosity::new("net", 2), ModuleVerbosity::new("auth", 5)]
        );
    }

    #[test]
    fn reject_malformed_vmodule() {
        for bad in ["net", "=2", "net=two"] {
            let result = Cli::try_parse_from(["logcfg", "--vmodule", bad]);
            assert!(result.is_err(), "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn parse_output_ignores_case() {
        let cli = Cli::parse_from_iter(["logcfg", "--output", "StdErr"]);
        assert_eq!(cli.output, Some(OutputType::StdErr));

        let cli = Cli::parse_from_iter(["logcfg", "--output", "BOTH"]);
        assert_eq!(cli.output, Some(OutputType::Both));
    }

    #[test]
    fn reject_unknown_output() {
        let err = Cli::try_parse_from(["logcfg", "--output", "syslog"]).unwrap_err();
        assert!(err.to_string().contains("syslog"));
    }

    #[test]
    fn parse_config_and_verbose_short_flags() {
        let cli = Cli::parse_from_iter(["logcfg", "-c", "log.toml", "-v"]);

        assert_eq!(cli.config, Some(PathBuf::from("log.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["logcfg", "init"]);

        assert!(matches!(
            cli.command,
            Some(Command::Init { ref output }) if output == &PathBuf::from("logcfg.toml")
        ));
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter(["logcfg", "init", "-o", "custom.toml"]);

        assert!(matches!(
            cli.command,
            Some(Command::Init { ref output }) if output == &PathBuf::from("custom.toml")
        ));
    }
}

mod overrides {
    use super::*;

    fn file_config() -> Config {
        Config::new()
            .with_output(OutputType::File)
            .with_output_dir("/from/file")
            .with_verbosity(1)
            .with_module("db", 3)
    }

    #[test]
    fn no_flags_keep_file_values() {
        let cli = Cli::parse_from_iter(["logcfg"]);

        let config = cli.apply_overrides(file_config());

        assert_eq!(config, file_config());
    }

    #[test]
    fn explicit_flags_win() {
        let cli = Cli::parse_from_iter([
            "logcfg",
            "--output",
            "both",
            "--output-dir",
            "/from/cli",
            "--verbosity",
            "0",
            "--stderr-threshold",
            "2",
        ]);

        let config = cli.apply_overrides(file_config());

        assert_eq!(config.output, OutputType::Both);
        assert_eq!(config.output_dir, Some(PathBuf::from("/from/cli")));
        assert_eq!(config.verbosity, Some(0));
        assert_eq!(config.stderr_threshold, Some(2));
    }

    #[test]
    fn vmodule_replaces_file_modules() {
        let cli = Cli::parse_from_iter(["logcfg", "--vmodule", "net=2"]);

        let config = cli.apply_overrides(file_config());

        assert_eq!(config.verbosity_modules, vec![ModuleVerbosity::new("net", 2)]);
    }

    #[test]
    fn load_config_without_file_uses_cli_only() {
        let cli = Cli::parse_from_iter(["logcfg", "--output", "stderr"]);

        let config = cli.load_config().unwrap();

        assert_eq!(config, Config::new().with_output(OutputType::StdErr));
    }

    #[test]
    fn load_config_reads_file_then_overrides() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "output = \"both\"\nverbosity = 4").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from_iter(["logcfg", "-c", path.as_str(), "--verbosity", "9"]);
        let config = cli.load_config().unwrap();

        assert_eq!(config.output, OutputType::Both);
        assert_eq!(config.verbosity, Some(9));
    }
}
