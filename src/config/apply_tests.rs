//! Tests for applying configuration to a backend.

use std::path::PathBuf;

use super::apply::{apply, init};
use super::model::{Config, Defaults};
use crate::backend::mock::{Call, RecordingBackend};
use crate::backend::{BackendState, LogBackend, ModulePattern};
use crate::output::OutputType;

fn defaults() -> Defaults {
    Defaults {
        output: OutputType::StdErr,
        output_dir: PathBuf::from("/tmp"),
        verbosity: 9000,
        stderr_threshold: 3,
    }
}

mod routing {
    use super::*;

    #[test]
    fn file_clears_both_stderr_flags() {
        let mut backend = BackendState::new();
        backend.set_to_stderr(true);
        backend.set_also_to_stderr(true);

        apply(&Config::new().with_output(OutputType::File), &defaults(), &mut backend);

        assert!(!backend.to_stderr());
        assert!(!backend.also_to_stderr());
    }

    #[test]
    fn stderr_sets_only_stderr_flag() {
        let mut backend = BackendState::new();

        apply(&Config::new().with_output(OutputType::StdErr), &defaults(), &mut backend);

        assert!(backend.to_stderr());
        assert!(!backend.also_to_stderr());
    }

    #[test]
    fn both_sets_only_also_flag() {
        let mut backend = BackendState::new();

        apply(&Config::new().with_output(OutputType::Both), &defaults(), &mut backend);

        assert!(!backend.to_stderr());
        assert!(backend.also_to_stderr());
    }
}

mod setters {
    use super::*;

    #[test]
    fn writes_every_setting_in_order() {
        let config = Config::new()
            .with_output(OutputType::Both)
            .with_output_dir("/var/log/app")
            .with_verbosity(4)
            .with_stderr_threshold(2)
            .with_module("net", 2)
            .with_module("auth", 5);
        let mut backend = RecordingBackend::default();

        apply(&config, &defaults(), &mut backend);

        assert_eq!(
            backend.calls,
            vec![
                Call::ToStderr(false),
                Call::AlsoToStderr(true),
                Call::StderrThreshold("2".to_string()),
                Call::Verbosity("4".to_string()),
                Call::Vmodule("net=2,auth=5".to_string()),
                Call::LogDirs(vec![PathBuf::from("/var/log/app")]),
            ]
        );
    }

    #[test]
    fn numbers_are_sent_as_decimal_strings() {
        let config = Config::new().with_verbosity(-3).with_stderr_threshold(10);
        let mut backend = RecordingBackend::default();

        apply(&config, &defaults(), &mut backend);

        assert!(backend.calls.contains(&Call::Verbosity("-3".to_string())));
        assert!(backend.calls.contains(&Call::StderrThreshold("10".to_string())));
    }

    #[test]
    fn empty_module_list_still_sets_vmodule() {
        let mut backend = RecordingBackend::default();

        apply(&Config::new(), &defaults(), &mut backend);

        assert_eq!(backend.last_vmodule(), Some(""));
    }

    #[test]
    fn rejected_setting_does_not_stop_later_ones() {
        let mut backend = RecordingBackend::rejecting_verbosity();

        apply(&Config::new().with_module("net", 1), &defaults(), &mut backend);

        assert_eq!(backend.last_vmodule(), Some("net=1"));
        assert!(matches!(backend.calls.last(), Some(Call::LogDirs(_))));
    }
}

mod normalization {
    use super::*;

    #[test]
    fn unset_verbosity_uses_defaults_at_call_time() {
        let mut defaults = defaults();
        defaults.verbosity = 11;
        let mut backend = BackendState::new();

        apply(&Config::new(), &defaults, &mut backend);

        assert_eq!(backend.verbosity(), 11);
    }

    #[test]
    fn unset_threshold_and_dir_use_defaults() {
        let mut backend = BackendState::new();

        apply(&Config::new(), &defaults(), &mut backend);

        assert_eq!(backend.stderr_threshold(), 3);
        assert_eq!(backend.log_dirs(), &[PathBuf::from("/tmp")]);
    }

    #[test]
    fn explicit_zero_verbosity_is_applied() {
        let mut backend = BackendState::new();
        backend.set_verbosity("5").unwrap();

        apply(&Config::new().with_verbosity(0), &defaults(), &mut backend);

        assert_eq!(backend.verbosity(), 0);
    }

    #[test]
    fn output_dir_replaces_previous_directories() {
        let mut backend = BackendState::new();
        backend.set_log_dirs(vec![PathBuf::from("/old/a"), PathBuf::from("/old/b")]);

        apply(
            &Config::new().with_output_dir("/var/log/app"),
            &defaults(),
            &mut backend,
        );

        assert_eq!(backend.log_dirs(), &[PathBuf::from("/var/log/app")]);
    }

    #[test]
    fn module_overrides_reach_backend() {
        let config = Config::new().with_module("net", 2).with_module("auth", 5);
        let mut backend = BackendState::new();

        apply(&config, &defaults(), &mut backend);

        assert_eq!(
            backend.vmodule(),
            &[
                ModulePattern {
                    pattern: "net".to_string(),
                    level: 2
                },
                ModulePattern {
                    pattern: "auth".to_string(),
                    level: 5
                },
            ]
        );
    }
}

mod initialization {
    use super::*;

    #[test]
    fn init_applies_builtin_defaults() {
        let mut backend = BackendState::new();

        let defaults = init(&mut backend);

        assert_eq!(defaults, Defaults::builtin());
        assert!(backend.to_stderr());
        assert!(!backend.also_to_stderr());
        assert_eq!(backend.verbosity(), 9000);
        assert_eq!(backend.stderr_threshold(), 3);
        assert_eq!(backend.log_dirs(), &[std::env::temp_dir()]);
        assert!(backend.vmodule().is_empty());
    }

    #[test]
    fn init_is_idempotent() {
        let mut once = BackendState::new();
        init(&mut once);

        let mut twice = BackendState::new();
        init(&mut twice);
        init(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn sparse_config_matches_defaults_except_routing() {
        let mut from_defaults = BackendState::new();
        let defaults = init(&mut from_defaults);

        let mut from_config = from_defaults.clone();
        apply(&Config::new().with_output(OutputType::Both), &defaults, &mut from_config);

        assert!(!from_config.to_stderr());
        assert!(from_config.also_to_stderr());

        // Everything else is identical once routing is aligned
        from_config.set_to_stderr(from_defaults.to_stderr());
        from_config.set_also_to_stderr(from_defaults.also_to_stderr());
        assert_eq!(from_config, from_defaults);
    }
}
