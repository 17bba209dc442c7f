//! Library integration tests.

use bootcheck::bootstrap::BootstrapMode;
use bootcheck::checks::{Check, CheckRunner};
use bootcheck::config::{ConfigOverrides, Configuration};
use bootcheck::events::{check_events, Event, Phase};
use bootcheck::orchestrator::{Orchestrator, RunOutcome};
use bootcheck::probe::{extract_semver, MockRunner, ToolSpec};
use bootcheck::BootcheckError;

#[test]
fn error_types_are_public() {
    let err = BootcheckError::ConfigValidationError {
        message: "poetry_version is not set".into(),
    };
    assert!(err.to_string().contains("poetry_version"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> bootcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use bootcheck::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["bootcheck", "config", "--json"]);

    if let Some(Commands::Config(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Config command");
    }
}

#[test]
fn first_version_in_banner_wins() {
    let found = extract_semver("Poetry (version 1.8.3) built against 3.11.4").unwrap();
    assert_eq!(found.to_string(), "1.8.3");
    assert!(extract_semver("no digits here").is_none());
}

#[test]
fn orchestrator_runs_with_resolved_configuration() {
    let overrides = ConfigOverrides {
        python_version: Some("3.8.0".to_string()),
        poetry_version: Some("1.8.3".to_string()),
        init_git: Some(false),
        ..Default::default()
    };
    let config = Configuration::resolve(Default::default(), overrides).unwrap();
    assert_eq!(config.bootstrap, BootstrapMode::Verify);

    let runner = MockRunner::new();
    runner.succeed("pyenv", "");
    runner.succeed("poetry", "Poetry (version 1.8.3)");
    runner.succeed("git", "true");
    let mut events: Vec<Event> = Vec::new();

    let outcome = Orchestrator::new(&config, &runner).run(&mut events);

    assert_eq!(
        outcome,
        RunOutcome::Success {
            optional_failures: vec!["make".to_string(), "docker".to_string()]
        }
    );
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn custom_check_lists_keep_their_order() {
    let config = Configuration::resolve(
        Default::default(),
        ConfigOverrides {
            python_version: Some("3.8.0".to_string()),
            poetry_version: Some("1.8.3".to_string()),
            init_git: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
    let checks = CheckRunner::new(
        vec![
            Check::mandatory("node", ToolSpec::new("node", "node", ["--version"])),
            Check::mandatory("npm", ToolSpec::new("npm", "npm", ["--version"])),
        ],
        vec![],
    );
    let runner = MockRunner::new();
    runner.succeed("node", "v20.11.0");
    runner.exit("npm", 127, "npm: not found");
    let mut events: Vec<Event> = Vec::new();

    let outcome = Orchestrator::new(&config, &runner)
        .with_checks(checks)
        .run(&mut events);

    assert!(matches!(
        outcome,
        RunOutcome::MandatoryCheckFailed { ref check, .. } if check == "npm"
    ));
    assert_eq!(runner.programs(), vec!["node", "npm"]);
    let phases: Vec<(String, Phase)> = check_events(&events)
        .map(|e| (e.check.clone(), e.phase))
        .collect();
    assert_eq!(
        phases,
        vec![
            ("node".to_string(), Phase::Pending),
            ("node".to_string(), Phase::Found),
            ("npm".to_string(), Phase::Pending),
            ("npm".to_string(), Phase::Failed),
        ]
    );
}
