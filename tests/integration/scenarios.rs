//! Fixture-driven lookup scenarios, run through the loosely typed boundary.

use continuum_lookup::{Continuum, search_number};
use continuum_tests::{ScenarioFile, fixture_path, init_tracing};

#[test]
fn test_fixture_scenarios() {
    init_tracing();
    let file = ScenarioFile::load(&fixture_path("scenarios.toml")).unwrap();
    assert!(!file.scenario.is_empty(), "fixture has no scenarios");

    for s in &file.scenario {
        let result = search_number(&s.values, s.query);
        match (s.expected, s.error) {
            (Some(expected), None) => {
                assert_eq!(result, Ok(expected), "scenario {:?}", s.name);
            }
            (None, Some(kind)) => {
                let err = result.expect_err(&s.name);
                assert!(kind.matches(&err), "scenario {:?}: got {err}", s.name);
            }
            _ => panic!("scenario {:?} must set exactly one of expected/error", s.name),
        }
    }
}

#[test]
fn test_fixture_scenarios_are_sorted() {
    let file = ScenarioFile::load(&fixture_path("scenarios.toml")).unwrap();
    for s in &file.scenario {
        assert!(
            Continuum::checked(&s.values).is_ok(),
            "scenario {:?} has unsorted values",
            s.name
        );
    }
}

#[test]
fn test_inline_scenarios() {
    let file = ScenarioFile::from_toml(
        r#"
        [[scenario]]
        name = "inline"
        values = [100, 200]
        query = 150
        expected = 0
        "#,
    )
    .unwrap();

    assert_eq!(file.scenario.len(), 1);
    let s = &file.scenario[0];
    assert_eq!(search_number(&s.values, s.query), Ok(0));
}

#[test]
fn test_empty_fixture_parses() {
    let file = ScenarioFile::from_toml("").unwrap();
    assert!(file.scenario.is_empty());
}

#[test]
fn test_missing_fixture_errors() {
    let err = ScenarioFile::load(&fixture_path("does-not-exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.toml"));
}
