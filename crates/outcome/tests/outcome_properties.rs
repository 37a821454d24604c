//! Integration tests for the outcome algebra:
//! - construction and the mutually exclusive success/error predicates
//! - misuse of variant-specific accessors
//! - AND-combination and resolution
//! - payload-type transformations across a small service pipeline

use outcome::prelude::*;
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("outcome=warn")
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    name: String,
    age: u8,
}

fn validate_name(name: &str) -> Outcome {
    if name.trim().is_empty() {
        return Error::new("name must not be empty").into();
    }
    Outcome::success()
}

fn validate_age(raw: &str) -> Outcome<u8> {
    raw.parse::<u8>()
        .map_err(|err| Error::with_cause(format!("invalid age '{raw}'"), err))
        .into()
}

fn build_profile(name: &str, raw_age: &str) -> Outcome<Profile> {
    let checked = validate_name(name);
    if checked.is_error() {
        return checked.add_type().expect("checked failure");
    }
    let age = validate_age(raw_age);
    if age.is_error() {
        return age.to_type().expect("checked failure");
    }
    age.map(|age| Profile {
        name: name.to_owned(),
        age,
    })
}

#[test]
fn predicates_are_exclusive_for_every_shape() {
    let outcomes: Vec<Outcome<Option<&str>>> = vec![
        Outcome::ok(Some("x")),
        Outcome::ok(None),
        Outcome::fail("a"),
        Outcome::failure("b", std::fmt::Error),
    ];
    for outcome in &outcomes {
        assert_ne!(outcome.is_success(), outcome.is_error(), "{outcome:?}");
    }
}

#[test]
fn payload_and_error_round_trip() {
    let data = vec![1, 2, 3];
    assert_eq!(Outcome::ok(data.clone()).data(), Ok(&data));

    let err = Error::with_cause("bad input", std::fmt::Error);
    let failed: Outcome<Vec<i32>> = Outcome::fail(err.clone());
    assert_eq!(failed.error(), Ok(&err));
    assert_eq!(failed.message(), Ok(err.message()));
}

#[test]
fn misuse_is_reported_as_state_error() {
    init_tracing();

    let failed: Outcome<u8> = Outcome::fail("nope");
    let ok = Outcome::ok(1u8);

    assert!(matches!(failed.data(), Err(StateError::NotSuccess { .. })));
    assert!(matches!(ok.error(), Err(StateError::NotFailure { .. })));
    assert!(matches!(ok.message(), Err(StateError::NotFailure { .. })));
    assert!(matches!(
        failed.clone().unwrap_on_success(),
        Err(StateError::NotSuccess { .. })
    ));
    assert!(matches!(
        ok.unwrap_on_failure(),
        Err(StateError::NotFailure { .. })
    ));
    assert!(matches!(
        ok.clone().to_type::<String>(),
        Err(StateError::NotFailure { .. })
    ));
}

#[test]
fn and_combination_short_circuits_on_the_left() {
    let first: Outcome = Outcome::fail("step one failed");
    let second: Outcome = Outcome::fail("step two failed");

    assert_eq!(first.clone().and(second.clone()), first);
    assert_eq!(Outcome::success().and(second.clone()), second);
    assert_eq!(Outcome::success().and(Outcome::success()), Outcome::success());
}

#[test]
fn pipeline_propagates_the_first_failure() {
    let profile = build_profile("Ada", "36");
    assert_eq!(
        profile.unwrap_on_success(),
        Ok(Profile {
            name: "Ada".into(),
            age: 36
        })
    );

    let profile = build_profile(" ", "36");
    assert_eq!(profile.unwrap_on_failure(), Ok("name must not be empty"));

    let profile = build_profile("Ada", "old");
    assert_eq!(profile.message(), Ok("invalid age 'old'"));
    assert!(profile.error().map(Error::has_cause).unwrap_or(false));
}

#[test]
fn resolve_feeds_a_response_like_collaborator() {
    fn respond(outcome: Outcome<Profile>) -> (u16, String) {
        outcome.resolve(
            |profile| (200, profile.name),
            |err| (400, err.message().to_owned()),
        )
    }

    assert_eq!(respond(build_profile("Ada", "36")), (200, "Ada".to_owned()));
    assert_eq!(
        respond(build_profile("Ada", "300")),
        (400, "invalid age '300'".to_owned())
    );
}

#[test]
fn remove_type_scenarios() {
    assert_eq!(Outcome::ok(42).remove_type(), Outcome::success());

    let err = Error::new("gone");
    let removed = Outcome::<i32>::fail(err.clone()).remove_type();
    assert_eq!(removed.error(), Ok(&err));
}

#[test]
fn outcomes_cross_threads() {
    let failed: Outcome<u32> = Outcome::failure("worker failed", std::fmt::Error);
    let handle = std::thread::spawn(move || failed.message().map(str::to_owned));
    assert_eq!(handle.join().unwrap(), Ok("worker failed".to_owned()));
}
