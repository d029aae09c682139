//! One-shot commands against in-memory stores.

mod common;

use common::{FakeCategories, FakeInputs, Shared, category, service};
use labelr::cli::{self, CategoryCommand, Command};
use labelr::code::{AllocationError, CodeAllocator, ExhaustionPolicy};

fn run_category(
    shared: &Shared,
    command: CategoryCommand,
    policy: ExhaustionPolicy,
) -> anyhow::Result<()> {
    cli::run(
        Command::Category { command },
        &FakeCategories(shared.clone()),
        &FakeInputs(shared.clone()),
        &CodeAllocator::new(policy),
    )
}

#[test]
fn next_saturates_like_add_does() {
    let shared = service(vec![category(1, "Last", "Z99")], vec![]);

    run_category(&shared, CategoryCommand::Next, ExhaustionPolicy::Saturate).unwrap();
    assert!(shared.borrow().created.is_empty());

    run_category(
        &shared,
        CategoryCommand::Add {
            name: "Overflow".to_string(),
        },
        ExhaustionPolicy::Saturate,
    )
    .unwrap();
    assert_eq!(shared.borrow().created[0].code, "Z99");
}

#[test]
fn next_fails_when_policy_rejects_exhaustion() {
    let shared = service(vec![category(1, "Last", "Z99")], vec![]);

    let err = run_category(&shared, CategoryCommand::Next, ExhaustionPolicy::Reject).unwrap_err();

    assert_eq!(
        err.downcast_ref::<AllocationError>(),
        Some(&AllocationError::Exhausted)
    );
}

#[test]
fn next_fails_after_malformed_code() {
    let shared = service(vec![category(1, "Legacy", "legacy-1")], vec![]);

    let err = run_category(&shared, CategoryCommand::Next, ExhaustionPolicy::Saturate).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AllocationError>(),
        Some(AllocationError::MalformedPredecessor(_))
    ));
}

#[test]
fn next_propagates_store_failures() {
    let shared = service(vec![], vec![]);
    shared.borrow_mut().fail_list = true;

    let err = run_category(&shared, CategoryCommand::Next, ExhaustionPolicy::Saturate).unwrap_err();

    assert!(err.to_string().contains("503"), "{err}");
}

#[test]
fn add_rejected_at_z99_creates_nothing() {
    let shared = service(vec![category(1, "Last", "Z99")], vec![]);

    let result = run_category(
        &shared,
        CategoryCommand::Add {
            name: "Overflow".to_string(),
        },
        ExhaustionPolicy::Reject,
    );

    assert!(result.is_err());
    assert!(shared.borrow().created.is_empty());
}
