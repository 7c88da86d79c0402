//! Test modules for the dispute registry contract.


use soroban_sdk::{testutils::Events as _, vec, Address, Env, Event};

/// Asserts the most recent event came from `contract_id` and matches `expected`
pub(crate) fn assert_last_event(env: &Env, contract_id: &Address, expected: impl Event) {
    let events = env.events().all();
    assert!(!events.is_empty());

    let last = events.slice(events.len() - 1..);
    assert_eq!(
        last,
        vec![env, (contract_id.clone(), expected.topics(env), expected.data(env))]
    );
}
