//! Tests for boundary conditions and unusual scenarios.

use super::{Setup, RESOLUTION_LEDGER};
use crate::errors::MarketError;
use crate::types::{DataKey, Market, OptionKey};

#[test]
fn test_market_with_no_participants() {
    let setup = Setup::new();
    let market_id = setup.create_test_market();

    setup.set_ledger(RESOLUTION_LEDGER);
    setup.client.resolve_market(&market_id, &0);

    let market = setup.client.get_market(&market_id).unwrap();
    assert!(market.resolved);
    assert_eq!(market.total_stake, 0);
}

#[test]
fn test_market_with_only_winning_side() {
    let setup = Setup::new();
    let market_id = setup.create_test_market();
    let alice = setup.funded_user(10_000);
    let bob = setup.funded_user(10_000);

    setup.client.stake(&alice, &market_id, &0, &1000);
    setup.client.stake(&bob, &market_id, &0, &1500);

    setup.set_ledger(RESOLUTION_LEDGER);
    setup.client.resolve_market(&market_id, &0);

    // No losing pool to split - winners get their stakes back
    assert_eq!(setup.client.claim_winnings(&alice, &market_id), 1000);
    assert_eq!(setup.client.claim_winnings(&bob, &market_id), 1500);
}

#[test]
fn test_stake_on_last_open_ledger() {
    let setup = Setup::new();
    let market_id = setup.create_test_market();
    let alice = setup.funded_user(10_000);

    setup.set_ledger(RESOLUTION_LEDGER - 1);
    setup.client.stake(&alice, &market_id, &1, &1000);

    assert_eq!(setup.client.get_market_stake(&market_id, &1), 1000);
}

#[test]
fn test_claim_overflow() {
    let setup = Setup::new();
    let market_id = setup.create_test_market();
    let alice = setup.funded_user(10_000);

    setup.client.stake(&alice, &market_id, &0, &1000);

    // Inflate the recorded pool so stake * total_stake overflows
    setup.env.as_contract(&setup.contract_id, || {
        let key = DataKey::Market(market_id);
        let mut market: Market = setup.env.storage().persistent().get(&key).unwrap();
        market.total_stake = i128::MAX;
        setup.env.storage().persistent().set(&key, &market);
    });

    setup.set_ledger(RESOLUTION_LEDGER);
    setup.client.resolve_market(&market_id, &0);

    let result = setup.client.try_claim_winnings(&alice, &market_id);
    assert_eq!(result, Err(Ok(MarketError::Overflow)));
    assert!(!setup.client.has_claimed(&market_id, &alice));
}

#[test]
fn test_stake_overflow() {
    let setup = Setup::new();
    let market_id = setup.create_test_market();
    let alice = setup.funded_user(10_000);

    setup.env.as_contract(&setup.contract_id, || {
        setup
            .env
            .storage()
            .persistent()
            .set(&DataKey::OptionStake(OptionKey { market_id, option: 0 }), &i128::MAX);
    });

    let result = setup.client.try_stake(&alice, &market_id, &0, &1);
    assert_eq!(result, Err(Ok(MarketError::Overflow)));
    assert_eq!(setup.token.balance(&alice), 10_000);
}
