//! Test modules for the prediction market contract.

mod edge_cases;

use crate::contract::{PredictionMarketContract, PredictionMarketContractClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token, vec, Address, Env, Event, String,
};

/// Ledger at which the default test market closes for staking
pub(crate) const RESOLUTION_LEDGER: u32 = 1_000;

/// Initialized market contract backed by a Stellar asset used as the stake token
pub(crate) struct Setup {
    pub env: Env,
    pub contract_id: Address,
    pub client: PredictionMarketContractClient<'static>,
    pub token: token::Client<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub admin: Address,
    pub oracle: Address,
}

impl Setup {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(PredictionMarketContract, ());
        let client = PredictionMarketContractClient::new(&env, &contract_id);

        let issuer = Address::generate(&env);
        let token_address = env
            .register_stellar_asset_contract_v2(issuer)
            .address();
        let token = token::Client::new(&env, &token_address);
        let token_admin = token::StellarAssetClient::new(&env, &token_address);

        let admin = Address::generate(&env);
        let oracle = Address::generate(&env);
        client.initialize(&admin, &oracle, &token_address);

        Setup {
            env,
            contract_id,
            client,
            token,
            token_admin,
            admin,
            oracle,
        }
    }

    /// Generates a user holding `amount` of the stake token
    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &amount);
        user
    }

    /// Creates the two-option "Test market" resolving at `RESOLUTION_LEDGER`
    pub fn create_test_market(&self) -> u64 {
        let creator = Address::generate(&self.env);
        let options = vec![
            &self.env,
            String::from_str(&self.env, "Option 1"),
            String::from_str(&self.env, "Option 2"),
        ];

        self.client.create_market(
            &creator,
            &String::from_str(&self.env, "Test market"),
            &options,
            &RESOLUTION_LEDGER,
        )
    }

    pub fn set_ledger(&self, sequence: u32) {
        use soroban_sdk::testutils::Ledger as _;

        self.env.ledger().with_mut(|li| {
            li.sequence_number = sequence;
        });
    }
}

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
