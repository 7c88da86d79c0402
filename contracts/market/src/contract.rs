//! Core contract implementation for the prediction market.

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

use crate::errors::MarketError;
use crate::events::{MarketCreated, MarketResolved, Staked, WinningsClaimed};
use crate::types::{ClaimKey, DataKey, Market, OptionKey, UserStakeKey};

pub const MIN_OPTIONS: u32 = 2;
pub const MAX_OPTIONS: u32 = 10;

#[contract]
pub struct PredictionMarketContract;

#[contractimpl]
impl PredictionMarketContract {
    /// Initializes the contract with admin, oracle and stake token (one-time only)
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        stake_token: Address,
    ) -> Result<(), MarketError> {
        admin.require_auth();

        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(MarketError::AlreadyInitialized);
        }

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Oracle, &oracle);
        env.storage().persistent().set(&DataKey::StakeToken, &stake_token);

        Ok(())
    }

    /// Replaces the oracle allowed to resolve markets (admin only)
    pub fn set_oracle(env: Env, oracle: Address) -> Result<(), MarketError> {
        let admin: Address = env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(MarketError::AdminNotSet)?;

        admin.require_auth();

        env.storage().persistent().set(&DataKey::Oracle, &oracle);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Admin)
    }

    pub fn get_oracle(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Oracle)
    }

    pub fn get_stake_token(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::StakeToken)
    }

    /// Creates a new market and returns its id (ids start at 1)
    pub fn create_market(
        env: Env,
        creator: Address,
        description: String,
        options: Vec<String>,
        resolution_time: u32,
    ) -> Result<u64, MarketError> {
        creator.require_auth();

        if !env.storage().persistent().has(&DataKey::StakeToken) {
            return Err(MarketError::StakeTokenNotSet);
        }

        if description.len() == 0 {
            return Err(MarketError::InvalidDescription);
        }

        if options.len() < MIN_OPTIONS || options.len() > MAX_OPTIONS {
            return Err(MarketError::InvalidOptions);
        }
        for option in options.iter() {
            if option.len() == 0 {
                return Err(MarketError::InvalidOptions);
            }
        }

        if resolution_time <= env.ledger().sequence() {
            return Err(MarketError::InvalidResolutionTime);
        }

        let market_id = Self::get_market_count(env.clone())
            .checked_add(1)
            .ok_or(MarketError::Overflow)?;

        let market = Market {
            creator: creator.clone(),
            description: description.clone(),
            options: options.clone(),
            resolution_time,
            total_stake: 0,
            resolved: false,
            winning_option: None,
        };

        env.storage().persistent().set(&DataKey::Market(market_id), &market);
        env.storage().persistent().set(&DataKey::MarketCount, &market_id);

        MarketCreated {
            market_id,
            creator,
            description,
            option_count: options.len(),
            resolution_time,
        }
        .publish(&env);

        Ok(market_id)
    }

    /// Returns a market by id, if it exists
    pub fn get_market(env: Env, market_id: u64) -> Option<Market> {
        env.storage().persistent().get(&DataKey::Market(market_id))
    }

    /// Number of markets created so far (also the id of the latest one)
    pub fn get_market_count(env: Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::MarketCount)
            .unwrap_or(0)
    }

    /// Stakes `amount` of the stake token on one option of a market.
    /// Repeated stakes accumulate.
    pub fn stake(
        env: Env,
        user: Address,
        market_id: u64,
        option: u32,
        amount: i128,
    ) -> Result<(), MarketError> {
        user.require_auth();

        if amount <= 0 {
            return Err(MarketError::InvalidAmount);
        }

        let mut market = Self::_market(&env, market_id)?;

        if market.resolved {
            return Err(MarketError::MarketResolved);
        }

        if env.ledger().sequence() >= market.resolution_time {
            return Err(MarketError::MarketClosed);
        }

        if option >= market.options.len() {
            return Err(MarketError::InvalidOption);
        }

        let token_client = Self::_stake_token(&env)?;
        if token_client.balance(&user) < amount {
            return Err(MarketError::InsufficientBalance);
        }

        let user_key = DataKey::UserStake(UserStakeKey {
            market_id,
            user: user.clone(),
            option,
        });
        let option_key = DataKey::OptionStake(OptionKey { market_id, option });

        let user_stake = Self::get_user_stake(env.clone(), market_id, user.clone(), option)
            .checked_add(amount)
            .ok_or(MarketError::Overflow)?;
        let option_stake = Self::get_market_stake(env.clone(), market_id, option)
            .checked_add(amount)
            .ok_or(MarketError::Overflow)?;
        market.total_stake = market.total_stake
            .checked_add(amount)
            .ok_or(MarketError::Overflow)?;

        token_client.transfer(&user, &env.current_contract_address(), &amount);

        env.storage().persistent().set(&user_key, &user_stake);
        env.storage().persistent().set(&option_key, &option_stake);
        env.storage().persistent().set(&DataKey::Market(market_id), &market);

        Staked {
            market_id,
            user,
            option,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Total staked on one option of a market
    pub fn get_market_stake(env: Env, market_id: u64, option: u32) -> i128 {
        let key = DataKey::OptionStake(OptionKey { market_id, option });
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    /// Amount a user has staked on one option of a market
    pub fn get_user_stake(env: Env, market_id: u64, user: Address, option: u32) -> i128 {
        let key = DataKey::UserStake(UserStakeKey {
            market_id,
            user,
            option,
        });
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    /// Resolves a market with its winning option (oracle only)
    pub fn resolve_market(
        env: Env,
        market_id: u64,
        winning_option: u32,
    ) -> Result<(), MarketError> {
        let oracle: Address = env.storage()
            .persistent()
            .get(&DataKey::Oracle)
            .ok_or(MarketError::OracleNotSet)?;

        oracle.require_auth();

        let mut market = Self::_market(&env, market_id)?;

        if market.resolved {
            return Err(MarketError::MarketResolved);
        }

        if env.ledger().sequence() < market.resolution_time {
            return Err(MarketError::ResolutionTooEarly);
        }

        if winning_option >= market.options.len() {
            return Err(MarketError::InvalidOption);
        }

        market.resolved = true;
        market.winning_option = Some(winning_option);
        env.storage().persistent().set(&DataKey::Market(market_id), &market);

        MarketResolved {
            market_id,
            winning_option,
            total_stake: market.total_stake,
        }
        .publish(&env);

        Ok(())
    }

    /// Pays out a user's share of a resolved market and returns the amount.
    /// Winners split the losing pool by stake: payout = stake + stake * losing_pool / winning_pool.
    /// If nobody backed the winning option every staker is refunded instead.
    pub fn claim_winnings(env: Env, user: Address, market_id: u64) -> Result<i128, MarketError> {
        user.require_auth();

        let market = Self::_market(&env, market_id)?;
        let winning_option = match (market.resolved, market.winning_option) {
            (true, Some(option)) => option,
            _ => return Err(MarketError::MarketNotResolved),
        };

        let claimed_key = DataKey::Claimed(ClaimKey {
            market_id,
            user: user.clone(),
        });
        if env.storage().persistent().has(&claimed_key) {
            return Err(MarketError::AlreadyClaimed);
        }

        let winning_pool = Self::get_market_stake(env.clone(), market_id, winning_option);
        let payout = if winning_pool == 0 {
            Self::_total_user_stake(&env, market_id, &user, market.options.len())?
        } else {
            let user_stake =
                Self::get_user_stake(env.clone(), market_id, user.clone(), winning_option);
            let losing_pool = market.total_stake
                .checked_sub(winning_pool)
                .ok_or(MarketError::Overflow)?;
            let share = user_stake
                .checked_mul(losing_pool)
                .ok_or(MarketError::Overflow)?
                / winning_pool;
            user_stake
                .checked_add(share)
                .ok_or(MarketError::Overflow)?
        };

        if payout == 0 {
            return Err(MarketError::NothingToClaim);
        }

        env.storage().persistent().set(&claimed_key, &true);

        let token_client = Self::_stake_token(&env)?;
        token_client.transfer(&env.current_contract_address(), &user, &payout);

        WinningsClaimed {
            market_id,
            user,
            payout,
        }
        .publish(&env);

        Ok(payout)
    }

    pub fn has_claimed(env: Env, market_id: u64, user: Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Claimed(ClaimKey { market_id, user }))
    }

    fn _market(env: &Env, market_id: u64) -> Result<Market, MarketError> {
        env.storage()
            .persistent()
            .get(&DataKey::Market(market_id))
            .ok_or(MarketError::MarketNotFound)
    }

    fn _stake_token(env: &Env) -> Result<token::Client<'_>, MarketError> {
        let address: Address = env.storage()
            .persistent()
            .get(&DataKey::StakeToken)
            .ok_or(MarketError::StakeTokenNotSet)?;

        Ok(token::Client::new(env, &address))
    }

    /// Sums a user's stakes across every option of a market
    fn _total_user_stake(
        env: &Env,
        market_id: u64,
        user: &Address,
        option_count: u32,
    ) -> Result<i128, MarketError> {
        let mut total: i128 = 0;

        for option in 0..option_count {
            let stake = Self::get_user_stake(env.clone(), market_id, user.clone(), option);
            total = total
                .checked_add(stake)
                .ok_or(MarketError::Overflow)?;
        }

        Ok(total)
    }
}
