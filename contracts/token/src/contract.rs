//! Core contract implementation for the Prediction Market Token.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::errors::TokenError;
use crate::events::{Mint, Transfer};
use crate::types::DataKey;

pub const NAME: &str = "Prediction Market Token";
pub const SYMBOL: &str = "PMT";
pub const DECIMALS: u32 = 6;

#[contract]
pub struct TokenContract;

#[contractimpl]
impl TokenContract {
    /// Sets the minting admin (one-time only)
    pub fn initialize(env: Env, admin: Address) -> Result<(), TokenError> {
        admin.require_auth();

        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(TokenError::AlreadyInitialized);
        }

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::TotalSupply, &0i128);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Admin)
    }

    /// Mints new tokens to `recipient` (admin only)
    pub fn mint(env: Env, recipient: Address, amount: i128) -> Result<(), TokenError> {
        let admin = Self::_admin(&env)?;
        admin.require_auth();

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let supply = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let balance = Self::balance(env.clone(), recipient.clone())
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        Self::_set_balance(&env, recipient.clone(), balance);
        env.storage().persistent().set(&DataKey::TotalSupply, &supply);

        Mint {
            to: recipient,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Moves `amount` from `from` to `to`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        Self::_transfer(&env, from, to, amount, None)
    }

    /// Same as `transfer`, attaching a memo to the transfer event
    pub fn transfer_with_memo(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
        memo: Option<String>,
    ) -> Result<(), TokenError> {
        Self::_transfer(&env, from, to, amount, memo)
    }

    /// Sets or clears the metadata URI (admin only)
    pub fn set_token_uri(env: Env, uri: Option<String>) -> Result<(), TokenError> {
        let admin = Self::_admin(&env)?;
        admin.require_auth();

        match uri {
            Some(uri) => env.storage().persistent().set(&DataKey::TokenUri, &uri),
            None => env.storage().persistent().remove(&DataKey::TokenUri),
        }

        Ok(())
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    /// Returns the account's balance, zero for unknown accounts
    pub fn balance(env: Env, id: Address) -> i128 {
        let key = DataKey::Balance(id);
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn token_uri(env: Env) -> Option<String> {
        env.storage().persistent().get(&DataKey::TokenUri)
    }

    fn _transfer(
        env: &Env,
        from: Address,
        to: Address,
        amount: i128,
        memo: Option<String>,
    ) -> Result<(), TokenError> {
        from.require_auth();

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }

        // Self-transfers leave the balance unchanged
        if from != to {
            let new_from = from_balance
                .checked_sub(amount)
                .ok_or(TokenError::Overflow)?;
            let new_to = Self::balance(env.clone(), to.clone())
                .checked_add(amount)
                .ok_or(TokenError::Overflow)?;

            Self::_set_balance(env, from.clone(), new_from);
            Self::_set_balance(env, to.clone(), new_to);
        }

        Transfer {
            from,
            to,
            amount,
            memo,
        }
        .publish(env);

        Ok(())
    }

    fn _admin(env: &Env) -> Result<Address, TokenError> {
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(TokenError::NotInitialized)
    }

    pub(crate) fn _set_balance(env: &Env, user: Address, amount: i128) {
        let key = DataKey::Balance(user);
        env.storage().persistent().set(&key, &amount);
    }
}
