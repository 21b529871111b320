#![no_std]

//! Minimal in-memory NFT ledger.
//!
//! Stands in for the external NFT contract the staking ledger takes custody
//! from. Only the surface the staking contract relies on is implemented:
//! `transfer` with an ownership check, plus `mint`/`owner_of` for test
//! provisioning and custody assertions.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyMinted = 1,
    TokenNotFound = 2,
    NotOwner = 3,
}

/// Storage keys for the token ledger.
#[contracttype]
pub enum DataKey {
    /// Owner mapping (token_id -> Address)
    Owner(u32),
}

#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    /// Create `token_id` owned by `to`. Token ids are never reissued.
    pub fn mint(env: Env, to: Address, token_id: u32) -> Result<(), Error> {
        if env.storage().persistent().has(&DataKey::Owner(token_id)) {
            return Err(Error::AlreadyMinted);
        }
        env.storage().persistent().set(&DataKey::Owner(token_id), &to);
        Ok(())
    }

    /// Move `token_id` from `from` to `to`. Fails unless `from` both
    /// authorized the call and currently owns the token.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error> {
        from.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        env.storage().persistent().set(&DataKey::Owner(token_id), &to);
        Ok(())
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::TokenNotFound)
    }
}

#[cfg(test)]
mod test;
