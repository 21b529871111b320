#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub nft_contract: Address,
    pub reward_token: Address,
    pub reward_per_block: i128,
    pub unbonding_period: u32,
    pub reward_claim_delay: u32,
    pub timestamp: u64,
}

/// Fired per NFT taken into custody.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub owner: Address,
    pub token_id: u32,
    pub staked_at_block: u32,
    pub timestamp: u64,
}

/// Fired per NFT whose unbonding clock starts.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeRequestedEvent {
    pub owner: Address,
    pub token_id: u32,
    pub unstaked_at_block: u32,
    pub timestamp: u64,
}

/// Fired when custody of an unbonded NFT returns to its owner.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftWithdrawnEvent {
    pub owner: Address,
    pub token_id: u32,
    pub withdrawn_at_block: u32,
    pub timestamp: u64,
}

/// Fired when a user collects accrued rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub owner: Address,
    pub amount: i128,
    pub claimed_at_block: u32,
    pub timestamp: u64,
}

/// Fired when the admin halts staking intake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingPausedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when the admin reopens staking intake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingUnpausedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when the admin changes the reward rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub new_rate: i128,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    nft_contract: Address,
    reward_token: Address,
    reward_per_block: i128,
    unbonding_period: u32,
    reward_claim_delay: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            nft_contract,
            reward_token,
            reward_per_block,
            unbonding_period,
            reward_claim_delay,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, owner: Address, token_id: u32, staked_at_block: u32) {
    env.events().publish(
        (symbol_short!("STAKED"), owner.clone()),
        StakedEvent {
            owner,
            token_id,
            staked_at_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstake_requested(env: &Env, owner: Address, token_id: u32, unstaked_at_block: u32) {
    env.events().publish(
        (symbol_short!("UNSTK_REQ"), owner.clone()),
        UnstakeRequestedEvent {
            owner,
            token_id,
            unstaked_at_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_nft_withdrawn(env: &Env, owner: Address, token_id: u32, withdrawn_at_block: u32) {
    env.events().publish(
        (symbol_short!("NFT_WDRN"), owner.clone()),
        NftWithdrawnEvent {
            owner,
            token_id,
            withdrawn_at_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_claimed(env: &Env, owner: Address, amount: i128, claimed_at_block: u32) {
    env.events().publish(
        (symbol_short!("CLMD"), owner.clone()),
        RewardsClaimedEvent {
            owner,
            amount,
            claimed_at_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staking_paused(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        StakingPausedEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staking_unpaused(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"),),
        StakingUnpausedEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardRateSetEvent {
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
