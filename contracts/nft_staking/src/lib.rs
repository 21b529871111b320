#![no_std]

pub mod events;
pub mod nft;
pub mod rewards;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol, Vec,
};

use nft::NftRegistryClient;

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const TOTAL_CUSTODIED: Symbol = symbol_short!("TOT_CUST");

// Per-user persistent storage uses tuple keys:  (prefix, owner_address)
const STAKES: Symbol = symbol_short!("STAKES");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    Paused = 4,
    NotOwnerOrNotApproved = 5,
    DuplicateStake = 6,
    NotStaked = 7,
    AlreadyUnstaking = 8,
    UnbondingNotElapsed = 9,
    ClaimDelayNotElapsed = 10,
    InsufficientRewardPool = 11,
    NotFoundOrAlreadyWithdrawn = 12,
    InvalidInput = 13,
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Process-wide configuration. Written once by `initialize`; only the admin
/// surface mutates it afterwards (`reward_per_block`, `paused`, `admin`).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    /// Address that may pause intake, change the rate, and hand off control.
    pub admin: Address,
    /// External NFT contract the staked assets live on.
    pub nft_contract: Address,
    /// Token contract rewards are paid out of.
    pub reward_token: Address,
    /// Reward emitted per staked NFT per ledger.
    pub reward_per_block: i128,
    /// Ledgers an unstake request must age before the NFT can be withdrawn.
    pub unbonding_period: u32,
    /// Ledgers a stake must age before its rewards become claimable.
    pub reward_claim_delay: u32,
    /// Gates `stake` only; unstake, withdraw and claim stay open.
    pub paused: bool,
}

/// One staked NFT. Withdrawn records are kept with `withdrawn = true` so the
/// same token id can be staked again later without clobbering history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub owner: Address,
    pub token_id: u32,
    pub staked_at_block: u32,
    /// Ledger sequence of the unstake request; 0 while actively staked.
    pub unstaked_at_block: u32,
    pub last_claim_block: u32,
    pub withdrawn: bool,
}

/// Read-only projection of a live stake returned by `get_stakes`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeView {
    pub token_id: u32,
    pub staked_at_block: u32,
    pub unstaked_at_block: u32,
    pub last_claim_block: u32,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct NftStakingContract;

#[contractimpl]
impl NftStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `nft_contract`       – registry holding the stakeable NFTs.
    /// * `reward_token`       – token contract rewards are paid from.
    /// * `reward_per_block`   – reward emitted per staked NFT per ledger.
    /// * `unbonding_period`   – ledgers between unstake request and withdrawal.
    /// * `reward_claim_delay` – ledgers between staking and first claim.
    pub fn initialize(
        env: Env,
        admin: Address,
        nft_contract: Address,
        reward_token: Address,
        reward_per_block: i128,
        unbonding_period: u32,
        reward_claim_delay: u32,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_per_block < 0 {
            return Err(ContractError::InvalidInput);
        }
        if nft_contract == reward_token {
            return Err(ContractError::InvalidInput);
        }

        let config = StakingConfig {
            admin: admin.clone(),
            nft_contract: nft_contract.clone(),
            reward_token: reward_token.clone(),
            reward_per_block,
            unbonding_period,
            reward_claim_delay,
            paused: false,
        };

        env.storage().instance().set(&CONFIG, &config);
        // TOTAL_CUSTODIED starts at zero; unwrap_or(0) handles the absent
        // key, so no explicit init needed.

        events::publish_initialized(
            &env,
            admin,
            nft_contract,
            reward_token,
            reward_per_block,
            unbonding_period,
            reward_claim_delay,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Take custody of `token_ids` and open one stake record per NFT.
    ///
    /// Records are appended in input order, which is the order `get_stakes`
    /// reports them in. Any failure aborts the whole batch.
    pub fn stake(env: Env, staker: Address, token_ids: Vec<u32>) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        staker.require_auth();

        if config.paused {
            return Err(ContractError::Paused);
        }
        if token_ids.is_empty() {
            return Err(ContractError::InvalidInput);
        }

        let current = env.ledger().sequence();
        let stakes_key = (STAKES, staker.clone());
        let mut records: Vec<StakeRecord> = env
            .storage()
            .persistent()
            .get(&stakes_key)
            .unwrap_or(Vec::new(&env));

        let registry = NftRegistryClient::new(&env, &config.nft_contract);

        for token_id in token_ids.iter() {
            if Self::find_live(&records, token_id).is_some() {
                return Err(ContractError::DuplicateStake);
            }

            // Pull the NFT into custody. The registry enforces ownership and
            // approval; any rejection it raises fails the batch.
            if registry
                .try_transfer(&staker, &env.current_contract_address(), &token_id)
                .is_err()
            {
                return Err(ContractError::NotOwnerOrNotApproved);
            }

            records.push_back(StakeRecord {
                owner: staker.clone(),
                token_id,
                staked_at_block: current,
                unstaked_at_block: 0,
                last_claim_block: current,
                withdrawn: false,
            });

            events::publish_staked(&env, staker.clone(), token_id, current);
        }

        env.storage().persistent().set(&stakes_key, &records);

        let custodied: u32 = env.storage().instance().get(&TOTAL_CUSTODIED).unwrap_or(0);
        env.storage()
            .instance()
            .set(&TOTAL_CUSTODIED, &custodied.saturating_add(token_ids.len()));

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Start the unbonding clock on each of `token_ids`.
    ///
    /// Custody does not move yet, and accrual earned up to this ledger stays
    /// claimable; the records simply stop accruing past the request.
    /// Available while paused.
    pub fn unstake(env: Env, staker: Address, token_ids: Vec<u32>) -> Result<(), ContractError> {
        Self::load_config(&env)?;
        staker.require_auth();

        if token_ids.is_empty() {
            return Err(ContractError::InvalidInput);
        }

        let current = env.ledger().sequence();
        let stakes_key = (STAKES, staker.clone());
        let mut records: Vec<StakeRecord> = env
            .storage()
            .persistent()
            .get(&stakes_key)
            .unwrap_or(Vec::new(&env));

        for token_id in token_ids.iter() {
            let idx = Self::find_live(&records, token_id).ok_or(ContractError::NotStaked)?;
            let mut record = records.get(idx).ok_or(ContractError::NotStaked)?;

            if record.unstaked_at_block != 0 {
                return Err(ContractError::AlreadyUnstaking);
            }

            record.unstaked_at_block = current;
            records.set(idx, record);

            events::publish_unstake_requested(&env, staker.clone(), token_id, current);
        }

        env.storage().persistent().set(&stakes_key, &records);

        Ok(())
    }

    /// Return a fully unbonded NFT to its owner.
    ///
    /// Fails with `UnbondingNotElapsed` while the unbonding clock is running
    /// (or was never started), and with `NotFoundOrAlreadyWithdrawn` once the
    /// record is gone. Available while paused.
    pub fn withdraw_nft(env: Env, staker: Address, token_id: u32) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        staker.require_auth();

        let current = env.ledger().sequence();
        let stakes_key = (STAKES, staker.clone());
        let mut records: Vec<StakeRecord> = env
            .storage()
            .persistent()
            .get(&stakes_key)
            .unwrap_or(Vec::new(&env));

        let idx = Self::find_live(&records, token_id)
            .ok_or(ContractError::NotFoundOrAlreadyWithdrawn)?;
        let mut record = records
            .get(idx)
            .ok_or(ContractError::NotFoundOrAlreadyWithdrawn)?;

        if record.unstaked_at_block == 0
            || current.saturating_sub(record.unstaked_at_block) < config.unbonding_period
        {
            return Err(ContractError::UnbondingNotElapsed);
        }

        // Finalize ledger state before custody leaves the contract
        // (checks-effects-interactions).
        record.withdrawn = true;
        records.set(idx, record);
        env.storage().persistent().set(&stakes_key, &records);

        let custodied: u32 = env.storage().instance().get(&TOTAL_CUSTODIED).unwrap_or(0);
        env.storage()
            .instance()
            .set(&TOTAL_CUSTODIED, &custodied.saturating_sub(1));

        NftRegistryClient::new(&env, &config.nft_contract).transfer(
            &env.current_contract_address(),
            &staker,
            &token_id,
        );

        events::publish_nft_withdrawn(&env, staker, token_id, current);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything the caller's stakes have accrued.
    ///
    /// A record is eligible once `reward_claim_delay` ledgers have passed
    /// since it was staked; eligible records are settled up to their
    /// effective end (the unstake request, or now) and their claim cursor
    /// advances. All-or-nothing: the pool must cover the full sum.
    /// Available while paused.
    pub fn claim_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        staker.require_auth();

        let current = env.ledger().sequence();
        let stakes_key = (STAKES, staker.clone());
        let mut records: Vec<StakeRecord> = env
            .storage()
            .persistent()
            .get(&stakes_key)
            .unwrap_or(Vec::new(&env));

        let mut total: i128 = 0;
        let mut any_live = false;
        let mut any_eligible = false;

        for idx in 0..records.len() {
            if let Some(mut record) = records.get(idx) {
                if record.withdrawn {
                    continue;
                }
                any_live = true;

                if current.saturating_sub(record.staked_at_block) < config.reward_claim_delay {
                    continue;
                }
                any_eligible = true;

                let end = rewards::effective_end_block(record.unstaked_at_block, current);
                total = total.saturating_add(rewards::accrued(
                    config.reward_per_block,
                    record.last_claim_block,
                    end,
                ));

                record.last_claim_block = end;
                records.set(idx, record);
            }
        }

        if !any_live {
            return Err(ContractError::NotStaked);
        }
        if !any_eligible {
            return Err(ContractError::ClaimDelayNotElapsed);
        }

        if total == 0 {
            // Nothing accrued since the last claim — return without reverting.
            return Ok(0);
        }

        let reward = token::Client::new(&env, &config.reward_token);
        if reward.balance(&env.current_contract_address()) < total {
            return Err(ContractError::InsufficientRewardPool);
        }

        // Persist the advanced claim cursors before paying out.
        env.storage().persistent().set(&stakes_key, &records);
        reward.transfer(&env.current_contract_address(), &staker, &total);

        events::publish_rewards_claimed(&env, staker, total, current);

        Ok(total)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the caller-visible stakes of `owner`, oldest first.
    pub fn get_stakes(env: Env, owner: Address) -> Vec<StakeView> {
        let records: Vec<StakeRecord> = env
            .storage()
            .persistent()
            .get(&(STAKES, owner))
            .unwrap_or(Vec::new(&env));

        let mut views = Vec::new(&env);
        for record in records.iter() {
            if record.withdrawn {
                continue;
            }
            views.push_back(StakeView {
                token_id: record.token_id,
                staked_at_block: record.staked_at_block,
                unstaked_at_block: record.unstaked_at_block,
                last_claim_block: record.last_claim_block,
            });
        }
        views
    }

    /// Real-time unclaimed accrual for `owner` across all live stakes.
    ///
    /// The claim delay gates collection, not visibility, so this reports
    /// accrual for records still inside the delay window too.
    pub fn get_pending_rewards(env: Env, owner: Address) -> i128 {
        let config = match Self::load_config(&env) {
            Ok(config) => config,
            Err(_) => return 0,
        };

        let records: Vec<StakeRecord> = env
            .storage()
            .persistent()
            .get(&(STAKES, owner))
            .unwrap_or(Vec::new(&env));

        let current = env.ledger().sequence();
        let mut total: i128 = 0;
        for record in records.iter() {
            if record.withdrawn {
                continue;
            }
            let end = rewards::effective_end_block(record.unstaked_at_block, current);
            total = total.saturating_add(rewards::accrued(
                config.reward_per_block,
                record.last_claim_block,
                end,
            ));
        }
        total
    }

    pub fn get_config(env: Env) -> Result<StakingConfig, ContractError> {
        Self::load_config(&env)
    }

    pub fn get_reward_per_block(env: Env) -> Result<i128, ContractError> {
        Ok(Self::load_config(&env)?.reward_per_block)
    }

    /// Count of NFTs currently held in custody.
    pub fn get_total_custodied(env: Env) -> u32 {
        env.storage().instance().get(&TOTAL_CUSTODIED).unwrap_or(0)
    }

    pub fn is_paused(env: Env) -> Result<bool, ContractError> {
        Ok(Self::load_config(&env)?.paused)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&CONFIG)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(Self::load_config(&env)?.admin)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Stop accepting new stakes. Unstake, withdrawal and claiming remain
    /// open so holders are never trapped.
    pub fn pause_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        let mut config = Self::load_config(&env)?;
        caller.require_auth();
        Self::require_admin(&config, &caller)?;

        config.paused = true;
        env.storage().instance().set(&CONFIG, &config);

        events::publish_staking_paused(&env, caller);

        Ok(())
    }

    pub fn unpause_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        let mut config = Self::load_config(&env)?;
        caller.require_auth();
        Self::require_admin(&config, &caller)?;

        config.paused = false;
        env.storage().instance().set(&CONFIG, &config);

        events::publish_staking_unpaused(&env, caller);

        Ok(())
    }

    /// Change the per-ledger reward rate, effective immediately.
    ///
    /// There is no accumulator flush: each record's pending interval is
    /// priced wholesale at whatever rate is current when it is claimed.
    pub fn set_reward_per_block(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), ContractError> {
        let mut config = Self::load_config(&env)?;
        caller.require_auth();
        Self::require_admin(&config, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        config.reward_per_block = new_rate;
        env.storage().instance().set(&CONFIG, &config);

        events::publish_reward_rate_set(&env, new_rate);

        Ok(())
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        current_admin.require_auth();
        Self::require_admin(&config, &current_admin)?;

        env.storage().instance().set(&PENDING_ADMIN, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can
    /// call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let mut config = Self::load_config(&env)?;
        new_admin.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        if new_admin != pending {
            return Err(ContractError::NotOwner);
        }

        let old_admin = config.admin.clone();
        config.admin = new_admin.clone();
        env.storage().instance().set(&CONFIG, &config);
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        current_admin.require_auth();
        Self::require_admin(&config, &current_admin)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn load_config(env: &Env) -> Result<StakingConfig, ContractError> {
        env.storage()
            .instance()
            .get(&CONFIG)
            .ok_or(ContractError::NotInitialized)
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(config: &StakingConfig, caller: &Address) -> Result<(), ContractError> {
        if *caller != config.admin {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }

    /// Index of the non-withdrawn record for `token_id`, if any.
    fn find_live(records: &Vec<StakeRecord>, token_id: u32) -> Option<u32> {
        for (idx, record) in records.iter().enumerate() {
            if record.token_id == token_id && !record.withdrawn {
                return Some(idx as u32);
            }
        }
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_pause;
