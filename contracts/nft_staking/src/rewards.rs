//! Per-record reward accrual.
//!
//! Each stake earns `reward_per_block` for every ledger in
//! `[last_claim_block, effective_end)`, where the effective end freezes at
//! the unstake request. Claims settle the whole pending interval at the
//! rate current at claim time; rate changes are not prorated.

/// End of the rewardable interval for a record: the unstake request if one
/// was made, otherwise the current ledger.
pub fn effective_end_block(unstaked_at_block: u32, current_block: u32) -> u32 {
    if unstaked_at_block != 0 {
        unstaked_at_block
    } else {
        current_block
    }
}

/// Reward earned over `[last_claim_block, effective_end_block)`.
///
/// Clamps to zero when the interval is empty or inverted, so settling the
/// same record twice in one ledger pays nothing extra.
pub fn accrued(reward_per_block: i128, last_claim_block: u32, effective_end_block: u32) -> i128 {
    let elapsed = effective_end_block.saturating_sub(last_claim_block);
    reward_per_block.saturating_mul(elapsed as i128)
}
