use soroban_sdk::{contractclient, Address, Env};

/// Capability interface over the external NFT registry.
///
/// The ledger never embeds NFT bookkeeping; it only needs custody to move.
/// Ownership and approval enforcement stay inside the registry, which
/// rejects the call when the sender lacks either. Tests inject an in-memory
/// registry implementing the same surface.
#[contractclient(name = "NftRegistryClient")]
pub trait NftRegistry {
    /// Move `token_id` from `from` to `to`. Fails unless `from` owns the
    /// token and authorized the movement.
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
}
