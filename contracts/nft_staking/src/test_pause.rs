#![cfg(test)]

use mock_nft::{MockNft, MockNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    vec, Address, Env,
};

use crate::{ContractError, NftStakingContract, NftStakingContractClient};

fn setup_test() -> (
    Env,
    NftStakingContractClient<'static>,
    MockNftClient<'static>,
    Address, // admin
) {
    let env = Env::default();
    env.mock_all_auths();

    let nft_id = env.register(MockNft, ());
    let nft = MockNftClient::new(&env, &nft_id);

    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(NftStakingContract, ());
    let client = NftStakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &nft_id, &reward_token, &1, &5, &0);

    StellarAssetClient::new(&env, &reward_token)
        .mock_all_auths()
        .mint(&contract_id, &1_000_000i128);

    (env, client, nft, admin)
}

fn set_sequence(env: &Env, sequence: u32) {
    env.ledger().with_mut(|li| li.sequence_number = sequence);
}

#[test]
fn test_pause_blocks_stake() {
    let (env, client, nft, admin) = setup_test();

    let staker = Address::generate(&env);
    nft.mint(&staker, &1);

    client.pause_staking(&admin);
    assert!(client.is_paused());

    let res = client.try_stake(&staker, &vec![&env, 1u32]);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Paused);

    // The token never entered custody.
    assert_eq!(nft.owner_of(&1), staker);
}

#[test]
fn test_unpause_restores_staking() {
    let (env, client, nft, admin) = setup_test();

    let staker = Address::generate(&env);
    nft.mint(&staker, &1);

    client.pause_staking(&admin);
    client.unpause_staking(&admin);
    assert!(!client.is_paused());

    client.stake(&staker, &vec![&env, 1u32]);
    assert_eq!(client.get_total_custodied(), 1);
}

#[test]
fn test_exit_path_open_while_paused() {
    let (env, client, nft, admin) = setup_test();

    let staker = Address::generate(&env);
    nft.mint(&staker, &1);

    set_sequence(&env, 10);
    client.stake(&staker, &vec![&env, 1u32]);

    // Pausing must never trap a holder: unstake, claim and withdraw all
    // keep working.
    client.pause_staking(&admin);

    set_sequence(&env, 20);
    client.unstake(&staker, &vec![&env, 1u32]);
    assert_eq!(client.claim_rewards(&staker), 10);

    set_sequence(&env, 25);
    client.withdraw_nft(&staker, &1);
    assert_eq!(nft.owner_of(&1), staker);
}

#[test]
fn test_unauthorized_pause() {
    let (env, client, _nft, _admin) = setup_test();

    let intruder = Address::generate(&env);

    let res = client.try_pause_staking(&intruder);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::NotOwner);

    let res = client.try_unpause_staking(&intruder);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::NotOwner);
}
