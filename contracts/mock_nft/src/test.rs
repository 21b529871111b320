extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{Error, MockNft, MockNftClient};

fn setup() -> (Env, MockNftClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MockNft, ());
    let client = MockNftClient::new(&env, &contract_id);

    (env, client)
}

#[test]
fn test_mint_and_owner_of() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    client.mint(&alice, &1);

    assert_eq!(client.owner_of(&1), alice);
}

#[test]
fn test_mint_twice_fails() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    client.mint(&alice, &1);

    let result = client.try_mint(&alice, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::AlreadyMinted),
        _ => unreachable!("Expected AlreadyMinted error"),
    }
}

#[test]
fn test_transfer_moves_ownership() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&alice, &1);

    client.transfer(&alice, &bob, &1);
    assert_eq!(client.owner_of(&1), bob);
}

#[test]
fn test_transfer_by_non_owner_fails() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&alice, &1);

    let result = client.try_transfer(&bob, &alice, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::NotOwner),
        _ => unreachable!("Expected NotOwner error"),
    }
}

#[test]
fn test_transfer_unknown_token_fails() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let result = client.try_transfer(&alice, &bob, &99);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::TokenNotFound),
        _ => unreachable!("Expected TokenNotFound error"),
    }
}
