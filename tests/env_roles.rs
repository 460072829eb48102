// tests/env_roles.rs - Role ids published to deployment tooling
// Deployment scripts read role hashes from the environment; they must match
// the ids compiled into the contract.

use alloy_primitives::{keccak256, B256};
use stylus_gov_token::roles::{role_id, BURNER_ROLE, MINTER_ROLE, PAUSER_ROLE};

fn env_role(key: &str) -> B256 {
    dotenv::from_filename(".env.example").ok();
    let value = std::env::var(key).unwrap_or_else(|_| panic!("{key} missing from .env.example"));
    let bytes = hex::decode(value.trim_start_matches("0x")).expect("role id is hex");
    B256::from_slice(&bytes)
}

#[test]
fn test_env_role_ids_match_contract() {
    assert_eq!(env_role("MINTER_ROLE"), MINTER_ROLE);
    assert_eq!(env_role("BURNER_ROLE"), BURNER_ROLE);
    assert_eq!(env_role("PAUSER_ROLE"), PAUSER_ROLE);
}

#[test]
fn test_named_roles_hash_to_their_ids() {
    for name in ["MINTER_ROLE", "BURNER_ROLE", "PAUSER_ROLE"] {
        assert_eq!(role_id(name), Some(keccak256(name.as_bytes())));
    }
}
