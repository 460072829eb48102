// src/events.rs - EVM log definitions
//
// Every event the token emits. ERC-20, role, ownership and pause events are
// the openzeppelin-stylus definitions; the vote events are declared here.

use stylus_sdk::alloy_sol_types::sol;

pub use openzeppelin_stylus::{
    access::{
        control::{RoleGranted, RoleRevoked},
        ownable::OwnershipTransferred,
    },
    token::erc20::{Approval, Transfer},
    utils::pausable::{Paused, Unpaused},
};

sol! {
    // Votes
    #[derive(Debug, PartialEq, Eq)]
    event DelegateChanged(address indexed delegator, address indexed from_delegate, address indexed to_delegate);
    #[derive(Debug, PartialEq, Eq)]
    event DelegateVotesChanged(address indexed delegate, uint256 previous_votes, uint256 new_votes);
}
