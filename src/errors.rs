// src/errors.rs - Solidity-compatible revert reasons
//
// ERC-20, access control, ownership, pause and checkpoint errors come from
// openzeppelin-stylus so the revert ABI matches the audited contracts. Only
// the token-specific ones are declared here.

use alloc::string::String;
use openzeppelin_stylus::{
    access::{
        control::{self, AccessControlBadConfirmation, AccessControlUnauthorizedAccount},
        ownable::{self, OwnableInvalidOwner, OwnableUnauthorizedAccount},
    },
    token::erc20::{
        ERC20InsufficientAllowance, ERC20InsufficientBalance, ERC20InvalidApprover,
        ERC20InvalidReceiver, ERC20InvalidSender, ERC20InvalidSpender,
    },
    utils::{
        pausable::{self, EnforcedPause, ExpectedPause},
        structs::checkpoints::{self, CheckpointUnorderedInsertion},
    },
};
use stylus_sdk::{alloy_sol_types::sol, prelude::*};

sol! {
    // ERC-20 extensions
    #[derive(Debug)]
    error ERC20FailedDecreaseAllowance(address spender, uint256 current_allowance, uint256 requested_decrease);
    #[derive(Debug)]
    error ERC20ExceededSafeSupply(uint256 increased_supply, uint256 cap);

    // Role lookup by name
    #[derive(Debug)]
    error UnknownRole(string name);

    // Votes
    #[derive(Debug)]
    error ERC5805FutureLookup(uint256 timepoint, uint64 clock);

    // Lifecycle & arithmetic
    #[derive(Debug)]
    error AlreadyInitialized();
    #[derive(Debug)]
    error InvalidAmount();
}

#[derive(SolidityError, Debug)]
pub enum TokenError {
    InsufficientBalance(ERC20InsufficientBalance),
    InvalidSender(ERC20InvalidSender),
    InvalidReceiver(ERC20InvalidReceiver),
    InsufficientAllowance(ERC20InsufficientAllowance),
    InvalidApprover(ERC20InvalidApprover),
    InvalidSpender(ERC20InvalidSpender),
    FailedDecreaseAllowance(ERC20FailedDecreaseAllowance),
    ExceededSafeSupply(ERC20ExceededSafeSupply),
    UnauthorizedAccount(AccessControlUnauthorizedAccount),
    BadConfirmation(AccessControlBadConfirmation),
    UnknownRole(UnknownRole),
    OwnableUnauthorizedAccount(OwnableUnauthorizedAccount),
    OwnableInvalidOwner(OwnableInvalidOwner),
    EnforcedPause(EnforcedPause),
    ExpectedPause(ExpectedPause),
    FutureLookup(ERC5805FutureLookup),
    CheckpointUnorderedInsertion(CheckpointUnorderedInsertion),
    AlreadyInitialized(AlreadyInitialized),
    InvalidAmount(InvalidAmount),
}

impl TokenError {
    /// Overflow or underflow in supply, balance or vote arithmetic.
    pub(crate) fn invalid_amount() -> Self {
        TokenError::InvalidAmount(InvalidAmount {})
    }

    pub(crate) fn unknown_role(name: &str) -> Self {
        TokenError::UnknownRole(UnknownRole {
            name: String::from(name),
        })
    }
}

impl From<control::Error> for TokenError {
    fn from(err: control::Error) -> Self {
        match err {
            control::Error::UnauthorizedAccount(e) => TokenError::UnauthorizedAccount(e),
            control::Error::BadConfirmation(e) => TokenError::BadConfirmation(e),
        }
    }
}

impl From<ownable::Error> for TokenError {
    fn from(err: ownable::Error) -> Self {
        match err {
            ownable::Error::UnauthorizedAccount(e) => TokenError::OwnableUnauthorizedAccount(e),
            ownable::Error::InvalidOwner(e) => TokenError::OwnableInvalidOwner(e),
        }
    }
}

impl From<pausable::Error> for TokenError {
    fn from(err: pausable::Error) -> Self {
        match err {
            pausable::Error::EnforcedPause(e) => TokenError::EnforcedPause(e),
            pausable::Error::ExpectedPause(e) => TokenError::ExpectedPause(e),
        }
    }
}

impl From<checkpoints::Error> for TokenError {
    fn from(err: checkpoints::Error) -> Self {
        match err {
            checkpoints::Error::CheckpointUnorderedInsertion(e) => {
                TokenError::CheckpointUnorderedInsertion(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylus_sdk::alloy_primitives::{Address, B256};

    #[test]
    fn test_library_errors_keep_their_variant() {
        let account = Address::from([7u8; 20]);

        let err: TokenError = control::Error::UnauthorizedAccount(AccessControlUnauthorizedAccount {
            account,
            needed_role: B256::ZERO,
        })
        .into();
        assert!(matches!(err, TokenError::UnauthorizedAccount(e) if e.account == account));

        let err: TokenError = ownable::Error::InvalidOwner(OwnableInvalidOwner {
            owner: Address::ZERO,
        })
        .into();
        assert!(matches!(err, TokenError::OwnableInvalidOwner(_)));

        let err: TokenError = pausable::Error::ExpectedPause(ExpectedPause {}).into();
        assert!(matches!(err, TokenError::ExpectedPause(_)));
    }

    #[test]
    fn test_unknown_role_carries_name() {
        match TokenError::unknown_role("OWNER_ROLE") {
            TokenError::UnknownRole(err) => assert_eq!(err.name, "OWNER_ROLE"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
