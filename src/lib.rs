// src/lib.rs - ERC-20 Governance Token for Arbitrum Stylus
// Role-gated mint/burn, pausable transfers and checkpointed vote delegation

#![cfg_attr(all(not(feature = "export-abi"), not(test)), no_main)]
extern crate alloc;

pub mod access;
pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod roles;
pub mod votes;

use alloc::string::String;
use openzeppelin_stylus::{
    access::{
        control::{AccessControl, IAccessControl},
        ownable::{IOwnable, Ownable, OwnableInvalidOwner},
    },
    token::erc20::{ERC20InvalidSender, ERC20InvalidSpender, IErc20},
    utils::{
        pausable::{IPausable, Pausable},
        structs::checkpoints::{Trace, S208},
    },
};
use stylus_sdk::{
    alloy_primitives::{aliases::U8, Address, B256, U256},
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageMap, StorageString, StorageU256, StorageU8},
};

use crate::errors::{AlreadyInitialized, ERC20FailedDecreaseAllowance, TokenError};

pub use crate::config::{TokenConfig, UVW_TOKEN, XYZ_TOKEN};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================

#[entrypoint]
#[storage]
pub struct GovToken {
    // ERC-20 Core State
    pub(crate) total_supply: StorageU256,
    pub(crate) balances: StorageMap<Address, StorageU256>,
    pub(crate) allowances: StorageMap<Address, StorageMap<Address, StorageU256>>,

    // Token Metadata
    pub(crate) initialized: StorageBool,
    pub(crate) name: StorageString,
    pub(crate) symbol: StorageString,
    pub(crate) decimals: StorageU8,

    // Ownership, roles and pause flag
    pub(crate) ownable: Ownable,
    pub(crate) access: AccessControl,
    pub(crate) pausable: Pausable,

    // Votes
    pub(crate) delegatees: StorageMap<Address, StorageAddress>,
    pub(crate) delegate_checkpoints: StorageMap<Address, Trace<S208>>,
    pub(crate) total_supply_checkpoints: Trace<S208>,
}

// ============================================================================
// IMPLEMENTATION
// ============================================================================

#[public]
#[implements(IErc20<Error = TokenError>, IAccessControl<Error = TokenError>, IPausable)]
impl GovToken {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the token with metadata and initial supply.
    /// The owner becomes default admin and minter. Can only be called once.
    pub fn initialize(
        &mut self,
        token_name: String,
        token_symbol: String,
        token_decimals: u8,
        initial_supply: U256,
        initial_owner: Address,
    ) -> Result<(), TokenError> {
        if self.initialized.get() {
            return Err(TokenError::AlreadyInitialized(AlreadyInitialized {}));
        }

        if initial_owner.is_zero() {
            return Err(TokenError::OwnableInvalidOwner(OwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }

        self.name.set_str(&token_name);
        self.symbol.set_str(&token_symbol);
        self.decimals.set(U8::from(token_decimals));
        self.initialized.set(true);

        self.ownable._transfer_ownership(initial_owner);
        self.access._grant_role(roles::DEFAULT_ADMIN_ROLE, initial_owner);
        self.access._grant_role(roles::MINTER_ROLE, initial_owner);

        if !initial_supply.is_zero() {
            self.mint_internal(initial_owner, initial_supply)?;
        }

        Ok(())
    }

    // ========================================================================
    // ERC-20 METADATA METHODS
    // ========================================================================

    /// Returns the name of the token
    pub fn name(&self) -> String {
        self.name.get_string()
    }

    /// Returns the symbol of the token
    pub fn symbol(&self) -> String {
        self.symbol.get_string()
    }

    /// Returns the number of decimals the token uses
    pub fn decimals(&self) -> u8 {
        self.decimals.get().to::<u8>()
    }

    // ========================================================================
    // SAFE ALLOWANCE METHODS
    // ========================================================================

    /// Atomically increases the allowance granted to `spender` by the caller
    pub fn increase_allowance(
        &mut self,
        spender: Address,
        delta: U256,
    ) -> Result<bool, TokenError> {
        let owner = self.vm().msg_sender();
        let new_allowance = self
            .allowances
            .getter(owner)
            .get(spender)
            .checked_add(delta)
            .ok_or(TokenError::invalid_amount())?;

        self.approve_internal(owner, spender, new_allowance, true)?;
        Ok(true)
    }

    /// Atomically decreases the allowance granted to `spender` by the caller
    pub fn decrease_allowance(
        &mut self,
        spender: Address,
        delta: U256,
    ) -> Result<bool, TokenError> {
        let owner = self.vm().msg_sender();

        if spender.is_zero() {
            return Err(TokenError::InvalidSpender(ERC20InvalidSpender { spender }));
        }

        let current_allowance = self.allowances.getter(owner).get(spender);
        let new_allowance = current_allowance.checked_sub(delta).ok_or(
            TokenError::FailedDecreaseAllowance(ERC20FailedDecreaseAllowance {
                spender,
                current_allowance,
                requested_decrease: delta,
            }),
        )?;

        self.approve_internal(owner, spender, new_allowance, true)?;
        Ok(true)
    }

    // ========================================================================
    // MINT & BURN
    // ========================================================================

    /// Mints `value` tokens to `to`. Caller needs `MINTER_ROLE`.
    pub fn mint(&mut self, to: Address, value: U256) -> Result<bool, TokenError> {
        self.only_role(roles::MINTER_ROLE)?;
        self.mint_internal(to, value)?;
        Ok(true)
    }

    /// Burns `value` tokens held by `from`. Caller needs `BURNER_ROLE`;
    /// no allowance is consumed.
    pub fn burn_token(&mut self, from: Address, value: U256) -> Result<bool, TokenError> {
        self.only_role(roles::BURNER_ROLE)?;
        self.burn_internal(from, value)?;
        Ok(true)
    }

    /// Burns `value` tokens from the caller's account
    pub fn burn(&mut self, value: U256) -> Result<bool, TokenError> {
        let from = self.vm().msg_sender();
        self.burn_internal(from, value)?;
        Ok(true)
    }

    /// Burns `value` tokens from `account` using the caller's allowance
    pub fn burn_from(&mut self, account: Address, value: U256) -> Result<bool, TokenError> {
        if account.is_zero() {
            return Err(TokenError::InvalidSender(ERC20InvalidSender { sender: account }));
        }
        let spender = self.vm().msg_sender();
        self.spend_allowance(account, spender, value)?;
        self.burn_internal(account, value)?;
        Ok(true)
    }

    // ========================================================================
    // ACCESS CONTROL
    // ========================================================================

    #[selector(name = "DEFAULT_ADMIN_ROLE")]
    pub fn default_admin_role(&self) -> B256 {
        roles::DEFAULT_ADMIN_ROLE
    }

    #[selector(name = "MINTER_ROLE")]
    pub fn minter_role(&self) -> B256 {
        roles::MINTER_ROLE
    }

    #[selector(name = "BURNER_ROLE")]
    pub fn burner_role(&self) -> B256 {
        roles::BURNER_ROLE
    }

    #[selector(name = "PAUSER_ROLE")]
    pub fn pauser_role(&self) -> B256 {
        roles::PAUSER_ROLE
    }

    /// Grants a role by name, e.g. `"MINTER_ROLE"`. Same authorization as `grantRole`.
    pub fn set_role(&mut self, role_name: String, account: Address) -> Result<bool, TokenError> {
        self.grant_named_role(&role_name, account)?;
        Ok(true)
    }

    // ========================================================================
    // OWNERSHIP MANAGEMENT
    // ========================================================================

    /// Returns the current owner of the contract
    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    /// Transfers ownership of the contract to a new account (`new_owner`)
    /// Can only be called by the current owner. Roles stay where they are.
    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<bool, TokenError> {
        self.ownable.transfer_ownership(new_owner)?;
        Ok(true)
    }

    /// Leaves the contract without an owner
    pub fn renounce_ownership(&mut self) -> Result<bool, TokenError> {
        self.ownable.renounce_ownership()?;
        Ok(true)
    }

    // ========================================================================
    // PAUSABLE FUNCTIONALITY
    // ========================================================================

    /// Pauses the contract. Caller needs `PAUSER_ROLE`.
    pub fn pause(&mut self) -> Result<bool, TokenError> {
        self.only_role(roles::PAUSER_ROLE)?;
        self.pausable.pause()?;
        Ok(true)
    }

    /// Unpauses the contract. Caller needs `PAUSER_ROLE`.
    pub fn unpause(&mut self) -> Result<bool, TokenError> {
        self.only_role(roles::PAUSER_ROLE)?;
        self.pausable.unpause()?;
        Ok(true)
    }

    // ========================================================================
    // VOTES
    // ========================================================================

    pub fn clock(&self) -> u64 {
        self.clock_now()
    }

    #[selector(name = "CLOCK_MODE")]
    pub fn clock_mode(&self) -> String {
        String::from(votes::CLOCK_MODE)
    }

    /// Returns the account `account` has delegated its votes to
    pub fn delegates(&self, account: Address) -> Address {
        self.delegate_of(account)
    }

    /// Delegates the caller's votes to `delegatee`
    pub fn delegate(&mut self, delegatee: Address) -> Result<(), TokenError> {
        let account = self.vm().msg_sender();
        self.delegate_internal(account, delegatee)
    }

    /// Returns the current voting power of `account`
    pub fn get_votes(&self, account: Address) -> U256 {
        self.votes_of(account)
    }

    /// Returns the voting power of `account` at the end of block `timepoint`.
    /// `timepoint` must be in the past.
    pub fn get_past_votes(&self, account: Address, timepoint: U256) -> Result<U256, TokenError> {
        self.past_votes_of(account, timepoint)
    }

    /// Returns the total supply at the end of block `timepoint`.
    /// `timepoint` must be in the past.
    pub fn get_past_total_supply(&self, timepoint: U256) -> Result<U256, TokenError> {
        self.past_total_supply(timepoint)
    }

    pub fn num_checkpoints(&self, account: Address) -> Result<u32, TokenError> {
        let count = self.delegate_checkpoints.getter(account).length();
        u32::try_from(count).map_err(|_| TokenError::invalid_amount())
    }

    /// Returns the `pos`-th checkpoint of `account` as `(fromBlock, votes)`,
    /// `(0, 0)` when `pos` is out of range
    pub fn checkpoints(&self, account: Address, pos: u32) -> (u64, U256) {
        votes::checkpoint_at(&self.delegate_checkpoints.getter(account), pos)
    }
}

#[public]
impl IErc20 for GovToken {
    type Error = TokenError;

    fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(account)
    }

    /// Transfers `value` tokens from the caller to `to`
    fn transfer(&mut self, to: Address, value: U256) -> Result<bool, Self::Error> {
        let from = self.vm().msg_sender();
        self.transfer_internal(from, to, value)?;
        Ok(true)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.getter(owner).get(spender)
    }

    fn approve(&mut self, spender: Address, value: U256) -> Result<bool, Self::Error> {
        let owner = self.vm().msg_sender();
        self.approve_internal(owner, spender, value, true)?;
        Ok(true)
    }

    /// Transfers `value` tokens from `from` to `to` using the caller's allowance.
    /// An allowance of `U256::MAX` is never decreased.
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let spender = self.vm().msg_sender();
        self.spend_allowance(from, spender, value)?;
        self.transfer_internal(from, to, value)?;
        Ok(true)
    }
}

#[public]
impl IPausable for GovToken {
    /// Returns true if the contract is paused, false otherwise
    fn paused(&self) -> bool {
        self.pausable.paused()
    }
}

// ============================================================================
// UNIT TESTS
// Scenario tests mirroring deployment usage are in tests/token_tests.rs
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::OwnershipTransferred;
    use motsu::prelude::*;

    fn deployed(contract: &Contract<GovToken>, owner: Address) {
        contract
            .sender(owner)
            .initialize_with(&XYZ_TOKEN, owner)
            .motsu_expect("initialize");
    }

    #[motsu::test]
    fn test_initialize_sets_metadata_and_roles(contract: Contract<GovToken>, alice: Address) {
        deployed(&contract, alice);

        assert_eq!(contract.sender(alice).name(), "xyzToken");
        assert_eq!(contract.sender(alice).symbol(), "XYZT");
        assert_eq!(contract.sender(alice).decimals(), 10);
        assert_eq!(contract.sender(alice).owner(), alice);
        assert!(contract.sender(alice).has_role(roles::DEFAULT_ADMIN_ROLE, alice));
        assert!(contract.sender(alice).has_role(roles::MINTER_ROLE, alice));
        assert!(!contract.sender(alice).has_role(roles::PAUSER_ROLE, alice));
        assert!(!contract.sender(alice).has_role(roles::BURNER_ROLE, alice));

        contract.assert_emitted(&OwnershipTransferred {
            previous_owner: Address::ZERO,
            new_owner: alice,
        });
    }

    #[motsu::test]
    fn test_initialize_only_once(contract: Contract<GovToken>, alice: Address, bob: Address) {
        deployed(&contract, alice);

        let err = contract
            .sender(bob)
            .initialize_with(&UVW_TOKEN, bob)
            .motsu_unwrap_err();
        assert!(matches!(err, TokenError::AlreadyInitialized(_)));
        assert_eq!(contract.sender(bob).owner(), alice);
        assert_eq!(contract.sender(bob).name(), "xyzToken");
    }

    #[motsu::test]
    fn test_initialize_rejects_zero_owner(contract: Contract<GovToken>, alice: Address) {
        let err = contract
            .sender(alice)
            .initialize_with(&XYZ_TOKEN, Address::ZERO)
            .motsu_unwrap_err();
        assert!(matches!(err, TokenError::OwnableInvalidOwner(_)));
    }

    #[motsu::test]
    fn test_initial_supply_goes_to_owner(contract: Contract<GovToken>, alice: Address) {
        let config = TokenConfig {
            initial_supply: 5_000,
            ..UVW_TOKEN
        };
        contract
            .sender(alice)
            .initialize_with(&config, alice)
            .motsu_unwrap();

        assert_eq!(contract.sender(alice).total_supply(), U256::from(5_000));
        assert_eq!(contract.sender(alice).balance_of(alice), U256::from(5_000));
    }

    #[motsu::test]
    fn test_role_constant_selectors(contract: Contract<GovToken>, alice: Address) {
        assert_eq!(contract.sender(alice).default_admin_role(), B256::ZERO);
        assert_eq!(contract.sender(alice).minter_role(), roles::MINTER_ROLE);
        assert_eq!(contract.sender(alice).burner_role(), roles::BURNER_ROLE);
        assert_eq!(contract.sender(alice).pauser_role(), roles::PAUSER_ROLE);
    }

    #[motsu::test]
    fn test_set_role_unknown_name(contract: Contract<GovToken>, alice: Address, bob: Address) {
        deployed(&contract, alice);

        let err = contract
            .sender(alice)
            .set_role(String::from("OWNER_ROLE"), bob)
            .motsu_unwrap_err();
        match err {
            TokenError::UnknownRole(err) => assert_eq!(err.name, "OWNER_ROLE"),
            other => panic!("expected UnknownRole, got {other:?}"),
        }
    }

    #[motsu::test]
    fn test_decrease_allowance_below_zero(
        contract: Contract<GovToken>,
        alice: Address,
        bob: Address,
    ) {
        deployed(&contract, alice);

        contract.sender(alice).approve(bob, U256::from(10)).motsu_unwrap();
        let err = contract
            .sender(alice)
            .decrease_allowance(bob, U256::from(11))
            .motsu_unwrap_err();
        match err {
            TokenError::FailedDecreaseAllowance(err) => {
                assert_eq!(err.current_allowance, U256::from(10));
                assert_eq!(err.requested_decrease, U256::from(11));
            }
            other => panic!("expected FailedDecreaseAllowance, got {other:?}"),
        }
        contract
            .sender(alice)
            .increase_allowance(bob, U256::from(5))
            .motsu_unwrap();
        assert_eq!(contract.sender(alice).allowance(alice, bob), U256::from(15));
    }

    #[motsu::test]
    fn test_clock_mode(contract: Contract<GovToken>, alice: Address) {
        assert_eq!(contract.sender(alice).clock_mode(), "mode=blocknumber&from=default");
    }
}
