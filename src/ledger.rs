// src/ledger.rs - Balance, supply and allowance bookkeeping
//
// All balance movements go through `update`: a zero `from` mints, a zero
// `to` burns. The sum of balances equals the total supply after every call,
// and vote checkpoints move with the balances.

use stylus_sdk::{
    alloy_primitives::{Address, U256},
    prelude::*,
    stylus_core::log,
};

use openzeppelin_stylus::token::erc20::{
    ERC20InsufficientAllowance, ERC20InsufficientBalance, ERC20InvalidApprover,
    ERC20InvalidReceiver, ERC20InvalidSender, ERC20InvalidSpender,
};

use crate::{
    errors::TokenError,
    events::{Approval, Transfer},
    GovToken,
};

impl GovToken {
    /// Moves `value` from `from` to `to`, minting or burning on zero addresses.
    pub(crate) fn update(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        self.pausable.when_not_paused()?;

        if from == Address::ZERO {
            let new_supply = self
                .total_supply
                .get()
                .checked_add(value)
                .ok_or(TokenError::invalid_amount())?;
            self.total_supply.set(new_supply);
        } else {
            let from_balance = self.balances.get(from);
            if from_balance < value {
                return Err(TokenError::InsufficientBalance(ERC20InsufficientBalance {
                    sender: from,
                    balance: from_balance,
                    needed: value,
                }));
            }
            self.balances.setter(from).set(from_balance - value);
        }

        if to == Address::ZERO {
            let new_supply = self
                .total_supply
                .get()
                .checked_sub(value)
                .ok_or(TokenError::invalid_amount())?;
            self.total_supply.set(new_supply);
        } else {
            let new_balance = self
                .balances
                .get(to)
                .checked_add(value)
                .ok_or(TokenError::invalid_amount())?;
            self.balances.setter(to).set(new_balance);
        }

        log(self.vm(), Transfer { from, to, value });

        self.track_supply_votes(from, to, value)?;
        self.transfer_voting_units(from, to, value)
    }

    /// Transfer between two non-zero accounts.
    pub(crate) fn transfer_internal(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        if from.is_zero() {
            return Err(TokenError::InvalidSender(ERC20InvalidSender { sender: from }));
        }
        if to.is_zero() {
            return Err(TokenError::InvalidReceiver(ERC20InvalidReceiver { receiver: to }));
        }
        self.update(from, to, value)
    }

    pub(crate) fn mint_internal(&mut self, account: Address, value: U256) -> Result<(), TokenError> {
        if account == Address::ZERO {
            return Err(TokenError::InvalidReceiver(ERC20InvalidReceiver {
                receiver: account,
            }));
        }
        self.update(Address::ZERO, account, value)
    }

    pub(crate) fn burn_internal(&mut self, account: Address, value: U256) -> Result<(), TokenError> {
        if account == Address::ZERO {
            return Err(TokenError::InvalidSender(ERC20InvalidSender { sender: account }));
        }
        self.update(account, Address::ZERO, value)
    }

    /// Sets the allowance of `spender` over `owner`'s tokens.
    pub(crate) fn approve_internal(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
        emit_event: bool,
    ) -> Result<(), TokenError> {
        if owner == Address::ZERO {
            return Err(TokenError::InvalidApprover(ERC20InvalidApprover { approver: owner }));
        }
        if spender == Address::ZERO {
            return Err(TokenError::InvalidSpender(ERC20InvalidSpender { spender }));
        }

        self.allowances.setter(owner).setter(spender).set(value);

        if emit_event {
            log(self.vm(), Approval { owner, spender, value });
        }
        Ok(())
    }

    /// Consumes `value` of `spender`'s allowance. `U256::MAX` never decreases.
    pub(crate) fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        let current_allowance = self.allowances.getter(owner).get(spender);
        if current_allowance == U256::MAX {
            return Ok(());
        }

        let new_allowance = current_allowance.checked_sub(value).ok_or(
            TokenError::InsufficientAllowance(ERC20InsufficientAllowance {
                spender,
                allowance: current_allowance,
                needed: value,
            }),
        )?;

        self.approve_internal(owner, spender, new_allowance, false)
    }
}
