// src/votes.rs - Delegated voting power with block checkpoints
//
// One token is one vote, but only once its holder has delegated (possibly to
// themselves). Each delegatee has a `Trace` of its voting power, and the
// total supply has its own `Trace`, both keyed by block number. The traces
// are openzeppelin-stylus `Trace<S208>`: 48-bit block keys, 208-bit values.

use openzeppelin_stylus::utils::structs::checkpoints::{Trace, S208};
use stylus_sdk::{
    alloy_primitives::{
        aliases::{U208, U32, U48},
        Address, U256,
    },
    prelude::*,
    stylus_core::log,
};

use crate::{
    errors::{ERC20ExceededSafeSupply, ERC5805FutureLookup, TokenError},
    events::{DelegateChanged, DelegateVotesChanged},
    GovToken,
};

/// Clock mode reported by `CLOCK_MODE()`.
pub const CLOCK_MODE: &str = "mode=blocknumber&from=default";

/// Largest supply the checkpoints can hold (`2^208 - 1`).
pub fn max_supply() -> U256 {
    U256::from(U208::MAX)
}

fn to_votes(value: U256) -> Result<U208, TokenError> {
    if value > max_supply() {
        return Err(TokenError::invalid_amount());
    }
    Ok(U208::saturating_from(value))
}

/// `(block, votes)` of the checkpoint at `pos`, `(0, 0)` past the end.
pub(crate) fn checkpoint_at(trace: &Trace<S208>, pos: u32) -> (u64, U256) {
    if U256::from(pos) >= trace.length() {
        return (0, U256::ZERO);
    }
    let (key, value) = trace.at(U32::from(pos));
    (key.to::<u64>(), U256::from(value))
}

impl GovToken {
    /// Current timepoint: the block number.
    pub(crate) fn clock_now(&self) -> u64 {
        self.vm().block_number()
    }

    fn clock_key(&self) -> U48 {
        U48::saturating_from(self.clock_now())
    }

    /// Reverts if `timepoint` is not strictly in the past.
    pub(crate) fn past_timepoint(&self, timepoint: U256) -> Result<U48, TokenError> {
        let clock = self.clock_now();
        if timepoint >= U256::from(clock) {
            return Err(TokenError::FutureLookup(ERC5805FutureLookup { timepoint, clock }));
        }
        Ok(U48::saturating_from(timepoint))
    }

    pub(crate) fn delegate_of(&self, account: Address) -> Address {
        self.delegatees.get(account)
    }

    pub(crate) fn votes_of(&self, account: Address) -> U256 {
        U256::from(self.delegate_checkpoints.getter(account).latest())
    }

    pub(crate) fn past_votes_of(&self, account: Address, timepoint: U256) -> Result<U256, TokenError> {
        let key = self.past_timepoint(timepoint)?;
        let votes = self
            .delegate_checkpoints
            .getter(account)
            .upper_lookup_recent(key);
        Ok(U256::from(votes))
    }

    pub(crate) fn past_total_supply(&self, timepoint: U256) -> Result<U256, TokenError> {
        let key = self.past_timepoint(timepoint)?;
        Ok(U256::from(self.total_supply_checkpoints.upper_lookup_recent(key)))
    }

    /// Points `account`'s votes at `delegatee` and moves its balance along.
    pub(crate) fn delegate_internal(
        &mut self,
        account: Address,
        delegatee: Address,
    ) -> Result<(), TokenError> {
        let old_delegate = self.delegate_of(account);
        self.delegatees.insert(account, delegatee);

        log(
            self.vm(),
            DelegateChanged {
                delegator: account,
                from_delegate: old_delegate,
                to_delegate: delegatee,
            },
        );

        let units = self.balances.get(account);
        self.move_delegate_votes(old_delegate, delegatee, units)
    }

    /// Records supply checkpoints on mint and burn.
    pub(crate) fn track_supply_votes(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        let key = self.clock_key();

        if from.is_zero() {
            let supply = self.total_supply.get();
            let cap = max_supply();
            if supply > cap {
                return Err(TokenError::ExceededSafeSupply(ERC20ExceededSafeSupply {
                    increased_supply: supply,
                    cap,
                }));
            }
            let new_total = self
                .total_supply_checkpoints
                .latest()
                .checked_add(to_votes(value)?)
                .ok_or(TokenError::invalid_amount())?;
            self.total_supply_checkpoints.push(key, new_total)?;
        }

        if to.is_zero() {
            let new_total = self
                .total_supply_checkpoints
                .latest()
                .checked_sub(to_votes(value)?)
                .ok_or(TokenError::invalid_amount())?;
            self.total_supply_checkpoints.push(key, new_total)?;
        }

        Ok(())
    }

    /// Moves votes between the delegates of `from` and `to`.
    pub(crate) fn transfer_voting_units(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        let from_delegate = self.delegate_of(from);
        let to_delegate = self.delegate_of(to);
        self.move_delegate_votes(from_delegate, to_delegate, value)
    }

    fn move_delegate_votes(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if from == to || amount.is_zero() {
            return Ok(());
        }

        let key = self.clock_key();
        let amount = to_votes(amount)?;

        if !from.is_zero() {
            let (previous_votes, new_votes) = {
                let mut trace = self.delegate_checkpoints.setter(from);
                let new_votes = trace
                    .latest()
                    .checked_sub(amount)
                    .ok_or(TokenError::invalid_amount())?;
                trace.push(key, new_votes)?
            };
            log(
                self.vm(),
                DelegateVotesChanged {
                    delegate: from,
                    previous_votes: U256::from(previous_votes),
                    new_votes: U256::from(new_votes),
                },
            );
        }

        if !to.is_zero() {
            let (previous_votes, new_votes) = {
                let mut trace = self.delegate_checkpoints.setter(to);
                let new_votes = trace
                    .latest()
                    .checked_add(amount)
                    .ok_or(TokenError::invalid_amount())?;
                trace.push(key, new_votes)?
            };
            log(
                self.vm(),
                DelegateVotesChanged {
                    delegate: to,
                    previous_votes: U256::from(previous_votes),
                    new_votes: U256::from(new_votes),
                },
            );
        }

        Ok(())
    }
}
