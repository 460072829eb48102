// src/access.rs - Role-based access control
//
// Role membership and admin roles live in openzeppelin-stylus
// `AccessControl`. This module exposes its `IAccessControl` ABI on the token
// and adds `setRole`, which grants a role by name.

use openzeppelin_stylus::access::control::IAccessControl;
use stylus_sdk::{
    alloy_primitives::{Address, B256},
    prelude::*,
};

use crate::{errors::TokenError, roles, GovToken};

#[public]
impl IAccessControl for GovToken {
    type Error = TokenError;

    fn has_role(&self, role: B256, account: Address) -> bool {
        self.access.has_role(role, account)
    }

    fn only_role(&self, role: B256) -> Result<(), Self::Error> {
        Ok(self.access._check_role(role, self.vm().msg_sender())?)
    }

    fn get_role_admin(&self, role: B256) -> B256 {
        self.access.get_role_admin(role)
    }

    fn grant_role(&mut self, role: B256, account: Address) -> Result<(), Self::Error> {
        Ok(self.access.grant_role(role, account)?)
    }

    fn revoke_role(&mut self, role: B256, account: Address) -> Result<(), Self::Error> {
        Ok(self.access.revoke_role(role, account)?)
    }

    fn renounce_role(&mut self, role: B256, confirmation: Address) -> Result<(), Self::Error> {
        Ok(self.access.renounce_role(role, confirmation)?)
    }
}

impl GovToken {
    /// Grants the role called `role_name` under the same admin check as
    /// `grantRole`.
    pub(crate) fn grant_named_role(
        &mut self,
        role_name: &str,
        account: Address,
    ) -> Result<B256, TokenError> {
        let role = roles::role_id(role_name).ok_or_else(|| TokenError::unknown_role(role_name))?;
        self.access.grant_role(role, account)?;
        Ok(role)
    }
}
