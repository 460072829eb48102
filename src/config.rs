// src/config.rs - Deployment presets

use alloc::string::String;
use stylus_sdk::alloy_primitives::{Address, U256};

use crate::{errors::TokenError, GovToken};

/// Parameters passed to `initialize` for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    /// Minted to the owner at initialization, in base units.
    pub initial_supply: u128,
}

/// The `xyzToken` deployment.
pub const XYZ_TOKEN: TokenConfig = TokenConfig {
    name: "xyzToken",
    symbol: "XYZT",
    decimals: 10,
    initial_supply: 0,
};

/// The `uvwToken` deployment.
pub const UVW_TOKEN: TokenConfig = TokenConfig {
    name: "uvwToken",
    symbol: "UVWT",
    decimals: 10,
    initial_supply: 0,
};

impl TokenConfig {
    /// `whole` tokens expressed in base units (`whole * 10^decimals`).
    pub fn units(&self, whole: u64) -> Option<U256> {
        U256::from(10u8)
            .checked_pow(U256::from(self.decimals))
            .and_then(|scale| scale.checked_mul(U256::from(whole)))
    }
}

impl GovToken {
    /// Initializes the contract from a preset with `owner` as owner and admin.
    pub fn initialize_with(
        &mut self,
        config: &TokenConfig,
        owner: Address,
    ) -> Result<(), TokenError> {
        self.initialize(
            String::from(config.name),
            String::from(config.symbol),
            config.decimals,
            U256::from(config.initial_supply),
            owner,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_share_decimals() {
        assert_eq!(XYZ_TOKEN.decimals, 10);
        assert_eq!(UVW_TOKEN.decimals, 10);
        assert_ne!(XYZ_TOKEN.symbol, UVW_TOKEN.symbol);
    }

    #[test]
    fn test_units_scale_by_decimals() {
        assert_eq!(XYZ_TOKEN.units(1), Some(U256::from(10_000_000_000u64)));
        assert_eq!(XYZ_TOKEN.units(0), Some(U256::ZERO));

        let wide = TokenConfig {
            decimals: 18,
            ..UVW_TOKEN
        };
        assert_eq!(
            wide.units(1_000_000),
            Some(U256::from(1_000_000_000_000_000_000_000_000u128))
        );
    }

    #[test]
    fn test_units_overflow_is_none() {
        let huge = TokenConfig {
            decimals: 255,
            ..XYZ_TOKEN
        };
        assert_eq!(huge.units(1), None);
    }
}
