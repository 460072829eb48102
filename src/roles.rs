// src/roles.rs - Role identifiers
//
// Each role id is `keccak256` of its name, as in OpenZeppelin's
// AccessControl. `DEFAULT_ADMIN_ROLE` is the zero hash and administers every
// role unless changed.

use openzeppelin_stylus::access::control::AccessControl;
use stylus_sdk::alloy_primitives::{b256, B256};

pub const DEFAULT_ADMIN_ROLE: B256 = B256::new(AccessControl::DEFAULT_ADMIN_ROLE);

/// `keccak256("MINTER_ROLE")`
pub const MINTER_ROLE: B256 =
    b256!("9f2df0fed2c77648de5860a4cc508cd0818c85b8b8a1ab4ceeef8d981c8956a6");

/// `keccak256("BURNER_ROLE")`
pub const BURNER_ROLE: B256 =
    b256!("3c11d16cbaffd01df69ce1c404f6340ee057498f5f00246190ea54220576a848");

/// `keccak256("PAUSER_ROLE")`
pub const PAUSER_ROLE: B256 =
    b256!("65d7a28e3265b37a6474929f336521b332c1681b933f6cb9f3376673440d862a");

/// Names accepted by `setRole`.
pub const NAMED_ROLES: [(&str, B256); 4] = [
    ("DEFAULT_ADMIN_ROLE", DEFAULT_ADMIN_ROLE),
    ("MINTER_ROLE", MINTER_ROLE),
    ("BURNER_ROLE", BURNER_ROLE),
    ("PAUSER_ROLE", PAUSER_ROLE),
];

/// Resolves a role name such as `"MINTER_ROLE"` to its id.
pub fn role_id(name: &str) -> Option<B256> {
    NAMED_ROLES
        .iter()
        .find(|(role_name, _)| *role_name == name)
        .map(|(_, id)| *id)
}
