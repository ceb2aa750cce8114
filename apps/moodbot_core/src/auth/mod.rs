//! Access control: credential codec, request gate, ownership rule and
//! password hashing.

pub mod codec;
pub mod gate;
pub mod identity;
pub mod ownership;
pub mod password;

pub use codec::{TokenCodec, TokenError};
pub use gate::{authenticate, current_identity, identify, require_admin};
pub use identity::{Identity, Role};
pub use ownership::{assert_owner_or_admin, authorize_mutation, Owned};
