//! Identity provider adapters.

mod identity_toolkit;

pub use identity_toolkit::{
    DEFAULT_IDENTITY_URL, IdentityToolkitClient, classify_error, parse_lookup, parse_sign_in,
};
