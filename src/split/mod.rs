//! Share splitting
//!
//! Validates a proposed split of an expense total between participants and
//! resolves each share to the amount that participant owes.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{check_balance, resolve_shares, SPLIT_TOLERANCE};
