//! Credential and access-token models.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::AccessToken;

pub(crate) use token::{TokenRequest, TokenResponse};
