//! Core traits for token storage and login redirection.

mod navigator;
mod token_store;

pub use navigator::{Navigator, NoopNavigator};
pub use token_store::TokenStore;
