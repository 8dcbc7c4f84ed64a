//! vigil-file - Filesystem-backed token storage.

mod kv;
mod store;

pub use kv::FileKeyValue;
pub use store::{ACCESS_TOKEN_KEY, FileTokenStore, REFRESH_TOKEN_KEY, SAVED_AT_KEY};
