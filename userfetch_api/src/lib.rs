//! Typed client for the jsonplaceholder users endpoint.
//!
//! Every request passes through an [`Interceptor`] that fills in default
//! headers and retries once on failure; the [`Client`] applies its own
//! independent single retry on top.

mod client;
mod errors;
mod intercept;
pub mod types;

pub use self::client::{Client, MISSPELLED_USERS_PATH, USERS_PATH};
pub use self::errors::Error;
pub use self::intercept::{Interceptor, CUSTOM_HEADER_NAME, CUSTOM_HEADER_VALUE};
