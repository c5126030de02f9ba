//! Read-only view of the live DNS through a DNS-over-HTTPS JSON endpoint.
//!
//! Used to learn what a hostname currently resolves to without spending a
//! provider API call or needing the provider credential.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;
