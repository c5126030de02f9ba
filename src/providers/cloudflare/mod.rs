//! Cloudflare API v4 backend, managing both A and AAAA records.

pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;

pub use types::Cloudflare;
