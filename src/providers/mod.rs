pub mod cloudflare;
pub mod errors;
pub mod functions;
pub mod legacy;
pub mod traits;

pub use errors::ProviderError;
pub use traits::DnsProvider;
