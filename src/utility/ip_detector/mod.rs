//! Public IP discovery.
//!
//! The default method asks Google's authoritative nameserver for the TXT
//! record `o-o.myaddr.l.google.com`, whose answer is the source address the
//! query arrived from. Querying the nameserver over its IPv4 address yields
//! the public IPv4 address, and over its IPv6 address the public IPv6 one.
//!
//! A plain HTTP method is available as a fallback for networks that block
//! outbound DNS to anything but the local resolver. Either way, every answer
//! is checked against strict address patterns before it is handed out.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod patterns;
pub mod traits;
pub mod types;
