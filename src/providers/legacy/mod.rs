//! Legacy single-family backend.
//!
//! An older management API that only handles A records. It has no success
//! flag; a non-empty `code` field in a response body marks a failure.
//! Records cannot be modified in place, so a changed record is deleted by id
//! and created again.

pub mod functions;
pub mod impls;
pub mod types;

pub use types::Legacy;
