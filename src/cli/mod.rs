pub mod functions;
pub mod types;

pub use functions::usage_exit_code;
pub use types::Cli;
