//! Console and file logging.
//!
//! Every event goes to the console (warnings and errors on stderr, the rest
//! on stdout). When the log directory is usable, events are also appended to
//! a combined log, and errors additionally to a separate error log. Files
//! that cannot be opened never stop the run; logging degrades to the console.

pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;

pub use functions::init_logging;
