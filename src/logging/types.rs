// Standard library
use std::fs::File;
use std::path::PathBuf;

/// Paths of the two log files under one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub combined: PathBuf,
    pub errors: PathBuf,
}

/// Open append handles, held for the lifetime of the process.
#[derive(Debug)]
pub struct LogFiles {
    pub combined: File,
    pub errors: File,
}

/// Renders `YYYY-MM-DD HH:MM:SS [LEVEL] message` in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;
