// Standard library
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

// 3rd party crates
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

// Current module imports
use super::constants::{COMBINED_LOG_FILE, ERROR_LOG_FILE, TIMESTAMP_FORMAT};
use super::types::{LineFormat, LogFiles, LogPaths};

impl LogPaths {
    pub fn new(directory: &Path) -> Self {
        Self {
            combined: directory.join(COMBINED_LOG_FILE),
            errors: directory.join(ERROR_LOG_FILE),
        }
    }
}

impl LogFiles {
    /// Creates `directory` if needed and opens both files for appending.
    pub fn open(directory: &Path) -> io::Result<Self> {
        fs::create_dir_all(directory)?;

        let paths = LogPaths::new(directory);
        let open = |path: &Path| OpenOptions::new().create(true).append(true).open(path);

        Ok(Self {
            combined: open(&paths.combined)?,
            errors: open(&paths.errors)?,
        })
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} [{}] ",
            Local::now().format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ddns-sync-{}-{}", name, std::process::id()))
    }

    #[test]
    fn paths_are_derived_from_the_directory() {
        let paths = LogPaths::new(Path::new("/var/log/ddns-sync"));
        assert_eq!(
            paths.combined,
            Path::new("/var/log/ddns-sync/ddns-sync.log")
        );
        assert_eq!(
            paths.errors,
            Path::new("/var/log/ddns-sync/ddns-sync.error.log")
        );
    }

    #[test]
    fn open_creates_missing_directory_and_files() {
        let directory = scratch_dir("open").join("nested");

        let result = LogFiles::open(&directory);
        let paths = LogPaths::new(&directory);
        let created = paths.combined.is_file() && paths.errors.is_file();
        fs::remove_dir_all(directory.parent().unwrap_or(&directory)).ok();

        assert!(result.is_ok());
        assert!(created);
    }

    #[test]
    fn open_fails_when_directory_is_a_file() {
        let blocker = scratch_dir("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let result = LogFiles::open(&blocker);
        fs::remove_file(&blocker).ok();

        assert!(result.is_err());
    }
}
