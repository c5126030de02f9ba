// Standard library
use std::path::Path;
use std::sync::Mutex;

// 3rd party crates
use tracing::{debug, warn, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter, Layer};

// Current module imports
use super::constants::NOISY_TARGETS;
use super::types::{LineFormat, LogFiles, LogPaths};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. If the log directory cannot be
/// prepared, a warning is emitted and only the console is written to.
pub fn init_logging(level: &str, directory: &Path) -> Result<(), TryInitError> {
    let (files, open_error) = match LogFiles::open(directory) {
        Ok(files) => (Some((Mutex::new(files.combined), Mutex::new(files.errors))), None),
        Err(e) => (None, Some(e)),
    };

    build_subscriber(build_filter(level), files).try_init()?;

    match open_error {
        Some(e) => warn!(
            directory = %directory.display(),
            "Could not open log files, logging to the console only: {}",
            e
        ),
        None => {
            let paths = LogPaths::new(directory);
            debug!(
                combined = %paths.combined.display(),
                errors = %paths.errors.display(),
                "File logging enabled"
            );
        }
    }

    Ok(())
}

pub fn build_filter(level: &str) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    NOISY_TARGETS
        .iter()
        .filter_map(|target| format!("{}=error", target).parse::<Directive>().ok())
        .fold(filter, EnvFilter::add_directive)
}

/// Console layer plus, when `files` is given, the combined log and the
/// error-only log.
fn build_subscriber<C, E>(
    filter: EnvFilter,
    files: Option<(C, E)>,
) -> impl Subscriber + Send + Sync + 'static
where
    C: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (combined, errors) = match files {
        Some((combined, errors)) => (Some(combined), Some(errors)),
        None => (None, None),
    };

    let console = fmt::layer()
        .event_format(LineFormat)
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout));

    let combined = combined.map(|writer| {
        fmt::layer()
            .event_format(LineFormat)
            .with_ansi(false)
            .with_writer(writer)
    });

    let errors = errors.map(|writer| {
        fmt::layer()
            .event_format(LineFormat)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(LevelFilter::ERROR)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(combined)
        .with(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::io;
    use std::sync::Arc;
    use tracing::{error, info};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn errors_reach_both_files_and_info_only_the_combined_log() {
        let combined = Buffer::default();
        let errors = Buffer::default();

        let subscriber = build_subscriber(
            EnvFilter::new("info"),
            Some((
                {
                    let combined = combined.clone();
                    move || combined.clone()
                },
                {
                    let errors = errors.clone();
                    move || errors.clone()
                },
            )),
        );

        tracing::subscriber::with_default(subscriber, || {
            info!("record is up to date");
            error!("zone lookup failed");
        });

        let combined = combined.contents();
        let errors = errors.contents();

        assert!(combined.contains("[INFO] record is up to date"), "{combined}");
        assert!(combined.contains("[ERROR] zone lookup failed"), "{combined}");
        assert!(!errors.contains("up to date"), "{errors}");
        assert!(errors.contains("[ERROR] zone lookup failed"), "{errors}");
    }

    #[test]
    fn lines_carry_timestamp_and_level() {
        let combined = Buffer::default();
        let errors = Buffer::default();

        let subscriber = build_subscriber(
            EnvFilter::new("warn"),
            Some(({
                let combined = combined.clone();
                move || combined.clone()
            }, move || errors.clone())),
        );

        tracing::subscriber::with_default(subscriber, || {
            info!("filtered out");
            tracing::warn!("DoH lookup failed");
        });

        let line = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \[WARN\] DoH lookup failed\n$")
            .unwrap();
        let combined = combined.contents();
        assert!(line.is_match(&combined), "{combined}");
    }
}
