// Standard library
use std::fmt;

// Project imports
use crate::models::RecordType;

// Current module imports
use super::errors::ReconcileError;

/// What happened to one record type during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    UpToDate,
    Updated,
    FailedResolution,
    FailedProviderError,
    FailedVerification,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::UpToDate => "up-to-date",
            Outcome::Updated => "updated",
            Outcome::FailedResolution => "failed-resolution",
            Outcome::FailedProviderError => "failed-provider-error",
            Outcome::FailedVerification => "failed-verification",
        };
        f.write_str(label)
    }
}

/// The record being kept in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub hostname: String,
    pub ttl: u32,
}

/// Per record type outcomes of one run, plus the error that decides the
/// exit code.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<(RecordType, Outcome)>,
    pub error: Option<ReconcileError>,
}

/// Drives one reconciliation run over every record type the provider supports.
pub struct Reconciler<S, R, P> {
    pub(super) source: S,
    pub(super) reader: R,
    pub(super) provider: P,
    pub(super) target: Target,
}
