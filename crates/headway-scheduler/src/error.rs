// Allow unused assignments for diagnostic fields - they're used by the macros
#![allow(unused_assignments)]

use headway_core::HeadwayError;
use miette::Diagnostic;
use thiserror::Error;

/// Scheduler error type
#[derive(Error, Debug, Diagnostic)]
pub enum SchedulerError {
    /// Policy name not recognised
    #[error("Unknown scheduling policy: {name}")]
    #[diagnostic(
        code(scheduler::unknown_policy),
        help("Supported policies: FCFS, SSTF, SCAN, CSCAN, LOOK, CLOOK")
    )]
    UnknownPolicy {
        #[allow(unused)]
        name: String,
    },

    /// Average movement requested for an empty request set
    #[error("Average head movement is undefined for zero requests (total movement {total})")]
    #[diagnostic(
        code(scheduler::division_undefined),
        help("Supply at least one cylinder request to get an average")
    )]
    DivisionUndefined {
        #[allow(unused)]
        total: u64,
    },

    /// Input rejected by validation
    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] HeadwayError),
}

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

impl SchedulerError {
    /// Create an UnknownPolicy error
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy { name: name.into() }
    }

    /// Create a DivisionUndefined error
    pub fn division_undefined(total: u64) -> Self {
        Self::DivisionUndefined { total }
    }
}
