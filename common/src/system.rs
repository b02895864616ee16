//! # Outbound ports
//!
//! Contracts for everything the application asks of the operating system.
//! Implementations live in `macshift-core`; tests provide their own.

use std::fmt;

use pnet::util::MacAddr;

/// How an external command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitStatus {
    /// The process ran and exited with this code.
    Code(i32),
    /// The process was killed before it could exit (e.g. by a signal).
    Terminated,
    /// The process could not be started at all.
    SpawnFailed(String),
}

impl ExitStatus {
    pub fn success(&self) -> bool {
        matches!(self, ExitStatus::Code(0))
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "exit code {code}"),
            ExitStatus::Terminated => write!(f, "terminated"),
            ExitStatus::SpawnFailed(reason) => write!(f, "failed to start: {reason}"),
        }
    }
}

/// Runs one external command to completion.
///
/// `argv[0]` is the program, the rest are its arguments.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> ExitStatus;
}

/// Read-only view of the interfaces known to the system.
pub trait InterfaceRepository {
    fn hardware_address(&self, interface: &str) -> Option<MacAddr>;
}
