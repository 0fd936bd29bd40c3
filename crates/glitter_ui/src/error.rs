//! Scheduler error types.

use thiserror::Error;

/// Errors from the tick scheduler.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// `start` was called with no Tokio runtime on the current thread.
    #[error("no tokio runtime available to drive the tick timer")]
    NoRuntime,
}

/// Result type for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
