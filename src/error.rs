//! Error types for priority queue operations
//!
//! Every fallible operation in this crate reports failure through
//! [`QueueError`]. Errors are local and non-fatal: the queue that produced
//! one is left exactly as it was before the call.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `peek` or `pop` on a queue holding no elements
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Insert into a queue that cannot grow any further
    #[error("priority queue is full (capacity {capacity})")]
    CapacityExceeded {
        /// The capacity that was reached
        capacity: usize,
    },

    /// Backing storage could not be obtained
    #[error("failed to allocate storage for {requested} elements")]
    AllocationError {
        /// Total number of element slots that were requested
        requested: usize,
    },

    /// A configuration value failed validation
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl QueueError {
    /// Builds an [`QueueError::AllocationError`] for a failed reservation
    pub(crate) fn allocation(requested: usize, source: TryReserveError) -> Self {
        log::debug!("reservation of {} slots failed: {}", requested, source);
        QueueError::AllocationError { requested }
    }

    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        QueueError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for [`QueueError::EmptyQueue`]
    pub fn is_empty_queue(&self) -> bool {
        matches!(self, QueueError::EmptyQueue)
    }

    /// Returns true for [`QueueError::CapacityExceeded`]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, QueueError::CapacityExceeded { .. })
    }

    /// Returns true for [`QueueError::AllocationError`]
    pub fn is_allocation(&self) -> bool {
        matches!(self, QueueError::AllocationError { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QueueError>;

/// Failure of [`replace_top`](crate::binary::PriorityQueue::replace_top)
///
/// The rejected value is handed back so the caller keeps ownership of it.
#[derive(Clone, PartialEq, Eq)]
pub struct ReplaceError<T> {
    /// Why the replacement was refused
    pub error: QueueError,
    /// The value that was not inserted
    pub value: T,
}

impl<T> ReplaceError<T> {
    /// Discards the value and keeps only the error
    pub fn into_error(self) -> QueueError {
        self.error
    }
}

// Manual impls so `T` does not need `Debug`/`Display`.
impl<T> fmt::Debug for ReplaceError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplaceError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for ReplaceError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "replace_top failed: {}", self.error)
    }
}

impl<T> std::error::Error for ReplaceError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<ReplaceError<T>> for QueueError {
    fn from(err: ReplaceError<T>) -> Self {
        err.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(QueueError::EmptyQueue.to_string(), "priority queue is empty");
        assert_eq!(
            QueueError::CapacityExceeded { capacity: 2 }.to_string(),
            "priority queue is full (capacity 2)"
        );
        assert_eq!(
            QueueError::AllocationError { requested: 64 }.to_string(),
            "failed to allocate storage for 64 elements"
        );
        assert_eq!(
            QueueError::invalid_config("growth", "unknown policy").to_string(),
            "invalid configuration for `growth`: unknown policy"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(QueueError::EmptyQueue.is_empty_queue());
        assert!(QueueError::CapacityExceeded { capacity: 1 }.is_capacity_exceeded());
        assert!(QueueError::AllocationError { requested: 1 }.is_allocation());
        assert!(!QueueError::EmptyQueue.is_allocation());
    }

    #[test]
    fn test_allocation_from_failed_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let source = v.try_reserve_exact(usize::MAX).unwrap_err();
        let err = QueueError::allocation(usize::MAX, source);
        assert_eq!(err, QueueError::AllocationError { requested: usize::MAX });
    }

    #[test]
    fn test_replace_error_keeps_value() {
        struct NoDebug(u8);
        let err = ReplaceError {
            error: QueueError::EmptyQueue,
            value: NoDebug(7),
        };
        assert_eq!(err.to_string(), "replace_top failed: priority queue is empty");
        assert!(format!("{:?}", err).contains("EmptyQueue"));
        assert_eq!(err.value.0, 7);
        let plain: QueueError = err.into();
        assert!(plain.is_empty_queue());
    }

    #[test]
    fn test_replace_error_into_error() {
        let err = ReplaceError {
            error: QueueError::EmptyQueue,
            value: String::from("kept"),
        };
        assert_eq!(err.into_error(), QueueError::EmptyQueue);
    }
}
