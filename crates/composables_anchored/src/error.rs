//! Error types for composables_anchored

use thiserror::Error;

/// Errors raised by the anchored drag state
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragError {
    /// The offset was read before any anchors initialized it
    #[error("offset read before being initialized; anchors must be supplied by a layout pass first")]
    OffsetUninitialized,
}

/// Result type for anchored drag operations
pub type Result<T> = std::result::Result<T, DragError>;
