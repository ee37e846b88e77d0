//! Error types for composables_widgets

use std::path::PathBuf;

use composables_anchored::DragError;
use thiserror::Error;

use crate::sheet::SheetValue;

/// Errors raised by [`SheetState`](crate::SheetState)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The sheet was created resting at a state its configuration skips
    #[error("initial value {value:?} is not allowed: {reason}")]
    InvalidInitialValue {
        value: SheetValue,
        reason: &'static str,
    },

    /// Partial expansion requested while `skip_partially_expanded` is set
    #[error("cannot partially expand a sheet with skip_partially_expanded enabled")]
    PartialExpandSkipped,

    /// Hiding requested while `skip_hidden_state` is set
    #[error("cannot hide a sheet with skip_hidden_state enabled")]
    HideSkipped,

    /// Error from the underlying drag state
    #[error(transparent)]
    Drag(#[from] DragError),
}

/// Errors raised while loading or saving widget configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for this schema
    #[error("invalid widget configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML
    #[error("failed to serialize widget configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for sheet operations
pub type Result<T> = std::result::Result<T, SheetError>;
