//! Composables Anchored
//!
//! Drag engine for components that rest at a discrete set of positions, like
//! bottom sheets and snapping toggles.
//!
//! # Features
//!
//! - **Anchors**: [`AnchorSet`] maps each resting value to a position
//! - **Thresholds**: a release commits to the next anchor once it travelled
//!   past a positional threshold or was flung faster than a velocity threshold
//! - **Drag Mutex**: gestures, settle animations and programmatic moves never
//!   write the offset at the same time; newer intent preempts older
//! - **Retargeting**: campaigns restart against new anchors when layout
//!   replaces them mid-drag
//!
//! # Example
//!
//! ```ignore
//! use composables_anchored::{AnchorSet, AnchoredDraggableState, DragConfig};
//!
//! let state = AnchoredDraggableState::new(Side::Closed, DragConfig::new());
//! state.update_anchors(
//!     AnchorSet::builder().at(Side::Closed, 0.0).at(Side::Open, 240.0).build(),
//!     None,
//! );
//!
//! state.dispatch_raw_delta(90.0);
//! state.settle(0.0).await?;
//! assert_eq!(state.current_value(), Side::Open);
//! ```

pub mod anchors;
pub mod config;
pub mod error;
pub mod mutex;
mod restart;
pub mod state;
pub mod threshold;

pub use anchors::{AnchorSet, AnchorSetBuilder};
pub use config::{ConfirmValueChange, DragConfig};
pub use error::{DragError, Result};
pub use mutex::{Cancelled, DragMutex, MutatePriority};
pub use state::{AnchorValue, AnchoredDragScope, AnchoredDraggableState, DragSnapshot};
pub use threshold::{
    compute_target, compute_target_without_thresholds, fixed_positional_threshold,
    fixed_velocity_threshold, fractional_positional_threshold, PositionalThreshold,
    VelocityThreshold, DEFAULT_POSITIONAL_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD,
};
