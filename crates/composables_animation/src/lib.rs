//! Composables Animation
//!
//! Animation primitives used to settle draggable components onto their anchors.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs that start from the release velocity
//! - **Tweens**: Fixed-duration interpolation shaped by an [`Easing`] curve
//! - **Snap**: Jump straight to the target on the first frame
//! - **Frame Driver**: [`animate`] ticks an [`AnimationSpec`] on a [`FrameClock`]
//!   and reports every intermediate value
//!
//! Every spec derives serde so it can live inside widget configuration files.

pub mod animate;
pub mod easing;
pub mod spec;
pub mod spring;

pub use animate::{animate, FrameClock};
pub use easing::Easing;
pub use spec::{AnimationFrame, AnimationSpec, ValueAnimation};
pub use spring::{Spring, SpringConfig};
