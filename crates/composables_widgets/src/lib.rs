//! Composables Widgets
//!
//! Component state built on the anchored drag engine.
//!
//! # Features
//!
//! - **Modal Bottom Sheet**: [`SheetState`] rests hidden, partially expanded
//!   or expanded, and follows layout changes while it moves
//! - **Nested Scrolling**: [`SheetNestedScroll`] hands scroll deltas and flings
//!   that the sheet's content leaves over to the sheet
//! - **Sliders**: [`SliderState`] and [`RangeSliderState`] map thumb drags to
//!   values, with optional tick snapping
//! - **Configuration**: [`WidgetsConfig`] loads thresholds, motions and slider
//!   ranges from TOML
//!
//! # Example
//!
//! ```ignore
//! use composables_widgets::{SheetState, SheetValue, WidgetsConfig};
//!
//! let config = WidgetsConfig::load(Path::new("widgets.toml"))?;
//! let sheet = SheetState::new(config.sheet, SheetValue::Hidden)?;
//! sheet.on_layout(600.0, 800.0);
//! sheet.show().await;
//! ```

pub mod config;
pub mod error;
pub mod nested_scroll;
pub mod sheet;
pub mod slider;

pub use config::{SheetConfig, SliderConfig, WidgetsConfig};
pub use error::{ConfigError, Result, SheetError};
pub use nested_scroll::{ScrollSource, SheetNestedScroll};
pub use sheet::{sheet_anchors, SheetState, SheetValue};
pub use slider::{
    calc_fraction, scale, snap_value_to_tick, steps_to_tick_fractions, FinishedCallback,
    RangeCallback, RangeSliderState, SliderDragScope, SliderRange, SliderState, ValueCallback,
};
