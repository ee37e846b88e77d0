//! Nested scrolling inside a sheet
//!
//! Scrollable content inside a sheet hands it the scroll deltas it does not
//! need. Scrolling content back towards its top pulls the sheet open first,
//! leftover scroll after the content hit its edge moves the sheet, and a fling
//! settles it.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::sheet::SheetState;

/// Origin of a scroll delta
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollSource {
    /// Dragged by the user
    UserInput,
    /// Produced by a fling animation or a programmatic scroll
    SideEffect,
}

/// Nested scroll connection between a sheet and its scrollable content
///
/// All methods return the part of the delta or velocity the sheet consumed.
#[derive(Clone)]
pub struct SheetNestedScroll {
    sheet: SheetState,
    on_dismiss: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl SheetNestedScroll {
    pub fn new(sheet: SheetState) -> Self {
        Self {
            sheet,
            on_dismiss: None,
        }
    }

    /// Called when a fling settles the sheet into the hidden state
    pub fn on_dismiss<F: Fn() + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_dismiss = Some(Arc::new(callback));
        self
    }

    /// Before the content scrolls: only upward user drags open the sheet
    pub fn on_pre_scroll(&self, available: f32, source: ScrollSource) -> f32 {
        if available < 0.0 && source == ScrollSource::UserInput {
            self.sheet.draggable().dispatch_raw_delta(available)
        } else {
            0.0
        }
    }

    /// After the content scrolled: user drags it left over move the sheet
    pub fn on_post_scroll(&self, available: f32, source: ScrollSource) -> f32 {
        if source == ScrollSource::UserInput {
            self.sheet.draggable().dispatch_raw_delta(available)
        } else {
            0.0
        }
    }

    /// Before the content flings: an upward fling of a sheet that is not
    /// fully open settles the sheet and consumes the whole fling
    pub async fn on_pre_fling(&self, available: f32) -> Result<f32> {
        let offset = self.sheet.require_offset()?;
        let min_anchor = self.sheet.draggable().anchors().min_position();
        if available < 0.0 && offset > min_anchor {
            self.fling(available).await?;
            Ok(available)
        } else {
            Ok(0.0)
        }
    }

    /// After the content flung: settle with whatever velocity is left
    pub async fn on_post_fling(&self, available: f32) -> Result<f32> {
        self.fling(available).await?;
        Ok(available)
    }

    async fn fling(&self, velocity: f32) -> Result<()> {
        if self.sheet.settle_to_dismiss(velocity).await? {
            tracing::debug!(velocity, "sheet flung to hidden");
            if let Some(on_dismiss) = &self.on_dismiss {
                on_dismiss();
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SheetNestedScroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetNestedScroll")
            .field("sheet", &self.sheet)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}
