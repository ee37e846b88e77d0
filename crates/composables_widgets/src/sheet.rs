//! Modal bottom sheet state
//!
//! A sheet rests hidden below the screen, partially expanded to half the
//! screen, or expanded to its full content height. Positions grow downwards,
//! so the expanded anchor has the smallest offset and the hidden anchor the
//! largest.

use std::future::Future;

use composables_anchored::{
    AnchorSet, AnchoredDragScope, AnchoredDraggableState, DragConfig, DragSnapshot,
    MutatePriority,
};
use composables_animation::AnimationSpec;
use serde::{Deserialize, Serialize};

use crate::config::SheetConfig;
use crate::error::{Result, SheetError};
use crate::nested_scroll::SheetNestedScroll;

/// Resting states of a modal bottom sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetValue {
    Hidden,
    Expanded,
    PartiallyExpanded,
}

/// Anchors for a sheet of `sheet_height` inside a container of `full_height`
///
/// The partially expanded state only exists for content taller than half the
/// container; the expanded state only once the content has been measured.
pub fn sheet_anchors(
    sheet_height: f32,
    full_height: f32,
    skip_partially_expanded: bool,
) -> AnchorSet<SheetValue> {
    AnchorSet::builder()
        .at(SheetValue::Hidden, full_height)
        .at_if(
            sheet_height > full_height / 2.0 && !skip_partially_expanded,
            SheetValue::PartiallyExpanded,
            full_height / 2.0,
        )
        .at_if(
            sheet_height != 0.0,
            SheetValue::Expanded,
            (full_height - sheet_height).max(0.0),
        )
        .build()
}

/// State of a modal bottom sheet
///
/// Cloning gives another handle to the same sheet.
#[derive(Clone, Debug)]
pub struct SheetState {
    draggable: AnchoredDraggableState<SheetValue>,
    config: SheetConfig,
}

impl SheetState {
    pub fn new(config: SheetConfig, initial_value: SheetValue) -> Result<Self> {
        Self::with_confirm_value_change(config, initial_value, |_| true)
    }

    /// A sheet whose state changes can be vetoed by `confirm`
    pub fn with_confirm_value_change<F>(
        config: SheetConfig,
        initial_value: SheetValue,
        confirm: F,
    ) -> Result<Self>
    where
        F: Fn(&SheetValue) -> bool + Send + Sync + 'static,
    {
        if config.skip_partially_expanded && initial_value == SheetValue::PartiallyExpanded {
            return Err(SheetError::InvalidInitialValue {
                value: initial_value,
                reason: "skip_partially_expanded is enabled",
            });
        }
        if config.skip_hidden_state && initial_value == SheetValue::Hidden {
            return Err(SheetError::InvalidInitialValue {
                value: initial_value,
                reason: "skip_hidden_state is enabled",
            });
        }

        let positional = config.positional_threshold;
        let velocity = config.velocity_threshold;
        let drag_config = DragConfig::new()
            .positional_threshold(move |_| positional)
            .velocity_threshold(move || velocity)
            .animation_spec(config.animation)
            .confirm_value_change(confirm);

        Ok(Self {
            draggable: AnchoredDraggableState::new(initial_value, drag_config),
            config,
        })
    }

    /// Restore a sheet saved with [`snapshot`](Self::snapshot)
    pub fn from_snapshot(config: SheetConfig, snapshot: DragSnapshot<SheetValue>) -> Result<Self> {
        Self::new(config, snapshot.current_value)
    }

    pub fn snapshot(&self) -> DragSnapshot<SheetValue> {
        self.draggable.snapshot()
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// The underlying drag state, for gesture drivers
    pub fn draggable(&self) -> &AnchoredDraggableState<SheetValue> {
        &self.draggable
    }

    pub fn nested_scroll(&self) -> SheetNestedScroll {
        SheetNestedScroll::new(self.clone())
    }

    pub fn current_value(&self) -> SheetValue {
        self.draggable.current_value()
    }

    pub fn target_value(&self) -> SheetValue {
        self.draggable.target_value()
    }

    pub fn is_visible(&self) -> bool {
        self.current_value() != SheetValue::Hidden
    }

    pub fn is_animation_running(&self) -> bool {
        self.draggable.is_animation_running()
    }

    pub fn has_expanded_state(&self) -> bool {
        self.draggable.anchors().has_anchor_for(&SheetValue::Expanded)
    }

    pub fn has_partially_expanded_state(&self) -> bool {
        self.draggable
            .anchors()
            .has_anchor_for(&SheetValue::PartiallyExpanded)
    }

    pub fn offset(&self) -> f32 {
        self.draggable.offset()
    }

    pub fn require_offset(&self) -> Result<f32> {
        Ok(self.draggable.require_offset()?)
    }

    /// How far the sheet is open, from 0 (hidden) to 1 (expanded)
    ///
    /// Reports 0 before the first layout.
    pub fn calculate_sheet_progress(&self) -> f32 {
        let Ok(offset) = self.draggable.require_offset() else {
            return 0.0;
        };
        let anchors = self.draggable.anchors();
        let min = anchors.min_position();
        let max = anchors.max_position();
        if max == min {
            return 1.0;
        }
        (1.0 - (offset - min) / (max - min)).clamp(0.0, 1.0)
    }

    /// Apply a layout pass
    ///
    /// Recomputes the anchors and moves onto the state the sheet was heading
    /// to, or retargets a running animation. Returns whether the anchors
    /// changed.
    pub fn on_layout(&self, sheet_height: f32, full_height: f32) -> bool {
        let anchors = sheet_anchors(
            sheet_height,
            full_height,
            self.config.skip_partially_expanded,
        );
        let target = match self.draggable.target_value() {
            SheetValue::Hidden => SheetValue::Hidden,
            SheetValue::PartiallyExpanded | SheetValue::Expanded => {
                if anchors.has_anchor_for(&SheetValue::PartiallyExpanded) {
                    SheetValue::PartiallyExpanded
                } else if anchors.has_anchor_for(&SheetValue::Expanded) {
                    SheetValue::Expanded
                } else {
                    SheetValue::Hidden
                }
            }
        };
        tracing::trace!(sheet_height, full_height, ?target, "sheet layout");
        self.draggable.update_anchors(anchors, Some(target))
    }

    /// Animate to the expanded state
    pub async fn expand(&self) {
        self.draggable.animate_to(SheetValue::Expanded).await;
    }

    pub async fn partial_expand(&self) -> Result<()> {
        if self.config.skip_partially_expanded {
            return Err(SheetError::PartialExpandSkipped);
        }
        self.animate_to(SheetValue::PartiallyExpanded, self.config.show_animation)
            .await;
        Ok(())
    }

    /// Open the sheet, partially if it can rest there
    pub async fn show(&self) {
        let target = if self.has_partially_expanded_state() {
            SheetValue::PartiallyExpanded
        } else {
            SheetValue::Expanded
        };
        self.animate_to(target, self.config.show_animation).await;
    }

    pub async fn hide(&self) -> Result<()> {
        if self.config.skip_hidden_state {
            return Err(SheetError::HideSkipped);
        }
        self.animate_to(SheetValue::Hidden, self.config.hide_animation)
            .await;
        Ok(())
    }

    pub async fn snap_to(&self, target: SheetValue) {
        self.draggable.snap_to(target).await;
    }

    /// Settle after a drag released with `velocity`
    pub async fn settle(&self, velocity: f32) -> Result<()> {
        Ok(self.draggable.settle(velocity).await?)
    }

    /// Settle after a drag and report whether the sheet ended up hidden
    ///
    /// The caller dismisses the sheet when this returns `true`.
    pub async fn settle_to_dismiss(&self, velocity: f32) -> Result<bool> {
        self.settle(velocity).await?;
        Ok(!self.is_visible())
    }

    /// Hide the sheet if hiding is confirmed, reporting whether it ended up
    /// hidden
    pub async fn animate_to_dismiss(&self) -> Result<bool> {
        if !self.draggable.config().confirms(&SheetValue::Hidden) {
            tracing::debug!("sheet dismissal vetoed");
            return Ok(false);
        }
        self.hide().await?;
        Ok(!self.is_visible())
    }

    /// Respond to a back press or outside dismiss request
    ///
    /// An expanded sheet that can rest partially expanded steps back to that
    /// state and stays open. Anything else hides, and the caller should
    /// dismiss the sheet once this returns `true`.
    pub async fn handle_dismiss_request(&self) -> Result<bool> {
        if self.current_value() == SheetValue::Expanded && self.has_partially_expanded_state() {
            self.partial_expand().await?;
            return Ok(false);
        }
        self.hide().await?;
        Ok(true)
    }

    /// Respond to a tap on the drag handle
    ///
    /// Returns whether the sheet was dismissed.
    pub async fn toggle(&self) -> Result<bool> {
        match self.current_value() {
            SheetValue::Expanded => self.animate_to_dismiss().await,
            SheetValue::PartiallyExpanded => {
                self.expand().await;
                Ok(false)
            }
            SheetValue::Hidden => {
                self.show().await;
                Ok(false)
            }
        }
    }

    async fn animate_to(&self, target: SheetValue, spec: AnimationSpec) {
        let velocity = self.draggable.last_velocity();
        self.draggable.animate_to_with(target, spec, velocity).await;
    }

    /// Run a user drag of the sheet, feeding deltas through `block`
    pub async fn drag<F, Fut>(&self, block: F)
    where
        F: FnMut(AnchoredDragScope<SheetValue>) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.draggable.drag(MutatePriority::UserInput, block).await;
    }
}
