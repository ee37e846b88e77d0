//! Anchor sets
//!
//! An [`AnchorSet`] maps each discrete value a draggable can rest at to its
//! position along the drag axis. Sets are immutable once built; layout builds a
//! fresh one whenever the measured size changes.
//!
//! ```ignore
//! let anchors = AnchorSet::builder()
//!     .at(SheetValue::Hidden, 800.0)
//!     .at(SheetValue::Expanded, 200.0)
//!     .build();
//! ```

use smallvec::SmallVec;

/// Inline capacity; sheets use three anchors, two-state toggles use two.
type Storage<T> = SmallVec<[(T, f32); 4]>;

/// Immutable mapping from values to positions
#[derive(Clone, Debug)]
pub struct AnchorSet<T> {
    anchors: Storage<T>,
}

impl<T> Default for AnchorSet<T> {
    fn default() -> Self {
        Self {
            anchors: SmallVec::new(),
        }
    }
}

impl<T: PartialEq> AnchorSet<T> {
    /// An empty anchor set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AnchorSetBuilder<T> {
        AnchorSetBuilder {
            anchors: SmallVec::new(),
        }
    }

    /// Position of `value`, or NaN when it has no anchor
    pub fn position_of(&self, value: &T) -> f32 {
        self.anchors
            .iter()
            .find(|(key, _)| key == value)
            .map_or(f32::NAN, |(_, position)| *position)
    }

    pub fn has_anchor_for(&self, value: &T) -> bool {
        self.anchors.iter().any(|(key, _)| key == value)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anchors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&T, f32)> {
        self.anchors.iter().map(|(key, position)| (key, *position))
    }

    /// Smallest anchor position, NaN when empty
    pub fn min_position(&self) -> f32 {
        self.anchors
            .iter()
            .map(|(_, position)| *position)
            .reduce(f32::min)
            .unwrap_or(f32::NAN)
    }

    /// Largest anchor position, NaN when empty
    pub fn max_position(&self) -> f32 {
        self.anchors
            .iter()
            .map(|(_, position)| *position)
            .reduce(f32::max)
            .unwrap_or(f32::NAN)
    }
}

impl<T: PartialEq + Clone> AnchorSet<T> {
    /// The anchor closest to `position`
    ///
    /// Equidistant anchors resolve to the lower position, then to the earlier
    /// inserted value. Returns `None` when empty or when `position` is NaN.
    pub fn closest_anchor(&self, position: f32) -> Option<T> {
        self.closest_by(position, |anchor| Some((anchor - position).abs()))
    }

    /// The closest anchor at or above (`upward`) or at or below `position`
    ///
    /// Same tie-break as [`closest_anchor`](Self::closest_anchor). `None` when
    /// no anchor lies in that direction.
    pub fn closest_anchor_in_direction(&self, position: f32, upward: bool) -> Option<T> {
        self.closest_by(position, |anchor| {
            let delta = if upward {
                anchor - position
            } else {
                position - anchor
            };
            (delta >= 0.0).then_some(delta)
        })
    }

    fn closest_by(&self, position: f32, distance: impl Fn(f32) -> Option<f32>) -> Option<T> {
        if position.is_nan() {
            return None;
        }
        let mut best: Option<(&T, f32, f32)> = None;
        for (key, anchor) in &self.anchors {
            let Some(d) = distance(*anchor) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((_, best_d, best_anchor)) => {
                    d < best_d || (d == best_d && *anchor < best_anchor)
                }
            };
            if better {
                best = Some((key, d, *anchor));
            }
        }
        best.map(|(key, _, _)| key.clone())
    }
}

impl<T: PartialEq> PartialEq for AnchorSet<T> {
    /// Equal when both map the same values to the same positions, in any order
    fn eq(&self, other: &Self) -> bool {
        self.anchors.len() == other.anchors.len()
            && self
                .anchors
                .iter()
                .all(|(key, position)| other.position_of(key) == *position)
    }
}

impl<T: PartialEq> FromIterator<(T, f32)> for AnchorSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, f32)>>(iter: I) -> Self {
        let mut builder = AnchorSet::builder();
        for (value, position) in iter {
            builder.push(value, position);
        }
        builder.build()
    }
}

/// Builder for [`AnchorSet`]
///
/// Adding a value twice keeps its first slot and the last position.
#[derive(Debug)]
pub struct AnchorSetBuilder<T> {
    anchors: Storage<T>,
}

impl<T: PartialEq> AnchorSetBuilder<T> {
    /// Anchor `value` at `position`
    pub fn at(mut self, value: T, position: f32) -> Self {
        self.push(value, position);
        self
    }

    /// Anchor `value` at `position` only when `condition` holds
    pub fn at_if(self, condition: bool, value: T, position: f32) -> Self {
        if condition {
            self.at(value, position)
        } else {
            self
        }
    }

    /// Anchor `value` at `position` in place
    pub fn push(&mut self, value: T, position: f32) {
        match self.anchors.iter_mut().find(|(key, _)| *key == value) {
            Some(slot) => slot.1 = position,
            None => self.anchors.push((value, position)),
        }
    }

    pub fn build(self) -> AnchorSet<T> {
        AnchorSet {
            anchors: self.anchors,
        }
    }
}
