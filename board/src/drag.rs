//! Drag-gesture state producing card moves.
//!
//! One value tracks a single drag gesture from drag-start to drag-end:
//! which card was picked up and from which column, and which column the
//! pointer is currently over. A drop only yields a [`CardMove`] when both
//! halves are recorded; finishing or cancelling always clears the state, so
//! an abandoned gesture cannot leak into the next one.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// The card picked up at drag-start and the column it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    /// Column the card currently belongs to.
    pub column_id: String,
    /// The dragged card.
    pub card_id: String,
}

/// A completed drop, consumed by [`crate::content::ContentStore::move_card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMove {
    /// Column the card is leaving.
    pub source_column: String,
    /// Column the card lands in (appended at the end).
    pub target_column: String,
    /// The moved card.
    pub card_id: String,
}

/// Transient state for the drag gesture in progress, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    source: Option<DragSource>,
    target: Option<String>,
}

impl DragState {
    /// Drag-start: record the card being picked up.
    pub fn begin(&mut self, column_id: &str, card_id: &str) {
        self.source = Some(DragSource {
            column_id: column_id.to_owned(),
            card_id: card_id.to_owned(),
        });
        self.target = None;
    }

    /// Drag-over: the pointer is above `column_id`. Ignored when no drag is
    /// in progress (stray dragover events fire on unrelated mouse activity).
    pub fn hover(&mut self, column_id: &str) {
        if self.source.is_some() {
            self.target = Some(column_id.to_owned());
        }
    }

    /// Column currently highlighted as the drop target.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The card being dragged, if a gesture is in progress.
    #[must_use]
    pub fn dragging(&self) -> Option<&DragSource> {
        self.source.as_ref()
    }

    /// Drag-end: yield the move if both a dragged card and a drop target
    /// were recorded, clearing the gesture either way.
    pub fn finish(&mut self) -> Option<CardMove> {
        let source = self.source.take();
        let target = self.target.take();
        match (source, target) {
            (Some(source), Some(target)) => Some(CardMove {
                source_column: source.column_id,
                target_column: target,
                card_id: source.card_id,
            }),
            _ => None,
        }
    }

    /// Abandon the gesture without producing a move.
    pub fn cancel(&mut self) {
        self.source = None;
        self.target = None;
    }
}
