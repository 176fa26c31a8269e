//! Turning a store-size change into a concrete view-update instruction.

/// What the view layer must do to its message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAction {
    /// Throw away the rendered list and redraw from the current snapshot.
    FullReset,
    /// Positional range-changed notification at the current tail, mirroring
    /// the list-view convention of (position, count) both set to the new
    /// length.
    AppendRange { start: usize, end: usize },
}

/// One view-update instruction, emitted after every applied batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderUpdate {
    pub action: RenderAction,
    /// Index the view should scroll to, when the update targets the tail.
    pub scroll_to: Option<usize>,
    /// The loading indicator is dismissed on every update.
    pub hide_loading: bool,
    /// The transcript area becomes visible on every update.
    pub reveal_transcript: bool,
}

impl RenderUpdate {
    /// Redraw-everything instruction: used for the first batch, and as the
    /// escalation when a batch contained a non-tail insert and the append
    /// heuristic would misrender.
    pub(crate) fn full_reset() -> Self {
        Self {
            action: RenderAction::FullReset,
            scroll_to: None,
            hide_loading: true,
            reveal_transcript: true,
        }
    }
}

/// Decide how the view reacts to the transcript growing from `prior_count`
/// to `new_count` messages.
///
/// An empty prior transcript means the first batch just landed: redraw
/// everything. Any later growth is treated as an append at the tail with a
/// scroll to the newest message — valid as long as server timestamps are
/// monotonic per conversation; the subscription manager escalates to a full
/// reset when they are not.
pub fn reconcile(prior_count: usize, new_count: usize) -> RenderUpdate {
    if prior_count == 0 {
        RenderUpdate::full_reset()
    } else {
        RenderUpdate {
            action: RenderAction::AppendRange {
                start: new_count,
                end: new_count,
            },
            scroll_to: Some(new_count - 1),
            hide_loading: true,
            reveal_transcript: true,
        }
    }
}
