//! Presentation seam: the controller renders through this trait and never
//! touches a concrete UI.

use crate::state::RequestState;

/// Snapshot of everything a frontend needs to draw one frame.
///
/// Exactly one of the loading/result/error panels is implied visible by
/// `state`; none is visible when idle.
#[derive(Debug, Clone, Copy)]
pub struct UiFrame<'a> {
    /// Current content of the text input.
    pub input: &'a str,
    /// The clear/reset affordance is shown only while the input is non-empty.
    pub clear_visible: bool,
    /// The submit affordance is disabled while a request is outstanding.
    pub submit_enabled: bool,
    /// Set on the frame following a clear, to return focus to the input.
    pub focus_input: bool,
    /// The single visible UI mode, with its payload.
    pub state: &'a RequestState,
}

/// One implementation per target UI toolkit.
pub trait Render {
    fn render(&mut self, frame: &UiFrame<'_>);
}
