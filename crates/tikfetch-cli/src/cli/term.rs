//! Terminal implementation of the render seam.

use tikfetch_core::render::{Render, UiFrame};
use tikfetch_core::state::RequestState;

/// Renders state changes as plain lines: result and loading panels to
/// stdout, the error panel to stderr.
#[derive(Debug, Default)]
pub struct TermRender;

impl Render for TermRender {
    fn render(&mut self, frame: &UiFrame<'_>) {
        match frame.state {
            // Nothing is visible in the idle state.
            RequestState::Idle => {}
            RequestState::Loading => println!("Processing..."),
            RequestState::Result(payload) => {
                println!("Title:    {}", payload.display_title());
                println!("Download: {}", payload.video_url);
                println!("Save as:  {}", payload.suggested_filename());
            }
            RequestState::Error(payload) => eprintln!("Error: {}", payload.message),
        }
    }
}
