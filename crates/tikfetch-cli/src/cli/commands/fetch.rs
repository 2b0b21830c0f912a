//! `tikfetch fetch <url>` – resolve one URL and exit.

use anyhow::Result;
use tikfetch_core::config::TikfetchConfig;
use tikfetch_core::controller::RequestController;
use tikfetch_core::state::RequestState;

use super::extractor_for;
use crate::cli::term::TermRender;

pub fn run_fetch(cfg: &TikfetchConfig, url: &str, endpoint: Option<String>) -> Result<()> {
    let extractor = extractor_for(cfg, endpoint);
    let mut controller = RequestController::new(TermRender);

    controller.set_input(url);
    controller.submit(&extractor);

    match controller.state() {
        RequestState::Result(_) => Ok(()),
        // The message was already rendered by the error panel.
        _ => anyhow::bail!("could not resolve a download link"),
    }
}
