//! `tikfetch prompt` – interactive loop modeling the single-page form.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tikfetch_core::config::TikfetchConfig;
use tikfetch_core::controller::RequestController;

use super::extractor_for;
use crate::cli::term::TermRender;

pub fn run_prompt(cfg: &TikfetchConfig, endpoint: Option<String>) -> Result<()> {
    let extractor = extractor_for(cfg, endpoint);
    let mut controller = RequestController::new(TermRender);

    println!("Paste a TikTok URL. Empty line or :clear resets, :quit exits.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("tikfetch> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let line = line.trim_end();

        match line {
            ":quit" | ":q" => break,
            "" | ":clear" => controller.clear_input(),
            url => {
                // Every line arrives as a paste, so tracking suffixes get
                // stripped before validation.
                controller.paste(url);
                controller.submit(&extractor);
            }
        }
    }

    Ok(())
}
