mod fetch;
mod prompt;

pub use fetch::run_fetch;
pub use prompt::run_prompt;

use tikfetch_core::config::TikfetchConfig;
use tikfetch_core::extract::HttpExtractor;

/// Builds the extractor, applying a `--endpoint` override when given.
fn extractor_for(cfg: &TikfetchConfig, endpoint: Option<String>) -> HttpExtractor {
    match endpoint {
        Some(endpoint) => {
            let mut cfg = cfg.clone();
            cfg.endpoint = endpoint;
            HttpExtractor::from_config(&cfg)
        }
        None => HttpExtractor::from_config(cfg),
    }
}
