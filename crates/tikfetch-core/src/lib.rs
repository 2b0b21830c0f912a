//! tikfetch-core: request controller and extractor client for resolving
//! TikTok links into direct download targets via a remote extraction service.

pub mod config;
pub mod controller;
pub mod extract;
pub mod filename;
pub mod input;
pub mod logging;
pub mod render;
pub mod state;
