//! Runtime configuration.
//!
//! # Environment Variables
//!
//! - `PAINT_RUN_WIDTH`, `PAINT_RUN_HEIGHT`: framebuffer size (default 320x240)
//! - `PAINT_RUN_PIXEL_FORMAT`: `xrgb8888` (default) or `xbgr8888`
//! - `PAINT_RUN_FRAME_MS`: sleep between polls in blocking overlays (default 16)
//! - `PAINT_RUN_SEED`: initial RNG seed (default 7)
//! - `PAINT_RUN_LOG_PATH`: write logs to this file instead of stderr
//!
//! Unparseable or zero values fall back to the defaults.

use crate::core::PixelFormat;
use crate::types::{DEFAULT_FRAME_MS, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub frame_ms: u64,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            format: PixelFormat::Xrgb8888,
            frame_ms: DEFAULT_FRAME_MS,
            seed: DEFAULT_SEED,
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup("PAINT_RUN_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&w: &u32| w > 0)
            .unwrap_or(defaults.width);
        let height = lookup("PAINT_RUN_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&h: &u32| h > 0)
            .unwrap_or(defaults.height);

        let format = lookup("PAINT_RUN_PIXEL_FORMAT")
            .and_then(|s| PixelFormat::from_str(s.trim()))
            .unwrap_or(defaults.format);

        let frame_ms = lookup("PAINT_RUN_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.frame_ms);

        let seed = lookup("PAINT_RUN_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let log_path = lookup("PAINT_RUN_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            format,
            frame_ms,
            seed,
            log_path,
        }
    }
}
