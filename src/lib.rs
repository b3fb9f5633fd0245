//! Paint Run platform layer (workspace facade crate).
//!
//! Re-exports the crates under `crates/` so callers can write
//! `paint_run::{core, input, math, platform, term, types}`.

pub use paint_run_core as core;
pub use paint_run_input as input;
pub use paint_run_math as math;
pub use paint_run_platform as platform;
pub use paint_run_term as term;
pub use paint_run_types as types;
