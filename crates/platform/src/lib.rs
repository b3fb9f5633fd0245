//! Platform layer: the contract the game logic programs against, and a
//! console runtime that implements it over a pluggable host backend.
//!
//! ```
//! use paint_run_platform::headless::{BoxText, Headless};
//! use paint_run_platform::{Config, Console, Platform};
//!
//! let mut console = Console::new(&Config::default(), Headless::new(), BoxText::new());
//! let red = console.rgb_pack(255, 0, 0);
//! console.set_foreground(red);
//! console.fill_circle(160, 120, 20);
//! console.update();
//! assert_eq!(console.backend().presented(), 1);
//! ```

pub mod backend;
pub mod config;
pub mod console;
pub mod contract;
pub mod headless;
pub mod overlay;

pub use paint_run_core as core;
pub use paint_run_input as input;
pub use paint_run_math as math;
pub use paint_run_types as types;

pub use backend::{Backend, TextService};
pub use config::Config;
pub use console::Console;
pub use contract::Platform;
