//! Rasterizer core - direct pixel manipulation of a packed framebuffer
//!
//! This crate owns everything that writes pixels. It has **no dependency** on a
//! window system, terminal or font engine, which keeps it:
//!
//! - **Deterministic**: the same calls always produce the same bytes
//! - **Testable**: framebuffers are plain memory and can be read back
//! - **Portable**: a host only needs to show the bytes somewhere
//!
//! # Module Structure
//!
//! - [`pixel`]: 32-bit packed pixel formats and RGB packing
//! - [`framebuffer`]: pitch-addressed pixel memory with clipped span writes
//! - [`canvas`]: color registers plus the line, rectangle, triangle and circle primitives
//! - [`surface`]: coverage surfaces produced by text rendering, blitted by the canvas
//! - [`rng`]: deterministic random numbers for the platform's `rand`
//!
//! # Addressing
//!
//! Rows are always stepped by the framebuffer pitch, never by its width, so
//! padded scanlines are handled uniformly by every primitive.
//!
//! # Example
//!
//! ```
//! use paint_run_core::{Canvas, FrameBuffer, PixelFormat};
//!
//! let mut canvas = Canvas::new(FrameBuffer::new(320, 240, PixelFormat::Xrgb8888));
//! canvas.clear();
//! canvas.fill_rect(10, 10, 5, 5);
//!
//! let fg = canvas.colors().foreground;
//! assert_eq!(canvas.framebuffer().pixel(12, 12), Some(fg));
//! assert_eq!(canvas.framebuffer().pixel(20, 20), Some(canvas.colors().background));
//! ```

pub mod canvas;
pub mod framebuffer;
pub mod pixel;
pub mod rng;
pub mod surface;

pub use paint_run_types as types;

pub use canvas::{Canvas, ColorRegisters};
pub use framebuffer::FrameBuffer;
pub use pixel::PixelFormat;
pub use rng::{SimpleRng, RAND_MAX};
pub use surface::Surface;
