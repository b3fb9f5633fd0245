//! Fixed-point math library
//!
//! The game logic works exclusively in 16.16 fixed point. This crate is the only
//! place where those values cross into host floating point, and it does so in
//! exactly three entry points: [`sin`], [`cos`] and [`sqrt`]. Everything else
//! (including [`cos_table`]) is pure integer code.
//!
//! # Angles
//!
//! [`sin`] and [`cos`] take angles in **degrees**, encoded as fixed point
//! (`90 << 16` is a right angle). [`cos_table`] instead takes an 8-bit phase where
//! 256 steps make one full rotation, trading ~1.4° of resolution for a table
//! lookup.
//!
//! # Example
//!
//! ```
//! use paint_run_math::{cos, cos_table, sqrt, to_fixed, to_int};
//! use paint_run_types::FIXED_ONE;
//!
//! assert_eq!(cos(0), FIXED_ONE);
//! assert_eq!(cos_table(0), FIXED_ONE);
//! assert_eq!(to_int(sqrt(to_fixed(9))), 3);
//! ```

pub mod table;

pub use paint_run_types as types;

pub use table::COS_TABLE;

use crate::types::{Fixed, FIXED_ONE, FRACBITS};

const SCALE: f64 = FIXED_ONE as f64;

#[inline]
fn to_f64(n: Fixed) -> f64 {
    n as f64 / SCALE
}

// Truncates toward zero and saturates; NaN becomes 0.
#[inline]
fn from_f64(d: f64) -> Fixed {
    (d * SCALE) as Fixed
}

/// Sine of an angle given in fixed-point degrees.
pub fn sin(angle: Fixed) -> Fixed {
    from_f64(to_f64(angle).to_radians().sin())
}

/// Cosine of an angle given in fixed-point degrees.
pub fn cos(angle: Fixed) -> Fixed {
    from_f64(to_f64(angle).to_radians().cos())
}

/// Square root of a non-negative fixed-point value.
///
/// Negative input follows host semantics (NaN), which converts to 0. Callers
/// must not rely on that.
pub fn sqrt(n: Fixed) -> Fixed {
    from_f64(to_f64(n).sqrt())
}

/// Table cosine for an 8-bit phase (256 steps per rotation).
#[inline]
pub fn cos_table(phase: u8) -> Fixed {
    COS_TABLE[phase as usize]
}

/// Convert a whole number to fixed point.
#[inline]
pub const fn to_fixed(n: i32) -> Fixed {
    n << FRACBITS
}

/// Whole-number part (floor) of a fixed-point value.
#[inline]
pub const fn to_int(n: Fixed) -> i32 {
    n >> FRACBITS
}

/// Fixed-point multiply, widening through `i64`.
#[inline]
pub const fn mul(a: Fixed, b: Fixed) -> Fixed {
    ((a as i64 * b as i64) >> FRACBITS) as Fixed
}
