//! Cipher engine for the Cipher and Payroll Calculation Engine.
//!
//! This module contains the single-character transformations (Caesar-style
//! rotation and explicit replacement) and the text-level function that
//! applies one of them across a whole string.

mod shift;
mod substitute;
mod text;

pub use shift::{MAX_SHIFT, MIN_SHIFT, shift_char};
pub use substitute::replace_char;
pub use text::cipher_text;
