//! Caesar-style character rotation.
//!
//! This module provides the single-character rotation used by the cipher:
//! each ASCII letter moves a fixed number of positions within its own case's
//! 26-letter alphabet, wrapping circularly at either end.

/// The smallest accepted rotation amount.
pub const MIN_SHIFT: i32 = -25;

/// The largest accepted rotation amount.
pub const MAX_SHIFT: i32 = 25;

/// Rotates a single letter by `shift` positions within its own case's alphabet.
///
/// Lowercase letters wrap within `a..=z` and uppercase letters within
/// `A..=Z`, so the case of the input is always preserved. Any character that
/// is not an ASCII letter is returned unchanged regardless of the shift.
///
/// The wrap is plain modular arithmetic over the 26 alphabet positions
/// (`rem_euclid` keeps the result non-negative for leftward shifts), so
/// `shift_char(shift_char(c, n), -n) == c` for every letter and every `n`.
///
/// Range enforcement on the shift amount happens at the text level in
/// [`cipher_text`](crate::cipher::cipher_text); this function accepts any
/// `i32` and reduces it modulo 26.
///
/// # Arguments
///
/// * `c` - The character to rotate
/// * `shift` - Positions to move; positive shifts right, negative shifts left
///
/// # Examples
///
/// ```
/// use calc_engine::cipher::shift_char;
///
/// assert_eq!(shift_char('z', 1), 'a');
/// assert_eq!(shift_char('A', -1), 'Z');
/// assert_eq!(shift_char('@', 25), '@');
/// ```
pub fn shift_char(c: char, shift: i32) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };

    let position = (c as u8 - base) as i32;
    let wrapped = (position + shift).rem_euclid(26) as u8;
    (base + wrapped) as char
}
