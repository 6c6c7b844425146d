//! Text-level cipher application.

use crate::error::{EngineError, EngineResult};
use crate::models::CipherKey;

use super::shift::{MAX_SHIFT, MIN_SHIFT, shift_char};
use super::substitute::replace_char;

/// Ciphers a whole string with the given key.
///
/// For a [`CipherKey::Rotate`] key, every character is rotated by the key's
/// shift amount via [`shift_char`]; the amount is validated once, before any
/// character is transformed, and must lie in `[-25, 25]`. For a
/// [`CipherKey::Substitute`] key, every character goes through
/// [`replace_char`] with the key's map.
///
/// Characters are processed strictly in input order and results concatenated,
/// so the output length equals the input length unless a substitution value
/// is longer than one character.
///
/// This function is pure: it performs no logging of its own. Callers that
/// want a diagnostic record of each transformation log the input, key, and
/// output themselves (the HTTP handler does this at debug level).
///
/// # Arguments
///
/// * `text` - The text to cipher
/// * `key` - The rotation amount or replacement map to apply
///
/// # Returns
///
/// The ciphered text, or `ShiftOutOfRange` if a rotation key's shift amount
/// is outside `[-25, 25]`.
///
/// # Examples
///
/// ```
/// use calc_engine::cipher::cipher_text;
/// use calc_engine::models::CipherKey;
///
/// let out = cipher_text("AbCdE", &CipherKey::Rotate(5)).unwrap();
/// assert_eq!(out, "FgHiJ");
///
/// assert!(cipher_text("AbCdE", &CipherKey::Rotate(26)).is_err());
/// ```
pub fn cipher_text(text: &str, key: &CipherKey) -> EngineResult<String> {
    match key {
        CipherKey::Rotate(shift) => {
            if *shift < MIN_SHIFT || *shift > MAX_SHIFT {
                return Err(EngineError::ShiftOutOfRange { shift: *shift });
            }
            Ok(text.chars().map(|c| shift_char(c, *shift)).collect())
        }
        CipherKey::Substitute(map) => {
            let mut output = String::with_capacity(text.len());
            for c in text.chars() {
                output.push_str(&replace_char(c, map));
            }
            Ok(output)
        }
    }
}
