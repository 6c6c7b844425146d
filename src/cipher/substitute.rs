//! Explicit character replacement.

use std::collections::HashMap;

/// Replaces a single character using an explicit replacement map.
///
/// The replacement applies only to alphabetic characters: if `c` is a letter
/// and appears as a key of `map`, the mapped value is returned. Everything
/// else, including non-alphabetic characters that happen to be keys of the
/// map, comes back unchanged.
///
/// Replacement values are not constrained to a single character; a
/// multi-character value lengthens the ciphered text at that position.
///
/// # Arguments
///
/// * `c` - The character to replace
/// * `map` - The replacement table
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use calc_engine::cipher::replace_char;
///
/// let map = HashMap::from([('A', "X".to_string()), ('$', "%".to_string())]);
/// assert_eq!(replace_char('A', &map), "X");
/// assert_eq!(replace_char('B', &map), "B");
/// // '$' is a key, but non-alphabetic characters are never replaced.
/// assert_eq!(replace_char('$', &map), "$");
/// ```
pub fn replace_char(c: char, map: &HashMap<char, String>) -> String {
    if c.is_alphabetic() {
        if let Some(replacement) = map.get(&c) {
            return replacement.clone();
        }
    }
    c.to_string()
}
