//! Cipher key model.
//!
//! This module defines the tagged key type that selects which transformation
//! the cipher applies. Resolving the key once at the type level replaces the
//! runtime type inspection a dynamically-typed caller would otherwise need.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Selects the transformation applied by [`cipher_text`](crate::cipher::cipher_text).
///
/// On the wire this is untagged: a bare integer deserializes as a rotation
/// amount and a JSON object deserializes as a replacement map, so request
/// payloads carry the key in the same shape a dynamically-typed client would
/// send it. Anything else (a float, a string, an array) is rejected during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CipherKey {
    /// Caesar-style rotation by the given number of positions.
    ///
    /// Positive values shift right, negative values shift left. The amount
    /// must lie in `[-25, 25]`; this is validated when the key is applied,
    /// not at construction.
    Rotate(i32),

    /// Explicit replacement of individual characters.
    ///
    /// Keys are single characters; values may be longer than one character,
    /// in which case the output grows accordingly. Characters absent from
    /// the map, and non-alphabetic characters, pass through unchanged.
    Substitute(HashMap<char, String>),
}

impl CipherKey {
    /// Returns true if this key is a rotation.
    pub fn is_rotation(&self) -> bool {
        matches!(self, CipherKey::Rotate(_))
    }
}
