//! Delimiter escaping shared by every composite key layout.
//!
//! An [`Escaper`] turns one binary field into a token in which every
//! occurrence of its delimiter is preceded by its marker, so a list of
//! tokens joined with the delimiter can be split apart again.
//!
//! Decoding strips a marker in front of a delimiter wherever it appears, and
//! splitting never treats `marker + delimiter` as a boundary. A field whose
//! text ends with the marker therefore merges with the next field of a
//! joined key. Previously indexed identifiers rely on this layout, so it
//! must not change.

use crate::{
    error::FormatError,
    text::{bytes_to_text, text_to_bytes},
};

/// Hyphen delimiter with a backslash marker, the layout used for cell keys.
pub const HYPHEN_ESCAPER: Escaper = Escaper::new('-', '\\');

/// Escaping primitive parameterized by delimiter and escape marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaper {
    delimiter: char,
    marker: char,
}

impl Escaper {
    /// Build an escaper. `delimiter` and `marker` must differ.
    pub const fn new(delimiter: char, marker: char) -> Self {
        assert!(delimiter != marker, "delimiter and marker must differ");
        Self { delimiter, marker }
    }

    /// The character separating tokens.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The character written in front of a delimiter inside a token.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Escape one field into a token.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let text = bytes_to_text(bytes);
        if !text.contains(self.delimiter) {
            return text;
        }
        let mut out = String::with_capacity(text.len() + 4);
        for c in text.chars() {
            if c == self.delimiter {
                out.push(self.marker);
            }
            out.push(c);
        }
        out
    }

    /// Reverse [`Escaper::encode`]. Never fails; malformed escaping decodes to
    /// whatever bytes the text spells out.
    pub fn decode(&self, token: &str) -> Vec<u8> {
        let mut pair = String::with_capacity(2);
        pair.push(self.marker);
        pair.push(self.delimiter);
        if token.contains(pair.as_str()) {
            let mut buf = [0u8; 4];
            let delimiter: &str = self.delimiter.encode_utf8(&mut buf);
            text_to_bytes(&token.replace(pair.as_str(), delimiter))
        } else {
            text_to_bytes(token)
        }
    }

    /// Split on every delimiter not immediately preceded by the marker.
    ///
    /// Empty tokens are kept, so `"a--b"` yields three tokens.
    pub fn split<'a>(&self, value: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut prev = None;
        for (idx, c) in value.char_indices() {
            if c == self.delimiter && prev != Some(self.marker) {
                tokens.push(&value[start..idx]);
                start = idx + c.len_utf8();
            }
            prev = Some(c);
        }
        tokens.push(&value[start..]);
        tokens
    }

    /// Encode every field and join the tokens with the delimiter.
    pub fn join(&self, fields: &[&[u8]]) -> String {
        let mut out = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            out.push_str(&self.encode(field));
        }
        out
    }

    /// Split `value` into exactly `N` tokens and decode each of them.
    pub fn decode_exact<const N: usize>(&self, value: &str) -> Result<[Vec<u8>; N], FormatError> {
        let tokens = self.split(value);
        if tokens.len() != N {
            return Err(FormatError::FieldCount {
                expected: N,
                actual: tokens.len(),
                value: value.to_string(),
            });
        }
        Ok(std::array::from_fn(|i| self.decode(tokens[i])))
    }
}
