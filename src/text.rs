//! Byte/text conversion shared by the key codecs and the diagnostics.
//!
//! Keys are rendered with a direct byte-to-character mapping: byte `b`
//! becomes the character `U+00bb`. The mapping is total and bijective over
//! byte sequences, which is what lets every codec in this crate promise
//! `decode(encode(bytes)) == bytes`.

use std::fmt;

/// Decode `bytes` into text, one character per byte.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Inverse of [`bytes_to_text`].
///
/// Characters above `U+00FF` cannot come out of [`bytes_to_text`]; when an
/// externally produced string carries them they are kept as their UTF-8
/// bytes instead of being rejected.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match u8::try_from(u32::from(c)) {
            Ok(b) => out.push(b),
            Err(_) => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out
}

/// Renders bytes in an unambiguous, printable form for logs.
///
/// Alphanumerics, space and common punctuation are printed as-is; any other
/// byte is printed as `\xHH`.
#[derive(Clone, Copy)]
pub struct BinaryDisplay<'a>(pub &'a [u8]);

const PRINTABLE_PUNCTUATION: &[u8] = b" `~!@#$%^&*()-_=+[]{}|;:'\",.<>/?";

impl fmt::Display for BinaryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            if b.is_ascii_alphanumeric() || PRINTABLE_PUNCTUATION.contains(&b) {
                write!(f, "{}", char::from(b))?;
            } else {
                write!(f, "\\x{b:02X}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BinaryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
