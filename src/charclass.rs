//! ASCII character classes used by boundary extension.

use crate::constants::{PATH_CHARS, SCHEME_CHARS, USERINFO_CHARS};

/// Userinfo characters, absorbed leftward after `@`.
pub(crate) const USERINFO: CharClass = CharClass::new(USERINFO_CHARS);

/// Path characters, absorbed rightward after `/`.
pub(crate) const PATH: CharClass = CharClass::new(PATH_CHARS);

/// Scheme characters, absorbed leftward before `://`.
pub(crate) const SCHEME: CharClass = CharClass::new(SCHEME_CHARS);

/// A set of ASCII bytes with constant-time membership.
///
/// Non-ASCII bytes are never members, so walking a `&str` byte by byte
/// while the class matches always stops on a char boundary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CharClass([bool; 128]);

impl CharClass {
    /// Builds a class from the ASCII characters of `chars`.
    pub(crate) const fn new(chars: &str) -> Self {
        let bytes = chars.as_bytes();
        let mut table = [false; 128];
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] < 128 {
                table[bytes[i] as usize] = true;
            }
            i += 1;
        }
        Self(table)
    }

    /// Returns true if `byte` is in the class.
    pub(crate) fn contains(&self, byte: u8) -> bool {
        self.0.get(usize::from(byte)).copied().unwrap_or(false)
    }

    /// Returns true if every byte of `s` is in the class.
    pub(crate) fn contains_all(&self, s: &str) -> bool {
        s.bytes().all(|b| self.contains(b))
    }

    /// Returns the first character of `s` outside the class, with its byte offset.
    pub(crate) fn first_outside(&self, s: &str) -> Option<(usize, char)> {
        s.char_indices()
            .find(|&(_, c)| !c.is_ascii() || !self.contains(c as u8))
    }
}
