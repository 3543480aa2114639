//! headers/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - Deserializes 4 big-endian bytes into an existing `Header` in place.
//! - Decoding is always done against the tag the header was constructed
//!   for; a mismatch is surfaced, never silently adopted, since every
//!   structure in the format knows which tag it expects before reading.
//! - On success `length`/`param` are fully overwritten; repeat calls on
//!   fresh byte windows are fine.

use log::trace;

use crate::headers::types::{fmt_bytes, tag_name_or_hex, Header, HeaderError};

impl Header {
    /// Decode 4 bytes from `data` starting at `offset` into this header.
    ///
    /// # Returns
    /// - `Ok(())` with `length`/`param` overwritten from the wire.
    /// - `Err(HeaderError::Truncated)` if fewer than 4 bytes remain.
    /// - `Err(HeaderError::TagMismatch)` if the decoded tag differs from
    ///   the tag this header expects; `length`/`param` are left untouched.
    pub fn parse(&mut self, data: &[u8], offset: usize) -> Result<(), HeaderError> {
        let have = data.len().saturating_sub(offset);
        if have < Self::SIZE {
            return Err(HeaderError::Truncated {
                have,
                need: Self::SIZE,
            });
        }

        let window = &data[offset..offset + Self::SIZE];
        let tag = window[0];
        if tag != self.tag() {
            return Err(HeaderError::TagMismatch {
                found: tag,
                expected: self.tag(),
            });
        }

        self.length = u16::from_be_bytes([window[1], window[2]]) as u32;
        self.param = window[3] as u16;
        trace!(
            "parsed {} header from {}",
            tag_name_or_hex(tag),
            fmt_bytes(window)
        );
        Ok(())
    }
}
