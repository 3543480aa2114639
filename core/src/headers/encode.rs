//! headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Serializes a `Header` into a fixed 4-byte buffer in big-endian order.
//! - Field order is tag, length, param; widths 1, 2, 1 bytes.
//! - Field widths are validated before writing so an out-of-range value
//!   fails instead of producing a wrapped byte sequence.

use crate::constants::HEADER_LEN;
use crate::headers::types::{Header, HeaderError};

impl Header {
    /// Serialize this header into its 4-byte big-endian wire form.
    ///
    /// # Returns
    /// - `Ok([u8; Self::SIZE])` containing the encoded header bytes.
    /// - `Err(HeaderError::FieldOverflow)` if `length` exceeds two bytes
    ///   or `param` exceeds one byte.
    pub fn export(&self) -> Result<[u8; HEADER_LEN], HeaderError> {
        self.check_field_widths()?;

        let mut out = [0u8; HEADER_LEN];
        out[0] = self.tag();
        out[1..3].copy_from_slice(&(self.length as u16).to_be_bytes());
        out[3] = self.param as u8;
        Ok(out)
    }
}
