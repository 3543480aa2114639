//! headers/types.rs
//! Core header struct and tag registries.
//!
//! Format notes:
//! - The header is 4 bytes, fixed length, big-endian, shared by every
//!   segment and command record in the container.
//! - Tag registries are closed sets fixed by the external boot-ROM
//!   specification; unknown bytes are caught at conversion, not at use.
//! - `length`/`param` are stored wider than their wire fields so callers
//!   can set any value while building; `export` rejects out-of-range
//!   values instead of truncating them.

use std::fmt;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::{HEADER_LEN, MAX_LENGTH, MAX_PARAM};
use crate::constants::{cmd_tags, seg_tags};

/// Segment tags (header registry).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum SegTag {
    Ivt = seg_tags::IVT,
    Dcd = seg_tags::DCD,
    Csf = seg_tags::CSF,
    Crt = seg_tags::CRT,
    Sig = seg_tags::SIG,
    Evt = seg_tags::EVT,
    Rvt = seg_tags::RVT,
    Wrp = seg_tags::WRP,
    Mac = seg_tags::MAC,
}

/// Command tags (header registry).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum CmdTag {
    Set = cmd_tags::SET,
    InsKey = cmd_tags::INS_KEY,
    AutDat = cmd_tags::AUT_DAT,
    WrtDat = cmd_tags::WRT_DAT,
    ChkDat = cmd_tags::CHK_DAT,
    Nop = cmd_tags::NOP,
    Init = cmd_tags::INIT,
    Unlk = cmd_tags::UNLK,
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Symbolic name for a tag byte, trying the segment registry first, then
/// the command registry, falling back to raw hex for unknown values.
pub fn tag_name_or_hex(raw: u8) -> String {
    if let Ok(tag) = SegTag::try_from_primitive(raw) {
        return format!("{tag:?}");
    }
    if let Ok(tag) = CmdTag::try_from_primitive(raw) {
        return format!("{tag:?}");
    }
    format!("0x{raw:X}")
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Header element fronting every segment and command record.
/// - `tag` is fixed at construction; a header is always "for" one tag.
/// - `length` counts the whole record in bytes, this header included.
/// - `param` is opaque here; the owning segment/command defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    tag: u8,
    pub length: u32,
    pub param: u16,
}

impl Header {
    /// Encoded width of the header itself.
    pub const SIZE: usize = HEADER_LEN;

    /// Create a header for `tag`. `length` starts at the header's own
    /// size and is raised once the caller knows the body size.
    pub fn new(tag: u8, param: u8) -> Self {
        Self {
            tag,
            length: Self::SIZE as u32,
            param: param as u16,
        }
    }

    /// Tag this header was constructed for.
    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Encoded width of the header itself.
    pub fn size(&self) -> usize {
        Self::SIZE
    }

    /// Human-readable rendering for diagnostics; not a wire format.
    pub fn info(&self) -> String {
        format!(
            "HEADER < TAG: {} (0x{:X}), PARAM: 0x{:X}, DLEN: {} Bytes >",
            tag_name_or_hex(self.tag),
            self.tag,
            self.param,
            self.length
        )
    }

    pub(crate) fn check_field_widths(&self) -> Result<(), HeaderError> {
        if self.length > MAX_LENGTH {
            return Err(HeaderError::FieldOverflow {
                field: "length",
                have: self.length,
                max: MAX_LENGTH,
            });
        }
        if self.param as u32 > MAX_PARAM {
            return Err(HeaderError::FieldOverflow {
                field: "param",
                have: self.param as u32,
                max: MAX_PARAM,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// Header wire-format errors.
/// - Each variant carries the values a caller needs to report the
///   corruption upward; none is a generic string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Decoded tag byte differs from the tag this header expects.
    #[error("invalid header tag 0x{found:X}, expected 0x{expected:X}")]
    TagMismatch { found: u8, expected: u8 },

    /// Buffer too short to contain a full header at the given offset.
    #[error("header buffer too short: {have} < {need}")]
    Truncated { have: usize, need: usize },

    /// A field value does not fit its fixed wire width.
    #[error("header field '{field}' out of range: {have} > {max}")]
    FieldOverflow {
        field: &'static str,
        have: u32,
        max: u32,
    },
}
