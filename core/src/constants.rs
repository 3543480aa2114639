/// Encoded width of every segment/command header, in bytes.
///
/// The format is fixed: one tag byte, a two-byte big-endian length, one
/// param byte. There are no variable-length header fields.
pub const HEADER_LEN: usize = 4;

/// Maximum value of the two-byte `length` wire field.
pub const MAX_LENGTH: u32 = u16::MAX as u32;

/// Maximum value of the one-byte `param` wire field.
pub const MAX_PARAM: u32 = u8::MAX as u32;

/// Segment tag identifiers (mirrored in headers).
pub mod seg_tags {
    pub const IVT: u8 = 0xD1; // Image Vector Table
    pub const DCD: u8 = 0xD2; // Device Configuration Data
    pub const CSF: u8 = 0xD4; // Command Sequence File
    pub const CRT: u8 = 0xD7; // Certificate
    pub const SIG: u8 = 0xD8; // Signature
    pub const EVT: u8 = 0xDB; // Event
    pub const RVT: u8 = 0xDD; // ROM Vector Table
    pub const WRP: u8 = 0x81; // Wrapped Key
    pub const MAC: u8 = 0xAC; // Message Authentication Code
}

/// Command tag identifiers (mirrored in headers).
pub mod cmd_tags {
    pub const SET: u8 = 0xB1; // Set
    pub const INS_KEY: u8 = 0xBE; // Install Key
    pub const AUT_DAT: u8 = 0xCA; // Authenticate Data
    pub const WRT_DAT: u8 = 0xCC; // Write Data
    pub const CHK_DAT: u8 = 0xCF; // Check Data
    pub const NOP: u8 = 0xC0; // No Operation
    pub const INIT: u8 = 0xB4; // Initialize
    pub const UNLK: u8 = 0xB2; // Unlock
}
