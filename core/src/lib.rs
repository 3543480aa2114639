//! imximage-core
//!
//! Binary header format for secure-boot image containers.
//! No image assembly, no crypto, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

// Wire format
pub mod headers;
