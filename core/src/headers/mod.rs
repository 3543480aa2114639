//! headers/mod.rs
//! Public module export for the image container headers.
//!
//! Format notes:
//! - Fixed-size header (4 bytes) fronts every segment and command record.
//! - Explicit tag registries (SegTag, CmdTag) avoid silent incompatibilities.
//! - `length` counts the whole record, header included, so owning structures
//!   can skip bodies without decoding them.
//! - Headers are always parsed against an expected tag; a mismatch is a hard
//!   error, never a silent overwrite.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
