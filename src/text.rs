//! Text utilities.
//!
//! Position mapping between LSP (line + UTF-16 column) coordinates and byte
//! offsets, plus the line-prefix and word extraction the handlers need.

pub mod position;

pub use position::{
    PositionMapper, compute_line_starts, convert_byte_to_utf16_in_line,
    convert_utf16_to_byte_in_line,
};
