pub mod utf16;

pub use utf16::{byte_to_utf16_offset, utf16_len, utf16_to_byte_offset};
