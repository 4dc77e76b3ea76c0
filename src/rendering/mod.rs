pub mod decode;
pub mod png_writer;

pub use decode::{decode, decode_bytes};
pub use png_writer::{encode_png, optimize_png, write_atomic};
