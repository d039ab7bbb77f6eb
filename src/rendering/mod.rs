mod codec;

pub use codec::{decode_bytes, decode_image, encode_png, from_dynamic, write_png};
