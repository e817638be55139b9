//! JSON byte coder: `Value` <-> UTF-8 JSON text, with `serde_json` as the
//! parse/render engine.

mod coder;
mod convert;
mod error;

pub use coder::{JsonByteCoder, JsonByteCoderOptions};
pub use error::JsonByteCoderError;
