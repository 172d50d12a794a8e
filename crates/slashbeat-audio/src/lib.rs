// Decoding uploaded audio into the mono buffer consumed by chart analysis

mod decode;
mod error;

pub use decode::{decode_bytes, decode_file};
pub use error::DecodeError;

/// Decoded first-channel audio.
pub type DecodedAudio = slashbeat_model::AudioBuffer;
