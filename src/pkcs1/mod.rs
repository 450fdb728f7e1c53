// RSAES-PKCS1-v1_5 padding decoding (RFC 8017, Section 7.2.2).
//
// # Modules
//
// - `config`: format constants and decoder options
// - `decoder`: constant-time decoder with sentinel substitution

pub mod config;
pub mod decoder;

// Re-export key types for convenience.
pub use config::DecodeOptions;
pub use decoder::{DecodeError, Decoded, Pkcs1Decoder, decode, decode_into};
