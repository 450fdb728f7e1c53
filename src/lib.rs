//! Ctpkcs1: constant-time PKCS#1 v1.5 padding decoding in Rust.
//!
//! The crate provides:
//! - Constant-time byte primitives (`ct`): one-propagation, select,
//!   masked compare and search
//! - A decoder for the RSAES-PKCS1-v1_5 encoded message produced by RSA
//!   decryption (`pkcs1`)
//!
//! The decoder never reports malformed padding. It always fills the output
//! and returns a skip offset; when the padding is invalid the bytes after
//! that offset are the caller's sentinel. Pick a random sentinel of the
//! expected plaintext length so the caller cannot tell the two cases apart.
//!
//! # Quick Start
//!
//! ```
//! use ctpkcs1::pkcs1;
//!
//! let mut em = vec![0x00, 0x02];
//! em.extend_from_slice(&[0x5A; 8]);
//! em.push(0x00);
//! em.extend_from_slice(b"secret");
//!
//! let decoded = pkcs1::decode(&em, b"random").unwrap();
//! assert_eq!(decoded.message(), b"secret");
//! ```

pub mod ct;
pub mod pkcs1;
