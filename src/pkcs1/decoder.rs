// PKCS#1 v1.5 decryption padding decoder.
//
// Argument checks look only at lengths and may return early. Once they
// pass, the content is validated in one fixed sequence: compare the
// prefix, search for the zero terminator, fold every check into a single
// selector byte, then use that selector to pick both the output bytes and
// the skip count. A malformed message is never reported as an error; it
// decodes to the caller's sentinel instead.

use log::{debug, trace};
use thiserror::Error;
use zeroize::Zeroizing;

use super::config::{
    DecodeOptions, HEADER_EQ_MASK, HEADER_LEN, HEADER_NEQ_MASK, HEADER_PATTERN, MIN_EM_LEN,
    MIN_OVERHEAD,
};
use crate::ct;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Misuse of the decoder. These depend only on buffer lengths and options,
/// never on buffer contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("encoded message too short: {len} bytes (minimum {min})")]
    MessageTooShort { len: usize, min: usize },
    #[error("sentinel longer than encoded message: {sentinel_len} > {em_len}")]
    SentinelTooLong { sentinel_len: usize, em_len: usize },
    #[error("output buffer too small: {len} bytes (need {required})")]
    OutputTooSmall { len: usize, required: usize },
    #[error("expected plaintext length {expected} does not fit in a {em_len}-byte message")]
    ExpectedLenTooLong { expected: usize, em_len: usize },
}

impl DecodeError {
    /// Status code returned for every usage error by C-style callers.
    pub const STATUS_CODE: i32 = -1;

    /// Negative status code for this error.
    pub fn code(&self) -> i32 {
        Self::STATUS_CODE
    }
}

// ---------------------------------------------------------------------------
// Decoded output
// ---------------------------------------------------------------------------

/// Owned result of [`Pkcs1Decoder::decode`].
///
/// Holds the full-length output buffer and the number of leading bytes to
/// skip. The buffer is wiped on drop.
pub struct Decoded {
    output: Zeroizing<Vec<u8>>,
    skip: usize,
}

impl Decoded {
    /// Bytes after the skip offset: the plaintext, or the sentinel.
    pub fn message(&self) -> &[u8] {
        &self.output[self.skip..]
    }

    /// Number of leading output bytes that carry no data.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// The whole output buffer, same length as the encoded message.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Copy `output[skip..]` into a new buffer that is wiped on drop.
    pub fn into_message(self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.output[self.skip..].to_vec())
    }
}

impl std::fmt::Debug for Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoded")
            .field("len", &self.output.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Pkcs1Decoder
// ---------------------------------------------------------------------------

/// Constant-time RSAES-PKCS1-v1_5 padding decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs1Decoder {
    options: DecodeOptions,
}

impl Pkcs1Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode `em` into `output[..em.len()]` and return the skip count.
    ///
    /// On well-formed padding `output[skip..em.len()]` is the plaintext.
    /// Otherwise the first `em.len()` bytes of `output` hold the sentinel
    /// right-aligned over zeros and `skip == em.len() - sentinel.len()`, so
    /// `output[skip..em.len()]` is exactly the sentinel. Both outcomes take
    /// the same path through the code.
    pub fn decode_into(
        &self,
        em: &[u8],
        sentinel: &[u8],
        output: &mut [u8],
    ) -> Result<usize, DecodeError> {
        self.check_args(em, sentinel, output.len())
            .inspect_err(|e| debug!("pkcs1 decode rejected: {e}"))?;

        let em_len = em.len();
        trace!(
            "pkcs1 decode: em_len={em_len} sentinel_len={} expected_len={:?}",
            sentinel.len(),
            self.options.expected_len
        );

        let mut padded_sentinel = Zeroizing::new(vec![0u8; em_len]);
        padded_sentinel[em_len - sentinel.len()..].copy_from_slice(sentinel);

        let mismatch = ct::compare(
            &em[..HEADER_LEN],
            &HEADER_PATTERN,
            &HEADER_EQ_MASK,
            &HEADER_NEQ_MASK,
        );

        // Index of the terminator, or em_len if there is none.
        let pos = ct::search(&em[HEADER_LEN..], 0) + HEADER_LEN;

        // 0xFF exactly when pos == em_len.
        let unterminated = !ct::propagate_ones(ct::fold_word(pos ^ em_len));
        let mut selector = mismatch | unterminated;

        if let Some(expected) = self.options.expected_len {
            let pt_len = em_len.wrapping_sub(pos).wrapping_sub(1);
            selector |= ct::propagate_ones(ct::fold_word(pt_len ^ expected));
        }

        ct::select(em, &padded_sentinel, &mut output[..em_len], selector);
        Ok(ct::select_index(pos + 1, em_len - sentinel.len(), selector))
    }

    /// Allocating form of [`decode_into`](Self::decode_into).
    pub fn decode(&self, em: &[u8], sentinel: &[u8]) -> Result<Decoded, DecodeError> {
        let mut output = Zeroizing::new(vec![0u8; em.len()]);
        let skip = self.decode_into(em, sentinel, &mut output)?;
        Ok(Decoded { output, skip })
    }

    fn check_args(
        &self,
        em: &[u8],
        sentinel: &[u8],
        output_len: usize,
    ) -> Result<(), DecodeError> {
        let em_len = em.len();
        if em_len < MIN_EM_LEN {
            return Err(DecodeError::MessageTooShort {
                len: em_len,
                min: MIN_EM_LEN,
            });
        }
        if sentinel.len() > em_len {
            return Err(DecodeError::SentinelTooLong {
                sentinel_len: sentinel.len(),
                em_len,
            });
        }
        if output_len < em_len {
            return Err(DecodeError::OutputTooSmall {
                len: output_len,
                required: em_len,
            });
        }
        if let Some(expected) = self.options.expected_len {
            // A message shorter than MIN_OVERHEAD has no room for any plaintext.
            let fits = em_len
                .checked_sub(MIN_OVERHEAD)
                .is_some_and(|max| expected <= max);
            if !fits {
                return Err(DecodeError::ExpectedLenTooLong { expected, em_len });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Convenience functions
// ---------------------------------------------------------------------------

/// Decode with default options into a caller-provided buffer.
pub fn decode_into(em: &[u8], sentinel: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
    Pkcs1Decoder::default().decode_into(em, sentinel, output)
}

/// Decode with default options into a freshly allocated buffer.
pub fn decode(em: &[u8], sentinel: &[u8]) -> Result<Decoded, DecodeError> {
    Pkcs1Decoder::default().decode(em, sentinel)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
