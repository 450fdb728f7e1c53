// RSAES-PKCS1-v1_5 format constants and decoder options.
//
// EM = 0x00 || 0x02 || PS || 0x00 || M, with PS at least 8 non-zero bytes.

/// Leading byte of every encoded message.
pub const LEADING_BYTE: u8 = 0x00;

/// Block type for encryption padding.
pub const BLOCK_TYPE: u8 = 0x02;

/// Minimum number of non-zero padding bytes.
pub const MIN_PADDING_LEN: usize = 8;

/// Length of the fixed prefix checked in one compare: two header bytes
/// plus the mandatory padding bytes.
pub const HEADER_LEN: usize = 2 + MIN_PADDING_LEN;

/// Shortest encoded message the decoder accepts.
pub const MIN_EM_LEN: usize = HEADER_LEN;

/// Fixed overhead of a well-formed message: prefix plus the zero terminator.
pub const MIN_OVERHEAD: usize = HEADER_LEN + 1;

/// Expected prefix bytes. Only the first two are compared for equality.
pub(crate) const HEADER_PATTERN: [u8; HEADER_LEN] =
    [LEADING_BYTE, BLOCK_TYPE, 0, 0, 0, 0, 0, 0, 0, 0];

/// Positions of the prefix that must equal `HEADER_PATTERN`.
pub(crate) const HEADER_EQ_MASK: [u8; HEADER_LEN] = [0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0, 0];

/// Positions of the prefix that must differ from `HEADER_PATTERN` (i.e. be
/// non-zero padding).
pub(crate) const HEADER_NEQ_MASK: [u8; HEADER_LEN] =
    [0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// Options for [`Pkcs1Decoder`](super::Pkcs1Decoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Required plaintext length. A message of any other length is treated
    /// like malformed padding and decodes to the sentinel.
    pub expected_len: Option<usize>,
}

impl DecodeOptions {
    /// Require the decoded plaintext to be exactly `len` bytes.
    pub fn with_expected_len(mut self, len: usize) -> Self {
        self.expected_len = Some(len);
        self
    }
}
