//! Base-58 codec: encode, decode and validate.
//!
//! # Canonical form
//! The payload is read as one big-endian unsigned integer and written out in
//! radix 58, most significant symbol first.  Leading zero bytes carry no
//! magnitude, so each one is written as a single leading [`ZERO_SYMBOL`]
//! instead.  Decoding reverses both steps, which makes
//! `decode(encode(x)) == x` hold for every accepted `x`.
//!
//! # Empty input
//! Empty input is rejected by `encode` and `decode` with
//! [`ValidationError::Empty`], and `is_valid("")` is `false`.  No empty
//! string is ever produced by `encode`, so the three operations agree.
//!
//! ```
//! use splurge_base58::codec::Base58;
//!
//! let codec = Base58::default();
//! let text = codec.encode(b"Hello World")?;
//! assert_eq!(text, "JxF12TrwUP45BMd");
//! assert_eq!(codec.decode(&text)?, b"Hello World");
//! assert!(codec.is_valid(&text));
//! # Ok::<(), splurge_base58::CodecError>(())
//! ```

mod error;

pub use error::{CodecError, ValidationError};

use tracing::trace;

use crate::alphabet::{self, RADIX, ZERO_SYMBOL};
use crate::bignum::Limbs;

/// Default encode bound in bytes.
pub const DEFAULT_MAX_ENCODE_LEN: usize = 2048;

/// Upper bound on the encoded length of any `n`-byte payload.
///
/// One byte needs at most log58(256) ~ 1.3657 symbols; 1.38 rounds that up
/// and the `+ 1` covers the final partial symbol.  A zero byte needs exactly
/// one symbol, which the bound also covers.
pub const fn encoded_len_bound(n: usize) -> usize {
    n.saturating_mul(138) / 100 + 1
}

// ── CodecConfig ──────────────────────────────────────────────────────────────

/// Length limits applied by [`Base58`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Largest payload `encode` accepts, in bytes.
    pub max_encode_len: usize,
    /// Longest text `decode` and `is_valid` accept, in characters.
    pub max_decode_len: usize,
}

impl CodecConfig {
    /// Limits for payloads up to `max_encode_len` bytes.  The decode bound is
    /// derived so every encoding of an accepted payload decodes again.
    pub const fn with_max_encode_len(max_encode_len: usize) -> Self {
        Self {
            max_encode_len,
            max_decode_len: encoded_len_bound(max_encode_len),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::with_max_encode_len(DEFAULT_MAX_ENCODE_LEN)
    }
}

// ── Base58 ───────────────────────────────────────────────────────────────────

/// The codec.  Stateless apart from its limits; share freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base58 {
    config: CodecConfig,
}

impl Base58 {
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `data` as base-58 text.
    ///
    /// # Errors
    /// - [`ValidationError::Empty`] when `data` is empty.
    /// - [`ValidationError::TooLong`] when `data` exceeds `max_encode_len`.
    pub fn encode(&self, data: &[u8]) -> Result<String, CodecError> {
        trace!(len = data.len(), "base58 encode");
        if data.is_empty() {
            return Err(ValidationError::Empty.into());
        }
        if data.len() > self.config.max_encode_len {
            return Err(ValidationError::TooLong {
                len: data.len(),
                max: self.config.max_encode_len,
            }
            .into());
        }

        let zeros = data.iter().take_while(|&&b| b == 0).count();
        let mut n = Limbs::from_be_bytes(&data[zeros..]);

        // Least significant symbol first.
        let mut digits = Vec::with_capacity(encoded_len_bound(data.len() - zeros));
        while !n.is_zero() {
            let rem = n.div_rem_small(RADIX);
            digits.push(alphabet::symbol(rem as u8));
        }

        let mut out = String::with_capacity(zeros + digits.len());
        out.extend(std::iter::repeat(char::from(ZERO_SYMBOL)).take(zeros));
        out.extend(digits.iter().rev().map(|&b| char::from(b)));
        trace!(len = out.len(), zeros, "base58 encoded");
        Ok(out)
    }

    /// Decode base-58 text back into the original bytes.
    ///
    /// # Errors
    /// - [`ValidationError::Empty`] when `text` is empty.
    /// - [`ValidationError::TooLong`] when `text` exceeds `max_decode_len`
    ///   characters.
    /// - [`ValidationError::InvalidCharacter`] for the first character outside
    ///   the alphabet.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        trace!(len = text.len(), "base58 decode");
        self.validate(text)?;

        let bytes = text.as_bytes();
        let zeros = bytes.iter().take_while(|&&b| b == ZERO_SYMBOL).count();
        let mut n = Limbs::with_byte_capacity(bytes.len() - zeros);
        // Every byte is an alphabet member once validate() has passed.
        for value in bytes[zeros..].iter().filter_map(|&b| alphabet::value_of(b)) {
            n.mul_add_small(RADIX, u32::from(value));
        }

        let magnitude = n.to_be_bytes();
        let mut out = Vec::with_capacity(zeros + magnitude.len());
        out.resize(zeros, 0u8);
        out.extend_from_slice(&magnitude);
        trace!(len = out.len(), zeros, "base58 decoded");
        Ok(out)
    }

    /// Decode text supplied as raw bytes.
    ///
    /// # Errors
    /// [`CodecError::TypeMismatch`] when `raw` is not UTF-8, otherwise as
    /// [`Base58::decode`].
    pub fn decode_bytes(&self, raw: &[u8]) -> Result<Vec<u8>, CodecError> {
        let text = std::str::from_utf8(raw)
            .map_err(|_| CodecError::TypeMismatch { expected: "UTF-8 text" })?;
        self.decode(text)
    }

    /// `true` when `decode` would accept `text`.  Never fails.
    pub fn is_valid(&self, text: &str) -> bool {
        self.validate(text).is_ok()
    }

    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        // Byte length bounds character count from above.
        if text.len() > self.config.max_decode_len {
            let len = text.chars().count();
            if len > self.config.max_decode_len {
                return Err(ValidationError::TooLong { len, max: self.config.max_decode_len });
            }
        }
        match text.chars().enumerate().find(|&(_, c)| !alphabet::contains(c)) {
            Some((position, character)) => {
                Err(ValidationError::InvalidCharacter { character, position })
            }
            None => Ok(()),
        }
    }
}

// ── Default-configured shortcuts ─────────────────────────────────────────────

/// [`Base58::encode`] with the default limits.
pub fn encode(data: &[u8]) -> Result<String, CodecError> {
    Base58::default().encode(data)
}

/// [`Base58::decode`] with the default limits.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Base58::default().decode(text)
}

/// [`Base58::is_valid`] with the default limits.
pub fn is_valid(text: &str) -> bool {
    Base58::default().is_valid(text)
}
