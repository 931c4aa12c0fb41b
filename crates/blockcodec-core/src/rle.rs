//! Run-length coding of byte sequences.
//!
//! A run of identical bytes becomes one `(count, value)` token. Counts are
//! a single byte, so runs longer than [`MAX_RUN`] are split into several
//! consecutive tokens of the same value. Decoding simply concatenates the
//! expansions and never needs to know that a run was split.
//!
//! The flat byte form interleaves `count, value` pairs:
//!
//! ```text
//! 01 01 01 02  ->  (3, 01) (1, 02)  ->  03 01 01 02
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest run a single token can carry.
pub const MAX_RUN: usize = u8::MAX as usize;

/// Errors that can occur while decoding a run-length stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RleError {
    /// Zero-count token or a stream that ends mid-token
    #[error("Malformed run-length stream at token {index}: {reason}")]
    MalformedStream { index: usize, reason: &'static str },
}

/// One run: `value` repeated `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunToken {
    pub count: u8,
    pub value: u8,
}

impl RunToken {
    pub fn new(count: u8, value: u8) -> Self {
        Self { count, value }
    }
}

/// Encode bytes into run tokens.
///
/// # Example
/// ```
/// use blockcodec_core::rle::{encode, RunToken};
///
/// let tokens = encode(&[7, 7, 7, 9]);
/// assert_eq!(tokens, vec![RunToken::new(3, 7), RunToken::new(1, 9)]);
/// ```
pub fn encode(data: &[u8]) -> Vec<RunToken> {
    let mut tokens = Vec::new();
    let mut rest = data;

    while let Some(&value) = rest.first() {
        let run = rest
            .iter()
            .take(MAX_RUN)
            .take_while(|&&b| b == value)
            .count();
        tokens.push(RunToken::new(run as u8, value));
        rest = &rest[run..];
    }

    tokens
}

/// Total number of bytes the tokens expand to.
pub fn decoded_len(tokens: &[RunToken]) -> usize {
    tokens.iter().map(|t| t.count as usize).sum()
}

/// Expand run tokens back into bytes.
///
/// # Errors
///
/// Returns [`RleError::MalformedStream`] if any token has a zero count.
/// Nothing is returned on failure, not even the bytes decoded so far.
pub fn decode(tokens: &[RunToken]) -> Result<Vec<u8>, RleError> {
    if let Some(index) = tokens.iter().position(|t| t.count == 0) {
        return Err(RleError::MalformedStream {
            index,
            reason: "zero run count",
        });
    }

    let mut data = Vec::with_capacity(decoded_len(tokens));
    for token in tokens {
        data.extend(std::iter::repeat(token.value).take(token.count as usize));
    }
    Ok(data)
}

/// Encode bytes straight into the flat `count, value` byte form.
pub fn encode_to_bytes(data: &[u8]) -> Vec<u8> {
    encode(data)
        .into_iter()
        .flat_map(|t| [t.count, t.value])
        .collect()
}

/// Parse the flat `count, value` byte form into tokens.
///
/// # Errors
///
/// Returns [`RleError::MalformedStream`] if the stream is truncated
/// mid-token (odd length) or carries a zero count.
pub fn tokens_from_bytes(bytes: &[u8]) -> Result<Vec<RunToken>, RleError> {
    if bytes.len() % 2 != 0 {
        return Err(RleError::MalformedStream {
            index: bytes.len() / 2,
            reason: "stream truncated mid-token",
        });
    }

    bytes
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| match pair[0] {
            0 => Err(RleError::MalformedStream {
                index,
                reason: "zero run count",
            }),
            count => Ok(RunToken::new(count, pair[1])),
        })
        .collect()
}

/// Decode the flat `count, value` byte form.
pub fn decode_from_bytes(bytes: &[u8]) -> Result<Vec<u8>, RleError> {
    decode(&tokens_from_bytes(bytes)?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
