//! Error types for the nibble codec and the address converter.

use thiserror::Error;

// ============================================================================
// CODEC ERRORS
// ============================================================================

/// Errors produced by [`NibbleCodec`](crate::NibbleCodec).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid nibble value {0}: expected 0-15")]
    InvalidNibble(u8),

    #[error("invalid hex digit '{0}'")]
    InvalidHexDigit(char),

    #[error("invalid bit string '{0}': expected four '0'/'1' characters")]
    InvalidBits(String),

    /// Symbol outside the 16-symbol alphabet. `position` is the symbol
    /// index when the symbol came from a longer sequence.
    #[error("unknown symbol '{symbol}'{}", fmt_position(.position))]
    UnknownSymbol {
        symbol: char,
        position: Option<usize>,
    },

    #[error("alphabet must contain exactly 16 symbols, got {0}")]
    AlphabetSize(usize),

    #[error("symbol '{symbol}' bound to both nibble {first} and nibble {second}")]
    DuplicateSymbol { symbol: char, first: u8, second: u8 },

    #[error("nibble {0} is bound more than once")]
    DuplicateNibble(u8),

    #[error("symbol count {0} is odd: every byte needs two symbols")]
    TruncatedSymbols(usize),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" at position {}", p),
        None => String::new(),
    }
}

// ============================================================================
// CONVERTER ERRORS
// ============================================================================

/// Errors produced by the address pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Bad prefix, length, or character set.
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("symbol length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// Decoding finished mechanically but the result is not an address.
    #[error("decoded value is not a valid address: {decoded}")]
    DecodedValueInvalid { decoded: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ConvertError {
    /// Lift a codec error, surfacing positioned unknown symbols as
    /// [`ConvertError::UnknownSymbol`].
    pub(crate) fn from_codec(err: CodecError) -> Self {
        match err {
            CodecError::UnknownSymbol {
                symbol,
                position: Some(position),
            } => ConvertError::UnknownSymbol { symbol, position },
            other => ConvertError::Codec(other),
        }
    }
}
