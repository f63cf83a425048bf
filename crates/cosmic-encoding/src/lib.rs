//! # cosmic-encoding
//!
//! Converts 20-byte hex addresses (`0x` + 40 hex digits) to and from a
//! 16-symbol "block" alphabet where every symbol carries exactly one nibble.
//!
//! ## Layers
//!
//! | Module        | Role |
//! |---------------|------|
//! | [`nibble`]    | nibble ↔ symbol bijection and 4-bit binary form |
//! | [`text`]      | generic text codec (2 symbols per UTF-8 byte) and analysis |
//! | [`address`]   | validation, normalization, [`Address`] value type |
//! | [`converter`] | direct and text pipelines, batch, analysis |
//!
//! ## Example
//!
//! ```
//! use cosmic_encoding::{AddressConverter, ConvertError};
//!
//! let converter = AddressConverter::default();
//!
//! let text = converter
//!     .encode_text("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
//!     .unwrap();
//! assert_eq!(text.encoding_length, 84);
//!
//! let failure = converter.decode_direct("too short").unwrap_err();
//! assert!(matches!(failure.error, ConvertError::LengthMismatch { .. }));
//! ```

pub mod address;
pub mod converter;
pub mod error;
pub mod nibble;
pub mod text;

pub use address::{
    is_valid_address, normalize_address, Address, ADDRESS_BYTES, ADDRESS_HEX_LEN, ADDRESS_PREFIX,
};
pub use converter::{
    AddressAnalysis, AddressConverter, Conversion, ConversionFailure, Decoded, Encoded,
    MappingDetail, Method,
};
pub use error::{CodecError, ConvertError};
pub use nibble::{nibble_to_bits, NibbleCodec, ALPHABET_SIZE, BLOCK_ALPHABET};
pub use text::{CharClass, TextAnalysis, SYMBOLS_PER_BYTE};
