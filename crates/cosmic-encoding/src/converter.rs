//! Address ↔ block-symbol conversion pipelines.
//!
//! Two pipelines share the same validation gates:
//!
//! | Method                          | Encodes                        | Length |
//! |---------------------------------|--------------------------------|--------|
//! | [`Method::DirectHexMapping`]    | the 40 hex digits, one symbol each | 40 |
//! | [`Method::TextEncoding`]        | the whole normalized string as text | 84 |
//!
//! Every operation returns a [`Conversion`]; nothing panics or aborts the
//! caller on bad input.
//!
//! # Example
//!
//! ```
//! use cosmic_encoding::AddressConverter;
//!
//! let converter = AddressConverter::default();
//! let encoded = converter
//!     .encode_direct("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045")
//!     .unwrap();
//! assert_eq!(encoded.encoding_length, 40);
//!
//! let decoded = converter.decode_direct(&encoded.encoding).unwrap();
//! assert_eq!(decoded.decoded_address, "0xd8da6bf26964af9d7eed9e03e53415d37aa96045");
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::address::{is_valid_address, Address, ADDRESS_HEX_LEN, ADDRESS_PREFIX};
use crate::error::ConvertError;
use crate::nibble::{nibble_to_bits, NibbleCodec};
use crate::text::TextAnalysis;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Pipeline tag carried by every success payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    DirectHexMapping,
    TextEncoding,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::DirectHexMapping => "direct_hex_mapping",
            Method::TextEncoding => "text_encoding",
        }
    }
}

/// Successful encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub original_address: String,
    pub normalized_address: String,
    /// The 40 digits that were mapped (direct pipeline only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_part: Option<String>,
    pub encoding: String,
    /// Length in symbols, not bytes.
    pub encoding_length: usize,
    pub method: Method,
}

/// Successful decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub symbols: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_part: Option<String>,
    pub decoded_address: String,
    pub method: Method,
}

/// Character breakdown of a normalized address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressAnalysis {
    pub address: String,
    pub character_analysis: TextAnalysis,
    pub total_characters: usize,
}

/// One row of the direct-pipeline mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingDetail {
    /// 1-based digit position after the prefix.
    pub position: usize,
    pub hex_digit: char,
    pub bits: String,
    pub symbol: char,
}

/// Failed conversion: the input as given plus the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ConversionFailure {
    pub input: String,
    pub error: ConvertError,
}

impl ConversionFailure {
    pub fn new(input: impl Into<String>, error: ConvertError) -> Self {
        Self {
            input: input.into(),
            error,
        }
    }
}

/// Either a success payload or a [`ConversionFailure`], never both.
pub type Conversion<T> = Result<T, ConversionFailure>;

// ============================================================================
// CONVERTER
// ============================================================================

/// Validates addresses and runs both conversion pipelines.
#[derive(Debug, Clone, Default)]
pub struct AddressConverter {
    codec: NibbleCodec,
}

impl AddressConverter {
    pub fn new(codec: NibbleCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &NibbleCodec {
        &self.codec
    }

    /// Map each of the 40 hex digits to one symbol.
    pub fn encode_direct(&self, address: &str) -> Conversion<Encoded> {
        finish("encode_direct", address, self.try_encode_direct(address))
    }

    fn try_encode_direct(&self, address: &str) -> Result<Encoded, ConvertError> {
        let normalized = Address::parse(address)?;
        let hex_part = normalized.hex_part().to_string();

        let encoding = hex_part
            .chars()
            .map(|digit| self.codec.hex_digit_to_symbol(digit))
            .collect::<Result<String, _>>()?;

        Ok(Encoded {
            original_address: address.to_string(),
            normalized_address: normalized.into_string(),
            hex_part: Some(hex_part),
            encoding_length: encoding.chars().count(),
            encoding,
            method: Method::DirectHexMapping,
        })
    }

    /// Encode the whole normalized address (prefix included) as text.
    pub fn encode_text(&self, address: &str) -> Conversion<Encoded> {
        finish("encode_text", address, self.try_encode_text(address))
    }

    fn try_encode_text(&self, address: &str) -> Result<Encoded, ConvertError> {
        let normalized = Address::parse(address)?.into_string();
        let encoding = self.codec.encode_text(&normalized);

        Ok(Encoded {
            original_address: address.to_string(),
            normalized_address: normalized,
            hex_part: None,
            encoding_length: encoding.chars().count(),
            encoding,
            method: Method::TextEncoding,
        })
    }

    /// Inverse of [`encode_direct`](Self::encode_direct). Requires exactly 40
    /// symbols.
    pub fn decode_direct(&self, symbols: &str) -> Conversion<Decoded> {
        finish("decode_direct", symbols, self.try_decode_direct(symbols))
    }

    fn try_decode_direct(&self, symbols: &str) -> Result<Decoded, ConvertError> {
        let actual = symbols.chars().count();
        if actual != ADDRESS_HEX_LEN {
            return Err(ConvertError::LengthMismatch {
                expected: ADDRESS_HEX_LEN,
                actual,
            });
        }

        let hex_part = symbols
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.codec
                    .symbol_to_hex_digit(symbol)
                    .map_err(|_| ConvertError::UnknownSymbol { symbol, position })
            })
            .collect::<Result<String, _>>()?;

        let decoded = format!("{}{}", ADDRESS_PREFIX, hex_part);

        // Every nibble yields a hex digit, so this only trips if the address
        // format itself drifts from what the pipeline assembles.
        if !is_valid_address(&decoded) {
            return Err(ConvertError::DecodedValueInvalid { decoded });
        }

        Ok(Decoded {
            symbols: symbols.to_string(),
            hex_part: Some(hex_part),
            decoded_address: decoded,
            method: Method::DirectHexMapping,
        })
    }

    /// Inverse of [`encode_text`](Self::encode_text). A mechanically decoded
    /// string that is not an address is returned inside
    /// [`ConvertError::DecodedValueInvalid`].
    pub fn decode_text(&self, symbols: &str) -> Conversion<Decoded> {
        finish("decode_text", symbols, self.try_decode_text(symbols))
    }

    fn try_decode_text(&self, symbols: &str) -> Result<Decoded, ConvertError> {
        let decoded = self
            .codec
            .decode_text(symbols)
            .map_err(ConvertError::from_codec)?;

        if !is_valid_address(&decoded) {
            return Err(ConvertError::DecodedValueInvalid { decoded });
        }

        Ok(Decoded {
            symbols: symbols.to_string(),
            hex_part: None,
            decoded_address: decoded,
            method: Method::TextEncoding,
        })
    }

    /// [`encode_text`](Self::encode_text) over many addresses, one result
    /// per input, in order.
    pub fn batch_encode<I, S>(&self, addresses: I) -> Vec<Conversion<Encoded>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        addresses
            .into_iter()
            .map(|address| self.encode_text(address.as_ref()))
            .collect()
    }

    /// [`encode_direct`](Self::encode_direct) over many addresses.
    pub fn batch_encode_direct<I, S>(&self, addresses: I) -> Vec<Conversion<Encoded>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        addresses
            .into_iter()
            .map(|address| self.encode_direct(address.as_ref()))
            .collect()
    }

    /// Character composition of the normalized address.
    pub fn analyze_address(&self, address: &str) -> Conversion<AddressAnalysis> {
        let result = Address::parse(address).map(|normalized| {
            let normalized = normalized.into_string();
            let character_analysis = self.codec.analyze_text(&normalized);
            AddressAnalysis {
                total_characters: normalized.chars().count(),
                address: normalized,
                character_analysis,
            }
        });
        finish("analyze_address", address, result)
    }

    /// Digit → bits → symbol for every position of the direct pipeline.
    pub fn mapping_details(&self, address: &str) -> Conversion<Vec<MappingDetail>> {
        let result = self.try_encode_direct(address).and_then(|encoded| {
            let hex_part = encoded.hex_part.unwrap_or_default();
            hex_part
                .chars()
                .zip(encoded.encoding.chars())
                .enumerate()
                .map(|(i, (hex_digit, symbol))| -> Result<MappingDetail, ConvertError> {
                    let value = self.codec.symbol_to_nibble(symbol)?;
                    Ok(MappingDetail {
                        position: i + 1,
                        hex_digit,
                        bits: nibble_to_bits(value),
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        });
        finish("mapping_details", address, result)
    }
}

fn finish<T>(op: &'static str, input: &str, result: Result<T, ConvertError>) -> Conversion<T> {
    match result {
        Ok(value) => {
            trace!(op, input, "conversion succeeded");
            Ok(value)
        }
        Err(error) => {
            debug!(op, input, %error, "conversion failed");
            Err(ConversionFailure::new(input, error))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
