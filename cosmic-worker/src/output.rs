//! Output formatting for the worker.
//!
//! Every response is one compact JSON object with a `success` flag.

use cosmic_encoding::{nibble_to_bits, Conversion, ConversionFailure, NibbleCodec};
use serde::Serialize;

use crate::input::Operation;

/// Single-result response, success or failure.
#[derive(Serialize)]
pub struct ConversionResponse<T: Serialize> {
    pub success: bool,
    pub operation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ConversionResponse<T> {
    fn from_conversion(operation: Operation, conversion: Conversion<T>) -> Self {
        match conversion {
            Ok(result) => Self {
                success: true,
                operation: operation.as_str(),
                result: Some(result),
                input: None,
                error: None,
            },
            Err(ConversionFailure { input, error }) => Self {
                success: false,
                operation: operation.as_str(),
                result: None,
                input: Some(input),
                error: Some(error.to_string()),
            },
        }
    }
}

/// One entry per batch input.
#[derive(Serialize)]
pub struct BatchResponse<T: Serialize> {
    pub success: bool,
    pub operation: &'static str,
    pub results: Vec<ConversionResponse<T>>,
}

/// Request-level error (bad JSON, bad config, I/O).
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// One row of the active alphabet.
#[derive(Serialize)]
pub struct AlphabetEntry {
    pub nibble: u8,
    pub hex_digit: char,
    pub bits: String,
    pub symbol: char,
}

/// Format a single conversion as JSON.
pub fn conversion_response<T: Serialize>(operation: Operation, conversion: Conversion<T>) -> String {
    let response = ConversionResponse::from_conversion(operation, conversion);
    serde_json::to_string(&response).unwrap_or_else(|e| error_response(&e.to_string()))
}

/// Format batch results as JSON, keeping input order.
pub fn batch_response<T: Serialize>(operation: Operation, results: Vec<Conversion<T>>) -> String {
    let response = BatchResponse {
        success: true,
        operation: operation.as_str(),
        results: results
            .into_iter()
            .map(|r| ConversionResponse::from_conversion(operation, r))
            .collect(),
    };
    serde_json::to_string(&response).unwrap_or_else(|e| error_response(&e.to_string()))
}

/// Format the nibble → symbol table as JSON.
pub fn alphabet_response(codec: &NibbleCodec) -> String {
    let table: Vec<AlphabetEntry> = codec
        .symbols()
        .iter()
        .enumerate()
        .map(|(nibble, &symbol)| AlphabetEntry {
            nibble: nibble as u8,
            hex_digit: std::char::from_digit(nibble as u32, 16).unwrap_or('?'),
            bits: nibble_to_bits(nibble as u8),
            symbol,
        })
        .collect();
    conversion_response(Operation::Alphabet, Ok(table))
}

/// Format an error response as JSON.
pub fn error_response(error: &str) -> String {
    let response = ErrorResponse {
        success: false,
        error: error.to_string(),
    };

    serde_json::to_string(&response).unwrap_or_else(|_| {
        format!(
            r#"{{"success":false,"error":"{}"}}"#,
            error.replace('"', "'")
        )
    })
}
