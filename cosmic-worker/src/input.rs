//! Input parsing for the worker.
//!
//! Parses the JSON request read from stdin. `operation` defaults to
//! `encode_direct`; each operation requires its own field.

use serde::Deserialize;

/// Operations the worker can perform.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    EncodeDirect,
    EncodeText,
    DecodeDirect,
    DecodeText,
    BatchEncode,
    Analyze,
    Alphabet,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::EncodeDirect => "encode_direct",
            Operation::EncodeText => "encode_text",
            Operation::DecodeDirect => "decode_direct",
            Operation::DecodeText => "decode_text",
            Operation::BatchEncode => "batch_encode",
            Operation::Analyze => "analyze",
            Operation::Alphabet => "alphabet",
        }
    }
}

/// Parsed request with the fields its operation needs.
#[derive(Debug, PartialEq, Eq)]
pub enum WorkerRequest {
    EncodeDirect { address: String },
    EncodeText { address: String },
    DecodeDirect { symbols: String },
    DecodeText { symbols: String },
    BatchEncode { addresses: Vec<String> },
    Analyze { address: String },
    Alphabet,
}

impl WorkerRequest {
    pub fn operation(&self) -> Operation {
        match self {
            WorkerRequest::EncodeDirect { .. } => Operation::EncodeDirect,
            WorkerRequest::EncodeText { .. } => Operation::EncodeText,
            WorkerRequest::DecodeDirect { .. } => Operation::DecodeDirect,
            WorkerRequest::DecodeText { .. } => Operation::DecodeText,
            WorkerRequest::BatchEncode { .. } => Operation::BatchEncode,
            WorkerRequest::Analyze { .. } => Operation::Analyze,
            WorkerRequest::Alphabet => Operation::Alphabet,
        }
    }
}

/// Raw input that can carry the fields of any operation.
#[derive(Debug, Deserialize)]
struct RawInput {
    #[serde(default)]
    operation: Operation,
    address: Option<String>,
    symbols: Option<String>,
    addresses: Option<Vec<String>>,
}

/// Parse input JSON from stdin into a WorkerRequest.
pub fn parse_request(input_str: &str) -> Result<WorkerRequest, String> {
    let raw: RawInput =
        serde_json::from_str(input_str).map_err(|e| format!("Invalid input JSON: {}", e))?;

    let op = raw.operation;
    let missing = |field: &str| format!("Missing {} for {} operation", field, op.as_str());

    match op {
        Operation::EncodeDirect => Ok(WorkerRequest::EncodeDirect {
            address: raw.address.ok_or_else(|| missing("address"))?,
        }),
        Operation::EncodeText => Ok(WorkerRequest::EncodeText {
            address: raw.address.ok_or_else(|| missing("address"))?,
        }),
        Operation::DecodeDirect => Ok(WorkerRequest::DecodeDirect {
            symbols: raw.symbols.ok_or_else(|| missing("symbols"))?,
        }),
        Operation::DecodeText => Ok(WorkerRequest::DecodeText {
            symbols: raw.symbols.ok_or_else(|| missing("symbols"))?,
        }),
        Operation::BatchEncode => Ok(WorkerRequest::BatchEncode {
            addresses: raw.addresses.ok_or_else(|| missing("addresses"))?,
        }),
        Operation::Analyze => Ok(WorkerRequest::Analyze {
            address: raw.address.ok_or_else(|| missing("address"))?,
        }),
        Operation::Alphabet => Ok(WorkerRequest::Alphabet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_default_operation() {
        // Without explicit operation field, defaults to encode_direct
        let json = r#"{"address": "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"}"#;
        let request = parse_request(json).unwrap();
        assert_eq!(
            request,
            WorkerRequest::EncodeDirect {
                address: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string()
            }
        );
    }

    #[test]
    fn test_parse_request_decode_text() {
        let json = r#"{"operation": "decode_text", "symbols": "▄░▟▘"}"#;
        let request = parse_request(json).unwrap();
        assert_eq!(request.operation(), Operation::DecodeText);
        match request {
            WorkerRequest::DecodeText { symbols } => assert_eq!(symbols, "▄░▟▘"),
            _ => panic!("Expected DecodeText request"),
        }
    }

    #[test]
    fn test_parse_request_batch() {
        let json = r#"{"operation": "batch_encode", "addresses": ["0x1", "0x2"]}"#;
        match parse_request(json).unwrap() {
            WorkerRequest::BatchEncode { addresses } => assert_eq!(addresses.len(), 2),
            _ => panic!("Expected BatchEncode request"),
        }
    }

    #[test]
    fn test_parse_request_alphabet_needs_no_fields() {
        let json = r#"{"operation": "alphabet"}"#;
        assert_eq!(parse_request(json).unwrap(), WorkerRequest::Alphabet);
    }

    #[test]
    fn test_parse_request_missing_field() {
        let err = parse_request(r#"{"operation": "decode_direct"}"#).unwrap_err();
        assert_eq!(err, "Missing symbols for decode_direct operation");

        let err = parse_request(r#"{"operation": "analyze"}"#).unwrap_err();
        assert_eq!(err, "Missing address for analyze operation");
    }

    #[test]
    fn test_parse_request_invalid_json() {
        let err = parse_request("not json").unwrap_err();
        assert!(err.starts_with("Invalid input JSON"));
    }

    #[test]
    fn test_parse_request_unknown_operation() {
        assert!(parse_request(r#"{"operation": "sign"}"#).is_err());
    }
}
