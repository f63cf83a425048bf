//! Block-symbol address worker.
//!
//! Reads one JSON request from stdin, runs it through the address converter,
//! and writes one JSON response to stdout. Logs go to stderr.
//!
//! Operations:
//! - encode_direct / encode_text: address → symbols
//! - decode_direct / decode_text: symbols → address
//! - batch_encode: many addresses through the text pipeline
//! - analyze: character breakdown of an address
//! - alphabet: the active nibble → symbol table

mod config;
mod input;
mod output;

use std::io::{self, Read, Write};

use cosmic_encoding::AddressConverter;
use input::WorkerRequest;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let output = match run() {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "request failed");
            output::error_response(&e)
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(output.as_bytes());
    let _ = handle.write_all(b"\n");
    let _ = handle.flush();
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cosmic_encoding=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<String, String> {
    // 1. Read input from stdin
    let mut input_str = String::new();
    io::stdin()
        .read_to_string(&mut input_str)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    // 2. Build the converter from the configured alphabet
    let codec = config::load_codec()?;
    let converter = AddressConverter::new(codec);

    // 3. Parse and dispatch
    let request = input::parse_request(&input_str)?;
    info!(operation = request.operation().as_str(), "handling request");

    Ok(dispatch(&converter, request))
}

fn dispatch(converter: &AddressConverter, request: WorkerRequest) -> String {
    let op = request.operation();
    match request {
        WorkerRequest::EncodeDirect { address } => {
            output::conversion_response(op, converter.encode_direct(&address))
        }
        WorkerRequest::EncodeText { address } => {
            output::conversion_response(op, converter.encode_text(&address))
        }
        WorkerRequest::DecodeDirect { symbols } => {
            output::conversion_response(op, converter.decode_direct(&symbols))
        }
        WorkerRequest::DecodeText { symbols } => {
            output::conversion_response(op, converter.decode_text(&symbols))
        }
        WorkerRequest::BatchEncode { addresses } => {
            output::batch_response(op, converter.batch_encode(&addresses))
        }
        WorkerRequest::Analyze { address } => {
            output::conversion_response(op, converter.analyze_address(&address))
        }
        WorkerRequest::Alphabet => output::alphabet_response(converter.codec()),
    }
}
