//! Worker configuration.
//!
//! The alphabet comes from the `COSMIC_ALPHABET` env var when set: exactly
//! 16 distinct characters, listed in nibble order. Otherwise the default
//! quadrant-block alphabet is used.

use cosmic_encoding::NibbleCodec;
use tracing::debug;

/// Env var holding a custom alphabet.
pub const ALPHABET_ENV: &str = "COSMIC_ALPHABET";

/// Build the codec from the environment.
pub fn load_codec() -> Result<NibbleCodec, String> {
    codec_from(std::env::var(ALPHABET_ENV).ok().as_deref())
}

fn codec_from(alphabet: Option<&str>) -> Result<NibbleCodec, String> {
    match alphabet {
        Some(symbols) => {
            debug!(alphabet = symbols, "using custom alphabet");
            NibbleCodec::from_symbols(symbols)
                .map_err(|e| format!("Invalid {}: {}", ALPHABET_ENV, e))
        }
        None => Ok(NibbleCodec::default()),
    }
}
