//! Generic text encoding over the nibble alphabet.
//!
//! Each UTF-8 byte of the input becomes [`SYMBOLS_PER_BYTE`] symbols, high
//! nibble first. This works for any string, not only addresses; a 42-byte
//! address therefore encodes to 84 symbols.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CodecError;
use crate::nibble::NibbleCodec;

/// Expansion factor of the text pipeline.
pub const SYMBOLS_PER_BYTE: usize = 2;

/// Coarse character classes reported by [`NibbleCodec::analyze_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Digit,
    Lowercase,
    Uppercase,
    Whitespace,
    Punctuation,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            CharClass::Digit
        } else if c.is_lowercase() {
            CharClass::Lowercase
        } else if c.is_uppercase() {
            CharClass::Uppercase
        } else if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_ascii_punctuation() {
            CharClass::Punctuation
        } else {
            CharClass::Other
        }
    }
}

/// Character composition of a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextAnalysis {
    pub total_characters: usize,
    pub classes: BTreeMap<CharClass, usize>,
    pub characters: BTreeMap<char, usize>,
}

impl TextAnalysis {
    /// Occurrences of `c`, zero if absent.
    pub fn count(&self, c: char) -> usize {
        self.characters.get(&c).copied().unwrap_or(0)
    }

    /// Occurrences of characters in `class`, zero if absent.
    pub fn class_count(&self, class: CharClass) -> usize {
        self.classes.get(&class).copied().unwrap_or(0)
    }
}

impl NibbleCodec {
    /// Encode arbitrary text, two symbols per UTF-8 byte.
    pub fn encode_text(&self, text: &str) -> String {
        let symbols = self.symbols();
        let mut out = String::with_capacity(text.len() * SYMBOLS_PER_BYTE * 3);
        for byte in text.bytes() {
            out.push(symbols[(byte >> 4) as usize]);
            out.push(symbols[(byte & 0x0F) as usize]);
        }
        out
    }

    /// Decode the output of [`encode_text`](Self::encode_text).
    pub fn decode_text(&self, symbols: &str) -> Result<String, CodecError> {
        let nibbles = symbols
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.symbol_to_nibble(symbol)
                    .map_err(|_| CodecError::UnknownSymbol {
                        symbol,
                        position: Some(position),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if nibbles.len() % SYMBOLS_PER_BYTE != 0 {
            return Err(CodecError::TruncatedSymbols(nibbles.len()));
        }

        let bytes: Vec<u8> = nibbles
            .chunks_exact(SYMBOLS_PER_BYTE)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect();

        String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
    }

    /// Count characters by identity and by class.
    pub fn analyze_text(&self, text: &str) -> TextAnalysis {
        let mut analysis = TextAnalysis::default();
        for c in text.chars() {
            analysis.total_characters += 1;
            *analysis.classes.entry(CharClass::of(c)).or_insert(0) += 1;
            *analysis.characters.entry(c).or_insert(0) += 1;
        }
        analysis
    }
}

// ============================================================================
// TESTS
// ============================================================================
