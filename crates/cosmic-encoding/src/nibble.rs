//! Nibble ↔ block-symbol bijection.
//!
//! Every 4-bit value maps to exactly one symbol and back. The default
//! alphabet uses the Unicode quadrant block elements, where each bit lights
//! one quadrant of the cell:
//!
//! | Bit | Quadrant    |
//! |-----|-------------|
//! | 3   | upper-left  |
//! | 2   | upper-right |
//! | 1   | lower-left  |
//! | 0   | lower-right |
//!
//! Value 0 lights nothing and is drawn as the light shade `░` so that every
//! symbol stays visible.

use std::collections::HashMap;

use crate::error::CodecError;

/// Number of symbols in an alphabet (one per nibble value).
pub const ALPHABET_SIZE: usize = 16;

/// Default `(nibble, symbol)` table. The inverse table is derived from it.
pub const BLOCK_ALPHABET: [(u8, char); ALPHABET_SIZE] = [
    (0b0000, '░'),
    (0b0001, '▗'),
    (0b0010, '▖'),
    (0b0011, '▄'),
    (0b0100, '▝'),
    (0b0101, '▐'),
    (0b0110, '▞'),
    (0b0111, '▟'),
    (0b1000, '▘'),
    (0b1001, '▚'),
    (0b1010, '▌'),
    (0b1011, '▙'),
    (0b1100, '▀'),
    (0b1101, '▜'),
    (0b1110, '▛'),
    (0b1111, '█'),
];

/// Immutable nibble ↔ symbol codec.
///
/// Both lookup directions are fixed at construction; the codec is cheap to
/// clone and safe to share between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NibbleCodec {
    forward: [char; ALPHABET_SIZE],
    inverse: HashMap<char, u8>,
}

impl Default for NibbleCodec {
    fn default() -> Self {
        // BLOCK_ALPHABET is a checked bijection (see tests).
        Self::build(&BLOCK_ALPHABET)
    }
}

impl NibbleCodec {
    /// Build a codec from `(nibble, symbol)` pairs.
    ///
    /// Rejects tables that are not a total bijection over `0..16`.
    pub fn from_pairs(pairs: &[(u8, char)]) -> Result<Self, CodecError> {
        if pairs.len() != ALPHABET_SIZE {
            return Err(CodecError::AlphabetSize(pairs.len()));
        }

        let mut seen_nibble = [false; ALPHABET_SIZE];
        let mut seen_symbol: HashMap<char, u8> = HashMap::with_capacity(ALPHABET_SIZE);

        for &(value, symbol) in pairs {
            if value as usize >= ALPHABET_SIZE {
                return Err(CodecError::InvalidNibble(value));
            }
            if seen_nibble[value as usize] {
                return Err(CodecError::DuplicateNibble(value));
            }
            if let Some(&first) = seen_symbol.get(&symbol) {
                return Err(CodecError::DuplicateSymbol {
                    symbol,
                    first,
                    second: value,
                });
            }
            seen_nibble[value as usize] = true;
            seen_symbol.insert(symbol, value);
        }

        Ok(Self::build(pairs))
    }

    /// Build a codec from 16 symbols listed in nibble order (`0` first).
    pub fn from_symbols(symbols: &str) -> Result<Self, CodecError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() != ALPHABET_SIZE {
            return Err(CodecError::AlphabetSize(chars.len()));
        }
        let pairs: Vec<(u8, char)> = chars
            .into_iter()
            .enumerate()
            .map(|(i, c)| (i as u8, c))
            .collect();
        Self::from_pairs(&pairs)
    }

    /// Callers guarantee `pairs` is a validated bijection.
    fn build(pairs: &[(u8, char)]) -> Self {
        let mut forward = ['\0'; ALPHABET_SIZE];
        for &(value, symbol) in pairs {
            forward[value as usize] = symbol;
        }
        let inverse = forward
            .iter()
            .enumerate()
            .map(|(value, &symbol)| (symbol, value as u8))
            .collect();
        Self { forward, inverse }
    }

    /// The alphabet in nibble order.
    pub fn symbols(&self) -> &[char; ALPHABET_SIZE] {
        &self.forward
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.inverse.contains_key(&symbol)
    }

    /// Map a nibble value (0-15) to its symbol.
    pub fn nibble_to_symbol(&self, value: u8) -> Result<char, CodecError> {
        self.forward
            .get(value as usize)
            .copied()
            .ok_or(CodecError::InvalidNibble(value))
    }

    /// Map a hex digit (either case) to its symbol.
    pub fn hex_digit_to_symbol(&self, digit: char) -> Result<char, CodecError> {
        let value = digit
            .to_digit(16)
            .ok_or(CodecError::InvalidHexDigit(digit))?;
        self.nibble_to_symbol(value as u8)
    }

    /// Map a symbol back to its nibble value.
    pub fn symbol_to_nibble(&self, symbol: char) -> Result<u8, CodecError> {
        self.inverse
            .get(&symbol)
            .copied()
            .ok_or(CodecError::UnknownSymbol {
                symbol,
                position: None,
            })
    }

    /// Map a symbol back to its lowercase hex digit.
    pub fn symbol_to_hex_digit(&self, symbol: char) -> Result<char, CodecError> {
        let value = self.symbol_to_nibble(symbol)?;
        Ok(nibble_to_hex_digit(value))
    }

    /// The 4-character binary form of a symbol, e.g. `"1010"`.
    pub fn symbol_to_bits(&self, symbol: char) -> Result<String, CodecError> {
        Ok(nibble_to_bits(self.symbol_to_nibble(symbol)?))
    }

    /// Parse a 4-character binary string and return its symbol.
    pub fn bits_to_symbol(&self, bits: &str) -> Result<char, CodecError> {
        if bits.len() != 4 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(CodecError::InvalidBits(bits.to_string()));
        }
        let value =
            u8::from_str_radix(bits, 2).map_err(|_| CodecError::InvalidBits(bits.to_string()))?;
        self.nibble_to_symbol(value)
    }
}

/// Binary form of a nibble, zero padded to four characters.
pub fn nibble_to_bits(value: u8) -> String {
    format!("{:04b}", value & 0x0F)
}

/// Lowercase hex digit of a nibble.
#[inline]
pub(crate) fn nibble_to_hex_digit(value: u8) -> char {
    b"0123456789abcdef"[(value & 0x0F) as usize] as char
}

// ============================================================================
// TESTS
// ============================================================================
