//! Error types for alphabet construction and decoding.

use thiserror::Error;

/// Error variants for codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The alphabet has too many symbols for a byte-indexed lookup table.
    #[error("alphabet has {0} symbols, at most 254 are supported")]
    AlphabetTooLong(usize),

    /// The alphabet has fewer than two symbols and cannot represent values.
    #[error("alphabet has {0} symbols, at least 2 are required")]
    AlphabetTooShort(usize),

    /// An alphabet symbol is outside the ASCII range.
    #[error("symbol {symbol:?} at index {index} is not ascii")]
    NonAsciiSymbol {
        /// The offending symbol.
        symbol: char,
        /// Its position in the alphabet.
        index: usize,
    },

    /// An alphabet symbol occurs more than once, making decoding ambiguous.
    #[error("symbol {symbol:?} appears at indexes {first} and {second}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
        /// Index of its first occurrence.
        first: usize,
        /// Index of its second occurrence.
        second: usize,
    },

    /// Decode input contains a character that is not part of the alphabet.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its character position in the input string.
        index: usize,
    },

    /// Decoded bytes are not valid UTF-8 text.
    #[error("decoded bytes are not valid utf-8: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
