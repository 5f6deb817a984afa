//! # Arbitrary-base byte/string transcoding
//!
//! *Compact, alphabet-agnostic encoding of binary data as displayable text.*
//!
//! ## Intuition First
//!
//! A byte sequence is just a big number written in base 256. Reading it out
//! in a different base is a change of radix: repeatedly divide by the new
//! base and collect the remainders. Pick 62 symbols and you get base62; pick
//! Bitcoin's 58 and you get base58. Unlike base64, no bit-group padding is
//! involved — the whole input is treated as one integer, so the output uses
//! every symbol of the alphabet at full positional weight.
//!
//! ## The Problem
//!
//! Power-of-two encodings (hex, base32, base64) are fast because each output
//! symbol covers a fixed number of input bits, but they force alphabets of
//! size 2^k and often need padding characters. Identifier-shaped data wants
//! the opposite trade: an arbitrary alphabet (no look-alike characters, no
//! URL-hostile symbols) at the cost of a true multi-precision radix
//! conversion. Leading zero bytes carry no positional weight in that big
//! number, so they must be preserved out-of-band: each one becomes one copy
//! of the alphabet's first symbol, the *leader*.
//!
//! ## Historical Context
//!
//! ```text
//! 1987  RFC 989    Base64 for privacy-enhanced mail
//! 2006  RFC 4648   Base16/32/64 standardized, padding semantics fixed
//! 2008  Nakamoto   Base58: look-alike characters dropped for addresses
//! 2012  base58check  Checksummed base58 in wide deployment
//! 2014  base-x     The alphabet generalized: one conversion, any radix
//! ```
//!
//! ## Mathematical Formulation
//!
//! An input of bytes $b_0 b_1 \dots b_{n-1}$ denotes the integer
//! $N = \sum_i b_i \cdot 256^{n-1-i}$. For an alphabet of size $B$, the
//! encoder emits the base-$B$ digits of $N$ (most significant first),
//! prefixed by one leader symbol per leading zero byte. The expected output
//! length is $n \cdot \log 256 / \log B$, which is where the two sizing
//! factors come from.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n^2)$ worst case — each input byte propagates a carry
//!   across the digits produced so far, the same behavior as classical
//!   base58 conversion.
//! - **Space**: $O(n)$ for the single scratch buffer owned by each call.
//!
//! ## Failure Modes
//!
//! 1. **Ambiguous alphabets**: a repeated symbol would make decoding
//!    ill-defined; construction rejects it up front.
//! 2. **Foreign characters**: decoding refuses any character outside the
//!    alphabet instead of skipping or substituting.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`Alphabet`]: a validated, immutable symbol set with its reverse
//!   lookup table.
//! - [`Codec`]: `encode`/`decode` between bytes and alphabet strings, plus
//!   a UTF-8 convenience layer. A codec is immutable after construction and
//!   safe to share across threads.
//!
//! ```
//! use anybase::Codec;
//!
//! let codec = Codec::default();
//! let token = codec.encode(b"\x00\x2a");
//! assert_eq!(token, "0g");
//! assert_eq!(codec.decode(&token)?, b"\x00\x2a");
//! # Ok::<(), anybase::Error>(())
//! ```
//!
//! ## References
//!
//! - Josefsson, S. (2006). "The Base16, Base32, and Base64 Data Encodings." RFC 4648.
//! - bitcoin/bitcoin, `base58.cpp` — the carry-propagation conversion this
//!   family of codecs descends from.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod codec;
pub mod error;

pub use alphabet::{Alphabet, BASE62};
pub use codec::Codec;
pub use error::Error;
