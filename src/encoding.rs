/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of Base2N.
 *
 * Base2N is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Base2N is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Base2N. If not, see <https://www.gnu.org/licenses/>.
 */

//! Encoding alphabets and the constants derived from them.

use super::bits::block_bits;
use thiserror::Error;

/// An error encountered while constructing an [`Encoding`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The alphabet length was not a power of two between 2 and 256.
    #[error("bad alphabet length: {0}")]
    BadLength(usize),
    /// A symbol appeared more than once in the alphabet.
    #[error("duplicate symbol in alphabet: {0:#04x}")]
    DuplicateSymbol(u8),
    /// The padding symbol is itself a member of the alphabet.
    #[error("padding symbol {0:#04x} is part of the alphabet")]
    PaddingInAlphabet(u8),
}

/// A validated base-2^n alphabet together with its derived constants.
///
/// Constructed once and then shared by reference with any number of
/// encode operations; every operation derives from the alphabet length:
/// each symbol carries `log2(len)` bits, and the block sizes are the
/// smallest input/output symbol counts that convert into each other with
/// no bits left over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    table: [u8; 256],
    count: u16,
    bits: u8,
    input_block: u8,
    output_block: u8,
    padding: Option<u8>,
}

impl Encoding {
    /// Validates `alphabet` and derives the encoding constants.
    ///
    /// `alphabet.len()` must be a power of two between 2 and 256 (so one
    /// symbol encodes 1 to 8 bits), the symbols must be distinct, and
    /// the padding symbol, if any, must not be a member of the alphabet.
    pub const fn new(alphabet: &[u8], padding: Option<u8>) -> Result<Self, EncodingError> {
        let count = alphabet.len();
        if count < 2 || count > 256 || !count.is_power_of_two() {
            return Err(EncodingError::BadLength(count));
        }
        let bits = count.trailing_zeros() as u8;

        let fill = match padding {
            Some(symbol) => symbol,
            None => 0,
        };
        let mut table = [fill; 256];
        let mut seen = [false; 256];
        let mut i = 0;
        while i < count {
            let symbol = alphabet[i];
            if seen[symbol as usize] {
                return Err(EncodingError::DuplicateSymbol(symbol));
            }
            seen[symbol as usize] = true;
            table[i] = symbol;
            i += 1;
        }
        if let Some(symbol) = padding {
            if seen[symbol as usize] {
                return Err(EncodingError::PaddingInAlphabet(symbol));
            }
        }

        let block = block_bits(bits);
        Ok(Self {
            table,
            count: count as u16,
            bits,
            input_block: block / 8,
            output_block: block / bits,
            padding,
        })
    }

    const fn builtin(alphabet: &[u8], padding: Option<u8>) -> Self {
        match Self::new(alphabet, padding) {
            Ok(encoding) => encoding,
            Err(_) => panic!("invalid built-in alphabet"),
        }
    }

    /// Number of symbols in the alphabet.
    pub const fn symbol_count(&self) -> usize {
        self.count as usize
    }

    /// Bits carried by one output symbol.
    pub const fn bits_per_symbol(&self) -> u8 {
        self.bits
    }

    /// Input bytes per block: the smallest byte count that encodes with
    /// no bits left over.
    pub const fn input_block_len(&self) -> usize {
        self.input_block as usize
    }

    /// Output symbols per block.
    pub const fn output_block_len(&self) -> usize {
        self.output_block as usize
    }

    /// The configured padding symbol, if any.
    pub const fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// The alphabet symbol for `value`. Plain table lookup; every value
    /// an encoder can produce is in range.
    pub const fn symbol(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    /// Exact output length, in symbols, for `input_len` input bytes.
    ///
    /// Equals the number of items the lazy encoders yield for an input
    /// of that length: padded encodings round the trailing partial block
    /// up to a whole output block, unpadded encodings stop after the
    /// last partial symbol.
    pub const fn encoded_len(&self, input_len: usize) -> usize {
        let blocks = input_len / self.input_block_len();
        let trailing = input_len % self.input_block_len();
        let mut len = blocks * self.output_block_len();
        if trailing > 0 {
            len += match self.padding {
                Some(_) => self.output_block_len(),
                None => (trailing * 8).div_ceil(self.bits as usize),
            };
        }
        len
    }

    /// Binary: one `0` or `1` per input bit.
    pub const BASE2: Self = Self::builtin(b"01", None);

    /// Alias of [`Self::BASE2`].
    pub const BINARY: Self = Self::BASE2;

    /// Base4: two bits per digit.
    pub const BASE4: Self = Self::builtin(b"0123", None);

    /// Octal digits, `=`-padded to 8-symbol blocks.
    pub const BASE8: Self = Self::builtin(b"01234567", Some(b'='));

    /// Lowercase hexadecimal.
    pub const BASE16: Self = Self::builtin(b"0123456789abcdef", None);

    /// Alias of [`Self::BASE16`].
    pub const HEXDEC: Self = Self::BASE16;

    /// Standard base32 (RFC 4648), `=`-padded.
    pub const BASE32: Self =
        Self::builtin(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", Some(b'='));

    /// Human-oriented z-base-32, unpadded.
    pub const Z_BASE32: Self = Self::builtin(b"ybndrfg8ejkmcpqxot1uwisza345h769", None);

    /// Standard base64 (RFC 4648), `=`-padded.
    pub const BASE64: Self = Self::builtin(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        Some(b'='),
    );

    /// The standard base64 alphabet with no padding.
    pub const BASE64_NO_PAD: Self = Self::builtin(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        None,
    );

    /// URL-safe base64 (RFC 4648 §5), unpadded.
    pub const BASE64_URL: Self = Self::builtin(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        None,
    );
}
