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

//! Functions and types for lazily encoding binary data.

use super::chunk::{chunks_of_bits, Chunks, Padding};
use super::encoding::Encoding;
use core::iter::FusedIterator;

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Lazy encoder yielding one [`char`] per output symbol.
///
/// Created by [`encode_to_chars`]. Alphabet bytes above 0x7F lift to
/// [`char`] through the Latin-1 mapping.
pub struct CharEncoder<'a, I> {
    chunks: Chunks<I>,
    encoding: &'a Encoding,
}

impl<I: Iterator<Item = u8>> Iterator for CharEncoder<'_, I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let chunk = self.chunks.next()?;
            if chunk.is_padding() {
                match self.encoding.padding() {
                    Some(symbol) => return Some(char::from(symbol)),
                    // never taken for the pairings this module builds:
                    // padless encodings get align-only chunking, which
                    // produces no wholly synthetic chunks
                    None => continue,
                }
            }
            return Some(char::from(self.encoding.symbol(chunk.value)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for CharEncoder<'_, I> {}

impl<I: ExactSizeIterator<Item = u8>> ExactSizeIterator for CharEncoder<'_, I> {}

/// Lazy encoder yielding one raw alphabet byte per output symbol.
///
/// Created by [`encode_to_bytes`]. Symbols are single bytes, so for
/// all-ASCII alphabets this is the UTF-8 of the [`CharEncoder`] output;
/// for alphabets with symbols above 0x7F it is not UTF-8 at all.
pub struct ByteEncoder<'a, I>(CharEncoder<'a, I>);

impl<I: Iterator<Item = u8>> Iterator for ByteEncoder<'_, I> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        // symbols are single bytes, so the char is always below U+0100
        self.0.next().map(|c| c as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for ByteEncoder<'_, I> {}

impl<I: ExactSizeIterator<Item = u8>> ExactSizeIterator for ByteEncoder<'_, I> {}

/// Lazily encodes `bytes` with `encoding`, yielding [`char`]s.
///
/// Input is pulled only as the output is consumed. Encodings with a
/// padding symbol complete the final block with that symbol; encodings
/// without one stop after the last partial symbol.
pub fn encode_to_chars<I>(encoding: &Encoding, bytes: I) -> CharEncoder<'_, I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    let padding = match encoding.padding() {
        Some(_) => Padding::Block,
        None => Padding::Align,
    };
    CharEncoder {
        chunks: chunks_of_bits(bytes, encoding.bits_per_symbol(), padding),
        encoding,
    }
}

/// Lazily encodes `bytes` with `encoding`, yielding raw symbol bytes.
pub fn encode_to_bytes<I>(encoding: &Encoding, bytes: I) -> ByteEncoder<'_, I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    ByteEncoder(encode_to_chars(encoding, bytes))
}

/// Encodes `bytes` with `encoding` into a freshly allocated [`String`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string<I>(encoding: &Encoding, bytes: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    encode_to_chars(encoding, bytes).collect()
}
