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

//! The re-chunking core: turns a stream of bytes into a lazy sequence of
//! fixed-width bit chunks.

use super::bits::BitBuffer;
use core::iter::FusedIterator;

/// How the tail of the stream is completed when the input ends off a
/// chunk boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// Zero-fill only to the end of the current output symbol. The final
    /// chunk reports how many of its low bits are synthetic; no chunk is
    /// ever wholly synthetic.
    Align,
    /// Zero-fill to the end of the output block. One partially synthetic
    /// chunk (if the input was unaligned) is followed by wholly synthetic
    /// chunks up to the block boundary.
    Block,
}

/// One output symbol's worth of bits.
///
/// `missing_bits` counts the zero bits synthesized at the low end; it is
/// non-zero only for chunks produced past the end of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub value: u8,
    pub missing_bits: u8,
    width: u8,
}

impl Chunk {
    /// The symbol width in bits.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// True if every bit of this chunk is synthetic.
    pub fn is_padding(&self) -> bool {
        self.missing_bits == self.width
    }
}

/// Lazy iterator of [`Chunk`]s over a byte stream.
///
/// Created by [`chunks_of_bits`]. Each instance owns its accumulator and
/// input position, so independent traversals over the same data never
/// interfere.
pub struct Chunks<I> {
    input: I,
    buf: BitBuffer,
    padding: Padding,
    missing: u8,
    /// Bits pushed so far, modulo the block size.
    block_pos: u8,
    exhausted: bool,
}

/// Re-chunks `bytes` into a lazy sequence of `width`-bit values.
///
/// Bytes are consumed one at a time, only when the next chunk needs
/// them. The tail of the stream is completed according to `padding`;
/// an empty input yields no chunks under either discipline.
///
/// # Panics
///
/// Panics if `width` is not between 1 and 8.
pub fn chunks_of_bits<I>(bytes: I, width: u8, padding: Padding) -> Chunks<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    Chunks {
        input: bytes.into_iter(),
        buf: BitBuffer::new(width),
        padding,
        missing: 0,
        block_pos: 0,
        exhausted: false,
    }
}

impl<I: Iterator<Item = u8>> Chunks<I> {
    /// Pulls input until the accumulator can serve one chunk, or the
    /// input is exhausted and the tail has been synthesized.
    fn fill(&mut self) {
        loop {
            if self.exhausted {
                if self.buf.has_bits_for_pop() {
                    self.saturate_missing_bits();
                } else {
                    self.pad_tail();
                }
                return;
            }
            if self.buf.has_bits_for_pop() {
                return;
            }
            match self.input.next() {
                Some(byte) => {
                    self.buf.push(byte);
                    self.block_pos = (self.block_pos + 8) % self.buf.capacity();
                }
                None => self.exhausted = true,
            }
        }
    }

    /// Zero-fills the remainder once the input runs out. Counting the
    /// synthetic bits into `block_pos` makes a second call a no-op.
    fn pad_tail(&mut self) {
        let zeros = match self.padding {
            Padding::Align => {
                (self.buf.out_bits() - self.buf.bit_len()) % self.buf.out_bits()
            }
            Padding::Block => (self.buf.capacity() - self.block_pos) % self.buf.capacity(),
        };
        if zeros > 0 {
            self.missing = self.buf.out_bits() - self.buf.bit_len();
            self.buf.push_zeros(zeros);
            self.block_pos = (self.block_pos + zeros) % self.buf.capacity();
        }
    }

    /// After the first padded chunk is consumed, every remaining chunk in
    /// the block is wholly synthetic.
    fn saturate_missing_bits(&mut self) {
        if self.padding == Padding::Block && self.missing > 0 {
            self.missing = self.buf.out_bits();
        }
    }

    /// Chunks still to be yielded after `bytes` more input bytes, or
    /// `None` on arithmetic overflow.
    fn remaining(&self, bytes: usize) -> Option<usize> {
        let width = usize::from(self.buf.out_bits());
        let bits = bytes
            .checked_mul(8)?
            .checked_add(usize::from(self.buf.bit_len()))?;
        match self.padding {
            Padding::Align => Some(bits.div_ceil(width)),
            Padding::Block => {
                let block = usize::from(self.buf.capacity());
                let pos = usize::from(self.block_pos).checked_add(bytes.checked_mul(8)?)? % block;
                let zeros = (block - pos) % block;
                Some(bits.checked_add(zeros)? / width)
            }
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for Chunks<I> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        self.fill();
        if self.buf.is_empty() {
            return None;
        }
        let chunk = Chunk {
            value: self.buf.front(),
            missing_bits: self.missing,
            width: self.buf.out_bits(),
        };
        self.buf.pop();
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.input.size_hint();
        (
            self.remaining(lower).unwrap_or(usize::MAX),
            upper.and_then(|n| self.remaining(n)),
        )
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for Chunks<I> {}

impl<I: ExactSizeIterator<Item = u8>> ExactSizeIterator for Chunks<I> {}
