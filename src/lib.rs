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

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod bits;
pub mod chunk;
pub mod encode;
pub mod encoding;

#[cfg(feature = "alloc")]
extern crate alloc;

pub use bits::BitBuffer;
pub use chunk::{chunks_of_bits, Chunk, Chunks, Padding};

#[cfg(feature = "alloc")]
pub use encode::encode_to_string;
pub use encode::{encode_to_bytes, encode_to_chars, ByteEncoder, CharEncoder};

pub use encoding::{Encoding, EncodingError};
