//! # Bit Slicing
//!
//! Pulls `bits_per_symbol`-wide indices out of a byte buffer, most significant
//! bit first, and maps them to alphabet symbols.
//!
//! Slicing proceeds in chunks: `symbols_per_chunk` symbols consume exactly
//! `bytes_per_chunk` whole bytes, so every chunk starts on a byte boundary.
//! Within a chunk, symbol `slice` starts at bit
//! `chunk * bytes_per_chunk * 8 + slice * bits_per_symbol`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Alphabet;
use crate::constants::BITS_PER_BYTE;

/// How a slice is read from the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceStrategy {
    /// Width divides 8 (1, 2, 4 bits): a slice never leaves its byte.
    Aligned,
    /// Width does not divide 8 (3, 5, 6 bits): a slice may span two bytes.
    Straddling,
}

impl SliceStrategy {
    /// Picks the strategy for symbols of `width` bits (1..=8).
    pub const fn for_width(width: usize) -> Self {
        if BITS_PER_BYTE % width == 0 {
            Self::Aligned
        } else {
            Self::Straddling
        }
    }

    /// Reads `width` bits starting at bit `offset`, right-aligned.
    ///
    /// The caller guarantees the buffer holds at least `offset + width` bits.
    pub fn index(self, bytes: &[u8], offset: usize, width: usize) -> usize {
        match self {
            Self::Aligned => aligned_index(bytes, offset, width),
            Self::Straddling => straddling_index(bytes, offset, width),
        }
    }
}

/// Left shift drops the bits before the slice, right shift drops the bits after.
fn aligned_index(bytes: &[u8], offset: usize, width: usize) -> usize {
    let byte = bytes[offset / BITS_PER_BYTE];
    let shift = offset % BITS_PER_BYTE;
    usize::from((byte << shift) >> (BITS_PER_BYTE - width))
}

/// Tail of byte N in the high bits, head of byte N+1 in the low bits.
fn straddling_index(bytes: &[u8], offset: usize, width: usize) -> usize {
    let ndx = offset / BITS_PER_BYTE;
    let shift = offset % BITS_PER_BYTE;

    let head = usize::from((bytes[ndx] << shift) >> (BITS_PER_BYTE - width));

    let spill = (shift + width).saturating_sub(BITS_PER_BYTE);
    if spill == 0 {
        head
    } else {
        head | usize::from(bytes[ndx + 1] >> (BITS_PER_BYTE - spill))
    }
}

/// Iterator over the symbols sliced from a byte buffer, in chunk-major,
/// slice-minor order.
#[derive(Debug, Clone)]
pub(crate) struct Slicer<'a> {
    alphabet: &'a Alphabet,
    bytes: &'a [u8],
    strategy: SliceStrategy,
    position: usize,
    count: usize,
}

impl<'a> Slicer<'a> {
    /// Slices `count` symbols from `bytes`.
    ///
    /// The buffer must hold `alphabet.bytes_for_symbols(count)` bytes; the
    /// encoder checks this before slicing.
    pub(crate) fn new(alphabet: &'a Alphabet, bytes: &'a [u8], count: usize) -> Self {
        debug_assert!(bytes.len() >= alphabet.bytes_for_symbols(count));

        Self {
            alphabet,
            bytes,
            strategy: SliceStrategy::for_width(alphabet.bits_per_symbol()),
            position: 0,
            count,
        }
    }

    /// Bit offset of the symbol at `slice` within `chunk`.
    const fn offset(&self, chunk: usize, slice: usize) -> usize {
        chunk * self.alphabet.bytes_per_chunk() * BITS_PER_BYTE
            + slice * self.alphabet.bits_per_symbol()
    }
}

impl Iterator for Slicer<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.position >= self.count {
            return None;
        }

        let per_chunk = self.alphabet.symbols_per_chunk();
        let offset = self.offset(self.position / per_chunk, self.position % per_chunk);
        let index = self
            .strategy
            .index(self.bytes, offset, self.alphabet.bits_per_symbol());

        self.position += 1;
        Some(self.alphabet.symbol(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Slicer<'_> {}
