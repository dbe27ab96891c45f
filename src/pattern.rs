// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The single byte stack paint value.
pub const STACK_PAINT_BYTE: u8 = 0xDC;

/// The cyclic stack paint sequence.
pub const STACK_PAINT_CYCLIC: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// A fill pattern that repeats every `LEN` bytes.
pub trait Pattern {
    /// Length of one pattern cycle.
    const LEN: usize;

    /// Get the pattern byte at cycle position `index`.
    ///
    /// `index` wraps around at `LEN`.
    fn byte(&self, index: usize) -> u8;

    /// Get the pattern byte expected at `offset` from the start of the painted region.
    #[inline]
    fn expected_at(&self, offset: usize) -> u8 {
        self.byte(offset % Self::LEN)
    }
}

/// Fill with one repeated byte.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Fill(pub u8);

impl Fill {
    pub const STACK: Self = Self(STACK_PAINT_BYTE);
}

impl Pattern for Fill {
    const LEN: usize = 1;

    #[inline]
    fn byte(&self, _index: usize) -> u8 {
        self.0
    }
}

/// Fill with a repeated sequence of `N` bytes.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cyclic<const N: usize>([u8; N]);

impl<const N: usize> Cyclic<N> {
    pub const fn new(seq: [u8; N]) -> Self {
        const { assert!(N > 0, "Cyclic pattern must not be empty") };
        Self(seq)
    }
}

impl Cyclic<4> {
    pub const STACK: Self = Self::new(STACK_PAINT_CYCLIC);
}

impl<const N: usize> Pattern for Cyclic<N> {
    const LEN: usize = N;

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self.0[index % N]
    }
}


// vim: ts=4 sw=4 expandtab
