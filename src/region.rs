// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Address type of the AVR data space.
pub type Addr = u16;

/// Inclusive address range `[low, high]` of the stack area.
///
/// `low` is the first free byte after the static data
/// and `high` is the top of the stack.
/// A region with `low > high` is empty.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Region {
    low: Addr,
    high: Addr,
}

impl Region {
    pub const fn new(low: Addr, high: Addr) -> Self {
        Self { low, high }
    }

    pub const fn low(&self) -> Addr {
        self.low
    }

    pub const fn high(&self) -> Addr {
        self.high
    }

    pub const fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Number of bytes in the region.
    ///
    /// This is `u32`, because the whole address space has 0x10000 bytes.
    pub const fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.high - self.low) as u32 + 1
        }
    }

    pub const fn contains(&self, addr: Addr) -> bool {
        self.low <= addr && addr <= self.high
    }

    /// Offset of `addr` from the low bound.
    pub const fn offset_of(&self, addr: Addr) -> Option<Addr> {
        if self.contains(addr) {
            Some(addr - self.low)
        } else {
            None
        }
    }
}


// vim: ts=4 sw=4 expandtab
