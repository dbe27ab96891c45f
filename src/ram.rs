// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::region::Addr;

/// Byte addressable data memory.
pub trait Ram {
    fn load(&self, addr: Addr) -> u8;
    fn store(&mut self, addr: Addr, value: u8);
}

/// A [Ram] backed by a byte slice that is mapped at `base`.
///
/// Stores outside of the window are dropped.
/// Loads outside of the window read as 0.
#[derive(Debug)]
pub struct Window<'a> {
    base: Addr,
    bytes: &'a mut [u8],
}

impl<'a> Window<'a> {
    /// Map `bytes` at address `base`.
    ///
    /// Returns `None`, if the window would extend past the end of the address space.
    pub fn new(base: Addr, bytes: &'a mut [u8]) -> Option<Self> {
        if base as usize + bytes.len() > Addr::MAX as usize + 1 {
            None
        } else {
            Some(Self { base, bytes })
        }
    }

    #[inline]
    fn index(&self, addr: Addr) -> Option<usize> {
        let index = addr.checked_sub(self.base)? as usize;
        if index < self.bytes.len() {
            Some(index)
        } else {
            None
        }
    }
}

impl Ram for Window<'_> {
    #[inline]
    fn load(&self, addr: Addr) -> u8 {
        match self.index(addr) {
            Some(index) => self.bytes[index],
            None => 0,
        }
    }

    #[inline]
    fn store(&mut self, addr: Addr, value: u8) {
        if let Some(index) = self.index(addr) {
            self.bytes[index] = value;
        }
    }
}


// vim: ts=4 sw=4 expandtab
