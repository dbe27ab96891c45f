// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read back a painted stack area.
//!
//! The stack grows downwards from the high bound.
//! The scan starts at the high bound and walks down to the first byte
//! that still holds the paint pattern. Everything above that byte has
//! been used by the stack. Stray writes further down, for example from
//! a heap starting at `_end`, do not shift the result.

use crate::{pattern::Pattern, ram::Ram, region::Region};

/// Returns the topmost run of bytes that still hold the paint pattern.
///
/// The run's high bound is the highest address still matching the pattern.
/// Its low bound is where the run ends going downwards.
/// Returns `None`, if no byte of `region` matches.
pub fn untouched_run<R: Ram + ?Sized, P: Pattern>(
    ram: &R,
    region: Region,
    pattern: &P,
) -> Option<Region> {
    if region.is_empty() {
        return None;
    }
    let low = region.low();
    let mut addr = region.high();
    let mut top = None;
    loop {
        let matches = match region.offset_of(addr) {
            Some(offset) => ram.load(addr) == pattern.expected_at(offset as usize),
            None => false,
        };
        match (top, matches) {
            (None, true) => top = Some(addr),
            (Some(high), false) => return Some(Region::new(addr + 1, high)),
            _ => (),
        }
        if addr == low {
            break;
        }
        addr -= 1;
    }
    top.map(|high| Region::new(low, high))
}

/// Returns the number of bytes in the topmost run that still holds the paint pattern.
///
/// The value is only an estimate. A stack byte that happens to be written
/// with its own pattern value is counted as untouched.
pub fn untouched<R: Ram + ?Sized, P: Pattern>(ram: &R, region: Region, pattern: &P) -> u32 {
    untouched_run(ram, region, pattern).map_or(0, |run| run.len())
}

/// Returns the peak number of stack bytes used.
///
/// This is the high bound minus the highest address still holding the pattern.
/// If no byte holds the pattern, the whole region has been used.
pub fn peak_usage<R: Ram + ?Sized, P: Pattern>(ram: &R, region: Region, pattern: &P) -> u32 {
    match untouched_run(ram, region, pattern) {
        Some(run) => (region.high() - run.high()) as u32,
        None => region.len(),
    }
}


// vim: ts=4 sw=4 expandtab
