// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{pattern::Pattern, ram::Ram, region::Region};

/// Paint every byte of `region`, including the high bound, with `pattern`.
///
/// The byte at offset `k` from the low bound gets `pattern.expected_at(k)`.
/// An empty (inverted) region is not written at all.
/// The loop terminates on the high bound itself, so a high bound
/// of 0xFFFF does not wrap the address.
pub fn paint<R: Ram + ?Sized, P: Pattern>(ram: &mut R, region: Region, pattern: &P) {
    if region.is_empty() {
        return;
    }
    let high = region.high();
    let mut addr = region.low();
    let mut pos = 0;
    loop {
        ram.store(addr, pattern.byte(pos));
        if addr == high {
            break;
        }
        addr += 1;
        pos += 1;
        if pos == P::LEN {
            pos = 0;
        }
    }
}

/// Paint the whole slice with `pattern`.
///
/// Offset 0 of the slice is the low bound.
pub fn paint_slice<P: Pattern>(bytes: &mut [u8], pattern: &P) {
    for (b, pos) in bytes.iter_mut().zip((0..P::LEN).cycle()) {
        *b = pattern.byte(pos);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        pattern::{Cyclic, Fill, STACK_PAINT_CYCLIC},
        ram::Window,
    };

    const GUARD: u8 = 0x42;

    /// 0x0000 - 0x01FF with guard bytes everywhere.
    fn guarded() -> [u8; 0x200] {
        [GUARD; 0x200]
    }

    fn assert_guards(buf: &[u8], region: Region) {
        for (addr, b) in buf.iter().enumerate() {
            if !region.contains(addr as u16) {
                assert_eq!(*b, GUARD, "byte at {addr:#06X} modified");
            }
        }
    }

    #[test]
    fn test_fill_scenario() {
        let mut buf = guarded();
        let region = Region::new(0x0100, 0x0110);
        let mut w = Window::new(0, &mut buf).unwrap();
        paint(&mut w, region, &Fill::STACK);
        for addr in 0x0100..=0x0110 {
            assert_eq!(w.load(addr), 0xDC);
        }
        assert_eq!(w.load(0x00FF), GUARD);
        assert_eq!(w.load(0x0111), GUARD);
        assert_guards(&buf, region);
    }

    #[test]
    fn test_cyclic_scenario() {
        let mut buf = guarded();
        let region = Region::new(0x0100, 0x0110);
        let mut w = Window::new(0, &mut buf).unwrap();
        paint(&mut w, region, &Cyclic::<4>::STACK);
        assert_eq!(w.load(0x0100), 0xDE);
        assert_eq!(w.load(0x0101), 0xAD);
        assert_eq!(w.load(0x0102), 0xBE);
        assert_eq!(w.load(0x0103), 0xEF);
        assert_eq!(w.load(0x0104), 0xDE);
        assert_eq!(w.load(0x010F), 0xEF);
        assert_eq!(w.load(0x0110), 0xDE);
        assert_eq!(w.load(0x0111), GUARD);
        assert_guards(&buf, region);
    }

    #[test]
    fn test_cyclic_offset() {
        // The pattern position is relative to the low bound, not to the address.
        let mut buf = guarded();
        let region = Region::new(0x0103, 0x010A);
        let p = Cyclic::new([0x01, 0x02, 0x03]);
        let mut w = Window::new(0, &mut buf).unwrap();
        paint(&mut w, region, &p);
        assert_eq!(
            &buf[0x0103..=0x010A],
            &[0x01, 0x02, 0x03, 0x01, 0x02, 0x03, 0x01, 0x02]
        );
        assert_guards(&buf, region);
    }

    #[test]
    fn test_all_offsets() {
        let p = Cyclic::<4>::STACK;
        for low in 0x0100..0x0108 {
            for high in low..0x0120 {
                let mut buf = guarded();
                let region = Region::new(low, high);
                let mut w = Window::new(0, &mut buf).unwrap();
                paint(&mut w, region, &p);
                for addr in low..=high {
                    let k = (addr - low) as usize;
                    assert_eq!(buf[addr as usize], STACK_PAINT_CYCLIC[k % 4]);
                }
                assert_guards(&buf, region);
            }
        }
    }

    #[test]
    fn test_single_byte_region() {
        let mut buf = guarded();
        let region = Region::new(0x0180, 0x0180);
        let mut w = Window::new(0, &mut buf).unwrap();
        paint(&mut w, region, &Cyclic::<4>::STACK);
        assert_eq!(buf[0x0180], 0xDE);
        assert_guards(&buf, region);
    }

    #[test]
    fn test_inverted_region() {
        let mut buf = guarded();
        let region = Region::new(0x0111, 0x0110);
        let mut w = Window::new(0, &mut buf).unwrap();
        paint(&mut w, region, &Fill::STACK);
        assert!(buf.iter().all(|b| *b == GUARD));

        let mut buf = guarded();
        let mut w = Window::new(0, &mut buf).unwrap();
        paint(&mut w, Region::new(0x01FF, 0x0000), &Fill::STACK);
        assert!(buf.iter().all(|b| *b == GUARD));
    }

    #[test]
    fn test_top_of_address_space() {
        let mut buf = [GUARD; 0x10];
        let region = Region::new(0xFFF8, 0xFFFF);
        let mut w = Window::new(0xFFF0, &mut buf).unwrap();
        paint(&mut w, region, &Fill::STACK);
        assert_eq!(w.load(0xFFFF), 0xDC);
        assert_eq!(w.load(0xFFF8), 0xDC);
        assert_eq!(w.load(0xFFF7), GUARD);
        assert_eq!(&buf[..8], &[GUARD; 8]);
        assert_eq!(&buf[8..], &[0xDC; 8]);

        let mut buf = [GUARD; 1];
        let mut w = Window::new(0xFFFF, &mut buf).unwrap();
        paint(&mut w, Region::new(0xFFFF, 0xFFFF), &Fill::STACK);
        assert_eq!(buf, [0xDC]);
    }

    #[test]
    fn test_whole_address_space() {
        let mut buf = [GUARD; 0x10000];
        let p = Cyclic::<4>::STACK;
        let mut w = Window::new(0, &mut buf).unwrap();
        paint(&mut w, Region::new(0x0000, 0xFFFF), &p);
        for (addr, b) in buf.iter().enumerate() {
            assert_eq!(*b, p.expected_at(addr));
        }
    }

    #[test]
    fn test_idempotent() {
        let region = Region::new(0x0100, 0x0110);
        let p = Cyclic::<4>::STACK;

        let mut once = guarded();
        let mut w = Window::new(0, &mut once).unwrap();
        paint(&mut w, region, &p);

        let mut twice = guarded();
        let mut w = Window::new(0, &mut twice).unwrap();
        paint(&mut w, region, &p);
        paint(&mut w, region, &p);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_paint_slice() {
        let mut buf = [GUARD; 17];
        paint_slice(&mut buf, &Fill::STACK);
        assert_eq!(buf, [0xDC; 17]);

        let mut buf = [GUARD; 7];
        paint_slice(&mut buf, &Cyclic::<4>::STACK);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE]);

        let mut buf = [GUARD; 0];
        paint_slice(&mut buf, &Fill::STACK);
    }

    #[test]
    fn test_paint_slice_matches_paint() {
        let p = Cyclic::new([0x5A, 0xA5, 0x0F]);
        let region = Region::new(0x0123, 0x0177);

        let mut a = guarded();
        let mut w = Window::new(0, &mut a).unwrap();
        paint(&mut w, region, &p);

        let mut b = guarded();
        paint_slice(&mut b[0x0123..=0x0177], &p);

        assert_eq!(a, b);
    }
}

// vim: ts=4 sw=4 expandtab
