// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "cyclic"))]
use crate::pattern::STACK_PAINT_BYTE as FILL;
#[cfg(feature = "cyclic")]
use crate::pattern::STACK_PAINT_CYCLIC as SEQ;
use core::arch::naked_asm;

// The routines below run from .init1, before avr-libc has cleared
// __zero_reg__ and before the stack pointer is set up.
// They must only use scratch registers and no stack at all.
// There is no `ret`: execution falls through into .init2.
//
// X (r27:r26) walks from _end up to and including __stack (Z, r31:r30).
// The loop exits after storing to the byte equal to Z,
// so a top of stack at 0xFFFF does not wrap.

#[cfg(not(feature = "cyclic"))]
#[unsafe(naked)]
#[unsafe(no_mangle)]
#[unsafe(link_section = ".init1")]
/// Paint the free RAM from `_end` up to and including `__stack` with 0xDC.
///
/// # Safety
///
/// This naked function is run before main() from the .init1 section.
unsafe extern "C" fn stackpaint_init1() {
    naked_asm!(
        "   ldi r26, lo8(_end)",
        "   ldi r27, hi8(_end)",
        "   ldi r30, lo8(__stack)",
        "   ldi r31, hi8(__stack)",
        "   ldi r18, {fill}",
        "   cp r30, r26",
        "   cpc r31, r27",
        "   brlo 2f",
        "1: st X, r18",
        "   cp r26, r30",
        "   cpc r27, r31",
        "   breq 2f",
        "   adiw r26, 1",
        "   rjmp 1b",
        "2:",
        fill = const FILL,
    );
}

#[cfg(feature = "cyclic")]
#[unsafe(naked)]
#[unsafe(no_mangle)]
#[unsafe(link_section = ".init1")]
/// Paint the free RAM from `_end` up to and including `__stack`
/// with the repeated sequence DE AD BE EF, starting at `_end`.
///
/// # Safety
///
/// This naked function is run before main() from the .init1 section.
unsafe extern "C" fn stackpaint_init1() {
    naked_asm!(
        "   ldi r26, lo8(_end)",
        "   ldi r27, hi8(_end)",
        "   ldi r30, lo8(__stack)",
        "   ldi r31, hi8(__stack)",
        "   ldi r18, {p0}",
        "   ldi r19, {p1}",
        "   ldi r20, {p2}",
        "   ldi r21, {p3}",
        "   cp r30, r26",
        "   cpc r31, r27",
        "   brlo 2f",
        "1: st X, r18",
        "   cp r26, r30",
        "   cpc r27, r31",
        "   breq 2f",
        "   adiw r26, 1",
        // rotate the pattern by one byte
        "   mov r22, r18",
        "   mov r18, r19",
        "   mov r19, r20",
        "   mov r20, r21",
        "   mov r21, r22",
        "   rjmp 1b",
        "2:",
        p0 = const SEQ[0],
        p1 = const SEQ[1],
        p2 = const SEQ[2],
        p3 = const SEQ[3],
    );
}

// vim: ts=4 sw=4 expandtab
