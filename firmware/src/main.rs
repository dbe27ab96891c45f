// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![no_std]
#![no_main]
#![feature(asm_experimental_arch)]

// Linking the crate installs the .init1 stack painting routine.
use avr_stackpaint as _;

use avr_device::attiny861a::{self as mcu, Peripherals};

/// Maximum call depth of the demo load.
const MAX_DEPTH: u8 = 16;

fn wdt_init() {
    // SAFETY: The asm code only accesses the WDT registers
    //         which are not accessed from anywhere else in the program.
    unsafe {
        // Enable WDT with timeout 32 ms
        core::arch::asm!(
            "ldi {tmp}, 0x18", // WDCE=1, WDE=1
            "out {WDTCR}, {tmp}",
            "ldi {tmp}, 0x09", // WDCE=0, WDE=1, WDP2=0, WDP1=0, WDP0=1
            "out {WDTCR}, {tmp}",
            tmp = out(reg_upper) _,
            WDTCR = const 0x21,
            options(nostack, preserves_flags)
        );
    }
}

fn wdt_poke(_wp: &mcu::WDT) {
    avr_device::asm::wdr();
}

/// Recurse `depth` levels to leave a mark in the painted stack.
#[inline(never)]
fn descend(depth: u8) -> u8 {
    let frame = core::hint::black_box([depth; 8]);
    if depth == 0 {
        frame[0]
    } else {
        descend(depth - 1).wrapping_add(frame[7])
    }
}

#[avr_device::entry]
fn main() -> ! {
    wdt_init();

    let dp = unwrap_option(Peripherals::take());

    let mut depth = 0;
    loop {
        core::hint::black_box(descend(depth));
        depth = (depth + 1) % MAX_DEPTH;
        wdt_poke(&dp.WDT);
    }
}

/// Cheaper Option::unwrap() alternative.
#[inline(always)]
fn unwrap_option<T>(value: Option<T>) -> T {
    match value {
        Some(value) => value,
        None => reset_system(),
    }
}

/// Reset the system.
#[inline(always)]
#[allow(clippy::empty_loop)]
fn reset_system() -> ! {
    loop {
        // Wait for the watchdog timer to trigger and reset the system.
    }
}

#[inline(always)]
#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    reset_system();
}

// vim: ts=4 sw=4 expandtab
