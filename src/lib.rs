// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack painting for AVR stack usage measurement.
//!
//! On AVR targets with the `init-hook` feature enabled, a naked routine is
//! placed into the `.init1` startup section. It fills the RAM between the end
//! of the static data (`_end`) and the top of the stack (`__stack`) with a
//! known pattern before anything else runs. A debugger halting the program
//! later finds the highest overwritten byte and derives the peak stack depth.
//!
//! The firmware only has to link this crate:
//!
//! ```ignore
//! use avr_stackpaint as _;
//! ```
//!
//! The hook is intended for debug builds only.
//!
//! The portable core ([paint()], [mod@watermark]) works on any [Ram]
//! and is what the host tests run against.

#![no_std]
#![cfg_attr(target_arch = "avr", feature(asm_experimental_arch))]

pub use crate::{
    paint::{paint, paint_slice},
    pattern::{Cyclic, Fill, Pattern, STACK_PAINT_BYTE, STACK_PAINT_CYCLIC},
    ram::{Ram, Window},
    region::{Addr, Region},
    watermark::{peak_usage, untouched, untouched_run},
};

#[cfg(all(target_arch = "avr", feature = "init-hook"))]
mod init_hook;

pub mod paint;
pub mod pattern;
pub mod ram;
pub mod region;
pub mod watermark;

// vim: ts=4 sw=4 expandtab
