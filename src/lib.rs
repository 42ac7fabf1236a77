#![cfg_attr(not(test), no_std)]

//! Clock tree management for HPMicro's RISC-V MCUs.
//!
//! - [`sysctl`]: clock names, frequency resolution, source/divider configuration,
//!   resource gating and group links
//! - [`mcycle`]: rollover-safe read of the 64-bit cycle counter
//! - [`delay`]: busy-wait delays calibrated against the cached core clock

mod macros;

pub mod delay;
pub mod mcycle;
pub mod sysctl;
pub mod time;

#[cfg(feature = "hpm6360")]
pub use hpm_metapac as pac;

pub use sysctl::{ClkSrc, ClockGroup, ClockName, ClockSource, ClockTree, Error};
pub use time::Hertz;
