//! Busy-wait delays on the CPU cycle counter.
//!
//! The delays are calibrated against the cached core clock, see
//! [`ClockTree::update_core_clock`](crate::sysctl::ClockTree::update_core_clock).
//! They spin on the calling hart without masking interrupts, so an interrupt
//! can only make a delay longer.

use core::sync::atomic::{AtomicU32, Ordering};

use embedded_hal::delay::DelayNs;

use crate::mcycle::{self, CycleCounter};
use crate::time::Hertz;

/// 0 until the first `update_core_clock`, every delay is a no-op before that.
static CORE_CLOCK: AtomicU32 = AtomicU32::new(0);

/// Cached CPU0 frequency.
#[inline]
pub fn core_clock() -> Hertz {
    Hertz(CORE_CLOCK.load(Ordering::Relaxed))
}

pub(crate) fn set_core_clock(hz: Hertz) {
    CORE_CLOCK.store(hz.0, Ordering::Relaxed);
}

/// Delay implementation using the `mcycle` counter.
#[derive(Debug, Clone, Copy)]
pub struct McycleDelay<C> {
    counter: C,
    core_clock: Hertz,
}

impl<C: CycleCounter> McycleDelay<C> {
    /// Calibrated against the cached core clock at the time of the call.
    pub fn new(counter: C) -> Self {
        Self::with_core_clock(counter, core_clock())
    }

    pub fn with_core_clock(counter: C, core_clock: Hertz) -> Self {
        Self { counter, core_clock }
    }

    #[inline]
    fn ticks_per_us(&self) -> u64 {
        self.core_clock.0.div_ceil(1_000_000) as u64
    }

    fn spin(&self, ticks: u64) {
        let target = mcycle::now(&self.counter) + ticks;
        while mcycle::now(&self.counter) < target {}
    }
}

impl<C: CycleCounter> DelayNs for McycleDelay<C> {
    fn delay_ns(&mut self, ns: u32) {
        let ticks = (self.core_clock.0 as u64 * ns as u64).div_ceil(1_000_000_000);
        self.spin(ticks);
    }

    fn delay_us(&mut self, us: u32) {
        self.spin(self.ticks_per_us() * us as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.spin(self.ticks_per_us() * 1_000 * ms as u64);
    }
}

/// Spin for `us` microseconds on the current hart.
#[cfg(target_arch = "riscv32")]
pub fn delay_us(us: u32) {
    McycleDelay::new(mcycle::Mcycle).delay_us(us);
}

/// Spin for `ms` milliseconds on the current hart.
#[cfg(target_arch = "riscv32")]
pub fn delay_ms(ms: u32) {
    McycleDelay::new(mcycle::Mcycle).delay_ms(ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcycle::tests::TickingCounter;

    const STEP: u64 = 7;

    fn elapsed(start: u64, f: impl FnOnce(&mut McycleDelay<&TickingCounter>), counter: &TickingCounter) -> u64 {
        let mut delay = McycleDelay::with_core_clock(counter, Hertz::mhz(480));
        f(&mut delay);
        counter.value.get() - start
    }

    #[test]
    fn delay_us_waits_calibrated_cycles() {
        let counter = TickingCounter::new(1_000, STEP);
        let spent = elapsed(1_000, |d| d.delay_us(1_000), &counter);
        assert!(spent >= 480 * 1_000, "{spent}");
        // target check samples the counter twice per round
        assert!(spent <= 480 * 1_000 + 4 * STEP, "{spent}");
    }

    #[test]
    fn delay_ms_scales_by_thousand() {
        let counter = TickingCounter::new(0, STEP);
        let spent = elapsed(0, |d| d.delay_ms(2), &counter);
        assert!(spent >= 2 * 480_000, "{spent}");
        assert!(spent <= 2 * 480_000 + 4 * STEP, "{spent}");
    }

    #[test]
    fn delay_ns_rounds_up() {
        let counter = TickingCounter::new(0, 1);
        let mut delay = McycleDelay::with_core_clock(&counter, Hertz::mhz(24));
        // 24MHz is 41.67ns per tick, 100ns needs 3 ticks
        delay.delay_ns(100);
        assert!(counter.value.get() >= 3);
        assert!(counter.value.get() <= 3 + 4);
    }

    #[test]
    fn delay_crosses_low_word_wrap() {
        let start = 0xFFFF_FF00;
        let counter = TickingCounter::new(start, STEP);
        let spent = elapsed(start, |d| d.delay_us(10), &counter);
        assert!(spent >= 4_800, "{spent}");
        assert!(spent <= 4_800 + 4 * STEP, "{spent}");
    }

    #[test]
    fn new_follows_updated_core_clock() {
        use crate::sysctl::mock::MockSoc;
        use crate::sysctl::{v63, ClkSrc, ClockTree};

        // every test touching the cache settles CPU0 on 480MHz
        let tree = ClockTree::new(MockSoc::new(&v63::TOPOLOGY), &v63::TOPOLOGY);
        tree.set_source_divider(v63::CPU0, ClkSrc::PLL1_CLK0, 1).unwrap();
        assert_eq!(tree.update_core_clock(), Hertz::mhz(480));

        let counter = TickingCounter::new(0, STEP);
        McycleDelay::new(&counter).delay_us(100);
        let spent = counter.value.get();
        assert!(spent >= 480 * 100, "{spent}");
        assert!(spent <= 480 * 100 + 4 * STEP, "{spent}");
    }

    #[test]
    fn ticks_round_up_to_whole_mhz() {
        let counter = TickingCounter::new(0, 1);
        let delay = McycleDelay::with_core_clock(&counter, Hertz(24_000_001));
        assert_eq!(delay.ticks_per_us(), 25);
        let delay = McycleDelay::with_core_clock(&counter, Hertz(0));
        assert_eq!(delay.ticks_per_us(), 0);
    }
}
