//! Machine cycle counter, MCYCLE/MCYCLEH
//!
//! The 64-bit counter is exposed as two 32-bit CSRs that free-run on their own.
//! Nothing latches the high word when the low word is read, so a plain
//! `high << 32 | low` can pair a stale high word with a freshly wrapped low word.

/// Split view of a free-running 64-bit counter.
pub trait CycleCounter {
    /// Low 32 bits.
    fn low(&self) -> u32;
    /// High 32 bits.
    fn high(&self) -> u32;
}

impl<T: CycleCounter + ?Sized> CycleCounter for &T {
    #[inline]
    fn low(&self) -> u32 {
        (**self).low()
    }

    #[inline]
    fn high(&self) -> u32 {
        (**self).high()
    }
}

#[inline]
const fn join(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Read the full 64-bit count.
///
/// low, high, low again. While the low word kept counting up between the two
/// reads the high word read in between belongs to the first low value. If it
/// did not, the low word wrapped around somewhere in that window and the high
/// word has to be read again to match the second low value.
///
/// Tolerates at most one wrap of the low word per call.
pub fn now<C: CycleCounter + ?Sized>(counter: &C) -> u64 {
    let low_first = counter.low();
    let high = counter.high();
    let low_second = counter.low();

    if low_first < low_second {
        join(high, low_first)
    } else {
        let high = counter.high();
        join(high, low_second)
    }
}

/// The hart's own `mcycle`/`mcycleh` CSRs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mcycle;

#[cfg(target_arch = "riscv32")]
impl CycleCounter for Mcycle {
    #[inline(always)]
    fn low(&self) -> u32 {
        riscv::register::mcycle::read() as u32
    }

    #[inline(always)]
    fn high(&self) -> u32 {
        riscv::register::mcycleh::read() as u32
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use core::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use super::*;

    /// Replays recorded register reads in order.
    pub(crate) struct ScriptedCounter {
        lows: RefCell<VecDeque<u32>>,
        highs: RefCell<VecDeque<u32>>,
    }

    impl ScriptedCounter {
        pub(crate) fn new(lows: &[u32], highs: &[u32]) -> Self {
            Self {
                lows: RefCell::new(lows.iter().copied().collect()),
                highs: RefCell::new(highs.iter().copied().collect()),
            }
        }

        pub(crate) fn high_reads_left(&self) -> usize {
            self.highs.borrow().len()
        }
    }

    impl CycleCounter for ScriptedCounter {
        fn low(&self) -> u32 {
            self.lows.borrow_mut().pop_front().expect("unexpected low read")
        }

        fn high(&self) -> u32 {
            self.highs.borrow_mut().pop_front().expect("unexpected high read")
        }
    }

    /// Counter that advances by `step` every time the low word is sampled.
    pub(crate) struct TickingCounter {
        pub(crate) value: Cell<u64>,
        step: u64,
    }

    impl TickingCounter {
        pub(crate) fn new(start: u64, step: u64) -> Self {
            Self {
                value: Cell::new(start),
                step,
            }
        }
    }

    impl CycleCounter for TickingCounter {
        fn low(&self) -> u32 {
            let v = self.value.get() + self.step;
            self.value.set(v);
            v as u32
        }

        fn high(&self) -> u32 {
            (self.value.get() >> 32) as u32
        }
    }

    #[test]
    fn steady_low_word_uses_first_sample() {
        let counter = ScriptedCounter::new(&[0x1000, 0x1010], &[7]);
        assert_eq!(now(&counter), (7 << 32) | 0x1000);
        assert_eq!(counter.high_reads_left(), 0);
    }

    #[test]
    fn rollover_refreshes_high_word() {
        // high was sampled before the low word wrapped
        let counter = ScriptedCounter::new(&[0xFFFF_FFF0, 0x0000_0010], &[4, 5]);
        let t = now(&counter);
        assert_eq!(t, (5 << 32) | 0x10);
        assert_ne!(t, (4 << 32) | 0x10);
        assert_eq!(counter.high_reads_left(), 0);
    }

    #[test]
    fn equal_samples_take_the_reread_path() {
        let counter = ScriptedCounter::new(&[42, 42], &[1, 1]);
        assert_eq!(now(&counter), (1 << 32) | 42);
        assert_eq!(counter.high_reads_left(), 0);
    }

    #[test]
    fn monotonic_across_wrap() {
        let counter = TickingCounter::new(0xFFFF_FFF0, 4);
        let mut last = 0;
        for _ in 0..16 {
            let t = now(&counter);
            assert!(t >= last, "{t:#x} < {last:#x}");
            last = t;
        }
        assert!(last > 0x1_0000_0000);
    }
}
