//! Time units

use core::fmt;
use core::ops::Div;

/// Hertz
#[derive(PartialEq, PartialOrd, Clone, Copy, Eq, Ord, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hertz(pub u32);

impl fmt::Display for Hertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

impl Hertz {
    pub const fn hz(hertz: u32) -> Self {
        Self(hertz)
    }

    pub const fn khz(kilohertz: u32) -> Self {
        Self(kilohertz * 1_000)
    }

    pub const fn mhz(megahertz: u32) -> Self {
        Self(megahertz * 1_000_000)
    }

    /// 0 Hz is what the resolver hands back for a clock it cannot trace.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Integer division, a zero divisor yields 0 Hz.
impl Div<u32> for Hertz {
    type Output = Hertz;

    fn div(self, rhs: u32) -> Hertz {
        match self.0.checked_div(rhs) {
            Some(v) => Hertz(v),
            None => Hertz(0),
        }
    }
}
