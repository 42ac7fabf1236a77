//! Clock names and clock source selections.
//!
//! A clock name packs three things into one word:
//!
//! ```text
//! 31            16 15      8 7       0
//! +---------------+---------+---------+
//! |   resource    |  group  |  node   |
//! +---------------+---------+---------+
//! ```
//!
//! `group` picks the resolution strategy, `node` indexes into that group's
//! table (a common clock node, or an ADC/DAC/I2S/WDG instance), and `resource`
//! is the SYSCTL resource slot used for gating and group links.

/// Resource id for names that have no gate of their own.
pub const RESOURCE_NONE: u16 = 0xFFFF;

/// Pseudo resource shared by every PTPC user, mapped to the real PTPC slot
/// when linking groups.
pub const RESOURCE_SHARED_PTPC: u16 = 0xFFF0;

/// Resolution strategy of a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ClockGroup {
    /// Plain mux + divider node
    Common = 0,
    Adc = 1,
    I2s = 2,
    Wdg = 3,
    /// Hard-wired to the 24MHz oscillator
    Pmic = 4,
    Ahb = 5,
    Axi = 6,
    Dac = 7,
    Cpu0 = 8,
    /// Raw clock source, node is a [`ClockSource`] id
    Src = 9,
    Invalid = 0xF,
}

impl ClockGroup {
    pub const fn from_bits(val: u8) -> ClockGroup {
        match val {
            0 => ClockGroup::Common,
            1 => ClockGroup::Adc,
            2 => ClockGroup::I2s,
            3 => ClockGroup::Wdg,
            4 => ClockGroup::Pmic,
            5 => ClockGroup::Ahb,
            6 => ClockGroup::Axi,
            7 => ClockGroup::Dac,
            8 => ClockGroup::Cpu0,
            9 => ClockGroup::Src,
            _ => ClockGroup::Invalid,
        }
    }

    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

/// Name of a clock consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockName {
    group: ClockGroup,
    node: u8,
    resource: u16,
}

impl ClockName {
    pub const fn new(group: ClockGroup, node: u8, resource: u16) -> Self {
        Self { group, node, resource }
    }

    /// Decode a packed name. An unknown group tag decodes to [`ClockGroup::Invalid`].
    pub const fn from_bits(val: u32) -> Self {
        Self {
            group: ClockGroup::from_bits(((val >> 8) & 0xFF) as u8),
            node: (val & 0xFF) as u8,
            resource: (val >> 16) as u16,
        }
    }

    pub const fn to_bits(self) -> u32 {
        ((self.resource as u32) << 16) | ((self.group.to_bits() as u32) << 8) | self.node as u32
    }

    #[inline]
    pub const fn group(&self) -> ClockGroup {
        self.group
    }

    /// Node index for the common group, instance index for ADC/DAC/I2S/WDG.
    #[inline]
    pub const fn node(&self) -> u8 {
        self.node
    }

    #[inline]
    pub const fn resource(&self) -> u16 {
        self.resource
    }
}

/// Root clock sources, in CLOCK.MUX encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ClockSource {
    /// 24MHz crystal oscillator
    Osc0Clk0 = 0,
    Pll0Clk0 = 1,
    Pll0Clk1 = 2,
    Pll0Clk2 = 3,
    Pll1Clk0 = 4,
    Pll1Clk1 = 5,
    Pll2Clk0 = 6,
    Pll2Clk1 = 7,
}

impl ClockSource {
    pub const fn from_bits(val: u8) -> Option<ClockSource> {
        Some(match val {
            0 => ClockSource::Osc0Clk0,
            1 => ClockSource::Pll0Clk0,
            2 => ClockSource::Pll0Clk1,
            3 => ClockSource::Pll0Clk2,
            4 => ClockSource::Pll1Clk0,
            5 => ClockSource::Pll1Clk1,
            6 => ClockSource::Pll2Clk0,
            7 => ClockSource::Pll2Clk1,
            _ => return None,
        })
    }

    pub const fn to_bits(self) -> u8 {
        self as u8
    }

    /// `(pll, postdiv)` of a PLL output, `None` for the oscillator.
    pub const fn pll(self) -> Option<(usize, usize)> {
        match self {
            ClockSource::Osc0Clk0 => None,
            ClockSource::Pll0Clk0 => Some((0, 0)),
            ClockSource::Pll0Clk1 => Some((0, 1)),
            ClockSource::Pll0Clk2 => Some((0, 2)),
            ClockSource::Pll1Clk0 => Some((1, 0)),
            ClockSource::Pll1Clk1 => Some((1, 1)),
            ClockSource::Pll2Clk0 => Some((2, 0)),
            ClockSource::Pll2Clk1 => Some((2, 1)),
        }
    }
}

/// A mux selection, tagged with the group whose mux it drives.
///
/// Root sources are tagged [`ClockGroup::Common`], the index is the CLOCK.MUX value.
/// ADC/DAC/I2S selections index their candidate table. For the watchdog the index
/// is 1 when the bus (CPU derived) clock is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClkSrc {
    group: ClockGroup,
    index: u8,
}

impl ClkSrc {
    pub const OSC0_CLK0: ClkSrc = ClkSrc::source(ClockSource::Osc0Clk0);
    pub const PLL0_CLK0: ClkSrc = ClkSrc::source(ClockSource::Pll0Clk0);
    pub const PLL0_CLK1: ClkSrc = ClkSrc::source(ClockSource::Pll0Clk1);
    pub const PLL0_CLK2: ClkSrc = ClkSrc::source(ClockSource::Pll0Clk2);
    pub const PLL1_CLK0: ClkSrc = ClkSrc::source(ClockSource::Pll1Clk0);
    pub const PLL1_CLK1: ClkSrc = ClkSrc::source(ClockSource::Pll1Clk1);
    pub const PLL2_CLK0: ClkSrc = ClkSrc::source(ClockSource::Pll2Clk0);
    pub const PLL2_CLK1: ClkSrc = ClkSrc::source(ClockSource::Pll2Clk1);

    pub const ADC_ANA: ClkSrc = ClkSrc::new(ClockGroup::Adc, 0);
    pub const ADC_AHB: ClkSrc = ClkSrc::new(ClockGroup::Adc, 1);
    pub const DAC_ANA: ClkSrc = ClkSrc::new(ClockGroup::Dac, 0);
    pub const DAC_AHB: ClkSrc = ClkSrc::new(ClockGroup::Dac, 1);
    pub const I2S_AUD0: ClkSrc = ClkSrc::new(ClockGroup::I2s, 0);
    pub const I2S_AUD1: ClkSrc = ClkSrc::new(ClockGroup::I2s, 1);
    pub const WDG_OSC32K: ClkSrc = ClkSrc::new(ClockGroup::Wdg, 0);
    pub const WDG_AHB0: ClkSrc = ClkSrc::new(ClockGroup::Wdg, 1);

    pub const fn new(group: ClockGroup, index: u8) -> Self {
        Self { group, index }
    }

    pub const fn source(src: ClockSource) -> Self {
        Self::new(ClockGroup::Common, src.to_bits())
    }

    #[inline]
    pub const fn group(&self) -> ClockGroup {
        self.group
    }

    #[inline]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// The root source this selection names, if it names one.
    pub const fn root(&self) -> Option<ClockSource> {
        match self.group {
            ClockGroup::Common | ClockGroup::Cpu0 => ClockSource::from_bits(self.index),
            _ => None,
        }
    }
}

impl From<ClockSource> for ClkSrc {
    fn from(src: ClockSource) -> Self {
        ClkSrc::source(src)
    }
}
