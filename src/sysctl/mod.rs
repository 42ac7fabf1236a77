//! System control: clock tree, resource gating, group links.
//!
//! [`ClockTree`] walks the SYSCTL clock tree through an injected register
//! capability ([`Hardware`]). Resolution only reads registers, configuration
//! rewrites mux/divider fields, gating flips resource modes.
//!
//! ```text
//! OSC0/PLLx_CLKy --> CLOCK[n] (mux, div) --> peripheral
//!                \-> CLOCK_CPU[0] (mux, div) --> CPU0
//!                                     |--/ sub0 --> AXI
//!                                     \--/ sub1 --> AHB
//! ```

mod config;
mod gate;
pub mod name;
pub mod pll;
pub mod regs;
pub mod v63;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "hpm6360")]
mod soc;

pub use name::{ClkSrc, ClockGroup, ClockName, ClockSource, RESOURCE_NONE, RESOURCE_SHARED_PTPC};
pub use regs::{Hardware, PllRegs, SysctlRegs, WdgRegs};
#[cfg(feature = "hpm6360")]
pub use soc::Soc;

use crate::time::Hertz;

pub const CLK_32K: Hertz = Hertz(32_768);
pub const CLK_24M: Hertz = Hertz(24_000_000);

/// Upper bound for both AXI and AHB.
pub const BUS_FREQ_MAX: Hertz = Hertz(166_000_000);

/// Number of resource groups.
pub const GROUP_NUM: usize = 2;
/// Number of CPUs groups can be affiliated with.
pub const CPU_NUM: usize = 2;

/// Clock configuration error
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Name does not belong to the group the operation works on.
    InvalidClock,
    /// Node or instance index beyond the chip's table.
    InstanceOutOfRange,
    /// Divider outside of the range the register can hold.
    DividerInvalid,
    /// Source not selectable for this clock.
    SourceInvalid,
    /// No software settable source/divider for this group.
    OperationUnsupported,
    /// Clock is hard-wired.
    ClockFixed,
    /// Derived from CPU0, configure CPU0 instead.
    ClockSharedWithCpu0,
}

/// Fixed shape of a chip's clock tree.
#[derive(Debug)]
pub struct Topology {
    /// Number of CLOCK[n] nodes.
    pub clock_node_end: u8,
    /// Node of the CPU0 clock, the only CPU clock that can be configured.
    pub cpu0_node: u8,
    /// Pseudo node standing for the AHB bus in the mux tables.
    pub ahb_node: u8,
    /// ADC mux candidates: per-instance ana node base, AHB.
    pub adc_clk_mux: [u8; 2],
    /// DAC mux candidates: per-instance ana node base, AHB.
    pub dac_clk_mux: [u8; 2],
    pub i2s_clk_mux: &'static [u8],
    pub adc_instances: usize,
    pub dac_instances: usize,
    pub i2s_instances: usize,
    pub wdg_instances: usize,
    pub resource_end: u16,
    pub resource_linkable_start: u16,
    /// Real slot behind [`RESOURCE_SHARED_PTPC`].
    pub resource_ptpc: u16,
}

/// The clock tree of one chip.
pub struct ClockTree<H> {
    regs: H,
    topology: &'static Topology,
}

impl<H: Hardware> ClockTree<H> {
    pub const fn new(regs: H, topology: &'static Topology) -> Self {
        Self { regs, topology }
    }

    pub fn regs(&self) -> &H {
        &self.regs
    }

    pub fn topology(&self) -> &'static Topology {
        self.topology
    }

    /// Effective frequency of a clock, 0 Hz if it cannot be resolved.
    pub fn frequency(&self, name: ClockName) -> Hertz {
        let instance = name.node() as usize;
        match name.group() {
            ClockGroup::Common => self.common_frequency(name.node()),
            ClockGroup::Adc => self.adc_frequency(instance),
            ClockGroup::Dac => self.dac_frequency(instance),
            ClockGroup::I2s => self.i2s_frequency(instance),
            ClockGroup::Wdg => self.wdg_frequency(instance),
            ClockGroup::Pmic => CLK_24M,
            ClockGroup::Cpu0 => self.cpu0_frequency(),
            ClockGroup::Ahb => self.ahb_frequency(),
            ClockGroup::Axi => self.axi_frequency(),
            ClockGroup::Src => self.raw_source_frequency(name.node()),
            ClockGroup::Invalid => Hertz(0),
        }
    }

    /// Frequency of a root clock source.
    pub fn source_frequency(&self, src: ClockSource) -> Hertz {
        match src.pll() {
            None => CLK_24M,
            Some((pll, postdiv)) => self.regs.postdiv_frequency(pll, postdiv),
        }
    }

    /// Frequency of a root clock source given by its mux encoding.
    pub fn raw_source_frequency(&self, id: u8) -> Hertz {
        match ClockSource::from_bits(id) {
            Some(src) => self.source_frequency(src),
            None => Hertz(0),
        }
    }

    fn common_frequency(&self, node: u8) -> Hertz {
        if node >= self.topology.clock_node_end {
            return Hertz(0);
        }
        let r = self.regs.clock(node as usize);
        self.raw_source_frequency(r.mux()) / (r.div() as u32 + 1)
    }

    /// A mux candidate, which is either a common node or the AHB bus.
    fn node_frequency(&self, node: u8) -> Hertz {
        if node == self.topology.ahb_node {
            self.ahb_frequency()
        } else {
            self.common_frequency(node)
        }
    }

    fn ana_node(mux_table: &[u8; 2], mux: u8, instance: usize) -> u8 {
        if mux == 1 {
            mux_table[1]
        } else {
            mux_table[0] + instance as u8
        }
    }

    fn adc_frequency(&self, instance: usize) -> Hertz {
        if instance >= self.topology.adc_instances {
            return Hertz(0);
        }
        let mux = self.regs.adcclk(instance).mux();
        self.node_frequency(Self::ana_node(&self.topology.adc_clk_mux, mux, instance))
    }

    fn dac_frequency(&self, instance: usize) -> Hertz {
        if instance >= self.topology.dac_instances {
            return Hertz(0);
        }
        let mux = self.regs.dacclk(instance).mux();
        self.node_frequency(Self::ana_node(&self.topology.dac_clk_mux, mux, instance))
    }

    fn i2s_frequency(&self, instance: usize) -> Hertz {
        if instance >= self.topology.i2s_instances {
            return Hertz(0);
        }
        let mux = self.regs.i2sclk(instance).mux() as usize;
        match self.topology.i2s_clk_mux.get(mux) {
            Some(&node) => self.node_frequency(node),
            None => Hertz(0),
        }
    }

    fn wdg_frequency(&self, instance: usize) -> Hertz {
        if instance >= self.topology.wdg_instances {
            return Hertz(0);
        }
        if self.regs.wdg_ctrl(instance).clksel() {
            CLK_32K
        } else {
            self.cpu0_frequency()
        }
    }

    fn cpu0_frequency(&self) -> Hertz {
        let r = self.regs.clock_cpu();
        self.raw_source_frequency(r.mux()) / (r.div() as u32 + 1)
    }

    fn axi_frequency(&self) -> Hertz {
        let div = self.regs.clock_cpu().sub0_div() as u32 + 1;
        self.cpu0_frequency() / div
    }

    fn ahb_frequency(&self) -> Hertz {
        let div = self.regs.clock_cpu().sub1_div() as u32 + 1;
        self.cpu0_frequency() / div
    }

    /// Resolve CPU0 and cache it for [`crate::delay`]. Call after every CPU0 change.
    pub fn update_core_clock(&self) -> Hertz {
        let hz = self.frequency(ClockName::new(ClockGroup::Cpu0, 0, RESOURCE_NONE));
        crate::delay::set_core_clock(hz);
        debug!("core clock: {}", hz);
        hz
    }
}
