//! Source and divider configuration.
//!
//! Every group has its own legality rule. Illegal combinations are rejected
//! before any register is written.

use super::regs::{Clock, ClockCpu};
use super::{ClkSrc, ClockGroup, ClockName, ClockSource, ClockTree, Error, Hardware, BUS_FREQ_MAX};
use crate::time::Hertz;

/// Common and CPU0 dividers, 1 to 256.
const DIV_MAX: u32 = 256;
/// AXI/AHB sub-dividers, 1 to 16.
const SUB_DIV_MAX: u32 = 16;

fn check_div(div: u32) -> Result<u8, Error> {
    if !(1..=DIV_MAX).contains(&div) {
        warn!("divider {} out of range", div);
        return Err(Error::DividerInvalid);
    }
    Ok((div - 1) as u8)
}

fn root_source(src: ClkSrc) -> Result<ClockSource, Error> {
    src.root().ok_or(Error::SourceInvalid)
}

/// Sub-divider keeping a bus at or below [`BUS_FREQ_MAX`] when fed by `cpu`.
fn bus_sub_div(cpu: Hertz) -> Result<u8, Error> {
    let sub_div = cpu.0.div_ceil(BUS_FREQ_MAX.0).max(1);
    if sub_div > SUB_DIV_MAX {
        warn!("cpu clock {} too fast for the bus", cpu);
        return Err(Error::DividerInvalid);
    }
    Ok((sub_div - 1) as u8)
}

impl<H: Hardware> ClockTree<H> {
    /// Currently selected source of a clock, `None` if it cannot be told.
    pub fn source(&self, name: ClockName) -> Option<ClkSrc> {
        let topo = self.topology;
        let instance = name.node() as usize;
        match name.group() {
            ClockGroup::Common => {
                if name.node() >= topo.clock_node_end {
                    return None;
                }
                let mux = self.regs.clock(instance).mux();
                ClockSource::from_bits(mux).map(ClkSrc::source)
            }
            ClockGroup::Adc => (instance < topo.adc_instances)
                .then(|| ClkSrc::new(ClockGroup::Adc, self.regs.adcclk(instance).mux())),
            ClockGroup::Dac => (instance < topo.dac_instances)
                .then(|| ClkSrc::new(ClockGroup::Dac, self.regs.dacclk(instance).mux())),
            ClockGroup::I2s => (instance < topo.i2s_instances)
                .then(|| ClkSrc::new(ClockGroup::I2s, self.regs.i2sclk(instance).mux())),
            ClockGroup::Wdg => (instance < topo.wdg_instances).then(|| {
                if self.regs.wdg_ctrl(instance).clksel() {
                    ClkSrc::WDG_OSC32K
                } else {
                    ClkSrc::WDG_AHB0
                }
            }),
            ClockGroup::Pmic => Some(ClkSrc::OSC0_CLK0),
            ClockGroup::Cpu0 | ClockGroup::Ahb | ClockGroup::Axi => {
                Some(ClkSrc::new(ClockGroup::Cpu0, self.regs.clock_cpu().mux()))
            }
            ClockGroup::Src => ClockSource::from_bits(name.node()).map(ClkSrc::source),
            ClockGroup::Invalid => None,
        }
    }

    /// Select the source and divider of a clock.
    ///
    /// `div` is the real divider, 1 to 256. It is ignored for the watchdog.
    /// Changing CPU0 also re-derives the AXI and AHB sub-dividers so that
    /// neither bus runs above [`BUS_FREQ_MAX`].
    pub fn set_source_divider(&self, name: ClockName, src: ClkSrc, div: u32) -> Result<(), Error> {
        let res = match name.group() {
            ClockGroup::Common => self.set_common(name.node(), src, div),
            ClockGroup::Adc | ClockGroup::I2s | ClockGroup::Src => Err(Error::OperationUnsupported),
            ClockGroup::Wdg => self.set_wdg(name.node() as usize, src),
            ClockGroup::Pmic => Err(Error::ClockFixed),
            ClockGroup::Ahb | ClockGroup::Axi => Err(Error::ClockSharedWithCpu0),
            ClockGroup::Cpu0 => {
                if name.node() == self.topology.cpu0_node {
                    self.set_cpu0(src, div)
                } else {
                    Err(Error::ClockSharedWithCpu0)
                }
            }
            // the DAC mux goes through set_dac_source
            ClockGroup::Dac | ClockGroup::Invalid => Err(Error::SourceInvalid),
        };
        if let Err(e) = res {
            warn!("set_source_divider({}, {}, {}): {}", name, src, div, e);
        }
        res
    }

    fn set_common(&self, node: u8, src: ClkSrc, div: u32) -> Result<(), Error> {
        let raw_div = check_div(div)?;
        if node >= self.topology.clock_node_end {
            return Err(Error::InstanceOutOfRange);
        }
        let src = root_source(src)?;
        let node = node as usize;

        let mut r: Clock = self.regs.clock(node);
        r.set_mux(src.to_bits());
        r.set_div(raw_div);
        self.regs.write_clock(node, r);
        while self.regs.clock(node).loc_busy() {}

        trace!("clock[{}] <- {} / {}", node, src, div);
        Ok(())
    }

    fn set_wdg(&self, instance: usize, src: ClkSrc) -> Result<(), Error> {
        if instance >= self.topology.wdg_instances {
            return Err(Error::InstanceOutOfRange);
        }
        let clksel = match src {
            ClkSrc::WDG_AHB0 => false,
            ClkSrc::WDG_OSC32K => true,
            _ => return Err(Error::SourceInvalid),
        };
        let mut r = self.regs.wdg_ctrl(instance);
        r.set_clksel(clksel);
        self.regs.write_wdg_ctrl(instance, r);

        trace!("wdg{} <- {}", instance, if clksel { "32k" } else { "bus" });
        Ok(())
    }

    fn set_cpu0(&self, src: ClkSrc, div: u32) -> Result<(), Error> {
        let raw_div = check_div(div)?;
        let src = root_source(src)?;

        // AXI and AHB hang off the CPU clock, keep both under the ceiling
        let expected = self.source_frequency(src) / div;
        let axi_sub_div = bus_sub_div(expected)?;
        let ahb_sub_div = bus_sub_div(expected)?;

        let mut r = ClockCpu::default();
        r.set_mux(src.to_bits());
        r.set_sub0_div(axi_sub_div);
        r.set_sub1_div(ahb_sub_div);

        // a write with an unchanged divider is not taken, step through another one first
        if self.regs.clock_cpu().div() == raw_div {
            r.set_div(raw_div.wrapping_add(1));
            self.regs.write_clock_cpu(r);
            while self.regs.clock_cpu().glb_busy() {}
        }

        r.set_div(raw_div);
        self.regs.write_clock_cpu(r);
        while self.regs.clock_cpu().glb_busy() {}

        debug!(
            "cpu0 <- {} / {}, axi/ahb / {}",
            src,
            div,
            axi_sub_div as u32 + 1
        );
        Ok(())
    }

    /// Route an ADC instance to its ana node or to AHB.
    pub fn set_adc_source(&self, name: ClockName, src: ClkSrc) -> Result<(), Error> {
        let instance = name.node() as usize;
        if name.group() != ClockGroup::Adc || instance >= self.topology.adc_instances {
            return Err(Error::InvalidClock);
        }
        if src != ClkSrc::ADC_ANA && src != ClkSrc::ADC_AHB {
            return Err(Error::SourceInvalid);
        }
        let mut r = self.regs.adcclk(instance);
        r.set_mux(src.index());
        self.regs.write_adcclk(instance, r);
        while self.regs.adcclk(instance).loc_busy() {}

        trace!("adc{} mux <- {}", instance, src.index());
        Ok(())
    }

    /// Route a DAC instance to its ana node or to AHB.
    pub fn set_dac_source(&self, name: ClockName, src: ClkSrc) -> Result<(), Error> {
        let instance = name.node() as usize;
        if name.group() != ClockGroup::Dac || instance >= self.topology.dac_instances {
            return Err(Error::InvalidClock);
        }
        if src != ClkSrc::DAC_ANA && src != ClkSrc::DAC_AHB {
            return Err(Error::SourceInvalid);
        }
        let mut r = self.regs.dacclk(instance);
        r.set_mux(src.index());
        self.regs.write_dacclk(instance, r);
        while self.regs.dacclk(instance).loc_busy() {}

        trace!("dac{} mux <- {}", instance, src.index());
        Ok(())
    }

    /// Route an I2S instance to one of the audio nodes.
    pub fn set_i2s_source(&self, name: ClockName, src: ClkSrc) -> Result<(), Error> {
        let instance = name.node() as usize;
        if name.group() != ClockGroup::I2s || instance >= self.topology.i2s_instances {
            return Err(Error::InvalidClock);
        }
        if src != ClkSrc::I2S_AUD0 && src != ClkSrc::I2S_AUD1 {
            return Err(Error::SourceInvalid);
        }
        let mut r = self.regs.i2sclk(instance);
        r.set_mux(src.index());
        self.regs.write_i2sclk(instance, r);
        while self.regs.i2sclk(instance).loc_busy() {}

        trace!("i2s{} mux <- {}", instance, src.index());
        Ok(())
    }
}
