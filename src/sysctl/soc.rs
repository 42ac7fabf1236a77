//! Register capability backed by the generated PAC.

use super::pll::{self, PLL_REF_FREQ};
use super::regs::{AnaClk, Clock, ClockCpu, I2sClk, PllRegs, Resource, SysctlRegs, WdgCtrl, WdgRegs};
use crate::pac;
use crate::pac::{PLLCTL, SYSCTL};
use crate::time::Hertz;

/// The chip itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Soc;

impl SysctlRegs for Soc {
    fn clock(&self, node: usize) -> Clock {
        Clock(SYSCTL.clock(node).read().0)
    }

    fn write_clock(&self, node: usize, val: Clock) {
        SYSCTL.clock(node).write(|w| w.0 = val.0);
    }

    fn clock_cpu(&self) -> ClockCpu {
        ClockCpu(SYSCTL.clock_cpu(0).read().0)
    }

    fn write_clock_cpu(&self, val: ClockCpu) {
        SYSCTL.clock_cpu(0).write(|w| w.0 = val.0);
    }

    fn adcclk(&self, instance: usize) -> AnaClk {
        AnaClk(SYSCTL.adcclk(instance).read().0)
    }

    fn write_adcclk(&self, instance: usize, val: AnaClk) {
        SYSCTL.adcclk(instance).write(|w| w.0 = val.0);
    }

    fn dacclk(&self, instance: usize) -> AnaClk {
        AnaClk(SYSCTL.dacclk(instance).read().0)
    }

    fn write_dacclk(&self, instance: usize, val: AnaClk) {
        SYSCTL.dacclk(instance).write(|w| w.0 = val.0);
    }

    fn i2sclk(&self, instance: usize) -> I2sClk {
        I2sClk(SYSCTL.i2sclk(instance).read().0)
    }

    fn write_i2sclk(&self, instance: usize, val: I2sClk) {
        SYSCTL.i2sclk(instance).write(|w| w.0 = val.0);
    }

    fn resource(&self, resource: usize) -> Resource {
        Resource(SYSCTL.resource(resource).read().0)
    }

    fn write_resource(&self, resource: usize, val: Resource) {
        SYSCTL.resource(resource).write(|w| w.0 = val.0);
    }

    fn group_set(&self, group: usize, index: usize, mask: u32) {
        match group {
            0 => SYSCTL.group0(index).set().write(|w| w.set_link(mask)),
            _ => SYSCTL.group1(index).set().write(|w| w.set_link(mask)),
        }
    }

    fn group_clear(&self, group: usize, index: usize, mask: u32) {
        match group {
            0 => SYSCTL.group0(index).clear().write(|w| w.set_link(mask)),
            _ => SYSCTL.group1(index).clear().write(|w| w.set_link(mask)),
        }
    }

    fn affiliate_set(&self, cpu: usize, mask: u32) {
        SYSCTL.affiliate(cpu).set().write(|w| w.set_link(mask));
    }

    fn affiliate_clear(&self, cpu: usize, mask: u32) {
        SYSCTL.affiliate(cpu).clear().write(|w| w.set_link(mask));
    }
}

fn wdg(instance: usize) -> pac::wdg::Wdg {
    match instance {
        0 => pac::WDG0,
        _ => pac::WDG1,
    }
}

impl WdgRegs for Soc {
    fn wdg_ctrl(&self, instance: usize) -> WdgCtrl {
        WdgCtrl(wdg(instance).ctrl().read().0)
    }

    fn write_wdg_ctrl(&self, instance: usize, val: WdgCtrl) {
        wdg(instance).ctrl().write(|w| w.0 = val.0);
    }
}

impl PllRegs for Soc {
    fn postdiv_frequency(&self, pll: usize, postdiv: usize) -> Hertz {
        if pll > 2 || postdiv > 2 {
            return Hertz(0);
        }
        let r = PLLCTL.pll(pll);
        pll::postdiv_frequency(
            PLL_REF_FREQ,
            r.mfi().read().mfi() as u32,
            r.mfn().read().mfn() as u32,
            r.mfd().read().mfd() as u32,
            r.div(postdiv).read().div() as u8,
        )
    }
}
