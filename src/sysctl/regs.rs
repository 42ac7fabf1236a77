//! Register capability of the clock tree.
//!
//! Only the fields the clock driver touches are modelled. Register values are
//! plain `u32` newtypes with field accessors, in the same shape as the PAC's
//! `sysctl::regs` types, so a backend is a thin bit-copy.
//!
//! Indices passed to the traits are always range-checked by the caller against
//! the chip [`Topology`](super::Topology).

use crate::time::Hertz;

/// SYSCTL.CLOCK[n], one common clock node.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock(pub u32);

impl Clock {
    /// Divider, 0 to 255 mapping to div 1 to 256.
    #[inline(always)]
    pub const fn div(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
    #[inline(always)]
    pub fn set_div(&mut self, val: u8) {
        self.0 = (self.0 & !0xFF) | val as u32;
    }
    #[inline(always)]
    pub const fn mux(&self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }
    #[inline(always)]
    pub fn set_mux(&mut self, val: u8) {
        self.0 = (self.0 & !(0x0F << 8)) | (((val & 0x0F) as u32) << 8);
    }
    #[inline(always)]
    pub const fn loc_busy(&self) -> bool {
        self.0 & (1 << 30) != 0
    }
    #[inline(always)]
    pub const fn glb_busy(&self) -> bool {
        self.0 & (1 << 31) != 0
    }
}

/// SYSCTL.CLOCK_CPU[0], core clock plus the two bus sub-dividers.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockCpu(pub u32);

impl ClockCpu {
    #[inline(always)]
    pub const fn div(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
    #[inline(always)]
    pub fn set_div(&mut self, val: u8) {
        self.0 = (self.0 & !0xFF) | val as u32;
    }
    #[inline(always)]
    pub const fn mux(&self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }
    #[inline(always)]
    pub fn set_mux(&mut self, val: u8) {
        self.0 = (self.0 & !(0x0F << 8)) | (((val & 0x0F) as u32) << 8);
    }
    /// AXI sub-divider, 0 to 15 mapping to div 1 to 16.
    #[inline(always)]
    pub const fn sub0_div(&self) -> u8 {
        ((self.0 >> 16) & 0x0F) as u8
    }
    #[inline(always)]
    pub fn set_sub0_div(&mut self, val: u8) {
        self.0 = (self.0 & !(0x0F << 16)) | (((val & 0x0F) as u32) << 16);
    }
    /// AHB sub-divider, 0 to 15 mapping to div 1 to 16.
    #[inline(always)]
    pub const fn sub1_div(&self) -> u8 {
        ((self.0 >> 20) & 0x0F) as u8
    }
    #[inline(always)]
    pub fn set_sub1_div(&mut self, val: u8) {
        self.0 = (self.0 & !(0x0F << 20)) | (((val & 0x0F) as u32) << 20);
    }
    #[inline(always)]
    pub const fn glb_busy(&self) -> bool {
        self.0 & (1 << 31) != 0
    }
}

/// SYSCTL.ADCCLK[n] / DACCLK[n], 1-bit mux between the ana node and AHB.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnaClk(pub u32);

impl AnaClk {
    #[inline(always)]
    pub const fn mux(&self) -> u8 {
        ((self.0 >> 8) & 0x01) as u8
    }
    #[inline(always)]
    pub fn set_mux(&mut self, val: u8) {
        self.0 = (self.0 & !(0x01 << 8)) | (((val & 0x01) as u32) << 8);
    }
    #[inline(always)]
    pub const fn loc_busy(&self) -> bool {
        self.0 & (1 << 30) != 0
    }
}

/// SYSCTL.I2SCLK[n]
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sClk(pub u32);

impl I2sClk {
    #[inline(always)]
    pub const fn mux(&self) -> u8 {
        ((self.0 >> 8) & 0x03) as u8
    }
    #[inline(always)]
    pub fn set_mux(&mut self, val: u8) {
        self.0 = (self.0 & !(0x03 << 8)) | (((val & 0x03) as u32) << 8);
    }
    #[inline(always)]
    pub const fn loc_busy(&self) -> bool {
        self.0 & (1 << 30) != 0
    }
}

/// SYSCTL.RESOURCE[n]
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resource(pub u32);

impl Resource {
    pub const MODE_ON: u8 = 1;
    pub const MODE_OFF: u8 = 2;

    #[inline(always)]
    pub const fn mode(&self) -> u8 {
        (self.0 & 0x03) as u8
    }
    #[inline(always)]
    pub fn set_mode(&mut self, val: u8) {
        self.0 = (self.0 & !0x03) | (val & 0x03) as u32;
    }
    #[inline(always)]
    pub const fn loc_busy(&self) -> bool {
        self.0 & (1 << 30) != 0
    }
}

/// WDG.CTRL, only the clock select bit.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WdgCtrl(pub u32);

impl WdgCtrl {
    /// false: bus clock, true: 32K reference
    #[inline(always)]
    pub const fn clksel(&self) -> bool {
        self.0 & (1 << 5) != 0
    }
    #[inline(always)]
    pub fn set_clksel(&mut self, val: bool) {
        self.0 = (self.0 & !(1 << 5)) | ((val as u32) << 5);
    }
}

/// SYSCTL registers the clock tree reads and writes.
pub trait SysctlRegs {
    fn clock(&self, node: usize) -> Clock;
    fn write_clock(&self, node: usize, val: Clock);

    fn clock_cpu(&self) -> ClockCpu;
    fn write_clock_cpu(&self, val: ClockCpu);

    fn adcclk(&self, instance: usize) -> AnaClk;
    fn write_adcclk(&self, instance: usize, val: AnaClk);

    fn dacclk(&self, instance: usize) -> AnaClk;
    fn write_dacclk(&self, instance: usize, val: AnaClk);

    fn i2sclk(&self, instance: usize) -> I2sClk;
    fn write_i2sclk(&self, instance: usize, val: I2sClk);

    fn resource(&self, resource: usize) -> Resource;
    fn write_resource(&self, resource: usize, val: Resource);

    /// Write-1-to-set alias of GROUPn[index].
    fn group_set(&self, group: usize, index: usize, mask: u32);
    /// Write-1-to-clear alias of GROUPn[index].
    fn group_clear(&self, group: usize, index: usize, mask: u32);

    /// Write-1-to-set alias of AFFILIATE[cpu].
    fn affiliate_set(&self, cpu: usize, mask: u32);
    /// Write-1-to-clear alias of AFFILIATE[cpu].
    fn affiliate_clear(&self, cpu: usize, mask: u32);
}

/// Watchdog control registers.
pub trait WdgRegs {
    fn wdg_ctrl(&self, instance: usize) -> WdgCtrl;
    fn write_wdg_ctrl(&self, instance: usize, val: WdgCtrl);
}

/// PLL control unit, queried for post-divider output frequencies.
pub trait PllRegs {
    /// Frequency of `PLLn_CLKm`, 0 Hz if that output does not exist.
    fn postdiv_frequency(&self, pll: usize, postdiv: usize) -> Hertz;
}

/// Everything the clock tree needs from the chip.
pub trait Hardware: SysctlRegs + WdgRegs + PllRegs {}

impl<T: SysctlRegs + WdgRegs + PllRegs> Hardware for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_fields_do_not_overlap() {
        let mut r = Clock(0xC000_0000);
        r.set_div(0xFF);
        r.set_mux(0x07);
        assert_eq!(r.0, 0xC000_07FF);
        assert!(r.loc_busy() && r.glb_busy());
        r.set_div(1);
        assert_eq!((r.mux(), r.div()), (7, 1));
    }

    #[test]
    fn cpu_sub_dividers() {
        let mut r = ClockCpu::default();
        r.set_mux(1);
        r.set_div(1);
        r.set_sub0_div(2);
        r.set_sub1_div(15);
        assert_eq!(r.0, 0x00F2_0101);
        assert_eq!((r.sub0_div(), r.sub1_div()), (2, 15));
    }

    #[test]
    fn resource_mode_keeps_other_bits() {
        let mut r = Resource(0x0000_FF00);
        r.set_mode(Resource::MODE_OFF);
        assert_eq!(r.0, 0x0000_FF02);
        r.set_mode(Resource::MODE_ON);
        assert_eq!(r.mode(), 1);
        assert_eq!(r.0 & !0x03, 0x0000_FF00);
    }

    #[test]
    fn wdg_clksel_bit() {
        let mut r = WdgCtrl(0x0F);
        r.set_clksel(true);
        assert_eq!(r.0, 0x2F);
        r.set_clksel(false);
        assert_eq!(r.0, 0x0F);
    }
}
