//! In-memory register file standing in for SYSCTL, WDG and PLLCTL.

use core::cell::Cell;

use super::regs::{AnaClk, Clock, ClockCpu, I2sClk, PllRegs, Resource, SysctlRegs, WdgCtrl, WdgRegs};
use super::{Topology, CPU_NUM, GROUP_NUM};
use crate::time::Hertz;

const GROUP_WORDS: usize = 4;

/// Power-on PLL outputs of the HPM6300 series.
const PLL_PRESET: [[u32; 3]; 3] = [
    [400_000_000, 333_333_333, 250_000_000],
    [480_000_000, 320_000_000, 0],
    [516_096_000, 451_584_000, 0],
];

fn cells(n: usize) -> Vec<Cell<u32>> {
    (0..n).map(|_| Cell::new(0)).collect()
}

fn values(cells: &[Cell<u32>]) -> impl Iterator<Item = u32> + '_ {
    cells.iter().map(Cell::get)
}

pub(crate) struct MockSoc {
    clock: Vec<Cell<u32>>,
    clock_cpu: Cell<u32>,
    adcclk: Vec<Cell<u32>>,
    dacclk: Vec<Cell<u32>>,
    i2sclk: Vec<Cell<u32>>,
    resource: Vec<Cell<u32>>,
    group: Vec<Cell<u32>>,
    affiliate: Vec<Cell<u32>>,
    wdg: Vec<Cell<u32>>,
    pll: Vec<Cell<u32>>,
    reads: Cell<usize>,
    cpu_writes: Cell<usize>,
}

impl MockSoc {
    pub(crate) fn new(topology: &Topology) -> Self {
        let pll = cells(9);
        for (i, f) in PLL_PRESET.iter().flatten().enumerate() {
            pll[i].set(*f);
        }
        Self {
            clock: cells(topology.clock_node_end as usize),
            clock_cpu: Cell::new(0),
            adcclk: cells(topology.adc_instances),
            dacclk: cells(topology.dac_instances),
            i2sclk: cells(topology.i2s_instances),
            resource: cells(topology.resource_end as usize),
            group: cells(GROUP_NUM * GROUP_WORDS),
            affiliate: cells(CPU_NUM),
            wdg: cells(topology.wdg_instances),
            pll,
            reads: Cell::new(0),
            cpu_writes: Cell::new(0),
        }
    }

    fn read(&self, cell: &Cell<u32>) -> u32 {
        self.reads.set(self.reads.get() + 1);
        cell.get()
    }

    /// Every register value, in a fixed order.
    pub(crate) fn snapshot(&self) -> Vec<u32> {
        values(&self.clock)
            .chain([self.clock_cpu.get()])
            .chain(values(&self.adcclk))
            .chain(values(&self.dacclk))
            .chain(values(&self.i2sclk))
            .chain(values(&self.resource))
            .chain(values(&self.group))
            .chain(values(&self.affiliate))
            .chain(values(&self.wdg))
            .chain(values(&self.pll))
            .collect()
    }

    /// Number of register reads through the capability traits so far.
    pub(crate) fn reads(&self) -> usize {
        self.reads.get()
    }

    pub(crate) fn cpu_writes(&self) -> usize {
        self.cpu_writes.get()
    }

    pub(crate) fn set_clock(&self, node: u8, val: Clock) {
        self.clock[node as usize].set(val.0);
    }

    pub(crate) fn set_clock_cpu(&self, val: ClockCpu) {
        self.clock_cpu.set(val.0);
    }

    pub(crate) fn set_adcclk(&self, instance: usize, val: AnaClk) {
        self.adcclk[instance].set(val.0);
    }

    pub(crate) fn set_dacclk(&self, instance: usize, val: AnaClk) {
        self.dacclk[instance].set(val.0);
    }

    pub(crate) fn set_i2sclk(&self, instance: usize, val: I2sClk) {
        self.i2sclk[instance].set(val.0);
    }

    pub(crate) fn set_wdg_ctrl(&self, instance: usize, val: WdgCtrl) {
        self.wdg[instance].set(val.0);
    }

    pub(crate) fn set_pll_frequency(&self, pll: usize, postdiv: usize, freq: Hertz) {
        self.pll[pll * 3 + postdiv].set(freq.0);
    }

    pub(crate) fn group(&self, group: usize, index: usize) -> u32 {
        self.group[group * GROUP_WORDS + index].get()
    }

    pub(crate) fn affiliate(&self, cpu: usize) -> u32 {
        self.affiliate[cpu].get()
    }
}

impl SysctlRegs for MockSoc {
    fn clock(&self, node: usize) -> Clock {
        Clock(self.read(&self.clock[node]))
    }

    fn write_clock(&self, node: usize, val: Clock) {
        self.clock[node].set(val.0);
    }

    fn clock_cpu(&self) -> ClockCpu {
        ClockCpu(self.read(&self.clock_cpu))
    }

    fn write_clock_cpu(&self, val: ClockCpu) {
        self.cpu_writes.set(self.cpu_writes.get() + 1);
        self.clock_cpu.set(val.0);
    }

    fn adcclk(&self, instance: usize) -> AnaClk {
        AnaClk(self.read(&self.adcclk[instance]))
    }

    fn write_adcclk(&self, instance: usize, val: AnaClk) {
        self.adcclk[instance].set(val.0);
    }

    fn dacclk(&self, instance: usize) -> AnaClk {
        AnaClk(self.read(&self.dacclk[instance]))
    }

    fn write_dacclk(&self, instance: usize, val: AnaClk) {
        self.dacclk[instance].set(val.0);
    }

    fn i2sclk(&self, instance: usize) -> I2sClk {
        I2sClk(self.read(&self.i2sclk[instance]))
    }

    fn write_i2sclk(&self, instance: usize, val: I2sClk) {
        self.i2sclk[instance].set(val.0);
    }

    fn resource(&self, resource: usize) -> Resource {
        Resource(self.read(&self.resource[resource]))
    }

    fn write_resource(&self, resource: usize, val: Resource) {
        self.resource[resource].set(val.0);
    }

    fn group_set(&self, group: usize, index: usize, mask: u32) {
        let cell = &self.group[group * GROUP_WORDS + index];
        cell.set(cell.get() | mask);
    }

    fn group_clear(&self, group: usize, index: usize, mask: u32) {
        let cell = &self.group[group * GROUP_WORDS + index];
        cell.set(cell.get() & !mask);
    }

    fn affiliate_set(&self, cpu: usize, mask: u32) {
        let cell = &self.affiliate[cpu];
        cell.set(cell.get() | mask);
    }

    fn affiliate_clear(&self, cpu: usize, mask: u32) {
        let cell = &self.affiliate[cpu];
        cell.set(cell.get() & !mask);
    }
}

impl WdgRegs for MockSoc {
    fn wdg_ctrl(&self, instance: usize) -> WdgCtrl {
        WdgCtrl(self.read(&self.wdg[instance]))
    }

    fn write_wdg_ctrl(&self, instance: usize, val: WdgCtrl) {
        self.wdg[instance].set(val.0);
    }
}

impl PllRegs for MockSoc {
    fn postdiv_frequency(&self, pll: usize, postdiv: usize) -> Hertz {
        match self.pll.get(pll * 3 + postdiv) {
            Some(f) if postdiv < 3 => Hertz(f.get()),
            _ => Hertz(0),
        }
    }
}
