//! Resource gating, group membership and CPU affiliation.
//!
//! None of these report errors: a name without a usable resource slot, a group
//! or a CPU the chip does not have, all leave the hardware untouched.

use super::regs::Resource;
use super::{ClockName, ClockTree, Hardware, CPU_NUM, GROUP_NUM, RESOURCE_SHARED_PTPC};

impl<H: Hardware> ClockTree<H> {
    fn switch_ip_clock(&self, name: ClockName, on: bool) {
        let resource = name.resource();
        if resource >= self.topology.resource_end {
            return;
        }
        let resource = resource as usize;
        let mut r = self.regs.resource(resource);
        r.set_mode(if on { Resource::MODE_ON } else { Resource::MODE_OFF });
        self.regs.write_resource(resource, r);
        while self.regs.resource(resource).loc_busy() {}
    }

    /// Turn on the clock of a peripheral.
    pub fn enable(&self, name: ClockName) {
        self.switch_ip_clock(name, true);
    }

    /// Turn off the clock of a peripheral.
    pub fn disable(&self, name: ClockName) {
        self.switch_ip_clock(name, false);
    }

    /// Resource slot to link for `name`.
    fn linkable_resource(&self, name: ClockName) -> Option<u16> {
        let topo = self.topology;
        let resource = match name.resource() {
            RESOURCE_SHARED_PTPC => topo.resource_ptpc,
            r if r < topo.resource_end => r,
            _ => return None,
        };
        (resource >= topo.resource_linkable_start).then_some(resource)
    }

    fn link_to_group(&self, name: ClockName, group: usize, link: bool) {
        let Some(resource) = self.linkable_resource(name) else {
            return;
        };
        if group >= GROUP_NUM {
            return;
        }

        let offset = (resource - self.topology.resource_linkable_start) as usize;
        let index = offset / 32;
        let mask = 1u32 << (offset % 32);
        if link {
            self.regs.group_set(group, index, mask);
        } else {
            self.regs.group_clear(group, index, mask);
        }
        while self.regs.resource(resource as usize).loc_busy() {}

        trace!("group{} {} resource {}", group, if link { "+" } else { "-" }, resource);
    }

    /// Make the peripheral's resource a member of `group`.
    pub fn add_to_group(&self, name: ClockName, group: usize) {
        self.link_to_group(name, group, true);
    }

    pub fn remove_from_group(&self, name: ClockName, group: usize) {
        self.link_to_group(name, group, false);
    }

    /// Route `group`'s clocks to `cpu`.
    pub fn connect_group_to_cpu(&self, group: usize, cpu: usize) {
        if cpu < CPU_NUM && group < 32 {
            self.regs.affiliate_set(cpu, 1u32 << group);
        }
    }

    pub fn disconnect_group_from_cpu(&self, group: usize, cpu: usize) {
        if cpu < CPU_NUM && group < 32 {
            self.regs.affiliate_clear(cpu, 1u32 << group);
        }
    }
}
