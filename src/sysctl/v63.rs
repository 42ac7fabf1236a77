//! HPM6300 series clock topology and clock names.

use static_assertions::const_assert;

use super::name::{ClockGroup, ClockName, RESOURCE_NONE, RESOURCE_SHARED_PTPC};
use super::Topology;

/// Common clock nodes, index of SYSCTL.CLOCK[n].
pub mod nodes {
    pub const CPU0: u8 = 0;
    pub const MCT0: u8 = 1;
    pub const FEMC: u8 = 2;
    pub const XPI0: u8 = 3;
    pub const XPI1: u8 = 4;
    pub const TMR0: u8 = 5;
    pub const TMR1: u8 = 6;
    pub const TMR2: u8 = 7;
    pub const TMR3: u8 = 8;
    pub const URT0: u8 = 9;
    pub const URT1: u8 = 10;
    pub const URT2: u8 = 11;
    pub const URT3: u8 = 12;
    pub const URT4: u8 = 13;
    pub const URT5: u8 = 14;
    pub const URT6: u8 = 15;
    pub const URT7: u8 = 16;
    pub const I2C0: u8 = 17;
    pub const I2C1: u8 = 18;
    pub const I2C2: u8 = 19;
    pub const I2C3: u8 = 20;
    pub const SPI0: u8 = 21;
    pub const SPI1: u8 = 22;
    pub const SPI2: u8 = 23;
    pub const SPI3: u8 = 24;
    pub const CAN0: u8 = 25;
    pub const CAN1: u8 = 26;
    pub const PTPC: u8 = 27;
    pub const ANA0: u8 = 28;
    pub const ANA1: u8 = 29;
    pub const ANA2: u8 = 30;
    pub const ANA3: u8 = 31;
    pub const ANA4: u8 = 32;
    pub const AUD0: u8 = 33;
    pub const AUD1: u8 = 34;
    pub const ETH0: u8 = 35;
    pub const PTP0: u8 = 36;
    pub const REF0: u8 = 37;
    pub const REF1: u8 = 38;
    pub const NTMR0: u8 = 39;
    pub const SDXC0: u8 = 40;

    pub const END: u8 = 41;

    /// Not a CLOCK[n] slot, the AHB bus derived from CLOCK_CPU[0].
    pub const AHB: u8 = 0xFD;
}

/// SYSCTL.RESOURCE[n] slots. Slots from 256 on can be linked to groups.
pub mod resources {
    pub const CPU0_CORE: u16 = 0;
    pub const AHB_BUS: u16 = 1;
    pub const AXI_BUS: u16 = 2;

    pub const LINKABLE_START: u16 = 256;

    pub const CPU0: u16 = 256;
    pub const CPX0: u16 = 257;
    pub const MCT0: u16 = 258;
    pub const TMR0: u16 = 259;
    pub const TMR1: u16 = 260;
    pub const TMR2: u16 = 261;
    pub const TMR3: u16 = 262;
    pub const I2C0: u16 = 263;
    pub const I2C1: u16 = 264;
    pub const I2C2: u16 = 265;
    pub const I2C3: u16 = 266;
    pub const SPI0: u16 = 267;
    pub const SPI1: u16 = 268;
    pub const SPI2: u16 = 269;
    pub const SPI3: u16 = 270;
    pub const URT0: u16 = 271;
    pub const URT1: u16 = 272;
    pub const URT2: u16 = 273;
    pub const URT3: u16 = 274;
    pub const URT4: u16 = 275;
    pub const URT5: u16 = 276;
    pub const URT6: u16 = 277;
    pub const URT7: u16 = 278;
    pub const WDG0: u16 = 279;
    pub const WDG1: u16 = 280;
    pub const MBX0: u16 = 281;
    pub const TSNS: u16 = 282;
    pub const CRC0: u16 = 283;
    pub const ADC0: u16 = 284;
    pub const ADC1: u16 = 285;
    pub const ADC2: u16 = 286;
    pub const DAC0: u16 = 287;
    pub const DAC1: u16 = 288;
    pub const ACMP: u16 = 289;
    pub const I2S0: u16 = 290;
    pub const I2S1: u16 = 291;
    pub const PDM: u16 = 292;
    pub const DAO: u16 = 293;
    pub const MSYN: u16 = 294;
    pub const MOT0: u16 = 295;
    pub const MOT1: u16 = 296;
    pub const RNG: u16 = 297;
    pub const SDP: u16 = 298;
    pub const KMAN: u16 = 299;
    pub const GPIO: u16 = 300;
    pub const HDMA: u16 = 301;
    pub const XPI0: u16 = 302;
    pub const XPI1: u16 = 303;
    pub const USB0: u16 = 304;
    pub const REF0: u16 = 305;
    pub const REF1: u16 = 306;
    pub const FEMC: u16 = 307;
    pub const PTPC: u16 = 308;
    pub const ETH0: u16 = 309;
    pub const SDXC0: u16 = 310;
    pub const CAN0: u16 = 311;
    pub const CAN1: u16 = 312;
    pub const NTMR0: u16 = 313;

    pub const END: u16 = 314;
}

pub const ADC_INSTANCE_NUM: usize = 3;
pub const DAC_INSTANCE_NUM: usize = 2;
pub const I2S_INSTANCE_NUM: usize = 2;
pub const WDG_INSTANCE_NUM: usize = 2;

const_assert!(nodes::ANA0 as usize + ADC_INSTANCE_NUM <= nodes::ANA3 as usize);
const_assert!(nodes::ANA3 as usize + DAC_INSTANCE_NUM <= nodes::END as usize);
const_assert!(nodes::END < nodes::AHB);
const_assert!(resources::END <= RESOURCE_SHARED_PTPC);

static I2S_CLK_MUX: [u8; 2] = [nodes::AUD0, nodes::AUD1];

pub static TOPOLOGY: Topology = Topology {
    clock_node_end: nodes::END,
    cpu0_node: nodes::CPU0,
    ahb_node: nodes::AHB,
    adc_clk_mux: [nodes::ANA0, nodes::AHB],
    dac_clk_mux: [nodes::ANA3, nodes::AHB],
    i2s_clk_mux: &I2S_CLK_MUX,
    adc_instances: ADC_INSTANCE_NUM,
    dac_instances: DAC_INSTANCE_NUM,
    i2s_instances: I2S_INSTANCE_NUM,
    wdg_instances: WDG_INSTANCE_NUM,
    resource_end: resources::END,
    resource_linkable_start: resources::LINKABLE_START,
    resource_ptpc: resources::PTPC,
};

const fn common(node: u8, resource: u16) -> ClockName {
    ClockName::new(ClockGroup::Common, node, resource)
}

// Core and buses
pub const CPU0: ClockName = ClockName::new(ClockGroup::Cpu0, nodes::CPU0, resources::CPU0);
pub const AHB: ClockName = ClockName::new(ClockGroup::Ahb, 0, resources::AHB_BUS);
pub const AXI: ClockName = ClockName::new(ClockGroup::Axi, 0, resources::AXI_BUS);

pub const MCHTMR0: ClockName = common(nodes::MCT0, resources::MCT0);
pub const FEMC: ClockName = common(nodes::FEMC, resources::FEMC);
pub const XPI0: ClockName = common(nodes::XPI0, resources::XPI0);
pub const XPI1: ClockName = common(nodes::XPI1, resources::XPI1);

pub const GPTMR0: ClockName = common(nodes::TMR0, resources::TMR0);
pub const GPTMR1: ClockName = common(nodes::TMR1, resources::TMR1);
pub const GPTMR2: ClockName = common(nodes::TMR2, resources::TMR2);
pub const GPTMR3: ClockName = common(nodes::TMR3, resources::TMR3);

pub const UART0: ClockName = common(nodes::URT0, resources::URT0);
pub const UART1: ClockName = common(nodes::URT1, resources::URT1);
pub const UART2: ClockName = common(nodes::URT2, resources::URT2);
pub const UART3: ClockName = common(nodes::URT3, resources::URT3);
pub const UART4: ClockName = common(nodes::URT4, resources::URT4);
pub const UART5: ClockName = common(nodes::URT5, resources::URT5);
pub const UART6: ClockName = common(nodes::URT6, resources::URT6);
pub const UART7: ClockName = common(nodes::URT7, resources::URT7);

pub const I2C0: ClockName = common(nodes::I2C0, resources::I2C0);
pub const I2C1: ClockName = common(nodes::I2C1, resources::I2C1);
pub const I2C2: ClockName = common(nodes::I2C2, resources::I2C2);
pub const I2C3: ClockName = common(nodes::I2C3, resources::I2C3);

pub const SPI0: ClockName = common(nodes::SPI0, resources::SPI0);
pub const SPI1: ClockName = common(nodes::SPI1, resources::SPI1);
pub const SPI2: ClockName = common(nodes::SPI2, resources::SPI2);
pub const SPI3: ClockName = common(nodes::SPI3, resources::SPI3);

pub const CAN0: ClockName = common(nodes::CAN0, resources::CAN0);
pub const CAN1: ClockName = common(nodes::CAN1, resources::CAN1);

pub const PTPC: ClockName = common(nodes::PTPC, RESOURCE_SHARED_PTPC);
pub const ETH0: ClockName = common(nodes::ETH0, resources::ETH0);
pub const PTP0: ClockName = common(nodes::PTP0, RESOURCE_SHARED_PTPC);
pub const REF0: ClockName = common(nodes::REF0, resources::REF0);
pub const REF1: ClockName = common(nodes::REF1, resources::REF1);
pub const NTMR0: ClockName = common(nodes::NTMR0, resources::NTMR0);
pub const SDXC0: ClockName = common(nodes::SDXC0, resources::SDXC0);

pub const ANA0: ClockName = common(nodes::ANA0, RESOURCE_NONE);
pub const ANA3: ClockName = common(nodes::ANA3, RESOURCE_NONE);
pub const AUD0: ClockName = common(nodes::AUD0, RESOURCE_NONE);
pub const AUD1: ClockName = common(nodes::AUD1, RESOURCE_NONE);

pub const ADC0: ClockName = ClockName::new(ClockGroup::Adc, 0, resources::ADC0);
pub const ADC1: ClockName = ClockName::new(ClockGroup::Adc, 1, resources::ADC1);
pub const ADC2: ClockName = ClockName::new(ClockGroup::Adc, 2, resources::ADC2);

pub const DAC0: ClockName = ClockName::new(ClockGroup::Dac, 0, resources::DAC0);
pub const DAC1: ClockName = ClockName::new(ClockGroup::Dac, 1, resources::DAC1);

pub const I2S0: ClockName = ClockName::new(ClockGroup::I2s, 0, resources::I2S0);
pub const I2S1: ClockName = ClockName::new(ClockGroup::I2s, 1, resources::I2S1);

pub const WDG0: ClockName = ClockName::new(ClockGroup::Wdg, 0, resources::WDG0);
pub const WDG1: ClockName = ClockName::new(ClockGroup::Wdg, 1, resources::WDG1);

// AHB peripherals, gated but clocked by the bus
pub const GPIO: ClockName = ClockName::new(ClockGroup::Ahb, 0, resources::GPIO);
pub const HDMA: ClockName = ClockName::new(ClockGroup::Ahb, 0, resources::HDMA);
pub const MBX0: ClockName = ClockName::new(ClockGroup::Ahb, 0, resources::MBX0);
pub const CRC0: ClockName = ClockName::new(ClockGroup::Ahb, 0, resources::CRC0);
pub const USB0: ClockName = ClockName::new(ClockGroup::Ahb, 0, resources::USB0);
pub const RNG: ClockName = ClockName::new(ClockGroup::Ahb, 0, resources::RNG);

// Power domain peripherals run from the oscillator
pub const PMIC: ClockName = ClockName::new(ClockGroup::Pmic, 0, RESOURCE_NONE);
pub const PUART: ClockName = ClockName::new(ClockGroup::Pmic, 1, RESOURCE_NONE);
pub const PTMR: ClockName = ClockName::new(ClockGroup::Pmic, 2, RESOURCE_NONE);
pub const PWDG: ClockName = ClockName::new(ClockGroup::Pmic, 3, RESOURCE_NONE);
