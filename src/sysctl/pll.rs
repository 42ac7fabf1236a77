//! PLLCTLv2 output frequency.
//!
//! $$F_{vco} = F_{ref} \times (MFI + MFN \div MFD)$$
//!
//! Each PLL feeds up to three post-dividers, `POSTDIV = 1 + DIV / 5`.

use crate::time::Hertz;

/// Reference clock of all PLLs.
pub const PLL_REF_FREQ: Hertz = Hertz(24_000_000);

/// Reset value of MFD.
pub const PLL_DEFAULT_MFD: u32 = 240_000_000;

/// VCO frequency, 0 Hz when MFD reads 0.
pub fn vco_frequency(fref: Hertz, mfi: u32, mfn: u32, mfd: u32) -> u64 {
    if mfd == 0 {
        return 0;
    }
    let fref = fref.0 as u64;
    fref * mfi as u64 + fref * mfn as u64 / mfd as u64
}

/// Frequency of one post-divider output.
pub fn postdiv_frequency(fref: Hertz, mfi: u32, mfn: u32, mfd: u32, div: u8) -> Hertz {
    let fvco = vco_frequency(fref, mfi, mfn, mfd);
    let fout = fvco * 5 / (div as u64 + 5);
    Hertz(fout.min(u32::MAX as u64) as u32)
}
