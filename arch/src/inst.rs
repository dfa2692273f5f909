use crate::{comp::Comp, dest::Dest, jump::Jump, ADDR_MAX};

use color_print::cformat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Addr(u16),
    Comp(Dest, Comp, Jump),
}

impl Inst {
    /// `None` when the value does not fit the 15-bit address field.
    pub fn addr(value: usize) -> Option<Inst> {
        match u16::try_from(value) {
            Ok(v) if v <= ADDR_MAX => Some(Inst::Addr(v)),
            _ => None,
        }
    }

    // Addr: 0vvv vvvv vvvv vvvv
    // Comp: 111a cccc ccdd djjj
    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::Addr(v) => *v & ADDR_MAX,
            Inst::Comp(dest, comp, jump) => {
                0b111 << 13 | comp.bits() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin >> 15 == 0 {
            return Some(Inst::Addr(bin));
        }
        if (bin >> 13) & 0b11 != 0b11 {
            return None;
        }
        let comp = Comp::from_bits((bin >> 6) & 0x7F)?;
        let dest = Dest::from(((bin >> 3) & 0b111) as u8);
        let jump = Jump::from((bin & 0b111) as u8);
        Some(Inst::Comp(dest, comp, jump))
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::Addr(v) => cformat!("<r>@</><y>{}</>", v),
            Inst::Comp(dest, comp, jump) => {
                let dest = match dest {
                    Dest::NULL => String::new(),
                    _ => cformat!("<b>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::NULL => String::new(),
                    _ => cformat!(";<r>{}</>", jump),
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}
