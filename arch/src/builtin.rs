use strum::{Display, EnumIter, EnumString};

/// Symbols every program can use without declaring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum Builtin {
    SP,
    LCL,
    ARG,
    THIS,
    THAT,
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    SCREEN,
    KBD,
}

impl Builtin {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(b) => Ok(b),
            Err(_) => Err(format!("Unknown builtin symbol: {s}")),
        }
    }

    pub fn addr(self) -> u16 {
        use Builtin::*;
        match self {
            SP => 0,
            LCL => 1,
            ARG => 2,
            THIS => 3,
            THAT => 4,
            R0 => 0,
            R1 => 1,
            R2 => 2,
            R3 => 3,
            R4 => 4,
            R5 => 5,
            R6 => 6,
            R7 => 7,
            R8 => 8,
            R9 => 9,
            R10 => 10,
            R11 => 11,
            R12 => 12,
            R13 => 13,
            R14 => 14,
            R15 => 15,
            SCREEN => 0x4000,
            KBD => 0x6000,
        }
    }
}
