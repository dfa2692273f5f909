use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// ALU computation. Variants reading `M` have the `a` bit (bit 6 of the field) set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "-1")]
    MinusOne,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "!D")]
    NotD,
    #[strum(serialize = "!A")]
    NotA,
    #[strum(serialize = "-D")]
    NegD,
    #[strum(serialize = "-A")]
    NegA,
    #[strum(serialize = "D+1")]
    IncD,
    #[strum(serialize = "A+1")]
    IncA,
    #[strum(serialize = "D-1")]
    DecD,
    #[strum(serialize = "A-1")]
    DecA,
    #[strum(serialize = "D+A")]
    DPlusA,
    #[strum(serialize = "D-A")]
    DMinusA,
    #[strum(serialize = "A-D")]
    AMinusD,
    #[strum(serialize = "D&A")]
    DAndA,
    #[strum(serialize = "D|A")]
    DOrA,

    #[strum(serialize = "M")]
    M,
    #[strum(serialize = "!M")]
    NotM,
    #[strum(serialize = "-M")]
    NegM,
    #[strum(serialize = "M+1")]
    IncM,
    #[strum(serialize = "M-1")]
    DecM,
    #[strum(serialize = "D+M")]
    DPlusM,
    #[strum(serialize = "D-M")]
    DMinusM,
    #[strum(serialize = "M-D")]
    MMinusD,
    #[strum(serialize = "D&M")]
    DAndM,
    #[strum(serialize = "D|M")]
    DOrM,
}

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(c) => Ok(c),
            Err(_) => Err(format!("Unknown comp: {s}")),
        }
    }

    /// 7-bit field `a c1 c2 c3 c4 c5 c6`.
    pub fn bits(self) -> u16 {
        use Comp::*;
        match self {
            Zero => 0b0101010,
            One => 0b0111111,
            MinusOne => 0b0111010,
            D => 0b0001100,
            A => 0b0110000,
            NotD => 0b0001101,
            NotA => 0b0110001,
            NegD => 0b0001111,
            NegA => 0b0110011,
            IncD => 0b0011111,
            IncA => 0b0110111,
            DecD => 0b0001110,
            DecA => 0b0110010,
            DPlusA => 0b0000010,
            DMinusA => 0b0010011,
            AMinusD => 0b0000111,
            DAndA => 0b0000000,
            DOrA => 0b0010101,

            M => 0b1110000,
            NotM => 0b1110001,
            NegM => 0b1110011,
            IncM => 0b1110111,
            DecM => 0b1110010,
            DPlusM => 0b1000010,
            DMinusM => 0b1010011,
            MMinusD => 0b1000111,
            DAndM => 0b1000000,
            DOrM => 0b1010101,
        }
    }

    pub fn from_bits(bits: u16) -> Option<Self> {
        Comp::iter().find(|c| c.bits() == bits)
    }

    pub fn reads_memory(self) -> bool {
        self.bits() & 0b1000000 != 0
    }
}
