use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, Display, EnumIter,
)]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "")]
    NULL,
    M,
    D,
    MD,
    A,
    AM,
    AD,
    AMD,
}

impl Dest {
    /// Registers are picked by presence, so `MD`, `DM` and `MMD` all mean the same.
    pub fn parse(s: &str) -> Self {
        let a = s.contains('A') as u8;
        let d = s.contains('D') as u8;
        let m = s.contains('M') as u8;
        Dest::from(a << 2 | d << 1 | m)
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    macro_rules! test_dest {
        ($($name:ident: $text:expr => $bits:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Dest::parse($text).bits(), $bits);
                }
            )*
        }
    }

    test_dest! {
        test_null: "" => 0b000,
        test_m: "M" => 0b001,
        test_d: "D" => 0b010,
        test_md: "MD" => 0b011,
        test_a: "A" => 0b100,
        test_am: "AM" => 0b101,
        test_ad: "AD" => 0b110,
        test_amd: "AMD" => 0b111,
        test_dm: "DM" => 0b011,
        test_unknown: "X" => 0b000,
    }

    #[test]
    fn test_order() {
        for (idx, dest) in Dest::iter().enumerate() {
            assert_eq!(dest.bits(), idx as u16);
            assert_eq!(Dest::parse(&dest.to_string()), dest);
        }
    }
}
