use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    NULL,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(j) => Ok(j),
            Err(_) => Err(format!("Unknown jump: {s}")),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_jump {
        ($($name:ident: $text:expr => $bits:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Jump::parse($text).unwrap().bits(), $bits);
                }
            )*
        }
    }

    test_jump! {
        test_null: "" => 0b000,
        test_jgt: "JGT" => 0b001,
        test_jeq: "JEQ" => 0b010,
        test_jge: "JGE" => 0b011,
        test_jlt: "JLT" => 0b100,
        test_jne: "JNE" => 0b101,
        test_jle: "JLE" => 0b110,
        test_jmp: "JMP" => 0b111,
    }

    #[test]
    fn test_unknown() {
        assert!(Jump::parse("JXX").is_err());
        assert!(Jump::parse("jmp").is_err());
    }
}
