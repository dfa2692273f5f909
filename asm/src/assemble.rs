use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump, ADDR_MAX, VAR_BASE};

use crate::{
    error::Error,
    parser::{is_literal, strip, Cmd, Parser},
    symbol::{Kind, SymbolTable},
};

/// One emitted instruction and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub idx: usize,
    pub pc: u16,
    pub inst: Inst,
}

#[derive(Debug, Clone)]
pub struct Program {
    pub words: Vec<Word>,
    pub symbols: SymbolTable,
}

impl Program {
    pub fn to_bin(&self) -> Vec<u16> {
        self.words.iter().map(|w| w.inst.to_bin()).collect()
    }

    /// One `{:016b}` line per instruction.
    pub fn to_text(&self) -> String {
        self.words
            .iter()
            .map(|w| format!("{:016b}\n", w.inst.to_bin()))
            .collect()
    }
}

pub fn assemble(src: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(src);
    let mut symbols = SymbolTable::new();

    first_pass(&mut parser, &mut symbols)?;
    parser.reset();
    let words = second_pass(&mut parser, &mut symbols)?;

    Ok(Program { words, symbols })
}

// ----------------------------------------------------------------------------
// Pass 1: bind every label to the address of the instruction following it

pub fn first_pass(parser: &mut Parser, symbols: &mut SymbolTable) -> Result<(), Error> {
    let mut pc: usize = 0;
    for line in parser {
        let line = line?;
        match line.cmd {
            Cmd::Addr(_) | Cmd::Comp { .. } => pc += 1,
            Cmd::Label(name) => {
                if symbols.contains(name) {
                    return Err(Error::RedefinedLabel {
                        idx: line.idx,
                        name: name.to_string(),
                    });
                }
                let addr = match u16::try_from(pc) {
                    Ok(addr) if addr <= ADDR_MAX => addr,
                    _ => {
                        return Err(Error::AddressOutOfRange {
                            idx: line.idx,
                            text: name.to_string(),
                        })
                    }
                };
                symbols.bind(name, addr, Kind::Label);
            }
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Pass 2: allocate variables, resolve symbols and encode

pub fn second_pass(parser: &mut Parser, symbols: &mut SymbolTable) -> Result<Vec<Word>, Error> {
    let mut words = vec![];
    let mut next_var: usize = VAR_BASE as usize;

    for line in parser {
        let line = line?;
        let inst = match line.cmd {
            Cmd::Label(_) => continue,
            Cmd::Addr(token) => {
                let value = if is_literal(token) {
                    // Digits only, so the sole failure is overflow
                    token.parse::<usize>().unwrap_or(usize::MAX)
                } else if let Some(addr) = symbols.resolve(token) {
                    addr as usize
                } else {
                    let addr = next_var;
                    if addr > ADDR_MAX as usize {
                        return Err(Error::AddressOutOfRange {
                            idx: line.idx,
                            text: token.to_string(),
                        });
                    }
                    symbols.bind(token, addr as u16, Kind::Var);
                    next_var += 1;
                    addr
                };
                Inst::addr(value).ok_or_else(|| Error::AddressOutOfRange {
                    idx: line.idx,
                    text: token.to_string(),
                })?
            }
            Cmd::Comp { dest, comp, jump } => {
                let comp = Comp::parse(comp).map_err(|_| Error::InvalidComp {
                    idx: line.idx,
                    comp: comp.to_string(),
                })?;
                let jump = Jump::parse(jump).map_err(|_| Error::InvalidJump {
                    idx: line.idx,
                    jump: jump.to_string(),
                })?;
                Inst::Comp(Dest::parse(dest), comp, jump)
            }
        };
        // ROM holds 0x8000 words
        let pc = match u16::try_from(words.len()) {
            Ok(pc) if pc <= ADDR_MAX => pc,
            _ => {
                return Err(Error::AddressOutOfRange {
                    idx: line.idx,
                    text: strip(line.raw).to_string(),
                })
            }
        };
        words.push(Word {
            idx: line.idx,
            pc,
            inst,
        });
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_binds_next_pc() {
        let mut parser = Parser::new("A=A+1\n(L)\nA=A+1\n");
        let mut symbols = SymbolTable::new();
        first_pass(&mut parser, &mut symbols).unwrap();
        assert_eq!(symbols.resolve("L"), Some(1));
    }

    #[test]
    fn test_first_pass_only_labels() {
        let mut parser = Parser::new("@foo\n(L)\n@bar\n");
        let mut symbols = SymbolTable::new();
        first_pass(&mut parser, &mut symbols).unwrap();
        assert_eq!(symbols.get("L").map(|s| s.kind), Some(Kind::Label));
        assert!(!symbols.contains("foo"));
        assert!(!symbols.contains("bar"));
    }

    #[test]
    fn test_second_pass_allocates() {
        let mut parser = Parser::new("@foo\n@bar\n@foo\n");
        let mut symbols = SymbolTable::new();
        let words = second_pass(&mut parser, &mut symbols).unwrap();
        let insts: Vec<_> = words.iter().map(|w| w.inst).collect();
        assert_eq!(
            insts,
            vec![Inst::Addr(16), Inst::Addr(17), Inst::Addr(16)]
        );
        assert_eq!(symbols.get("bar").map(|s| s.kind), Some(Kind::Var));
    }

    #[test]
    fn test_rom_full() {
        let src = "D=A\n".repeat(ADDR_MAX as usize + 1);
        let words = second_pass(&mut Parser::new(&src), &mut SymbolTable::new()).unwrap();
        assert_eq!(words.last().map(|w| w.pc), Some(ADDR_MAX));

        let src = format!("{src}@1 // one past ROM\n");
        match second_pass(&mut Parser::new(&src), &mut SymbolTable::new()) {
            Err(Error::AddressOutOfRange { idx, text }) => {
                assert_eq!(idx, ADDR_MAX as usize + 1);
                assert_eq!(text, "@1");
            }
            other => panic!("unexpected: {:?}", other.map(|w| w.len())),
        }
    }

    #[test]
    fn test_words_track_lines() {
        let program = assemble("// start\n@1\n\n(X)\nD=A\n").unwrap();
        let placed: Vec<_> = program.words.iter().map(|w| (w.idx, w.pc)).collect();
        assert_eq!(placed, vec![(1, 0), (4, 1)]);
        assert_eq!(program.to_bin(), vec![1, 0b1110110000010000]);
    }
}
