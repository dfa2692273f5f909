use crate::assemble::Program;
use crate::parser::{strip, Cmd};
use crate::symbol::Kind;
use color_print::cformat;

pub fn print_dump(path: &str, src: &str, program: &Program) {
    eprintln!(
        "{}+------[{}]{}",
        "-".repeat(24),
        path,
        "-".repeat(40usize.saturating_sub(path.len()))
    );

    let mut words = program.words.iter().peekable();
    for (idx, raw) in src.lines().enumerate() {
        let line_num = idx + 1;
        let comment = raw
            .split_once("//")
            .map(|(_, c)| cformat!("<dim>//{}</>", c))
            .unwrap_or_default();

        let body = match words.next_if(|w| w.idx == idx) {
            Some(word) => format!(
                "[{:04X}] {:016b} | {:>4}:   {} {}",
                word.pc,
                word.inst.to_bin(),
                line_num,
                word.inst.cformat(),
                comment
            ),
            None => match Cmd::parse(strip(raw)) {
                Some(Cmd::Label(name)) => {
                    let label = cformat!("<g>({})</>", name);
                    format!("{:24}| {:>4}: {} {}", "", line_num, label, comment)
                }
                _ => format!("{:24}| {:>4}: {}", "", line_num, comment),
            },
        };
        eprintln!("{}", body);
    }
    eprintln!("{}+{}", "-".repeat(24), "-".repeat(48));

    for (name, sym) in program.symbols.iter() {
        let kind = match sym.kind {
            Kind::Builtin => continue,
            Kind::Label => cformat!("<g>label</>"),
            Kind::Var => cformat!("<c>var  </>"),
        };
        eprintln!("  {} 0x{:04X} {}", kind, sym.addr, name);
    }
}
