use crate::error::Error;
use std::{iter::Enumerate, str::Lines};

// ----------------------------------------------------------------------------
// Command

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd<'a> {
    Addr(&'a str),
    Comp {
        dest: &'a str,
        comp: &'a str,
        jump: &'a str,
    },
    Label(&'a str),
}

impl<'a> Cmd<'a> {
    /// `code` must already be stripped of its comment and surrounding whitespace.
    /// Returns `None` when the text is none of `@X`, `dest=comp;jump` or `(X)` with a non-empty `X`.
    pub fn parse(code: &'a str) -> Option<Cmd<'a>> {
        // @value
        if let Some(operand) = code.strip_prefix('@') {
            if operand.is_empty() {
                return None;
            }
            return Some(Cmd::Addr(operand));
        }

        // dest=comp;jump
        if code.contains('=') || code.contains(';') {
            let (dest, rest) = code.split_once('=').unwrap_or(("", code));
            let (comp, jump) = rest.split_once(';').unwrap_or((rest, ""));
            return Some(Cmd::Comp {
                dest: dest.trim(),
                comp: comp.trim(),
                jump: jump.trim(),
            });
        }

        // (label)
        if let Some(name) = code.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            if !name.is_empty() {
                return Some(Cmd::Label(name));
            }
        }

        None
    }
}

/// Decimal literal operand of `@`. Any other operand names a symbol.
pub fn is_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Drop the `//` comment and surrounding whitespace.
pub fn strip(raw: &str) -> &str {
    match raw.split_once("//") {
        Some((code, _)) => code.trim(),
        None => raw.trim(),
    }
}

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub idx: usize,
    pub raw: &'a str,
    pub cmd: Cmd<'a>,
}

// ----------------------------------------------------------------------------
// Parser

/// Yields one `Line` per non-blank source line. Blank and comment-only lines are skipped.
pub struct Parser<'a> {
    src: &'a str,
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Parser {
            src,
            lines: src.lines().enumerate(),
        }
    }

    /// Rewind to the first line.
    pub fn reset(&mut self) {
        self.lines = self.src.lines().enumerate();
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Line<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.lines.by_ref() {
            let code = strip(raw);
            if code.is_empty() {
                continue;
            }
            return Some(match Cmd::parse(code) {
                Some(cmd) => Ok(Line { idx, raw, cmd }),
                None => Err(Error::MalformedLine {
                    idx,
                    text: code.to_string(),
                }),
            });
        }
        None
    }
}
