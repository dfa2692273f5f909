use color_print::ceprintln;
use thiserror::Error;

// Line indices are 0-based; diagnostics print them 1-based.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed line: `{text}`")]
    MalformedLine { idx: usize, text: String },

    #[error("Invalid comp: `{comp}`")]
    InvalidComp { idx: usize, comp: String },

    /// Unknown jump mnemonic. Rejected instead of encoding as no jump (`000`),
    /// so a typo like `0;JMPP` cannot turn a branch into a fall-through.
    #[error("Invalid jump: `{jump}`")]
    InvalidJump { idx: usize, jump: String },

    #[error("Address out of range: `{text}` (max 0x7FFF)")]
    AddressOutOfRange { idx: usize, text: String },

    #[error("Re-defined label: `{name}`")]
    RedefinedLabel { idx: usize, name: String },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read input")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    Serialize(#[source] serde_yaml::Error),
}

impl Error {
    pub fn line_idx(&self) -> Option<usize> {
        match self {
            Error::MalformedLine { idx, .. }
            | Error::InvalidComp { idx, .. }
            | Error::InvalidJump { idx, .. }
            | Error::AddressOutOfRange { idx, .. }
            | Error::RedefinedLabel { idx, .. } => Some(*idx),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, src: &str) {
        ceprintln!("<red,bold>error</>: {}", self);
        if let Some(cause) = std::error::Error::source(self) {
            ceprintln!("  <blue>caused by</>: {}", cause);
        }

        let Some(line_idx) = self.line_idx() else {
            return;
        };
        let line_num = line_idx + 1;
        let line_content = src.lines().nth(line_idx).unwrap_or("");

        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        ceprintln!("      <blue>|</>");
    }
}
