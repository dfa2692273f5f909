pub mod builtin;
pub mod comp;
pub mod dest;
pub mod inst;
pub mod jump;

/// Largest value an address instruction can carry (15 bits).
pub const ADDR_MAX: u16 = 0x7FFF;

/// First RAM address handed out to user variables.
pub const VAR_BASE: u16 = 16;
