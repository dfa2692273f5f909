pub mod assemble;
pub mod error;
pub mod parser;
pub mod symbol;
pub mod util;

pub use assemble::{assemble, Program};
pub use error::Error;
