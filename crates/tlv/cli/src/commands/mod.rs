//! Subcommand handlers

mod encode;
mod parse;
mod tags;

pub use encode::*;
pub use parse::*;
pub use tags::*;
