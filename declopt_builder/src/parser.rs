mod base;
mod interface;
mod printer;

pub use base::ParseError;
pub(crate) use base::{Action, Parser, UnknownArgument};
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub(crate) use printer::Printer;

#[cfg(test)]
pub(crate) use interface::util;
