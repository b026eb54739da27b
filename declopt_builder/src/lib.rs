//! Builder module for `declopt`.
//! See the `declopt` crate root for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::ParseError;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
