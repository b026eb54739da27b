mod capture;
mod core;
mod definition;

pub use self::capture::InvalidCapture;
pub use self::core::{OptionParser, Parsed};
pub use self::definition::OptionDefinition;
