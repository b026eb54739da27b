use crate::parser::UnknownArgument;

/// Where the parser sends its diagnostics.
pub(crate) trait UserInterface {
    fn print_usage(&self, usage: String);
    fn print_warning(&self, warning: UnknownArgument);
}

// Everything goes to stderr, so piped stdout stays clean.
#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_usage(&self, usage: String) {
        eprintln!("{usage}");
    }

    fn print_warning(&self, warning: UnknownArgument) {
        eprintln!("{warning}");
    }
}
