use std::env;
use std::ffi::OsString;

use crate::api::OptionDefinition;
use crate::parser::{Action, ConsoleInterface, ParseError, Parser, Printer, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// What a completed parse ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// Every token was scanned.
    Complete,
    /// A help option was matched: the usage was shown and the remaining tokens were not scanned.
    HelpShown,
}

/// The command line option parser.
///
/// Options are registered in order, and that order is significant twice over:
/// * it is the order of the lines in the usage text,
/// * and when several options share a name, the first registered one wins.
///
/// Duplicate names are not rejected.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::OptionParser;
///
/// let mut verbose = false;
/// let mut file: Option<String> = None;
/// let mut retries: i64 = 3;
/// OptionParser::new()
///     .separator("Options:")
///     .on_flag(Some("-v"), Some("--verbose"), "Print more.", || verbose = true)
///     .on_arg(Some("-f"), Some("--file"), "The input file.", |value| {
///         file.replace(value.to_string());
///     })
///     .on_int(None, Some("--retries"), "How many times to retry.", |value| retries = value)
///     .help(Some("-h"), Some("--help"))
///     .try_parse_tokens(&["-v", "--file", "x.txt", "--retries", "5"])
///     .unwrap();
///
/// assert!(verbose);
/// assert_eq!(file, Some("x.txt".to_string()));
/// assert_eq!(retries, 5);
/// ```
pub struct OptionParser<'a> {
    definitions: Vec<OptionDefinition<'a>>,
    warn_on_unknown_argument: bool,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> Default for OptionParser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for OptionParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionParser")
            .field("definitions", &self.definitions)
            .field("warn_on_unknown_argument", &self.warn_on_unknown_argument)
            .finish()
    }
}

impl<'a> OptionParser<'a> {
    /// Create an option parser which warns on unknown arguments.
    pub fn new() -> Self {
        Self::with_interface(Box::new(ConsoleInterface::default()))
    }

    fn with_interface(user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            definitions: Vec::default(),
            warn_on_unknown_argument: true,
            user_interface,
        }
    }

    /// Configure whether tokens which match no option produce a warning on stderr.
    /// Either way, such tokens are skipped.
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::{OptionParser, Parsed};
    ///
    /// let parsed = OptionParser::new()
    ///     .warn_on_unknown_argument(false)
    ///     .try_parse_tokens(&["--not-registered"])
    ///     .unwrap();
    ///
    /// assert_eq!(parsed, Parsed::Complete);
    /// ```
    pub fn warn_on_unknown_argument(mut self, warn: bool) -> Self {
        self.warn_on_unknown_argument = warn;
        self
    }

    /// Add an option definition.
    /// No validation is applied; a name registered twice is shadowed by its first registration.
    pub fn add(mut self, definition: OptionDefinition<'a>) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Add an option which takes no value.
    pub fn on_flag(
        self,
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut() + 'a,
    ) -> Self {
        self.add(OptionDefinition::flag(short, long, description, action))
    }

    /// Add an option which takes the following token verbatim.
    pub fn on_arg(
        self,
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(&str) + 'a,
    ) -> Self {
        self.add(OptionDefinition::arg(short, long, description, action))
    }

    /// Add an option which takes the following token as an integer.
    pub fn on_int(
        self,
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(i64) + 'a,
    ) -> Self {
        self.add(OptionDefinition::int_arg(short, long, description, action))
    }

    /// Add an option which takes the following token as a floating point number.
    pub fn on_double(
        self,
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(f64) + 'a,
    ) -> Self {
        self.add(OptionDefinition::double_arg(short, long, description, action))
    }

    /// Add an option which takes the following token as a boolean.
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::OptionParser;
    ///
    /// let mut colour = true;
    /// OptionParser::new()
    ///     .on_boolean(None, Some("--colour"), "Use colour.", |value| colour = value)
    ///     .try_parse_tokens(&["--colour", "No"])
    ///     .unwrap();
    ///
    /// assert!(!colour);
    /// ```
    pub fn on_boolean(
        self,
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(bool) + 'a,
    ) -> Self {
        self.add(OptionDefinition::boolean_arg(short, long, description, action))
    }

    /// Add a line of text to the usage, which is never matched.
    pub fn separator(self, description: impl Into<String>) -> Self {
        self.add(OptionDefinition::separator(description))
    }

    /// Add a help option, which shows this parser's usage.
    pub fn help(self, short: Option<&str>, long: Option<&str>) -> Self {
        self.add(OptionDefinition::help(short, long))
    }

    /// The usage line of each option, in registration order.
    pub fn descriptions(&self) -> Vec<String> {
        Printer::new(&self.definitions).descriptions()
    }

    /// The usage text.
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::OptionParser;
    ///
    /// let parser = OptionParser::new()
    ///     .separator("Examples:")
    ///     .on_flag(Some("-q"), Some("--quiet"), "Print less.", || {})
    ///     .on_arg(Some("-o"), Some("--output"), "Where to write.", |_| {});
    ///
    /// assert_eq!(
    ///     parser.usage(),
    ///     "Examples:\n-q or --quiet: Print less.\n-o <value> or --output <value>: Where to write."
    /// );
    /// ```
    pub fn usage(&self) -> String {
        Printer::new(&self.definitions).usage()
    }

    /// Write the usage text to stderr.
    pub fn show_usage(&self) {
        Printer::new(&self.definitions).print_usage(&*self.user_interface);
    }

    /// Run the option parser against the input tokens, without exiting on help.
    ///
    /// Tokens are scanned once, front to back.
    /// Each token matching an option runs that option's action; value taking options consume the following token as their value.
    /// Tokens matching no option are skipped, with a warning on stderr unless disabled via [`OptionParser::warn_on_unknown_argument`].
    ///
    /// If a help option is matched, the usage is shown on stderr and [`Parsed::HelpShown`] is returned right away.
    ///
    /// Parsing stops at the first [`ParseError`]: a value which cannot be converted, or a missing value after the final token.
    /// Actions matched before that point have already run.
    pub fn try_parse_tokens(mut self, tokens: &[&str]) -> Result<Parsed, ParseError> {
        let action = Parser::new(&mut self.definitions, self.warn_on_unknown_argument)
            .consume(tokens, &*self.user_interface)?;

        match action {
            Action::Complete => Ok(Parsed::Complete),
            Action::PrintHelp => {
                self.show_usage();
                Ok(Parsed::HelpShown)
            }
        }
    }

    /// Run the option parser against the input tokens.
    ///
    /// Behaves as [`OptionParser::try_parse_tokens`], except that matching a help option exits the process with code `0` (via [`std::process::exit`]).
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::{OptionParser, ParseError};
    ///
    /// let result = OptionParser::new()
    ///     .on_int(Some("-n"), None, "A number.", |_| {})
    ///     .parse_tokens(&["-n"]);
    ///
    /// assert_eq!(result, Err(ParseError::MissingValue { option: "-n".to_string() }));
    /// ```
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), ParseError> {
        match self.try_parse_tokens(tokens)? {
            Parsed::Complete => Ok(()),
            Parsed::HelpShown => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Exiting after showing help.");
                }

                std::process::exit(0);
            }
        }
    }

    /// Run the option parser against the Cli [`env::args_os`] (without the program name).
    ///
    /// Arguments which are not valid unicode are converted lossily (invalid sequences become `U+FFFD`), rather than panicking.
    ///
    /// See [`OptionParser::parse_tokens`].
    pub fn parse(self) -> Result<(), ParseError> {
        let command_input = command_input(env::args_os().skip(1));
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }
}

fn command_input(arguments: impl Iterator<Item = OsString>) -> Vec<String> {
    arguments
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}
