//! `declopt` is a small declarative command line option parser for Rust.
//!
//! Register each recognized option together with the action to run when it is matched, then hand the parser the raw arguments.
//! The parser makes a single pass over them, front to back:
//! * A token equal to a registered option's short or long name runs that option's action.
//! The first registered option with that name wins.
//! * Options which take a value consume the following token as that value.
//! Integer, floating point, and boolean options convert the value before calling your action.
//! * Tokens which match nothing are skipped, with a warning on stderr (unless disabled).
//!
//! Parsing is fail fast for recognized options with bad values, and best effort for everything else:
//! * A value which cannot be converted, or a value option without a following token, stops the parse with a [`ParseError`].
//! * An unrecognized token is only ever a warning on stderr (`Warning: unknown argument '<token>'.`).
//!
//! Deliberately not supported: combined short flags (`-abc`), `--option=value` syntax, positional arguments, repeated option accumulation, and environment variable fallbacks.
//!
//! # Usage
//! ```no_run
//! use declopt::OptionParser;
//!
//! fn main() {
//!     let mut verbose = false;
//!     let mut name = String::from("world");
//!     let mut times: i64 = 1;
//!     let mut scale: f64 = 1.0;
//!     let mut shout = false;
//!
//!     let result = OptionParser::new()
//!         .separator("Greeting:")
//!         .on_arg(Some("-n"), Some("--name"), "Who to greet.", |value| name = value.to_string())
//!         .on_int(Some("-t"), Some("--times"), "How many greetings.", |value| times = value)
//!         .on_double(None, Some("--scale"), "A scale factor.", |value| scale = value)
//!         .on_boolean(None, Some("--shout"), "Whether to shout.", |value| shout = value)
//!         .separator("Other:")
//!         .on_flag(Some("-v"), Some("--verbose"), "Print more.", || verbose = true)
//!         .help(Some("-h"), Some("--help"))
//!         .parse();
//!
//!     if let Err(error) = result {
//!         eprintln!("{error}");
//!         std::process::exit(1);
//!     }
//!
//!     for _ in 0..times {
//!         println!("Hello, {name}!");
//!     }
//! }
//! ```
//!
//! ```console
//! $ greet -h
//! Greeting:
//! -n <value> or --name <value>: Who to greet.
//! -t <value> or --times <value>: How many greetings.
//! --scale <value>: A scale factor.
//! --shout <value>: Whether to shout.
//! Other:
//! -v or --verbose: Print more.
//! -h or --help: Show this help
//!
//! $ greet --times 2 --bogus
//! Warning: unknown argument '--bogus'.
//! Hello, world!
//! Hello, world!
//!
//! $ greet --times two
//! Parse error: option '--times' cannot convert 'two' to i64.
//! ```
//!
//! # Help
//! A help option prints the usage to stderr and exits the process with code `0`, via [`OptionParser::parse`] or [`OptionParser::parse_tokens`].
//! To stay in control instead, use [`OptionParser::try_parse_tokens`], which returns [`Parsed::HelpShown`].
//!
//! # Logging
//! Enable the `tracing_debug` feature to emit `tracing` debug events as tokens are matched.
pub use declopt_builder::*;
