use thiserror::Error;

use crate::api::{InvalidCapture, OptionDefinition};
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A fatal error raised while parsing.
/// Parsing stops at the first of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The value given to a recognized option could not be converted.
    #[error("Parse error: option '{option}' {source}")]
    InvalidValue {
        /// The option token, as it appeared on the command line.
        option: String,
        /// The conversion failure.
        source: InvalidCapture,
    },
    /// A value taking option was the final token.
    #[error("Parse error: option '{option}' requires a value, but none was provided.")]
    MissingValue {
        /// The option token, as it appeared on the command line.
        option: String,
    },
}

// A token which matched no registered option.
// Only ever shown as a warning; parsing skips over it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Warning: unknown argument '{0}'.")]
pub(crate) struct UnknownArgument(pub(crate) String);

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Complete,
    PrintHelp,
}

pub(crate) struct Parser<'p, 'a> {
    definitions: &'p mut [OptionDefinition<'a>],
    warn_on_unknown_argument: bool,
}

impl<'p, 'a> Parser<'p, 'a> {
    pub(crate) fn new(
        definitions: &'p mut [OptionDefinition<'a>],
        warn_on_unknown_argument: bool,
    ) -> Self {
        Self {
            definitions,
            warn_on_unknown_argument,
        }
    }

    /// Run one forward pass over `tokens`, invoking each matched option in turn.
    ///
    /// The first registered option whose name equals the token wins.
    /// A value taking option consumes the following token, so the cursor advances by 2.
    pub(crate) fn consume(
        self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<Action, ParseError> {
        let Parser {
            definitions,
            warn_on_unknown_argument,
        } = self;
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = tokens[cursor];

            let definition = match definitions.iter_mut().find(|d| d.matches(token)) {
                Some(definition) => definition,
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping unknown token '{token}'.");
                    }

                    if warn_on_unknown_argument {
                        user_interface.print_warning(UnknownArgument(token.to_string()));
                    }

                    cursor += 1;
                    continue;
                }
            };

            if definition.is_help() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token '{token}' requested help.");
                }

                return Ok(Action::PrintHelp);
            }

            let value = if definition.gobbles_next_argument() {
                cursor += 1;
                match tokens.get(cursor) {
                    Some(value) => *value,
                    None => {
                        return Err(ParseError::MissingValue {
                            option: token.to_string(),
                        });
                    }
                }
            } else {
                ""
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched '{token}' to {definition:?} with value '{value}'.");
            }

            definition
                .invoke(value)
                .map_err(|source| ParseError::InvalidValue {
                    option: token.to_string(),
                    source,
                })?;
            cursor += 1;
        }

        Ok(Action::Complete)
    }
}
