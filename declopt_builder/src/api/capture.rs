use std::str::FromStr;

use thiserror::Error;

/// A raw token which could not be converted into the value type of its option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCapture {
    /// The token does not parse as the option's numeric type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The offending token.
        token: String,
        /// The target type (ex: `i64`).
        type_name: &'static str,
    },
    /// The token is not one of the recognized boolean words.
    #[error("expected a string I can interpret as a boolean, found '{token}'.")]
    InvalidBoolean {
        /// The offending token.
        token: String,
    },
}

const TRUE_TOKENS: [&str; 3] = ["true", "yes", "1"];
const FALSE_TOKENS: [&str; 3] = ["false", "no", "0"];

/// Convert a token via [`FromStr`], reporting the target type on failure.
pub(crate) fn convert<T: FromStr>(token: &str) -> Result<T, InvalidCapture> {
    T::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Interpret a token as a boolean (case insensitive).
/// Only `true`/`yes`/`1` and `false`/`no`/`0` are accepted.
pub(crate) fn convert_boolean(token: &str) -> Result<bool, InvalidCapture> {
    if TRUE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        Ok(true)
    } else if FALSE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        Ok(false)
    } else {
        Err(InvalidCapture::InvalidBoolean {
            token: token.to_string(),
        })
    }
}
