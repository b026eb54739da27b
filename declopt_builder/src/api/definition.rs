use crate::api::capture::{convert, convert_boolean, InvalidCapture};
use crate::model::OptionNames;

pub(crate) const HELP_DESCRIPTION: &str = "Show this help";

// Each variant converts the raw token before handing it to the caller's typed action.
enum Action<'a> {
    Separator,
    Text(Box<dyn FnMut(&str) + 'a>),
    Int(Box<dyn FnMut(i64) + 'a>),
    Double(Box<dyn FnMut(f64) + 'a>),
    Boolean(Box<dyn FnMut(bool) + 'a>),
    Flag(Box<dyn FnMut() + 'a>),
    Help,
}

/// One recognized option: its names, its usage description, and the action to run when it is matched.
///
/// Every variant is invoked through the same `&str` entry point, regardless of the value type its action expects.
/// Typed variants convert the raw token first, and fail with [`InvalidCapture`] when that conversion does.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::{OptionDefinition, OptionParser};
///
/// let mut total: i64 = 0;
/// OptionParser::new()
///     .add(OptionDefinition::int_arg(Some("-n"), Some("--number"), "A number to add.", |n| total += n))
///     .try_parse_tokens(&["-n", "2", "--number", "3"])
///     .unwrap();
///
/// assert_eq!(total, 5);
/// ```
pub struct OptionDefinition<'a> {
    names: OptionNames,
    description: String,
    action: Action<'a>,
}

impl<'a> OptionDefinition<'a> {
    fn invokable(
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: Action<'a>,
    ) -> Self {
        Self {
            names: OptionNames::new(short, long),
            description: description.into(),
            action,
        }
    }

    /// A cosmetic line in the usage text.
    /// Separators are never matched during parsing.
    pub fn separator(description: impl Into<String>) -> Self {
        Self {
            names: OptionNames::default(),
            description: description.into(),
            action: Action::Separator,
        }
    }

    /// An option taking the following token verbatim.
    pub fn arg(
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(&str) + 'a,
    ) -> Self {
        Self::invokable(short, long, description, Action::Text(Box::new(action)))
    }

    /// An option taking the following token as a base-10 signed integer.
    pub fn int_arg(
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(i64) + 'a,
    ) -> Self {
        Self::invokable(short, long, description, Action::Int(Box::new(action)))
    }

    /// An option taking the following token as a floating point number.
    pub fn double_arg(
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(f64) + 'a,
    ) -> Self {
        Self::invokable(short, long, description, Action::Double(Box::new(action)))
    }

    /// An option taking the following token as a boolean.
    ///
    /// Accepts `true`, `yes`, `1` and `false`, `no`, `0` (case insensitive).
    pub fn boolean_arg(
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut(bool) + 'a,
    ) -> Self {
        Self::invokable(short, long, description, Action::Boolean(Box::new(action)))
    }

    /// An option which takes no value.
    pub fn flag(
        short: Option<&str>,
        long: Option<&str>,
        description: impl Into<String>,
        action: impl FnMut() + 'a,
    ) -> Self {
        Self::invokable(short, long, description, Action::Flag(Box::new(action)))
    }

    /// A flag which shows the usage of its parser.
    ///
    /// Matching this option stops the parse; see [`crate::OptionParser::parse_tokens`].
    pub fn help(short: Option<&str>, long: Option<&str>) -> Self {
        Self::invokable(short, long, HELP_DESCRIPTION, Action::Help)
    }

    /// The names this option matches.
    pub fn names(&self) -> &OptionNames {
        &self.names
    }

    /// The usage description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this option is eligible to be matched (false only for separators).
    pub fn can_be_invoked(&self) -> bool {
        !matches!(self.action, Action::Separator)
    }

    /// Whether matching this option consumes the following token as its value.
    pub fn gobbles_next_argument(&self) -> bool {
        matches!(
            self.action,
            Action::Text(_) | Action::Int(_) | Action::Double(_) | Action::Boolean(_)
        )
    }

    pub(crate) fn is_help(&self) -> bool {
        matches!(self.action, Action::Help)
    }

    /// Whether `token` selects this option.
    pub(crate) fn matches(&self, token: &str) -> bool {
        self.can_be_invoked() && self.names.matches(token)
    }

    /// Run the action with the raw value token.
    /// Options which take no value ignore `value`.
    pub(crate) fn invoke(&mut self, value: &str) -> Result<(), InvalidCapture> {
        match &mut self.action {
            Action::Separator | Action::Help => {}
            Action::Text(action) => action(value),
            Action::Int(action) => action(convert::<i64>(value)?),
            Action::Double(action) => action(convert::<f64>(value)?),
            Action::Boolean(action) => action(convert_boolean(value)?),
            Action::Flag(action) => action(),
        }

        Ok(())
    }
}

impl<'a> std::fmt::Debug for OptionDefinition<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match &self.action {
            Action::Separator => "Separator",
            Action::Text(_) => "Arg",
            Action::Int(_) => "IntArg",
            Action::Double(_) => "DoubleArg",
            Action::Boolean(_) => "BooleanArg",
            Action::Flag(_) => "Flag",
            Action::Help => "Help",
        };

        if self.names.is_empty() {
            write!(f, "{class}[{d}]", d = self.description)
        } else {
            write!(f, "{class}[{n}, {d}]", n = self.names, d = self.description)
        }
    }
}
