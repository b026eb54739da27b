/// The short and long names of an option, each of which may be absent.
///
/// Names are matched verbatim against the command line tokens (ex: `-v` or `--verbose`).
/// No prefixes are added or stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionNames {
    short: Option<String>,
    long: Option<String>,
}

impl OptionNames {
    /// Create the names of an option.
    pub fn new(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            short: short.map(str::to_string),
            long: long.map(str::to_string),
        }
    }

    /// The short name, if any.
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long name, if any.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Whether `token` is exactly one of these names.
    pub fn matches(&self, token: &str) -> bool {
        self.short() == Some(token) || self.long() == Some(token)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }

    /// Render the names for usage text, optionally followed by a value placeholder.
    pub(crate) fn render(&self, value: Option<&str>) -> String {
        let decorate = |name: &str| match value {
            Some(v) => format!("{name} {v}"),
            None => name.to_string(),
        };

        match (self.short(), self.long()) {
            (Some(s), Some(l)) => format!("{} or {}", decorate(s), decorate(l)),
            (Some(n), None) | (None, Some(n)) => decorate(n),
            (None, None) => String::default(),
        }
    }
}

impl std::fmt::Display for OptionNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(None))
    }
}
