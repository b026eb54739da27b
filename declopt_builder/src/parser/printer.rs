use crate::api::OptionDefinition;
use crate::parser::interface::UserInterface;

const VALUE_PLACEHOLDER: &str = "<value>";

pub(crate) struct Printer<'p, 'a> {
    definitions: &'p [OptionDefinition<'a>],
}

impl<'p, 'a> Printer<'p, 'a> {
    pub(crate) fn new(definitions: &'p [OptionDefinition<'a>]) -> Self {
        Self { definitions }
    }

    /// One line per definition, in registration order.
    pub(crate) fn descriptions(&self) -> Vec<String> {
        self.definitions
            .iter()
            .map(|definition| {
                if !definition.can_be_invoked() {
                    definition.description().to_string()
                } else {
                    let value = if definition.gobbles_next_argument() {
                        Some(VALUE_PLACEHOLDER)
                    } else {
                        None
                    };
                    format!(
                        "{}: {}",
                        definition.names().render(value),
                        definition.description()
                    )
                }
            })
            .collect()
    }

    pub(crate) fn usage(&self) -> String {
        self.descriptions().join("\n")
    }

    pub(crate) fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print_usage(self.usage());
    }
}
