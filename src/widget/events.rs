//! UI events understood by the widget.

use crate::error::CommandError;
use crate::selector::ClickTarget;
use std::str::FromStr;

/// A single UI event. Handlers run one event at a time, to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A click somewhere on the page
    Click(ClickTarget),

    /// The country search box changed
    SearchInput(String),

    /// A country row was clicked (region code)
    SelectCountry(String),

    /// The phone field changed
    PhoneInput(String),

    /// The form was submitted
    Submit,
}

/// Parses the line commands used by the demo binary.
///
/// `toggle`, `list`, `outside`, `search <text>`, `select <REGION>`,
/// `type <text>`, `submit`. `search` accepts an empty argument to clear
/// the filter.
impl FromStr for WidgetEvent {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim_end(), ""),
        };

        let require = |arg: &str| -> Result<String, CommandError> {
            if arg.is_empty() {
                Err(CommandError::MissingArgument(command.to_string()))
            } else {
                Ok(arg.to_string())
            }
        };

        match command.to_ascii_lowercase().as_str() {
            "toggle" => Ok(WidgetEvent::Click(ClickTarget::Toggle)),
            "list" => Ok(WidgetEvent::Click(ClickTarget::List)),
            "outside" => Ok(WidgetEvent::Click(ClickTarget::Outside)),
            "search" => Ok(WidgetEvent::SearchInput(rest.to_string())),
            "select" => Ok(WidgetEvent::SelectCountry(require(rest)?)),
            "type" => Ok(WidgetEvent::PhoneInput(require(rest)?)),
            "submit" => Ok(WidgetEvent::Submit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click_commands() {
        assert_eq!(
            "toggle".parse::<WidgetEvent>().unwrap(),
            WidgetEvent::Click(ClickTarget::Toggle)
        );
        assert_eq!(
            " LIST ".parse::<WidgetEvent>().unwrap(),
            WidgetEvent::Click(ClickTarget::List)
        );
        assert_eq!(
            "outside".parse::<WidgetEvent>().unwrap(),
            WidgetEvent::Click(ClickTarget::Outside)
        );
    }

    #[test]
    fn test_parse_commands_with_arguments() {
        assert_eq!(
            "search United K".parse::<WidgetEvent>().unwrap(),
            WidgetEvent::SearchInput("United K".to_string())
        );
        assert_eq!(
            "search".parse::<WidgetEvent>().unwrap(),
            WidgetEvent::SearchInput(String::new())
        );
        assert_eq!(
            "select gb".parse::<WidgetEvent>().unwrap(),
            WidgetEvent::SelectCountry("gb".to_string())
        );
        assert_eq!(
            "type (201) 555-0123".parse::<WidgetEvent>().unwrap(),
            WidgetEvent::PhoneInput("(201) 555-0123".to_string())
        );
        assert_eq!("submit".parse::<WidgetEvent>().unwrap(), WidgetEvent::Submit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<WidgetEvent>(), Err(CommandError::Empty));
        assert_eq!(
            "select".parse::<WidgetEvent>(),
            Err(CommandError::MissingArgument("select".to_string()))
        );
        assert_eq!(
            "dance now".parse::<WidgetEvent>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
