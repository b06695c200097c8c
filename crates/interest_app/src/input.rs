use interest_core::{catalog, Msg};

use crate::app::Inbox;

/// Maps one line of user input to an inbox item. Blank lines yield nothing.
pub fn parse_line(line: &str) -> Option<Inbox> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let item = match command.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => Inbox::Quit,
        "help" | "?" => Inbox::Help,
        "fetch" => Inbox::Msg(Msg::FetchRequested),
        "clear" => Inbox::Msg(Msg::SelectionCleared),
        "toggle" | "t" if rest.is_empty() => Inbox::Notice("Usage: toggle <interest>".to_string()),
        "toggle" | "t" => match catalog::lookup(rest) {
            Some(tag) => Inbox::Msg(Msg::TagToggled(tag.to_string())),
            None => Inbox::Notice(format!("Unknown interest `{rest}`")),
        },
        _ => Inbox::Notice(format!("Unknown command `{command}`, type `help`")),
    };
    Some(item)
}
