use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::console::Console;
use crate::error::{JotterError, Result};
use colored::Colorize;

pub const WELCOME: &str = "Welcome to Jotter!\n\
Enter a command (new | app | ow | list | del | help | cls | exit)\n\n";

pub const PROMPT: &str = "$~ ";

pub const HELP: &str = "- 'new [note]' to create a new note.\n\
- 'app [note]' to append an existing note.\n\
- 'ow [note]' to overwrite an existing note.\n\
- 'del [note]' to delete an existing note.\n\
- 'list' to list all saved notes.\n\
- 'cls' to clear the screen.\n\
- 'exit' to exit the program.\n\n";

pub(crate) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// Every message is followed by a blank line.
pub(crate) fn print_messages<C: Console + ?Sized>(
    console: &mut C,
    messages: &[CmdMessage],
) -> Result<()> {
    for message in messages {
        console.print(&format!("{}\n\n", format_message(message)))?;
    }
    Ok(())
}

/// Listed names one per line (then a blank line), followed by messages.
pub(crate) fn print_result<C: Console + ?Sized>(console: &mut C, result: &CmdResult) -> Result<()> {
    for name in &result.listed_names {
        console.println(name)?;
    }
    if !result.listed_names.is_empty() {
        console.print("\n")?;
    }
    print_messages(console, &result.messages)
}

pub(crate) fn print_error<C: Console + ?Sized>(console: &mut C, error: &JotterError) -> Result<()> {
    print_messages(console, &[CmdMessage::error(error.to_string())])
}
