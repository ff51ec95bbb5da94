//! Interactive "choose one of N" selection protocol.

use std::process;

use crate::console::{ClearUnit, Console};
use crate::error::Result;
use crate::style::{Style, StyledText};

/// Prompts the user to pick one item from `items` by 1-based index.
///
/// Renders the prompt, then one numbered line per item, then a `"> "` read
/// loop. Input that is not an integer in `[1, items.len()]` clears the
/// attempted line and re-prompts without re-printing the list. On success
/// the whole rendering (items, prompt and input line) is cleared so only
/// output written after the call remains visible.
///
/// End-of-stream on the input is unrecoverable: there is no safe default to
/// substitute, so the condition is reported on both console channels and the
/// process terminates with a non-zero status. Every other failure is a
/// normal returned error.
///
/// An empty `items` slice still renders the prompt and the read loop; any
/// entry is then out of range and retried.
pub fn choose<'a, T>(
    console: &dyn Console,
    prompt: &StyledText,
    items: &'a [T],
    display: impl Fn(&T) -> StyledText,
) -> Result<&'a T> {
    console.output(prompt, true)?;

    for (position, item) in items.iter().enumerate() {
        let line = StyledText::styled(format!("{}: ", position + 1), Style::Info) + display(item);
        console.output(&line, true)?;
    }

    let selected = loop {
        console.output(&StyledText::styled("> ", Style::Info), false)?;

        let Some(line) = console.input(false)? else {
            abort_on_end_of_stream(console);
        };

        match line.trim().parse::<usize>() {
            Ok(entry) if entry >= 1 && entry <= items.len() => break entry - 1,
            _ => {
                // Erase the attempted entry and re-prompt; the list stays up.
                console.clear(ClearUnit::Line)?;
            }
        }
    };

    // One line per item, plus the prompt line, plus the accepted input line.
    for _ in 0..items.len() + 2 {
        console.clear(ClearUnit::Line)?;
    }

    Ok(&items[selected])
}

fn abort_on_end_of_stream(console: &dyn Console) -> ! {
    let message = "Input stream was closed while a selection was pending.";
    let _ = console.report_error(message, true);
    let _ = console.output(&StyledText::styled(message, Style::Error), true);
    process::exit(1);
}
