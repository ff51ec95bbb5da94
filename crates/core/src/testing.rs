//! Test double for the console capability.
//!
//! [`FakeConsole`] pops reads from a fixed input queue and records every
//! interaction in order, so tests can assert the full read/write transcript
//! of a prompt or dispatch.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::console::{ClearUnit, Console};
use crate::error::Result;
use crate::style::StyledText;

/// One recorded console interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Output { text: StyledText, new_line: bool },
    ReportError { message: String, new_line: bool },
    Clear(ClearUnit),
    Read { secure: bool },
}

/// A console that consumes a scripted input queue and records its transcript.
///
/// An exhausted input queue models end-of-stream.
pub struct FakeConsole {
    inputs: Mutex<VecDeque<String>>,
    events: Mutex<Vec<ConsoleEvent>>,
    size: (u16, u16),
}

impl FakeConsole {
    pub fn new(inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            inputs: Mutex::new(inputs.into_iter().map(Into::into).collect()),
            events: Mutex::new(Vec::new()),
            size: (80, 24),
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    /// Every interaction so far, in call order.
    pub fn transcript(&self) -> Vec<ConsoleEvent> {
        self.events.lock().expect("console transcript poisoned").clone()
    }

    /// The unstyled text of every `Output` event, in call order.
    pub fn output_lines(&self) -> Vec<String> {
        self.transcript()
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Output { text, .. } => Some(text.unstyled()),
                _ => None,
            })
            .collect()
    }

    /// Number of `Clear` events for the given unit.
    pub fn clear_count(&self, unit: ClearUnit) -> usize {
        self.transcript()
            .iter()
            .filter(|event| matches!(event, ConsoleEvent::Clear(cleared) if *cleared == unit))
            .count()
    }

    fn record(&self, event: ConsoleEvent) {
        self.events
            .lock()
            .expect("console transcript poisoned")
            .push(event);
    }
}

impl Console for FakeConsole {
    fn input(&self, secure: bool) -> Result<Option<String>> {
        self.record(ConsoleEvent::Read { secure });
        Ok(self
            .inputs
            .lock()
            .expect("console input queue poisoned")
            .pop_front())
    }

    fn output(&self, text: &StyledText, new_line: bool) -> Result<()> {
        self.record(ConsoleEvent::Output {
            text: text.clone(),
            new_line,
        });
        Ok(())
    }

    fn report_error(&self, message: &str, new_line: bool) -> Result<()> {
        self.record(ConsoleEvent::ReportError {
            message: message.to_string(),
            new_line,
        });
        Ok(())
    }

    fn clear(&self, unit: ClearUnit) -> Result<()> {
        self.record(ConsoleEvent::Clear(unit));
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(self.size)
    }
}
