//! Test helpers shared by unit tests and (with the `test_utils` feature)
//! downstream crates.

use crate::console::Console;
use crate::error::Result;
use std::collections::VecDeque;

/// A console fed from a fixed list of input lines that records everything
/// printed to it.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: String,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
            clears: 0,
        }
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }
}
