//! # Shell
//!
//! The interactive command loop: prompt, read a line, parse, dispatch, print.
//!
//! This is the error boundary of the application. Every command failure is
//! turned into a printed message here and the loop carries on; only `exit`
//! (or end of input) ends a session. The only errors that escape [`Shell::run`]
//! are failures of the console itself.

use crate::api::NotesApi;
use crate::console::Console;
use crate::editor::EditorSession;
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;
use log::{debug, info};

pub mod parse;
pub(crate) mod render;

pub use parse::{parse, ShellCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<C: Console, S: NoteStore> {
    console: C,
    api: NotesApi<S>,
}

impl<C: Console, S: NoteStore> Shell<C, S> {
    pub fn new(console: C, api: NotesApi<S>) -> Self {
        Self { console, api }
    }

    /// Runs the session until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.console.print(render::WELCOME)?;

        loop {
            self.console.print(render::PROMPT)?;
            let line = match self.console.read_line()? {
                Some(line) => line,
                None => {
                    debug!("end of input, leaving shell");
                    break;
                }
            };

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        info!("session ended");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = match parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!("rejected input {:?}: {}", line, e);
                render::print_error(&mut self.console, &e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!("dispatching {:?}", command);
        match command {
            ShellCommand::Exit => return Ok(Flow::Exit),
            ShellCommand::Help => self.console.print(render::HELP)?,
            ShellCommand::Clear => self.console.clear_screen()?,
            ShellCommand::List => match self.api.list_notes() {
                Ok(result) => render::print_result(&mut self.console, &result)?,
                Err(e) => render::print_error(&mut self.console, &e)?,
            },
            ShellCommand::Delete(name) => {
                let result = self.api.delete_note(&name);
                render::print_result(&mut self.console, &result)?;
            }
            ShellCommand::New(name) => match self.api.create_note(&name) {
                Ok(note) => self.edit(note)?,
                Err(e) => render::print_error(&mut self.console, &e)?,
            },
            ShellCommand::Open(name, mode) => match self.api.open_note(&name, mode) {
                Ok(note) => self.edit(note)?,
                Err(e) => render::print_error(&mut self.console, &e)?,
            },
        }

        Ok(Flow::Continue)
    }

    fn edit(&mut self, note: Note) -> Result<()> {
        EditorSession::new(&mut self.console).run(&mut self.api, note)?;
        Ok(())
    }

    pub fn api(&self) -> &NotesApi<S> {
        &self.api
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}
