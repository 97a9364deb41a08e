//! Operator Session
//!
//! Drives one operator through the menu: read a choice, collect its fields,
//! execute against the library, print the response.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::config::Config;
use crate::engine::Library;
use crate::error::{LibraryError, Result};
use crate::protocol::{
    normalize_field, parse_choice, read_line, write_lines, write_menu, write_prompt,
    write_response, MenuChoice, EXIT_MESSAGE, INVALID_CHOICE_MESSAGE,
};

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Commands executed against the library
    pub commands_executed: usize,

    /// Executed commands that could change catalog state
    pub mutations: usize,

    /// Choices or lines rejected as invalid
    pub invalid_inputs: usize,

    /// Whether the session ended through the Exit entry (vs end of input)
    pub exited: bool,
}

/// What the loop does after one step
enum Step {
    Continue,
    Exit,
    EndOfInput,
}

/// A read-dispatch-print loop over any line source and sink
pub struct Session<R, W> {
    config: Config,
    engine: Arc<Library>,
    reader: R,
    writer: W,
    stats: SessionStats,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session. Fails if the config is invalid.
    pub fn new(config: Config, engine: Arc<Library>, reader: R, writer: W) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            engine,
            reader,
            writer,
            stats: SessionStats::default(),
        })
    }

    /// Run until Exit or end of input (blocking)
    ///
    /// Invalid choices and rejected lines are reported to the operator and the
    /// loop carries on. Only I/O errors end the session early.
    pub fn run(&mut self) -> Result<SessionStats> {
        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => {
                    self.stats.exited = true;
                    break;
                }
                Ok(Step::EndOfInput) => {
                    tracing::debug!("End of operator input");
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Rejected operator input: {}", e);
                    self.stats.invalid_inputs += 1;
                    write_lines(&mut self.writer, &[e.to_string()])?;
                }
                Err(e) => {
                    tracing::warn!("Session aborted: {}", e);
                    return Err(e);
                }
            }
        }

        tracing::debug!(
            commands = self.stats.commands_executed,
            invalid = self.stats.invalid_inputs,
            "Session finished"
        );
        Ok(self.stats)
    }

    fn step(&mut self) -> Result<Step> {
        if self.config.show_menu {
            write_menu(&mut self.writer)?;
        }
        write_prompt(&mut self.writer, &self.config.prompt)?;

        let Some(line) = self.next_line()? else {
            return Ok(Step::EndOfInput);
        };

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(LibraryError::Input(reason)) => {
                tracing::debug!("Invalid menu choice: {}", reason);
                self.stats.invalid_inputs += 1;
                write_lines(&mut self.writer, &[INVALID_CHOICE_MESSAGE.to_string()])?;
                return Ok(Step::Continue);
            }
            Err(e) => return Err(e),
        };

        if choice == MenuChoice::Exit {
            write_lines(&mut self.writer, &[EXIT_MESSAGE.to_string()])?;
            return Ok(Step::Exit);
        }

        let mut values = Vec::with_capacity(choice.fields().len());
        for field in choice.fields() {
            write_prompt(&mut self.writer, field.prompt())?;
            let Some(raw) = self.next_line()? else {
                // Half-entered command is dropped
                return Ok(Step::EndOfInput);
            };
            values.push(normalize_field(*field, raw));
        }

        let Some(command) = choice.into_command(values) else {
            return Ok(Step::Continue);
        };

        let label = command.menu_choice().label();
        if command.is_mutating() {
            tracing::debug!(command = label, "Executing {:?}", command);
            self.stats.mutations += 1;
        } else {
            tracing::trace!(command = label, "Executing {:?}", command);
        }
        let response = self.engine.execute(command);
        self.stats.commands_executed += 1;

        write_response(&mut self.writer, &response)?;
        Ok(Step::Continue)
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        read_line(&mut self.reader, self.config.max_line_len)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Counters so far
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Output sink (for inspecting captured output)
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Shared engine
    pub fn engine(&self) -> &Arc<Library> {
        &self.engine
    }
}
