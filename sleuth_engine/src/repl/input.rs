//! Line input for the REPL.
//!
//! Interactive terminals get a rustyline editor (line editing, in-session history);
//! piped input falls back to plain buffered stdin through a [`ReaderInput`]. Both sit
//! behind [`LineSource`] so the game loop can also be driven by a [`ScriptedInput`].

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, StdinLock, Write};

use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything the game can read player input from.
pub trait LineSource {
    /// Show `prompt` and read one line, without its trailing newline.
    ///
    /// # Errors
    /// Returns an error only if the underlying stream fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Terminal input, choosing a backend once at startup.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() && io::stdout().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }
}

impl LineSource for InputManager {
    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(DefaultEditor),
    Plain(ReaderInput<StdinLock<'static>>),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(ReaderInput::new(io::stdin().lock()))
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty()
                        && let Err(err) = editor.add_history_entry(line.as_str())
                    {
                        warn!("failed to append to history: {err}");
                    }
                    Ok(InputEvent::Line(line))
                },
                Err(err) => convert_readline_error(err),
            },
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

/// Line input from any buffered reader, echoing prompts to stdout.
///
/// Bytes that aren't valid UTF-8 are replaced rather than rejected, so a garbled
/// line reaches the parser as an ordinary unknown command.
pub struct ReaderInput<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(InputEvent::Eof);
        }
        let line = String::from_utf8_lossy(&self.buffer);
        if matches!(line, std::borrow::Cow::Owned(_)) {
            warn!("input line was not valid UTF-8; invalid bytes replaced");
        }
        Ok(InputEvent::Line(strip_line_ending(&line).to_string()))
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

/// Pre-recorded input lines. Reports end of input once they run out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    /// Every prompt shown so far, in order.
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert_eq!(result, InputEvent::Interrupted);
    }

    #[test]
    fn converts_readline_eof() {
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert_eq!(result, InputEvent::Eof);
    }

    #[test]
    fn strips_unix_and_windows_line_endings() {
        assert_eq!(strip_line_ending("look\n"), "look");
        assert_eq!(strip_line_ending("look\r\n"), "look");
        assert_eq!(strip_line_ending("look"), "look");
    }

    #[test]
    fn reader_input_replaces_invalid_utf8() {
        let mut input = ReaderInput::new(io::Cursor::new(b"d\xffance\r\nwest\nlook".to_vec()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("d\u{fffd}ance".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("west".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("look".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Eof);
    }

    #[test]
    fn scripted_input_ends_with_eof() {
        let mut input = ScriptedInput::new(["north"]);
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("north".into()));
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Eof);
        assert_eq!(input.prompts.len(), 2);
    }
}
