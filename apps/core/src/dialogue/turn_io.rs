//! Turn-level I/O abstraction.
//!
//! Separates blocking console interaction from the dialogue logic so the
//! state machine is testable without a live terminal. Each prompt blocks
//! until one line of user input arrives; there is no timeout.

use std::io::{self, BufRead, Write};

/// One side of a turn: emit chatbot text, optionally collect a reply.
pub trait TurnIo {
    /// Display a chatbot line without expecting a reply.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Display a prompt and block for one line of user input.
    fn prompt(&mut self, text: &str) -> io::Result<String>;
}

/// Interactive stdin/stdout implementation.
pub struct ConsoleIo;

impl TurnIo for ConsoleIo {
    fn say(&mut self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        self.say(text)?;
        let mut reply = String::new();
        io::stdin().lock().read_line(&mut reply)?;
        Ok(reply.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Scripted implementation for tests: canned replies in, emitted lines out.
#[cfg(test)]
pub struct ScriptedIo {
    replies: std::collections::VecDeque<String>,
    pub lines: Vec<String>,
}

#[cfg(test)]
impl ScriptedIo {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
        }
    }

    /// All emitted chatbot text joined for easy containment checks.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl TurnIo for ScriptedIo {
    fn say(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        self.lines.push(text.to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "reply script exhausted"))
    }
}
