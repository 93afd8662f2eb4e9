//! Transcript logging and post-processing.
//!
//! The transcript is the only persistence in the system: an append-only
//! text file of `"<SPEAKER>:\n<message>\n"` turns, opened once per session
//! and written strictly in turn order. The logger is an explicitly
//! constructed sink handed to the dialogue engine; closing it flushes the
//! buffer and returns the file path.

use chrono::Local;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{AppError, Result};

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Chatbot,
    User,
}

impl Speaker {
    fn tag(self) -> &'static str {
        match self {
            Speaker::Chatbot => "CHATBOT",
            Speaker::User => "USER",
        }
    }
}

/// Append-only transcript sink for one dialogue session.
pub struct TranscriptLogger {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl TranscriptLogger {
    /// Create a timestamped transcript file inside `dir`.
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let name = format!("{}.txt", Local::now().format("%Y-%m-%d_%H%M%S"));
        Self::create_at(&dir.join(name))
    }

    /// Create a transcript at an explicit path.
    pub fn create_at(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        info!(path = %path.display(), "transcript opened");
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Append one turn. Messages may span multiple lines.
    pub fn record(&mut self, speaker: Speaker, message: &str) -> Result<()> {
        writeln!(self.writer, "{}:", speaker.tag())?;
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Path of the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close the transcript, returning its path.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

/// Paths produced by [`split_transcript`].
#[derive(Debug)]
pub struct SplitFiles {
    pub all: PathBuf,
    pub chatbot: PathBuf,
    pub user: PathBuf,
}

/// Split a turn-tagged transcript into three line-oriented views: all
/// utterances, chatbot-only, and user-only. Speaker tags are stripped.
/// Lines appearing before any tag go to the all-file only.
pub fn split_transcript(input: &Path) -> Result<SplitFiles> {
    let file = File::open(input)
        .map_err(|e| AppError::Load(format!("cannot open transcript {}: {}", input.display(), e)))?;
    let reader = BufReader::new(file);

    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Load(format!("invalid transcript path {}", input.display())))?;
    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    let paths = SplitFiles {
        all: dir.join(format!("all_{}", name)),
        chatbot: dir.join(format!("chatbot_{}", name)),
        user: dir.join(format!("user_{}", name)),
    };

    let mut all = BufWriter::new(File::create(&paths.all)?);
    let mut chatbot = BufWriter::new(File::create(&paths.chatbot)?);
    let mut user = BufWriter::new(File::create(&paths.user)?);

    let mut current: Option<Speaker> = None;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("CHATBOT:") {
            current = Some(Speaker::Chatbot);
            let message = rest.trim();
            if !message.is_empty() {
                writeln!(all, "{}", message)?;
                writeln!(chatbot, "{}", message)?;
            }
        } else if let Some(rest) = line.strip_prefix("USER:") {
            current = Some(Speaker::User);
            let message = rest.trim();
            if !message.is_empty() {
                writeln!(all, "{}", message)?;
                writeln!(user, "{}", message)?;
            }
        } else {
            // Continuation of the previous message.
            match current {
                Some(Speaker::Chatbot) => {
                    writeln!(all, "{}", line)?;
                    writeln!(chatbot, "{}", line)?;
                }
                Some(Speaker::User) => {
                    writeln!(all, "{}", line)?;
                    writeln!(user, "{}", line)?;
                }
                None => writeln!(all, "{}", line)?,
            }
        }
    }

    all.flush()?;
    chatbot.flush()?;
    user.flush()?;

    info!(
        all = %paths.all.display(),
        chatbot = %paths.chatbot.display(),
        user = %paths.user.display(),
        "transcript split complete"
    );
    Ok(paths)
}
