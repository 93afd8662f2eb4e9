// Split a finished transcript into all/chatbot/user line-oriented views.

use anyhow::{bail, Context};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sentibot_core::transcript::split_transcript;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: transcript-split <transcript.txt>");
    };
    let path = PathBuf::from(path);

    let files = split_transcript(&path)
        .with_context(|| format!("failed to split {}", path.display()))?;
    println!(
        "Processed transcript saved as {}, {}, and {}.",
        files.all.display(),
        files.chatbot.display(),
        files.user.display()
    );
    Ok(())
}
