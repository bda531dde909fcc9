//! Quill binary: argument parsing, terminal takeover, and the main loop.
//!
//! The loop is deliberately dumb: refresh the screen, wait briefly for one
//! event, dispatch it, repeat. Everything interesting lives in the library.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quill::{Editor, EditorConfig, InputReader, Screen, TerminalSession};

#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "A modal terminal text editor")]
struct Args {
    /// File to edit
    file: Option<PathBuf>,

    /// Append diagnostics to this file (filtered by QUILL_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

/// Install a file-backed subscriber. Logging to stdout is never an option;
/// the compositor owns the terminal.
fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("QUILL_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let config = EditorConfig::default();
    let (width, height) = TerminalSession::size().context("query terminal size")?;

    let mut editor = Editor::new(config.clone(), width, height);
    if let Some(path) = &args.file {
        editor
            .open(path)
            .with_context(|| format!("open {}", path.display()))?;
    }

    // Raw mode from here on; the session guard restores the terminal on
    // every exit path, including errors below.
    let session = TerminalSession::new(&config)?;
    let reader = InputReader::spawn(config.input_poll_timeout);
    let mut screen = Screen::new();
    let mut stdout = io::stdout();

    while editor.is_running() {
        screen.refresh(&mut editor, &mut stdout)?;
        if let Some(event) = reader.recv_timeout(config.input_poll_timeout) {
            editor.handle_event(&event);
        }
    }

    reader.join();
    drop(session);

    Ok(())
}
