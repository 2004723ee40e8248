//! Output sink: stdout, an interactive pager, or an in-memory buffer
//!
//! The sink is picked once per invocation from the rendered text. When
//! stdout is a terminal and the text is taller than the terminal, the text
//! goes through `$PAGER` (default `less -RS`). A pager that quits before
//! reading everything is not an error.

use std::io::{self, IsTerminal, Write};
use std::process::{Child, Command, Stdio};

use log::debug;
use terminal_size::{terminal_size, Height};

use crate::config::defaults;
use crate::error::Result;

enum Target {
    Stdout,
    Pager(Option<Child>),
    Buffer(Vec<u8>),
}

/// Destination for the rendered output
pub struct OutputSink {
    target: Target,
}

impl OutputSink {
    /// Choose the sink for `text` from terminal introspection
    pub fn for_text(text: &str) -> Self {
        let is_tty = io::stdout().is_terminal();
        let height = terminal_size().map(|(_, Height(h))| h as usize);
        if should_page(text, is_tty, height) {
            let command = std::env::var("PAGER")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| defaults::PAGER.to_string());
            match Self::pager(&command) {
                Ok(sink) => return sink,
                Err(e) => debug!("Could not start pager '{}': {}", command, e),
            }
        }
        Self::stdout()
    }

    /// Write directly to standard output
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Collect output in memory
    pub fn buffer() -> Self {
        Self {
            target: Target::Buffer(Vec::new()),
        }
    }

    /// Spawn a pager command (program plus arguments) and write through it
    pub fn pager(command: &str) -> io::Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty pager command"))?;
        let child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .spawn()?;
        debug!("Paging output through '{}'", command);
        Ok(Self {
            target: Target::Pager(Some(child)),
        })
    }

    /// Buffered bytes, if this is an in-memory sink
    pub fn contents(&self) -> Option<&[u8]> {
        match &self.target {
            Target::Buffer(buf) => Some(buf),
            _ => None,
        }
    }

    /// Write text; a closed pager pipe is swallowed
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        let result = match &mut self.target {
            Target::Stdout => io::stdout().lock().write_all(text.as_bytes()),
            Target::Buffer(buf) => buf.write_all(text.as_bytes()),
            Target::Pager(child) => match child.as_mut().and_then(|c| c.stdin.as_mut()) {
                Some(stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            },
        };
        ignore_broken_pipe(result)
    }

    /// Flush and close the sink, waiting for the pager to exit
    pub fn finish(mut self) -> Result<()> {
        self.close()
    }

    fn close(&mut self) -> Result<()> {
        match &mut self.target {
            Target::Stdout => ignore_broken_pipe(io::stdout().flush()),
            Target::Buffer(_) => Ok(()),
            Target::Pager(child) => {
                if let Some(mut child) = child.take() {
                    if let Some(mut stdin) = child.stdin.take() {
                        ignore_broken_pipe(stdin.flush())?;
                    }
                    child.wait()?;
                }
                Ok(())
            }
        }
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            debug!("Error closing output sink: {}", e);
        }
    }
}

/// Page only on a terminal, and only when the text is taller than it
pub fn should_page(text: &str, is_tty: bool, terminal_height: Option<usize>) -> bool {
    match terminal_height {
        Some(height) if is_tty => text.lines().count() > height,
        _ => false,
    }
}

fn ignore_broken_pipe(result: io::Result<()>) -> Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output pipe closed early");
            Ok(())
        }
        other => Ok(other?),
    }
}
