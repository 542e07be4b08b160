//! User-facing output stream.
//!
//! Progress and error lines are part of the tool's observable behaviour and
//! are written verbatim to standard output. Engine output is indented so it
//! stands apart from them.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Memory(Arc<Mutex<Vec<u8>>>),
}

/// Writes progress, results and streamed engine output.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    sink: Sink,
}

impl OutputManager {
    /// Output manager writing to standard output.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            sink: Sink::Stdout,
        }
    }

    /// Output manager collecting everything in memory; read it back with
    /// [`OutputManager::captured`].
    pub fn in_memory(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            sink: Sink::Memory(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// In-memory output whose every write fails.
    #[cfg(test)]
    pub(crate) fn failing() -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let poisoner = Arc::clone(&buffer);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison output buffer");
        })
        .join();
        Self {
            verbose: false,
            quiet: false,
            sink: Sink::Memory(buffer),
        }
    }

    /// Everything written so far when collecting in memory, otherwise empty.
    pub fn captured(&self) -> String {
        match &self.sink {
            Sink::Stdout => String::new(),
            Sink::Memory(buffer) => buffer
                .lock()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default(),
        }
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        match &self.sink {
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", line)?;
                stdout.flush()
            }
            Sink::Memory(buffer) => {
                let mut bytes = buffer
                    .lock()
                    .map_err(|_| io::Error::other("output buffer poisoned"))?;
                writeln!(bytes, "{}", line)
            }
        }
    }

    /// Progress line, always shown.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.write_line(message)
    }

    /// Failure line, always shown.
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.write_line(message)
    }

    /// Final result line, hidden in quiet mode.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_line(message)
    }

    /// Extra detail, shown only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.write_line(message)
    }

    /// Output relayed from the engine, hidden in quiet mode.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_line(&format!("  {}", message))
    }

    /// Pre-formatted block such as help text, written as-is.
    pub fn block(&self, text: &str) -> io::Result<()> {
        self.write_line(text.trim_end())
    }
}
