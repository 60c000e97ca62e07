//! Output management module
//!
//! Streams generated words to a file or stdout through a large buffer.

use crate::error::{GenError, Result};

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for output writing (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Where generated words go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Stdout,
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Buffered line writer
pub struct OutputWriter {
    writer: BufWriter<Box<dyn Write>>,
    target: OutputTarget,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Open the target; a file is created or truncated
    pub fn open(target: OutputTarget, buffer_size: usize) -> Result<Self> {
        let inner: Box<dyn Write> = match &target {
            OutputTarget::Stdout => Box::new(io::stdout().lock()),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|source| GenError::OpenOutput {
                        path: path.clone(),
                        source,
                    })?;
                Box::new(file)
            }
        };
        Ok(Self::from_writer(inner, target, buffer_size))
    }

    /// Wrap an arbitrary writer
    pub fn from_writer(inner: Box<dyn Write>, target: OutputTarget, buffer_size: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size.max(1), inner),
            target,
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer to the destination
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
