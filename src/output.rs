//! Output management module
//!
//! Writes the rendered report either to a file or to standard output.

use crate::error::{FrequencyError, Result};

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffer size for file writing
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Lines and bytes written for one report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub lines: u64,
    pub bytes: u64,
}

/// Destination of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    Stdout,
    File(PathBuf),
}

impl ReportTarget {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::File(p.to_path_buf()),
            None => Self::Stdout,
        }
    }

    /// Human-readable name for status and error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout => "standard output".to_string(),
            Self::File(path) => format!("{:?}", path),
        }
    }

    /// Write the whole report and flush it
    pub fn write_report(&self, report: &str) -> Result<WriteSummary> {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut sink = ReportWriter::new(stdout.lock());
                sink.write(report).map_err(|e| self.write_error(e))?;
                sink.flush().map_err(|e| self.write_error(e))?;
                Ok(sink.summary())
            }
            Self::File(path) => {
                let mut sink = ReportWriter::create(path)?;
                sink.write(report).map_err(|e| self.write_error(e))?;
                sink.flush().map_err(|e| self.write_error(e))?;
                Ok(sink.summary())
            }
        }
    }

    fn write_error(&self, source: io::Error) -> FrequencyError {
        FrequencyError::OutputWrite {
            target: self.describe(),
            source,
        }
    }
}

/// Buffered report writer
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl ReportWriter<File> {
    /// Create (or truncate) an output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| FrequencyError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::with_capacity(DEFAULT_BUFFER_SIZE, file))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, inner)
    }

    pub fn with_capacity(buffer_size: usize, inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, inner),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write report text verbatim
    pub fn write(&mut self, data: &str) -> io::Result<()> {
        self.writer.write_all(data.as_bytes())?;
        self.lines_written += data.matches('\n').count() as u64;
        self.bytes_written += data.len() as u64;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn summary(&self) -> WriteSummary {
        WriteSummary {
            lines: self.lines_written,
            bytes: self.bytes_written,
        }
    }
}

impl<W: Write> Drop for ReportWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Ensure the parent directory of an output file exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(|source| FrequencyError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
