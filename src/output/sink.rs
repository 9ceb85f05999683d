//! Report destinations.
//!
//! A sink owns the writer for one report: standard output or a file that
//! is closed when the sink is dropped. Faint styling is a capability of
//! the sink, applied around one block at a time.

use crate::utils::config::{OUTFILE_OPTION, STDOUT_MARKER};
use crate::utils::error::ReportError;
use colored::Colorize;
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink over stdout or a file, as opened by [`OutputSink::open`]
pub type ReportSink = OutputSink<Box<dyn Write>>;

/// Writer for one report with optional terminal styling
pub struct OutputSink<W: Write> {
    writer: W,
    styled: bool,
    file: Option<PathBuf>,
}

impl<W: Write> OutputSink<W> {
    /// Wrap an arbitrary writer
    pub fn new(writer: W, styled: bool) -> Self {
        Self {
            writer,
            styled,
            file: None,
        }
    }

    /// File the sink writes to, `None` for standard output
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Write the text produced by `block` in faint style, then reset
    pub fn faint<F>(&mut self, block: F) -> io::Result<()>
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        let mut text = String::new();
        block(&mut text).map_err(|_| io::Error::other("formatting failed"))?;

        if self.styled {
            write!(self.writer, "{}", text.dimmed())
        } else {
            self.writer.write_all(text.as_bytes())
        }
    }

    /// Flush and hand back the writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl ReportSink {
    /// Open the report destination.
    ///
    /// `None`, an empty path or `-` select standard output. A file that
    /// cannot be created is an invalid `--outfile` argument.
    pub fn open(outfile: Option<&Path>) -> Result<Self, ReportError> {
        match outfile {
            Some(path) if !path.as_os_str().is_empty() && path != Path::new(STDOUT_MARKER) => {
                debug!("Opening report file: {}", path.display());

                let file = File::create(path).map_err(|source| ReportError::OpenOutput {
                    option: OUTFILE_OPTION,
                    path: path.to_path_buf(),
                    source,
                })?;

                Ok(Self {
                    writer: Box::new(BufWriter::new(file)),
                    styled: false,
                    file: Some(path.to_path_buf()),
                })
            }
            _ => Ok(Self::new(Box::new(io::stdout().lock()), true)),
        }
    }

    /// Flush buffered output; the file is closed when the sink drops
    pub fn finish(mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Write for OutputSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
