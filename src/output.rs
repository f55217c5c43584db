//! Output management module
//!
//! Appends filtered or generated words to a file, or streams them to
//! standard output, with optional de-duplication against the destination's
//! pre-existing content.

use ahash::RandomState;
use hashbrown::HashSet;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::reader::read_existing_set;

/// Where emitted words go
#[derive(Debug, Clone)]
pub enum Destination {
    /// One word per line on stdout; de-duplication is never consulted
    Stdout,
    /// Append to a file, created if missing
    File(PathBuf),
}

impl Destination {
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::File(p.to_path_buf()),
            None => Self::Stdout,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

/// Buffered word writer with append semantics
///
/// When `check` is requested the destination's existing lines are loaded
/// once before any write; candidates already present are rejected. The set
/// is never updated during the run, so duplicates arriving within a single
/// invocation are each compared against the pre-existing content only.
pub struct OutputWriter {
    writer: BufWriter<Box<dyn Write>>,
    existing: Option<HashSet<String, RandomState>>,
    appended: u64,
    rejected: u64,
}

impl OutputWriter {
    /// Open a writer for the destination.
    ///
    /// `check` only applies to file destinations; stdout never consults an
    /// existing set. A missing destination file counts as empty content.
    pub fn open(destination: &Destination, check: bool) -> anyhow::Result<Self> {
        let (writer, existing): (Box<dyn Write>, _) = match destination {
            Destination::Stdout => (Box::new(io::stdout()), None),
            Destination::File(path) => {
                let existing = if check {
                    Some(read_existing_set(path)?)
                } else {
                    None
                };
                let file = OpenOptions::new().append(true).create(true).open(path)?;
                (Box::new(file), existing)
            }
        };

        Ok(Self {
            writer: BufWriter::new(writer),
            existing,
            appended: 0,
            rejected: 0,
        })
    }

    /// Write a single word, returning true if it was appended.
    pub fn write_word(&mut self, word: &str) -> anyhow::Result<bool> {
        if let Some(ref existing) = self.existing {
            if existing.contains(word) {
                self.rejected += 1;
                return Ok(false);
            }
        }

        writeln!(self.writer, "{}", word)?;
        self.appended += 1;
        Ok(true)
    }

    /// Flush the buffer to the destination
    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of words actually appended
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Number of words suppressed by the existing-content check
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Write a word sequence to the destination, returning (appended, rejected).
pub fn write_words<I, S>(
    destination: &Destination,
    words: I,
    check: bool,
) -> anyhow::Result<(u64, u64)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = OutputWriter::open(destination, check)?;
    for word in words {
        writer.write_word(word.as_ref())?;
    }
    writer.flush()?;
    Ok((writer.appended(), writer.rejected()))
}
