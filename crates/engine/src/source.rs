// crates/engine/src/source.rs
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// One countable input: a named file, or standard input spooled to a
/// transient backing file.
///
/// The exclusion pre-pass and the scanner intentionally traverse the same
/// bytes with different rules, so every pass calls [`Input::open`] for a
/// fresh reader positioned at the start. Spooling makes that work for a
/// non-seekable stdin; the spool file is removed when the `Input` drops.
#[derive(Debug)]
pub struct Input {
    kind: InputKind,
}

#[derive(Debug)]
enum InputKind {
    File(PathBuf),
    Spooled(NamedTempFile),
}

impl Input {
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        Self { kind: InputKind::File(path) }
    }

    /// Copy `reader` (normally standard input) to completion into a spool
    /// file.
    pub fn spool<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut spool = NamedTempFile::new()?;
        io::copy(&mut reader, spool.as_file_mut())?;
        spool.as_file_mut().flush()?;
        Ok(Self { kind: InputKind::Spooled(spool) })
    }

    /// Open a fresh buffered reader over the full stream.
    ///
    /// Each call yields an independent handle starting at offset zero.
    pub fn open(&self) -> io::Result<BufReader<File>> {
        let file = match &self.kind {
            InputKind::File(path) => File::open(path)?,
            InputKind::Spooled(spool) => spool.reopen()?,
        };
        Ok(BufReader::new(file))
    }

    /// The path to report next to this input's counts; `None` for spooled
    /// standard input, which is printed without a name.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            InputKind::File(path) => Some(path),
            InputKind::Spooled(_) => None,
        }
    }

    /// Human-readable name for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            InputKind::File(path) => path.display().to_string(),
            InputKind::Spooled(_) => "standard input".to_string(),
        }
    }
}
