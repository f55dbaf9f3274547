//! Results File Sink
//! Writes the session to a plain-text file, rewriting it on every save.

use super::Session;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Persists a session as one text line per sample.
///
/// Every save rewrites the whole file from the in-memory session; nothing is
/// appended across saves.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the session to the target file, replacing previous contents.
    /// An empty session produces an empty file.
    pub fn write(&self, session: &Session) -> Result<(), SinkError> {
        self.write_lines(session).map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn write_lines(&self, session: &Session) -> io::Result<()> {
        let file = File::create(&self.path)?;
        let mut out = BufWriter::new(file);
        for sample in session.samples() {
            writeln!(out, "{}", sample.to_line())?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_rewrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let sink = FileSink::new(&path);

        let mut first = Session::new();
        first.record(10.0, 2.0);
        first.record(20.0, 4.0);
        sink.write(&first).unwrap();

        let mut second = Session::new();
        second.record(5.0, 1.0);
        sink.write(&second).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Voltage: 5.0 V, Current: 1.0 A\n");
    }

    #[test]
    fn every_line_is_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let mut session = Session::new();
        session.record(10.0, 2.0);
        session.record(20.0, 4.0);
        FileSink::new(&path).write(&session).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Voltage: 10.0 V, Current: 2.0 A\nVoltage: 20.0 V, Current: 4.0 A\n"
        );
    }

    #[test]
    fn empty_session_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        FileSink::new(&path).write(&Session::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn write_failure_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.txt");

        let err = FileSink::new(&path).write(&Session::new()).unwrap_err();

        assert!(err.to_string().contains("missing"));
    }
}
