use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{OsuError, Result};
use crate::model::OutputRecord;

/// Append-only CSV writer for [`OutputRecord`]s.
///
/// The header row is written as soon as the sink is created, and every record
/// is flushed as it is written, so an interrupted export still leaves a valid
/// file holding every row written so far.
pub struct RecordSink<W: Write> {
    writer: csv::Writer<W>,
    written: usize,
}

impl RecordSink<File> {
    /// Create (or truncate) the file at `path` and write the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "creating output file");
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> RecordSink<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(OutputRecord::HEADER)?;
        writer.flush()?;
        Ok(Self { writer, written: 0 })
    }

    /// Append one row.
    pub fn write(&mut self, record: &OutputRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Number of rows written, not counting the header.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| OsuError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Playstyle;
    use crate::model::UserProfile;
    use crate::projection::project;

    fn record(username: &str) -> OutputRecord {
        project(
            1,
            &UserProfile {
                id: 9,
                username: Some(username.to_string()),
                playstyle: Playstyle::List(vec!["mouse".into(), "tablet".into()]),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_header_written_on_create() {
        let sink = RecordSink::from_writer(vec![]).unwrap();
        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out, format!("{}\n", OutputRecord::HEADER.join(",")));
    }

    #[test]
    fn test_row_alignment_with_missing_fields() {
        let mut sink = RecordSink::from_writer(vec![]).unwrap();
        sink.write(&record("plain")).unwrap();
        assert_eq!(sink.written(), 1);

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "1,9,plain,,,,,,,,,0,,,\"mouse, tablet\",,,,,https://osu.ppy.sh/users/9,,,,,"
        );
    }

    #[test]
    fn test_escaped_username_round_trips() {
        let tricky = [
            "comma, name",
            "say \"hi\"",
            "multi\nline",
            "plain",
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut sink = RecordSink::create(&path).unwrap();
        for name in tricky {
            sink.write(&record(name)).unwrap();
        }
        drop(sink);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), OutputRecord::HEADER);

        let usernames: Vec<String> = reader
            .records()
            .map(|r| r.unwrap().get(2).unwrap().to_string())
            .collect();
        assert_eq!(usernames, tricky);
    }

    #[test]
    fn test_rows_visible_before_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.csv");
        let mut sink = RecordSink::create(&path).unwrap();
        sink.write(&record("first")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.lines().nth(1).unwrap().contains("first"));
    }
}
