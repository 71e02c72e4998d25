// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Failures of a corpus run:
//
//   MissingInput    → a configured source file does not exist
//   MalformedInput  → the file exists but its JSON does not parse
//   MissingField    → one record lacks a required field (record dropped)
//   InvalidRecord   → one record has a wrongly typed field (record dropped)
//   OutputCollision → two output files would land on the same path
//   Io              → reading or writing failed (fatal for outputs)
//
// None of them is retried. The application layer decides which
// ones abort the run and which ones only skip a source.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("malformed JSON in '{}': {source}", path.display())]
    MalformedInput {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("record does not match its schema: {0}")]
    InvalidRecord(#[source] serde_json::Error),

    #[error("output '{}' would overwrite another output of the same run", .0.display())]
    OutputCollision(PathBuf),

    #[error("I/O failure on '{}': {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    /// Wrap an `io::Error` with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = CorpusError::MissingInput(PathBuf::from("data/quran.json"));
        assert!(err.to_string().contains("data/quran.json"));

        let err = CorpusError::MissingField("arabicText");
        assert_eq!(err.to_string(), "record is missing required field `arabicText`");
    }

    #[test]
    fn test_malformed_keeps_parser_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err   = CorpusError::MalformedInput { path: "x.json".into(), source: parse };
        assert!(std::error::Error::source(&err).is_some());
    }
}
