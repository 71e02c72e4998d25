// ============================================================
// Layer 4 — Corpus Writer
// ============================================================
// Persists a run's examples:
//
//   <output>.json → every example, as a pretty JSON array of strings
//                   (UTF-8, Arabic left unescaped)
//   <output>.txt  → the first `sample_limit` examples, each under
//                   a "=== Training Text N ===" header (1-based)
//
// The JSON array is written to a sibling `.tmp` file and renamed
// into place, so readers never see a half-written array.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::domain::error::CorpusError;

/// Paths of the two files a write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub json:   PathBuf,
    pub sample: PathBuf,
}

/// Write `items` as a JSON array plus the `.txt` inspection sample.
/// Fails on I/O, or before writing anything when `path` already has
/// a `.txt` extension (the sample would replace the JSON).
pub fn write_examples<T>(
    items:        &[T],
    path:         &Path,
    sample_limit: usize,
) -> Result<WrittenFiles, CorpusError>
where
    T: Serialize + std::fmt::Display,
{
    let sample = path.with_extension("txt");
    if sample == path {
        return Err(CorpusError::OutputCollision(sample));
    }

    write_json_atomic(items, path)?;

    let file   = fs::File::create(&sample).map_err(|e| CorpusError::io(&sample, e))?;
    let mut w  = BufWriter::new(file);
    for (i, item) in items.iter().take(sample_limit).enumerate() {
        write!(w, "=== Training Text {} ===\n{}\n\n", i + 1, item)
            .map_err(|e| CorpusError::io(&sample, e))?;
    }
    w.flush().map_err(|e| CorpusError::io(&sample, e))?;

    tracing::debug!("Wrote {} items to '{}'", items.len(), path.display());
    Ok(WrittenFiles { json: path.to_path_buf(), sample })
}

/// Pretty-print `value` as JSON to `path`, creating parent directories
pub fn write_json_atomic<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), CorpusError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CorpusError::io(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let file  = fs::File::create(&tmp).map_err(|e| CorpusError::io(&tmp, e))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, value)
        .map_err(|e| CorpusError::io(&tmp, e.into()))?;
    w.flush().map_err(|e| CorpusError::io(&tmp, e))?;
    drop(w);

    fs::rename(&tmp, path).map_err(|e| CorpusError::io(path, e))
}
