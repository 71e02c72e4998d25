// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams hold the pipeline together:
//
//   RecordSource     → anything that yields normalized records.
//                      QuranSource, HadithSource and TafsirSource
//                      implement it, so the use case folds over
//                      a Vec<Box<dyn RecordSource>> without
//                      knowing which schema each file follows.
//
//   PipelineObserver → receives progress events. The core
//                      transformation never logs or prints on
//                      its own; it reports through this trait.
//
// Reference: Rust Book §10 (Traits), §17 (Trait Objects)

use std::path::Path;

use crate::domain::stats::CorpusStats;
use crate::domain::error::CorpusError;
use crate::domain::records::{Record, SourceKind};

/// Lazy sequence of records from one source
pub type Records = Box<dyn Iterator<Item = Record>>;

// ─── RecordSource ─────────────────────────────────────────────────────────────
pub trait RecordSource {
    fn kind(&self) -> SourceKind;

    fn path(&self) -> &Path;

    /// Parse the source. Fails as a whole on a missing file or
    /// malformed JSON; records missing a required field are
    /// dropped from the returned sequence instead.
    fn records(&self) -> Result<Records, CorpusError>;
}

// ─── PipelineObserver ─────────────────────────────────────────────────────────
/// Progress events of a corpus run. Every method has an empty
/// default so an observer only implements what it cares about.
pub trait PipelineObserver {
    fn source_loaded(&self, _kind: SourceKind, _path: &Path, _examples: usize) {}

    fn source_skipped(&self, _kind: SourceKind, _path: &Path, _error: &CorpusError) {}

    fn augmented(&self, _originals: usize, _total: usize) {}

    fn written(&self, _json: &Path, _sample: &Path, _stats: &CorpusStats) {}
}
