// Default PipelineObserver: turns progress events into tracing logs.

use std::path::Path;

use crate::domain::error::CorpusError;
use crate::domain::records::SourceKind;
use crate::domain::stats::CorpusStats;
use crate::domain::traits::PipelineObserver;

pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn source_loaded(&self, kind: SourceKind, path: &Path, examples: usize) {
        tracing::info!("Loaded {} examples from {} source '{}'", examples, kind, path.display());
    }

    fn source_skipped(&self, kind: SourceKind, path: &Path, error: &CorpusError) {
        tracing::warn!("Skipping {} source '{}': {}", kind, path.display(), error);
    }

    fn augmented(&self, originals: usize, total: usize) {
        tracing::info!(
            "Augmented {} examples to {} ({} questions added)",
            originals,
            total,
            total.saturating_sub(originals)
        );
    }

    fn written(&self, json: &Path, sample: &Path, stats: &CorpusStats) {
        tracing::info!("Saved {} training texts", stats.total);
        tracing::info!("JSON file: {}", json.display());
        tracing::info!("Text file: {}", sample.display());
        tracing::info!(
            "Average length {:.1} chars; <ayah>: {}, <hadith>: {}, <question>: {}",
            stats.average_chars,
            stats.with_ayah,
            stats.with_hadith,
            stats.with_question
        );
    }
}
