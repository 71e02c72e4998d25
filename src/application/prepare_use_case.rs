// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates one corpus run:
//
//   Step 1: Check outputs are distinct, inputs exist (early return)
//   Step 2: Build one RecordSource per input      (Layer 4 - data)
//   Step 3: Fold sources into examples            (Layer 4 - data)
//   Step 4: Augment with question examples        (Layer 4 - data)
//   Step 5: Write corpus JSON + inspection sample (Layer 4 - data)
//   Step 6: Save the run config next to the output
//
// A missing input stops the run before anything is written.
// A malformed source is reported and skipped. Only I/O failures
// while writing abort with an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    augmenter::{AugmentConfig, Augmenter},
    loader::{HadithSource, QuranSource, TafsirSource},
    preprocessor::{Normalizer, UnicodeForm},
    serializer::Serializer,
    writer::{write_examples, write_json_atomic},
};
use crate::domain::{
    error::CorpusError,
    example::TrainingExample,
    stats::CorpusStats,
    traits::{PipelineObserver, RecordSource},
};

// ─── Prepare Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub quran:        Option<PathBuf>,
    pub hadith:       Vec<PathBuf>,
    pub tafsir:       Vec<PathBuf>,
    pub output:       PathBuf,
    pub augment:      AugmentConfig,
    /// How many examples go into the `.txt` inspection file
    pub sample_limit: usize,
    pub unicode_form: UnicodeForm,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            quran:  Some(PathBuf::from("assets/data/quran/complete_quran.json")),
            hadith: vec![
                PathBuf::from("assets/data/hadith/sahih_bukhari.json"),
                PathBuf::from("assets/data/hadith/sahih_muslim.json"),
            ],
            tafsir: vec![PathBuf::from("assets/data/quran/tafsir_al_fatihah.json")],
            output:       PathBuf::from("training_data/islamic_training_data.json"),
            augment:      AugmentConfig::default(),
            sample_limit: 100,
            unicode_form: UnicodeForm::default(),
        }
    }
}

impl PrepareConfig {
    /// Every configured input path, Quran first
    pub fn inputs(&self) -> impl Iterator<Item = &PathBuf> {
        self.quran.iter().chain(&self.hadith).chain(&self.tafsir)
    }

    /// Where the run config is saved, beside the corpus JSON
    pub fn config_path(&self) -> PathBuf {
        self.output.with_file_name("prepare_config.json")
    }

    /// Where the `.txt` inspection sample is written
    pub fn sample_path(&self) -> PathBuf {
        self.output.with_extension("txt")
    }

    /// The corpus, sample and config files must be three different paths
    pub fn check_outputs(&self) -> Result<(), CorpusError> {
        let sample = self.sample_path();
        let config = self.config_path();
        if sample == self.output || config == self.output {
            return Err(CorpusError::OutputCollision(self.output.clone()));
        }
        if config == sample {
            return Err(CorpusError::OutputCollision(sample));
        }
        Ok(())
    }
}

// ─── Outcome ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareReport {
    pub json:   PathBuf,
    pub sample: PathBuf,
    pub stats:  CorpusStats,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrepareOutcome {
    /// Nothing was written; these configured inputs do not exist
    MissingInputs(Vec<PathBuf>),
    Written(PrepareReport),
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, observer: &dyn PipelineObserver) -> Result<PrepareOutcome> {
        let cfg = &self.config;

        // ── Step 1: Distinct outputs, every input present ────────────────────
        cfg.check_outputs()
            .with_context(|| format!("Unusable output path '{}'", cfg.output.display()))?;

        let missing: Vec<PathBuf> = cfg.inputs().filter(|p| !p.exists()).cloned().collect();
        if !missing.is_empty() {
            return Ok(PrepareOutcome::MissingInputs(missing));
        }

        // ── Step 2–3: Load and serialize ─────────────────────────────────────
        let sources   = self.sources();
        let originals = build_examples(&sources, &Serializer::new(), observer);

        // ── Step 4: Augment ──────────────────────────────────────────────────
        let original_count = originals.len();
        let examples = Augmenter::new(cfg.augment.clone()).augment(originals);
        observer.augmented(original_count, examples.len());

        // ── Step 5: Write ────────────────────────────────────────────────────
        let files = write_examples(&examples, &cfg.output, cfg.sample_limit)
            .with_context(|| format!("Cannot write corpus to '{}'", cfg.output.display()))?;

        // ── Step 6: Save config ──────────────────────────────────────────────
        write_json_atomic(cfg, &cfg.config_path())
            .with_context(|| "Cannot save prepare config")?;

        let rendered: Vec<String> = examples.iter().map(ToString::to_string).collect();
        let stats = CorpusStats::from_texts(&rendered);
        observer.written(&files.json, &files.sample, &stats);

        Ok(PrepareOutcome::Written(PrepareReport {
            json:   files.json,
            sample: files.sample,
            stats,
        }))
    }

    /// One RecordSource per configured input, in config order
    fn sources(&self) -> Vec<Box<dyn RecordSource>> {
        let cfg = &self.config;
        let n   = Normalizer::new(cfg.unicode_form);

        let mut sources: Vec<Box<dyn RecordSource>> = Vec::new();
        if let Some(path) = &cfg.quran {
            sources.push(Box::new(QuranSource::new(path, n)));
        }
        for path in &cfg.hadith {
            sources.push(Box::new(HadithSource::new(path, n)));
        }
        for path in &cfg.tafsir {
            sources.push(Box::new(TafsirSource::new(path, n)));
        }
        sources
    }
}

/// Fold every source into one ordered list of examples.
///
/// A source that fails to load is reported to `observer` and
/// contributes nothing; the fold continues with the next one.
pub fn build_examples(
    sources:    &[Box<dyn RecordSource>],
    serializer: &Serializer,
    observer:   &dyn PipelineObserver,
) -> Vec<TrainingExample> {
    sources.iter().fold(Vec::new(), |mut acc, source| {
        match source.records() {
            Ok(records) => {
                let before = acc.len();
                acc.extend(records.flat_map(|r| serializer.serialize(&r)));
                observer.source_loaded(source.kind(), source.path(), acc.len() - before);
            }
            Err(e) => observer.source_skipped(source.kind(), source.path(), &e),
        }
        acc
    })
}
