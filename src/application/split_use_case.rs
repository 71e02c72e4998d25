// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Turns a prepared corpus into the two files a fine-tuning run
// consumes:
//
//   Step 1: Read the corpus JSON array              (Layer 4 - data)
//   Step 2: Seeded shuffle + train/validation split (Layer 4 - data)
//   Step 3: Write train.json and validation.json    (Layer 4 - data)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    splitter::{split_train_val, DEFAULT_SPLIT_SEED},
    writer::write_json_atomic,
};
use crate::domain::stats::CorpusStats;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input:        PathBuf,
    pub output_dir:   PathBuf,
    pub val_fraction: f64,
    pub seed:         u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input:        PathBuf::from("training_data/islamic_training_data.json"),
            output_dir:   PathBuf::from("training_data"),
            val_fraction: 0.1,
            seed:         DEFAULT_SPLIT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub train_path:      PathBuf,
    pub validation_path: PathBuf,
    pub train:           usize,
    pub validation:      usize,
    pub stats:           CorpusStats,
}

pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SplitReport> {
        let cfg = &self.config;

        // ── Step 1: Read corpus ──────────────────────────────────────────────
        let text = std::fs::read_to_string(&cfg.input)
            .with_context(|| format!("Cannot read corpus '{}'", cfg.input.display()))?;
        let texts: Vec<String> = serde_json::from_str(&text)
            .with_context(|| format!("'{}' is not a JSON array of strings", cfg.input.display()))?;
        let stats = CorpusStats::from_texts(&texts);
        tracing::info!("Read {} training texts from '{}'", texts.len(), cfg.input.display());

        // ── Step 2: Split ────────────────────────────────────────────────────
        let (train, validation) = split_train_val(texts, cfg.val_fraction, cfg.seed);

        // ── Step 3: Write ────────────────────────────────────────────────────
        let train_path      = cfg.output_dir.join("train.json");
        let validation_path = cfg.output_dir.join("validation.json");
        write_json_atomic(&train, &train_path)?;
        write_json_atomic(&validation, &validation_path)?;

        tracing::info!(
            "Split: {} train, {} validation (seed {})",
            train.len(),
            validation.len(),
            cfg.seed
        );

        Ok(SplitReport {
            train_path,
            validation_path,
            train: train.len(),
            validation: validation.len(),
            stats,
        })
    }
}
