// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Prepares the tokenizer-side files of a mobile bundle:
//
//   Step 1: Load the fine-tuned model's tokenizer.json   (Layer 6)
//   Step 2: Register the tag vocabulary as special tokens
//   Step 3: Save the extended tokenizer                  (Layer 6)
//   Step 4: Write islamic_vocab.json                     (Layer 6)
//   Step 5: Write model_config.json                      (Layer 6)
//
// The converted model binary itself comes from the external
// converter; model_config.json only names it.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infra::{
    mobile_bundle::{write_json, ModelConfig, VocabFile},
    tokenizer_store::{self, TokenizerStore},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub tokenizer:   PathBuf,
    pub output_dir:  PathBuf,
    pub model_file:  String,
    pub vocab_file:  String,
    pub max_seq_len: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tokenizer:   PathBuf::from("islamic_model/tokenizer.json"),
            output_dir:  PathBuf::from("assets/models"),
            model_file:  "islamic_model.tflite".to_string(),
            vocab_file:  "islamic_vocab.json".to_string(),
            max_seq_len: 512,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub tokenizer:    PathBuf,
    pub vocab:        PathBuf,
    pub model_config: PathBuf,
    pub vocab_size:   usize,
    pub tags_added:   usize,
}

pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<ExportReport> {
        let cfg = &self.config;

        // ── Step 1–2: Load and extend ────────────────────────────────────────
        let store         = TokenizerStore::new(&cfg.tokenizer);
        let mut tokenizer = store.load()?;
        let tags_added    = tokenizer_store::extend_with_tags(&mut tokenizer);

        // ── Step 3: Save extended tokenizer ──────────────────────────────────
        let tokenizer_path = cfg.output_dir.join("tokenizer.json");
        tokenizer_store::save(&tokenizer, &tokenizer_path)?;

        // ── Step 4: Vocabulary file ──────────────────────────────────────────
        let vocab      = VocabFile::from_vocab(tokenizer.get_vocab(true), store.special_tokens()?);
        let vocab_size = vocab.vocab_size;
        let vocab_path = cfg.output_dir.join(&cfg.vocab_file);
        write_json(&vocab_path, &vocab)?;

        // ── Step 5: Model config ─────────────────────────────────────────────
        let model_config = ModelConfig::new(&cfg.model_file, &cfg.vocab_file, cfg.max_seq_len, vocab_size);
        let config_path  = cfg.output_dir.join("model_config.json");
        write_json(&config_path, &model_config)?;

        tracing::info!(
            "Exported vocabulary of {} tokens to '{}'",
            vocab_size,
            cfg.output_dir.display()
        );

        Ok(ExportReport {
            tokenizer:    tokenizer_path,
            vocab:        vocab_path,
            model_config: config_path,
            vocab_size,
            tags_added,
        })
    }
}
