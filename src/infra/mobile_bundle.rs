// ============================================================
// Layer 6 — Mobile Bundle Files
// ============================================================
// The on-device app ships three files side by side:
//
//   islamic_model.tflite  ← produced by the external converter
//   islamic_vocab.json    ← VocabFile below
//   model_config.json     ← ModelConfig below
//
// This module only writes the two JSON files; the model artifact
// is referenced by name.
//
//   islamic_vocab.json:
//     { "vocab": [token ordered by id],
//       "vocab_index": { token: id },
//       "vocab_size": N,
//       "special_tokens": { "pad_token", "unk_token", "bos_token", "eos_token" } }

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use crate::infra::tokenizer_store::SpecialTokens;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabFile {
    pub vocab:          Vec<String>,
    pub vocab_index:    BTreeMap<String, u32>,
    pub vocab_size:     usize,
    pub special_tokens: SpecialTokens,
}

impl VocabFile {
    /// Build from a token → id map (e.g. `Tokenizer::get_vocab(true)`)
    pub fn from_vocab(index: HashMap<String, u32>, special_tokens: SpecialTokens) -> Self {
        let mut by_id: Vec<(&String, &u32)> = index.iter().collect();
        by_id.sort_by_key(|(token, id)| (**id, (*token).clone()));
        let vocab: Vec<String> = by_id.into_iter().map(|(t, _)| t.clone()).collect();

        Self {
            vocab_size: vocab.len(),
            vocab,
            vocab_index: index.into_iter().collect(),
            special_tokens,
        }
    }
}

/// Descriptive config the app reads before loading the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model_name:          String,
    pub version:             String,
    pub model_path:          String,
    pub vocab_path:          String,
    pub max_sequence_length: usize,
    pub vocab_size:          usize,
    pub model_type:          String,
    pub language:            String,
    pub description:         String,
    pub training_data:       Vec<String>,
    pub capabilities:        Vec<String>,
}

impl ModelConfig {
    pub fn new(
        model_file:  &str,
        vocab_file:  &str,
        max_seq_len: usize,
        vocab_size:  usize,
    ) -> Self {
        Self {
            model_name:          "Islamic AI Model".to_string(),
            version:             "1.0.0".to_string(),
            model_path:          model_file.to_string(),
            vocab_path:          vocab_file.to_string(),
            max_sequence_length: max_seq_len,
            vocab_size,
            model_type:          "causal_lm".to_string(),
            language:            "arabic".to_string(),
            description:
                "Custom Islamic AI model trained on Quran, Hadith, and Islamic texts".to_string(),
            training_data: ["Quran", "Sahih Bukhari", "Sahih Muslim", "Tafsir Ibn Kathir"]
                .map(String::from)
                .to_vec(),
            capabilities: [
                "word_analysis",
                "hadith_search",
                "quranic_insights",
                "thematic_analysis",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Write any serializable value as pretty UTF-8 JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    tracing::debug!("Wrote '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_ordered_by_id() {
        let index: HashMap<String, u32> = [("b", 2), ("<ayah>", 5), ("a", 0), ("[UNK]", 1)]
            .into_iter()
            .map(|(t, i)| (t.to_string(), i))
            .collect();
        let file = VocabFile::from_vocab(index, SpecialTokens::default());

        assert_eq!(file.vocab, vec!["a", "[UNK]", "b", "<ayah>"]);
        assert_eq!(file.vocab_size, 4);
        assert_eq!(file.vocab_index["<ayah>"], 5);
    }

    #[test]
    fn test_vocab_file_json_shape() {
        let special = SpecialTokens { eos_token: Some("</s>".into()), ..Default::default() };
        let file    = VocabFile::from_vocab(HashMap::from([("x".to_string(), 0)]), special);
        let json: serde_json::Value = serde_json::to_value(&file).unwrap();

        assert_eq!(json["vocab_size"], 1);
        assert_eq!(json["special_tokens"]["eos_token"], "</s>");
        assert!(json["special_tokens"]["pad_token"].is_null());
    }

    #[test]
    fn test_model_config_fields() {
        let cfg  = ModelConfig::new("islamic_model.tflite", "islamic_vocab.json", 512, 42);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["model_path"], "islamic_model.tflite");
        assert_eq!(json["max_sequence_length"], 512);
        assert_eq!(json["vocab_size"], 42);
        assert_eq!(json["capabilities"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_write_json_creates_directory() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets/models/model_config.json");
        write_json(&path, &ModelConfig::new("m", "v", 256, 1)).unwrap();
        let back: ModelConfig = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.max_sequence_length, 256);
    }
}
