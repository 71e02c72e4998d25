// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads a HuggingFace `tokenizer.json`, registers the corpus tag
// vocabulary as special tokens, and saves the extended tokenizer.
//
// Every tag contributes two tokens, `<tag>` and `</tag>`, so a
// tag segment is never split into sub-word pieces during
// fine-tuning. Registration order follows Tag::ALL, which keeps
// the new token ids stable across runs.
//
// Pad/unk/bos/eos names are read from a sibling
// `special_tokens_map.json` when the model directory has one.
// A missing pad token falls back to the eos token, as causal
// LM fine-tuning does.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokenizers::{AddedToken, Tokenizer};

use crate::domain::example::Tag;

/// Every `<tag>` / `</tag>` token, in Tag::ALL order
pub fn tag_tokens() -> Vec<String> {
    Tag::ALL
        .iter()
        .flat_map(|tag| [tag.open(), tag.close()])
        .collect()
}

/// The four role tokens written to the mobile vocabulary file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    pub pad_token: Option<String>,
    pub unk_token: Option<String>,
    pub bos_token: Option<String>,
    pub eos_token: Option<String>,
}

/// `special_tokens_map.json` values are either a bare string or
/// an object with a `content` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenEntry {
    Plain(String),
    Detailed { content: String },
}

impl TokenEntry {
    fn into_content(self) -> String {
        match self {
            TokenEntry::Plain(s)              => s,
            TokenEntry::Detailed { content }  => content,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSpecialTokensMap {
    pad_token: Option<TokenEntry>,
    unk_token: Option<TokenEntry>,
    bos_token: Option<TokenEntry>,
    eos_token: Option<TokenEntry>,
}

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the tokenizer JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        Tokenizer::from_file(&self.path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", self.path.display(), e
            ))
    }

    /// Role tokens from `special_tokens_map.json` next to the tokenizer.
    /// Absent file → every role is None (pad still falls back to eos).
    pub fn special_tokens(&self) -> Result<SpecialTokens> {
        let map_path = self
            .path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("special_tokens_map.json");

        let raw = if map_path.exists() {
            let text = std::fs::read_to_string(&map_path)
                .with_context(|| format!("Cannot read '{}'", map_path.display()))?;
            serde_json::from_str::<RawSpecialTokensMap>(&text)
                .with_context(|| format!("Malformed special tokens map '{}'", map_path.display()))?
        } else {
            tracing::debug!("No special_tokens_map.json beside '{}'", self.path.display());
            RawSpecialTokensMap::default()
        };

        let eos_token = raw.eos_token.map(TokenEntry::into_content);
        Ok(SpecialTokens {
            pad_token: raw.pad_token.map(TokenEntry::into_content).or_else(|| eos_token.clone()),
            unk_token: raw.unk_token.map(TokenEntry::into_content),
            bos_token: raw.bos_token.map(TokenEntry::into_content),
            eos_token,
        })
    }
}

/// Register the tag tokens as special tokens. Returns how many
/// were new to the tokenizer.
pub fn extend_with_tags(tokenizer: &mut Tokenizer) -> usize {
    let tokens: Vec<AddedToken> = tag_tokens()
        .into_iter()
        .map(|t| AddedToken::from(t, true))
        .collect();
    let added = tokenizer.add_special_tokens(&tokens);
    tracing::info!("Registered {} tag tokens ({} new)", tokens.len(), added);
    added
}

/// Save a tokenizer as pretty JSON, creating the parent directory
pub fn save(tokenizer: &Tokenizer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }
    tokenizer
        .save(path, true)
        .map_err(|e| anyhow::anyhow!("Cannot save tokenizer to '{}': {}", path.display(), e))
}

// ─── Test fixture ─────────────────────────────────────────────────────────────
/// Write a tiny word-level tokenizer.json into `dir` (tests only)
#[cfg(test)]
pub(crate) fn write_fixture_tokenizer(dir: &Path) -> PathBuf {
    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": { "[PAD]": 0, "[UNK]": 1, "allah": 2, "mercy": 3, "the": 4 },
            "unk_token": "[UNK]"
        }
    });
    let path = dir.join("tokenizer.json");
    std::fs::write(&path, serde_json::to_string_pretty(&tokenizer_json).unwrap()).unwrap();
    path
}
