// ============================================================
// Layer 4 — Question Augmenter
// ============================================================
// Adds synthetic question examples after each original:
//
//   <ayah> body longer than 20 chars
//       → <question>What does this ayah mean: {first 50}...</question> + original
//   <hadith> body longer than 30 chars
//       → <question>Explain this hadith: {first 50}...</question> + original
//   any <word_analysis>
//       → <question>Analyze the words in this text</question> + original
//
// Output order: original, then its derived examples in the order
// above, then the next original. Lengths count chars, not bytes.
// Deterministic; originals are never changed or removed.

use serde::{Deserialize, Serialize};

use crate::domain::example::{Tag, TrainingExample};

pub const WORD_ANALYSIS_QUESTION: &str = "Analyze the words in this text";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AugmentConfig {
    /// `<ayah>` bodies longer than this get a question
    pub ayah_min_chars:   usize,
    /// `<hadith>` bodies longer than this get a question
    pub hadith_min_chars: usize,
    /// Characters of the body quoted in the question
    pub preview_chars:    usize,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            ayah_min_chars:   20,
            hadith_min_chars: 30,
            preview_chars:    50,
        }
    }
}

pub struct Augmenter {
    config: AugmentConfig,
}

impl Augmenter {
    pub fn new(config: AugmentConfig) -> Self {
        Self { config }
    }

    pub fn augment(&self, examples: Vec<TrainingExample>) -> Vec<TrainingExample> {
        let mut out = Vec::with_capacity(examples.len() * 2);
        for example in examples {
            let derived = self.derive(&example);
            out.push(example);
            out.extend(derived);
        }
        out
    }

    /// Questions derived from one example, in output order
    fn derive(&self, example: &TrainingExample) -> Vec<TrainingExample> {
        let cfg = &self.config;
        let mut derived = Vec::new();

        if let Some(body) = example.inner(Tag::Ayah) {
            if body.chars().count() > cfg.ayah_min_chars {
                let q = format!("What does this ayah mean: {}...", self.preview(body));
                derived.push(example.with_question(q));
            }
        }

        if let Some(body) = example.inner(Tag::Hadith) {
            if body.chars().count() > cfg.hadith_min_chars {
                let q = format!("Explain this hadith: {}...", self.preview(body));
                derived.push(example.with_question(q));
            }
        }

        if example.contains(Tag::WordAnalysis) {
            derived.push(example.with_question(WORD_ANALYSIS_QUESTION));
        }

        derived
    }

    fn preview(&self, body: &str) -> String {
        body.chars().take(self.config.preview_chars).collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::ExampleBuilder;

    fn augmenter() -> Augmenter {
        Augmenter::new(AugmentConfig::default())
    }

    fn ayah(body: &str) -> TrainingExample {
        ExampleBuilder::new()
            .tag(Tag::Ayah, body)
            .tag(Tag::Context, "Surah 1:1 - Al-Fatihah")
            .build()
    }

    fn hadith(body: &str) -> TrainingExample {
        ExampleBuilder::new()
            .tag(Tag::Hadith, body)
            .tag(Tag::Context, "Bukhari")
            .build()
    }

    #[test]
    fn test_long_ayah_gets_one_question() {
        let long = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ"; // > 20 chars
        let out  = augmenter().augment(vec![ayah(long)]);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], ayah(long));
        assert_eq!(out[1].segments()[0].tag, Tag::Question);
        assert_eq!(&out[1].segments()[1..], ayah(long).segments());
        assert!(out[1].to_string().ends_with(&ayah(long).to_string()));
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let exactly_20 = "a".repeat(20);
        let out = augmenter().augment(vec![ayah(&exactly_20)]);
        assert_eq!(out.len(), 1);

        let exactly_30 = "b".repeat(30);
        let out = augmenter().augment(vec![hadith(&exactly_30)]);
        assert_eq!(out.len(), 1);

        let out = augmenter().augment(vec![hadith(&"b".repeat(31))]);
        assert_eq!(out.len(), 2);
        assert!(out[1].inner(Tag::Question).unwrap().starts_with("Explain this hadith: "));
    }

    #[test]
    fn test_preview_is_first_fifty_chars_plus_ellipsis() {
        let body = "ا".repeat(80);
        let out  = augmenter().augment(vec![ayah(&body)]);
        let q    = out[1].inner(Tag::Question).unwrap();
        assert_eq!(q, format!("What does this ayah mean: {}...", "ا".repeat(50)));
    }

    #[test]
    fn test_word_analysis_question() {
        let ex = ExampleBuilder::new()
            .tag(Tag::Ayah, "short")
            .tag(Tag::WordAnalysis, "x:y")
            .build();
        let out = augmenter().augment(vec![ex.clone()]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], ex.with_question(WORD_ANALYSIS_QUESTION));
    }

    #[test]
    fn test_ayah_and_word_analysis_both_derive_in_order() {
        let ex = ExampleBuilder::new()
            .tag(Tag::Ayah, "x".repeat(25))
            .tag(Tag::WordAnalysis, "x:y")
            .build();
        let out = augmenter().augment(vec![ex]);
        assert_eq!(out.len(), 3);
        assert!(out[1].inner(Tag::Question).unwrap().starts_with("What does this ayah mean"));
        assert_eq!(out[2].inner(Tag::Question), Some(WORD_ANALYSIS_QUESTION));
    }

    #[test]
    fn test_originals_keep_relative_order_and_output_is_deterministic() {
        let inputs: Vec<TrainingExample> = (0..10)
            .map(|i| if i % 2 == 0 { ayah(&"x".repeat(10 + i * 3)) } else { hadith(&"y".repeat(10 + i * 3)) })
            .collect();

        let augmenter = augmenter();
        let out       = augmenter.augment(inputs.clone());
        assert!(out.len() >= inputs.len());
        assert_eq!(out, augmenter.augment(inputs.clone()));

        // originals are exactly the examples without a question, in input order
        let originals: Vec<&TrainingExample> =
            out.iter().filter(|e| !e.contains(Tag::Question)).collect();
        assert_eq!(originals, inputs.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_thresholds() {
        let cfg = AugmentConfig { ayah_min_chars: 2, hadith_min_chars: 2, preview_chars: 3 };
        let out = Augmenter::new(cfg).augment(vec![ayah("abcdef")]);
        assert_eq!(out[1].inner(Tag::Question), Some("What does this ayah mean: abc..."));
    }
}
