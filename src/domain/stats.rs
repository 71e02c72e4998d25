// Corpus statistics, computed on rendered example strings so the
// same numbers can be reported for a fresh run and for a corpus
// read back from disk.

use serde::{Deserialize, Serialize};

use crate::domain::example::Tag;
use crate::domain::markup;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total:         usize,
    /// Mean length in characters (not bytes)
    pub average_chars: f64,
    pub with_ayah:     usize,
    pub with_hadith:   usize,
    pub with_question: usize,
}

impl CorpusStats {
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let total = texts.len();
        if total == 0 {
            return Self::default();
        }

        let count = |tag: Tag| {
            texts
                .iter()
                .filter(|t| markup::extract(t.as_ref(), tag).is_some())
                .count()
        };
        let chars: usize = texts.iter().map(|t| t.as_ref().chars().count()).sum();

        Self {
            total,
            average_chars: chars as f64 / total as f64,
            with_ayah:     count(Tag::Ayah),
            with_hadith:   count(Tag::Hadith),
            with_question: count(Tag::Question),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus() {
        let stats = CorpusStats::from_texts::<String>(&[]);
        assert_eq!(stats, CorpusStats::default());
    }

    #[test]
    fn test_counts_tags() {
        let texts = [
            "<ayah>ab</ayah>",
            "<question>q</question> <ayah>ab</ayah>",
            "<hadith>cd</hadith>",
        ];
        let stats = CorpusStats::from_texts(&texts);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.with_ayah, 2);
        assert_eq!(stats.with_hadith, 1);
        assert_eq!(stats.with_question, 1);
    }

    #[test]
    fn test_average_counts_chars_not_bytes() {
        // "بسم" is 3 chars but 6 bytes
        let stats = CorpusStats::from_texts(&["بسم", "a"]);
        assert!((stats.average_chars - 2.0).abs() < f64::EPSILON);
    }
}
