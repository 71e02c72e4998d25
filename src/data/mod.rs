// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from raw JSON files to the written corpus.
//
//   quran / hadith / tafsir .json
//       │
//       ▼
//   QuranSource / HadithSource / TafsirSource
//       │        (parse + Normalizer on every text field)
//       ▼
//   Record (Ayah | Hadith | Tafsir)
//       │
//       ▼
//   Serializer        → TrainingExample(s) per record
//       │
//       ▼
//   Augmenter         → originals + derived <question> examples
//       │
//       ▼
//   write_examples    → corpus.json + corpus.txt
//
// The split command reuses the written JSON:
//
//   corpus.json → split_train_val → train.json + validation.json
//
// Reference: Rust Book §13 (Iterators and Closures)

/// JSON schemas and the three RecordSource implementations
pub mod loader;

/// Unicode decomposition and whitespace collapsing
pub mod preprocessor;

/// Record → tagged TrainingExample
pub mod serializer;

/// Synthetic question examples
pub mod augmenter;

/// JSON array + inspection sample output
pub mod writer;

/// Seeded shuffle and train/validation split
pub mod splitter;
