// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define the core
// concepts of the corpus pipeline.
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenizer or model code
//   - Only plain Rust types and the traits other layers implement
//
//   records.rs  — Ayah, Hadith and Tafsir records after cleaning
//   example.rs  — the closed tag vocabulary and TrainingExample
//   markup.rs   — escaping and non-greedy tag extraction
//   traits.rs   — RecordSource and PipelineObserver seams
//   stats.rs    — corpus statistics over rendered examples
//   error.rs    — the pipeline error taxonomy
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Normalized source records (one per ayah, hadith or tafsir verse)
pub mod records;

/// Tag vocabulary and the segment list that renders to a training string
pub mod example;

/// Escape/unescape of tag bodies and `<tag>(.*?)</tag>` extraction
pub mod markup;

/// Core abstractions (traits) that other layers implement
pub mod traits;

/// Totals and tag counts reported after a run
pub mod stats;

/// Error taxonomy shared by the data and application layers
pub mod error;
