// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns that sit at the edge of the corpus pipeline:
//
//   tokenizer_store.rs — loads a HuggingFace tokenizer.json,
//                        registers the tag vocabulary as special
//                        tokens, and saves the extended tokenizer.
//                        Also reads special_tokens_map.json.
//
//   mobile_bundle.rs   — the vocabulary and model-config JSON
//                        files shipped next to the converted
//                        on-device model.
//
//   observer.rs        — TracingObserver, the PipelineObserver
//                        used by the CLI.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Tokenizer loading, tag-token extension and saving
pub mod tokenizer_store;

/// islamic_vocab.json and model_config.json
pub mod mobile_bundle;

/// Progress events → tracing
pub mod observer;
