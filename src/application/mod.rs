// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// command each.
//
// Rules for this layer:
//   - No parsing or tagging logic here (that's Layer 4)
//   - No printing here (that's Layer 1); progress goes through
//     the PipelineObserver or tracing
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// JSON sources → tagged, augmented corpus
pub mod prepare_use_case;

/// Corpus → seeded train/validation files
pub mod split_use_case;

/// Tokenizer → extended tokenizer + mobile vocab/config files
pub mod export_use_case;
