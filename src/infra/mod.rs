// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in any
// specific business layer:
//
//   tokenizer_store.rs — Tokenizer persistence
//                        Loads a previously saved tokenizer, or
//                        builds a word-level one from the corpus
//                        texts and saves it. Ensures the same
//                        vocabulary is used across runs. Also
//                        adapts tokenizers::Tokenizer to the
//                        domain TextEncoder trait.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Tokenizer building, saving, and loading
pub mod tokenizer_store;
