// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. The dataset loader only needs "something
// that turns text into ids and a mask" — it does not care
// whether that is a HuggingFace tokenizer, a word-level
// lookup table, or a test stub.
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::sample::TokenizedText;

// ─── TextEncoder ──────────────────────────────────────────────────────────────
/// Any component that can turn a piece of raw text into a
/// token-id sequence with a matching attention mask.
///
/// Implementations:
///   - tokenizers::Tokenizer → HuggingFace tokenizer (infra layer)
///   - test stubs            → deterministic encoders in unit tests
pub trait TextEncoder {
    /// Encode one piece of text. The returned input_ids and
    /// attention_mask must have the same length.
    fn encode_text(&self, text: &str) -> Result<TokenizedText>;
}
