// ============================================================
// Layer 3 — Sample Domain Types
// ============================================================
// Represents one labelled, tokenised news example.
//
// The corpus stores 1-indexed integer labels; by the time a
// NewsSample exists the label has already been shifted to the
// 0-indexed form every loss function expects. Samples are
// created once at load time and never mutated afterwards.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// One fully tokenised training example.
/// input_ids and attention_mask always have the same length —
/// sequences are NOT padded here; padding happens per batch
/// in the collator, against the longest sample of that batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSample {
    /// 0-indexed class label (file value minus one)
    pub label: usize,

    /// Token id sequence produced by the tokenizer
    pub input_ids:      Vec<u32>,

    /// 1 = real token, 0 = padding (all 1s before collation)
    pub attention_mask: Vec<u32>,
}

impl NewsSample {
    /// Number of tokens in this example before any padding
    pub fn seq_len(&self) -> usize {
        self.input_ids.len()
    }
}

/// The raw output of a text encoder: parallel id and mask
/// sequences for one piece of text. This is the shape every
/// TextEncoder implementation must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedText {
    /// Integer ids of the sub-word units
    pub input_ids:      Vec<u32>,

    /// 1 for each real token position
    pub attention_mask: Vec<u32>,
}
