// ============================================================
// Layer 5 — Tokenizer Store
// ============================================================
// Manages tokenizer building, saving, and loading.
//
// In tokenizers 0.15, train_from_files requires Trainer::Model
// to equal ModelWrapper. The correct approach is to build the
// tokenizer JSON manually and load it, bypassing the trainer
// type mismatch entirely.
//
// The dataset never sees tokenizers types directly — this file
// also adapts Tokenizer to the domain TextEncoder trait, so the
// data layer stays testable with stub encoders.
//
// Reference: Sennrich et al. (2016) BPE paper

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::domain::sample::TokenizedText;
use crate::domain::traits::TextEncoder;

/// The pad token id written into every tokenizer this store
/// builds. Kept public so batching defaults can agree with it.
pub const PAD_ID: u32 = 0;

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    fn tokenizer_path(&self) -> PathBuf {
        self.dir.join("tokenizer.json")
    }

    /// True if a tokenizer has already been saved in this store
    pub fn exists(&self) -> bool {
        self.tokenizer_path().exists()
    }

    /// Load a previously saved tokenizer from its JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.tokenizer_path();
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))
    }

    /// Build a word-level vocabulary from the corpus texts and
    /// write a valid tokenizer JSON directly — this bypasses
    /// the train_from_files ModelWrapper type mismatch in
    /// tokenizers 0.15 entirely.
    pub fn build_and_save(&self, texts: &[String], vocab_size: usize) -> Result<Tokenizer> {
        std::fs::create_dir_all(&self.dir).ok();

        // ── Step 1: Count word frequencies across the corpus ──────────────────
        use std::collections::HashMap;
        let mut freq: HashMap<String, usize> = HashMap::new();

        for text in texts {
            for word in text.split_whitespace() {
                // Normalise to lowercase for consistency
                let word = word.to_lowercase();
                // Strip punctuation from edges
                let word = word.trim_matches(|c: char| !c.is_alphanumeric());
                if !word.is_empty() {
                    *freq.entry(word.to_string()).or_insert(0) += 1;
                }
            }
        }

        // ── Step 2: Rank words deterministically ──────────────────────────────
        // Sort by frequency descending; ties break alphabetically
        // so rebuilding from the same corpus assigns identical ids
        let mut words: Vec<(String, usize)> = freq.into_iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        // Reserve 5 slots for the special tokens below
        let max_words = vocab_size.saturating_sub(5);
        words.truncate(max_words);

        // ── Step 3: Build the vocab JSON ──────────────────────────────────────
        // Special tokens get fixed ids matching BERT convention;
        // PAD_ID must stay 0 so padded batches agree with it
        let mut vocab = serde_json::json!({
            "[PAD]":  PAD_ID,
            "[UNK]":  1,
            "[CLS]":  101,
            "[SEP]":  102,
            "[MASK]": 103,
        });

        let mut next_id = 104usize;
        for (word, _) in &words {
            // Skip if the word collides with a special token
            if vocab.get(word).is_none() {
                vocab[word] = serde_json::json!(next_id);
                next_id += 1;
            }
        }

        // ── Step 4: Write the tokenizer JSON in HuggingFace format ────────────
        // This format is what Tokenizer::from_file() expects
        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [
                {"id": 0,   "content": "[PAD]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 1,   "content": "[UNK]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 101, "content": "[CLS]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 102, "content": "[SEP]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 103, "content": "[MASK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
            ],
            "normalizer": {
                "type": "BertNormalizer",
                "clean_text": true,
                "handle_chinese_chars": true,
                "strip_accents": null,
                "lowercase": true
            },
            "pre_tokenizer": {
                "type": "Whitespace"
            },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": "[UNK]"
            }
        });

        let path = self.tokenizer_path();
        std::fs::write(
            &path,
            serde_json::to_string_pretty(&tokenizer_json)?
        ).with_context(|| "Cannot write tokenizer JSON")?;

        tracing::info!(
            "Tokenizer built with {} words, saved to '{}'",
            next_id,
            path.display()
        );

        // Load back as a proper Tokenizer instance
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!("Cannot reload tokenizer: {e}"))
    }
}

// ─── TextEncoder Adapter ──────────────────────────────────────────────────────
// The dataset loader asks for "something that encodes text";
// this is where the HuggingFace tokenizer becomes that thing.
impl TextEncoder for Tokenizer {
    fn encode_text(&self, text: &str) -> Result<TokenizedText> {
        let encoding = self
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;

        Ok(TokenizedText {
            input_ids:      encoding.get_ids().to_vec(),
            attention_mask: encoding.get_attention_mask().to_vec(),
        })
    }
}
