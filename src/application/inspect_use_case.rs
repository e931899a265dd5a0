// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Orchestrates the full data pipeline in order and reports
// what a training run would actually feed the model:
//
//   Step 1: Load / build the tokenizer   (Layer 5 - infra)
//   Step 2: Load + tokenise the corpus   (Layer 4 - data)
//   Step 3: Summarise label distribution (Layer 4 - data)
//   Step 4: Preview individual samples   (Layer 4 - data)
//   Step 5: Collate one preview batch    (Layer 4 - data)
//
// The collation step runs on the ndarray backend so inspection
// works on any machine, GPU or not.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

use burn::data::dataloader::batcher::Batcher;

use crate::data::{
    batcher::{MaskPadding, NewsBatcher},
    dataset::{read_corpus_texts, NewsDataset},
    DataConfig,
};
use crate::infra::tokenizer_store::{TokenizerStore, PAD_ID};

// Inspection has no gradients to compute, so the plain CPU
// backend is always sufficient
type InspectBackend = burn::backend::NdArray;

// ─── Inspect Configuration ───────────────────────────────────────────────────
// All settings for an inspection run.
// Serialisable so a run's settings can be saved and reloaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    pub data:          DataConfig,
    pub source:        String,
    pub tokenizer_dir: String,
    pub vocab_size:    usize,
    pub batch_size:    usize,
    pub pad_id:        u32,
    pub mask_padding:  MaskPadding,
    pub show:          usize,
    pub only_label:    Option<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            data:          DataConfig::default(),
            source:        "train.csv".to_string(),
            tokenizer_dir: "tokenizer".to_string(),
            vocab_size:    30522,
            batch_size:    8,
            pad_id:        PAD_ID,
            mask_padding:  MaskPadding::Zeros,
            show:          3,
            only_label:    None,
        }
    }
}

// ─── InspectUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the full inspection pipeline.
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    /// Create a new InspectUseCase with the given configuration
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline end to end and return the report text.
    /// Printing is left to the CLI layer.
    pub fn execute(&self) -> Result<String> {
        let cfg         = &self.config;
        let corpus_path = Path::new(&cfg.data.data_root).join(&cfg.source);

        // ── Step 1: Load or build the tokenizer ──────────────────────────────
        // A saved tokenizer is reused so token ids stay stable
        // across runs; otherwise one is built from this corpus.
        let store     = TokenizerStore::new(&cfg.tokenizer_dir);
        let tokenizer = if store.exists() {
            tracing::info!("Loading existing tokenizer from '{}'", cfg.tokenizer_dir);
            store.load()?
        } else {
            tracing::info!("Building new tokenizer (vocab_size={})", cfg.vocab_size);
            let texts = read_corpus_texts(&corpus_path)?;
            store.build_and_save(&texts, cfg.vocab_size)?
        };

        // ── Step 2: Load and tokenise the corpus ─────────────────────────────
        // The dataset logs its own start / record-count messages
        let dataset = NewsDataset::load(&cfg.data, &cfg.source, &tokenizer)?;
        let vocab   = dataset.label_vocab();

        let mut report = String::new();
        report.push_str(&format!(
            "Corpus '{}': {} records, {} labels in vocabulary\n",
            cfg.source,
            dataset.sample_count(),
            vocab.len(),
        ));

        // ── Step 3: Label distribution ───────────────────────────────────────
        // BTreeMap keeps the listing ordered by label index
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for sample in dataset.samples() {
            *counts.entry(sample.label).or_insert(0) += 1;
        }

        report.push_str("\nLabel distribution:\n");
        for (index, count) in &counts {
            // A corpus label outside the vocabulary is worth seeing,
            // not worth hiding behind an error
            let name = vocab.name_of(*index).unwrap_or("<not in vocabulary>");
            report.push_str(&format!("  {:>3}  {:<16} {}\n", index, name, count));
        }

        // ── Step 4: Sample preview ───────────────────────────────────────────
        // Optionally narrowed to one label name
        let label_filter = match &cfg.only_label {
            Some(name) => match vocab.index_of(name) {
                Some(index) => Some(index),
                None => bail!("label '{}' is not in the vocabulary", name),
            },
            None => None,
        };

        report.push_str("\nSample preview:\n");
        let preview = dataset
            .samples()
            .iter()
            .filter(|sample| label_filter.map_or(true, |index| sample.label == index))
            .take(cfg.show);

        for sample in preview {
            let name = vocab.name_of(sample.label).unwrap_or("<not in vocabulary>");
            let head: Vec<u32> = sample.input_ids.iter().take(12).copied().collect();
            report.push_str(&format!(
                "  label {} ({}), {} tokens, ids {:?}...\n",
                sample.label,
                name,
                sample.seq_len(),
                head,
            ));
        }

        // ── Step 5: Collate one preview batch ────────────────────────────────
        // Exactly what a DataLoader would hand the model, shapes
        // included — the padded width is this batch's longest sample
        let preview_len = cfg.batch_size.min(dataset.sample_count());
        let items: Vec<_> = dataset.samples()[..preview_len].to_vec();

        if !items.is_empty() {
            let device  = Default::default();
            let batcher = NewsBatcher::<InspectBackend>::new(
                device,
                cfg.pad_id,
                cfg.mask_padding,
            );
            let batch = batcher.batch(items);

            report.push_str(&format!(
                "\nPreview batch ({:?} mask padding):\n  labels          {:?}\n  input_ids       {:?}\n  attention_mask  {:?}\n",
                cfg.mask_padding,
                batch.labels.dims(),
                batch.input_ids.dims(),
                batch.attention_mask.dims(),
            ));
        }

        Ok(report)
    }
}
