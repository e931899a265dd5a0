// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw corpus files
// all the way to GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   labels.txt
//       │
//       ▼
//   LabelVocab        → ordered labels + both index mappings
//
//   train.csv  (one "<label>,<text>" record per line)
//       │
//       ▼
//   NewsDataset       → parses, truncates, tokenises eagerly;
//       │               implements Burn's Dataset trait
//       ▼
//   NewsBatcher       → right-pads to the batch maximum and
//       │               stacks samples into integer tensors
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

use serde::{Deserialize, Serialize};

/// Loads the label vocabulary file
pub mod vocab;

/// Eagerly loads and tokenises the labelled corpus
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

// ─── Data Configuration ───────────────────────────────────────────────────────
// Everything the dataset needs to locate and bound its inputs.
// Serialisable so a run's data settings can be written next to
// its outputs and reloaded later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Root directory that all data files live under
    pub data_root:  String,

    /// Path of the label vocabulary file, relative to data_root
    pub label_path: String,

    /// Maximum number of characters of raw text kept per record
    /// before tokenisation (character count, NOT token count)
    pub max_length: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_root:  "data".to_string(),
            label_path: "labels.txt".to_string(),
            max_length: 2048,
        }
    }
}
