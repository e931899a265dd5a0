// ============================================================
// Layer 2 — Labels Use Case
// ============================================================
// Loads the label vocabulary and renders it as a table of
// index ↔ name pairs. The indices shown here are exactly the
// 0-indexed labels stored in loaded datasets, so this is the
// quickest way to sanity-check a corpus against its vocabulary.

use anyhow::Result;
use std::path::Path;

use crate::data::vocab::LabelVocab;

pub struct LabelsUseCase {
    data_root:  String,
    label_path: String,
}

impl LabelsUseCase {
    pub fn new(data_root: String, label_path: String) -> Self {
        Self { data_root, label_path }
    }

    /// Load the vocabulary and return the listing text.
    pub fn execute(&self) -> Result<String> {
        let path  = Path::new(&self.data_root).join(&self.label_path);
        let vocab = LabelVocab::load(&path)?;

        let mut listing = format!(
            "{} labels in '{}':\n",
            vocab.len(),
            path.display(),
        );

        for (index, label) in vocab.labels().iter().enumerate() {
            listing.push_str(&format!("  {:>3}  {}\n", index, label));
        }

        Ok(listing)
    }
}
