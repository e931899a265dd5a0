// ============================================================
// Layer 4 — Label Vocabulary
// ============================================================
// Loads the class-label vocabulary file: UTF-8 text, one label
// per line, blank lines ignored. Line order defines the label
// indices, so the file is the single source of truth for the
// label ↔ index correspondence used everywhere else.
//
// Both lookup directions are kept:
//   label_to_index — "finance" → 1   (resolving user input)
//   index_to_label — 1 → "finance"   (naming model predictions)
//
// Duplicate lines are NOT rejected: a later occurrence simply
// overwrites the earlier label_to_index entry (last one wins),
// while the ordered list keeps every line. Feeding a file with
// duplicates therefore leaves the two mappings out of sync —
// garbage in, garbage out.
//
// Reference: Rust Book §8 (HashMaps)

use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path};

/// The ordered label vocabulary with both lookup mappings.
#[derive(Debug, Clone)]
pub struct LabelVocab {
    /// All labels, lowercased and trimmed, in file order
    labels: Vec<String>,

    /// label → position in the file
    label_to_index: HashMap<String, usize>,

    /// position in the file → label
    index_to_label: HashMap<usize, String>,
}

impl LabelVocab {
    /// Load the vocabulary from a one-label-per-line text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path    = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read label file '{}'", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Build the vocabulary from file content.
    /// Parsing cannot fail: every non-blank line is a label.
    fn parse(content: &str) -> Self {
        let labels: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        // Both maps are derived from the ordered list, so a label's
        // index is always its line position in the file
        let label_to_index: HashMap<String, usize> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), index))
            .collect();

        let index_to_label: HashMap<usize, String> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (index, label.clone()))
            .collect();

        Self { labels, label_to_index, index_to_label }
    }

    /// All labels in file order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels in the vocabulary
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the vocabulary file had no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up the index of a label name (case-insensitive,
    /// because the stored labels are already lowercased)
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(&label.to_lowercase()).copied()
    }

    /// Look up the label name for an index
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.index_to_label.get(&index).map(String::as_str)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_keep_file_order() {
        let vocab = LabelVocab::parse("sports\nfinance\n");
        assert_eq!(vocab.labels(), ["sports", "finance"]);
        assert_eq!(vocab.index_of("sports"),  Some(0));
        assert_eq!(vocab.index_of("finance"), Some(1));
    }

    #[test]
    fn test_mappings_roundtrip() {
        let vocab = LabelVocab::parse("sports\nfinance\ntech\n");
        assert_eq!(vocab.len(), 3);
        // Every label must map to an index that maps back to it
        for label in vocab.labels() {
            let index = vocab.index_of(label).unwrap();
            assert_eq!(vocab.name_of(index), Some(label.as_str()));
        }
    }

    #[test]
    fn test_lowercases_and_trims() {
        let vocab = LabelVocab::parse("  Sports \nFINANCE\n");
        assert_eq!(vocab.labels(), ["sports", "finance"]);
        // Lookup works regardless of the caller's casing
        assert_eq!(vocab.index_of("SPORTS"), Some(0));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let vocab = LabelVocab::parse("sports\n\n   \nfinance\n\n");
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.labels(), ["sports", "finance"]);
    }

    #[test]
    fn test_duplicate_label_last_wins() {
        let vocab = LabelVocab::parse("sports\nfinance\nsports\n");
        // The ordered list keeps all three lines...
        assert_eq!(vocab.labels().len(), 3);
        // ...but the name → index map collapses to the last occurrence
        assert_eq!(vocab.index_of("sports"), Some(2));
    }

    #[test]
    fn test_empty_file() {
        let vocab = LabelVocab::parse("");
        assert!(vocab.is_empty());
        assert_eq!(vocab.index_of("anything"), None);
        assert_eq!(vocab.name_of(0), None);
    }
}
