// ============================================================
// Layer 4 — News Dataset
// ============================================================
// Eagerly loads an entire labelled corpus into memory:
// every record is parsed, truncated, and tokenised up front,
// then the dataset is read-only for the rest of the run.
//
// Corpus file format (UTF-8, one record per line):
//
//   <label_integer>,<text>
//
// Only the FIRST comma is a delimiter — any further commas
// belong to the text. Labels in the file are 1-indexed and are
// shifted to 0-indexed here, because that is what every loss
// function and the label vocabulary expect.
//
// Loading is all-or-nothing: a malformed line (missing comma,
// non-integer label) aborts the whole load with the offending
// line number. A training run on silently half-loaded data is
// far worse than a failed one.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use burn::data::dataset::Dataset;
use std::{fs, path::Path};

use crate::data::vocab::LabelVocab;
use crate::data::DataConfig;
use crate::domain::sample::NewsSample;
use crate::domain::traits::TextEncoder;

// ─── Raw Records ──────────────────────────────────────────────────────────────
/// One parsed corpus line before tokenisation.
/// The label is already 0-indexed; the text is verbatim.
#[derive(Debug)]
struct RawRecord {
    label: usize,
    text:  String,
}

/// Parse the whole corpus content into raw records.
/// Blank lines are skipped; any malformed line fails the load.
fn parse_records(content: &str) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // split_once splits on the FIRST comma only, so commas
        // inside the text survive untouched
        let Some((raw_label, text)) = line.split_once(',') else {
            bail!(
                "line {}: expected '<label>,<text>' but found no comma",
                line_no + 1
            );
        };

        let parsed: usize = raw_label.trim().parse().with_context(|| {
            format!("line {}: label '{}' is not an integer", line_no + 1, raw_label)
        })?;

        // File labels are 1-indexed. A literal 0 has no valid
        // 0-indexed counterpart, so it is an input error too.
        let Some(label) = parsed.checked_sub(1) else {
            bail!("line {}: labels are 1-indexed, found 0", line_no + 1);
        };

        records.push(RawRecord { label, text: text.to_string() });
    }

    Ok(records)
}

/// Read just the record texts from a corpus file, e.g. to build
/// a tokenizer vocabulary before the dataset itself exists.
/// Validates the full record format so errors surface early.
pub fn read_corpus_texts(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path    = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read corpus file '{}'", path.display()))?;

    let texts = parse_records(&content)?
        .into_iter()
        .map(|record| record.text)
        .collect();

    Ok(texts)
}

// ─── Truncation ───────────────────────────────────────────────────────────────
/// Clip text to at most `max_chars` characters.
///
/// The bound is on raw CHARACTERS of input text, not on tokens:
/// the tokenised sequence may still be shorter or longer than
/// max_chars. Counting chars (not bytes) keeps the cut safe on
/// multi-byte text — slicing by bytes could split a code point
/// and panic.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Tokenise raw records into samples via the given encoder.
fn tokenize_records(
    records:    &[RawRecord],
    max_length: usize,
    encoder:    &impl TextEncoder,
) -> Result<Vec<NewsSample>> {
    let mut samples = Vec::with_capacity(records.len());

    for record in records {
        let clipped = truncate_chars(&record.text, max_length);
        let encoded = encoder.encode_text(clipped)?;

        // Every encoder must produce parallel sequences; the
        // collator relies on this invariant when padding
        if encoded.input_ids.len() != encoded.attention_mask.len() {
            bail!(
                "encoder produced {} ids but {} mask values",
                encoded.input_ids.len(),
                encoded.attention_mask.len()
            );
        }

        samples.push(NewsSample {
            label:          record.label,
            input_ids:      encoded.input_ids,
            attention_mask: encoded.attention_mask,
        });
    }

    Ok(samples)
}

// ─── NewsDataset ──────────────────────────────────────────────────────────────
/// The fully loaded, tokenised corpus plus its label vocabulary.
/// Construction does all the work; afterwards the dataset only
/// hands out samples by index.
pub struct NewsDataset {
    samples: Vec<NewsSample>,
    vocab:   LabelVocab,
}

impl NewsDataset {
    /// Load a corpus file (relative to the configured data root),
    /// tokenising every record through `encoder`.
    pub fn load(
        config:  &DataConfig,
        source:  &str,
        encoder: &impl TextEncoder,
    ) -> Result<Self> {
        let root  = Path::new(&config.data_root);
        let vocab = LabelVocab::load(root.join(&config.label_path))?;

        let path = root.join(source);
        tracing::info!("Reading data from '{}'", path.display());

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read corpus file '{}'", path.display()))?;
        let records = parse_records(&content)?;
        let samples = tokenize_records(&records, config.max_length, encoder)?;

        tracing::info!("{} data records loaded", samples.len());

        Ok(Self { samples, vocab })
    }

    /// Number of loaded examples
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// All loaded samples, in file order
    pub fn samples(&self) -> &[NewsSample] {
        &self.samples
    }

    /// The label vocabulary this corpus was loaded against
    pub fn label_vocab(&self) -> &LabelVocab {
        &self.vocab
    }
}

impl Dataset<NewsSample> for NewsDataset {
    fn get(&self, index: usize) -> Option<NewsSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::TokenizedText;

    /// Deterministic encoder for tests: one token per whitespace
    /// word, the token id being the word's character count.
    struct StubEncoder;

    impl TextEncoder for StubEncoder {
        fn encode_text(&self, text: &str) -> Result<TokenizedText> {
            let input_ids: Vec<u32> = text
                .split_whitespace()
                .map(|word| word.chars().count() as u32)
                .collect();
            let attention_mask = vec![1; input_ids.len()];
            Ok(TokenizedText { input_ids, attention_mask })
        }
    }

    #[test]
    fn test_label_is_shifted_to_zero_indexed() {
        let records = parse_records("3,stocks rally today\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, 2);
        assert_eq!(records[0].text, "stocks rally today");
    }

    #[test]
    fn test_splits_on_first_comma_only() {
        let records = parse_records("1,rain today, sun tomorrow\n").unwrap();
        assert_eq!(records[0].text, "rain today, sun tomorrow");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = parse_records("1,first\n\n   \n2,second\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_comma_fails_the_load() {
        let err = parse_records("1,fine\nno delimiter here\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_non_integer_label_fails_the_load() {
        let err = parse_records("sports,some text\n").unwrap_err();
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn test_zero_label_fails_the_load() {
        // 0 cannot be shifted to a 0-indexed label
        let err = parse_records("0,some text\n").unwrap_err();
        assert!(err.to_string().contains("1-indexed"));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // Each of these characters is 3 bytes in UTF-8; a byte
        // cut at 4 would panic inside a code point
        assert_eq!(truncate_chars("体育新闻报道", 4), "体育新闻");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_text_is_truncated_before_tokenisation() {
        let records = parse_records("2,aa bb cc dd\n").unwrap();
        // max_length 5 keeps "aa bb" (5 chars) → two tokens
        let samples = tokenize_records(&records, 5, &StubEncoder).unwrap();
        assert_eq!(samples[0].input_ids, vec![2, 2]);
        assert_eq!(samples[0].attention_mask, vec![1, 1]);
        assert_eq!(samples[0].label, 1);
    }

    #[test]
    fn test_ids_and_mask_have_equal_length() {
        let records = parse_records("1,one two three\n").unwrap();
        let samples = tokenize_records(&records, 100, &StubEncoder).unwrap();
        assert_eq!(
            samples[0].input_ids.len(),
            samples[0].attention_mask.len()
        );
    }

    #[test]
    fn test_loading_is_deterministic() {
        // Same content, same encoder → identical samples
        let content = "1,alpha beta\n3,gamma\n2,delta epsilon zeta\n";
        let first  = tokenize_records(&parse_records(content).unwrap(), 50, &StubEncoder).unwrap();
        let second = tokenize_records(&parse_records(content).unwrap(), 50, &StubEncoder).unwrap();
        assert_eq!(first, second);
    }
}
