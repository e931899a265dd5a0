// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `inspect` and `labels`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, u32, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::inspect_use_case::InspectConfig;
use crate::data::{batcher::MaskPadding, DataConfig};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and tokenise a corpus, then print a summary and a
    /// collated preview batch
    Inspect(InspectArgs),

    /// Print the label vocabulary with its indices
    Labels(LabelsArgs),
}

/// All arguments for the `inspect` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Root directory that all data files live under
    #[arg(long, default_value = "data")]
    pub data_root: String,

    /// Label vocabulary file (one label per line), relative
    /// to the data root
    #[arg(long, default_value = "labels.txt")]
    pub label_path: String,

    /// Corpus file ("<label>,<text>" per line), relative to
    /// the data root
    #[arg(long, default_value = "train.csv")]
    pub source: String,

    /// Maximum characters of raw text kept per record before
    /// tokenisation (characters, not tokens)
    #[arg(long, default_value_t = 2048)]
    pub max_length: usize,

    /// Directory holding (or receiving) tokenizer.json
    #[arg(long, default_value = "tokenizer")]
    pub tokenizer_dir: String,

    /// Vocabulary size used when building a new tokenizer
    #[arg(long, default_value_t = 30522)]
    pub vocab_size: usize,

    /// Number of samples collated into the preview batch
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,

    /// Token id used to fill padded positions
    #[arg(long, default_value_t = 0)]
    pub pad_id: u32,

    /// What fills the padded tail of the attention mask:
    /// the conventional zeros, or the token pad id as some
    /// legacy pipelines did
    #[arg(long, value_enum, default_value = "zeros")]
    pub mask_padding: MaskPaddingArg,

    /// Number of samples to preview
    #[arg(long, default_value_t = 3)]
    pub show: usize,

    /// Only preview samples with this label name
    #[arg(long)]
    pub only_label: Option<String>,
}

/// CLI-facing mirror of data::batcher::MaskPadding, so the
/// data layer never sees clap types.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MaskPaddingArg {
    /// Pad the attention mask with 0
    Zeros,

    /// Pad the attention mask with the token pad id
    PadId,
}

impl From<MaskPaddingArg> for MaskPadding {
    fn from(arg: MaskPaddingArg) -> Self {
        match arg {
            MaskPaddingArg::Zeros => MaskPadding::Zeros,
            MaskPaddingArg::PadId => MaskPadding::PadId,
        }
    }
}

/// Convert CLI InspectArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            data: DataConfig {
                data_root:  a.data_root,
                label_path: a.label_path,
                max_length: a.max_length,
            },
            source:        a.source,
            tokenizer_dir: a.tokenizer_dir,
            vocab_size:    a.vocab_size,
            batch_size:    a.batch_size,
            pad_id:        a.pad_id,
            mask_padding:  a.mask_padding.into(),
            show:          a.show,
            only_label:    a.only_label,
        }
    }
}

/// All arguments for the `labels` command
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Root directory that all data files live under
    #[arg(long, default_value = "data")]
    pub data_root: String,

    /// Label vocabulary file, relative to the data root
    #[arg(long, default_value = "labels.txt")]
    pub label_path: String,
}
