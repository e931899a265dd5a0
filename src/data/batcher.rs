// ============================================================
// Layer 4 — News Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<NewsSample>
// into GPU-ready tensors.
//
// What is a Batcher?
//   A Batcher takes a list of individual samples and stacks
//   them into a single batch tensor. This is necessary because
//   GPUs are most efficient when processing many samples at once.
//
// How batching works here:
//   Input:  Vec of N NewsSamples with DIFFERENT sequence lengths
//   Output: NewsBatch with tensors of shape [N, max_len]
//
//   Samples are not pre-padded, so this batcher pads dynamically:
//   max_len is the longest sequence IN THIS BATCH, and every
//   shorter sample is right-padded up to it. Batches of short
//   texts therefore stay small instead of always paying for the
//   corpus-wide maximum.
//
// Mask padding policy:
//   The token ids are always padded with the pad id. What goes
//   into the padded tail of the ATTENTION MASK is a named choice:
//     Zeros — the conventional 0 = "ignore this position"
//     PadId — mirror the token pad id into the mask, which some
//             legacy pipelines did (and their models absorbed)
//   Switching policies changes what the model attends to, so it
//   must be chosen explicitly, never defaulted silently.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    tensor::{backend::Backend, Int, Tensor},
};
use serde::{Deserialize, Serialize};

use crate::domain::sample::NewsSample;

// ─── MaskPadding ──────────────────────────────────────────────────────────────
/// What value fills the padded tail of the attention mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskPadding {
    /// Pad the mask with 0 (padding positions are ignored)
    Zeros,

    /// Pad the mask with the token pad id, reproducing the
    /// behaviour of pipelines that coupled the two values
    PadId,
}

impl MaskPadding {
    /// The concrete mask value for padded positions
    fn pad_value(self, pad_id: u32) -> u32 {
        match self {
            MaskPadding::Zeros => 0,
            MaskPadding::PadId => pad_id,
        }
    }
}

// ─── NewsBatch ────────────────────────────────────────────────────────────────
/// A batch of news samples ready for the model forward pass.
/// All tensors have batch_size as their first dimension.
///
/// B is the Burn Backend (e.g. Wgpu, NdArray) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct NewsBatch<B: Backend> {
    /// Class labels — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,

    /// Token id sequences — shape: [batch_size, max_len]
    /// Each row is one sample's input_ids, right-padded
    pub input_ids: Tensor<B, 2, Int>,

    /// Attention masks — shape: [batch_size, max_len]
    /// Padded tail filled per the MaskPadding policy
    pub attention_mask: Tensor<B, 2, Int>,
}

// ─── NewsBatcher ──────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct GPU/CPU, plus the pad id and
/// the mask padding policy.
#[derive(Clone, Debug)]
pub struct NewsBatcher<B: Backend> {
    /// The device to create tensors on (e.g. GPU index 0)
    device: B::Device,

    /// Token id used to fill padded positions
    pad_id: u32,

    /// What fills the padded tail of the attention mask
    mask_padding: MaskPadding,
}

impl<B: Backend> NewsBatcher<B> {
    /// Create a new batcher for the given device and padding choices
    pub fn new(device: B::Device, pad_id: u32, mask_padding: MaskPadding) -> Self {
        Self { device, pad_id, mask_padding }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes NewsBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch of samples.
impl<B: Backend> Batcher<NewsSample, NewsBatch<B>> for NewsBatcher<B> {
    /// Convert a Vec of NewsSamples into a single NewsBatch.
    ///
    /// Steps:
    ///   1. Find max_len, the longest sequence in this batch
    ///   2. Flatten all input_ids into one Vec<i32>, padding each
    ///      row with the pad id up to max_len
    ///   3. Same for attention_mask, padding with the policy value
    ///   4. Create 1D tensors and reshape to [batch_size, max_len]
    ///   5. Create the 1D label tensor
    fn batch(&self, items: Vec<NewsSample>) -> NewsBatch<B> {
        let batch_size = items.len();
        let max_len    = items.iter().map(NewsSample::seq_len).max().unwrap_or(0);
        let mask_pad   = self.mask_padding.pad_value(self.pad_id);

        // ── Flatten and right-pad ─────────────────────────────────────────────
        // Burn uses i32 for Int tensor creation, so token ids and
        // mask values are converted on the way in
        let mut ids_flat:  Vec<i32> = Vec::with_capacity(batch_size * max_len);
        let mut mask_flat: Vec<i32> = Vec::with_capacity(batch_size * max_len);

        for item in &items {
            let padding = max_len - item.seq_len();

            ids_flat.extend(item.input_ids.iter().map(|&id| id as i32));
            ids_flat.extend(std::iter::repeat(self.pad_id as i32).take(padding));

            mask_flat.extend(item.attention_mask.iter().map(|&m| m as i32));
            mask_flat.extend(std::iter::repeat(mask_pad as i32).take(padding));
        }

        // ── Collect labels ────────────────────────────────────────────────────
        // One scalar class label per sample
        let labels: Vec<i32> = items
            .iter()
            .map(|item| item.label as i32)
            .collect();

        // ── Create tensors ────────────────────────────────────────────────────
        // Tensor::from_ints creates a 1D tensor from a slice,
        // then .reshape() gives it the correct 2D shape [batch, seq]

        let input_ids = Tensor::<B, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device
        ).reshape([batch_size, max_len]);

        let attention_mask = Tensor::<B, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device
        ).reshape([batch_size, max_len]);

        // Labels stay as a 1D tensor [batch_size]
        let labels = Tensor::<B, 1, Int>::from_ints(
            labels.as_slice(), &self.device
        );

        NewsBatch {
            labels,
            input_ids,
            attention_mask,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::tensor::Data;

    type TestBackend = burn::backend::NdArray;

    fn sample(label: usize, input_ids: Vec<u32>) -> NewsSample {
        let attention_mask = vec![1; input_ids.len()];
        NewsSample { label, input_ids, attention_mask }
    }

    fn batcher(pad_id: u32, mask_padding: MaskPadding) -> NewsBatcher<TestBackend> {
        NewsBatcher::new(Default::default(), pad_id, mask_padding)
    }

    #[test]
    fn test_pads_to_longest_in_batch() {
        let items = vec![
            sample(0, vec![1, 2, 3]),
            sample(2, vec![4, 5, 6, 7, 8]),
        ];
        let batch = batcher(0, MaskPadding::Zeros).batch(items);

        // max_len comes from the 5-token sample
        assert_eq!(batch.input_ids.dims(), [2, 5]);
        assert_eq!(
            batch.input_ids.into_data(),
            Data::from([[1, 2, 3, 0, 0], [4, 5, 6, 7, 8]])
        );
    }

    #[test]
    fn test_mask_padded_with_zeros() {
        let items = vec![
            sample(0, vec![1, 2, 3]),
            sample(1, vec![4, 5, 6, 7, 8]),
        ];
        let batch = batcher(0, MaskPadding::Zeros).batch(items);

        assert_eq!(
            batch.attention_mask.into_data(),
            Data::from([[1, 1, 1, 0, 0], [1, 1, 1, 1, 1]])
        );
    }

    #[test]
    fn test_mask_padded_with_pad_id() {
        // Legacy policy: the mask tail mirrors the token pad id
        let items = vec![
            sample(0, vec![1, 2, 3]),
            sample(1, vec![4, 5, 6, 7, 8]),
        ];
        let batch = batcher(9, MaskPadding::PadId).batch(items);

        assert_eq!(
            batch.attention_mask.into_data(),
            Data::from([[1, 1, 1, 9, 9], [1, 1, 1, 1, 1]])
        );
    }

    #[test]
    fn test_labels_are_stacked() {
        let items = vec![
            sample(0, vec![1]),
            sample(2, vec![2]),
            sample(1, vec![3]),
        ];
        let batch = batcher(0, MaskPadding::Zeros).batch(items);

        assert_eq!(batch.labels.dims(), [3]);
        assert_eq!(batch.labels.into_data(), Data::from([0, 2, 1]));
    }

    #[test]
    fn test_equal_lengths_need_no_padding() {
        let items = vec![
            sample(0, vec![1, 2]),
            sample(1, vec![3, 4]),
        ];
        let batch = batcher(0, MaskPadding::Zeros).batch(items);

        assert_eq!(batch.input_ids.dims(), [2, 2]);
        assert_eq!(
            batch.input_ids.into_data(),
            Data::from([[1, 2], [3, 4]])
        );
    }
}
