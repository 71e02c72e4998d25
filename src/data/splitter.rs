// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Shuffles samples and splits them into two sets:
//   - Training set:   fed to the fine-tuning run
//   - Validation set: held out to measure eval loss
//
// The shuffle is seeded (StdRng::seed_from_u64), so the same
// corpus and seed always give the same split. Default seed is 42
// with 10% held out.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation (SeedableRng)

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Shuffle `samples` with `seed` and split into (train, validation).
///
/// `val_fraction` is clamped to `0.0..=1.0`; the validation size is
/// rounded to the nearest whole sample.
pub fn split_train_val<T>(mut samples: Vec<T>, val_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total    = samples.len();
    let val_len  = ((total as f64) * val_fraction.clamp(0.0, 1.0)).round() as usize;
    let split_at = total - val_len.min(total);

    // split_off(n) removes elements [n..] and returns them
    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation (seed {})",
        samples.len(),
        val.len(),
        seed,
    );

    (samples, val)
}
