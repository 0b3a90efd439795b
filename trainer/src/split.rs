use rand::{Rng, seq::SliceRandom};

/// Shuffled index split into disjoint train / held-out partitions.
///
/// The same `rng` state always yields the same partitions, so seeded runs
/// are reproducible.
///
/// # Arguments
/// * `len` - Number of samples to partition.
/// * `train_ratio` - Fraction of samples assigned to the train partition.
/// * `rng` - The shuffle source.
///
/// # Returns
/// The `(train, held_out)` index vectors.
pub fn split_indices<R: Rng>(len: usize, train_ratio: f32, rng: &mut R) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);

    let train_len = (len as f32 * train_ratio).floor() as usize;
    let held_out = indices.split_off(train_len);

    (indices, held_out)
}
