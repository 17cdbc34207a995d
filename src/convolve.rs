/// Slides `weights` across `data` and returns one dot product per full overlap ("valid" mode).
///
/// `output[j] = Σ data[j + i] * weights[i]`. No padding is applied, so the output
/// has `data.len() - weights.len() + 1` samples, or none when `weights` is longer
/// than `data`. An empty kernel gives `data.len() + 1` empty sums, all zero.
pub fn convolve_valid(data: &[f64], weights: &[f64]) -> Vec<f64> {
    if weights.is_empty() {
        return vec![0.0; data.len() + 1];
    }
    if data.len() < weights.len() {
        return Vec::new();
    }

    data.windows(weights.len())
        .map(|window| window.iter().zip(weights).map(|(d, w)| d * w).sum::<f64>())
        .collect()
}
