/// Centers of `n_bins` equal-width bins spanning `[xmin, xmax]`.
///
/// This is the sampling grid used for both the depth axis of the SLD profile
/// and the momentum-transfer axis of the exact simulation; bin centers keep
/// every sample strictly inside the axis range.
pub fn fixed_bin_centers(n_bins: usize, xmin: f64, xmax: f64) -> Vec<f64> {
    let step = (xmax - xmin) / n_bins as f64;
    (0..n_bins)
        .map(|index| xmin + (index as f64 + 0.5) * step)
        .collect()
}
