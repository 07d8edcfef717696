use num_complex::Complex64;
use std::f64::consts::PI;

/// Spectral magnitudes of a real-valued sample sequence.
///
/// Plain O(n^2) discrete Fourier transform; the output holds the magnitudes
/// of the `n / 2` lowest non-negative frequencies, which is all the
/// approximate reflectivity curve consumes. Empty input yields empty output.
pub fn fourier_magnitude(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let output_len = n / 2;
    let mut magnitudes = Vec::with_capacity(output_len);
    for k in 0..output_len {
        let mut accumulator = Complex64::new(0.0, 0.0);
        for (j, &sample) in samples.iter().enumerate() {
            let angle = -2.0 * PI * (k as f64) * (j as f64) / (n as f64);
            accumulator += sample * Complex64::new(angle.cos(), angle.sin());
        }
        magnitudes.push(accumulator.norm());
    }
    magnitudes
}

#[cfg(test)]
mod tests {
    use super::fourier_magnitude;
    use std::f64::consts::PI;

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(fourier_magnitude(&[]).is_empty());
    }

    #[test]
    fn output_length_is_half_the_input_length() {
        let samples = vec![1.0; 500];
        assert_eq!(fourier_magnitude(&samples).len(), 250);
    }

    #[test]
    fn constant_signal_concentrates_in_the_dc_bin() {
        let samples = vec![3.0; 16];
        let magnitudes = fourier_magnitude(&samples);
        assert!((magnitudes[0] - 48.0).abs() < 1.0e-9);
        for &magnitude in &magnitudes[1..] {
            assert!(magnitude < 1.0e-9);
        }
    }

    #[test]
    fn pure_tone_peaks_at_its_frequency_bin() {
        let n = 64;
        let tone_bin = 5;
        let samples: Vec<f64> = (0..n)
            .map(|j| (2.0 * PI * tone_bin as f64 * j as f64 / n as f64).cos())
            .collect();
        let magnitudes = fourier_magnitude(&samples);
        assert!((magnitudes[tone_bin] - n as f64 / 2.0).abs() < 1.0e-9);
        assert!(magnitudes[tone_bin - 1] < 1.0e-9);
        assert!(magnitudes[tone_bin + 1] < 1.0e-9);
    }

    #[test]
    fn transform_is_deterministic() {
        let samples: Vec<f64> = (0..40).map(|j| (j as f64 * 0.37).sin()).collect();
        assert_eq!(fourier_magnitude(&samples), fourier_magnitude(&samples));
    }
}
