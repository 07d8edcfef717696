use super::ScatteringSolver;
use crate::domain::Slice;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Reference specular solver: Parratt recursion with Nevot-Croce roughness
/// damping.
///
/// The wave-vector inside slice `i` follows from the SLD contrast against
/// the ambient medium, `kz_i = sqrt(kz0^2 - 4*pi*(sld_i - sld_0))`; each
/// Fresnel coefficient is damped by `exp(-2 * kz_i * kz_j * sigma^2)` for
/// the roughness of the interface it crosses. The recursion starts at the
/// substrate and folds upward through the finite layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParrattSolver;

impl ParrattSolver {
    pub fn new() -> Self {
        Self
    }
}

impl ScatteringSolver for ParrattSolver {
    fn execute(&self, slices: &[Slice], kz: f64) -> Vec<Complex64> {
        if slices.len() < 2 {
            return Vec::new();
        }

        let kz0_squared = Complex64::new(kz * kz, 0.0);
        let ambient_sld = slices[0].sld;
        let kz_in_slice: Vec<Complex64> = slices
            .iter()
            .map(|slice| dispersion_kz(kz0_squared, slice.sld - ambient_sld))
            .collect();

        let last = slices.len() - 1;
        let mut amplitude = rough_fresnel(
            kz_in_slice[last - 1],
            kz_in_slice[last],
            slices[last].roughness_sigma,
        );

        // Fold the remaining interfaces upward; the layer between interfaces
        // i and i+1 contributes a phase of 2*kz*thickness.
        let two_i = Complex64::new(0.0, 2.0);
        for i in (0..last - 1).rev() {
            let fresnel = rough_fresnel(
                kz_in_slice[i],
                kz_in_slice[i + 1],
                slices[i + 1].roughness_sigma,
            );
            let phase = (two_i * kz_in_slice[i + 1] * slices[i + 1].thickness).exp();
            amplitude = (fresnel + amplitude * phase)
                / (Complex64::new(1.0, 0.0) + fresnel * amplitude * phase);
        }

        vec![amplitude]
    }
}

/// Wave-vector z-component inside a medium of the given SLD contrast.
///
/// A positive imaginary SLD is absorption and must damp the wave, so it
/// enters the dispersion relation with its sign flipped; the principal square
/// root then lands in the first quadrant and every layer phase decays.
fn dispersion_kz(kz0_squared: Complex64, sld_contrast: Complex64) -> Complex64 {
    let contrast = Complex64::new(sld_contrast.re, -sld_contrast.im);
    (kz0_squared - 4.0 * PI * contrast).sqrt()
}

fn rough_fresnel(kz_above: Complex64, kz_below: Complex64, sigma: f64) -> Complex64 {
    let mut fresnel = (kz_above - kz_below) / (kz_above + kz_below);
    if sigma > 1.0e-12 {
        fresnel *= (Complex64::new(-2.0 * sigma * sigma, 0.0) * kz_above * kz_below).exp();
    }
    fresnel
}
