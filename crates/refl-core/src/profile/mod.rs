use crate::domain::{ReflError, ReflResult, Slice};
use crate::numerics::fixed_bin_centers;
use num_complex::Complex64;
use std::f64::consts::SQRT_2;

/// Fraction of the finite stack span added as margin on each side of the
/// default depth limits, so interfaces are not clipped at the plot edges.
const MARGIN_FRACTION: f64 = 0.1;
/// Margin used when the stack has no finite interior (two semi-infinite
/// slices and a single interface); keeps `xmin < xmax`.
const FALLBACK_MARGIN: f64 = 1.0;

/// Default depth bounds for plotting the SLD profile of `multislice`: the
/// finite interior span padded by a fixed fraction on each side. The first
/// interface sits at depth 0.
pub fn default_profile_limits(multislice: &[Slice]) -> ReflResult<(f64, f64)> {
    if multislice.len() < 2 {
        return Err(ReflError::InsufficientSlices {
            required: 2,
            actual: multislice.len(),
        });
    }

    let span = interior_span(multislice);
    let margin = if span > 0.0 {
        span * MARGIN_FRACTION
    } else {
        FALLBACK_MARGIN
    };
    Ok((-margin, span + margin))
}

/// Continuous SLD-vs-depth evaluator for a layer stack.
///
/// Interface depths are precomputed once; each interface contributes its SLD
/// step scaled by an error-function blend of width proportional to the
/// interface roughness.
#[derive(Debug, Clone)]
pub struct SldProfile {
    ambient_sld: Complex64,
    interfaces: Vec<InterfaceStep>,
}

#[derive(Debug, Clone, Copy)]
struct InterfaceStep {
    depth: f64,
    sld_step: Complex64,
    sigma: f64,
}

impl SldProfile {
    pub fn new(multislice: &[Slice]) -> ReflResult<Self> {
        if multislice.is_empty() {
            return Err(ReflError::InsufficientSlices {
                required: 1,
                actual: 0,
            });
        }

        let mut interfaces = Vec::with_capacity(multislice.len() - 1);
        let mut depth = 0.0;
        for (above, below) in multislice.iter().zip(multislice.iter().skip(1)) {
            interfaces.push(InterfaceStep {
                depth,
                sld_step: below.sld - above.sld,
                sigma: below.roughness_sigma,
            });
            depth += below.thickness;
        }

        Ok(Self {
            ambient_sld: multislice[0].sld,
            interfaces,
        })
    }

    /// SLD at depth `z`. Pure; identical inputs always produce identical
    /// output.
    pub fn value_at(&self, z: f64) -> Complex64 {
        let mut value = self.ambient_sld;
        for interface in &self.interfaces {
            value += interface.sld_step * transition_weight(z, interface.depth, interface.sigma);
        }
        value
    }
}

/// Samples the complex SLD profile of `multislice` on the `n_points` bin
/// centers of `[xmin, xmax]`.
pub fn calculate_profile(
    multislice: &[Slice],
    n_points: usize,
    xmin: f64,
    xmax: f64,
) -> ReflResult<Vec<Complex64>> {
    if n_points == 0 {
        return Err(ReflError::InvalidSampleCount { requested: n_points });
    }

    let profile = SldProfile::new(multislice)?;
    Ok(fixed_bin_centers(n_points, xmin, xmax)
        .into_iter()
        .map(|z| profile.value_at(z))
        .collect())
}

fn interior_span(multislice: &[Slice]) -> f64 {
    multislice[1..multislice.len() - 1]
        .iter()
        .map(|slice| slice.thickness)
        .sum()
}

/// Weight of the material below an interface at depth `z`: a hard step for a
/// sharp interface, an erf ramp of width ~sigma otherwise.
fn transition_weight(z: f64, interface_depth: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        if z < interface_depth { 0.0 } else { 1.0 }
    } else {
        0.5 * (1.0 + libm::erf((z - interface_depth) / (SQRT_2 * sigma)))
    }
}
