pub mod errors;

pub use errors::{ReflError, ReflResult};

use num_complex::Complex64;

/// One layer of a reflectometry stack.
///
/// `roughness_sigma` describes the interface between this slice and the one
/// above it. By convention the first slice is the semi-infinite ambient
/// medium and the last slice the semi-infinite substrate; both carry
/// `thickness = 0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub thickness: f64,
    pub sld: Complex64,
    pub roughness_sigma: f64,
}

impl Slice {
    pub fn new(thickness: f64, sld: Complex64, roughness_sigma: f64) -> Self {
        Self {
            thickness,
            sld,
            roughness_sigma,
        }
    }
}

/// Ordered layer stack, ambient first, substrate last. Order is physically
/// meaningful; reordering changes the result.
pub type MultiSlice = Vec<Slice>;

/// Output curve of a simulation run: `data` holds one value per sample over
/// the `[xmin, xmax]` axis. Returned by value; never aliases run-internal
/// state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResult {
    pub xmin: f64,
    pub xmax: f64,
    pub data: Vec<f64>,
}

impl SimulationResult {
    pub fn new(xmin: f64, xmax: f64, data: Vec<f64>) -> Self {
        Self { xmin, xmax, data }
    }
}

#[cfg(test)]
mod tests {
    use super::{SimulationResult, Slice};
    use num_complex::Complex64;

    #[test]
    fn slice_is_a_plain_value_type() {
        let slice = Slice::new(100.0, Complex64::new(4.0e-6, 1.0e-7), 5.0);
        let copy = slice;
        assert_eq!(copy, slice);
        assert_eq!(copy.thickness, 100.0);
    }

    #[test]
    fn default_result_is_an_empty_curve() {
        let result = SimulationResult::default();
        assert_eq!(result.xmin, 0.0);
        assert_eq!(result.xmax, 0.0);
        assert!(result.data.is_empty());
    }
}
