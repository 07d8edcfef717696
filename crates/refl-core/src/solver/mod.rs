mod parratt;

pub use parratt::ParrattSolver;

use crate::domain::Slice;
use num_complex::Complex64;

/// Narrow seam to the physical scattering solver.
///
/// `kz` is the magnitude of the incident wave-vector z-component (the solver
/// is queried with the wave-vector `(0, 0, -kz)`); the returned sequence
/// holds one complex reflection amplitude per outgoing channel, of which the
/// simulation consumes only the first. Implementations may bind a numerical
/// library or stub the computation entirely for approximate-only use.
pub trait ScatteringSolver: Send {
    fn execute(&self, slices: &[Slice], kz: f64) -> Vec<Complex64>;
}
