pub mod axis;
pub mod fourier;

pub use axis::fixed_bin_centers;
pub use fourier::fourier_magnitude;
