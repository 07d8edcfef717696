//! Specular reflectometry simulation core.
//!
//! Given an ordered stack of material slices (thickness, complex
//! scattering-length density, interface roughness), this crate computes a
//! sampled SLD depth profile and a derived reflectivity curve, with
//! per-sample progress reporting and cooperative cancellation. The
//! application shell supplying slice data and rendering results lives
//! elsewhere; see [`SpecularSimulation`] for the orchestration entry point.

pub mod domain;
pub mod numerics;
pub mod profile;
pub mod progress;
pub mod simulation;
pub mod solver;

pub use domain::{MultiSlice, ReflError, ReflResult, SimulationResult, Slice};
pub use profile::{SldProfile, calculate_profile, default_profile_limits};
pub use progress::{InterruptHandle, ProgressCallback, ProgressHandler};
pub use simulation::{SIMULATION_POINTS, SimulationMode, SpecularSimulation};
pub use solver::{ParrattSolver, ScatteringSolver};
