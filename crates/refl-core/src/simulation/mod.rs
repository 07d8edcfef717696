use crate::domain::{MultiSlice, ReflError, ReflResult, SimulationResult, Slice};
use crate::numerics::{fixed_bin_centers, fourier_magnitude};
use crate::profile::{SldProfile, calculate_profile, default_profile_limits};
use crate::progress::{InterruptHandle, ProgressCallback, ProgressHandler};
use crate::solver::{ParrattSolver, ScatteringSolver};
use num_complex::Complex64;
use std::time::Duration;
use tracing::debug;

/// Samples per simulation run, for both the depth profile and the
/// momentum-transfer axis.
pub const SIMULATION_POINTS: usize = 500;

/// Momentum-transfer range of the exact reflectivity curve.
const DEFAULT_QMIN: f64 = 0.0;
const DEFAULT_QMAX: f64 = 1.0;

/// Strategy deriving the reflectivity curve from the slice stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    /// Fourier-transform the sampled SLD profile; fast, offline-friendly.
    Approximate,
    /// Query the scattering solver once per momentum-transfer sample and
    /// log-scale the accumulated intensities.
    Exact,
}

/// One end-to-end specular simulation: profile synthesis, curve derivation,
/// progress reporting, and cooperative cancellation.
///
/// `run` executes synchronously on the calling thread; long-running use
/// places it on a worker while the controller keeps an [`InterruptHandle`]
/// and a progress callback.
pub struct SpecularSimulation {
    input_data: MultiSlice,
    mode: SimulationMode,
    solver: Box<dyn ScatteringSolver>,
    progress_handler: ProgressHandler,
    specular_result: SimulationResult,
    tick_delay: Option<Duration>,
}

impl SpecularSimulation {
    /// Captures the slice stack by value; the caller mutating its own copy
    /// afterwards does not affect this run.
    pub fn new(multislice: &[Slice], mode: SimulationMode) -> Self {
        Self::with_solver(multislice, mode, Box::new(ParrattSolver::new()))
    }

    pub fn with_solver(
        multislice: &[Slice],
        mode: SimulationMode,
        solver: Box<dyn ScatteringSolver>,
    ) -> Self {
        Self {
            input_data: multislice.to_vec(),
            mode,
            solver,
            progress_handler: ProgressHandler::new(),
            specular_result: SimulationResult::default(),
            tick_delay: None,
        }
    }

    /// Wires `callback` into the internal progress handler and primes the
    /// tick count for the next run.
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_handler.set_max_ticks_count(SIMULATION_POINTS);
        self.progress_handler.subscribe(callback);
    }

    /// Artificial per-tick pause for demos and progress-UI tests. Off by
    /// default and never part of the physical computation.
    pub fn set_tick_delay(&mut self, delay: Option<Duration>) {
        self.tick_delay = delay;
    }

    /// Handle for requesting cancellation from another thread while `run`
    /// occupies this one.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.progress_handler.interrupt_handle()
    }

    /// Runs the simulation to completion on the calling thread.
    ///
    /// The interrupt flag is polled before every sample; on cancellation the
    /// partial curve is discarded, the previous result stays published, and
    /// `ReflError::Interrupted` is returned.
    pub fn run(&mut self) -> ReflResult<()> {
        let (xmin, xmax) = default_profile_limits(&self.input_data)?;
        let profile = SldProfile::new(&self.input_data)?;

        self.progress_handler.set_max_ticks_count(SIMULATION_POINTS);
        self.progress_handler.reset();
        debug!(mode = ?self.mode, points = SIMULATION_POINTS, "starting specular simulation");

        let result = match self.mode {
            SimulationMode::Approximate => self.run_approximate(&profile, xmin, xmax)?,
            SimulationMode::Exact => self.run_exact()?,
        };

        debug!(samples = result.data.len(), "specular simulation finished");
        self.specular_result = result;
        Ok(())
    }

    /// Curve of the last completed run; the default empty curve before any
    /// successful `run`.
    pub fn simulation_result(&self) -> SimulationResult {
        self.specular_result.clone()
    }

    /// Stateless SLD profile preview, independent of any run or progress
    /// state.
    pub fn sld_profile(multislice: &[Slice], n_points: usize) -> ReflResult<SimulationResult> {
        let (xmin, xmax) = default_profile_limits(multislice)?;
        let profile = calculate_profile(multislice, n_points, xmin, xmax)?;
        let data = profile.into_iter().map(|value| value.re).collect();
        Ok(SimulationResult::new(xmin, xmax, data))
    }

    fn run_approximate(
        &self,
        profile: &SldProfile,
        xmin: f64,
        xmax: f64,
    ) -> ReflResult<SimulationResult> {
        let mut samples = Vec::with_capacity(SIMULATION_POINTS);
        for z in fixed_bin_centers(SIMULATION_POINTS, xmin, xmax) {
            self.check_interrupt()?;
            samples.push(profile.value_at(z).re);
            self.complete_tick();
        }

        let data = fourier_magnitude(&samples);
        Ok(SimulationResult::new(0.0, data.len() as f64, data))
    }

    fn run_exact(&self) -> ReflResult<SimulationResult> {
        let mut data = Vec::with_capacity(SIMULATION_POINTS);
        for q in fixed_bin_centers(SIMULATION_POINTS, DEFAULT_QMIN, DEFAULT_QMAX) {
            self.check_interrupt()?;
            let kz = 0.5 * q;
            let amplitude = self
                .solver
                .execute(&self.input_data, kz)
                .into_iter()
                .next()
                .unwrap_or(Complex64::new(0.0, 0.0));
            data.push(amplitude.norm_sqr());
            self.complete_tick();
        }

        for value in &mut data {
            *value = value.ln();
        }
        Ok(SimulationResult::new(DEFAULT_QMIN, DEFAULT_QMAX, data))
    }

    fn check_interrupt(&self) -> ReflResult<()> {
        if self.progress_handler.has_interrupt_request() {
            let completed = self.progress_handler.completed_ticks();
            let total = self.progress_handler.max_ticks_count();
            debug!(completed, total, "specular simulation interrupted");
            return Err(ReflError::Interrupted { completed, total });
        }
        Ok(())
    }

    fn complete_tick(&self) {
        if let Some(delay) = self.tick_delay {
            std::thread::sleep(delay);
        }
        self.progress_handler.set_completed_ticks(1);
    }
}
