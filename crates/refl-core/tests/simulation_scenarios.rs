use num_complex::Complex64;
use refl_core::{
    ReflError, SIMULATION_POINTS, ScatteringSolver, SimulationMode, Slice, SpecularSimulation,
    calculate_profile, default_profile_limits,
};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn reference_stack() -> Vec<Slice> {
    vec![
        Slice::new(0.0, Complex64::new(0.0, 0.0), 0.0),
        Slice::new(100.0, Complex64::new(4.0, 0.1), 5.0),
        Slice::new(0.0, Complex64::new(2.0, 0.0), 0.0),
    ]
}

#[test]
fn approximate_run_produces_the_transform_of_the_profile() {
    let mut simulation = SpecularSimulation::new(&reference_stack(), SimulationMode::Approximate);
    simulation.run().expect("approximate run");

    let result = simulation.simulation_result();
    assert_eq!(result.data.len(), SIMULATION_POINTS / 2);
    assert_eq!(result.xmin, 0.0);
    assert_eq!(result.xmax, result.data.len() as f64);
    assert!(result.data.iter().all(|value| value.is_finite()));
}

#[test]
fn exact_run_yields_a_log_scaled_bounded_curve() {
    let mut simulation = SpecularSimulation::new(&reference_stack(), SimulationMode::Exact);
    simulation.run().expect("exact run");

    let result = simulation.simulation_result();
    assert_eq!(result.data.len(), SIMULATION_POINTS);
    assert_eq!(result.xmin, 0.0);
    assert_eq!(result.xmax, 1.0);
    // Physical reflectivity of this stack is bounded by 1, so the
    // log-scaled curve never rises above zero.
    for (index, &value) in result.data.iter().enumerate() {
        assert!(value <= 1.0e-9, "sample {index} has log intensity {value}");
    }
}

#[test]
fn single_slice_stack_is_rejected() {
    let stack = vec![Slice::new(0.0, Complex64::new(1.0, 0.0), 0.0)];
    let error = default_profile_limits(&stack).expect_err("limits need two slices");
    assert_eq!(
        error,
        ReflError::InsufficientSlices {
            required: 2,
            actual: 1,
        }
    );
}

#[test]
fn progress_reaches_the_total_and_stays_monotone() {
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&snapshots);

    let mut simulation = SpecularSimulation::new(&reference_stack(), SimulationMode::Exact);
    simulation.set_progress_callback(Box::new(move |completed, total| {
        sink.lock().expect("sink lock").push((completed, total));
    }));
    simulation.run().expect("run");

    let snapshots = snapshots.lock().expect("sink lock");
    assert_eq!(snapshots.len(), SIMULATION_POINTS);
    assert_eq!(snapshots.first(), Some(&(1, SIMULATION_POINTS)));
    assert_eq!(
        snapshots.last(),
        Some(&(SIMULATION_POINTS, SIMULATION_POINTS))
    );
    assert!(
        snapshots
            .windows(2)
            .all(|pair| pair[0].0 < pair[1].0 && pair[0].1 == pair[1].1)
    );
}

#[test]
fn a_worker_run_can_be_interrupted_from_the_controlling_thread() {
    let mut simulation = SpecularSimulation::new(&reference_stack(), SimulationMode::Exact);
    simulation.set_tick_delay(Some(Duration::from_millis(1)));

    let (first_tick_tx, first_tick_rx) = mpsc::channel();
    simulation.set_progress_callback(Box::new(move |completed, _| {
        if completed == 1 {
            let _ = first_tick_tx.send(());
        }
    }));
    let handle = simulation.interrupt_handle();

    let worker = std::thread::spawn(move || {
        let outcome = simulation.run();
        (outcome, simulation.simulation_result())
    });

    first_tick_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("first tick");
    handle.request();

    let (outcome, result) = worker.join().expect("worker join");
    let error = outcome.expect_err("run should have been interrupted");
    assert!(matches!(error, ReflError::Interrupted { .. }));
    // No partial curve is ever published.
    assert!(result.data.is_empty());
}

#[test]
fn sld_profile_preview_matches_the_direct_profile_computation() {
    let stack = reference_stack();
    let preview = SpecularSimulation::sld_profile(&stack, 128).expect("preview");

    let (xmin, xmax) = default_profile_limits(&stack).expect("limits");
    let direct = calculate_profile(&stack, 128, xmin, xmax).expect("profile");

    assert_eq!(preview.xmin, xmin);
    assert_eq!(preview.xmax, xmax);
    let real_parts: Vec<f64> = direct.into_iter().map(|value| value.re).collect();
    assert_eq!(preview.data, real_parts);
}

struct ConstantAmplitudeSolver {
    amplitude: Complex64,
}

impl ScatteringSolver for ConstantAmplitudeSolver {
    fn execute(&self, _slices: &[Slice], _kz: f64) -> Vec<Complex64> {
        vec![self.amplitude]
    }
}

#[test]
fn exact_mode_accepts_an_injected_solver() {
    let solver = ConstantAmplitudeSolver {
        amplitude: Complex64::new(0.5, 0.0),
    };
    let mut simulation =
        SpecularSimulation::with_solver(&reference_stack(), SimulationMode::Exact, Box::new(solver));
    simulation.run().expect("run");

    let expected = 0.25_f64.ln();
    for &value in &simulation.simulation_result().data {
        assert!((value - expected).abs() < 1.0e-12);
    }
}
