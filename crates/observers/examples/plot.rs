//! Interactive visualizations of drift trajectories.
//!
//! Each mode integrates one of the bundled models and opens an interactive
//! plot window comparing the numerical result with its closed form.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- decay
//! cargo run --example plot --features plot -- oscillator verlet 0.05
//! cargo run --example plot --features plot -- population midpoint 0.5
//! ```
//!
//! # Modes
//!
//! - **decay**: radioactive decay with τ = 1 s from N₀ = 100.
//! - **fall**: free fall from rest under Earth gravity.
//! - **drag**: fall with linear drag, approaching terminal velocity.
//! - **coupled**: two species exchanging population until equilibrium.
//! - **population**: logistic growth toward the carrying capacity.
//! - **oscillator**: the unit harmonic oscillator from y₀ = 0.2, with the
//!   energy diagnostic in a second window. Euler's energy climbs steadily;
//!   midpoint and Verlet stay in a narrow band.
//!
//! Every mode takes an optional method (`euler`, `midpoint`, `verlet`) and
//! step size. Verlet only applies to the oscillator.

use std::error::Error;

use drift_core::{Derivative, Phase, StepIntegrable, Trajectory};
use drift_models::{
    Analytical, CoupledDecay, FreeFall, HarmonicOscillator, LinearDrag, Logistic, Populations,
    RadioactiveDecay,
};
use drift_observers::{PlotObserver, ShowConfig};
use drift_solvers::transient::{self, Method, euler, midpoint};
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "oscillator".into());
    let method = args
        .next()
        .as_deref()
        .map(str::parse::<Method>)
        .transpose()
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            std::process::exit(1);
        })
        .unwrap_or_default();
    let dt = args
        .next()
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size: expected a number, e.g. 0.1");
            std::process::exit(1);
        });

    match mode.as_str() {
        "decay" => decay(method, dt.unwrap_or(0.05)),
        "fall" => fall(method, dt.unwrap_or(0.1)),
        "drag" => drag(method, dt.unwrap_or(0.1)),
        "coupled" => coupled(method, dt.unwrap_or(0.05)),
        "population" => population(method, dt.unwrap_or(0.2)),
        "oscillator" => oscillator(method, dt.unwrap_or(0.01)),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!(
                "Usage: plot [decay|fall|drag|coupled|population|oscillator] [method] [dt]"
            );
            std::process::exit(1);
        }
    }
}

/// Runs a first-order model with Euler or midpoint.
fn first_order<S, D>(
    method: Method,
    problem: &D,
    initial: S,
    end: f64,
    dt: f64,
) -> Result<Trajectory<S>, Box<dyn Error>>
where
    S: StepIntegrable<f64> + Clone,
    D: Derivative<S>,
{
    match method {
        Method::Euler => Ok(euler::integrate(problem, initial, 0.0, end, dt)?),
        Method::Midpoint => Ok(midpoint::integrate(problem, initial, 0.0, end, dt)?),
        Method::Verlet => Err("verlet needs a second-order model; try `oscillator`".into()),
    }
}

/// Plots a scalar trajectory against its closed form.
fn compare<M: Analytical<f64>>(
    model: &M,
    method: Method,
    trajectory: &Trajectory<f64>,
    config: ShowConfig,
) -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::<2>::new([method.name(), "Analytical"]);
    obs.record_points(0, trajectory.points(|n| *n));
    obs.record_points(1, model.reference(trajectory).points(|n| *n));
    obs.show(config.legend())?;
    Ok(())
}

// --- Decay -------------------------------------------------------------------

fn decay(method: Method, dt: f64) -> Result<(), Box<dyn Error>> {
    let model = RadioactiveDecay::new_si(1.0);
    let trajectory = first_order(method, &model, 100.0, 5.0, dt)?;
    compare(
        &model,
        method,
        &trajectory,
        ShowConfig::new()
            .title(format!("Radioactive decay (τ=1 s, dt={dt})"))
            .axes("Time [s]", "N"),
    )
}

// --- Fall --------------------------------------------------------------------

fn fall(method: Method, dt: f64) -> Result<(), Box<dyn Error>> {
    let model = FreeFall::earth();
    let trajectory = first_order(method, &model, 0.0, 10.0, dt)?;
    compare(
        &model,
        method,
        &trajectory,
        ShowConfig::new()
            .title(format!("Free fall (g={} m/s², dt={dt})", model.g()))
            .axes("Time [s]", "Velocity [m/s]"),
    )
}

fn drag(method: Method, dt: f64) -> Result<(), Box<dyn Error>> {
    let model = LinearDrag::new_si(10.0, 1.0);
    let trajectory = first_order(method, &model, 0.0, 10.0, dt)?;
    compare(
        &model,
        method,
        &trajectory,
        ShowConfig::new()
            .title(format!(
                "Linear drag (terminal velocity {} m/s, dt={dt})",
                model.terminal_velocity()
            ))
            .axes("Time [s]", "Velocity [m/s]"),
    )
}

// --- Coupled -----------------------------------------------------------------

fn coupled(method: Method, dt: f64) -> Result<(), Box<dyn Error>> {
    let model = CoupledDecay::new_si(1.0, 2.0);
    let initial = Populations::new(100.0, 0.0);
    let trajectory = first_order(method, &model, initial, 10.0, dt)?;
    let exact = model.reference(&trajectory);

    let mut obs = PlotObserver::<4>::new(["A", "B", "A (analytical)", "B (analytical)"]);
    obs.record_points(0, trajectory.points(|p| p.a));
    obs.record_points(1, trajectory.points(|p| p.b));
    obs.record_points(2, exact.points(|p| p.a));
    obs.record_points(3, exact.points(|p| p.b));
    obs.show(
        ShowConfig::new()
            .title(format!("Coupled decay (τ_A=1 s, τ_B=2 s, {method}, dt={dt})"))
            .axes("Time [s]", "Population")
            .legend(),
    )?;
    Ok(())
}

// --- Population --------------------------------------------------------------

fn population(method: Method, dt: f64) -> Result<(), Box<dyn Error>> {
    let model = Logistic::new_si(1.0, 0.01);
    let trajectory = first_order(method, &model, 1.0, 20.0, dt)?;
    compare(
        &model,
        method,
        &trajectory,
        ShowConfig::new()
            .title(format!(
                "Logistic growth (capacity {}, dt={dt})",
                model.carrying_capacity()
            ))
            .axes("Time [s]", "N"),
    )
}

// --- Oscillator --------------------------------------------------------------

/// Integrates the unit oscillator, then shows position and energy.
///
/// Both windows are built from the finished trajectory; the energy window
/// opens once the position window is closed.
fn oscillator(method: Method, dt: f64) -> Result<(), Box<dyn Error>> {
    let osc = HarmonicOscillator::default();
    let initial = Phase::new(0.2, 0.0);
    let trajectory = transient::integrate(method, &osc, initial, 0.0, 40.0, dt)?;
    let exact = osc.reference(&trajectory);

    let mut position = PlotObserver::<2>::new([method.name(), "Analytical"]);
    position.record_points(0, trajectory.points(|p| p.position));
    position.record_points(1, exact.points(|p| p.position));
    position.show(
        ShowConfig::new()
            .title(format!("Harmonic oscillator (ω=1, dt={dt})"))
            .axes("Time [s]", "Position")
            .legend(),
    )?;

    let mut energy = PlotObserver::<1>::new(["Energy"]);
    energy.record_points(
        0,
        trajectory
            .times()
            .into_iter()
            .zip(osc.energy_series(&trajectory))
            .map(|(t, e)| [t, e]),
    );
    energy.show(
        ShowConfig::new()
            .title(format!("Oscillator energy ({method}, dt={dt})"))
            .axes("Time [s]", "Energy"),
    )?;
    Ok(())
}
