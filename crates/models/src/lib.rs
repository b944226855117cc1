//! Right-hand sides for classic introductory ODEs, each with its closed form.
//!
//! Every model is a small parameter struct. First-order models implement
//! [`Derivative`](drift_core::Derivative), the oscillator implements
//! [`Acceleration`](drift_core::Acceleration), and all of them implement
//! [`Analytical`] so numerical trajectories can be compared with the exact
//! solution.
//!
//! | Model | Equation |
//! |---|---|
//! | [`RadioactiveDecay`] | `dN/dt = -N/τ` |
//! | [`FreeFall`] | `dv/dt = -g` |
//! | [`LinearDrag`] | `dv/dt = a - b v` |
//! | [`CoupledDecay`] | `dA/dt = B/τ_B - A/τ_A`, `dB/dt = A/τ_A - B/τ_B` |
//! | [`Logistic`] | `dN/dt = a N - b N²` |
//! | [`HarmonicOscillator`] | `d²y/dt² = -ω² y` |

mod analytical;
mod coupled;
mod decay;
mod fall;
mod harmonic;
mod population;

pub use analytical::Analytical;
pub use coupled::{CoupledDecay, PopulationRates, Populations};
pub use decay::RadioactiveDecay;
pub use fall::{FreeFall, LinearDrag};
pub use harmonic::HarmonicOscillator;
pub use population::Logistic;
