//! Core traits and types for fixed-step explicit ODE integration.
//!
//! This crate defines the shared abstractions the solvers and models build on:
//!
//! - [`StepIntegrable`]: a state that advances as `state + derivative * dt`
//! - [`Derivative`]: the right-hand side `f(state, time)` of a first-order ODE
//! - [`Acceleration`]: the right-hand side `a(position, time)` of a scalar
//!   second-order ODE, with [`SecondOrder`] to view it as a first-order one
//! - [`Phase`]: the (position, velocity) state of a second-order system
//! - [`TimeSpan`]: a validated interval and step size
//! - [`Sample`], [`Trajectory`]: the ordered output of a run
//! - [`Observer`]: receives solver events and optionally returns actions

mod derivative;
mod observer;
mod phase;
mod span;
mod step;
mod trajectory;

pub use derivative::{Acceleration, Derivative, SecondOrder};
pub use observer::Observer;
pub use phase::{Phase, PhaseRate};
pub use span::{SpanError, TimeSpan};
pub use step::{DerivativeOf, StepIntegrable};
pub use trajectory::{Sample, Trajectory};
