//! Reusable observers for drift transient runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with every fixed-step method in `drift-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-method observers
//!   ([`HasTime`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopAt`]: ends a run at the first sample at or past a given time.
//!
//! # Features
//!
//! - `plot`: enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: drift_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop;

#[cfg(feature = "plot")]
mod plot;

pub use stop::StopAt;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
