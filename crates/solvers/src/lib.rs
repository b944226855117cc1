//! Fixed-step explicit integrators for the drift workspace.
//!
//! See [`transient`] for the available methods.

pub mod transient;
