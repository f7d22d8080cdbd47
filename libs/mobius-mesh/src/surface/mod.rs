//! # Surface Evaluator
//!
//! Maps parameter samples to points on the Möbius strip:
//!
//! ```text
//! x = (1 + (v/2)·cos(u/2))·cos(u)
//! y = (1 + (v/2)·cos(u/2))·sin(u)
//! z = (v/2)·sin(u/2)
//! ```
//!
//! Evaluation is elementwise and order-preserving: output index `i`
//! corresponds to input sample `i`.

use glam::DVec3;

use crate::grid::{ParameterGrid, ParameterSample};

/// Evaluates the strip at one parameter sample.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::grid::ParameterSample;
/// use mobius_mesh::surface::evaluate;
///
/// // The centre line at u = 0 lies on the unit circle
/// let p = evaluate(ParameterSample { u: 0.0, v: 0.0 });
/// assert_eq!(p.to_array(), [1.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn evaluate(sample: ParameterSample) -> DVec3 {
    let ParameterSample { u, v } = sample;
    let half_v = v / 2.0;
    let (sin_half_u, cos_half_u) = (u / 2.0).sin_cos();
    let radius = 1.0 + half_v * cos_half_u;
    DVec3::new(radius * u.cos(), radius * u.sin(), half_v * sin_half_u)
}

/// Evaluates every sample of the grid, preserving row-major order.
pub fn evaluate_grid(grid: &ParameterGrid) -> Vec<DVec3> {
    grid.samples().iter().copied().map(evaluate).collect()
}
