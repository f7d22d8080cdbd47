//! # Parameter Grid
//!
//! Regular sampling of the `(u, v)` domain. Rows follow `v`, columns follow
//! `u`, and samples are stored row-major.
//!
//! The `u` spacing divides by `u_steps - 1`, so the last column sits exactly
//! on `U_MAX` instead of wrapping back to `U_MIN`. The seam stitching in
//! [`crate::topology`] relies on that column.

use config::constants::{GridConfig, U_MAX, U_MIN, V_MAX, V_MIN};

use crate::error::MeshResult;

/// One `(u, v)` sample of the surface domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSample {
    /// Around-the-loop angle in `[U_MIN, U_MAX]`.
    pub u: f64,
    /// Across-the-strip offset in `[V_MIN, V_MAX]`.
    pub v: f64,
}

/// Row and column counts of a grid, all the stitcher needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Number of rows, `v_steps + 1`.
    pub rows: u32,
    /// Number of columns, `u_steps`.
    pub columns: u32,
}

impl GridDims {
    /// Number of `v` subdivisions.
    #[inline]
    pub fn v_steps(&self) -> u32 {
        self.rows - 1
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// True when the grid holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable row-major grid of parameter samples.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::grid::ParameterGrid;
///
/// let grid = ParameterGrid::new(4, 2).unwrap();
/// assert_eq!(grid.dims().rows, 3);
/// assert_eq!(grid.dims().columns, 4);
/// assert_eq!(grid.samples().len(), 12);
/// assert_eq!(grid.sample(2, 0).v, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    dims: GridDims,
    samples: Vec<ParameterSample>,
}

impl ParameterGrid {
    /// Validates the step counts and builds the grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeshError::InvalidConfig`] for `u_steps < 2`,
    /// `v_steps < 1`, or an oversized grid.
    pub fn new(u_steps: u32, v_steps: u32) -> MeshResult<Self> {
        Self::from_config(&GridConfig {
            u_steps,
            v_steps,
            triangulate: false,
        })
    }

    /// Builds the grid for `config`.
    ///
    /// `GridConfig` fields are public, so the step counts are checked again
    /// here before any sample is produced.
    ///
    /// # Errors
    ///
    /// Same as [`ParameterGrid::new`].
    pub fn from_config(config: &GridConfig) -> MeshResult<Self> {
        let config = GridConfig::new(config.u_steps, config.v_steps, config.triangulate)?;
        let dims = GridDims {
            rows: config.rows(),
            columns: config.columns(),
        };
        let u_span = (config.u_steps - 1) as f64;
        let v_span = config.v_steps as f64;

        let mut samples = Vec::with_capacity(dims.len());
        for row in 0..dims.rows {
            let v = V_MIN + row as f64 * (V_MAX - V_MIN) / v_span;
            for col in 0..dims.columns {
                let u = U_MIN + col as f64 * (U_MAX - U_MIN) / u_span;
                samples.push(ParameterSample { u, v });
            }
        }

        log::debug!(
            "built parameter grid: {} rows x {} columns",
            dims.rows,
            dims.columns
        );

        Ok(Self { dims, samples })
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// All samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[ParameterSample] {
        &self.samples
    }

    /// The sample at `(row, col)`.
    ///
    /// Panics when either index is out of range.
    #[inline]
    pub fn sample(&self, row: u32, col: u32) -> ParameterSample {
        self.samples[(row * self.dims.columns + col) as usize]
    }
}
