//! Centralized configuration values shared across the Möbius pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::PI;
use std::fmt;

// =============================================================================
// DOMAIN BOUNDS
// =============================================================================

/// Lower bound of the around-the-loop parameter `u`.
///
/// # Examples
/// ```
/// use config::constants::U_MIN;
/// assert_eq!(U_MIN, 0.0);
/// ```
pub const U_MIN: f64 = 0.0;

/// Upper bound of the around-the-loop parameter `u` (one full turn).
///
/// The last grid column lands exactly on this value rather than wrapping
/// back to `U_MIN`.
///
/// # Examples
/// ```
/// use config::constants::U_MAX;
/// assert!((U_MAX - 2.0 * std::f64::consts::PI).abs() < 1.0e-12);
/// ```
pub const U_MAX: f64 = 2.0 * PI;

/// Lower bound of the across-the-strip parameter `v`.
pub const V_MIN: f64 = -1.0;

/// Upper bound of the across-the-strip parameter `v`.
pub const V_MAX: f64 = 1.0;

// =============================================================================
// RESOLUTION
// =============================================================================

/// Default number of samples around the loop (grid columns).
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_U_STEPS, MIN_U_STEPS};
/// assert!(DEFAULT_U_STEPS >= MIN_U_STEPS);
/// ```
pub const DEFAULT_U_STEPS: u32 = 100;

/// Default number of subdivisions across the strip (grid rows minus one).
pub const DEFAULT_V_STEPS: u32 = 20;

/// Smallest usable column count. The `u` spacing divides by `u_steps - 1`.
pub const MIN_U_STEPS: u32 = 2;

/// Smallest usable subdivision count across the strip.
pub const MIN_V_STEPS: u32 = 1;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum number of vertices in a single generated mesh.
///
/// Safety limit against memory exhaustion. It is also well below
/// `u32::MAX`, so every vertex index fits the `u32` face representation.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!((MAX_VERTICES as u64) < u32::MAX as u64);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// GRID CONFIGURATION
// =============================================================================

/// Validated grid resolution and face-shape selection.
///
/// # Examples
/// ```
/// use config::constants::GridConfig;
/// let cfg = GridConfig::new(4, 2, false).expect("valid config");
/// assert_eq!(cfg.rows(), 3);
/// assert_eq!(cfg.columns(), 4);
/// assert_eq!(cfg.vertex_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of samples around the loop.
    pub u_steps: u32,
    /// Number of subdivisions across the strip.
    pub v_steps: u32,
    /// Emit triangle pairs instead of quads.
    pub triangulate: bool,
}

impl GridConfig {
    /// Builds a configuration enforcing the minimum step counts and the
    /// vertex limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, GridConfig};
    /// assert_eq!(GridConfig::new(1, 4, false), Err(ConfigError::InvalidUSteps(1)));
    /// assert_eq!(GridConfig::new(8, 0, true), Err(ConfigError::InvalidVSteps(0)));
    /// ```
    pub fn new(u_steps: u32, v_steps: u32, triangulate: bool) -> Result<Self, ConfigError> {
        if u_steps < MIN_U_STEPS {
            return Err(ConfigError::InvalidUSteps(u_steps));
        }
        if v_steps < MIN_V_STEPS {
            return Err(ConfigError::InvalidVSteps(v_steps));
        }
        let count = (u_steps as u64) * (v_steps as u64 + 1);
        if count > MAX_VERTICES as u64 {
            return Err(ConfigError::GridTooLarge {
                count,
                max: MAX_VERTICES,
            });
        }
        Ok(Self {
            u_steps,
            v_steps,
            triangulate,
        })
    }

    /// Number of grid rows, `v_steps + 1`.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.v_steps + 1
    }

    /// Number of grid columns, equal to `u_steps`.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.u_steps
    }

    /// Total number of parameter samples (and vertices).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rows() as usize * self.columns() as usize
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            u_steps: DEFAULT_U_STEPS,
            v_steps: DEFAULT_V_STEPS,
            triangulate: false,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when fewer than two samples are requested around the loop.
    InvalidUSteps(u32),
    /// Raised when no subdivision across the strip is requested.
    InvalidVSteps(u32),
    /// Raised when the grid would exceed [`MAX_VERTICES`].
    GridTooLarge {
        /// Requested vertex count.
        count: u64,
        /// Allowed maximum.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUSteps(value) => {
                write!(f, "u_steps must be >= {MIN_U_STEPS}: {value}")
            }
            ConfigError::InvalidVSteps(value) => {
                write!(f, "v_steps must be >= {MIN_V_STEPS}: {value}")
            }
            ConfigError::GridTooLarge { count, max } => {
                write!(f, "grid has {count} vertices (max: {max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
