//! # Config Crate
//!
//! Centralized configuration constants for the Möbius mesh generator.
//! Domain bounds, default grid resolution and safety limits are defined
//! here so the geometry crates never carry literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GridConfig, DEFAULT_U_STEPS, DEFAULT_V_STEPS};
//!
//! let cfg = GridConfig::default();
//! assert_eq!(cfg.u_steps, DEFAULT_U_STEPS);
//! assert_eq!(cfg.v_steps, DEFAULT_V_STEPS);
//! assert_eq!(cfg.rows(), DEFAULT_V_STEPS + 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Construction**: `GridConfig` can only hold usable step counts
//! - **Dependency Free**: Pure constants and plain error types

pub mod constants;
