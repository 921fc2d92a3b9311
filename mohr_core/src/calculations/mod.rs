//! # Stress Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`mohr_circle`] - Plane stress transformation via Mohr's circle

pub mod mohr_circle;

// Re-export commonly used types
pub use mohr_circle::{
    CircleGeometry, Inclination, MohrInput, MohrResult, PrincipalStresses, StressState,
    TransformedStresses,
};
