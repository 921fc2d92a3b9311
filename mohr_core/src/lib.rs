//! # mohr_core - Mohr's Circle Calculation Engine
//!
//! `mohr_core` is the computational heart of the Mohr's circle tools. It turns a
//! plane stress state and a plane inclination into the circle geometry,
//! principal stresses, transformed stresses, and a set of plain numeric plot
//! primitives that any chart layer can draw. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Renderer-Agnostic**: Geometry is points and segments, never draw calls
//!
//! ## Quick Start
//!
//! ```rust
//! use mohr_core::calculations::mohr_circle::{calculate, MohrInput};
//!
//! let input = MohrInput::new(100.0, -50.0, 40.0, 0.0);
//! let result = calculate(&input).unwrap();
//!
//! assert!((result.circle.center - 25.0).abs() < 1e-9);
//! assert!((result.circle.radius - 85.0).abs() < 1e-9);
//! assert!((result.principal.major - 110.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Stress transformation (Mohr's circle)
//! - [`plot`] - Circle samples, construction lines, markers, chart layout
//! - [`input`] - Text form parsing and reset
//! - [`report`] - Labelled, formatted result values
//! - [`settings`] - Sample count and formatting configuration
//! - [`units`] - Type-safe angle wrappers
//! - [`errors`] - Structured error types
//! - [`telemetry`] - Optional tracing subscriber setup

pub mod calculations;
pub mod errors;
pub mod input;
pub mod plot;
pub mod report;
pub mod settings;
pub mod telemetry;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::mohr_circle::{calculate, calculate_with, MohrInput, MohrResult};
pub use errors::{CalcError, CalcResult};
pub use input::{InputField, StressInputForm};
pub use report::ResultsReport;
pub use settings::{MohrSettings, PlotSettings, ReportSettings};
