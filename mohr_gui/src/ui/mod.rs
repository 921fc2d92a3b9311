//! UI module for the Mohr GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header and theme toggle
//! - `input_panel` - Left panel: the four stress inputs and "Clear Entries"
//! - `results_panel` - Right panel: error display or calculation results
//! - `status_bar` - Bottom status messages
//!
//! # Results Panel Children
//! - `result_mohr_circle` - Formatted results and the diagram
//!
//! # Shared Components
//! - `shared/diagrams` - Canvas drawing for Mohr's circle

// Top-level panels
pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Results panel children
pub mod result_mohr_circle;

// Shared components
pub mod shared;
