//! Shared UI components reusable across result modules
//!
//! Contains:
//! - `diagrams` - Canvas drawing for Mohr's circle

pub mod diagrams;
