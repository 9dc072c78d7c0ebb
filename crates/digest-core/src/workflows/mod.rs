//! # Workflows Module
//!
//! Top-level entry points. A workflow validates raw input distances, seeds the
//! initial search state, runs the engine and checks the answer before handing
//! it back.
//!
//! - **Reconstruction Workflow** ([`reconstruct`]) - `compute_points`, `verify`, and the
//!   configurable `run` that also returns search statistics.

pub mod reconstruct;
