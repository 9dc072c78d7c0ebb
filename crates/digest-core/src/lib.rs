//! # Partial Digest Core Library
//!
//! Reconstruction of integer positions on a line from the multiset of all their
//! pairwise distances (the Partial Digest Problem), as used for restriction-site
//! mapping.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless data models (`DistanceMultiset`, `PointSet`) and
//!   pairwise distance utilities.
//!
//! - **[`engine`]: The Logic Core.** Candidate generation and the iterative backtracking search
//!   over value-isolated search states, together with configuration, progress reporting and
//!   error types.
//!
//! - **[`workflows`]: The Public API.** Input validation, construction of the initial state,
//!   invocation of the search and optional verification of the result.
//!
//! ```
//! use partial_digest::workflows::reconstruct::{compute_points, verify};
//!
//! let distances = [2, 2, 3, 3, 4, 5, 6, 7, 8, 10];
//! let points = compute_points(&distances).unwrap().unwrap();
//! assert_eq!(points, vec![0, 2, 4, 7, 10]);
//! assert!(verify(&points, &distances));
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
