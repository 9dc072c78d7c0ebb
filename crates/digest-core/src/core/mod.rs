//! # Core Module
//!
//! Stateless building blocks of the partial digest reconstruction.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - The distance multiset and the point set, both value types
//!   that are copied rather than edited when the search branches.
//! - **Utilities** ([`utils`]) - Pairwise distance computation and shape checks shared by the
//!   engine, the verification step, and callers that want to produce digests.
//!
//! Nothing in this module keeps global state or performs I/O.

pub mod models;
pub mod utils;
