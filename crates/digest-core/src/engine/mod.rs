//! # Engine Module
//!
//! The search machinery of the reconstruction.
//!
//! ## Architecture
//!
//! - **Search States** ([`state`]) - Value-isolated `(multiset, point set)` pairs, the search outcome
//!   and search statistics
//! - **Candidate Generation** ([`candidates`]) - The two placements implied by the largest unresolved
//!   distance, filtered against the remaining multiset
//! - **Backtracking** ([`solver`]) - Depth-first exploration over an explicit work stack
//! - **Configuration** ([`config`]) - Expansion budget, shape validation and verification switches
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Every state owns its own copies of the multiset and point set; a branch is
//! abandoned by dropping its state, never by rolling back shared data.

pub mod candidates;
pub mod config;
pub mod error;
pub mod progress;
pub mod solver;
pub mod state;
