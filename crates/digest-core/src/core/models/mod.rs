//! # Models Module
//!
//! Plain-data representations used throughout the reconstruction: the
//! multiset of unresolved distances and the set of already placed points.
//!
//! Both types are cheap value types. A search step never edits a model in
//! place; it derives a new one, so every branch of the search owns an
//! independent snapshot.

pub mod multiset;
pub mod points;

/// A pairwise absolute difference between two positions.
pub type Distance = u64;

/// A position on the line, measured from the leftmost point.
pub type Point = u64;
