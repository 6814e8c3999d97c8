//! Pairwise 2D overlap tests (value-type shape descriptors, SAT core).
//!
//! Purpose
//! - Decide whether two shapes of the same kind intersect: AABB, OBB,
//!   circle, or convex polygon. Each test is a pure function over two
//!   read-only descriptors and returns a bare boolean.
//! - Keep the API minimal (KISS, YAGNI) and the comparisons exact. There is
//!   no tolerance knob; boundary behavior is part of each test's contract.
//!
//! Boundary contracts
//! - AABB: touching edges or corners count as overlap (inclusive).
//! - OBB and convex: exact touch counts as separation (exclusive).
//! - Circle: `circle_overlap` keeps the historical radius-difference
//!   formula; `circle_overlap_radius_sum` is the usual boundary-inclusive
//!   disc intersection.
//!
//! References
//! - Code cross-refs: `types::{Aabb, Obb, Circle, Convex, ShapeError}`,
//!   `sat`, `rand` (deterministic samplers for tests and benches).

pub mod rand;
mod sat;
mod types;

pub use sat::{
    aabb_overlap, circle_overlap, circle_overlap_radius_sum, convex_overlap, obb_overlap,
};
pub use types::{Aabb, Circle, Convex, Obb, ShapeError};
