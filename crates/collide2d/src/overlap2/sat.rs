//! The four pairwise overlap tests.
//!
//! Purpose
//! - One pure function per shape-pair kind. No shared state, no allocation,
//!   no tolerance: every comparison is exact and the boundary behavior is
//!   part of the per-kind contract (see the module docs in `overlap2`).
//!
//! Axis sets
//! - `obb_overlap` projects onto the four face normals (two local axes per
//!   box).
//! - `convex_overlap` streams the edge normals of both polygons, one at a
//!   time, short-circuiting on the first separating axis. Parallel edges are
//!   not deduplicated; zero-length edges contribute no axis.
//!
//! References
//! - Code cross-refs: `types::{Aabb, Obb, Circle, Convex}`.

use nalgebra::Vector2;

use super::types::{Aabb, Circle, Convex, Obb};

/// AABB vs AABB.
///
/// Separated iff one box lies strictly beyond the other on some axis, so
/// boxes sharing an edge or corner count as overlapping.
pub fn aabb_overlap(a1: &Aabb, a2: &Aabb) -> bool {
    let d1 = a1.lower() - a2.upper();
    if d1.x > 0.0 || d1.y > 0.0 {
        return false;
    }
    let d2 = a2.lower() - a1.upper();
    if d2.x > 0.0 || d2.y > 0.0 {
        return false;
    }
    true
}

/// OBB vs OBB via separating axes.
///
/// An axis separates when the summed projected half-extents of both boxes do
/// not exceed the projected pivot distance, so exact touch counts as
/// separation.
pub fn obb_overlap(o1: &Obb, o2: &Obb) -> bool {
    let (u1, v1) = o1.local_axes();
    let (u2, v2) = o2.local_axes();
    let (hw1, hh1) = (0.5 * o1.width(), 0.5 * o1.height());
    let (hw2, hh2) = (0.5 * o2.width(), 0.5 * o2.height());
    let l = o1.pivot() - o2.pivot();
    for axis in [u1, v1, u2, v2] {
        let r1 = hw1 * u1.dot(&axis).abs() + hh1 * v1.dot(&axis).abs();
        let r2 = hw2 * u2.dot(&axis).abs() + hh2 * v2.dot(&axis).abs();
        if r1 + r2 <= l.dot(&axis).abs() {
            return false;
        }
    }
    true
}

/// Circle vs circle under the historical radius-difference criterion:
/// overlap iff `|pivot₂ − pivot₁|² <= (r₁ − r₂)²`.
///
/// Geometrically this is containment (one disc inside the other, boundary
/// included), not disc intersection: partially overlapping circles of
/// similar radii report `false`. Preserved for compatibility with existing
/// callers; use `circle_overlap_radius_sum` for the usual criterion.
pub fn circle_overlap(c1: &Circle, c2: &Circle) -> bool {
    let dr = c1.radius() - c2.radius();
    (c2.pivot() - c1.pivot()).norm_squared() <= dr * dr
}

/// Circle vs circle under the radius-sum criterion: overlap iff
/// `|pivot₂ − pivot₁|² <= (r₁ + r₂)²`, touching circles included.
pub fn circle_overlap_radius_sum(c1: &Circle, c2: &Circle) -> bool {
    let rs = c1.radius() + c2.radius();
    (c2.pivot() - c1.pivot()).norm_squared() <= rs * rs
}

/// Convex vs convex via separating axes over every edge normal of both
/// polygons. Exact touch counts as separation.
pub fn convex_overlap(c1: &Convex, c2: &Convex) -> bool {
    let v1 = c1.vertices();
    let v2 = c2.vertices();
    for verts in [v1, v2] {
        for k in 0..verts.len() {
            let edge = verts[k] - verts[(k + 1) % verts.len()];
            if let Some(axis) = unit_perp(edge) {
                if axis_separates(axis, v1, v2) {
                    return false;
                }
            }
        }
    }
    true
}

/// Interval test on one candidate axis: separated iff the summed interval
/// widths do not exceed the combined span.
#[inline]
fn axis_separates(axis: Vector2<f64>, v1: &[Vector2<f64>], v2: &[Vector2<f64>]) -> bool {
    let (min1, max1) = project(v1, axis);
    let (min2, max2) = project(v2, axis);
    (max1 - min1) + (max2 - min2) <= max1.max(max2) - min1.min(min2)
}

/// Projection interval of a vertex loop onto a unit axis.
#[inline]
fn project(verts: &[Vector2<f64>], axis: Vector2<f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in verts {
        let s = p.dot(&axis);
        min = min.min(s);
        max = max.max(s);
    }
    (min, max)
}

/// Unit perpendicular of an edge direction (90° counterclockwise), or
/// `None` for a zero or non-finite edge.
#[inline]
fn unit_perp(edge: Vector2<f64>) -> Option<Vector2<f64>> {
    let norm = edge.norm();
    if !(norm.is_finite()) || norm <= 0.0 {
        return None;
    }
    let e = edge / norm;
    Some(Vector2::new(-e.y, e.x))
}
