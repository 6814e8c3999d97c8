//! Pairwise overlap tests for 2D shapes.
//!
//! The crate answers exactly one question for four shape kinds: do two
//! axis-aligned boxes, oriented boxes, circles, or convex polygons overlap,
//! yes or no. The box and polygon tests are separating-axis reductions.
//! There is no contact manifold, no broad phase, and no response solving.
//!
//! Shape descriptors validate their geometric preconditions once, at
//! construction (`ShapeError`), so the overlap tests themselves are total:
//! any two constructed shapes produce a boolean, never a panic.

pub mod overlap2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so call sites read like the 2D notation.
pub use nalgebra::Vector2 as Vec2;
pub use overlap2::{
    aabb_overlap, circle_overlap, circle_overlap_radius_sum, convex_overlap, obb_overlap, Aabb,
    Circle, Convex, Obb, ShapeError,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::overlap2::rand::{
        draw_aabb, draw_circle, draw_convex, draw_obb, BoxCfg, CircleCfg, ConvexCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::overlap2::{
        aabb_overlap, circle_overlap, circle_overlap_radius_sum, convex_overlap, obb_overlap,
        Aabb, Circle, Convex, Obb, ShapeError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
