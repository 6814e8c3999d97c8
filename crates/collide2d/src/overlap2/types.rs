//! Shape descriptors and construction-time validation.
//!
//! - `Aabb`, `Obb`, `Circle`, `Convex`: immutable value descriptors whose
//!   geometric preconditions are checked once, in `new`. Fields stay private
//!   so a constructed shape can never be mutated out of its invariants.
//! - `ShapeError`: the rejection taxonomy. Degenerate-but-harmless inputs
//!   (zero extents, zero radii, duplicate vertices) construct fine; only
//!   inputs that make a descriptor meaningless are rejected.
//!
//! References
//! - Code cross-refs: `sat` (the overlap tests these invariants keep total).

use std::fmt;

use nalgebra::Vector2;

/// Rejection reasons for shape construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// AABB corner ordering `lower <= upper` fails on some axis. NaN bounds
    /// fail the ordering check as well.
    BoundsOutOfOrder,
    /// OBB width or height is negative or NaN.
    NegativeExtent,
    /// Radius is negative or NaN.
    NegativeRadius,
    /// Convex polygon needs at least three vertices.
    TooFewVertices { got: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsOutOfOrder => write!(f, "aabb bounds out of order (lower > upper)"),
            Self::NegativeExtent => write!(f, "obb extents must be >= 0"),
            Self::NegativeRadius => write!(f, "radius must be >= 0"),
            Self::TooFewVertices { got } => {
                write!(f, "convex polygon needs >= 3 vertices, got {got}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Axis-aligned box described by its lower-left and upper-right corners.
///
/// Invariant: `lower.x <= upper.x` and `lower.y <= upper.y` (checked by
/// `new`; zero width or height is allowed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    lower: Vector2<f64>,
    upper: Vector2<f64>,
}

impl Aabb {
    /// Construct from ordered corners.
    pub fn new(lower: Vector2<f64>, upper: Vector2<f64>) -> Result<Self, ShapeError> {
        if lower.x <= upper.x && lower.y <= upper.y {
            Ok(Self { lower, upper })
        } else {
            Err(ShapeError::BoundsOutOfOrder)
        }
    }

    /// Box centered at `center` with half-extents `hx`, `hy`.
    pub fn from_center_half_extents(
        center: Vector2<f64>,
        hx: f64,
        hy: f64,
    ) -> Result<Self, ShapeError> {
        let he = Vector2::new(hx, hy);
        Self::new(center - he, center + he)
    }

    /// Lower-left corner.
    #[inline]
    pub fn lower(&self) -> Vector2<f64> {
        self.lower
    }

    /// Upper-right corner.
    #[inline]
    pub fn upper(&self) -> Vector2<f64> {
        self.upper
    }

    /// The same box shifted by `t`.
    #[inline]
    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            lower: self.lower + t,
            upper: self.upper + t,
        }
    }
}

/// Oriented box: center `pivot`, full `width`/`height`, and `rotation` in
/// radians (counterclockwise from the x-axis).
///
/// Invariant: `width >= 0` and `height >= 0` (checked by `new`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obb {
    pivot: Vector2<f64>,
    width: f64,
    height: f64,
    rotation: f64,
}

impl Obb {
    /// Construct from center, full extents, and rotation.
    pub fn new(
        pivot: Vector2<f64>,
        width: f64,
        height: f64,
        rotation: f64,
    ) -> Result<Self, ShapeError> {
        if width >= 0.0 && height >= 0.0 {
            Ok(Self {
                pivot,
                width,
                height,
                rotation,
            })
        } else {
            Err(ShapeError::NegativeExtent)
        }
    }

    #[inline]
    pub fn pivot(&self) -> Vector2<f64> {
        self.pivot
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Local unit axes `(cos θ, sin θ)` and `(−sin θ, cos θ)`.
    #[inline]
    pub fn local_axes(&self) -> (Vector2<f64>, Vector2<f64>) {
        let (sin, cos) = self.rotation.sin_cos();
        (Vector2::new(cos, sin), Vector2::new(-sin, cos))
    }

    /// World-space corner loop, counterclockwise for positive extents.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        let (u, v) = self.local_axes();
        let hu = u * (0.5 * self.width);
        let hv = v * (0.5 * self.height);
        [
            self.pivot - hu - hv,
            self.pivot + hu - hv,
            self.pivot + hu + hv,
            self.pivot - hu + hv,
        ]
    }

    /// The same box shifted by `t`.
    #[inline]
    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            pivot: self.pivot + t,
            ..*self
        }
    }

    /// The box orbited around `point` by `angle` radians: the pivot rotates
    /// about `point` and the box rotation accumulates `angle`.
    pub fn rotated_about(&self, point: Vector2<f64>, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let d = self.pivot - point;
        let pivot = point + Vector2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y);
        Self {
            pivot,
            rotation: self.rotation + angle,
            ..*self
        }
    }
}

/// Circle: center `pivot` and `radius`.
///
/// Invariant: `radius >= 0` (checked by `new`; a zero radius is a point).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pivot: Vector2<f64>,
    radius: f64,
}

impl Circle {
    /// Construct from center and radius.
    pub fn new(pivot: Vector2<f64>, radius: f64) -> Result<Self, ShapeError> {
        if radius >= 0.0 {
            Ok(Self { pivot, radius })
        } else {
            Err(ShapeError::NegativeRadius)
        }
    }

    #[inline]
    pub fn pivot(&self) -> Vector2<f64> {
        self.pivot
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The same circle shifted by `t`.
    #[inline]
    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            pivot: self.pivot + t,
            ..*self
        }
    }
}

/// Convex polygon: an ordered vertex loop with an implicit closing edge from
/// the last vertex back to the first.
///
/// Invariant: at least three vertices (checked by `new`). Convexity and
/// consistent winding are caller obligations; violating them leaves overlap
/// results undefined but never panics. Duplicate consecutive vertices are
/// tolerated, the resulting zero-length edges contribute no test axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Convex {
    verts: Vec<Vector2<f64>>,
}

impl Convex {
    /// Construct from an ordered vertex loop.
    pub fn new(verts: Vec<Vector2<f64>>) -> Result<Self, ShapeError> {
        if verts.len() < 3 {
            return Err(ShapeError::TooFewVertices { got: verts.len() });
        }
        Ok(Self { verts })
    }

    /// Regular polygon with `sides` vertices inscribed in a circle of
    /// `radius` around `center`, first vertex at angle 0, counterclockwise.
    pub fn regular(sides: usize, radius: f64, center: Vector2<f64>) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewVertices { got: sides });
        }
        if radius >= 0.0 {
            let step = std::f64::consts::TAU / sides as f64;
            let verts = (0..sides)
                .map(|k| {
                    let (sin, cos) = (k as f64 * step).sin_cos();
                    center + Vector2::new(cos, sin) * radius
                })
                .collect();
            Ok(Self { verts })
        } else {
            Err(ShapeError::NegativeRadius)
        }
    }

    /// Vertex loop in order.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    /// The same polygon shifted by `t`.
    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            verts: self.verts.iter().map(|&p| p + t).collect(),
        }
    }
}
