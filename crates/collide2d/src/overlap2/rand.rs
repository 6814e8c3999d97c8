//! Random shape samplers (replay tokens, test and bench tooling).
//!
//! Purpose
//! - Provide small, deterministic shape sources for property tests and
//!   benchmarks. Every draw is keyed by a `ReplayToken` `(seed, index)` so a
//!   failing case can be replayed exactly.
//!
//! Model
//! - Boxes and circles draw centers and extents uniformly from the ranges in
//!   their cfg structs.
//! - Convex polygons place vertices on one circle at jittered but strictly
//!   increasing angles. Points on a common circle in angular order are
//!   convex in CCW winding by construction, so no hull pass is needed.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Aabb, Circle, Convex, Obb};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over (seed, index) so neighboring indices decorrelate.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed.wrapping_add(mix(self.index ^ 0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Box sampler configuration, shared by the AABB and OBB draws.
#[derive(Clone, Copy, Debug)]
pub struct BoxCfg {
    /// Centers drawn uniformly from `[-center_spread, center_spread]²`.
    pub center_spread: f64,
    /// Half-extents drawn uniformly from `[half_extent_min, half_extent_max]`.
    pub half_extent_min: f64,
    pub half_extent_max: f64,
}
impl Default for BoxCfg {
    fn default() -> Self {
        Self {
            center_spread: 2.0,
            half_extent_min: 0.1,
            half_extent_max: 1.5,
        }
    }
}

/// Circle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CircleCfg {
    /// Centers drawn uniformly from `[-center_spread, center_spread]²`.
    pub center_spread: f64,
    /// Radii drawn uniformly from `[radius_min, radius_max]`.
    pub radius_min: f64,
    pub radius_max: f64,
}
impl Default for CircleCfg {
    fn default() -> Self {
        Self {
            center_spread: 2.0,
            radius_min: 0.1,
            radius_max: 1.5,
        }
    }
}

/// Convex sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ConvexCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to
    /// [0, 0.49] so the vertex angles stay strictly increasing.
    pub angle_jitter_frac: f64,
    /// Circumradius of the vertex circle.
    pub radius: f64,
    /// Centers drawn uniformly from `[-center_spread, center_spread]²`.
    pub center_spread: f64,
}
impl Default for ConvexCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.3,
            radius: 1.0,
            center_spread: 2.0,
        }
    }
}

/// Draw an axis-aligned box.
pub fn draw_aabb(cfg: BoxCfg, tok: ReplayToken) -> Option<Aabb> {
    let mut rng = tok.to_std_rng();
    let center = draw_center(cfg.center_spread, &mut rng);
    let (hx, hy) = draw_half_extents(cfg, &mut rng);
    Aabb::from_center_half_extents(center, hx, hy).ok()
}

/// Draw an oriented box with a uniform rotation in [0, 2π).
pub fn draw_obb(cfg: BoxCfg, tok: ReplayToken) -> Option<Obb> {
    let mut rng = tok.to_std_rng();
    let center = draw_center(cfg.center_spread, &mut rng);
    let (hx, hy) = draw_half_extents(cfg, &mut rng);
    let rotation = rng.gen::<f64>() * std::f64::consts::TAU;
    Obb::new(center, 2.0 * hx, 2.0 * hy, rotation).ok()
}

/// Draw a circle.
pub fn draw_circle(cfg: CircleCfg, tok: ReplayToken) -> Option<Circle> {
    let mut rng = tok.to_std_rng();
    let center = draw_center(cfg.center_spread, &mut rng);
    let lo = cfg.radius_min.max(0.0);
    let hi = cfg.radius_max.max(lo);
    let radius = rng.gen_range(lo..=hi);
    Circle::new(center, radius).ok()
}

/// Draw a convex polygon: vertices on one circle at jittered, strictly
/// increasing angles (CCW winding).
pub fn draw_convex(cfg: ConvexCfg, tok: ReplayToken) -> Option<Convex> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r = cfg.radius.max(1e-9);
    let center = draw_center(cfg.center_spread, &mut rng);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let verts = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + k as f64 * delta + jitter;
            let (sin, cos) = th.sin_cos();
            center + Vector2::new(cos, sin) * r
        })
        .collect();
    Convex::new(verts).ok()
}

fn draw_center<R: Rng>(spread: f64, rng: &mut R) -> Vector2<f64> {
    let s = spread.abs();
    if !s.is_finite() {
        return Vector2::zeros();
    }
    Vector2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s))
}

fn draw_half_extents<R: Rng>(cfg: BoxCfg, rng: &mut R) -> (f64, f64) {
    let lo = cfg.half_extent_min.max(0.0);
    let hi = cfg.half_extent_max.max(lo);
    (rng.gen_range(lo..=hi), rng.gen_range(lo..=hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draws() {
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(
            draw_aabb(BoxCfg::default(), tok).expect("aabb"),
            draw_aabb(BoxCfg::default(), tok).expect("aabb")
        );
        assert_eq!(
            draw_obb(BoxCfg::default(), tok).expect("obb"),
            draw_obb(BoxCfg::default(), tok).expect("obb")
        );
        assert_eq!(
            draw_circle(CircleCfg::default(), tok).expect("circle"),
            draw_circle(CircleCfg::default(), tok).expect("circle")
        );
        assert_eq!(
            draw_convex(ConvexCfg::default(), tok).expect("convex"),
            draw_convex(ConvexCfg::default(), tok).expect("convex")
        );
    }

    #[test]
    fn distinct_indices_vary() {
        let a = draw_convex(ConvexCfg::default(), ReplayToken { seed: 1, index: 0 });
        let b = draw_convex(ConvexCfg::default(), ReplayToken { seed: 1, index: 1 });
        assert_ne!(a.expect("convex"), b.expect("convex"));
    }

    #[test]
    fn sampled_polygons_are_convex_ccw() {
        for index in 0..64 {
            let tok = ReplayToken { seed: 9, index };
            let poly = draw_convex(ConvexCfg::default(), tok).expect("convex");
            let v = poly.vertices();
            for i in 0..v.len() {
                let a = v[i];
                let b = v[(i + 1) % v.len()];
                let c = v[(i + 2) % v.len()];
                let ab = b - a;
                let bc = c - b;
                let cross = ab.x * bc.y - ab.y * bc.x;
                assert!(cross > 0.0, "non-convex corner {i} at index {index}");
            }
        }
    }

    #[test]
    fn non_finite_spread_falls_back_to_origin() {
        for spread in [f64::NAN, f64::INFINITY] {
            let cfg = BoxCfg {
                center_spread: spread,
                ..BoxCfg::default()
            };
            let b = draw_aabb(cfg, ReplayToken { seed: 5, index: 1 }).expect("aabb");
            let center = (b.upper() + b.lower()) * 0.5;
            assert_eq!(center, Vector2::zeros());
        }
    }

    #[test]
    fn draws_respect_cfg_ranges() {
        let cfg = BoxCfg {
            center_spread: 0.5,
            half_extent_min: 0.2,
            half_extent_max: 0.4,
        };
        for index in 0..32 {
            let tok = ReplayToken { seed: 3, index };
            let b = draw_aabb(cfg, tok).expect("aabb");
            let he = (b.upper() - b.lower()) * 0.5;
            assert!(he.x >= 0.2 - 1e-12 && he.x <= 0.4 + 1e-12);
            assert!(he.y >= 0.2 - 1e-12 && he.y <= 0.4 + 1e-12);
            let c = (b.upper() + b.lower()) * 0.5;
            assert!(c.x.abs() <= 0.5 + 1e-12 && c.y.abs() <= 0.5 + 1e-12);
        }
    }
}
