//! Step an oriented box past a fixed copy and print the overlap per step.
//!
//! Purpose
//! - Reproduce the classic manual probe: a 2√2 × 2√2 box tilted 45° (the
//!   diamond spanning [0, 4] on both axes) with a copy pushed right one unit
//!   at a time.
//!
//! What to expect
//! - Overlap holds through shift 3, flips to false from shift 5 on. The
//!   corner touch at shift 4 sits on the exact-touch boundary, where the
//!   exclusive tie rule reports separation up to last-ulp rounding of the
//!   45° axes.

use collide2d::{obb_overlap, Obb, Vec2};

fn main() {
    let side = 2.0 * 2.0f64.sqrt();
    let target1 = Obb::new(Vec2::new(2.0, 2.0), side, side, std::f64::consts::FRAC_PI_4)
        .expect("valid obb");
    for step in 1..=6 {
        let shift = Vec2::new(step as f64, 0.0);
        let target2 = target1.translated(shift);
        let overlap = obb_overlap(&target1, &target2);
        println!("shift=({:+.1}, {:+.1}) overlap={overlap}", shift.x, shift.y);
    }
}
