//! Drag one hexagon across another and print the overlap per step.
//!
//! Purpose
//! - Show the convex SAT test on the shape it is typically demoed with: two
//!   regular hexagons of circumradius 1, one fixed and one sliding right in
//!   quarter-unit steps.
//!
//! What to expect
//! - Overlap holds until the x-extreme vertices meet near dx = 2, then the
//!   exclusive tie rule flips the report to separated.

use collide2d::{convex_overlap, Convex, Vec2};

fn main() {
    let fixed = Convex::regular(6, 1.0, Vec2::new(0.0, 0.0)).expect("hexagon");
    for step in 0..=10 {
        let dx = step as f64 * 0.25;
        let moving = fixed.translated(Vec2::new(dx, 0.0));
        let overlap = convex_overlap(&fixed, &moving);
        println!("dx={dx:.2} overlap={overlap}");
    }
}
