//! Packing a set of sibling circles around a common center.
//!
//! Pipeline:
//! 1. grow every radius by `padding` and place the grown circles with the
//!    front-chain placement, so neighbours end up exactly `2 * padding` apart;
//! 2. find the smallest circle around the grown circles and move everything so
//!    that it sits on the origin;
//! 3. run separation sweeps on the real radii to absorb rounding error;
//! 4. measure the final enclosing radius from the actual positions.
//!
//! A pair skips all of that: the two centers go on the x axis, half the target
//! distance either side of the origin, so the distance is exact.

use super::enclose::enclose;
use super::separate::separate_overlaps;
use super::siblings::place_siblings;
use crate::geometry::{Circle, Vector};

/// Positioned circles together with the circle around them.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    pub circles: Vec<Circle>,
    pub enclosing: Circle,
}

/// Place `circles` so that no two are closer than `padding * 2` edge to edge,
/// and return the circle enclosing all of them.
///
/// This overwrites `x` and `y` of every circle; incoming positions are
/// ignored and radii are left alone. The enclosing circle leaves room for
/// `padding` around each circle, except when there is only one circle, which
/// it hugs exactly. It is centered on the origin unless there are exactly two
/// circles of different size.
pub fn pack(circles: &mut [Circle], padding: f64) -> Circle {
    match circles.len() {
        0 => Circle::default(),
        1 => {
            circles[0].set_center(Vector::ZERO);
            Circle::new(circles[0].r)
        }
        2 => pack_pair(circles, padding),
        _ => pack_many(circles, padding),
    }
}

/// Like [`pack`], but leaves the input alone and returns new circles in the
/// same order as `radii`.
pub fn pack_radii(radii: &[f64], padding: f64) -> Packing {
    let mut circles: Vec<Circle> = radii.iter().map(|&r| Circle::new(r)).collect();
    let enclosing = pack(&mut circles, padding);
    Packing { circles, enclosing }
}

fn pack_pair(circles: &mut [Circle], padding: f64) -> Circle {
    let half = (circles[0].r + circles[1].r + 2.0 * padding) / 2.0;
    circles[0].set_center(Vector::new(-half, 0.0));
    circles[1].set_center(Vector::new(half, 0.0));

    let hull = enclose(&[circles[0].grown(padding), circles[1].grown(padding)]);
    measure_enclosing(circles, hull.center(), padding)
}

fn pack_many(circles: &mut [Circle], padding: f64) -> Circle {
    let mut grown: Vec<Circle> = circles.iter().map(|c| c.grown(padding)).collect();
    place_siblings(&mut grown);

    let hull = enclose(&grown);
    let shift = -hull.center();
    for (circle, placed) in circles.iter_mut().zip(&grown) {
        circle.set_center(placed.center() + shift);
    }

    separate_overlaps(circles, padding);
    measure_enclosing(circles, Vector::ZERO, padding)
}

/// Smallest circle around `center` that holds every circle plus `padding`.
fn measure_enclosing(circles: &[Circle], center: Vector, padding: f64) -> Circle {
    let hub = Circle::at(center.x, center.y, 0.0);
    let r = circles
        .iter()
        .map(|c| hub.reach(c) + padding)
        .fold(0.0, f64::max);
    Circle { r, ..hub }
}
