// Front-chain sibling placement.
//
// Circles are placed one at a time, each tangent to two circles that are
// adjacent on the "front chain" (the cyclic outer boundary of everything placed
// so far). If the candidate spot intersects another chain circle, the chain is
// cut back to that circle and the candidate is retried. After every insertion
// the next anchor pair is the chain pair whose weighted midpoint lies closest to
// the origin, which keeps the arrangement round and compact.
//
// Properties:
// - Deterministic: input order fully determines the result
// - Tangency is exact for the first two circles
// - Every placed circle touches at least one earlier one

use crate::geometry::{Circle, Vector};

/// Overlap smaller than this is treated as touching.
const INTERSECT_TOLERANCE: f64 = 1e-6;

/// Cyclic doubly linked list over circle indices.
#[derive(Debug)]
struct FrontChain {
    next: Vec<usize>,
    prev: Vec<usize>,
}

impl FrontChain {
    fn new(len: usize) -> Self {
        Self {
            next: (0..len).collect(),
            prev: (0..len).collect(),
        }
    }

    /// Make `b` directly follow `a`, dropping whatever was between them.
    fn link(&mut self, a: usize, b: usize) {
        self.next[a] = b;
        self.prev[b] = a;
    }
}

/// Assign positions to `circles` so that they touch without overlapping.
///
/// Radii are read, `x`/`y` are overwritten. The result is not centered; callers
/// translate it afterwards.
pub fn place_siblings(circles: &mut [Circle]) {
    let n = circles.len();
    if n == 0 {
        return;
    }

    circles[0].set_center(Vector::ZERO);
    if n == 1 {
        return;
    }

    // First two side by side on the x axis, touching at the origin.
    let (r0, r1) = (circles[0].r, circles[1].r);
    circles[0].set_center(Vector::new(-r1, 0.0));
    circles[1].set_center(Vector::new(r0, 0.0));
    if n == 2 {
        return;
    }

    let third = tangent_position(&circles[1], &circles[0], circles[2].r);
    circles[2].set_center(third);

    let mut chain = FrontChain::new(n);
    chain.link(0, 1);
    chain.link(1, 2);
    chain.link(2, 0);

    let (mut a, mut b) = (0, 1);
    let mut i = 3;

    'pack: while i < n {
        let pos = tangent_position(&circles[a], &circles[b], circles[i].r);
        circles[i].set_center(pos);
        let candidate = circles[i];

        // Walk outwards from the anchor pair in both directions, always
        // advancing the side that has covered less arc so far.
        let (mut j, mut k) = (chain.next[b], chain.prev[a]);
        let (mut sj, mut sk) = (circles[b].r, circles[a].r);
        loop {
            if sj <= sk {
                if intersects(&circles[j], &candidate) {
                    b = j;
                    chain.link(a, b);
                    continue 'pack;
                }
                sj += circles[j].r;
                j = chain.next[j];
            } else {
                if intersects(&circles[k], &candidate) {
                    a = k;
                    chain.link(a, b);
                    continue 'pack;
                }
                sk += circles[k].r;
                k = chain.prev[k];
            }
            if j == chain.next[k] {
                break;
            }
        }

        chain.link(a, i);
        chain.link(i, b);
        b = i;

        let mut best = a;
        let mut best_score = centroid_score(circles, a, chain.next[a]);
        let mut cur = chain.next[b];
        while cur != b {
            let score = centroid_score(circles, cur, chain.next[cur]);
            if score < best_score {
                best = cur;
                best_score = score;
            }
            cur = chain.next[cur];
        }
        a = best;
        b = chain.next[a];
        i += 1;
    }
}

/// Center for a circle of radius `r` tangent to both `b` and `a`.
///
/// Of the two tangent spots, this picks the one to the left of the direction
/// from `a` to `b`, which is the outside of a counter-clockwise front chain.
fn tangent_position(b: &Circle, a: &Circle, r: f64) -> Vector {
    let d = Vector::between(a, b);
    let d2 = d.x * d.x + d.y * d.y;
    if d2 == 0.0 {
        return Vector::new(a.x + r, a.y);
    }

    let a2 = (a.r + r) * (a.r + r);
    let b2 = (b.r + r) * (b.r + r);
    if a2 > b2 {
        let x = (d2 + b2 - a2) / (2.0 * d2);
        let y = (b2 / d2 - x * x).max(0.0).sqrt();
        Vector::new(b.x - x * d.x - y * d.y, b.y - x * d.y + y * d.x)
    } else {
        let x = (d2 + a2 - b2) / (2.0 * d2);
        let y = (a2 / d2 - x * x).max(0.0).sqrt();
        Vector::new(a.x + x * d.x - y * d.y, a.y + x * d.y + y * d.x)
    }
}

fn intersects(a: &Circle, b: &Circle) -> bool {
    let dr = a.r + b.r - INTERSECT_TOLERANCE;
    let d = Vector::between(a, b);
    dr > 0.0 && dr * dr > d.x * d.x + d.y * d.y
}

/// Squared distance from the origin to the radius-weighted contact point of
/// the chain pair `(a, b)`.
fn centroid_score(circles: &[Circle], a: usize, b: usize) -> f64 {
    let (ca, cb) = (&circles[a], &circles[b]);
    let ab = ca.r + cb.r;
    let p = if ab > 0.0 {
        Vector::new(
            (ca.x * cb.r + cb.x * ca.r) / ab,
            (ca.y * cb.r + cb.y * ca.r) / ab,
        )
    } else {
        (ca.center() + cb.center()) * 0.5
    };
    p.x * p.x + p.y * p.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circles(radii: &[f64]) -> Vec<Circle> {
        radii.iter().map(|&r| Circle::new(r)).collect()
    }

    fn assert_no_overlap(circles: &[Circle]) {
        for (i, a) in circles.iter().enumerate() {
            for b in &circles[i + 1..] {
                let d = Vector::between(a, b).length();
                assert!(d >= a.r + b.r - 1e-5, "{a:?} overlaps {b:?} (d = {d})");
            }
        }
    }

    #[test]
    fn test_first_two_touch_on_x_axis() {
        let mut cs = circles(&[3.0, 4.0]);
        place_siblings(&mut cs);

        assert_eq!(cs[0], Circle::at(-4.0, 0.0, 3.0));
        assert_eq!(cs[1], Circle::at(3.0, 0.0, 4.0));
    }

    #[test]
    fn test_third_circle_touches_both() {
        let mut cs = circles(&[3.0, 4.0, 5.0]);
        place_siblings(&mut cs);

        let d02 = Vector::between(&cs[0], &cs[2]).length();
        let d12 = Vector::between(&cs[1], &cs[2]).length();
        assert!((d02 - 8.0).abs() < 1e-9);
        assert!((d12 - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_tangent_position_is_tangent() {
        let a = Circle::at(0.0, 0.0, 2.0);
        let b = Circle::at(5.0, 0.0, 3.0);
        let p = tangent_position(&b, &a, 1.0);

        assert!((Vector::between(&a, &p).length() - 3.0).abs() < 1e-9);
        assert!((Vector::between(&b, &p).length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_many_mixed_circles_do_not_overlap() {
        let radii: Vec<f64> = (0..40).map(|i| 1.0 + ((i * 7) % 11) as f64).collect();
        let mut cs = circles(&radii);
        place_siblings(&mut cs);

        assert_no_overlap(&cs);
        for c in &cs {
            assert!(c.x.is_finite() && c.y.is_finite());
        }
    }

    #[test]
    fn test_zero_radii_stay_finite() {
        let mut cs = circles(&[0.0, 0.0, 0.0, 0.0]);
        place_siblings(&mut cs);

        for c in &cs {
            assert!(c.x.is_finite() && c.y.is_finite());
        }
    }

    #[test]
    fn test_equal_circles_stay_compact() {
        let mut cs = circles(&[1.0; 7]);
        place_siblings(&mut cs);

        assert_no_overlap(&cs);
        // Seven unit circles fit in a hexagonal cluster spanning about 3 radii
        // around its middle; the whole pack must stay near that.
        let cx = cs.iter().map(|c| c.x).sum::<f64>() / 7.0;
        let cy = cs.iter().map(|c| c.y).sum::<f64>() / 7.0;
        let middle = Vector::new(cx, cy);
        for c in &cs {
            assert!(Vector::between(&middle, c).length() + c.r < 4.0);
        }
    }
}
