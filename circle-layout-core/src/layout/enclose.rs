// Smallest enclosing circle of a set of circles.
//
// Incremental basis extension (Welzl style, iterative): keep a basis of at most
// three circles whose enclosing circle covers everything checked so far. When a
// circle falls outside, extend the basis with it and restart the scan.
//
// Degenerate bases (coincident or collinear circles) can make the extension
// fail in floating point; in that case a centroid-based enclosure is returned
// instead, which is larger but always valid.

use crate::geometry::{Circle, Vector};

/// Relative slack used when checking containment during the scan.
const CONTAINMENT_EPSILON: f64 = 1e-9;

/// Compute a tight circle containing every circle in `circles`.
///
/// Returns a zero circle at the origin for an empty slice.
pub fn enclose(circles: &[Circle]) -> Circle {
    let n = circles.len();
    if n == 0 {
        return Circle::default();
    }

    let step_limit = 64 * n * n + 64;
    let mut steps = 0;
    let mut basis: Vec<Circle> = Vec::with_capacity(3);
    let mut enclosing: Option<Circle> = None;
    let mut i = 0;

    while i < n {
        steps += 1;
        if steps > step_limit {
            return enclose_from_centroid(circles);
        }

        let p = circles[i];
        if enclosing.is_some_and(|e| encloses_weak(&e, &p)) {
            i += 1;
            continue;
        }
        basis = match extend_basis(&basis, p) {
            Some(b) => b,
            None => return enclose_from_centroid(circles),
        };
        enclosing = Some(enclose_basis(&basis));
        i = 0;
    }

    match enclosing {
        Some(e) if e.x.is_finite() && e.y.is_finite() && e.r.is_finite() => e,
        _ => enclose_from_centroid(circles),
    }
}

/// Smallest basis (1 to 3 circles) whose enclosure covers `basis` and `p`.
fn extend_basis(basis: &[Circle], p: Circle) -> Option<Vec<Circle>> {
    if encloses_weak_all(&p, basis) {
        return Some(vec![p]);
    }

    for &b in basis {
        if encloses_not(&p, &b) && encloses_weak_all(&enclose_two(&b, &p), basis) {
            return Some(vec![b, p]);
        }
    }

    for (i, &bi) in basis.iter().enumerate() {
        for &bj in &basis[i + 1..] {
            if encloses_not(&enclose_two(&bi, &bj), &p)
                && encloses_not(&enclose_two(&bi, &p), &bj)
                && encloses_not(&enclose_two(&bj, &p), &bi)
                && encloses_weak_all(&enclose_three(&bi, &bj, &p), basis)
            {
                return Some(vec![bi, bj, p]);
            }
        }
    }

    None
}

fn enclose_basis(basis: &[Circle]) -> Circle {
    match basis {
        [a] => *a,
        [a, b] => enclose_two(a, b),
        [a, b, c] => enclose_three(a, b, c),
        _ => enclose_from_centroid(basis),
    }
}

/// `a` does not contain `b`.
fn encloses_not(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r;
    let d = Vector::between(a, b);
    dr < 0.0 || dr * dr < d.x * d.x + d.y * d.y
}

/// `a` contains `b`, allowing a tiny relative overshoot.
fn encloses_weak(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r + a.r.max(b.r).max(1.0) * CONTAINMENT_EPSILON;
    let d = Vector::between(a, b);
    dr > 0.0 && dr * dr > d.x * d.x + d.y * d.y
}

fn encloses_weak_all(a: &Circle, circles: &[Circle]) -> bool {
    circles.iter().all(|c| encloses_weak(a, c))
}

fn enclose_two(a: &Circle, b: &Circle) -> Circle {
    let d = Vector::between(a, b);
    let l = d.length();
    if l == 0.0 {
        return if a.r >= b.r { *a } else { *b };
    }
    let dr = b.r - a.r;
    Circle {
        x: (a.x + b.x + d.x / l * dr) / 2.0,
        y: (a.y + b.y + d.y / l * dr) / 2.0,
        r: (l + a.r + b.r) / 2.0,
    }
}

/// Circle internally tangent to all three (Apollonius' problem, outer solution).
fn enclose_three(a: &Circle, b: &Circle, c: &Circle) -> Circle {
    let (x1, y1, r1) = (a.x, a.y, a.r);
    let (x2, y2, r2) = (b.x, b.y, b.r);
    let (x3, y3, r3) = (c.x, c.y, c.r);

    let a2 = x1 - x2;
    let a3 = x1 - x3;
    let b2 = y1 - y2;
    let b3 = y1 - y3;
    let c2 = r2 - r1;
    let c3 = r3 - r1;
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - x2 * x2 - y2 * y2 + r2 * r2;
    let d3 = d1 - x3 * x3 - y3 * y3 + r3 * r3;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = -(if qa.abs() > 1e-6 {
        (qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa)
    } else {
        qc / qb
    });

    Circle {
        x: x1 + xa + xb * r,
        y: y1 + ya + yb * r,
        r,
    }
}

/// Center on the centroid, radius reaching the farthest edge.
fn enclose_from_centroid(circles: &[Circle]) -> Circle {
    if circles.is_empty() {
        return Circle::default();
    }
    let sum = circles
        .iter()
        .fold(Vector::ZERO, |acc, c| acc + c.center());
    let center = sum * (1.0 / circles.len() as f64);
    let hub = Circle::at(center.x, center.y, 0.0);
    let r = circles.iter().map(|c| hub.reach(c)).fold(0.0, f64::max);
    Circle { r, ..hub }
}
