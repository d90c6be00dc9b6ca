// Pairwise separation sweeps.
//
// Pushes every pair of circles that is closer than `r_i + r_j + 2 * padding`
// apart along the line joining their centers, each circle taking half of the
// missing distance. Sweeps repeat until one finds nothing to fix or the pass
// limit is reached.

use crate::geometry::{Circle, Vector};

const MAX_PASSES: usize = 32;

/// Extra push, relative to the target distance, so that a corrected pair
/// does not land one rounding step short of its target.
const SEPARATION_SLACK: f64 = 1e-12;

/// Angle between successive fallback directions for coincident centers.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Resolve overlaps in place. Returns the number of sweeps that moved
/// something.
pub fn separate_overlaps(circles: &mut [Circle], padding: f64) -> usize {
    let n = circles.len();
    let mut moving_passes = 0;

    for _pass in 0..MAX_PASSES {
        let mut any_moved = false;

        for i in 0..n {
            for j in (i + 1)..n {
                let target = circles[i].r + circles[j].r + 2.0 * padding;
                let offset = Vector::between(&circles[i], &circles[j]);
                let distance = offset.length();
                if distance >= target {
                    continue;
                }

                let direction = offset
                    .unit()
                    .unwrap_or_else(|| coincident_direction(i, j));
                let shift = (target - distance) / 2.0 + target * SEPARATION_SLACK;

                circles[i].translate(-direction * shift);
                circles[j].translate(direction * shift);
                any_moved = true;
            }
        }

        if !any_moved {
            break;
        }
        moving_passes += 1;
    }

    moving_passes
}

/// Deterministic direction to split two circles sitting on the same point.
fn coincident_direction(i: usize, j: usize) -> Vector {
    Vector::from_angle(GOLDEN_ANGLE * (i + j) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separated_pair_is_untouched() {
        let mut cs = [Circle::at(-4.0, 0.0, 3.0), Circle::at(3.0, 0.0, 4.0)];
        let passes = separate_overlaps(&mut cs, 0.0);

        assert_eq!(passes, 0);
        assert_eq!(cs[0], Circle::at(-4.0, 0.0, 3.0));
        assert_eq!(cs[1], Circle::at(3.0, 0.0, 4.0));
    }

    #[test]
    fn test_overlapping_pair_is_pushed_symmetrically() {
        let mut cs = [Circle::at(0.0, 0.0, 2.0), Circle::at(1.0, 0.0, 2.0)];
        separate_overlaps(&mut cs, 0.5);

        let d = Vector::between(&cs[0], &cs[1]).length();
        assert!(d >= 5.0);
        assert!(d - 5.0 < 1e-9);
        // Midpoint does not move.
        assert!(((cs[0].x + cs[1].x) / 2.0 - 0.5).abs() < 1e-9);
        assert_eq!(cs[0].y, 0.0);
    }

    #[test]
    fn test_coincident_centers_are_split() {
        let mut cs = [Circle::new(1.0), Circle::new(1.0), Circle::new(1.0)];
        separate_overlaps(&mut cs, 0.0);

        for (i, a) in cs.iter().enumerate() {
            assert!(a.x.is_finite() && a.y.is_finite());
            for b in &cs[i + 1..] {
                assert!(Vector::between(a, b).length() >= a.r + b.r);
            }
        }
    }

    #[test]
    fn test_zero_target_needs_no_work() {
        let mut cs = [Circle::new(0.0), Circle::new(0.0)];
        assert_eq!(separate_overlaps(&mut cs, 0.0), 0);
        assert_eq!(cs[0], cs[1]);
    }
}
