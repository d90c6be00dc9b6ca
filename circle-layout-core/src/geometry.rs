//! 2D vectors and circles shared by the packing and layout code.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Anything with a center point.
pub trait Positioned {
    fn position(&self) -> Vector;
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `a` to `b`.
    ///
    /// The direction depends on argument order, the length does not.
    pub fn between(a: &impl Positioned, b: &impl Positioned) -> Vector {
        b.position() - a.position()
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Vector {
        Vector::new(angle.cos(), angle.sin())
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Same direction with length 1, or `None` for the zero vector.
    pub fn unit(&self) -> Option<Vector> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Vector::new(self.x / len, self.y / len))
        } else {
            None
        }
    }
}

impl Positioned for Vector {
    fn position(&self) -> Vector {
        *self
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// A circle. `r` is an input to layout, `x`/`y` are written by it.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub r: f64,
}

impl Circle {
    /// Circle of radius `r` centered at the origin.
    pub fn new(r: f64) -> Self {
        Self { x: 0.0, y: 0.0, r }
    }

    pub fn at(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }

    pub fn center(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn set_center(&mut self, center: Vector) {
        self.x = center.x;
        self.y = center.y;
    }

    pub fn translate(&mut self, offset: Vector) {
        self.x += offset.x;
        self.y += offset.y;
    }

    /// Same center, radius grown by `amount` on every side.
    pub fn grown(&self, amount: f64) -> Circle {
        Circle { r: self.r + amount, ..*self }
    }

    /// Distance from `self`'s center to the far side of `other`.
    pub fn reach(&self, other: &Circle) -> f64 {
        Vector::between(self, other).length() + other.r
    }
}

impl Positioned for Circle {
    fn position(&self) -> Vector {
        self.center()
    }
}
