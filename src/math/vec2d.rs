#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point on the plane of an icosahedron face.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

impl Vec2d {
  #[must_use]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  #[inline]
  #[must_use]
  pub fn magnitude(&self) -> f64 {
    self.x.hypot(self.y)
  }

  /// Intersection of the line through `p0`,`p1` with the line through `p2`,`p3`.
  ///
  /// The lines must not be parallel. The line parameter is computed in single
  /// precision so that boundary crossings agree with other implementations.
  #[must_use]
  pub(crate) fn intersect(p0: Vec2d, p1: Vec2d, p2: Vec2d, p3: Vec2d) -> Vec2d {
    let s1 = Vec2d::new(p1.x - p0.x, p1.y - p0.y);
    let s2 = Vec2d::new(p3.x - p2.x, p3.y - p2.y);

    let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);
    let t = f64::from(t as f32);

    Vec2d::new(p0.x + t * s1.x, p0.y + t * s1.y)
  }

  /// Equality within single precision epsilon.
  #[inline]
  #[must_use]
  pub(crate) fn almost_equals(&self, other: &Vec2d) -> bool {
    (self.x - other.x).abs() < f64::from(f32::EPSILON) && (self.y - other.y).abs() < f64::from(f32::EPSILON)
  }
}
