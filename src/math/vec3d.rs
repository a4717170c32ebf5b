use crate::types::LatLng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point in 3D space, usually on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl Vec3d {
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  #[inline]
  #[must_use]
  pub fn square_distance(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }
}

impl From<LatLng> for Vec3d {
  fn from(geo: LatLng) -> Self {
    let r = geo.lat.cos();
    Vec3d::new(geo.lng.cos() * r, geo.lng.sin() * r, geo.lat.sin())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::M_PI_2;

  #[test]
  fn square_distance() {
    let origin = Vec3d::default();
    assert!(origin.square_distance(&origin).abs() < f64::EPSILON);
    assert!((origin.square_distance(&Vec3d::new(0.0, 1.0, 1.0)) - 2.0).abs() < f64::EPSILON);
    assert!((Vec3d::new(1.0, 1.0, 1.0).square_distance(&Vec3d::new(1.0, 1.0, 2.0)) - 1.0).abs() < f64::EPSILON);
  }

  #[test]
  fn from_lat_lng_is_on_unit_sphere() {
    let north = Vec3d::from(LatLng::new(M_PI_2, 0.0));
    assert!((north.z - 1.0).abs() < f64::EPSILON);

    let p = Vec3d::from(LatLng::new(0.4, -1.2));
    assert!((p.square_distance(&Vec3d::default()) - 1.0).abs() < 1e-12);
  }
}
