//! Latitude/longitude bounding boxes.

use crate::constants::M_2PI;
use crate::types::LatLng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Box bounded by two parallels and two meridians, in radians.
///
/// `east < west` marks a box spanning the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  pub north: f64,
  pub south: f64,
  pub east: f64,
  pub west: f64,
}

impl BBox {
  /// Tightest box around `verts`. Longitudes are taken as given, so a loop
  /// spanning the antimeridian must be unwrapped first.
  pub fn from_verts(verts: &[LatLng]) -> Self {
    let mut bbox = BBox {
      north: f64::MIN,
      south: f64::MAX,
      east: f64::MIN,
      west: f64::MAX,
    };
    for v in verts {
      bbox.north = bbox.north.max(v.lat);
      bbox.south = bbox.south.min(v.lat);
      bbox.east = bbox.east.max(v.lng);
      bbox.west = bbox.west.min(v.lng);
    }
    bbox
  }

  #[inline]
  pub fn is_transmeridian(&self) -> bool {
    self.east < self.west
  }

  /// Angular width, accounting for the antimeridian.
  pub fn width(&self) -> f64 {
    if self.is_transmeridian() {
      self.east - self.west + M_2PI
    } else {
      self.east - self.west
    }
  }

  pub fn height(&self) -> f64 {
    self.north - self.south
  }

  pub fn contains(&self, point: &LatLng, tolerance: f64) -> bool {
    if point.lat < self.south - tolerance || point.lat > self.north + tolerance {
      return false;
    }
    if self.is_transmeridian() {
      point.lng >= self.west - tolerance || point.lng <= self.east + tolerance
    } else {
      point.lng >= self.west - tolerance && point.lng <= self.east + tolerance
    }
  }
}
