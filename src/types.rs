//! Plain value types shared across the crate.

use crate::cell::CellIndex;
use crate::constants::{M_180_PI, M_PI_180, MAX_CELL_BNDRY_VERTS};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point on the sphere, in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl LatLng {
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Builds a point from coordinates in degrees.
  #[must_use]
  pub fn from_degrees(lat: f64, lng: f64) -> Self {
    Self {
      lat: lat * M_PI_180,
      lng: lng * M_PI_180,
    }
  }

  /// Latitude in degrees.
  #[must_use]
  pub fn lat_degrees(&self) -> f64 {
    self.lat * M_180_PI
  }

  /// Longitude in degrees.
  #[must_use]
  pub fn lng_degrees(&self) -> f64 {
    self.lng * M_180_PI
  }

  #[must_use]
  pub fn is_finite(&self) -> bool {
    self.lat.is_finite() && self.lng.is_finite()
  }
}

/// Vertices of a cell boundary in counter-clockwise order.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBoundary {
  num_verts: usize,
  verts: [LatLng; MAX_CELL_BNDRY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [LatLng::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

impl CellBoundary {
  pub(crate) fn push(&mut self, vert: LatLng) {
    if self.num_verts < MAX_CELL_BNDRY_VERTS {
      self.verts[self.num_verts] = vert;
      self.num_verts += 1;
    }
  }

  /// The boundary vertices.
  #[must_use]
  pub fn verts(&self) -> &[LatLng] {
    &self.verts[..self.num_verts]
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.num_verts
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.num_verts == 0
  }
}

/// A cell produced by a ring or disk traversal, with its grid distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingCell {
  pub cell: CellIndex,
  pub distance: u32,
}

/// IJ hexagon coordinates, axes 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  pub i: i32,
  pub j: i32,
}

impl CoordIJ {
  #[must_use]
  pub const fn new(i: i32, j: i32) -> Self {
    Self { i, j }
  }
}
