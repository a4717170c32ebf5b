//! Filling geographic regions with cells.
//!
//! Geometry is kept behind the [`Region`] trait: the fill only asks where a
//! point lies relative to the region, for a point known to be inside it, and
//! whether the region has to be cut at the antimeridian first.

pub mod bbox;
pub mod polyfill;
pub mod polygon;

use crate::types::LatLng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use bbox::BBox;
pub use polyfill::{polygon_to_cells, ContainmentMode, PolygonFill};
pub use polygon::{GeoLoop, GeoPolygon};

/// Where a point lies relative to a region.
///
/// Ordered from most to least contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointLocation {
  Interior,
  Boundary,
  Exterior,
}

impl PointLocation {
  /// Interior or on the boundary.
  #[inline]
  #[must_use]
  pub fn is_inside(self) -> bool {
    self != PointLocation::Exterior
  }
}

/// Geometry a region fill can work against.
pub trait Region {
  fn classify(&self, point: &LatLng) -> PointLocation;

  /// Some point strictly inside the region, or `None` when the region is empty
  /// or degenerate.
  fn interior_point(&self) -> Option<LatLng>;

  /// Extra points on the region's boundary used to seed the fill, so that parts
  /// of the region not connected to the interior point are still reached.
  fn boundary_points(&self) -> Vec<LatLng> {
    Vec::new()
  }

  fn crosses_antimeridian(&self) -> bool;

  /// Pieces of this region that each stay on one side of the antimeridian.
  fn split_antimeridian(&self) -> Vec<Self>
  where
    Self: Sized;
}
