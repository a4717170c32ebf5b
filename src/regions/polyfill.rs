//! Flood fill of a region with cells at a fixed resolution.

use crate::cell::CellIndex;
use crate::constants::MAX_RES;
use crate::direction::Direction;
use crate::error::GridError;
use crate::indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
use crate::regions::{PointLocation, Region};
use crate::traversal::neighbors::neighbor_rotations;
use crate::types::LatLng;
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Which cells count as inside a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum ContainmentMode {
  /// Cell center is inside the region.
  #[default]
  Center = 0,
  /// Every boundary vertex of the cell is inside the region.
  Full = 1,
  /// The cell touches the region: its center or any boundary vertex is
  /// inside, or the cell holds one of the fill's seed points.
  Overlapping = 2,
}

impl TryFrom<u32> for ContainmentMode {
  type Error = GridError;

  fn try_from(value: u32) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(ContainmentMode::Center),
      1 => Ok(ContainmentMode::Full),
      2 => Ok(ContainmentMode::Overlapping),
      _ => Err(GridError::OptionInvalid),
    }
  }
}

/// Lazy flood fill over the cells of a region.
///
/// Each yielded cell satisfies the containment mode and appears once. Cells are
/// expanded when their center is inside the region or they satisfy the mode, so
/// a `Full` fill walks every cell a `Center` fill would. Seed cells are always
/// expanded.
#[derive(Debug, Clone)]
pub struct PolygonFill<R> {
  pieces: Vec<R>,
  mode: ContainmentMode,
  seeds: HashSet<CellIndex>,
  /// Cells waiting to be expanded, flagged with whether to yield them.
  stack: Vec<(CellIndex, bool)>,
  visited: HashSet<CellIndex>,
}

impl<R: Region> PolygonFill<R> {
  fn new(pieces: Vec<R>, res: u8, mode: ContainmentMode) -> Result<Self, GridError> {
    let mut seeds = HashSet::new();
    for piece in &pieces {
      let points = piece.interior_point().into_iter().chain(piece.boundary_points());
      for point in points {
        seeds.insert(lat_lng_to_cell(&point, res)?);
      }
    }

    let mut ordered: Vec<CellIndex> = seeds.iter().copied().collect();
    ordered.sort_unstable();
    let mut fill = PolygonFill {
      pieces,
      mode,
      stack: Vec::with_capacity(seeds.len()),
      visited: HashSet::with_capacity(seeds.len()),
      seeds,
    };
    for seed in ordered.into_iter().rev() {
      fill.visited.insert(seed);
      let (included, _) = fill.test(seed);
      fill.stack.push((seed, included));
    }
    log::debug!("polygon fill at res {res}: {} pieces, {} seeds", fill.pieces.len(), fill.seeds.len());
    Ok(fill)
  }

  fn locate(&self, point: &LatLng) -> PointLocation {
    self
      .pieces
      .iter()
      .map(|piece| piece.classify(point))
      .min()
      .unwrap_or(PointLocation::Exterior)
  }

  /// Returns `(included, expand)` for a cell.
  fn test(&self, cell: CellIndex) -> (bool, bool) {
    let center_inside = cell_to_lat_lng(cell).is_ok_and(|c| self.locate(&c).is_inside());
    let Ok(boundary) = cell_to_boundary(cell) else {
      return (false, false);
    };
    let included = match self.mode {
      ContainmentMode::Center => center_inside,
      ContainmentMode::Full => boundary.verts().iter().all(|v| self.locate(v).is_inside()),
      ContainmentMode::Overlapping => {
        center_inside || self.seeds.contains(&cell) || boundary.verts().iter().any(|v| self.locate(v).is_inside())
      }
    };
    (included, included || center_inside)
  }

  fn expand(&mut self, cell: CellIndex) {
    for dir in Direction::NEIGHBORS {
      // The deleted direction of a pentagon has no neighbor.
      let Ok((next, _)) = neighbor_rotations(cell, dir, 0) else {
        continue;
      };
      if !self.visited.insert(next) {
        continue;
      }
      let (included, expand) = self.test(next);
      if expand {
        self.stack.push((next, included));
      }
    }
  }
}

impl<R: Region> Iterator for PolygonFill<R> {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    while let Some((cell, included)) = self.stack.pop() {
      self.expand(cell);
      if included {
        return Some(cell);
      }
    }
    None
  }
}

impl<R: Region> FusedIterator for PolygonFill<R> {}

/// Cells at `res` covering `region` under `mode`.
///
/// Regions spanning the antimeridian are split first and the pieces filled
/// together, so a cell touching both pieces is yielded once. An empty or
/// degenerate region yields nothing.
///
/// # Errors
///
/// [`GridError::ResDomain`] for a resolution above 15, or
/// [`GridError::LatLngDomain`] if the region reports non-finite points.
pub fn polygon_to_cells<R: Region + Clone>(
  region: &R,
  res: u8,
  mode: ContainmentMode,
) -> Result<PolygonFill<R>, GridError> {
  if res > MAX_RES {
    return Err(GridError::ResDomain);
  }
  let pieces = if region.crosses_antimeridian() {
    region.split_antimeridian()
  } else {
    vec![region.clone()]
  };
  PolygonFill::new(pieces, res, mode)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hierarchy::cell_to_children;
  use crate::regions::{GeoLoop, GeoPolygon};
  use std::collections::BTreeSet;

  fn cell_polygon(cell: CellIndex) -> GeoPolygon {
    let boundary = cell_to_boundary(cell).unwrap();
    GeoPolygon::new(GeoLoop::from(&boundary), Vec::new())
  }

  fn square_degrees(lat0: f64, lng0: f64, size: f64) -> GeoLoop {
    GeoLoop::new(vec![
      LatLng::from_degrees(lat0, lng0),
      LatLng::from_degrees(lat0, lng0 + size),
      LatLng::from_degrees(lat0 + size, lng0 + size),
      LatLng::from_degrees(lat0 + size, lng0),
    ])
  }

  #[test]
  fn containment_mode_from_u32() {
    assert_eq!(ContainmentMode::try_from(0), Ok(ContainmentMode::Center));
    assert_eq!(ContainmentMode::try_from(2), Ok(ContainmentMode::Overlapping));
    assert_eq!(ContainmentMode::try_from(3), Err(GridError::OptionInvalid));
  }

  #[test]
  fn cell_outline_fills_with_its_children() {
    let cell: CellIndex = "8e48e1d7038d527".parse().unwrap();
    let poly = cell_polygon(cell);
    let filled: BTreeSet<CellIndex> = polygon_to_cells(&poly, 15, ContainmentMode::Center).unwrap().collect();
    let children: BTreeSet<CellIndex> = cell_to_children(cell, 15).unwrap().collect();
    assert_eq!(filled.len(), 7);
    assert_eq!(filled, children);
  }

  #[test]
  fn modes_are_nested() {
    let poly = GeoPolygon::new(square_degrees(37.7, -122.5, 0.1), Vec::new());
    let full: BTreeSet<_> = polygon_to_cells(&poly, 7, ContainmentMode::Full).unwrap().collect();
    let center: BTreeSet<_> = polygon_to_cells(&poly, 7, ContainmentMode::Center).unwrap().collect();
    let overlap: BTreeSet<_> = polygon_to_cells(&poly, 7, ContainmentMode::Overlapping).unwrap().collect();
    assert!(!full.is_empty());
    assert!(full.is_subset(&center));
    assert!(center.is_subset(&overlap));
    assert!(overlap.len() > center.len());
  }

  #[test]
  fn hole_is_left_out() {
    let outer = square_degrees(0.0, 0.0, 1.0);
    let hole = square_degrees(0.25, 0.25, 0.5);
    let solid = GeoPolygon::new(outer.clone(), Vec::new());
    let holed = GeoPolygon::new(outer, vec![hole]);
    let solid_cells: BTreeSet<_> = polygon_to_cells(&solid, 6, ContainmentMode::Center).unwrap().collect();
    let holed_cells: BTreeSet<_> = polygon_to_cells(&holed, 6, ContainmentMode::Center).unwrap().collect();
    assert!(holed_cells.len() < solid_cells.len());
    assert!(holed_cells.is_subset(&solid_cells));
    let middle = lat_lng_to_cell(&LatLng::from_degrees(0.5, 0.5), 6).unwrap();
    assert!(solid_cells.contains(&middle));
    assert!(!holed_cells.contains(&middle));
  }

  #[test]
  fn antimeridian_polygon_fills_both_sides() {
    let outer = GeoLoop::new(vec![
      LatLng::from_degrees(0.0, 179.5),
      LatLng::from_degrees(0.0, -179.5),
      LatLng::from_degrees(1.0, -179.5),
      LatLng::from_degrees(1.0, 179.5),
    ]);
    let poly = GeoPolygon::new(outer, Vec::new());
    let cells: Vec<_> = polygon_to_cells(&poly, 5, ContainmentMode::Center).unwrap().collect();
    let unique: BTreeSet<_> = cells.iter().copied().collect();
    assert_eq!(unique.len(), cells.len());
    let centers: Vec<LatLng> = cells.iter().map(|c| cell_to_lat_lng(*c).unwrap()).collect();
    assert!(centers.iter().any(|c| c.lng > 0.0));
    assert!(centers.iter().any(|c| c.lng < 0.0));
    assert!(centers.iter().all(|c| c.lng.abs() > 3.1));
  }

  #[test]
  fn empty_region_yields_nothing() {
    let poly = GeoPolygon::new(GeoLoop::default(), Vec::new());
    assert_eq!(polygon_to_cells(&poly, 5, ContainmentMode::Center).unwrap().count(), 0);
  }

  #[test]
  fn rejects_bad_resolution() {
    let poly = GeoPolygon::new(square_degrees(0.0, 0.0, 1.0), Vec::new());
    assert_eq!(polygon_to_cells(&poly, 16, ContainmentMode::Center).err(), Some(GridError::ResDomain));
  }

  #[test]
  fn fill_restarts_from_clone() {
    let poly = GeoPolygon::new(square_degrees(10.0, 10.0, 0.5), Vec::new());
    let fill = polygon_to_cells(&poly, 6, ContainmentMode::Center).unwrap();
    let first: Vec<_> = fill.clone().collect();
    let second: Vec<_> = fill.collect();
    assert_eq!(first, second);
  }
}
