use crate::cell::CellIndex;
use crate::error::GridError;
use crate::local_ij::cell_to_local_ijk;

/// Number of steps between two cells of the same resolution.
///
/// Returns `-1` when no local coordinate frame spans both cells, which happens
/// across more than one face or around some pentagons. Invalid cells and mixed
/// resolutions are errors.
pub fn grid_distance(origin: CellIndex, destination: CellIndex) -> Result<i64, GridError> {
  let origin = origin.validate()?;
  let destination = destination.validate()?;
  if origin.resolution() != destination.resolution() {
    return Err(GridError::ResMismatch);
  }

  let frame = cell_to_local_ijk(origin, origin).and_then(|o| Ok((o, cell_to_local_ijk(origin, destination)?)));
  match frame {
    Ok((o, d)) => Ok(i64::from(o.distance(d))),
    Err(GridError::Failed | GridError::Pentagon) => Ok(-1),
    Err(err) => Err(err),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::direction::Direction;
  use crate::traversal::grid_disk::grid_disk_distances;

  #[test]
  fn known_distances() {
    let origin = CellIndex::new(0x85283473fffffff);
    assert_eq!(grid_distance(origin, origin), Ok(0));
    assert_eq!(grid_distance(origin, CellIndex::new(0x85283477fffffff)), Ok(1));
    assert_eq!(grid_distance(origin, CellIndex::new(0x8528342bfffffff)), Ok(2));
  }

  #[test]
  fn distance_matches_disk_rings() {
    let origin = CellIndex::new(0x8928308280fffff);
    for rc in grid_disk_distances(origin, 4).unwrap() {
      assert_eq!(grid_distance(origin, rc.cell), Ok(i64::from(rc.distance)));
    }
  }

  #[test]
  fn distance_is_symmetric_nearby() {
    let origin = CellIndex::new(0x8928308280fffff);
    for rc in grid_disk_distances(origin, 3).unwrap() {
      assert_eq!(grid_distance(rc.cell, origin), grid_distance(origin, rc.cell));
    }
  }

  #[test]
  fn unreachable_frame_is_negative() {
    let a = CellIndex::new(0x85285aa7fffffff);
    let b = CellIndex::new(0x851d9b1bfffffff);
    assert_eq!(grid_distance(a, b), Ok(-1));
  }

  #[test]
  fn mismatched_inputs() {
    let a = CellIndex::new(0x85283473fffffff);
    let b = CellIndex::from_parts(6, 20, Direction::Center);
    assert_eq!(grid_distance(a, b), Err(GridError::ResMismatch));
    assert_eq!(grid_distance(a, CellIndex::new(0)), Err(GridError::CellInvalid));
  }
}
