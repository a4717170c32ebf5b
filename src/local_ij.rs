//! Coordinates of cells relative to an anchor cell.
//!
//! The local frame is the IJK grid of the anchor's base cell, unfolded across
//! at most one neighboring base cell. Coordinates are only meaningful relative
//! to the anchor they were produced with.

use crate::base_cells::{
  base_cell_direction, base_cell_neighbor, base_cell_neighbor_rotations, is_base_cell_pentagon,
  is_base_cell_polar_pentagon,
};
use crate::cell::CellIndex;
use crate::constants::{CELL_MODE, INIT_INDEX, NUM_BASE_CELLS};
use crate::coords::face::{is_class_iii, FaceCoord};
use crate::coords::CubeCoord;
use crate::direction::Direction;
use crate::error::GridError;
use crate::indexing::from_cell::descend_from_base_cell;
use crate::types::CoordIJ;

// Rotations needed to move into a neighboring base cell from a pentagon,
// indexed by [leading digit][direction]. -1 marks the deleted K axis.
#[rustfmt::skip]
const PENTAGON_ROTATIONS: [[i8; 7]; 7] = [
  [ 0, -1,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0, -1,  0,  0,  0,  1,  0],
  [ 0, -1,  0,  0,  1,  1,  0],
  [ 0, -1,  0,  5,  0,  0,  0],
  [ 0, -1,  5,  5,  0,  0,  0],
  [ 0, -1,  0,  0,  0,  0,  0],
];

// Reverse of the above, for recovering a cell when the anchor is on a pentagon.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE: [[i8; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  5,  0,  5,  0,  0,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

// Reverse rotations when the recovered cell lies on a non-polar pentagon.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[i8; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

// Reverse rotations when the recovered cell lies on a polar pentagon.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_POLAR: [[i8; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  1,  1,  1,  1,  1],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  1,  0,  0,  1,  1,  1],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  1,  1,  0,  1,  1,  1],
];

// Unfoldings that would cross more than one face, by [leading digit][direction].
#[rustfmt::skip]
const FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false],
  [false, false, false, false, false, false, false],
  [false, false, false, false, true,  true,  false],
  [false, false, false, false, true,  false, true ],
  [false, false, true,  true,  false, false, false],
  [false, false, true,  false, false, false, true ],
  [false, false, false, true,  false, true,  false],
];

#[inline]
fn rotation_count(table: &[[i8; 7]; 7], row: Direction, col: Direction) -> Result<usize, GridError> {
  usize::try_from(table[row.index()][col.index()]).map_err(|_| GridError::Pentagon)
}

#[inline]
fn check_unfoldable(leading: Direction, dir: Direction) -> Result<(), GridError> {
  if FAILED_DIRECTIONS[leading.index()][dir.index()] {
    Err(GridError::Pentagon)
  } else {
    Ok(())
  }
}

/// IJK coordinate of `cell` in the local frame anchored at `origin`.
///
/// Fails with [`GridError::Failed`] when the base cells are not adjacent and
/// with [`GridError::Pentagon`] when pentagon distortion prevents unfolding.
pub fn cell_to_local_ijk(origin: CellIndex, cell: CellIndex) -> Result<CubeCoord, GridError> {
  let origin = origin.validate()?;
  let mut h = cell.validate()?;
  let res = origin.resolution();
  if res != h.resolution() {
    return Err(GridError::ResMismatch);
  }

  let origin_base_cell = origin.base_cell();
  let base_cell = h.base_cell();

  let (dir, mut rev_dir) = if origin_base_cell == base_cell {
    (Direction::Center, Direction::Center)
  } else {
    let dir = base_cell_direction(origin_base_cell, base_cell).ok_or(GridError::Failed)?;
    let rev = base_cell_direction(base_cell, origin_base_cell).ok_or(GridError::Failed)?;
    (dir, rev)
  };

  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);
  let index_on_pent = is_base_cell_pentagon(base_cell);

  if dir != Direction::Center {
    // Undo the rotation into the neighboring base cell.
    let base_cell_rotations = base_cell_neighbor_rotations(origin_base_cell, dir).ok_or(GridError::Failed)?;
    for _ in 0..base_cell_rotations {
      if index_on_pent {
        h = h.rotate_pent60_cw();
        rev_dir = rev_dir.rotate60_cw();
        if rev_dir == Direction::K {
          rev_dir = rev_dir.rotate60_cw();
        }
      } else {
        h = h.rotate60_cw();
        rev_dir = rev_dir.rotate60_cw();
      }
    }
  }

  // Coordinates within the base cell's own frame.
  let mut fijk = FaceCoord::new(0, CubeCoord::ZERO);
  descend_from_base_cell(h, &mut fijk);
  let mut coord = fijk.coord;

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    let mut direction_rotations = 0;
    if origin_on_pent {
      let leading = origin.leading_non_zero_digit();
      check_unfoldable(leading, dir)?;
      direction_rotations = rotation_count(&PENTAGON_ROTATIONS, leading, dir)?;
      pentagon_rotations = direction_rotations;
    } else if index_on_pent {
      let leading = h.leading_non_zero_digit();
      check_unfoldable(leading, rev_dir)?;
      pentagon_rotations = rotation_count(&PENTAGON_ROTATIONS, rev_dir, leading)?;
    }
    coord = coord.rotate60_cw_by(pentagon_rotations);

    // Offset of the neighboring base cell, scaled down to this resolution.
    let offset = (1..=res).rev().fold(CubeCoord::from_direction(dir), |offset, r| {
      if is_class_iii(r) {
        offset.down_ap7()
      } else {
        offset.down_ap7r()
      }
    });
    coord = (coord + offset.rotate60_cw_by(direction_rotations)).normalize();
  } else if origin_on_pent && index_on_pent {
    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = h.leading_non_zero_digit();
    check_unfoldable(origin_leading, index_leading)?;
    coord = coord.rotate60_cw_by(rotation_count(&PENTAGON_ROTATIONS, origin_leading, index_leading)?);
  }

  Ok(coord)
}

/// Cell at local IJK coordinate `ijk` in the frame anchored at `origin`.
pub fn local_ijk_to_cell(origin: CellIndex, ijk: CubeCoord) -> Result<CellIndex, GridError> {
  let origin = origin.validate()?;
  let res = origin.resolution();
  let origin_base_cell = origin.base_cell();
  if usize::from(origin_base_cell) >= NUM_BASE_CELLS {
    return Err(GridError::CellInvalid);
  }
  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);

  let mut out = CellIndex::new(INIT_INDEX).with_mode(CELL_MODE).with_resolution(res);

  if res == 0 {
    let dir = ijk.to_direction();
    if dir == Direction::Invalid {
      return Err(GridError::Failed);
    }
    let base_cell = base_cell_neighbor(origin_base_cell, dir).ok_or(GridError::Failed)?;
    return Ok(out.with_base_cell(base_cell));
  }

  // Recover digits from the finest resolution up.
  let mut coord = ijk;
  for r in (1..=res).rev() {
    let last = coord;
    let last_center;
    if is_class_iii(r) {
      coord = coord.checked_up_ap7()?;
      last_center = coord.down_ap7();
    } else {
      coord = coord.checked_up_ap7r()?;
      last_center = coord.down_ap7r();
    }
    out = out.with_digit(r, (last - last_center).to_direction());
  }

  // `coord` is now the base cell's offset from the anchor's base cell.
  if coord.i > 1 || coord.j > 1 || coord.k > 1 {
    return Err(GridError::Failed);
  }

  let mut dir = coord.to_direction();
  let mut base_cell = base_cell_neighbor(origin_base_cell, dir);
  let index_on_pent = base_cell.is_some_and(is_base_cell_pentagon);

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    if origin_on_pent {
      let leading = origin.leading_non_zero_digit();
      pentagon_rotations = rotation_count(&PENTAGON_ROTATIONS_REVERSE, leading, dir)?;
      dir = dir.rotate60_ccw_by(pentagon_rotations);
      // Still on the deleted axis: no cell here.
      if dir == Direction::K {
        return Err(GridError::Pentagon);
      }
      base_cell = base_cell_neighbor(origin_base_cell, dir);
    }
    let target = base_cell.ok_or(GridError::Failed)?;
    let base_cell_rotations = base_cell_neighbor_rotations(origin_base_cell, dir).ok_or(GridError::Failed)?;

    if index_on_pent {
      let rev_dir = base_cell_direction(target, origin_base_cell).ok_or(GridError::Failed)?;
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }
      let leading = out.leading_non_zero_digit();
      let table = if is_base_cell_polar_pentagon(target) {
        &PENTAGON_ROTATIONS_REVERSE_POLAR
      } else {
        &PENTAGON_ROTATIONS_REVERSE_NONPOLAR
      };
      for _ in 0..rotation_count(table, rev_dir, leading)? {
        out = out.rotate_pent60_ccw();
      }
    } else {
      for _ in 0..pentagon_rotations + usize::from(base_cell_rotations) {
        out = out.rotate60_ccw();
      }
    }
  } else if origin_on_pent && index_on_pent {
    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = out.leading_non_zero_digit();
    for _ in 0..rotation_count(&PENTAGON_ROTATIONS_REVERSE, origin_leading, index_leading)? {
      out = out.rotate60_ccw();
    }
  }

  if index_on_pent && out.leading_non_zero_digit() == Direction::K {
    return Err(GridError::Pentagon);
  }

  Ok(out.with_base_cell(base_cell.ok_or(GridError::Failed)?))
}

/// IJ coordinate of `cell` relative to `origin`.
pub fn cell_to_local_ij(origin: CellIndex, cell: CellIndex) -> Result<CoordIJ, GridError> {
  cell_to_local_ijk(origin, cell).map(CubeCoord::to_ij)
}

/// Cell at IJ coordinate `ij` relative to `origin`.
pub fn local_ij_to_cell(origin: CellIndex, ij: CoordIJ) -> Result<CellIndex, GridError> {
  local_ijk_to_cell(origin, CubeCoord::from_ij(ij)?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::iterators::{cells_at_resolution, pentagons};
  use crate::traversal::grid_disk;
  use crate::traversal::neighbors::neighbor;

  #[test]
  fn origin_round_trips() {
    let origin = CellIndex::new(0x85283473fffffff);
    let ijk = cell_to_local_ijk(origin, origin).unwrap();
    assert_eq!(local_ijk_to_cell(origin, ijk), Ok(origin));
  }

  #[test]
  fn neighbors_are_one_step_away() {
    let origin = CellIndex::new(0x85283473fffffff);
    let at = cell_to_local_ijk(origin, origin).unwrap();
    for dir in Direction::NEIGHBORS {
      let n = neighbor(origin, dir).unwrap();
      let ijk = cell_to_local_ijk(origin, n).unwrap();
      assert_eq!(ijk.distance(at), 1, "{dir:?}");
      assert_eq!(local_ijk_to_cell(origin, ijk), Ok(n));
    }
  }

  #[test]
  fn round_trip_within_two_steps_at_resolution_one() {
    for origin in cells_at_resolution(1).unwrap() {
      for cell in grid_disk(origin, 2).unwrap() {
        if let Ok(ijk) = cell_to_local_ijk(origin, cell) {
          assert_eq!(local_ijk_to_cell(origin, ijk), Ok(cell), "origin {origin} cell {cell}");
        }
      }
    }
  }

  #[test]
  fn ij_round_trip_near_pentagon() {
    for pentagon in pentagons(3).unwrap() {
      let ring = [Direction::J, Direction::Jk, Direction::I, Direction::Ik, Direction::Ij];
      for dir in ring {
        let cell = neighbor(pentagon, dir).unwrap();
        let ij = cell_to_local_ij(pentagon, cell).unwrap();
        assert_eq!(local_ij_to_cell(pentagon, ij), Ok(cell));
      }
    }
  }

  #[test]
  fn resolution_mismatch() {
    let a = CellIndex::new(0x85283473fffffff);
    let b = CellIndex::new(0x8928308280fffff);
    assert_eq!(cell_to_local_ijk(a, b), Err(GridError::ResMismatch));
  }

  #[test]
  fn distant_base_cells_fail() {
    let a = CellIndex::new(0x85285aa7fffffff);
    let b = CellIndex::new(0x851d9b1bfffffff);
    assert!(cell_to_local_ijk(a, b).is_err());
  }

  #[test]
  fn far_coordinates_fail() {
    let origin = CellIndex::from_parts(0, 15, Direction::Center);
    assert_eq!(local_ijk_to_cell(origin, CubeCoord::new(2, 0, 0)), Err(GridError::Failed));
    let origin = CellIndex::new(0x85283473fffffff);
    assert_eq!(local_ij_to_cell(origin, CoordIJ::new(10_000, 0)), Err(GridError::Failed));
    // Still within one base cell step of the origin's base cell.
    assert_eq!(local_ij_to_cell(origin, CoordIJ::new(100, 0)), Ok(CellIndex::new(0x8550808bfffffff)));
  }
}
