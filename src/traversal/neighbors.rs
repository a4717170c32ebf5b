//! Neighbor walk across digits, faces and base cells.

use crate::base_cells::{
  base_cell_home, base_cell_is_cw_offset, base_cell_neighbor, base_cell_neighbor_rotations, is_base_cell_pentagon,
  is_base_cell_polar_pentagon,
};
use crate::cell::CellIndex;
use crate::coords::face::is_class_iii;
use crate::direction::Direction::{self, Center as C, Ij as IJ, Ik as IK, Jk as JK, I, J, K};
use crate::error::GridError;
use crate::hierarchy::cell_to_parent;

// Digit replacing (old digit, direction) when stepping within a parent, and the
// direction still to be applied to the parent. The "II" tables serve Class III
// child levels since the parent grid there is Class II.
#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = [
  [C,  K,  J,  JK, I,  IK, IJ],
  [K,  I,  JK, IJ, IK, J,  C ],
  [J,  JK, K,  I,  IJ, C,  IK],
  [JK, IJ, I,  IK, C,  K,  J ],
  [I,  IK, IJ, C,  J,  JK, K ],
  [IK, J,  C,  K,  JK, IJ, I ],
  [IJ, C,  IK, J,  K,  I,  JK],
];

#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = [
  [C, C,  C,  C,  C,  C,  C ],
  [C, K,  C,  K,  C,  IK, C ],
  [C, C,  J,  JK, C,  C,  J ],
  [C, K,  JK, JK, C,  C,  C ],
  [C, C,  C,  C,  I,  I,  IJ],
  [C, IK, C,  C,  I,  IK, C ],
  [C, C,  J,  C,  IJ, C,  IJ],
];

#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = [
  [C,  K,  J,  JK, I,  IK, IJ],
  [K,  J,  JK, I,  IK, IJ, C ],
  [J,  JK, I,  IK, IJ, C,  K ],
  [JK, I,  IK, IJ, C,  K,  J ],
  [I,  IK, IJ, C,  K,  J,  JK],
  [IK, IJ, C,  K,  J,  JK, I ],
  [IJ, C,  K,  J,  JK, I,  IK],
];

#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = [
  [C, C,  C,  C,  C,  C,  C ],
  [C, K,  C,  JK, C,  K,  C ],
  [C, C,  J,  J,  C,  C,  IJ],
  [C, JK, J,  JK, C,  C,  C ],
  [C, C,  C,  C,  I,  IK, I ],
  [C, K,  C,  C,  IK, IK, C ],
  [C, C,  IJ, C,  I,  C,  IJ],
];

// Siblings adjacent to a given sibling, one step around the parent each way.
const NEIGHBOR_SET_CLOCKWISE: [Direction; 7] = [C, JK, IJ, J, IK, K, I];
const NEIGHBOR_SET_COUNTERCLOCKWISE: [Direction; 7] = [C, IK, JK, K, IJ, I, J];

/// Neighbor of `origin` in direction `dir`, after `rotations` counter-clockwise
/// rotations of the direction.
///
/// Returns the neighbor together with the rotation count to apply to the next
/// step of a walk, so that a sequence of steps keeps a consistent heading across
/// face and base cell boundaries. Fails with [`GridError::Pentagon`] when the
/// step would land in the deleted subsequence of a pentagon with no way out.
pub fn neighbor_rotations(
  origin: CellIndex,
  dir: Direction,
  rotations: usize,
) -> Result<(CellIndex, usize), GridError> {
  if !dir.is_valid() {
    return Err(GridError::Domain);
  }
  let mut rotations = rotations % 6;
  let mut dir = dir.rotate60_ccw_by(rotations);

  let mut out = origin;
  let old_base_cell = origin.base_cell();
  let old_home = base_cell_home(old_base_cell).ok_or(GridError::CellInvalid)?;
  let old_leading_digit = origin.leading_non_zero_digit();
  let mut new_rotations = 0;

  // Adjust digits from the finest level up, carrying the residual direction.
  let mut r = origin.resolution();
  loop {
    if r == 0 {
      match base_cell_neighbor(old_base_cell, dir) {
        Some(bc) => {
          out = out.with_base_cell(bc);
          new_rotations = base_cell_neighbor_rotations(old_base_cell, dir).ok_or(GridError::CellInvalid)?;
        }
        None => {
          // The deleted K edge of a pentagon actually borders its IK neighbor.
          let bc = base_cell_neighbor(old_base_cell, IK).ok_or(GridError::CellInvalid)?;
          out = out.with_base_cell(bc);
          new_rotations = base_cell_neighbor_rotations(old_base_cell, IK).ok_or(GridError::CellInvalid)?;
          out = out.rotate60_ccw();
          rotations += 1;
        }
      }
      break;
    }

    let old_digit = out.digit(r);
    if !old_digit.is_valid() {
      return Err(GridError::CellInvalid);
    }
    let (digits, adjustments) = if is_class_iii(r) {
      (&NEW_DIGIT_II, &NEW_ADJUSTMENT_II)
    } else {
      (&NEW_DIGIT_III, &NEW_ADJUSTMENT_III)
    };
    out = out.with_digit(r, digits[old_digit.index()][dir.index()]);
    let next_dir = adjustments[old_digit.index()][dir.index()];
    if next_dir == C {
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = out.base_cell();
  if is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    // Rotate out of the deleted K subsequence.
    if out.leading_non_zero_digit() == K {
      if old_base_cell != new_base_cell {
        out = if base_cell_is_cw_offset(new_base_cell, old_home.face) {
          out.rotate60_cw()
        } else {
          out.rotate60_ccw()
        };
        already_adjusted_k_subsequence = true;
      } else {
        match old_leading_digit {
          C => return Err(GridError::Pentagon),
          JK => {
            out = out.rotate60_ccw();
            rotations += 1;
          }
          IK => {
            out = out.rotate60_cw();
            rotations += 5;
          }
          _ => return Err(GridError::Failed),
        }
      }
    }

    for _ in 0..new_rotations {
      out = out.rotate_pent60_ccw();
    }

    // The base cells differ in orientation.
    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        if old_base_cell != 118 && old_base_cell != 8 && out.leading_non_zero_digit() != JK {
          rotations += 1;
        }
      } else if out.leading_non_zero_digit() == IK && !already_adjusted_k_subsequence {
        rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      out = out.rotate60_ccw();
    }
  }

  Ok((out, (rotations + usize::from(new_rotations)) % 6))
}

/// Neighbor of `origin` one step in `dir`.
pub fn neighbor(origin: CellIndex, dir: Direction) -> Result<CellIndex, GridError> {
  neighbor_rotations(origin.validate()?, dir, 0).map(|(cell, _)| cell)
}

/// Direction from `origin` to the adjacent cell `destination`, `Center` when
/// they are equal, or `None` when they are not neighbors.
pub fn direction_for_neighbor(origin: CellIndex, destination: CellIndex) -> Option<Direction> {
  if origin == destination {
    return Some(C);
  }
  // A pentagon has no K neighbor.
  let skip = usize::from(origin.is_pentagon());
  Direction::NEIGHBORS
    .into_iter()
    .skip(skip)
    .find(|&dir| matches!(neighbor_rotations(origin, dir, 0), Ok((cell, _)) if cell == destination))
}

/// Whether two distinct cells of the same resolution share an edge.
pub fn are_neighbor_cells(origin: CellIndex, destination: CellIndex) -> Result<bool, GridError> {
  let origin = origin.validate()?;
  let destination = destination.validate()?;
  if origin == destination {
    return Ok(false);
  }
  let res = origin.resolution();
  if res != destination.resolution() {
    return Err(GridError::ResMismatch);
  }

  // Adjacent siblings show in their last digits. The converse does not hold
  // under a pentagon, where the missing K child brings JK and IK together.
  if res > 1 {
    let parent = cell_to_parent(origin, res - 1)?;
    if parent == cell_to_parent(destination, res - 1)? {
      let origin_digit = origin.digit(res);
      let destination_digit = destination.digit(res);
      if origin_digit == C
        || destination_digit == C
        || NEIGHBOR_SET_CLOCKWISE[origin_digit.index()] == destination_digit
        || NEIGHBOR_SET_COUNTERCLOCKWISE[origin_digit.index()] == destination_digit
      {
        return Ok(true);
      }
    }
  }

  Ok(direction_for_neighbor(origin, destination).is_some())
}
