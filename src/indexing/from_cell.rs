use crate::base_cells::{base_cell_home, is_base_cell_pentagon};
use crate::cell::CellIndex;
use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::face::{is_class_iii, FaceCoord, Overage};
use crate::direction::Direction;
use crate::error::GridError;
use crate::types::{CellBoundary, LatLng};

/// Center point of a cell.
pub fn cell_to_lat_lng(cell: CellIndex) -> Result<LatLng, GridError> {
  let fijk = cell_to_face_coord(cell.validate()?)?;
  Ok(fijk.to_geo(cell.resolution()))
}

/// Boundary of a cell in counter-clockwise order.
///
/// Hexagons have six vertices and pentagons five, plus one extra vertex for each
/// edge of a Class III cell that crosses an icosahedron edge.
pub fn cell_to_boundary(cell: CellIndex) -> Result<CellBoundary, GridError> {
  let fijk = cell_to_face_coord(cell.validate()?)?;
  let res = cell.resolution();
  if cell.is_pentagon() {
    Ok(fijk.pent_to_cell_boundary(res, 0, NUM_PENT_VERTS))
  } else {
    Ok(fijk.to_cell_boundary(res, 0, NUM_HEX_VERTS))
  }
}

/// Face coordinate of a cell on the face that owns it.
pub(crate) fn cell_to_face_coord(cell: CellIndex) -> Result<FaceCoord, GridError> {
  let base_cell = cell.base_cell();
  let on_pentagon = is_base_cell_pentagon(base_cell);

  // A pentagon cell in the IK subsequence is expressed on its home face after
  // one clockwise rotation.
  let h = if on_pentagon && cell.leading_non_zero_digit() == Direction::Ik {
    cell.rotate60_cw()
  } else {
    cell
  };

  let mut fijk = base_cell_home(base_cell).ok_or(GridError::CellInvalid)?;
  if !descend_from_base_cell(h, &mut fijk) {
    return Ok(fijk);
  }

  // The cell may have crossed onto a neighboring face. Overage is only
  // detectable at a Class II resolution.
  let orig_coord = fijk.coord;
  let mut res = h.resolution();
  if is_class_iii(res) {
    fijk.coord = fijk.coord.down_ap7r();
    res += 1;
  }

  let pent_leading_4 = on_pentagon && h.leading_non_zero_digit() == Direction::I;
  if fijk.adjust_overage_class_ii(res, pent_leading_4, false) == Overage::None {
    if res != h.resolution() {
      fijk.coord = orig_coord;
    }
  } else {
    if on_pentagon {
      while fijk.adjust_overage_class_ii(res, false, false) != Overage::None {}
    }
    if res != h.resolution() {
      fijk.coord = fijk.coord.up_ap7r();
    }
  }
  Ok(fijk)
}

/// Walks `fijk` from its base cell's home coordinate down to `h`'s resolution.
///
/// Returns whether the result may lie past the home face's edge.
pub(crate) fn descend_from_base_cell(h: CellIndex, fijk: &mut FaceCoord) -> bool {
  let res = h.resolution();
  let possible_overage = is_base_cell_pentagon(h.base_cell()) || !(res == 0 || fijk.coord == crate::coords::CubeCoord::ZERO);

  for r in 1..=res {
    fijk.coord = if is_class_iii(r) {
      fijk.coord.down_ap7()
    } else {
      fijk.coord.down_ap7r()
    };
    fijk.coord = fijk.coord.neighbor(h.digit(r));
  }
  possible_overage
}
