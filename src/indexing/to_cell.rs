use crate::base_cells::{base_cell_is_cw_offset, face_base_cell, is_base_cell_pentagon};
use crate::cell::CellIndex;
use crate::constants::{CELL_MODE, INIT_INDEX, MAX_RES};
use crate::coords::face::{is_class_iii, FaceCoord};
use crate::direction::Direction;
use crate::error::GridError;
use crate::types::LatLng;

/// Cell containing `geo` at resolution `res`.
pub fn lat_lng_to_cell(geo: &LatLng, res: u8) -> Result<CellIndex, GridError> {
  if res > MAX_RES {
    return Err(GridError::ResDomain);
  }
  if !geo.is_finite() {
    return Err(GridError::LatLngDomain);
  }
  face_coord_to_cell(&FaceCoord::from_geo(geo, res), res).ok_or(GridError::Failed)
}

/// Cell at a face coordinate, or `None` if the coordinate lies outside the face's base cells.
pub(crate) fn face_coord_to_cell(fijk: &FaceCoord, res: u8) -> Option<CellIndex> {
  let mut h = CellIndex::new(INIT_INDEX).with_mode(CELL_MODE).with_resolution(res);

  if res == 0 {
    let found = face_base_cell(fijk.face, fijk.coord)?;
    return Some(h.with_base_cell(found.base_cell));
  }

  // Climb to resolution 0, recording the digit taken at each level.
  let mut coord = fijk.coord;
  for r in (0..res).rev() {
    let last = coord;
    let last_center;
    if is_class_iii(r + 1) {
      coord = coord.up_ap7();
      last_center = coord.down_ap7();
    } else {
      coord = coord.up_ap7r();
      last_center = coord.down_ap7r();
    }
    h = h.with_digit(r + 1, (last - last_center).to_direction());
  }

  let found = face_base_cell(fijk.face, coord)?;
  h = h.with_base_cell(found.base_cell);

  let num_rots = usize::from(found.ccw_rot60);
  if is_base_cell_pentagon(found.base_cell) {
    // Never leave a pentagon cell on its deleted K subsequence.
    if h.leading_non_zero_digit() == Direction::K {
      h = if base_cell_is_cw_offset(found.base_cell, fijk.face) {
        h.rotate60_cw()
      } else {
        h.rotate60_ccw()
      };
    }
    for _ in 0..num_rots {
      h = h.rotate_pent60_ccw();
    }
  } else {
    for _ in 0..num_rots {
      h = h.rotate60_ccw();
    }
  }
  Some(h)
}
