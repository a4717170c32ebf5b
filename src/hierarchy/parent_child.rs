use crate::cell::CellIndex;
use crate::constants::MAX_RES;
use crate::direction::Direction;
use crate::error::GridError;
use crate::iterators::Children;

/// Number of descendants `levels` resolutions below a hexagon.
#[inline]
fn hexagon_descendants(levels: u8) -> u64 {
  7u64.pow(u32::from(levels))
}

/// Number of descendants `levels` resolutions below a pentagon: one pentagon
/// plus five hexagon subtrees per level.
#[inline]
fn pentagon_descendants(levels: u8) -> u64 {
  1 + 5 * (hexagon_descendants(levels) - 1) / 6
}

fn check_child_res(cell: CellIndex, child_res: u8) -> Result<(), GridError> {
  if child_res < cell.resolution() || child_res > MAX_RES {
    Err(GridError::ResDomain)
  } else {
    Ok(())
  }
}

fn check_parent_res(res: u8, parent_res: u8) -> Result<(), GridError> {
  if parent_res > MAX_RES {
    Err(GridError::ResDomain)
  } else if parent_res > res {
    Err(GridError::ResMismatch)
  } else {
    Ok(())
  }
}

/// Ancestor of `cell` at `parent_res`.
pub fn cell_to_parent(cell: CellIndex, parent_res: u8) -> Result<CellIndex, GridError> {
  let cell = cell.validate()?;
  let res = cell.resolution();
  check_parent_res(res, parent_res)?;
  Ok(
    (parent_res + 1..=res)
      .fold(cell.with_resolution(parent_res), |h, r| h.with_digit(r, Direction::Invalid)),
  )
}

/// Child of `cell` one resolution finer, in direction `dir` from the center child.
pub fn child_at_direction(cell: CellIndex, dir: Direction) -> Result<CellIndex, GridError> {
  let cell = cell.validate()?;
  let res = cell.resolution();
  if res == MAX_RES {
    return Err(GridError::ResDomain);
  }
  if dir == Direction::Invalid {
    return Err(GridError::Domain);
  }
  if dir == Direction::K && cell.is_pentagon() {
    return Err(GridError::Pentagon);
  }
  Ok(cell.with_resolution(res + 1).with_digit(res + 1, dir))
}

/// Center-most descendant of `cell` at `child_res`.
pub fn cell_to_center_child(cell: CellIndex, child_res: u8) -> Result<CellIndex, GridError> {
  let cell = cell.validate()?;
  check_child_res(cell, child_res)?;
  Ok(
    (cell.resolution() + 1..=child_res)
      .fold(cell.with_resolution(child_res), |h, r| h.with_digit(r, Direction::Center)),
  )
}

/// Number of descendants of `cell` at `child_res`.
pub fn cell_to_children_size(cell: CellIndex, child_res: u8) -> Result<u64, GridError> {
  let cell = cell.validate()?;
  check_child_res(cell, child_res)?;
  let levels = child_res - cell.resolution();
  Ok(if cell.is_pentagon() {
    pentagon_descendants(levels)
  } else {
    hexagon_descendants(levels)
  })
}

/// Lazily enumerates the descendants of `cell` at `child_res` in index order.
pub fn cell_to_children(cell: CellIndex, child_res: u8) -> Result<Children, GridError> {
  let cell = cell.validate()?;
  check_child_res(cell, child_res)?;
  Ok(Children::new(cell, child_res))
}

/// Whether `cell` is `parent` or one of its descendants.
pub fn cell_contains(parent: CellIndex, cell: CellIndex) -> Result<bool, GridError> {
  let parent = parent.validate()?;
  let cell = cell.validate()?;
  if cell.resolution() < parent.resolution() {
    return Ok(false);
  }
  Ok(cell_to_parent(cell, parent.resolution())? == parent)
}

/// Position of `child` among the descendants of its ancestor at `parent_res`,
/// in the order [`cell_to_children`] yields them.
pub fn cell_to_child_pos(child: CellIndex, parent_res: u8) -> Result<u64, GridError> {
  let child = child.validate()?;
  let child_res = child.resolution();
  check_parent_res(child_res, parent_res)?;

  let mut on_pentagon = cell_to_parent(child, parent_res)?.is_pentagon();
  let mut pos = 0;
  for r in parent_res + 1..=child_res {
    let levels = child_res - r;
    let digit = u64::from(u8::from(child.digit(r)));
    if on_pentagon {
      // Preceding siblings are the pentagon center child and every hexagon
      // child between J and this digit.
      if digit != 0 {
        pos += pentagon_descendants(levels) + (digit - 2) * hexagon_descendants(levels);
        on_pentagon = false;
      }
    } else {
      pos += digit * hexagon_descendants(levels);
    }
  }
  Ok(pos)
}

/// Descendant of `parent` at `child_res` found at position `pos`.
pub fn child_pos_to_cell(pos: u64, parent: CellIndex, child_res: u8) -> Result<CellIndex, GridError> {
  let size = cell_to_children_size(parent, child_res)?;
  if pos >= size {
    return Err(GridError::Domain);
  }

  let mut on_pentagon = parent.is_pentagon();
  let mut remaining = pos;
  let mut child = parent.with_resolution(child_res);
  for r in parent.resolution() + 1..=child_res {
    let levels = child_res - r;
    let block = hexagon_descendants(levels);
    let digit = if on_pentagon {
      let center = pentagon_descendants(levels);
      if remaining < center {
        0
      } else {
        remaining -= center;
        on_pentagon = false;
        let d = remaining / block + 2;
        remaining %= block;
        d
      }
    } else {
      let d = remaining / block;
      remaining %= block;
      d
    };
    child = child.with_digit(r, Direction::from_bits(digit as u8));
  }
  Ok(child)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::indexing::lat_lng_to_cell;
  use crate::types::LatLng;

  fn sf(res: u8) -> CellIndex {
    lat_lng_to_cell(&LatLng::from_degrees(37.779, -122.419), res).unwrap()
  }

  #[test]
  fn parent_chain() {
    let child = sf(10);
    let parent = cell_to_parent(child, 9).unwrap();
    assert_eq!(parent.resolution(), 9);
    assert_eq!(parent, sf(9));
    assert_eq!(cell_to_parent(child, 5), Ok(sf(5)));
    assert_eq!(cell_to_parent(child, 10), Ok(child));
    assert_eq!(cell_to_parent(child, 11), Err(GridError::ResMismatch));
    assert_eq!(cell_to_parent(child, 16), Err(GridError::ResDomain));
    assert_eq!(cell_to_parent(CellIndex::new(0), 5), Err(GridError::CellInvalid));
    assert!(cell_to_parent(child, 0).unwrap().is_valid());
  }

  #[test]
  fn child_at_direction_inverts_parent() {
    let cell = sf(7);
    for dir in [Direction::Center, Direction::K, Direction::J, Direction::Jk, Direction::I, Direction::Ik, Direction::Ij] {
      let child = child_at_direction(cell, dir).unwrap();
      assert!(child.is_valid());
      assert_eq!(cell_to_parent(child, 7), Ok(cell));
    }
    assert_eq!(child_at_direction(sf(15), Direction::J), Err(GridError::ResDomain));
    assert_eq!(child_at_direction(cell, Direction::Invalid), Err(GridError::Domain));
  }

  #[test]
  fn pentagon_has_no_k_child() {
    let pentagon = CellIndex::new(0x820807fffffffff);
    assert_eq!(child_at_direction(pentagon, Direction::K), Err(GridError::Pentagon));
    assert!(child_at_direction(pentagon, Direction::J).unwrap().is_valid());
  }

  #[test]
  fn children_sizes() {
    let hex = CellIndex::from_parts(5, 10, Direction::Center);
    assert_eq!(cell_to_children_size(hex, 5), Ok(1));
    assert_eq!(cell_to_children_size(hex, 6), Ok(7));
    assert_eq!(cell_to_children_size(hex, 7), Ok(49));
    assert_eq!(cell_to_children_size(hex, 4), Err(GridError::ResDomain));

    let pent = CellIndex::from_parts(5, 4, Direction::Center);
    assert!(pent.is_pentagon());
    assert_eq!(cell_to_children_size(pent, 5), Ok(1));
    assert_eq!(cell_to_children_size(pent, 6), Ok(6));
    assert_eq!(cell_to_children_size(pent, 7), Ok(41));
    assert_eq!(cell_to_children_size(CellIndex::from_parts(0, 4, Direction::Center), 15), Ok(3_956_301_258_286));
  }

  #[test]
  fn center_child_keeps_prefix() {
    let cell = CellIndex::from_parts(5, 10, Direction::Ij);
    assert_eq!(cell_to_center_child(cell, 5), Ok(cell));
    let child = cell_to_center_child(cell, 6).unwrap();
    assert_eq!(child.digit(6), Direction::Center);
    assert!((1..=5).all(|r| child.digit(r) == cell.digit(r)));

    let pent = CellIndex::from_parts(2, 4, Direction::Center);
    assert!(cell_to_center_child(pent, 4).unwrap().is_pentagon());
  }

  #[test]
  fn containment() {
    let parent = sf(5);
    assert_eq!(cell_contains(parent, sf(12)), Ok(true));
    assert_eq!(cell_contains(parent, parent), Ok(true));
    assert_eq!(cell_contains(sf(12), parent), Ok(false));
    let other = crate::traversal::neighbors::neighbor(parent, Direction::J).unwrap();
    assert_eq!(cell_contains(other, sf(12)), Ok(false));
  }

  #[test]
  fn child_positions_follow_enumeration_order() {
    for parent in [CellIndex::from_parts(2, 10, Direction::Center), CellIndex::from_parts(1, 4, Direction::Center)] {
      for (expected, child) in cell_to_children(parent, 4).unwrap().enumerate() {
        assert_eq!(cell_to_child_pos(child, parent.resolution()), Ok(expected as u64));
        assert_eq!(child_pos_to_cell(expected as u64, parent, 4), Ok(child));
      }
    }
  }

  #[test]
  fn child_position_bounds() {
    let parent = sf(5);
    assert_eq!(child_pos_to_cell(7, parent, 6), Err(GridError::Domain));
    assert_eq!(child_pos_to_cell(0, parent, 4), Err(GridError::ResDomain));
    assert_eq!(cell_to_child_pos(sf(8), 9), Err(GridError::ResMismatch));
  }
}
