//! Lazy, restartable enumerations of cells.

use crate::base_cells::PENTAGON_BASE_CELLS;
use crate::cell::CellIndex;
use crate::constants::{MAX_RES, NUM_BASE_CELLS, PER_DIGIT_OFFSET};
use crate::direction::Direction;
use crate::error::GridError;
use crate::hierarchy::cell_to_center_child;

/// Descendants of a cell at a finer resolution, in ascending index order.
///
/// Works like an odometer over the digits below the parent. Under a pentagon
/// the K digit is skipped at each level where every coarser child digit is
/// still `Center`, since those cells would fall in the deleted subsequence.
#[derive(Debug, Clone)]
pub struct Children {
  next: Option<CellIndex>,
  parent_res: u8,
  skip_digit: Option<u8>,
}

impl Children {
  /// `parent` must be valid and `child_res` no coarser than it.
  pub(crate) fn new(parent: CellIndex, child_res: u8) -> Self {
    let parent_res = parent.resolution();
    let first = (parent_res + 1..=child_res)
      .fold(parent.with_resolution(child_res), |h, r| h.with_digit(r, Direction::Center));
    Self {
      next: Some(first),
      parent_res,
      skip_digit: parent.is_pentagon().then_some(child_res),
    }
  }

  // Adds one to the digit at `res`, carrying into coarser digits.
  fn increment_digit(cell: CellIndex, res: u8) -> CellIndex {
    let step = 1u64 << (u32::from(MAX_RES - res) * PER_DIGIT_OFFSET);
    CellIndex::new(cell.raw() + step)
  }

  fn step(&mut self, current: CellIndex) -> Option<CellIndex> {
    let child_res = current.resolution();
    let mut h = Self::increment_digit(current, child_res);
    let mut r = child_res;
    loop {
      if r == self.parent_res {
        return None;
      }
      if Some(r) == self.skip_digit && h.digit(r) == Direction::K {
        h = Self::increment_digit(h, r);
        self.skip_digit = r.checked_sub(1);
        return Some(h);
      }
      if h.digit(r) != Direction::Invalid {
        return Some(h);
      }
      h = Self::increment_digit(h, r);
      r -= 1;
    }
  }
}

impl Iterator for Children {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    let current = self.next?;
    self.next = self.step(current);
    Some(current)
  }
}

impl std::iter::FusedIterator for Children {}

/// The 122 resolution 0 cells in base cell order.
pub fn res0_cells() -> impl Iterator<Item = CellIndex> + Clone {
  (0..NUM_BASE_CELLS as u8).map(|bc| CellIndex::from_parts(0, bc, Direction::Center))
}

/// Every cell at `res`, grouped by base cell.
pub fn cells_at_resolution(res: u8) -> Result<impl Iterator<Item = CellIndex> + Clone, GridError> {
  if res > MAX_RES {
    return Err(GridError::ResDomain);
  }
  Ok(res0_cells().flat_map(move |cell| Children::new(cell, res)))
}

/// The twelve pentagons at `res`.
pub fn pentagons(res: u8) -> Result<impl Iterator<Item = CellIndex> + Clone, GridError> {
  if res > MAX_RES {
    return Err(GridError::ResDomain);
  }
  let cells = PENTAGON_BASE_CELLS
    .iter()
    .map(move |&bc| cell_to_center_child(CellIndex::from_parts(0, bc, Direction::Center), res));
  // Center children of valid resolution 0 cells always exist.
  Ok(cells.flatten())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hierarchy::{cell_to_children, cell_to_children_size, cell_to_parent};

  #[test]
  fn hexagon_children_in_order() {
    let parent = CellIndex::new(0x85283473fffffff);
    let children: Vec<CellIndex> = cell_to_children(parent, 6).unwrap().collect();
    assert_eq!(children.len(), 7);
    assert!(children.windows(2).all(|w| w[0] < w[1]));
    for (d, child) in children.iter().enumerate() {
      assert_eq!(child.digit(6), Direction::from_bits(d as u8));
      assert_eq!(cell_to_parent(*child, 5), Ok(parent));
    }
  }

  #[test]
  fn pentagon_children_skip_deleted_axis() {
    let parent = CellIndex::from_parts(1, 4, Direction::Center);
    for child_res in 1..=4u8 {
      let children: Vec<CellIndex> = cell_to_children(parent, child_res).unwrap().collect();
      assert_eq!(children.len() as u64, cell_to_children_size(parent, child_res).unwrap());
      assert!(children.iter().all(|c| c.is_valid()), "res {child_res}");
      assert_eq!(children.iter().filter(|c| c.is_pentagon()).count(), 1);
    }
  }

  #[test]
  fn children_at_same_resolution_is_self() {
    let cell = CellIndex::new(0x85283473fffffff);
    assert_eq!(cell_to_children(cell, 5).unwrap().collect::<Vec<_>>(), vec![cell]);
  }

  #[test]
  fn children_iterator_restarts_from_clone() {
    let it = cell_to_children(CellIndex::new(0x85283473fffffff), 7).unwrap();
    let first: Vec<CellIndex> = it.clone().take(10).collect();
    let again: Vec<CellIndex> = it.take(10).collect();
    assert_eq!(first, again);
  }

  #[test]
  fn resolution_cell_counts() {
    assert_eq!(res0_cells().count(), 122);
    assert_eq!(cells_at_resolution(0).unwrap().count(), 122);
    assert_eq!(cells_at_resolution(1).unwrap().count(), 842);
    assert_eq!(cells_at_resolution(2).unwrap().count(), 5882);
    assert!(cells_at_resolution(2).unwrap().all(|c| c.is_valid()));
    assert!(cells_at_resolution(16).is_err());
  }

  #[test]
  fn twelve_pentagons_per_resolution() {
    for res in [0u8, 1, 8, 15] {
      let found: Vec<CellIndex> = pentagons(res).unwrap().collect();
      assert_eq!(found.len(), 12);
      assert!(found.iter().all(|c| c.is_pentagon() && c.resolution() == res));
    }
    assert!(pentagons(0).unwrap().any(|c| c == CellIndex::new(0x8009fffffffffff)));
    assert!(pentagons(2).unwrap().any(|c| c == CellIndex::new(0x820807fffffffff)));
  }
}
