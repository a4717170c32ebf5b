use std::collections::{HashMap, HashSet};

use crate::cell::CellIndex;
use crate::constants::MAX_RES;
use crate::error::GridError;
use crate::hierarchy::parent_child::{cell_to_children_size, cell_to_parent};
use crate::iterators::Children;

/// Replaces every complete set of siblings with their parent, repeatedly.
///
/// All inputs must share one resolution and appear once. Cells whose siblings
/// are not all present pass through unchanged. Output order is unspecified.
pub fn compact_cells(cells: &[CellIndex]) -> Result<Vec<CellIndex>, GridError> {
  let Some(first) = cells.first() else {
    return Ok(Vec::new());
  };
  let mut res = first.resolution();

  let mut seen = HashSet::with_capacity(cells.len());
  for &cell in cells {
    cell.validate()?;
    if cell.resolution() != res {
      return Err(GridError::ResMismatch);
    }
    if !seen.insert(cell) {
      return Err(GridError::DuplicateInput);
    }
  }

  let mut out = Vec::new();
  let mut current = cells.to_vec();
  while res > 0 && !current.is_empty() {
    let parent_res = res - 1;
    let mut counts: HashMap<CellIndex, usize> = HashMap::new();
    for &cell in &current {
      *counts.entry(cell_to_parent(cell, parent_res)?).or_default() += 1;
    }

    let mut promoted = HashSet::new();
    let mut next = Vec::new();
    for &cell in &current {
      let parent = cell_to_parent(cell, parent_res)?;
      let needed = if parent.is_pentagon() { 6 } else { 7 };
      if counts.get(&parent) == Some(&needed) {
        if promoted.insert(parent) {
          next.push(parent);
        }
      } else {
        out.push(cell);
      }
    }

    log::trace!("res {res}: {} cells, {} complete parents", current.len(), next.len());
    current = next;
    res = parent_res;
  }
  out.extend(current);
  Ok(out)
}

/// Total number of cells [`uncompact_cells`] yields for `cells` at `res`.
pub fn uncompact_cells_size(cells: &[CellIndex], res: u8) -> Result<u64, GridError> {
  if res > MAX_RES {
    return Err(GridError::ResDomain);
  }
  cells.iter().try_fold(0u64, |total, &cell| {
    let cell = cell.validate()?;
    if cell.resolution() > res {
      return Err(GridError::ResMismatch);
    }
    Ok(total + cell_to_children_size(cell, res)?)
  })
}

/// Expands every cell to its descendants at `res`.
///
/// Cells already at `res` pass through. All inputs are checked before the
/// first cell is produced.
pub fn uncompact_cells(
  cells: &[CellIndex],
  res: u8,
) -> Result<impl Iterator<Item = CellIndex> + Clone + '_, GridError> {
  uncompact_cells_size(cells, res)?;
  Ok(cells.iter().flat_map(move |&cell| Children::new(cell, res)))
}
