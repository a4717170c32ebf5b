use crate::cell::CellIndex;
use crate::coords::CubeCoord;
use crate::error::GridError;
use crate::local_ij::{cell_to_local_ijk, local_ijk_to_cell};
use crate::traversal::distance::grid_distance;

/// Cells on the line between two cells, both ends included.
///
/// Interpolates linearly in cube coordinates and rounds each sample to the
/// nearest cell, so consecutive cells are neighbors. Under pentagon distortion
/// a cell may repeat.
#[derive(Debug, Clone)]
pub struct GridPath {
  anchor: CellIndex,
  start: CubeCoord,
  step: (f64, f64, f64),
  distance: i64,
  n: i64,
}

impl GridPath {
  fn empty(anchor: CellIndex) -> Self {
    Self {
      anchor,
      start: CubeCoord::ZERO,
      step: (0.0, 0.0, 0.0),
      distance: -1,
      n: 0,
    }
  }

  /// Number of cells in the full path, or zero when no line exists.
  pub fn cell_count(&self) -> u64 {
    u64::try_from(self.distance + 1).unwrap_or(0)
  }
}

impl Iterator for GridPath {
  type Item = Result<CellIndex, GridError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.n > self.distance {
      return None;
    }
    let n = self.n as f64;
    let (di, dj, dk) = self.step;
    let cube = CubeCoord::cube_round(
      f64::from(self.start.i) + di * n,
      f64::from(self.start.j) + dj * n,
      f64::from(self.start.k) + dk * n,
    );
    let result = local_ijk_to_cell(self.anchor, CubeCoord::from_cube(cube));
    // Stop after the first failure.
    self.n = if result.is_ok() { self.n + 1 } else { self.distance + 1 };
    Some(result)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = usize::try_from(self.distance + 1 - self.n).unwrap_or(0);
    (0, Some(remaining))
  }
}

impl std::iter::FusedIterator for GridPath {}

/// Number of cells [`grid_path_cells`] yields, or `-1` when no line exists.
pub fn grid_path_cells_size(start: CellIndex, end: CellIndex) -> Result<i64, GridError> {
  let distance = grid_distance(start, end)?;
  Ok(if distance < 0 { -1 } else { distance + 1 })
}

/// Line of cells from `start` to `end`.
///
/// Empty when the two cells share no local coordinate frame.
pub fn grid_path_cells(start: CellIndex, end: CellIndex) -> Result<GridPath, GridError> {
  let distance = grid_distance(start, end)?;
  if distance < 0 {
    return Ok(GridPath::empty(start));
  }

  let from = cell_to_local_ijk(start, start)?.to_cube();
  let to = cell_to_local_ijk(start, end)?.to_cube();
  let step = if distance == 0 {
    (0.0, 0.0, 0.0)
  } else {
    let d = distance as f64;
    (
      f64::from(to.i - from.i) / d,
      f64::from(to.j - from.j) / d,
      f64::from(to.k - from.k) / d,
    )
  };

  Ok(GridPath {
    anchor: start,
    start: from,
    step,
    distance,
    n: 0,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::traversal::neighbors::are_neighbor_cells;

  const EXPECTED_LINE: [u64; 23] = [
    0x8e48e1d7038d527, 0x8e48e1d7038d507, 0x8e48e1d7038d50f, 0x8e48e1d7038d427,
    0x8e48e1d7038d407, 0x8e48e1d7038d40f, 0x8e48e1d7038d4e7, 0x8e48e1d7038d4ef,
    0x8e48e1d7038d4cf, 0x8e48e1d70388b67, 0x8e48e1d70388b6f, 0x8e48e1d70388b4f,
    0x8e48e1d70388a67, 0x8e48e1d70388a6f, 0x8e48e1d70388a4f, 0x8e48e1d70389da7,
    0x8e48e1d70389daf, 0x8e48e1d70389d8f, 0x8e48e1d70389c17, 0x8e48e1d70389caf,
    0x8e48e1d70389c8f, 0x8e48e1d70389cd7, 0x8e48e1d7038952f,
  ];

  #[test]
  fn line_length_and_adjacency() {
    let start = CellIndex::new(0x8e48e1d7038d527);
    let end = CellIndex::new(0x8e48e1d7038952f);
    let path: Vec<CellIndex> = grid_path_cells(start, end).unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(path.len(), 23);
    assert_eq!(grid_path_cells_size(start, end), Ok(23));
    let expected: Vec<CellIndex> = EXPECTED_LINE.iter().copied().map(CellIndex::new).collect();
    assert_eq!(path, expected);
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for pair in path.windows(2) {
      assert_eq!(are_neighbor_cells(pair[0], pair[1]), Ok(true));
    }
  }

  #[test]
  fn single_cell_line() {
    let cell = CellIndex::new(0x85283473fffffff);
    let path: Vec<CellIndex> = grid_path_cells(cell, cell).unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(path, vec![cell]);
  }

  #[test]
  fn unreachable_line_is_empty() {
    let a = CellIndex::new(0x85285aa7fffffff);
    let b = CellIndex::new(0x851d9b1bfffffff);
    let path = grid_path_cells(a, b).unwrap();
    assert_eq!(path.cell_count(), 0);
    assert_eq!(path.count(), 0);
    assert_eq!(grid_path_cells_size(a, b), Ok(-1));
  }

  #[test]
  fn restartable() {
    let path = grid_path_cells(CellIndex::new(0x8e48e1d7038d527), CellIndex::new(0x8e48e1d7038952f)).unwrap();
    let a: Vec<_> = path.clone().collect();
    let b: Vec<_> = path.collect();
    assert_eq!(a, b);
  }
}
