//! Rings and disks of cells around an origin.
//!
//! The spiral walkers are fast but give up near pentagons. The public
//! `grid_disk*` and `grid_ring` entry points fall back to a flood fill over the
//! neighbor graph when that happens.

use std::collections::HashMap;

use crate::cell::CellIndex;
use crate::constants::NUM_CELLS_MAX_RES;
use crate::direction::Direction;
use crate::error::GridError;
use crate::traversal::neighbors::neighbor_rotations;
use crate::types::RingCell;

/// Directions walked along the six sides of a ring, counter-clockwise.
const RING_DIRECTIONS: [Direction; 6] = [
  Direction::J,
  Direction::Jk,
  Direction::K,
  Direction::Ik,
  Direction::I,
  Direction::Ij,
];

/// Step taken outward from one ring to the start of the next.
const NEXT_RING_DIRECTION: Direction = Direction::I;

/// Smallest `k` whose disk covers every cell at resolution 15.
const K_ALL_CELLS_AT_RES_15: u32 = 13_780_510;

/// Upper bound on the number of cells within `k` steps of any cell.
pub fn max_grid_disk_size(k: u32) -> u64 {
  if k >= K_ALL_CELLS_AT_RES_15 {
    return NUM_CELLS_MAX_RES as u64;
  }
  let k = u64::from(k);
  3 * k * (k + 1) + 1
}

/// Cells exactly `k` steps from the origin, walked as a hexagonal loop.
///
/// Yields an error and stops if a pentagon is reached or the loop fails to
/// close, both of which mean pentagon distortion lies within `k` steps.
#[derive(Debug, Clone)]
pub struct RingWalk {
  first: CellIndex,
  current: CellIndex,
  rotations: usize,
  k: u32,
  side: usize,
  pos: u32,
  started: bool,
  done: bool,
}

impl RingWalk {
  fn fail(&mut self, err: GridError) -> Option<Result<CellIndex, GridError>> {
    self.done = true;
    Some(Err(err))
  }
}

impl Iterator for RingWalk {
  type Item = Result<CellIndex, GridError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if !self.started {
      self.started = true;
      self.done = self.k == 0;
      return Some(Ok(self.first));
    }

    loop {
      if self.side == RING_DIRECTIONS.len() {
        self.done = true;
        // A loop that does not return to its start was bent by a pentagon.
        return (self.current != self.first).then_some(Err(GridError::Pentagon));
      }

      match neighbor_rotations(self.current, RING_DIRECTIONS[self.side], self.rotations) {
        Ok((cell, rotations)) => {
          self.current = cell;
          self.rotations = rotations;
        }
        Err(err) => return self.fail(err),
      }
      self.pos += 1;
      let closing = self.side == RING_DIRECTIONS.len() - 1 && self.pos == self.k;
      if self.pos == self.k {
        self.pos = 0;
        self.side += 1;
      }
      // The last step lands back on the first cell, already yielded.
      if closing {
        continue;
      }
      if self.current.is_pentagon() {
        return self.fail(GridError::Pentagon);
      }
      return Some(Ok(self.current));
    }
  }
}

impl std::iter::FusedIterator for RingWalk {}

/// Every cell within `k` steps of the origin, spiraling outward ring by ring.
///
/// Yields an error and stops as soon as a pentagon is reached.
#[derive(Debug, Clone)]
pub struct DiskSpiral {
  current: CellIndex,
  rotations: usize,
  k: u32,
  ring: u32,
  side: usize,
  pos: u32,
  started: bool,
  done: bool,
}

impl DiskSpiral {
  fn fail(&mut self, err: GridError) -> Option<Result<RingCell, GridError>> {
    self.done = true;
    Some(Err(err))
  }

  fn step(&mut self, dir: Direction) -> Result<(), GridError> {
    let (cell, rotations) = neighbor_rotations(self.current, dir, self.rotations)?;
    self.current = cell;
    self.rotations = rotations;
    Ok(())
  }
}

impl Iterator for DiskSpiral {
  type Item = Result<RingCell, GridError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if !self.started {
      self.started = true;
      self.done = self.k == 0;
      return Some(Ok(RingCell { cell: self.current, distance: 0 }));
    }
    if self.ring > self.k {
      self.done = true;
      return None;
    }

    // Step out to the next ring before its first side.
    if self.side == 0 && self.pos == 0 {
      if let Err(err) = self.step(NEXT_RING_DIRECTION) {
        return self.fail(err);
      }
      if self.current.is_pentagon() {
        return self.fail(GridError::Pentagon);
      }
    }

    if let Err(err) = self.step(RING_DIRECTIONS[self.side]) {
      return self.fail(err);
    }
    let item = RingCell {
      cell: self.current,
      distance: self.ring,
    };

    self.pos += 1;
    if self.pos == self.ring {
      self.pos = 0;
      self.side += 1;
      if self.side == RING_DIRECTIONS.len() {
        self.side = 0;
        self.ring += 1;
      }
    }

    if self.current.is_pentagon() {
      return self.fail(GridError::Pentagon);
    }
    Some(Ok(item))
  }
}

impl std::iter::FusedIterator for DiskSpiral {}

/// Spiral walk of the disk of radius `k`, failing immediately on a pentagon origin.
pub fn grid_disk_distances_unsafe(origin: CellIndex, k: u32) -> Result<DiskSpiral, GridError> {
  let origin = origin.validate()?;
  if origin.is_pentagon() {
    return Err(GridError::Pentagon);
  }
  Ok(DiskSpiral {
    current: origin,
    rotations: 0,
    k,
    ring: 1,
    side: 0,
    pos: 0,
    started: false,
    done: false,
  })
}

/// Walk of the hollow ring at distance `k`, failing immediately on a pentagon origin.
pub fn grid_ring_unsafe(origin: CellIndex, k: u32) -> Result<RingWalk, GridError> {
  let origin = origin.validate()?;
  if origin.is_pentagon() {
    return Err(GridError::Pentagon);
  }

  let mut first = origin;
  let mut rotations = 0;
  for _ in 0..k {
    (first, rotations) = neighbor_rotations(first, NEXT_RING_DIRECTION, rotations)?;
    if first.is_pentagon() {
      return Err(GridError::Pentagon);
    }
  }

  Ok(RingWalk {
    first,
    current: first,
    rotations,
    k,
    side: 0,
    pos: 0,
    started: false,
    done: false,
  })
}

/// Flood fill of the neighbor graph to depth `k`, keeping the shortest
/// distance found to each cell. Handles pentagons.
fn grid_disk_distances_safe(origin: CellIndex, k: u32) -> Result<Vec<RingCell>, GridError> {
  let capacity = usize::try_from(max_grid_disk_size(k)).unwrap_or(usize::MAX).min(1 << 20);
  let mut found: HashMap<CellIndex, u32> = HashMap::with_capacity(capacity);
  let mut stack = vec![(origin, 0u32)];

  while let Some((cell, distance)) = stack.pop() {
    match found.get(&cell) {
      Some(&known) if known <= distance => continue,
      _ => {
        found.insert(cell, distance);
      }
    }
    if distance == k {
      continue;
    }
    for dir in Direction::NEIGHBORS {
      match neighbor_rotations(cell, dir, 0) {
        Ok((next, _)) => stack.push((next, distance + 1)),
        // The deleted axis of a pentagon has no neighbor.
        Err(GridError::Pentagon) => continue,
        Err(err) => return Err(err),
      }
    }
  }

  let mut cells: Vec<RingCell> = found
    .into_iter()
    .map(|(cell, distance)| RingCell { cell, distance })
    .collect();
  cells.sort_unstable_by_key(|rc| (rc.distance, rc.cell));
  Ok(cells)
}

/// Every cell within `k` steps of `origin`, with its distance.
///
/// The origin comes first. Remaining order is unspecified.
pub fn grid_disk_distances(origin: CellIndex, k: u32) -> Result<Vec<RingCell>, GridError> {
  let origin = origin.validate()?;
  let fast = grid_disk_distances_unsafe(origin, k).and_then(|spiral| spiral.collect::<Result<Vec<_>, _>>());
  match fast {
    Ok(cells) => Ok(cells),
    Err(err) => {
      log::debug!("spiral around {origin} failed ({err}), flood filling k={k}");
      grid_disk_distances_safe(origin, k)
    }
  }
}

/// Every cell within `k` steps of `origin`, origin first.
pub fn grid_disk(origin: CellIndex, k: u32) -> Result<Vec<CellIndex>, GridError> {
  Ok(grid_disk_distances(origin, k)?.into_iter().map(|rc| rc.cell).collect())
}

/// Cells exactly `k` steps from `origin`.
pub fn grid_ring(origin: CellIndex, k: u32) -> Result<Vec<CellIndex>, GridError> {
  let origin = origin.validate()?;
  let fast = grid_ring_unsafe(origin, k).and_then(|ring| ring.collect::<Result<Vec<_>, _>>());
  match fast {
    Ok(cells) => Ok(cells),
    Err(err) => {
      log::debug!("ring walk around {origin} failed ({err}), flood filling k={k}");
      Ok(
        grid_disk_distances_safe(origin, k)?
          .into_iter()
          .filter(|rc| rc.distance == k)
          .map(|rc| rc.cell)
          .collect(),
      )
    }
  }
}
