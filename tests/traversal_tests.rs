// tests/traversal_tests.rs

use std::collections::BTreeSet;
use xs_hexgrid::*;

fn cell(s: &str) -> CellIndex {
  s.parse().unwrap()
}

#[test]
fn disk_of_one_known_cell() {
  let disk: BTreeSet<_> = grid_disk(cell("85283473fffffff"), 1).unwrap().into_iter().collect();
  let expected: BTreeSet<_> = [
    "85283473fffffff",
    "85283447fffffff",
    "8528347bfffffff",
    "85283463fffffff",
    "85283477fffffff",
    "8528340ffffffff",
    "8528340bfffffff",
  ]
  .into_iter()
  .map(cell)
  .collect();
  assert_eq!(disk, expected);
}

#[test]
fn neighbors_and_distance() {
  let origin = cell("85283473fffffff");
  assert_eq!(are_neighbor_cells(origin, cell("85283477fffffff")), Ok(true));
  assert_eq!(are_neighbor_cells(origin, origin), Ok(false));
  assert_eq!(are_neighbor_cells(origin, cell("8528342bfffffff")), Ok(false));
  assert_eq!(are_neighbor_cells(origin, CellIndex::new(0x85283472fffffff)), Err(GridError::CellInvalid));
  assert_eq!(grid_distance(origin, cell("8528342bfffffff")), Ok(2));
}

#[test]
fn neighbor_relation_is_symmetric() {
  let origin = cell("85283473fffffff");
  for c in grid_disk(origin, 2).unwrap() {
    for dir in Direction::NEIGHBORS {
      let n = neighbor(c, dir).unwrap();
      assert_eq!(are_neighbor_cells(n, c), Ok(true));
      assert_eq!(grid_distance(c, n), Ok(1));
    }
  }
}

#[test]
fn rings_partition_the_disk() {
  let origin = cell("85283473fffffff");
  for k in 0..=4 {
    let disk: BTreeSet<_> = grid_disk(origin, k).unwrap().into_iter().collect();
    let mut union = BTreeSet::new();
    for r in 0..=k {
      let ring = grid_ring(origin, r).unwrap();
      assert_eq!(ring.len(), if r == 0 { 1 } else { 6 * r as usize });
      for c in ring {
        assert!(union.insert(c), "cell {c} in two rings");
      }
    }
    assert_eq!(union, disk);
    assert_eq!(disk.len() as u64, max_grid_disk_size(k));
  }
}

#[test]
fn disk_distances_agree_with_grid_distance() {
  let origin = cell("85283473fffffff");
  for rc in grid_disk_distances(origin, 3).unwrap() {
    assert_eq!(grid_distance(origin, rc.cell), Ok(i64::from(rc.distance)));
  }
}

#[test]
fn unsafe_walks_refuse_pentagons() {
  let pent = cell_to_center_child(cell("8009fffffffffff"), 1).unwrap();
  assert_eq!(grid_disk_distances_unsafe(pent, 1).err(), Some(GridError::Pentagon));
  assert_eq!(grid_ring_unsafe(pent, 1).err(), Some(GridError::Pentagon));

  let disk = grid_disk(pent, 1).unwrap();
  assert_eq!(disk.len(), 6);
  assert_eq!(disk[0], pent);
}

#[test]
fn line_between_cells() {
  let start = cell("8e48e1d7038d527");
  let end = cell("8e48e1d7038952f");
  assert_eq!(grid_path_cells_size(start, end), Ok(23));
  let line: Vec<_> = grid_path_cells(start, end).unwrap().collect::<Result<_, _>>().unwrap();
  assert_eq!(line.len(), 23);
  let expected: Vec<CellIndex> = [
    "8e48e1d7038d527", "8e48e1d7038d507", "8e48e1d7038d50f",
    "8e48e1d7038d427", "8e48e1d7038d407", "8e48e1d7038d40f",
    "8e48e1d7038d4e7", "8e48e1d7038d4ef", "8e48e1d7038d4cf",
    "8e48e1d70388b67", "8e48e1d70388b6f", "8e48e1d70388b4f",
    "8e48e1d70388a67", "8e48e1d70388a6f", "8e48e1d70388a4f",
    "8e48e1d70389da7", "8e48e1d70389daf", "8e48e1d70389d8f",
    "8e48e1d70389c17", "8e48e1d70389caf", "8e48e1d70389c8f",
    "8e48e1d70389cd7", "8e48e1d7038952f",
  ]
  .into_iter()
  .map(cell)
  .collect();
  assert_eq!(line, expected);
  assert_eq!(line.first(), Some(&start));
  assert_eq!(line.last(), Some(&end));
  for pair in line.windows(2) {
    assert_eq!(are_neighbor_cells(pair[0], pair[1]), Ok(true));
  }
}

#[test]
fn unreachable_line_is_empty() {
  let a = cell("85285aa7fffffff");
  let b = cell("851d9b1bfffffff");
  assert_eq!(grid_distance(a, b), Ok(-1));
  assert_eq!(grid_path_cells(a, b).unwrap().count(), 0);
}

#[test]
fn local_coordinates_round_trip() {
  let origin = cell("85283473fffffff");
  for c in grid_disk(origin, 3).unwrap() {
    let ij = cell_to_local_ij(origin, c).unwrap();
    assert_eq!(local_ij_to_cell(origin, ij), Ok(c));
  }
}

#[test]
fn every_disk_member_is_a_neighbor() {
  for origin in cells_at_resolution(2).unwrap() {
    for n in grid_disk(origin, 1).unwrap() {
      assert_eq!(are_neighbor_cells(origin, n), Ok(n != origin), "{origin} {n}");
    }
  }
}
