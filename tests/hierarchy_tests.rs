// tests/hierarchy_tests.rs

use std::collections::BTreeSet;
use xs_hexgrid::*;

fn cell(s: &str) -> CellIndex {
  s.parse().unwrap()
}

#[test]
fn parent_of_children_is_the_cell() {
  let h = cell("85283473fffffff");
  for res in 5..=8 {
    let children: Vec<_> = cell_to_children(h, res).unwrap().collect();
    assert_eq!(children.len() as u64, cell_to_children_size(h, res).unwrap());
    for (pos, child) in children.iter().enumerate() {
      assert_eq!(cell_to_parent(*child, 5), Ok(h));
      assert!(cell_contains(h, *child).unwrap());
      assert_eq!(cell_to_child_pos(*child, 5), Ok(pos as u64));
      assert_eq!(child_pos_to_cell(pos as u64, h, res), Ok(*child));
    }
  }
}

#[test]
fn pentagon_children_skip_the_deleted_digit() {
  let pent = cell("8009fffffffffff");
  let children: Vec<_> = cell_to_children(pent, 2).unwrap().collect();
  assert_eq!(children.len(), 1 + 5 * 7);
  assert_eq!(cell_to_children_size(pent, 2), Ok(36));
  assert!(children.iter().all(|c| c.is_valid()));
  let unique: BTreeSet<_> = children.iter().collect();
  assert_eq!(unique.len(), children.len());
  assert!(cell_to_center_child(pent, 2).unwrap().is_pentagon());
}

#[test]
fn parent_errors() {
  let h = cell("85283473fffffff");
  assert_eq!(cell_to_parent(h, 6), Err(GridError::ResMismatch));
  assert_eq!(cell_to_parent(h, 16), Err(GridError::ResDomain));
  assert_eq!(cell_to_parent(CELL_NULL, 0), Err(GridError::CellInvalid));
  assert_eq!(child_pos_to_cell(7, cell("8428347ffffffff"), 5), Err(GridError::Domain));
}

#[test]
fn compact_disk_then_uncompact() {
  let origin = cell("89283470c27ffff");
  let disk = grid_disk(origin, 9).unwrap();
  assert_eq!(disk.len(), 271);

  let compacted = compact_cells(&disk).unwrap();
  assert_eq!(compacted.len(), 73);

  assert_eq!(uncompact_cells_size(&compacted, 9), Ok(271));
  let restored: BTreeSet<_> = uncompact_cells(&compacted, 9).unwrap().collect();
  let expected: BTreeSet<_> = disk.into_iter().collect();
  assert_eq!(restored, expected);
}

#[test]
fn compact_whole_base_cell() {
  let res0 = cell("8029fffffffffff");
  let children: Vec<_> = cell_to_children(res0, 2).unwrap().collect();
  assert_eq!(compact_cells(&children), Ok(vec![res0]));

  let pent = cell("8009fffffffffff");
  let children: Vec<_> = cell_to_children(pent, 1).unwrap().collect();
  assert_eq!(compact_cells(&children), Ok(vec![pent]));
}

#[test]
fn compact_rejects_duplicates_and_mixed_input() {
  let h = cell("85283473fffffff");
  assert_eq!(compact_cells(&[h, h]), Err(GridError::DuplicateInput));
  let parent = cell_to_parent(h, 4).unwrap();
  assert_eq!(compact_cells(&[h, parent]), Err(GridError::ResMismatch));
  assert_eq!(compact_cells(&[]), Ok(vec![]));
}

#[test]
fn uncompact_to_coarser_resolution_fails() {
  let h = cell("85283473fffffff");
  assert_eq!(uncompact_cells_size(&[h], 4), Err(GridError::ResMismatch));
  assert!(uncompact_cells(&[h], 4).is_err());
}

#[test]
fn cell_counts_per_resolution() {
  assert_eq!(res0_cells().count(), NUM_BASE_CELLS);
  assert_eq!(cells_at_resolution(1).unwrap().count(), 842);
  assert_eq!(cells_at_resolution(2).unwrap().count(), 5882);
}
