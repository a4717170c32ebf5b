// demos/compact_uncompact.rs

use xs_hexgrid::{compact_cells, grid_disk, uncompact_cells, uncompact_cells_size, CellIndex, GridError};

fn main() -> Result<(), GridError> {
  let origin = CellIndex::new(0x89283470c27ffff);
  let disk = grid_disk(origin, 9)?;
  println!("Disk of radius 9 around {origin}: {} cells", disk.len());

  let compacted = compact_cells(&disk)?;
  println!("Compacted to {} cells:", compacted.len());
  for cell in &compacted {
    println!("  {cell} (res {})", cell.resolution());
  }

  let res = origin.resolution();
  println!("Uncompacting back to res {res}: {} cells", uncompact_cells_size(&compacted, res)?);
  let restored = uncompact_cells(&compacted, res)?.count();
  println!("Restored {restored} cells");

  Ok(())
}
