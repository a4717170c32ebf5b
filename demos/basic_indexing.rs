// demos/basic_indexing.rs

use xs_hexgrid::{
  cell_to_boundary, cell_to_center_child, cell_to_lat_lng, cell_to_parent, lat_lng_to_cell, CellIndex, GridError,
  LatLng,
};

fn main() -> Result<(), GridError> {
  println!("--- Basic Indexing ---");

  let point = LatLng::from_degrees(37.779265, -122.419277);
  println!("Point: lat {:.6} deg, lng {:.6} deg", point.lat_degrees(), point.lng_degrees());

  let res = 9;
  let cell: CellIndex = lat_lng_to_cell(&point, res)?;
  println!("Cell at res {res}: {cell}");
  println!("  resolution {}, base cell {}, pentagon {}", cell.resolution(), cell.base_cell(), cell.is_pentagon());

  let center = cell_to_lat_lng(cell)?;
  println!("  center: lat {:.6} deg, lng {:.6} deg", center.lat_degrees(), center.lng_degrees());

  let boundary = cell_to_boundary(cell)?;
  println!("  boundary ({} vertices):", boundary.len());
  for (i, v) in boundary.verts().iter().enumerate() {
    println!("    {i}: lat {:.6} deg, lng {:.6} deg", v.lat_degrees(), v.lng_degrees());
  }

  println!("\n--- Hierarchy ---");
  let parent = cell_to_parent(cell, 5)?;
  println!("Parent at res 5: {parent}");
  let center_child = cell_to_center_child(parent, 7)?;
  println!("Center child of {parent} at res 7: {center_child}");

  match "not-a-cell".parse::<CellIndex>() {
    Ok(c) => println!("parsed {c}"),
    Err(err) => println!("\nParsing \"not-a-cell\" fails: {err}"),
  }

  Ok(())
}
