// demos/grid_disk_example.rs

use xs_hexgrid::{grid_disk_distances, grid_path_cells, grid_ring, lat_lng_to_cell, max_grid_disk_size, GridError, LatLng};

fn main() -> Result<(), GridError> {
  let origin = lat_lng_to_cell(&LatLng::from_degrees(37.779, -122.419), 7)?;
  let k = 2;
  println!("Disk of radius {k} around {origin} (at most {} cells):", max_grid_disk_size(k));

  for rc in grid_disk_distances(origin, k)? {
    println!("  {} at distance {}", rc.cell, rc.distance);
  }

  let ring = grid_ring(origin, k)?;
  println!("Ring {k} alone has {} cells", ring.len());

  if let Some(&far) = ring.first() {
    let line = grid_path_cells(origin, far)?.collect::<Result<Vec<_>, _>>()?;
    let text: Vec<String> = line.iter().map(ToString::to_string).collect();
    println!("Line {origin} -> {far}: {}", text.join(" "));
  }

  Ok(())
}
