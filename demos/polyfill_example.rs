// demos/polyfill_example.rs

use xs_hexgrid::{polygon_to_cells, ContainmentMode, GeoLoop, GeoPolygon, GridError, LatLng};

fn main() -> Result<(), GridError> {
  // Downtown San Francisco with a small hole cut out.
  let outer = GeoLoop::new(vec![
    LatLng::from_degrees(37.8133190, -122.4089867),
    LatLng::from_degrees(37.7198062, -122.3544737),
    LatLng::from_degrees(37.8151572, -122.4798767),
  ]);
  let hole = GeoLoop::new(vec![
    LatLng::from_degrees(37.79, -122.42),
    LatLng::from_degrees(37.78, -122.425),
    LatLng::from_degrees(37.785, -122.405),
  ]);
  let polygon = GeoPolygon::new(outer, vec![hole]);

  let res = 7;
  for mode in [ContainmentMode::Center, ContainmentMode::Full, ContainmentMode::Overlapping] {
    let count = polygon_to_cells(&polygon, res, mode)?.count();
    println!("{mode:?}: {count} cells at res {res}");
  }

  let first: Vec<String> = polygon_to_cells(&polygon, res, ContainmentMode::Center)?
    .take(5)
    .map(|c| c.to_string())
    .collect();
  println!("First cells: {}", first.join(", "));

  Ok(())
}
