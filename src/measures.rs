//! Exact cell areas on the unit sphere and on the Earth.

use crate::cell::CellIndex;
use crate::constants::EARTH_RADIUS_KM;
use crate::error::GridError;
use crate::indexing::{cell_to_boundary, cell_to_lat_lng};
use crate::latlng::great_circle_distance_rads;
use crate::types::LatLng;

/// Area of a spherical triangle from its side lengths, by L'Huilier's theorem.
fn triangle_edge_lengths_to_area(a: f64, b: f64, c: f64) -> f64 {
  let s = (a + b + c) / 2.0;
  let (a, b, c) = ((s - a) / 2.0, (s - b) / 2.0, (s - c) / 2.0);
  let s = s / 2.0;
  4.0 * (s.tan() * a.tan() * b.tan() * c.tan()).sqrt().atan()
}

fn triangle_area(a: &LatLng, b: &LatLng, c: &LatLng) -> f64 {
  triangle_edge_lengths_to_area(
    great_circle_distance_rads(a, b),
    great_circle_distance_rads(b, c),
    great_circle_distance_rads(c, a),
  )
}

/// Area of a cell in steradians, summed over the fan of triangles between its
/// center and consecutive boundary vertices.
pub fn cell_area_rads2(cell: CellIndex) -> Result<f64, GridError> {
  let center = cell_to_lat_lng(cell)?;
  let boundary = cell_to_boundary(cell)?;
  let verts = boundary.verts();
  Ok(
    verts
      .iter()
      .zip(verts.iter().cycle().skip(1))
      .map(|(a, b)| triangle_area(a, b, &center))
      .sum(),
  )
}

pub fn cell_area_km2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_rads2(cell)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

pub fn cell_area_m2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_km2(cell)? * 1_000_000.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::M_PI;
  use crate::iterators::cells_at_resolution;

  #[test]
  fn known_cell_area() {
    let cell: CellIndex = "85283473fffffff".parse().unwrap();
    assert!((cell_area_rads2(cell).unwrap() - 0.000_006_531_0).abs() < 1e-10);
    assert!((cell_area_km2(cell).unwrap() - 265.092_558_128_3).abs() < 1e-3);
    assert!((cell_area_m2(cell).unwrap() - 265.092_558_128_3e6).abs() < 1e3);
  }

  #[test]
  fn res0_and_res1_cover_the_sphere() {
    for res in 0..=1 {
      let total: f64 = cells_at_resolution(res).unwrap().map(|c| cell_area_rads2(c).unwrap()).sum();
      assert!((total - 4.0 * M_PI).abs() < 1e-6, "res {res}: {total}");
    }
  }

  #[test]
  fn invalid_cell() {
    assert_eq!(cell_area_km2(CellIndex::default()), Err(GridError::CellInvalid));
  }
}
