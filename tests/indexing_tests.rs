// tests/indexing_tests.rs

use xs_hexgrid::*;

fn cell(s: &str) -> CellIndex {
  s.parse().unwrap()
}

#[test]
fn point_to_cell_known_values() {
  let sunnyvale = LatLng::from_degrees(37.3615593, -122.0553238);
  assert_eq!(lat_lng_to_cell(&sunnyvale, 5), Ok(cell("85283473fffffff")));

  let sf = LatLng::from_degrees(37.7752702151959, -122.418307270836);
  assert_eq!(lat_lng_to_cell(&sf, 9), Ok(cell("8928308280fffff")));
}

#[test]
fn cell_center_maps_back_to_cell() {
  let sf = LatLng::from_degrees(37.7752702151959, -122.418307270836);
  for res in 0..=MAX_RES {
    let h = lat_lng_to_cell(&sf, res).unwrap();
    assert_eq!(h.resolution(), res);
    assert!(h.is_valid());
    let center = cell_to_lat_lng(h).unwrap();
    assert_eq!(lat_lng_to_cell(&center, res), Ok(h), "res {res}");
  }
}

#[test]
fn every_coarse_cell_round_trips_through_its_center() {
  for h in cells_at_resolution(2).unwrap() {
    let center = cell_to_lat_lng(h).unwrap();
    assert_eq!(lat_lng_to_cell(&center, 2), Ok(h));
  }
}

#[test]
fn boundary_vertices_surround_center() {
  let h = cell("85283473fffffff");
  let boundary = cell_to_boundary(h).unwrap();
  assert_eq!(boundary.len(), 6);
  let center = cell_to_lat_lng(h).unwrap();
  let edge = hexagon_edge_length_avg_km(5).unwrap();
  for v in boundary.verts() {
    let d = great_circle_distance_km(&center, v);
    assert!(d > 0.5 * edge && d < 1.5 * edge, "vertex at {d} km");
  }
}

#[test]
fn pentagons_have_five_vertices() {
  for p in pentagons(2).unwrap() {
    assert!(p.is_pentagon());
    assert_eq!(cell_to_boundary(p).unwrap().len(), 5);
  }
}

#[test]
fn cell_fields() {
  let h = cell("85283473fffffff");
  assert_eq!(h.raw(), 599686042433355775);
  assert_eq!(h.resolution(), 5);
  assert_eq!(h.base_cell(), 20);
  assert!(!h.is_pentagon());
  assert!(h.is_res_class_iii());
  assert!(!cell("8428347ffffffff").is_res_class_iii());
  assert_eq!(CellIndex::from_parts(5, 12, Direction::K).raw(), 0x85184927fffffff);
}

#[test]
fn pentagon_fixtures() {
  assert!(cell("8009fffffffffff").is_pentagon());
  assert!(cell("820807fffffffff").is_pentagon());
  assert_eq!(pentagons(0).unwrap().count(), NUM_PENTAGONS);
}

#[test]
fn validity() {
  assert!(cell("85283473fffffff").is_valid());
  assert!(!CellIndex::new(0x05283473fffffff).is_valid());
  assert!(!CellIndex::new(0x85283472fffffff).is_valid());
  assert!(!CELL_NULL.is_valid());
  assert!(CELL_NULL.is_null());
  assert_eq!(cell_to_lat_lng(CELL_NULL), Err(GridError::CellInvalid));
  assert_eq!(cell_to_boundary(CELL_NULL).err(), Some(GridError::CellInvalid));
}

#[test]
fn bad_coordinates_and_resolutions() {
  let p = LatLng::from_degrees(10.0, 10.0);
  assert_eq!(lat_lng_to_cell(&p, 16), Err(GridError::ResDomain));
  assert_eq!(lat_lng_to_cell(&LatLng::new(f64::NAN, 0.0), 5), Err(GridError::LatLngDomain));
  assert_eq!(lat_lng_to_cell(&LatLng::new(0.0, f64::INFINITY), 5), Err(GridError::LatLngDomain));
}

#[test]
fn text_form() {
  let h = cell("85283473fffffff");
  assert_eq!(h.to_string(), "85283473fffffff");
  assert_eq!("85283473FFFFFFF".parse::<CellIndex>(), Ok(h));
  assert!("85283473fffffffg".parse::<CellIndex>().is_err());
  assert!("".parse::<CellIndex>().is_err());
}

#[test]
fn exact_area_is_close_to_average() {
  let h = cell("85283473fffffff");
  let area = cell_area_km2(h).unwrap();
  let avg = hexagon_area_avg_km2(5).unwrap();
  assert!((area - avg).abs() < 0.2 * avg);
}
