// tests/serde_tests.rs

#![cfg(feature = "serde")]

use xs_hexgrid::*;

#[test]
fn cell_index_is_a_hex_string() {
  let h: CellIndex = "8928308280fffff".parse().unwrap();
  let json = serde_json::to_string(&h).unwrap();
  assert_eq!(json, r#""8928308280fffff""#);
  assert_eq!(serde_json::from_str::<CellIndex>(&json).unwrap(), h);
  assert_eq!(serde_json::from_str::<CellIndex>(r#""8928308280FFFFF""#).unwrap(), h);
}

#[test]
fn cell_index_rejects_bad_json() {
  assert!(serde_json::from_str::<CellIndex>(r#""""#).is_err());
  assert!(serde_json::from_str::<CellIndex>(r#""xyz""#).is_err());
  assert!(serde_json::from_str::<CellIndex>("617700169958293503").is_err());
}

#[test]
fn cell_lists() {
  let disk = grid_disk("85283473fffffff".parse().unwrap(), 1).unwrap();
  let json = serde_json::to_string(&disk).unwrap();
  assert!(json.starts_with('['));
  let back: Vec<CellIndex> = serde_json::from_str(&json).unwrap();
  assert_eq!(back, disk);
}

#[test]
fn latlng() {
  let ll = LatLng::new(0.5, -1.2);
  let json = serde_json::to_string(&ll).unwrap();
  assert_eq!(json, r#"{"lat":0.5,"lng":-1.2}"#);
  assert_eq!(serde_json::from_str::<LatLng>(&json).unwrap(), ll);
}

#[test]
fn numeric_enums() {
  assert_eq!(serde_json::to_string(&GridError::CellInvalid).unwrap(), "5");
  assert_eq!(serde_json::from_str::<GridError>("12").unwrap(), GridError::ResMismatch);
  assert!(serde_json::from_str::<GridError>("11").is_err());
  assert!(serde_json::from_str::<GridError>("0").is_err());
  assert_eq!(serde_json::to_string(&Direction::K).unwrap(), "1");
  assert_eq!(serde_json::from_str::<Direction>("6").unwrap(), Direction::Ij);
  assert_eq!(serde_json::to_string(&ContainmentMode::Overlapping).unwrap(), "2");
  assert!(serde_json::from_str::<ContainmentMode>("4").is_err());
}

#[test]
fn ring_cell() {
  let rc = RingCell {
    cell: "85283473fffffff".parse().unwrap(),
    distance: 1,
  };
  let json = serde_json::to_string(&rc).unwrap();
  assert_eq!(json, r#"{"cell":"85283473fffffff","distance":1}"#);
  assert_eq!(serde_json::from_str::<RingCell>(&json).unwrap(), rc);
}

#[test]
fn geo_loop() {
  let outer = GeoLoop::new(vec![LatLng::new(0.1, 0.1), LatLng::new(0.2, 0.2), LatLng::new(0.1, 0.3)]);
  let json = serde_json::to_string(&outer).unwrap();
  assert_eq!(serde_json::from_str::<GeoLoop>(&json).unwrap(), outer);
}
