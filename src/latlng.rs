//! Spherical geometry on [`LatLng`] points.

use crate::constants::{AREA_AVG_KM2, EARTH_RADIUS_KM, EDGE_LENGTH_AVG_KM, EPSILON, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::error::GridError;
use crate::types::LatLng;

/// Normalizes an angle to `[0, 2pi)`, assuming it is within one turn of that range.
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp - M_2PI
  } else {
    tmp
  }
}

/// Wraps a longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Whether two points are within `threshold` radians on both axes.
#[inline]
#[must_use]
pub fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Azimuth from `p1` to `p2`, in radians.
#[must_use]
pub(crate) fn geo_azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  (p2.lat.cos() * (p2.lng - p1.lng).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lng - p1.lng).cos())
}

/// Point reached from `p1` travelling `distance` radians along azimuth `az`.
#[must_use]
pub(crate) fn geo_az_distance_rads(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);
  let due_north = az < EPSILON;
  let due_south = (az - M_PI).abs() < EPSILON;

  let lat = if due_north || due_south {
    if due_north {
      p1.lat + distance
    } else {
      p1.lat - distance
    }
  } else {
    let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
    sin_lat.asin()
  };

  if (lat - M_PI_2).abs() < EPSILON {
    return LatLng::new(M_PI_2, 0.0);
  }
  if (lat + M_PI_2).abs() < EPSILON {
    return LatLng::new(-M_PI_2, 0.0);
  }
  if due_north || due_south {
    return LatLng::new(lat, constrain_lng(p1.lng));
  }

  let sin_lng = (az.sin() * distance.sin() / lat.cos()).clamp(-1.0, 1.0);
  let cos_lng = ((distance.cos() - p1.lat.sin() * lat.sin()) / p1.lat.cos() / lat.cos()).clamp(-1.0, 1.0);
  LatLng::new(lat, constrain_lng(p1.lng + sin_lng.atan2(cos_lng)))
}

/// Great circle distance between two points, in radians (haversine).
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng;
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great circle distance between two points, in kilometers.
#[must_use]
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Average hexagon edge length in kilometers at `res`.
pub fn hexagon_edge_length_avg_km(res: u8) -> Result<f64, GridError> {
  EDGE_LENGTH_AVG_KM.get(usize::from(res)).copied().ok_or(GridError::ResDomain)
}

/// Average hexagon area in square kilometers at `res`.
pub fn hexagon_area_avg_km2(res: u8) -> Result<f64, GridError> {
  AREA_AVG_KM2.get(usize::from(res)).copied().ok_or(GridError::ResDomain)
}

/// Upper estimate of how many cells at `res` a straight segment between two points crosses.
///
/// Useful for sizing buffers ahead of a line trace. Always at least 1.
pub fn line_cell_estimate(origin: &LatLng, destination: &LatLng, res: u8) -> Result<u64, GridError> {
  let edge_km = hexagon_edge_length_avg_km(res)?;
  if !origin.is_finite() || !destination.is_finite() {
    return Err(GridError::LatLngDomain);
  }
  let estimate = (great_circle_distance_km(origin, destination) / (2.0 * edge_km)).ceil();
  if !estimate.is_finite() {
    return Err(GridError::Failed);
  }
  Ok((estimate as u64).max(1))
}
