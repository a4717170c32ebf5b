//! Planar lat/lng polygons with holes.

use crate::constants::{M_2PI, M_PI};
use crate::regions::bbox::BBox;
use crate::regions::{PointLocation, Region};
use crate::types::{CellBoundary, LatLng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points closer than this to an edge, in radians, lie on the boundary.
const BOUNDARY_TOLERANCE: f64 = 1e-12;

/// Latitude fractions of the bounding box tried when looking for an interior point.
const SCANLINE_FRACTIONS: [f64; 7] = [0.5, 0.25, 0.75, 0.125, 0.375, 0.625, 0.875];

/// A closed ring of vertices. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLoop {
  pub verts: Vec<LatLng>,
}

impl GeoLoop {
  pub fn new(verts: Vec<LatLng>) -> Self {
    Self { verts }
  }

  fn edges(&self) -> impl Iterator<Item = (&LatLng, &LatLng)> {
    self.verts.iter().zip(self.verts.iter().cycle().skip(1))
  }

  /// Whether an edge jumps more than half way around the globe.
  pub fn crosses_antimeridian(&self) -> bool {
    self.edges().any(|(a, b)| (a.lng - b.lng).abs() > M_PI)
  }

  /// Copy with negative longitudes moved east by a full turn.
  fn unwrapped(&self) -> GeoLoop {
    GeoLoop::new(self.verts.iter().map(|v| LatLng::new(v.lat, unwrap_lng(v.lng))).collect())
  }

  fn shifted(&self, dlng: f64) -> GeoLoop {
    GeoLoop::new(self.verts.iter().map(|v| LatLng::new(v.lat, v.lng + dlng)).collect())
  }

  fn on_boundary(&self, p: &LatLng) -> bool {
    self.edges().any(|(a, b)| segment_distance(p, a, b) < BOUNDARY_TOLERANCE)
  }

  /// Even-odd ray cast toward increasing longitude.
  fn contains(&self, p: &LatLng) -> bool {
    let mut inside = false;
    for (a, b) in self.edges() {
      if (a.lat > p.lat) != (b.lat > p.lat) {
        let lng = a.lng + (p.lat - a.lat) * (b.lng - a.lng) / (b.lat - a.lat);
        if p.lng < lng {
          inside = !inside;
        }
      }
    }
    inside
  }

  /// Longitudes where the parallel at `lat` crosses this loop.
  fn crossings(&self, lat: f64, out: &mut Vec<f64>) {
    for (a, b) in self.edges() {
      if (a.lat > lat) != (b.lat > lat) {
        out.push(a.lng + (lat - a.lat) * (b.lng - a.lng) / (b.lat - a.lat));
      }
    }
  }

  /// Keeps the part of this loop on one side of the meridian at `lng`.
  fn clip(&self, lng: f64, keep_west: bool) -> GeoLoop {
    let inside = |v: &LatLng| if keep_west { v.lng <= lng } else { v.lng >= lng };
    let mut out = Vec::with_capacity(self.verts.len() + 2);
    for (a, b) in self.edges() {
      let (a_in, b_in) = (inside(a), inside(b));
      if a_in {
        out.push(*a);
      }
      if a_in != b_in {
        let t = (lng - a.lng) / (b.lng - a.lng);
        out.push(LatLng::new(a.lat + t * (b.lat - a.lat), lng));
      }
    }
    GeoLoop::new(out)
  }
}

impl From<&CellBoundary> for GeoLoop {
  fn from(boundary: &CellBoundary) -> Self {
    GeoLoop::new(boundary.verts().to_vec())
  }
}

#[inline]
fn unwrap_lng(lng: f64) -> f64 {
  if lng < 0.0 {
    lng + M_2PI
  } else {
    lng
  }
}

/// Planar distance from `p` to the segment `a`-`b`.
fn segment_distance(p: &LatLng, a: &LatLng, b: &LatLng) -> f64 {
  let (dx, dy) = (b.lng - a.lng, b.lat - a.lat);
  let len2 = dx * dx + dy * dy;
  let t = if len2 == 0.0 {
    0.0
  } else {
    (((p.lng - a.lng) * dx + (p.lat - a.lat) * dy) / len2).clamp(0.0, 1.0)
  };
  (p.lng - (a.lng + t * dx)).hypot(p.lat - (a.lat + t * dy))
}

/// An outer loop with zero or more holes.
///
/// Coordinates are treated as planar lat/lng, with edges as straight lines in
/// that plane.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPolygon {
  outer: GeoLoop,
  holes: Vec<GeoLoop>,
  crosses: bool,
  bbox: BBox,
}

impl GeoPolygon {
  pub fn new(outer: GeoLoop, holes: Vec<GeoLoop>) -> Self {
    let crosses = outer.crosses_antimeridian();
    let bbox = if crosses {
      BBox::from_verts(&outer.unwrapped().verts)
    } else {
      BBox::from_verts(&outer.verts)
    };
    Self { outer, holes, crosses, bbox }
  }

  pub fn outer(&self) -> &GeoLoop {
    &self.outer
  }

  pub fn holes(&self) -> &[GeoLoop] {
    &self.holes
  }

  /// Bounding box of the outer loop. Longitudes of an antimeridian-spanning
  /// polygon are unwrapped past 180 degrees.
  pub fn bbox(&self) -> BBox {
    self.bbox
  }

  fn loops_for_test(&self) -> (GeoLoop, Vec<GeoLoop>) {
    if self.crosses {
      (self.outer.unwrapped(), self.holes.iter().map(GeoLoop::unwrapped).collect())
    } else {
      (self.outer.clone(), self.holes.clone())
    }
  }

  fn scanline_point(&self) -> Option<LatLng> {
    let (outer, holes) = self.loops_for_test();
    let mut xs = Vec::new();
    for fraction in SCANLINE_FRACTIONS {
      let lat = self.bbox.south + fraction * self.bbox.height();
      xs.clear();
      outer.crossings(lat, &mut xs);
      for hole in &holes {
        hole.crossings(lat, &mut xs);
      }
      xs.sort_by(f64::total_cmp);
      for pair in xs.chunks_exact(2) {
        let candidate = LatLng::new(lat, crate::latlng::constrain_lng((pair[0] + pair[1]) / 2.0));
        if pair[1] - pair[0] > BOUNDARY_TOLERANCE && self.classify(&candidate) == PointLocation::Interior {
          return Some(candidate);
        }
      }
    }
    None
  }
}

impl Region for GeoPolygon {
  fn classify(&self, point: &LatLng) -> PointLocation {
    if self.outer.verts.len() < 3 {
      return PointLocation::Exterior;
    }
    let p = if self.crosses {
      LatLng::new(point.lat, unwrap_lng(point.lng))
    } else {
      *point
    };
    if !self.bbox.contains(&p, BOUNDARY_TOLERANCE) {
      return PointLocation::Exterior;
    }

    let (outer, holes) = self.loops_for_test();
    if outer.on_boundary(&p) || holes.iter().any(|h| h.on_boundary(&p)) {
      return PointLocation::Boundary;
    }
    if !outer.contains(&p) || holes.iter().any(|h| h.contains(&p)) {
      return PointLocation::Exterior;
    }
    PointLocation::Interior
  }

  fn interior_point(&self) -> Option<LatLng> {
    let n = self.outer.verts.len();
    if n < 3 {
      return None;
    }
    let (outer, _) = self.loops_for_test();
    let (lat, lng) = outer
      .verts
      .iter()
      .fold((0.0, 0.0), |(lat, lng), v| (lat + v.lat, lng + v.lng));
    let centroid = LatLng::new(lat / n as f64, crate::latlng::constrain_lng(lng / n as f64));
    if self.classify(&centroid) == PointLocation::Interior {
      return Some(centroid);
    }
    self.scanline_point()
  }

  fn boundary_points(&self) -> Vec<LatLng> {
    self.outer.verts.iter().chain(self.holes.iter().flat_map(|h| h.verts.iter())).copied().collect()
  }

  fn crosses_antimeridian(&self) -> bool {
    self.crosses
  }

  fn split_antimeridian(&self) -> Vec<Self> {
    if !self.crosses {
      return vec![self.clone()];
    }
    let outer = self.outer.unwrapped();
    let holes: Vec<GeoLoop> = self.holes.iter().map(GeoLoop::unwrapped).collect();

    let mut pieces = Vec::with_capacity(2);
    for keep_west in [true, false] {
      let shift = if keep_west { 0.0 } else { -M_2PI };
      let piece = outer.clip(M_PI, keep_west);
      if piece.verts.len() < 3 {
        continue;
      }
      let piece_holes = holes
        .iter()
        .map(|h| h.clip(M_PI, keep_west).shifted(shift))
        .filter(|h| h.verts.len() >= 3)
        .collect();
      pieces.push(GeoPolygon::new(piece.shifted(shift), piece_holes));
    }
    pieces
  }
}
