//! Integer IJK coordinates on a hexagonal grid.
//!
//! The three axes are 120 degrees apart. A coordinate is canonical ("normalized")
//! when no component is negative and at least one component is zero; every
//! operation here returns a normalized value unless stated otherwise.

use std::ops::{Add, Sub};

use crate::constants::{M_ONESEVENTH, M_RSIN60, M_SQRT3_2};
use crate::direction::Direction;
use crate::error::GridError;
use crate::math::Vec2d;
use crate::types::CoordIJ;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IJK hexagon coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeCoord {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

/// Unit vector of each direction, indexed by digit.
const UNIT_VECS: [CubeCoord; 7] = [
  CubeCoord::new(0, 0, 0),
  CubeCoord::new(0, 0, 1),
  CubeCoord::new(0, 1, 0),
  CubeCoord::new(0, 1, 1),
  CubeCoord::new(1, 0, 0),
  CubeCoord::new(1, 0, 1),
  CubeCoord::new(1, 1, 0),
];

impl CubeCoord {
  pub const ZERO: CubeCoord = CubeCoord::new(0, 0, 0);

  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  /// Unit vector of a direction. `Invalid` maps to the origin.
  #[must_use]
  pub fn from_direction(dir: Direction) -> Self {
    UNIT_VECS.get(dir.index()).copied().unwrap_or(Self::ZERO)
  }

  /// Direction whose unit vector equals this coordinate, or `Invalid` when it is not one step from the origin.
  #[must_use]
  pub fn to_direction(self) -> Direction {
    let c = self.normalize();
    UNIT_VECS
      .iter()
      .position(|&unit| unit == c)
      .map_or(Direction::Invalid, |idx| Direction::from_bits(idx as u8))
  }

  #[inline]
  #[must_use]
  pub const fn scale(self, factor: i32) -> Self {
    Self::new(self.i * factor, self.j * factor, self.k * factor)
  }

  /// Canonical form of this coordinate.
  #[must_use]
  pub fn normalize(self) -> Self {
    let Self { mut i, mut j, mut k } = self;

    if i < 0 {
      j -= i;
      k -= i;
      i = 0;
    }
    if j < 0 {
      i -= j;
      k -= j;
      j = 0;
    }
    if k < 0 {
      i -= k;
      j -= k;
      k = 0;
    }

    let min = i.min(j).min(k);
    if min > 0 {
      i -= min;
      j -= min;
      k -= min;
    }
    Self { i, j, k }
  }

  /// Weighted sum of three basis vectors, normalized.
  #[inline]
  fn transform(self, i_vec: CubeCoord, j_vec: CubeCoord, k_vec: CubeCoord) -> Self {
    (i_vec.scale(self.i) + j_vec.scale(self.j) + k_vec.scale(self.k)).normalize()
  }

  #[must_use]
  pub fn rotate60_ccw(self) -> Self {
    self.transform(Self::new(1, 1, 0), Self::new(0, 1, 1), Self::new(1, 0, 1))
  }

  #[must_use]
  pub fn rotate60_cw(self) -> Self {
    self.transform(Self::new(1, 0, 1), Self::new(1, 1, 0), Self::new(0, 1, 1))
  }

  #[must_use]
  pub fn rotate60_ccw_by(self, count: usize) -> Self {
    (0..count % 6).fold(self, |c, _| c.rotate60_ccw())
  }

  #[must_use]
  pub fn rotate60_cw_by(self, count: usize) -> Self {
    (0..count % 6).fold(self, |c, _| c.rotate60_cw())
  }

  /// Coordinate of the cell one step away in `dir`.
  #[must_use]
  pub fn neighbor(self, dir: Direction) -> Self {
    if dir == Direction::Center || !dir.is_valid() {
      return self;
    }
    (self + Self::from_direction(dir)).normalize()
  }

  /// Parent coordinate in a counter-clockwise aperture 7 grid (Class III).
  #[must_use]
  pub fn up_ap7(self) -> Self {
    let i = self.i - self.k;
    let j = self.j - self.k;
    Self::new(round_seventh(3 * i - j), round_seventh(i + 2 * j), 0).normalize()
  }

  /// Parent coordinate in a clockwise aperture 7 grid (Class II).
  #[must_use]
  pub fn up_ap7r(self) -> Self {
    let i = self.i - self.k;
    let j = self.j - self.k;
    Self::new(round_seventh(2 * i + j), round_seventh(3 * j - i), 0).normalize()
  }

  /// Overflow-checked [`CubeCoord::up_ap7`], for coordinates supplied by callers.
  pub fn checked_up_ap7(self) -> Result<Self, GridError> {
    let (i, j) = self.checked_ij()?;
    let new_i = i.checked_mul(3).and_then(|v| v.checked_sub(j)).ok_or(GridError::Failed)?;
    let new_j = j.checked_mul(2).and_then(|v| v.checked_add(i)).ok_or(GridError::Failed)?;
    Self::new(round_seventh(new_i), round_seventh(new_j), 0).checked_normalize()
  }

  /// Overflow-checked [`CubeCoord::up_ap7r`], for coordinates supplied by callers.
  pub fn checked_up_ap7r(self) -> Result<Self, GridError> {
    let (i, j) = self.checked_ij()?;
    let new_i = i.checked_mul(2).and_then(|v| v.checked_add(j)).ok_or(GridError::Failed)?;
    let new_j = j.checked_mul(3).and_then(|v| v.checked_sub(i)).ok_or(GridError::Failed)?;
    Self::new(round_seventh(new_i), round_seventh(new_j), 0).checked_normalize()
  }

  fn checked_ij(self) -> Result<(i32, i32), GridError> {
    let i = self.i.checked_sub(self.k).ok_or(GridError::Failed)?;
    let j = self.j.checked_sub(self.k).ok_or(GridError::Failed)?;
    Ok((i, j))
  }

  /// Child center coordinate in a counter-clockwise aperture 7 grid (Class III).
  #[must_use]
  pub fn down_ap7(self) -> Self {
    self.transform(Self::new(3, 0, 1), Self::new(1, 3, 0), Self::new(0, 1, 3))
  }

  /// Child center coordinate in a clockwise aperture 7 grid (Class II).
  #[must_use]
  pub fn down_ap7r(self) -> Self {
    self.transform(Self::new(3, 1, 0), Self::new(0, 3, 1), Self::new(1, 0, 3))
  }

  /// Counter-clockwise aperture 3 refinement, used for vertex geometry.
  #[must_use]
  pub fn down_ap3(self) -> Self {
    self.transform(Self::new(2, 0, 1), Self::new(1, 2, 0), Self::new(0, 1, 2))
  }

  /// Clockwise aperture 3 refinement, used for vertex geometry.
  #[must_use]
  pub fn down_ap3r(self) -> Self {
    self.transform(Self::new(2, 1, 0), Self::new(0, 2, 1), Self::new(1, 0, 2))
  }

  /// Grid distance between two coordinates.
  #[must_use]
  pub fn distance(self, other: CubeCoord) -> i32 {
    let diff = (self - other).normalize();
    diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
  }

  /// Center of the hex in face-plane coordinates.
  #[must_use]
  pub fn to_hex2d(self) -> Vec2d {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    Vec2d::new(i - 0.5 * j, j * M_SQRT3_2)
  }

  /// Hex containing a face-plane point.
  #[must_use]
  pub fn from_hex2d(v: Vec2d) -> Self {
    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // reverse conversion, then quantize
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    let (mut i, mut j);
    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        i = m1;
        j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
        i = if (1.0 - r1) <= r2 && r2 < 2.0 * r1 { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
      i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
    } else {
      i = m1 + 1;
      j = if r2 < r1 / 2.0 { m2 } else { m2 + 1 };
    }

    // fold across the axes if necessary
    if v.x < 0.0 {
      if j % 2 == 0 {
        let axis_i = i64::from(j) / 2;
        let diff = i64::from(i) - axis_i;
        i = (i64::from(i) - 2 * diff) as i32;
      } else {
        let axis_i = (i64::from(j) + 1) / 2;
        let diff = i64::from(i) - axis_i;
        i = (i64::from(i) - (2 * diff + 1)) as i32;
      }
    }

    if v.y < 0.0 {
      i -= (2 * j + 1) / 2;
      j = -j;
    }

    Self::new(i, j, 0).normalize()
  }

  /// IJ form of this coordinate.
  #[must_use]
  pub const fn to_ij(self) -> CoordIJ {
    CoordIJ::new(self.i - self.k, self.j - self.k)
  }

  /// Normalized coordinate from an IJ pair, failing if normalization would overflow.
  pub fn from_ij(ij: CoordIJ) -> Result<Self, GridError> {
    Self::new(ij.i, ij.j, 0).checked_normalize()
  }

  fn checked_normalize(self) -> Result<Self, GridError> {
    let (max, min) = if self.i > self.j { (self.i, self.j) } else { (self.j, self.i) };
    if min < 0
      && (max.checked_add(min).is_none() || 0i32.checked_sub(min).is_none() || max.checked_sub(min).is_none())
    {
      return Err(GridError::Failed);
    }
    Ok(self.normalize())
  }

  /// Zero-sum cube form (`i + j + k == 0`) used for linear interpolation.
  #[must_use]
  pub const fn to_cube(self) -> Self {
    let i = -self.i + self.k;
    let j = self.j - self.k;
    Self::new(i, j, -i - j)
  }

  /// Inverse of [`CubeCoord::to_cube`].
  #[must_use]
  pub fn from_cube(cube: CubeCoord) -> Self {
    Self::new(-cube.i, cube.j, 0).normalize()
  }

  /// Rounds fractional cube coordinates to the nearest cell, keeping `i + j + k == 0`.
  #[must_use]
  pub fn cube_round(i: f64, j: f64, k: f64) -> Self {
    let mut ri = i.round() as i32;
    let mut rj = j.round() as i32;
    let mut rk = k.round() as i32;

    let i_diff = (f64::from(ri) - i).abs();
    let j_diff = (f64::from(rj) - j).abs();
    let k_diff = (f64::from(rk) - k).abs();

    if i_diff > j_diff && i_diff > k_diff {
      ri = -rj - rk;
    } else if j_diff > k_diff {
      rj = -ri - rk;
    } else {
      rk = -ri - rj;
    }
    Self::new(ri, rj, rk)
  }
}

#[inline]
fn round_seventh(value: i32) -> i32 {
  (f64::from(value) * M_ONESEVENTH).round() as i32
}

impl Add for CubeCoord {
  type Output = CubeCoord;

  fn add(self, rhs: CubeCoord) -> CubeCoord {
    CubeCoord::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
  }
}

impl Sub for CubeCoord {
  type Output = CubeCoord;

  fn sub(self, rhs: CubeCoord) -> CubeCoord {
    CubeCoord::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
  }
}
