//! Cell digits and the directions they name.

use crate::error::GridError;
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// One of the seven directions on the IJK grid, or the unused-digit sentinel.
///
/// Each non-center direction is one unit step along a combination of the I, J
/// and K axes. The numeric value doubles as the 3-bit digit stored in a
/// [`CellIndex`](crate::CellIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center of the parent cell.
  #[default]
  Center = 0,
  /// k-axes direction. Deleted under a pentagon.
  K = 1,
  /// j-axes direction.
  J = 2,
  /// j == k direction.
  Jk = 3,
  /// i-axes direction.
  I = 4,
  /// i == k direction.
  Ik = 5,
  /// i == j direction.
  Ij = 6,
  /// Unused digit.
  Invalid = 7,
}

const CCW: [Direction; 8] = [
  Direction::Center,
  Direction::Ik,
  Direction::Jk,
  Direction::K,
  Direction::Ij,
  Direction::I,
  Direction::J,
  Direction::Invalid,
];

const CW: [Direction; 8] = [
  Direction::Center,
  Direction::Jk,
  Direction::Ij,
  Direction::J,
  Direction::Ik,
  Direction::K,
  Direction::I,
  Direction::Invalid,
];

impl Direction {
  /// The six directions to neighboring cells, in digit order.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::K,
    Direction::J,
    Direction::Jk,
    Direction::I,
    Direction::Ik,
    Direction::Ij,
  ];

  /// Reads a digit from the low three bits of `bits`.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u8) -> Direction {
    match bits & 0b111 {
      0 => Direction::Center,
      1 => Direction::K,
      2 => Direction::J,
      3 => Direction::Jk,
      4 => Direction::I,
      5 => Direction::Ik,
      6 => Direction::Ij,
      _ => Direction::Invalid,
    }
  }

  #[inline]
  #[must_use]
  pub const fn is_valid(self) -> bool {
    !matches!(self, Direction::Invalid)
  }

  #[inline]
  pub(crate) const fn index(self) -> usize {
    self as usize
  }

  /// Rotates 60 degrees counter-clockwise. Center and Invalid are fixed points.
  #[inline]
  #[must_use]
  pub const fn rotate60_ccw(self) -> Direction {
    CCW[self as usize]
  }

  /// Rotates 60 degrees clockwise. Center and Invalid are fixed points.
  #[inline]
  #[must_use]
  pub const fn rotate60_cw(self) -> Direction {
    CW[self as usize]
  }

  /// Rotates `count` times 60 degrees counter-clockwise.
  #[must_use]
  pub fn rotate60_ccw_by(self, count: usize) -> Direction {
    (0..count % 6).fold(self, |dir, _| dir.rotate60_ccw())
  }

  /// Rotates `count` times 60 degrees clockwise.
  #[must_use]
  pub fn rotate60_cw_by(self, count: usize) -> Direction {
    (0..count % 6).fold(self, |dir, _| dir.rotate60_cw())
  }
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(GridError::Domain);
    }
    Ok(Direction::from_bits(value))
  }
}

impl From<Direction> for u8 {
  fn from(dir: Direction) -> u8 {
    dir as u8
  }
}
