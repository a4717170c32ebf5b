//! The packed 64-bit cell index.
//!
//! Layout, most significant bit first:
//!
//! ```text
//! 1 (high bit, 0) | 4 (mode) | 3 (reserved) | 4 (resolution) | 7 (base cell) | 15 x 3 (digits 1..=15)
//! ```
//!
//! Digits finer than the cell's resolution hold [`Direction::Invalid`]. All
//! field setters are pure: they return a new index with only that field changed.

pub mod string_conv;

use std::fmt;

use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{
  BASE_CELL_MASK, BASE_CELL_OFFSET, CELL_MODE, DIGIT_MASK, HIGH_BIT_MASK, INIT_INDEX, MAX_RES, MODE_MASK, MODE_OFFSET,
  NUM_BASE_CELLS, PER_DIGIT_OFFSET, RESERVED_MASK, RESERVED_OFFSET, RES_MASK, RES_OFFSET,
};
use crate::coords::face::is_class_iii;
use crate::direction::Direction;
use crate::error::GridError;

/// A cell on the grid at one of sixteen resolutions.
///
/// Ordering and equality follow the raw integer.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CellIndex(u64);

/// The all-zero index, never a valid cell.
pub const CELL_NULL: CellIndex = CellIndex(0);

#[inline]
const fn digit_shift(res: u8) -> u32 {
  (MAX_RES - res) as u32 * PER_DIGIT_OFFSET
}

impl CellIndex {
  /// Wraps a raw value without validating it.
  #[inline]
  #[must_use]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  /// A cell in mode 1 at `res` on `base_cell`, with every digit down to `res` set to `digit`.
  #[must_use]
  pub fn from_parts(res: u8, base_cell: u8, digit: Direction) -> Self {
    let mut h = CellIndex(INIT_INDEX)
      .with_mode(CELL_MODE)
      .with_resolution(res)
      .with_base_cell(base_cell);
    for r in 1..=res.min(MAX_RES) {
      h = h.with_digit(r, digit);
    }
    h
  }

  #[inline]
  #[must_use]
  pub const fn raw(self) -> u64 {
    self.0
  }

  #[inline]
  #[must_use]
  pub const fn is_null(self) -> bool {
    self.0 == 0
  }

  #[inline]
  #[must_use]
  pub const fn high_bit(self) -> u8 {
    ((self.0 & HIGH_BIT_MASK) >> 63) as u8
  }

  #[inline]
  #[must_use]
  pub const fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub const fn reserved_bits(self) -> u8 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub const fn resolution(self) -> u8 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub const fn base_cell(self) -> u8 {
    ((self.0 & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as u8
  }

  /// Digit at resolution `res` (1..=15). Out of range resolutions read as `Invalid`.
  #[inline]
  #[must_use]
  pub const fn digit(self, res: u8) -> Direction {
    if res == 0 || res > MAX_RES {
      return Direction::Invalid;
    }
    Direction::from_bits(((self.0 >> digit_shift(res)) & DIGIT_MASK) as u8)
  }

  #[inline]
  #[must_use]
  pub const fn with_high_bit(self, bit: u8) -> Self {
    Self((self.0 & !HIGH_BIT_MASK) | ((bit as u64 & 1) << 63))
  }

  #[inline]
  #[must_use]
  pub const fn with_mode(self, mode: u8) -> Self {
    Self((self.0 & !MODE_MASK) | ((mode as u64) << MODE_OFFSET & MODE_MASK))
  }

  #[inline]
  #[must_use]
  pub const fn with_reserved_bits(self, bits: u8) -> Self {
    Self((self.0 & !RESERVED_MASK) | ((bits as u64) << RESERVED_OFFSET & RESERVED_MASK))
  }

  #[inline]
  #[must_use]
  pub const fn with_resolution(self, res: u8) -> Self {
    Self((self.0 & !RES_MASK) | ((res as u64) << RES_OFFSET & RES_MASK))
  }

  #[inline]
  #[must_use]
  pub const fn with_base_cell(self, base_cell: u8) -> Self {
    Self((self.0 & !BASE_CELL_MASK) | ((base_cell as u64) << BASE_CELL_OFFSET & BASE_CELL_MASK))
  }

  /// Replaces the digit at resolution `res` (1..=15). Other resolutions leave the index unchanged.
  #[inline]
  #[must_use]
  pub const fn with_digit(self, res: u8, digit: Direction) -> Self {
    if res == 0 || res > MAX_RES {
      return self;
    }
    let shift = digit_shift(res);
    Self((self.0 & !(DIGIT_MASK << shift)) | ((digit as u64) << shift))
  }

  /// Whether this is a well formed cell index.
  #[must_use]
  pub fn is_valid(self) -> bool {
    if self.high_bit() != 0 || self.mode() != CELL_MODE || self.reserved_bits() != 0 {
      return false;
    }
    let base_cell = self.base_cell();
    if usize::from(base_cell) >= NUM_BASE_CELLS {
      return false;
    }
    let res = self.resolution();

    let on_pentagon = is_base_cell_pentagon(base_cell);
    let mut found_first_non_zero = false;
    for r in 1..=res {
      let digit = self.digit(r);
      if !digit.is_valid() {
        return false;
      }
      if !found_first_non_zero && digit != Direction::Center {
        found_first_non_zero = true;
        // K is the deleted subsequence of a pentagon.
        if on_pentagon && digit == Direction::K {
          return false;
        }
      }
    }
    (res + 1..=MAX_RES).all(|r| self.digit(r) == Direction::Invalid)
  }

  /// Validates this index, returning it unchanged.
  pub fn validate(self) -> Result<Self, GridError> {
    if self.is_valid() {
      Ok(self)
    } else {
      Err(GridError::CellInvalid)
    }
  }

  /// First digit that is not `Center`, or `Center` if all digits are.
  #[must_use]
  pub fn leading_non_zero_digit(self) -> Direction {
    (1..=self.resolution())
      .map(|r| self.digit(r))
      .find(|&d| d != Direction::Center)
      .unwrap_or(Direction::Center)
  }

  /// Whether this cell is one of the twelve pentagons at its resolution.
  #[must_use]
  pub fn is_pentagon(self) -> bool {
    is_base_cell_pentagon(self.base_cell()) && self.leading_non_zero_digit() == Direction::Center
  }

  /// Whether this cell's resolution is Class III (odd).
  #[inline]
  #[must_use]
  pub const fn is_res_class_iii(self) -> bool {
    is_class_iii(self.resolution())
  }

  /// Rotates every digit 60 degrees counter-clockwise.
  #[must_use]
  pub fn rotate60_ccw(self) -> Self {
    (1..=self.resolution()).fold(self, |h, r| h.with_digit(r, h.digit(r).rotate60_ccw()))
  }

  /// Rotates every digit 60 degrees clockwise.
  #[must_use]
  pub fn rotate60_cw(self) -> Self {
    (1..=self.resolution()).fold(self, |h, r| h.with_digit(r, h.digit(r).rotate60_cw()))
  }

  /// Counter-clockwise rotation of a cell on a pentagon base cell, skipping the
  /// deleted K subsequence.
  #[must_use]
  pub fn rotate_pent60_ccw(self) -> Self {
    let mut h = self;
    let mut found_first_non_zero = false;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, h.digit(r).rotate60_ccw());
      if !found_first_non_zero && h.digit(r) != Direction::Center {
        found_first_non_zero = true;
        if h.leading_non_zero_digit() == Direction::K {
          h = h.rotate60_ccw();
        }
      }
    }
    h
  }

  /// Clockwise rotation of a cell on a pentagon base cell, skipping the
  /// deleted K subsequence.
  #[must_use]
  pub fn rotate_pent60_cw(self) -> Self {
    let mut h = self;
    let mut found_first_non_zero = false;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, h.digit(r).rotate60_cw());
      if !found_first_non_zero && h.digit(r) != Direction::Center {
        found_first_non_zero = true;
        if h.leading_non_zero_digit() == Direction::K {
          h = h.rotate60_cw();
        }
      }
    }
    h
  }
}

impl fmt::Debug for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "CellIndex({:x})", self.0)
  }
}

impl From<CellIndex> for u64 {
  fn from(cell: CellIndex) -> u64 {
    cell.0
  }
}

impl TryFrom<u64> for CellIndex {
  type Error = GridError;

  fn try_from(raw: u64) -> Result<Self, Self::Error> {
    CellIndex(raw).validate()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_accessors() {
    let h = CellIndex::new(0x85283473fffffff);
    assert_eq!(h.high_bit(), 0);
    assert_eq!(h.mode(), CELL_MODE);
    assert_eq!(h.reserved_bits(), 0);
    assert_eq!(h.resolution(), 5);
    assert_eq!(h.base_cell(), 20);
    assert_eq!(h.digit(1), Direction::Center);
    assert_eq!(h.digit(6), Direction::Invalid);
    assert_eq!(h.digit(0), Direction::Invalid);
    assert!(h.is_valid());
  }

  #[test]
  fn from_parts_matches_known_index() {
    let h = CellIndex::from_parts(5, 12, Direction::K);
    assert_eq!(h.raw(), 0x85184927fffffff);
    assert_eq!(CellIndex::from_parts(0, 0, Direction::Center).raw(), 0x8001fffffffffff);
  }

  #[test]
  fn setters_touch_only_their_field() {
    let h = CellIndex::new(0x85283473fffffff);
    let moved = h.with_base_cell(21);
    assert_eq!(moved.base_cell(), 21);
    assert_eq!(moved.resolution(), 5);
    assert_eq!(moved.raw() & !BASE_CELL_MASK, h.raw() & !BASE_CELL_MASK);

    let d = h.with_digit(3, Direction::Ij);
    assert_eq!(d.digit(3), Direction::Ij);
    for r in (1..=15).filter(|&r| r != 3) {
      assert_eq!(d.digit(r), h.digit(r));
    }
    assert_eq!(h.with_digit(16, Direction::K), h);

    assert_eq!(h.with_high_bit(1).high_bit(), 1);
    assert_eq!(h.with_high_bit(1).with_high_bit(0), h);
    assert_eq!(h.with_reserved_bits(3).reserved_bits(), 3);
    assert_eq!(h.with_mode(2).mode(), 2);
    assert_eq!(h.with_resolution(6).resolution(), 6);
  }

  #[test]
  fn validity() {
    let h = CellIndex::new(0x85283473fffffff);
    assert!(h.is_valid());
    assert!(!h.with_high_bit(1).is_valid());
    assert!(!h.with_mode(2).is_valid());
    assert!(!h.with_reserved_bits(1).is_valid());
    assert!(!h.with_base_cell(122).is_valid());
    assert!(!h.with_digit(6, Direction::Center).is_valid(), "digit past resolution");
    assert!(!h.with_digit(2, Direction::Invalid).is_valid(), "unused digit within resolution");
    assert!(!CELL_NULL.is_valid());
    assert_eq!(CellIndex::try_from(0x85283473fffffff), Ok(h));
    assert_eq!(CellIndex::try_from(0), Err(GridError::CellInvalid));
  }

  #[test]
  fn deleted_pentagon_subsequence_is_invalid() {
    let pentagon = CellIndex::from_parts(1, 4, Direction::Center);
    assert!(pentagon.is_valid());
    assert!(!pentagon.with_digit(1, Direction::K).is_valid());
    assert!(pentagon.with_digit(1, Direction::J).is_valid());

    // a leading K is fine on a hexagon base cell
    assert!(CellIndex::from_parts(1, 0, Direction::K).is_valid());
  }

  #[test]
  fn leading_digit_and_pentagon() {
    let h = CellIndex::from_parts(3, 4, Direction::Center).with_digit(2, Direction::Jk);
    assert_eq!(h.leading_non_zero_digit(), Direction::Jk);
    assert!(!h.is_pentagon());
    assert!(CellIndex::new(0x820807fffffffff).is_pentagon());
    assert!(CellIndex::new(0x8009fffffffffff).is_pentagon());
    assert!(!CellIndex::new(0x85283473fffffff).is_pentagon());
  }

  #[test]
  fn digit_rotation() {
    let h = CellIndex::from_parts(2, 0, Direction::K);
    let ccw = h.rotate60_ccw();
    assert_eq!(ccw.digit(1), Direction::Ik);
    assert_eq!(ccw.digit(2), Direction::Ik);
    assert_eq!(ccw.digit(3), Direction::Invalid);
    assert_eq!(ccw.rotate60_cw(), h);
  }

  #[test]
  fn pentagon_rotation_skips_k() {
    // Jk rotates onto the deleted K axis and takes a second step.
    let h = CellIndex::from_parts(1, 4, Direction::Jk);
    let rotated = h.rotate_pent60_ccw();
    assert_eq!(rotated.digit(1), Direction::Ik);
    assert!(rotated.is_valid());

    let h = CellIndex::from_parts(1, 4, Direction::Ik);
    let rotated = h.rotate_pent60_cw();
    assert_eq!(rotated.digit(1), Direction::Jk);
    assert!(rotated.is_valid());
  }
}
