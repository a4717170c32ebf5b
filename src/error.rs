//! Error types returned by grid operations.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Failure of a grid operation.
///
/// The discriminants are the numeric error codes shared by every implementation
/// of this grid, see [`GridError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GridError {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Argument was outside of acceptable range.
  #[error("argument outside of acceptable range")]
  Domain = 2,
  /// Latitude or longitude arguments were outside of acceptable range.
  #[error("latitude or longitude outside of acceptable range")]
  LatLngDomain = 3,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution outside of acceptable range")]
  ResDomain = 4,
  /// Cell index argument was not valid.
  #[error("cell index is not valid")]
  CellInvalid = 5,
  /// Pentagon distortion was encountered which the algorithm could not handle.
  #[error("pentagon distortion encountered")]
  Pentagon = 9,
  /// Duplicate input was encountered in the arguments.
  #[error("duplicate input")]
  DuplicateInput = 10,
  /// Cell arguments had incompatible resolutions.
  #[error("incompatible resolutions")]
  ResMismatch = 12,
  /// Mode or flags argument was not valid.
  #[error("option argument not valid")]
  OptionInvalid = 15,
}

impl GridError {
  /// Numeric error code.
  #[must_use]
  pub const fn code(self) -> u32 {
    self as u32
  }
}

/// Failure to read a cell index from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCellError {
  #[error("cell index text is empty")]
  Empty,
  #[error("cell index text {0:?} is longer than 16 hex digits")]
  TooLong(String),
  #[error("cell index text {text:?} has non-hex character {found:?}")]
  InvalidDigit { text: String, found: char },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_are_stable() {
    assert_eq!(GridError::Failed.code(), 1);
    assert_eq!(GridError::CellInvalid.code(), 5);
    assert_eq!(GridError::Pentagon.code(), 9);
    assert_eq!(GridError::ResMismatch.code(), 12);
    assert_eq!(GridError::OptionInvalid.code(), 15);
  }

  #[test]
  fn parse_error_names_the_offending_character() {
    let err = ParseCellError::InvalidDigit {
      text: "85z".to_string(),
      found: 'z',
    };
    assert!(err.to_string().contains("'z'"));
  }
}
