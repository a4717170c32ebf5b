//! Text and JSON forms of a cell index: unpadded hexadecimal.

use std::fmt;
use std::str::FromStr;

use super::CellIndex;
use crate::error::ParseCellError;

/// Most hex digits a 64-bit value can need.
const MAX_HEX_DIGITS: usize = 16;

impl fmt::Display for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.raw())
  }
}

impl fmt::LowerHex for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.raw(), f)
  }
}

impl fmt::UpperHex for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::UpperHex::fmt(&self.raw(), f)
  }
}

/// Parses the hexadecimal form, in either case. The value is not checked for cell validity.
impl FromStr for CellIndex {
  type Err = ParseCellError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() {
      return Err(ParseCellError::Empty);
    }
    if let Some(found) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
      return Err(ParseCellError::InvalidDigit {
        text: s.to_string(),
        found,
      });
    }
    if s.len() > MAX_HEX_DIGITS {
      return Err(ParseCellError::TooLong(s.to_string()));
    }
    u64::from_str_radix(s, 16)
      .map(CellIndex::new)
      .map_err(|_| ParseCellError::TooLong(s.to_string()))
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::CellIndex;
  use serde::de::{self, Visitor};
  use serde::{Deserialize, Deserializer, Serialize, Serializer};
  use std::fmt;

  impl Serialize for CellIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
      serializer.collect_str(self)
    }
  }

  struct CellIndexVisitor;

  impl Visitor<'_> for CellIndexVisitor {
    type Value = CellIndex;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("a string of 1 to 16 hexadecimal digits")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<CellIndex, E> {
      v.parse::<CellIndex>().map_err(|err| E::custom(format!("invalid cell index: {err}")))
    }
  }

  impl<'de> Deserialize<'de> for CellIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
      deserializer.deserialize_str(CellIndexVisitor)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_is_unpadded_lowercase() {
    let h = CellIndex::new(0x8928308280fffff);
    assert_eq!(h.to_string(), "8928308280fffff");
    assert_eq!(format!("{h:X}"), "8928308280FFFFF");
    assert_eq!(CellIndex::new(0).to_string(), "0");
  }

  #[test]
  fn parse_accepts_either_case() {
    assert_eq!("8928308280fffff".parse(), Ok(CellIndex::new(0x8928308280fffff)));
    assert_eq!("8928308280FFFFF".parse(), Ok(CellIndex::new(0x8928308280fffff)));
    assert_eq!("ffffffffffffffff".parse(), Ok(CellIndex::new(u64::MAX)));
  }

  #[test]
  fn parse_rejects_malformed_text() {
    assert_eq!("".parse::<CellIndex>(), Err(ParseCellError::Empty));
    assert!(matches!(
      "123INVALID".parse::<CellIndex>(),
      Err(ParseCellError::InvalidDigit { found: 'I', .. })
    ));
    assert!(matches!(
      "+85283473fffffff".parse::<CellIndex>(),
      Err(ParseCellError::InvalidDigit { found: '+', .. })
    ));
    assert!(matches!(
      "0x85283473fffffff".parse::<CellIndex>(),
      Err(ParseCellError::InvalidDigit { found: 'x', .. })
    ));
    assert!(matches!(
      "1ffffffffffffffff".parse::<CellIndex>(),
      Err(ParseCellError::TooLong(_))
    ));
  }
}
