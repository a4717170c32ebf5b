//! Conversion between spherical points, face coordinates and cell indexes.

pub mod from_cell;
pub mod to_cell;

pub use from_cell::{cell_to_boundary, cell_to_lat_lng};
pub use to_cell::lat_lng_to_cell;
