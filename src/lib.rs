#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

//! `xs-hexgrid` is a hierarchical hexagonal grid on an icosahedron.
//!
//! Every point on the sphere falls in exactly one cell at each of sixteen
//! resolutions. Cells are addressed by a packed 64-bit [`CellIndex`], and the
//! crate offers conversion between points and cells, hierarchy navigation,
//! neighbor walks, rings and disks, grid lines, compaction and polygon fill.
//!
//! Sequence-producing operations return lazy iterators that can be cloned to
//! restart them.

pub mod base_cells;
pub mod cell;
pub mod constants;
pub mod coords;
pub mod direction;
pub mod error;
pub mod hierarchy;
pub mod indexing;
pub mod iterators;
pub mod latlng;
pub mod local_ij;
pub mod math;
pub mod measures;
pub mod regions;
pub mod traversal;
pub mod types;

pub use cell::{CellIndex, CELL_NULL};
pub use constants::{MAX_CELL_BNDRY_VERTS, MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use coords::CubeCoord;
pub use direction::Direction;
pub use error::{GridError, ParseCellError};
pub use types::{CellBoundary, CoordIJ, LatLng, RingCell};

pub use hierarchy::{
  cell_contains, cell_to_center_child, cell_to_child_pos, cell_to_children, cell_to_children_size, cell_to_parent,
  child_at_direction, child_pos_to_cell, compact_cells, uncompact_cells, uncompact_cells_size,
};
pub use indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
pub use iterators::{cells_at_resolution, pentagons, res0_cells, Children};
pub use latlng::{
  degs_to_rads, great_circle_distance_km, great_circle_distance_rads, hexagon_area_avg_km2, hexagon_edge_length_avg_km,
  rads_to_degs,
};
pub use local_ij::{cell_to_local_ij, cell_to_local_ijk, local_ij_to_cell, local_ijk_to_cell};
pub use measures::{cell_area_km2, cell_area_m2, cell_area_rads2};
pub use regions::{polygon_to_cells, ContainmentMode, GeoLoop, GeoPolygon, PointLocation, PolygonFill, Region};
pub use traversal::{
  are_neighbor_cells, grid_disk, grid_disk_distances, grid_disk_distances_unsafe, grid_distance, grid_path_cells,
  grid_path_cells_size, grid_ring, grid_ring_unsafe, max_grid_disk_size, neighbor, GridPath,
};
