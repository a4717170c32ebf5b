//! Fixed numeric constants of the grid.
//!
//! These values must match bit-for-bit across implementations, otherwise the
//! same point would index to different cells.

use std::f64::consts;

/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Threshold epsilon for angular comparisons.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;

/// sqrt(3) / 2.0
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// sqrt(7)
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7)
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;
/// 1 / sin(60')
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
/// one third
pub const M_ONETHIRD: f64 = 1.0 / 3.0;
/// one seventh
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation angle between Class II and Class III resolution axes, asin(sqrt(3/28)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth radius in kilometers using the WGS84 authalic radius.
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Scaling factor from hex2d resolution 0 unit length to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// Inverse of [`RES0_U_GNOMONIC`].
pub const INV_RES0_U_GNOMONIC: f64 = 2.618_033_988_749_895_9;

/// Finest supported resolution.
pub const MAX_RES: u8 = 15;
/// Number of icosahedron faces.
pub const NUM_ICOSA_FACES: usize = 20;
/// Number of resolution 0 cells.
pub const NUM_BASE_CELLS: usize = 122;
/// Number of pentagons per resolution.
pub const NUM_PENTAGONS: usize = 12;
/// Vertex count of a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// Vertex count of a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// Upper bound on the vertices of a cell boundary, 5 original verts plus 5 edge crossings.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

// Bit layout, most significant bit first:
// 1 (high bit) | 4 (mode) | 3 (reserved) | 4 (resolution) | 7 (base cell) | 15 x 3 (digits)

/// Offset of the mode field.
pub const MODE_OFFSET: u32 = 59;
/// Offset of the reserved (sub-type) field.
pub const RESERVED_OFFSET: u32 = 56;
/// Offset of the resolution field.
pub const RES_OFFSET: u32 = 52;
/// Offset of the base cell field.
pub const BASE_CELL_OFFSET: u32 = 45;
/// Width of a single digit.
pub const PER_DIGIT_OFFSET: u32 = 3;

pub const HIGH_BIT_MASK: u64 = 1 << 63;
pub const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;
pub const RESERVED_MASK: u64 = 0b111 << RESERVED_OFFSET;
pub const RES_MASK: u64 = 0b1111 << RES_OFFSET;
pub const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;
pub const DIGIT_MASK: u64 = 0b111;

/// Mode value of a cell index.
pub const CELL_MODE: u8 = 1;

/// Resolution 0 index with mode 0 and base cell 0 whose digits are all unused (7).
pub const INIT_INDEX: u64 = 35_184_372_088_831;

/// Largest coordinate sum a Class II face coordinate may reach before it spills onto a
/// neighboring face, by resolution. Class III entries are unused (-1).
#[rustfmt::skip]
pub const MAX_DIM_BY_CII_RES: [i32; 17] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235298, -1, 1647086, -1, 11529602,
];

/// Unit translation scale applied when moving a Class II coordinate across faces, by resolution.
#[rustfmt::skip]
pub const UNIT_SCALE_BY_CII_RES: [i32; 17] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117649, -1, 823543, -1, 5764801,
];

/// Average hexagon edge length in kilometers by resolution.
#[rustfmt::skip]
pub const EDGE_LENGTH_AVG_KM: [f64; 16] = [
  1281.256011, 483.0568391, 182.5129565, 68.97922179,
  26.07175968, 9.854090990, 3.724532667, 1.406475763,
  0.531414010, 0.200786148, 0.075863783, 0.028663897,
  0.010830188, 0.004092010, 0.001546100, 0.000584169,
];

/// Average hexagon area in square kilometers by resolution.
#[rustfmt::skip]
pub const AREA_AVG_KM2: [f64; 16] = [
  4.357_449_416_078_383e+06, 6.097_884_417_941_332e+05, 8.680_178_039_899_720e+04, 1.239_343_465_508_816e+04,
  1.770_347_654_491_307e+03, 2.529_038_581_819_449e+02, 3.612_906_216_441_245e+01, 5.161_293_359_717_191e+00,
  7.373_275_975_944_177e-01, 1.053_325_134_272_067e-01, 1.504_750_190_766_435e-02, 2.149_643_129_451_879e-03,
  3.070_918_756_316_060e-04, 4.387_026_794_728_296e-05, 6.267_181_135_324_313e-06, 8.953_115_907_605_790e-07,
];

/// Total number of cells at the finest resolution, `2 + 120 * 7^15`.
pub const NUM_CELLS_MAX_RES: i64 = 569_707_381_193_162;
