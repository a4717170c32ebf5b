//! Face-centered coordinates on the icosahedron and the gnomonic projection
//! between the sphere and each face's plane.

use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, MAX_DIM_BY_CII_RES, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2, M_SQRT7,
  NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC, UNIT_SCALE_BY_CII_RES,
};
use crate::coords::cube::CubeCoord;
use crate::latlng::{geo_az_distance_rads, geo_azimuth_rads, pos_angle_rads};
use crate::math::{Vec2d, Vec3d};
use crate::types::{CellBoundary, LatLng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quadrant of a face's neighbor table.
const IJ_QUADRANT: usize = 1;
const KI_QUADRANT: usize = 2;
const JK_QUADRANT: usize = 3;

/// Whether `res` is a Class III (odd) resolution.
#[inline]
pub(crate) const fn is_class_iii(res: u8) -> bool {
  res % 2 == 1
}

/// An icosahedron face and a coordinate on that face's IJK grid.
///
/// The same cell may be expressed on more than one face. Only after overage
/// correction does a coordinate sit on the face that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceCoord {
  pub face: u8,
  pub coord: CubeCoord,
}

/// Result of checking a face coordinate against its face's extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Still on the original face.
  None,
  /// On the edge shared with a neighboring face (substrate grids only).
  FaceEdge,
  /// Moved onto a neighboring face.
  NewFace,
}

/// How a neighboring face's frame relates to a face's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceOrientation {
  pub face: u8,
  /// Resolution 0 translation relative to the primary face.
  pub translate: CubeCoord,
  /// Counter-clockwise 60 degree rotations relative to the primary face.
  pub ccw_rot60: u8,
}

const fn o(face: u8, i: i32, j: i32, k: i32, ccw_rot60: u8) -> FaceOrientation {
  FaceOrientation {
    face,
    translate: CubeCoord::new(i, j, k),
    ccw_rot60,
  }
}

/// Icosahedron face centers in lat/lng radians.
#[rustfmt::skip]
const FACE_CENTER_GEO: [LatLng; NUM_ICOSA_FACES] = [
  LatLng::new(0.803_582_649_718_989_94, 1.248_397_419_617_396), // 0
  LatLng::new(1.307_747_883_455_638_2, 2.536_945_009_877_921), // 1
  LatLng::new(1.054_751_253_523_952, -1.347_517_358_900_396_6), // 2
  LatLng::new(0.600_191_595_538_186_8, -0.450_603_909_469_755_75), // 3
  LatLng::new(0.491_715_428_198_773_87, 0.401_988_202_911_306_94), // 4
  LatLng::new(0.172_745_327_415_618_7, 1.678_146_885_280_433_7), // 5
  LatLng::new(0.605_929_321_571_350_7, 2.953_923_329_812_411_6), // 6
  LatLng::new(0.427_370_518_328_979_64, -1.888_876_200_336_285_4), // 7
  LatLng::new(-0.079_066_118_549_212_83, -0.733_429_513_380_867_74), // 8
  LatLng::new(-0.230_961_644_455_383_64, 0.506_495_587_332_349), // 9
  LatLng::new(0.079_066_118_549_212_83, 2.408_163_140_208_925_5), // 10
  LatLng::new(0.230_961_644_455_383_64, -2.635_097_066_257_444), // 11
  LatLng::new(-0.172_745_327_415_618_7, -1.463_445_768_309_359_5), // 12
  LatLng::new(-0.605_929_321_571_350_7, -0.187_669_323_777_381_62), // 13
  LatLng::new(-0.427_370_518_328_979_64, 1.252_716_453_253_508), // 14
  LatLng::new(-0.600_191_595_538_186_8, 2.690_988_744_120_037_5), // 15
  LatLng::new(-0.491_715_428_198_773_87, -2.739_604_450_678_486_3), // 16
  LatLng::new(-0.803_582_649_718_989_94, -1.893_195_233_972_397), // 17
  LatLng::new(-1.307_747_883_455_638_2, -0.604_647_643_711_872_1), // 18
  LatLng::new(-1.054_751_253_523_952, 1.794_075_294_689_396_6), // 19
];

/// Icosahedron face centers on the unit sphere.
#[rustfmt::skip]
const FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES] = [
  Vec3d::new(0.219_930_779_140_460_6, 0.658_369_178_027_499_6, 0.719_847_537_892_618_2), // 0
  Vec3d::new(-0.213_923_483_450_142_1, 0.147_817_182_955_070_3, 0.965_601_793_521_420_5), // 1
  Vec3d::new(0.109_262_527_878_479_7, -0.481_195_157_287_321, 0.869_777_512_128_725_3), // 2
  Vec3d::new(0.742_856_730_158_679_1, -0.359_394_167_827_802_8, 0.564_800_593_651_703_3), // 3
  Vec3d::new(0.811_253_470_914_096_9, 0.344_895_323_763_938_4, 0.472_138_773_641_393), // 4
  Vec3d::new(-0.105_549_814_961_392_1, 0.979_445_729_641_141_3, 0.171_887_461_000_936_5), // 5
  Vec3d::new(-0.807_540_757_997_009_2, 0.153_355_248_589_881_8, 0.569_526_199_488_268_8), // 6
  Vec3d::new(-0.284_614_806_978_790_7, -0.864_408_097_265_420_6, 0.414_479_255_247_354), // 7
  Vec3d::new(0.740_562_147_385_448_2, -0.667_329_956_456_552_4, -0.078_983_764_632_673_77), // 8
  Vec3d::new(0.851_230_398_647_429_3, 0.472_234_378_858_268_1, -0.228_913_738_868_780_8), // 9
  Vec3d::new(-0.740_562_147_385_448_1, 0.667_329_956_456_552_4, 0.078_983_764_632_673_77), // 10
  Vec3d::new(-0.851_230_398_647_429_2, -0.472_234_378_858_268_2, 0.228_913_738_868_780_8), // 11
  Vec3d::new(0.105_549_814_961_391_9, -0.979_445_729_641_141_3, -0.171_887_461_000_936_5), // 12
  Vec3d::new(0.807_540_757_997_009_2, -0.153_355_248_589_881_9, -0.569_526_199_488_268_8), // 13
  Vec3d::new(0.284_614_806_978_790_8, 0.864_408_097_265_420_4, -0.414_479_255_247_354), // 14
  Vec3d::new(-0.742_856_730_158_679_1, 0.359_394_167_827_802_7, -0.564_800_593_651_703_3), // 15
  Vec3d::new(-0.811_253_470_914_097_1, -0.344_895_323_763_938_2, -0.472_138_773_641_393), // 16
  Vec3d::new(-0.219_930_779_140_460_7, -0.658_369_178_027_499_6, -0.719_847_537_892_618_2), // 17
  Vec3d::new(0.213_923_483_450_142, -0.147_817_182_955_070_4, -0.965_601_793_521_420_5), // 18
  Vec3d::new(-0.109_262_527_878_479_6, 0.481_195_157_287_321, -0.869_777_512_128_725_3), // 19
];

/// Azimuth from each face center to its vertices 0, 1 and 2, i.e. the face's I, J and K axes.
#[rustfmt::skip]
const FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7], // 0
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796], // 1
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7], // 2
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5], // 3
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3], // 4
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838], // 5
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44], // 6
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337], // 7
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764], // 8
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734], // 9
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4], // 10
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45], // 11
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346], // 12
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745], // 13
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6], // 14
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7], // 15
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464], // 16
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635], // 17
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388], // 18
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6], // 19
];

/// Orientation of each face's neighbors: the face itself, then its IJ, KI and JK quadrant neighbors.
#[rustfmt::skip]
const FACE_NEIGHBORS: [[FaceOrientation; 4]; NUM_ICOSA_FACES] = [
  [o( 0, 0, 0, 0, 0), o( 4, 2, 0, 2, 1), o( 1, 2, 2, 0, 5), o( 5, 0, 2, 2, 3)], // 0
  [o( 1, 0, 0, 0, 0), o( 0, 2, 0, 2, 1), o( 2, 2, 2, 0, 5), o( 6, 0, 2, 2, 3)], // 1
  [o( 2, 0, 0, 0, 0), o( 1, 2, 0, 2, 1), o( 3, 2, 2, 0, 5), o( 7, 0, 2, 2, 3)], // 2
  [o( 3, 0, 0, 0, 0), o( 2, 2, 0, 2, 1), o( 4, 2, 2, 0, 5), o( 8, 0, 2, 2, 3)], // 3
  [o( 4, 0, 0, 0, 0), o( 3, 2, 0, 2, 1), o( 0, 2, 2, 0, 5), o( 9, 0, 2, 2, 3)], // 4
  [o( 5, 0, 0, 0, 0), o(10, 2, 2, 0, 3), o(14, 2, 0, 2, 3), o( 0, 0, 2, 2, 3)], // 5
  [o( 6, 0, 0, 0, 0), o(11, 2, 2, 0, 3), o(10, 2, 0, 2, 3), o( 1, 0, 2, 2, 3)], // 6
  [o( 7, 0, 0, 0, 0), o(12, 2, 2, 0, 3), o(11, 2, 0, 2, 3), o( 2, 0, 2, 2, 3)], // 7
  [o( 8, 0, 0, 0, 0), o(13, 2, 2, 0, 3), o(12, 2, 0, 2, 3), o( 3, 0, 2, 2, 3)], // 8
  [o( 9, 0, 0, 0, 0), o(14, 2, 2, 0, 3), o(13, 2, 0, 2, 3), o( 4, 0, 2, 2, 3)], // 9
  [o(10, 0, 0, 0, 0), o( 5, 2, 2, 0, 3), o( 6, 2, 0, 2, 3), o(15, 0, 2, 2, 3)], // 10
  [o(11, 0, 0, 0, 0), o( 6, 2, 2, 0, 3), o( 7, 2, 0, 2, 3), o(16, 0, 2, 2, 3)], // 11
  [o(12, 0, 0, 0, 0), o( 7, 2, 2, 0, 3), o( 8, 2, 0, 2, 3), o(17, 0, 2, 2, 3)], // 12
  [o(13, 0, 0, 0, 0), o( 8, 2, 2, 0, 3), o( 9, 2, 0, 2, 3), o(18, 0, 2, 2, 3)], // 13
  [o(14, 0, 0, 0, 0), o( 9, 2, 2, 0, 3), o( 5, 2, 0, 2, 3), o(19, 0, 2, 2, 3)], // 14
  [o(15, 0, 0, 0, 0), o(16, 2, 0, 2, 1), o(19, 2, 2, 0, 5), o(10, 0, 2, 2, 3)], // 15
  [o(16, 0, 0, 0, 0), o(17, 2, 0, 2, 1), o(15, 2, 2, 0, 5), o(11, 0, 2, 2, 3)], // 16
  [o(17, 0, 0, 0, 0), o(18, 2, 0, 2, 1), o(16, 2, 2, 0, 5), o(12, 0, 2, 2, 3)], // 17
  [o(18, 0, 0, 0, 0), o(19, 2, 0, 2, 1), o(17, 2, 2, 0, 5), o(13, 0, 2, 2, 3)], // 18
  [o(19, 0, 0, 0, 0), o(15, 2, 0, 2, 1), o(18, 2, 2, 0, 5), o(14, 0, 2, 2, 3)], // 19
];

/// Quadrant of `from`'s neighbor table holding `to`: 0 for the face itself,
/// `None` when the faces do not share an edge.
pub(crate) fn adjacent_face_dir(from: u8, to: u8) -> Option<usize> {
  FACE_NEIGHBORS
    .get(usize::from(from))?
    .iter()
    .position(|orient| orient.face == to)
}

/// Face whose center is nearest to `g`, with the squared chord distance to that center.
fn closest_face(g: &LatLng) -> (u8, f64) {
  let v3d = Vec3d::from(*g);
  let mut face = 0;
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let d = center.square_distance(&v3d);
    if d < sqd {
      face = f as u8;
      sqd = d;
    }
  }
  (face, sqd)
}

/// Projects a point onto the plane of its closest face, scaled for `res`.
pub(crate) fn geo_to_hex2d(g: &LatLng, res: u8) -> (u8, Vec2d) {
  let (face, sqd) = closest_face(g);
  let f = usize::from(face);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - 2 * (sqd / 4) = 1 - sqd/2
  let mut r = (1.0 - sqd / 2.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  let mut theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[f][0] - pos_angle_rads(geo_azimuth_rads(&FACE_CENTER_GEO[f], g)));
  if is_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }
  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverse gnomonic projection of a face-plane point back onto the sphere.
///
/// `substrate` selects the aperture 3 vertex grid used for cell boundaries.
pub(crate) fn hex2d_to_geo(v: Vec2d, face: u8, res: u8, substrate: bool) -> LatLng {
  let f = usize::from(face) % NUM_ICOSA_FACES;
  let mut r = v.magnitude();
  if r < EPSILON {
    return FACE_CENTER_GEO[f];
  }

  let mut theta = v.y.atan2(v.x);
  for _ in 0..res {
    r *= M_RSQRT7;
  }
  if substrate {
    r *= M_ONETHIRD;
    if is_class_iii(res) {
      r *= M_RSQRT7;
    }
  }
  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }
  theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[f][0] - theta);

  geo_az_distance_rads(&FACE_CENTER_GEO[f], theta, r)
}

/// Corners of the face triangle on a substrate grid, as (IJ edge start, JK edge start, KI edge start).
fn face_triangle(adj_res: u8) -> [Vec2d; 3] {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[usize::from(adj_res)]);
  [
    Vec2d::new(3.0 * max_dim, 0.0),
    Vec2d::new(-1.5 * max_dim, 3.0 * M_SQRT3_2 * max_dim),
    Vec2d::new(-1.5 * max_dim, -3.0 * M_SQRT3_2 * max_dim),
  ]
}

/// Face edge crossed when leaving a face through the given quadrant.
fn face_edge(adj_res: u8, quadrant: Option<usize>) -> (Vec2d, Vec2d) {
  let [v0, v1, v2] = face_triangle(adj_res);
  match quadrant {
    Some(IJ_QUADRANT) => (v0, v1),
    Some(JK_QUADRANT) => (v1, v2),
    _ => (v2, v0),
  }
}

const VERTS_CII: [CubeCoord; NUM_HEX_VERTS] = [
  CubeCoord::new(2, 1, 0),
  CubeCoord::new(1, 2, 0),
  CubeCoord::new(0, 2, 1),
  CubeCoord::new(0, 1, 2),
  CubeCoord::new(1, 0, 2),
  CubeCoord::new(2, 0, 1),
];

const VERTS_CIII: [CubeCoord; NUM_HEX_VERTS] = [
  CubeCoord::new(5, 4, 0),
  CubeCoord::new(1, 5, 0),
  CubeCoord::new(0, 5, 4),
  CubeCoord::new(0, 1, 5),
  CubeCoord::new(4, 0, 5),
  CubeCoord::new(5, 0, 1),
];

impl FaceCoord {
  #[must_use]
  pub const fn new(face: u8, coord: CubeCoord) -> Self {
    Self { face, coord }
  }

  /// Face coordinate of the cell containing `g` at `res`.
  #[must_use]
  pub fn from_geo(g: &LatLng, res: u8) -> Self {
    let (face, v) = geo_to_hex2d(g, res);
    Self::new(face, CubeCoord::from_hex2d(v))
  }

  /// Center point of the cell at this coordinate.
  #[must_use]
  pub fn to_geo(&self, res: u8) -> LatLng {
    hex2d_to_geo(self.coord.to_hex2d(), self.face, res, false)
  }

  /// Moves a Class II coordinate onto the neighboring face if it lies past its
  /// face's edge. Performs at most one face crossing.
  ///
  /// `pent_leading_4` applies the extra rotation needed for pentagon cells whose
  /// leading digit is I; `substrate` selects the aperture 3 vertex grid.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: u8, pent_leading_4: bool, substrate: bool) -> Overage {
    let scale = if substrate { 3 } else { 1 };
    let max_dim = MAX_DIM_BY_CII_RES[usize::from(res)] * scale;
    let sum = self.coord.i + self.coord.j + self.coord.k;

    if substrate && sum == max_dim {
      return Overage::FaceEdge;
    }
    if sum <= max_dim {
      return Overage::None;
    }

    let quadrant = if self.coord.k > 0 {
      if self.coord.j > 0 {
        JK_QUADRANT
      } else {
        if pent_leading_4 {
          let origin = CubeCoord::new(max_dim, 0, 0);
          self.coord = (self.coord - origin).rotate60_cw() + origin;
        }
        KI_QUADRANT
      }
    } else {
      IJ_QUADRANT
    };

    let orient = FACE_NEIGHBORS[usize::from(self.face)][quadrant];
    self.face = orient.face;
    let unit_scale = UNIT_SCALE_BY_CII_RES[usize::from(res)] * scale;
    self.coord = (self.coord.rotate60_ccw_by(usize::from(orient.ccw_rot60)) + orient.translate.scale(unit_scale)).normalize();

    if substrate && self.coord.i + self.coord.j + self.coord.k == max_dim {
      Overage::FaceEdge
    } else {
      Overage::NewFace
    }
  }

  /// Walks a pentagon vertex across faces until it no longer spills over.
  pub(crate) fn adjust_pent_vert_overage(&mut self, res: u8) -> Overage {
    loop {
      let overage = self.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return overage;
      }
    }
  }

  /// Moves this coordinate into the substrate grid and returns the vertex
  /// coordinates around it along with the Class II resolution they live at.
  fn substrate_verts(&mut self, res: u8) -> ([FaceCoord; NUM_HEX_VERTS], u8) {
    let verts = if is_class_iii(res) { &VERTS_CIII } else { &VERTS_CII };

    self.coord = self.coord.down_ap3().down_ap3r();
    let mut adj_res = res;
    if is_class_iii(res) {
      self.coord = self.coord.down_ap7r();
      adj_res += 1;
    }

    let center = *self;
    let out = verts.map(|vert| FaceCoord::new(center.face, (center.coord + vert).normalize()));
    (out, adj_res)
  }

  /// Boundary of the hexagon at this coordinate, starting at vertex `start`
  /// and covering `length` vertices. Edge crossings between faces add vertices
  /// for Class III cells.
  pub(crate) fn to_cell_boundary(&self, res: u8, start: usize, length: usize) -> CellBoundary {
    let mut center = *self;
    let (verts, adj_res) = center.substrate_verts(res);

    let extra = usize::from(length == NUM_HEX_VERTS);
    let mut boundary = CellBoundary::default();
    let mut last_face: Option<u8> = None;
    let mut last_overage = Overage::None;

    for vert in start..start + length + extra {
      let v = vert % NUM_HEX_VERTS;
      let mut fijk = verts[v];
      let overage = fijk.adjust_overage_class_ii(adj_res, false, true);

      // A Class III edge crossing a face boundary gains the crossing point as a
      // distorted vertex, unless the previous vertex sat exactly on the edge.
      if is_class_iii(res) && vert > start && last_face != Some(fijk.face) && last_overage != Overage::FaceEdge {
        let last_v = (v + 5) % NUM_HEX_VERTS;
        let orig0 = verts[last_v].coord.to_hex2d();
        let orig1 = verts[v].coord.to_hex2d();

        let face2 = match last_face {
          Some(face) if face != center.face => face,
          _ => fijk.face,
        };
        let (edge0, edge1) = face_edge(adj_res, adjacent_face_dir(center.face, face2));

        let inter = Vec2d::intersect(orig0, orig1, edge0, edge1);
        if !(orig0.almost_equals(&inter) || orig1.almost_equals(&inter)) {
          boundary.push(hex2d_to_geo(inter, center.face, adj_res, true));
        }
      }

      if vert < start + NUM_HEX_VERTS {
        boundary.push(hex2d_to_geo(fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last_face = Some(fijk.face);
      last_overage = overage;
    }
    boundary
  }

  /// Boundary of the pentagon at this coordinate. Every Class III pentagon edge
  /// crosses a face boundary and gains the crossing point as a vertex.
  pub(crate) fn pent_to_cell_boundary(&self, res: u8, start: usize, length: usize) -> CellBoundary {
    let mut center = *self;
    let (verts, adj_res) = center.substrate_verts(res);

    let extra = usize::from(length == NUM_PENT_VERTS);
    let mut boundary = CellBoundary::default();
    let mut last: Option<FaceCoord> = None;

    for vert in start..start + length + extra {
      let v = vert % NUM_PENT_VERTS;
      let mut fijk = verts[v];
      fijk.adjust_pent_vert_overage(adj_res);

      if let Some(last_fijk) = last.filter(|_| is_class_iii(res) && vert > start) {
        // Express this vertex in the last vertex's face to intersect with the shared edge.
        if let Some(to_last) = adjacent_face_dir(fijk.face, last_fijk.face) {
          let orient = FACE_NEIGHBORS[usize::from(fijk.face)][to_last];
          let unit_scale = UNIT_SCALE_BY_CII_RES[usize::from(adj_res)] * 3;
          let moved = FaceCoord::new(
            orient.face,
            (fijk.coord.rotate60_ccw_by(usize::from(orient.ccw_rot60)) + orient.translate.scale(unit_scale)).normalize(),
          );

          let orig0 = last_fijk.coord.to_hex2d();
          let orig1 = moved.coord.to_hex2d();
          let (edge0, edge1) = face_edge(adj_res, adjacent_face_dir(moved.face, fijk.face));
          let inter = Vec2d::intersect(orig0, orig1, edge0, edge1);
          boundary.push(hex2d_to_geo(inter, moved.face, adj_res, true));
        }
      }

      if vert < start + NUM_PENT_VERTS {
        boundary.push(hex2d_to_geo(fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }
      last = Some(fijk);
    }
    boundary
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::latlng::geo_almost_equal_threshold;

  #[test]
  fn face_adjacency_is_symmetric() {
    for from in 0..NUM_ICOSA_FACES as u8 {
      assert_eq!(adjacent_face_dir(from, from), Some(0));
      for to in 0..NUM_ICOSA_FACES as u8 {
        assert_eq!(
          adjacent_face_dir(from, to).is_some(),
          adjacent_face_dir(to, from).is_some(),
          "{from} <-> {to}"
        );
      }
      let neighbors = (0..NUM_ICOSA_FACES as u8)
        .filter(|&to| to != from && adjacent_face_dir(from, to).is_some())
        .count();
      assert_eq!(neighbors, 3);
    }
  }

  #[test]
  fn face_centers_project_to_origin() {
    for (face, center) in FACE_CENTER_GEO.iter().enumerate() {
      let (found, v) = geo_to_hex2d(center, 0);
      assert_eq!(usize::from(found), face);
      assert!(v.magnitude() < 1e-6);
    }
  }

  #[test]
  fn hex2d_round_trip() {
    let g = LatLng::from_degrees(37.7752702151959, -122.418307270836);
    for res in [0u8, 1, 5, 9, 15] {
      let (face, v) = geo_to_hex2d(&g, res);
      let back = hex2d_to_geo(v, face, res, false);
      assert!(geo_almost_equal_threshold(&g, &back, 1e-12), "res {res}");
    }
  }

  #[test]
  fn overage_moves_to_neighbor_face() {
    // Past the IJ edge of face 0 at resolution 0.
    let mut fijk = FaceCoord::new(0, CubeCoord::new(3, 0, 0));
    assert_eq!(fijk.adjust_overage_class_ii(0, false, false), Overage::NewFace);
    assert_eq!(fijk.face, 4);

    let mut inside = FaceCoord::new(0, CubeCoord::new(1, 1, 0));
    assert_eq!(inside.adjust_overage_class_ii(0, false, false), Overage::None);
    assert_eq!(inside, FaceCoord::new(0, CubeCoord::new(1, 1, 0)));

    let mut edge = FaceCoord::new(0, CubeCoord::new(6, 0, 0));
    assert_eq!(edge.adjust_overage_class_ii(0, false, true), Overage::FaceEdge);
  }

  #[test]
  fn hexagon_boundary_surrounds_center() {
    let fijk = FaceCoord::new(0, CubeCoord::new(1, 0, 0));
    for res in [0u8, 1] {
      let center = fijk.to_geo(res);
      let boundary = fijk.to_cell_boundary(res, 0, NUM_HEX_VERTS);
      assert!(boundary.len() >= NUM_HEX_VERTS);
      for vert in boundary.verts() {
        assert!(crate::latlng::great_circle_distance_rads(&center, vert) < 0.4);
      }
    }
  }
}
