// Semi-major axis r
pub(crate) const WGS84_R: f64 = 6_378_137.;
// Squared eccentricity
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_E: f64 = 0.00669438;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

pub(crate) const FALSE_EASTING: f64 = 500_000.;
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;
// Below the northing of any point south of the equator (about 1117 km at 80S)
pub(crate) const MIN_SOUTHERN_NORTHING: f64 = 1_000_000.;

pub(crate) const MIN_LATITUDE: f64 = -80.;
pub(crate) const MAX_LATITUDE: f64 = 84.;
pub(crate) const MIN_LONGITUDE: f64 = -180.;
pub(crate) const MAX_LONGITUDE: f64 = 180.;

// Easting upper bound is exclusive
pub(crate) const MIN_EASTING: f64 = 100_000.;
pub(crate) const MAX_EASTING: f64 = 1_000_000.;
pub(crate) const MIN_NORTHING: f64 = 0.;
pub(crate) const MAX_NORTHING: f64 = 10_000_000.;

pub(crate) const MIN_ZONE: i32 = 1;
pub(crate) const MAX_ZONE: i32 = 60;
