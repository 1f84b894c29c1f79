#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod latlon;
pub mod utm;
pub mod zone;

pub use latlon::LatLon;
pub use utm::Utm;
pub use zone::{Hemisphere, HemisphereSource, LetterMode, ZoneLetter};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod validate;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Latitude {0} outside of valid range [-80, 84]")]
    InvalidLatitude(f64),
    #[error("Longitude {0} outside of valid range [-180, 180]")]
    InvalidLongitude(f64),
    #[error("Easting {0} outside of valid range [100000, 1000000)")]
    InvalidEasting(f64),
    #[error("Northing {0} outside of valid range [0, 10000000]")]
    InvalidNorthing(f64),
    #[error("Zone number {0} outside of valid range [1, 60]")]
    InvalidZoneNumber(i32),
    #[error("Zone letter {0:?} is not a latitude band in C..X (excluding I and O)")]
    InvalidZoneLetter(char),
    #[error("Set either a zone letter or the hemisphere flag, but not both")]
    AmbiguousHemisphere,
    #[error("Either a zone letter or the hemisphere flag needs to be set")]
    MissingHemisphere,
}

/// Converts a latitude/longitude pair to UTM.
///
/// With `northern_hemisphere` set, the zone letter is the hemisphere label
/// (`N`/`S`) instead of the latitude band.
///
/// # Errors
///
/// Returns [`Error::InvalidLatitude`] or [`Error::InvalidLongitude`] if the
/// point is outside `[-80, 84]` x `[-180, 180]`.
///
/// # Usage
///
/// ```
/// use utmconv::{from_geodetic, Hemisphere, ZoneLetter};
///
/// let coord = from_geodetic(40.71435, -74.00597, false).unwrap();
/// assert_eq!(coord.zone_number(), 18);
/// assert_eq!(coord.zone_letter(), ZoneLetter::Band('T'));
/// assert!((coord.easting() - 583_960.).abs() < 1.);
/// assert!((coord.northing() - 4_507_523.).abs() < 1.);
///
/// let coord = from_geodetic(40.71435, -74.00597, true).unwrap();
/// assert_eq!(coord.zone_letter(), ZoneLetter::Hemisphere(Hemisphere::North));
/// ```
pub fn from_geodetic(
    latitude: f64,
    longitude: f64,
    northern_hemisphere: bool,
) -> Result<Utm, Error> {
    LatLon::new(latitude, longitude).to_utm(LetterMode::from(northern_hemisphere))
}

/// Converts a UTM coordinate to latitude/longitude. The hemisphere comes
/// from exactly one of `zone_letter` or `northern`.
///
/// # Errors
///
/// Returns [`Error::AmbiguousHemisphere`] or [`Error::MissingHemisphere`]
/// unless exactly one disambiguator is given, and the matching range error
/// for an invalid easting, northing, zone number or zone letter.
///
/// # Usage
///
/// ```
/// use utmconv::{to_geodetic, Error};
///
/// let coord = to_geodetic(377_486., 6_296_562., 30, Some('V'), None).unwrap();
/// assert!((coord.latitude() - 56.7968).abs() < 1e-5);
/// assert!((coord.longitude() - -5.00601).abs() < 1e-5);
///
/// let same = to_geodetic(377_486., 6_296_562., 30, None, Some(true)).unwrap();
/// assert_eq!(coord, same);
///
/// assert_eq!(
///     to_geodetic(377_486., 6_296_562., 30, Some('V'), Some(true)),
///     Err(Error::AmbiguousHemisphere),
/// );
/// ```
pub fn to_geodetic(
    easting: f64,
    northing: f64,
    zone_number: i32,
    zone_letter: Option<char>,
    northern: Option<bool>,
) -> Result<LatLon, Error> {
    let source = HemisphereSource::resolve(zone_letter, northern)?;

    utm::to_latlon(easting, northing, zone_number, source)
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
