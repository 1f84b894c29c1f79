use std::fmt::Display;

use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING, MIN_SOUTHERN_NORTHING},
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    validate,
    zone::{self, central_meridian, Hemisphere, HemisphereSource, LetterMode, ZoneLetter},
    Error, ThisOrThat,
};

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point. The zone letter is either a latitude band or a hemisphere label,
/// depending on the [`LetterMode`] the point was converted with.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) easting: f64,
    pub(crate) northing: f64,
    pub(crate) zone_number: i32,
    pub(crate) zone_letter: ZoneLetter,
}

impl Utm {
    /// Creates a UTM point from its constituent parts. Nothing is checked
    /// until the point is converted.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Utm, ZoneLetter};
    ///
    /// let coord = Utm::new(377_486., 6_296_562., 30, ZoneLetter::Band('V'));
    ///
    /// assert_eq!(coord.zone_number(), 30);
    /// assert_eq!(coord.zone_letter(), ZoneLetter::Band('V'));
    /// ```
    pub fn new(easting: f64, northing: f64, zone_number: i32, zone_letter: ZoneLetter) -> Utm {
        Self {
            easting,
            northing,
            zone_number,
            zone_letter,
        }
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    #[inline]
    pub fn zone_number(&self) -> i32 {
        self.zone_number
    }

    #[inline]
    pub fn zone_letter(&self) -> ZoneLetter {
        self.zone_letter
    }

    /// Converts from [`LatLon`] to [`Utm`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLatitude`] if the latitude is outside
    /// `[-80, 84]` and [`Error::InvalidLongitude`] if the longitude is
    /// outside `[-180, 180]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{LatLon, LetterMode, Utm, ZoneLetter};
    ///
    /// let coord = LatLon::new(-41.28646, 174.77624);
    /// let converted = Utm::from_latlon(&coord, LetterMode::LatitudeBand).unwrap();
    ///
    /// assert_eq!(converted.zone_number(), 60);
    /// assert_eq!(converted.zone_letter(), ZoneLetter::Band('G'));
    /// assert!((converted.easting() - 313_784.).abs() < 1.);
    /// assert!((converted.northing() - 5_427_057.).abs() < 1.);
    /// ```
    pub fn from_latlon(value: &LatLon, mode: LetterMode) -> Result<Utm, Error> {
        let (lat, lon) = (value.latitude, value.longitude);
        validate::check_latlon(lat, lon)?;

        let zone_number = zone::zone_number(lat, lon);
        let zone_letter = match mode {
            LetterMode::LatitudeBand => {
                let band = zone::latitude_band(lat).ok_or(Error::InvalidLatitude(lat))?;
                ZoneLetter::Band(band)
            }
            LetterMode::Hemisphere => ZoneLetter::Hemisphere(Hemisphere::of_latitude(lat)),
        };

        let (x, y) = TransverseMercator::utm().from_latlon(central_meridian(zone_number), lat, lon);

        let easting = x + FALSE_EASTING;
        let northing = (lat < 0.).ternary(y + FALSE_NORTHING, y);

        tracing::trace!(zone_number, %zone_letter, easting, northing, "converted to UTM");

        Ok(Utm {
            easting,
            northing,
            zone_number,
            zone_letter,
        })
    }

    /// Converts from [`Utm`] to [`LatLon`]. A band letter is validated and
    /// read as a band; a hemisphere letter is used as the hemisphere flag.
    /// The equator is labelled `S` in hemisphere mode but carries no false
    /// northing, so an `S` label with a northing no southern point can have
    /// is read as northern.
    ///
    /// # Errors
    ///
    /// Returns the range error of the first invalid component.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Hemisphere, Utm, ZoneLetter};
    ///
    /// let coord = Utm::new(583_960., 4_507_523., 18, ZoneLetter::Band('T'));
    /// let converted = coord.to_latlon().unwrap();
    ///
    /// assert!((converted.latitude() - 40.71435).abs() < 1e-5);
    /// assert!((converted.longitude() - -74.00597).abs() < 1e-5);
    ///
    /// // The southern hemisphere label is not read as band S
    /// let coord = Utm::new(313_784., 5_427_057., 60, ZoneLetter::Hemisphere(Hemisphere::South));
    /// assert!(coord.to_latlon().unwrap().latitude() < 0.);
    /// ```
    pub fn to_latlon(&self) -> Result<LatLon, Error> {
        let source = match self.zone_letter {
            ZoneLetter::Hemisphere(Hemisphere::South) if self.northing < MIN_SOUTHERN_NORTHING => {
                HemisphereSource::ExplicitFlag(true)
            }
            letter => letter.into(),
        };

        to_latlon(self.easting, self.northing, self.zone_number, source)
    }
}

/// Inverse projection of raw UTM components, with the hemisphere taken
/// from `source`.
///
/// # Errors
///
/// Returns [`Error::InvalidEasting`], [`Error::InvalidNorthing`],
/// [`Error::InvalidZoneNumber`] or [`Error::InvalidZoneLetter`] for the
/// first component out of range.
pub fn to_latlon(
    easting: f64,
    northing: f64,
    zone_number: i32,
    source: HemisphereSource,
) -> Result<LatLon, Error> {
    validate::check_coords(easting, northing, zone_number)?;
    let northp = source.is_north()?;

    let x = easting - FALSE_EASTING;
    let y = northp.ternary(northing, northing - FALSE_NORTHING);

    let (lat, lon) = TransverseMercator::utm().to_latlon(central_meridian(zone_number), x, y);

    tracing::trace!(zone_number, northp, lat, lon, "converted to lat/lon");

    Ok(LatLon::new(lat, lon))
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{}{} {easting} {northing}",
            self.zone_number,
            self.zone_letter,
        )
    }
}
