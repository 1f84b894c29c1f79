use std::fmt::Display;

use crate::{utm::Utm, zone::{Hemisphere, LetterMode}, Error};

/// Representation of a WGS84 Latitude/Longitude point in degrees. Can be
/// converted to/from [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Creates a latitude/longitude point. The values are only checked
    /// when the point is converted: latitude must then be in `[-80, 84]`
    /// and longitude in `[-180, 180]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::LatLon;
    ///
    /// let coord = LatLon::new(40.71435, -74.00597);
    ///
    /// assert_eq!(coord.latitude(), 40.71435);
    /// assert_eq!(coord.longitude(), -74.00597);
    /// ```
    pub fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere. The
    /// equator counts as southern, as in [`Hemisphere::of_latitude`].
    ///
    /// # Example
    ///
    /// ```
    /// use utmconv::LatLon;
    ///
    /// assert!(LatLon::new(40.71435, -74.00597).is_north());
    /// assert!(!LatLon::new(-41.28646, 174.77624).is_north());
    /// assert!(!LatLon::new(0.0, 3.5).is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        Hemisphere::of_latitude(self.latitude).is_north()
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Errors
    ///
    /// See [`Utm::to_latlon`].
    pub fn from_utm(value: &Utm) -> Result<LatLon, Error> {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Utm`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLatitude`] or [`Error::InvalidLongitude`]
    /// if the point is outside UTM coverage.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{LatLon, LetterMode, ZoneLetter};
    ///
    /// let converted = LatLon::new(56.7968, -5.00601).to_utm(LetterMode::LatitudeBand).unwrap();
    ///
    /// assert_eq!(converted.zone_number(), 30);
    /// assert_eq!(converted.zone_letter(), ZoneLetter::Band('V'));
    /// assert!((converted.easting() - 377_486.).abs() < 1.);
    /// assert!((converted.northing() - 6_296_562.).abs() < 1.);
    /// ```
    pub fn to_utm(&self, mode: LetterMode) -> Result<Utm, Error> {
        Utm::from_latlon(self, mode)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
