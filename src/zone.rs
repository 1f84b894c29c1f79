use std::fmt::Display;

use crate::{constants::{MAX_ZONE, MIN_ZONE}, validate, Error, ThisOrThat};

/// Latitude bands as `(minimum latitude, letter)`, ordered by descending
/// threshold. Each band is 8 degrees tall except `X`, which extends to 84.
const LATITUDE_BANDS: [(f64, char); 20] = [
    (72., 'X'),
    (64., 'W'),
    (56., 'V'),
    (48., 'U'),
    (40., 'T'),
    (32., 'S'),
    (24., 'R'),
    (16., 'Q'),
    (8., 'P'),
    (0., 'N'),
    (-8., 'M'),
    (-16., 'L'),
    (-24., 'K'),
    (-32., 'J'),
    (-40., 'H'),
    (-48., 'G'),
    (-56., 'F'),
    (-64., 'E'),
    (-72., 'D'),
    (-80., 'C'),
];

/// Returns the UTM zone containing the point, honouring the irregular zones
/// around south-western Norway and Svalbard.
///
/// # Usage
///
/// ```
/// use utmconv::zone::zone_number;
///
/// assert_eq!(zone_number(40.71435, -74.00597), 18);
/// // Norway
/// assert_eq!(zone_number(60.0, 5.0), 32);
/// // Svalbard
/// assert_eq!(zone_number(75.0, 25.0), 35);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn zone_number(lat: f64, lon: f64) -> i32 {
    // The Norway exception
    if (56_f64..=64.).contains(&lat) && (3_f64..=12.).contains(&lon) {
        return 32;
    }

    // The Svalbard exception
    if (72_f64..=84.).contains(&lat) && lon >= 0. {
        if lon <= 9. {
            return 31;
        } else if lon <= 21. {
            return 33;
        } else if lon <= 33. {
            return 35;
        } else if lon <= 42. {
            return 37;
        }
    }

    // Longitude 180 belongs to the last zone rather than a 61st one
    (((lon + 180.) / 6.).floor() as i32 + 1).clamp(MIN_ZONE, MAX_ZONE)
}

/// Returns the latitude band letter for `lat`, or `None` south of 80S.
///
/// # Usage
///
/// ```
/// use utmconv::zone::latitude_band;
///
/// assert_eq!(latitude_band(56.7968), Some('V'));
/// assert_eq!(latitude_band(-41.28646), Some('G'));
/// assert_eq!(latitude_band(-85.0), None);
/// ```
pub fn latitude_band(lat: f64) -> Option<char> {
    LATITUDE_BANDS
        .iter()
        .find(|(min_lat, _)| lat >= *min_lat)
        .map(|(_, letter)| *letter)
}

/// Longitude in degrees of the central meridian of `zone`.
pub fn central_meridian(zone: i32) -> f64 {
    f64::from((zone - 1) * 6 - 180 + 3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere label for a latitude. The equator is labelled
    /// [`Hemisphere::South`].
    pub fn of_latitude(lat: f64) -> Hemisphere {
        (lat > 0.).ternary(Hemisphere::North, Hemisphere::South)
    }

    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }

    pub fn letter(self) -> char {
        self.is_north().ternary('N', 'S')
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The letter attached to a UTM coordinate. Band letters and hemisphere
/// letters overlap (`N` and `S` are both), so the meaning is carried by the
/// variant instead of the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneLetter {
    /// Latitude band letter in `C..=X`, excluding `I` and `O`.
    Band(char),
    /// Hemisphere-only label.
    Hemisphere(Hemisphere),
}

impl ZoneLetter {
    pub fn letter(&self) -> char {
        match self {
            ZoneLetter::Band(letter) => *letter,
            ZoneLetter::Hemisphere(hemisphere) => hemisphere.letter(),
        }
    }

    /// Whether the letter designates the northern hemisphere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneLetter`] if a band letter is not a valid
    /// latitude band.
    pub fn is_north(&self) -> Result<bool, Error> {
        HemisphereSource::from(*self).is_north()
    }
}

impl Display for ZoneLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which kind of letter a forward conversion assigns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LetterMode {
    /// Latitude band letter from the band table.
    #[default]
    LatitudeBand,
    /// `N` north of the equator, `S` otherwise.
    Hemisphere,
}

impl From<bool> for LetterMode {
    /// `true` selects [`LetterMode::Hemisphere`].
    fn from(value: bool) -> Self {
        value.ternary(LetterMode::Hemisphere, LetterMode::LatitudeBand)
    }
}

/// Tells an inverse conversion which hemisphere the northing belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HemisphereSource {
    /// A latitude band letter, matched case-insensitively.
    ZoneLetter(char),
    /// `true` for the northern hemisphere.
    ExplicitFlag(bool),
}

impl HemisphereSource {
    /// Builds a source from the two optional disambiguators. Exactly one of
    /// them must be given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousHemisphere`] if both are given and
    /// [`Error::MissingHemisphere`] if neither is.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{zone::HemisphereSource, Error};
    ///
    /// let from_letter = HemisphereSource::resolve(Some('V'), None);
    /// assert_eq!(from_letter, Ok(HemisphereSource::ZoneLetter('V')));
    ///
    /// let from_flag = HemisphereSource::resolve(None, Some(true));
    /// assert_eq!(from_flag, Ok(HemisphereSource::ExplicitFlag(true)));
    ///
    /// let both = HemisphereSource::resolve(Some('V'), Some(true));
    /// assert_eq!(both, Err(Error::AmbiguousHemisphere));
    /// assert_eq!(HemisphereSource::resolve(None, None), Err(Error::MissingHemisphere));
    /// ```
    pub fn resolve(
        zone_letter: Option<char>,
        northern: Option<bool>,
    ) -> Result<HemisphereSource, Error> {
        validate::check_hemisphere_source(zone_letter, northern)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneLetter`] if the band letter is not in
    /// `C..=X` or is `I`/`O`.
    pub fn is_north(&self) -> Result<bool, Error> {
        match *self {
            HemisphereSource::ZoneLetter(letter) => {
                let letter = validate::check_zone_letter(letter)?;
                Ok(letter >= 'N')
            }
            HemisphereSource::ExplicitFlag(northern) => Ok(northern),
        }
    }
}

impl From<ZoneLetter> for HemisphereSource {
    fn from(value: ZoneLetter) -> Self {
        match value {
            ZoneLetter::Band(letter) => HemisphereSource::ZoneLetter(letter),
            ZoneLetter::Hemisphere(hemisphere) => {
                HemisphereSource::ExplicitFlag(hemisphere.is_north())
            }
        }
    }
}
