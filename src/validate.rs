//! Range checks run before any projection math. Each check reports the
//! first violated precondition as its own [`Error`] variant.

use crate::{
    constants::{
        MAX_EASTING, MAX_LATITUDE, MAX_LONGITUDE, MAX_NORTHING, MAX_ZONE, MIN_EASTING, MIN_LATITUDE,
        MIN_LONGITUDE, MIN_NORTHING, MIN_ZONE,
    },
    zone::HemisphereSource,
    Error,
};

pub(crate) fn check_latlon(lat: f64, lon: f64) -> Result<(), Error> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        tracing::debug!(latitude = lat, "latitude outside UTM coverage");
        return Err(Error::InvalidLatitude(lat));
    }

    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        tracing::debug!(longitude = lon, "longitude out of range");
        return Err(Error::InvalidLongitude(lon));
    }

    Ok(())
}

pub(crate) fn check_coords(easting: f64, northing: f64, zone: i32) -> Result<(), Error> {
    if !(MIN_EASTING..MAX_EASTING).contains(&easting) {
        tracing::debug!(easting, "easting out of range");
        return Err(Error::InvalidEasting(easting));
    }

    if !(MIN_NORTHING..=MAX_NORTHING).contains(&northing) {
        tracing::debug!(northing, "northing out of range");
        return Err(Error::InvalidNorthing(northing));
    }

    if !(MIN_ZONE..=MAX_ZONE).contains(&zone) {
        tracing::debug!(zone, "zone number out of range");
        return Err(Error::InvalidZoneNumber(zone));
    }

    Ok(())
}

/// Returns the upper-cased band letter if it is one of `C..=X` without
/// `I` and `O`.
pub(crate) fn check_zone_letter(letter: char) -> Result<char, Error> {
    let upper = letter.to_ascii_uppercase();

    if !('C'..='X').contains(&upper) || upper == 'I' || upper == 'O' {
        tracing::debug!(%letter, "zone letter is not a latitude band");
        return Err(Error::InvalidZoneLetter(letter));
    }

    Ok(upper)
}

pub(crate) fn check_hemisphere_source(
    zone_letter: Option<char>,
    northern: Option<bool>,
) -> Result<HemisphereSource, Error> {
    match (zone_letter, northern) {
        (Some(letter), None) => Ok(HemisphereSource::ZoneLetter(letter)),
        (None, Some(northern)) => Ok(HemisphereSource::ExplicitFlag(northern)),
        (Some(_), Some(_)) => {
            tracing::debug!("both zone letter and hemisphere flag given");
            Err(Error::AmbiguousHemisphere)
        }
        (None, None) => {
            tracing::debug!("neither zone letter nor hemisphere flag given");
            Err(Error::MissingHemisphere)
        }
    }
}
