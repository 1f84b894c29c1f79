use utmconv::{from_geodetic, to_geodetic, Error};

#[test]
fn latitude_boundaries() {
    assert_eq!(from_geodetic(-80.0001, 0., false), Err(Error::InvalidLatitude(-80.0001)));
    assert_eq!(from_geodetic(84.0001, 0., false), Err(Error::InvalidLatitude(84.0001)));
    assert!(from_geodetic(-80., 0., false).is_ok());
    assert!(from_geodetic(84., 0., false).is_ok());
}

#[test]
fn longitude_boundaries() {
    assert_eq!(from_geodetic(0., -180.0001, false), Err(Error::InvalidLongitude(-180.0001)));
    assert_eq!(from_geodetic(0., 180.0001, true), Err(Error::InvalidLongitude(180.0001)));
    assert!(from_geodetic(0., -180., false).is_ok());
    assert!(from_geodetic(0., 180., true).is_ok());
}

#[test]
fn hemisphere_disambiguator() {
    assert_eq!(
        to_geodetic(377_486., 6_296_562., 30, Some('V'), Some(true)),
        Err(Error::AmbiguousHemisphere),
    );
    assert_eq!(
        to_geodetic(377_486., 6_296_562., 30, None, None),
        Err(Error::MissingHemisphere),
    );
}

#[test]
fn disambiguator_checked_before_ranges() {
    assert_eq!(to_geodetic(0., -1., 99, None, None), Err(Error::MissingHemisphere));
}

#[test]
fn projected_ranges() {
    assert_eq!(to_geodetic(99_999., 0., 30, Some('V'), None), Err(Error::InvalidEasting(99_999.)));
    assert_eq!(
        to_geodetic(1_000_000., 0., 30, Some('V'), None),
        Err(Error::InvalidEasting(1_000_000.)),
    );
    assert_eq!(
        to_geodetic(500_000., -0.5, 30, None, Some(true)),
        Err(Error::InvalidNorthing(-0.5)),
    );
    assert_eq!(
        to_geodetic(500_000., 10_000_001., 30, None, Some(true)),
        Err(Error::InvalidNorthing(10_000_001.)),
    );
    assert_eq!(to_geodetic(500_000., 0., 0, None, Some(true)), Err(Error::InvalidZoneNumber(0)));
    assert_eq!(to_geodetic(500_000., 0., 61, None, Some(true)), Err(Error::InvalidZoneNumber(61)));
}

#[test]
fn zone_letters() {
    for letter in ['A', 'B', 'I', 'O', 'Y', 'Z', 'i', 'o', '1', ' '] {
        assert_eq!(
            to_geodetic(500_000., 5_000_000., 30, Some(letter), None),
            Err(Error::InvalidZoneLetter(letter)),
        );
    }

    for letter in "CDEFGHJKLMNPQRSTUVWXcdefghjklmnpqrstuvwx".chars() {
        assert!(to_geodetic(500_000., 5_000_000., 30, Some(letter), None).is_ok(), "{letter}");
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::InvalidLatitude(90.).to_string(),
        "Latitude 90 outside of valid range [-80, 84]",
    );
    assert_eq!(
        Error::InvalidZoneLetter('O').to_string(),
        "Zone letter 'O' is not a latitude band in C..X (excluding I and O)",
    );
}
