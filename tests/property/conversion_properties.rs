use proptest::prelude::*;
use utmconv::{
    from_geodetic, to_geodetic,
    zone::{latitude_band, zone_number},
    LatLon, LetterMode,
};

const BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";

proptest! {
    #[test]
    fn band_round_trip(lat in -80.0..=84.0_f64, lon in -180.0..=180.0_f64) {
        let coord = LatLon::new(lat, lon).to_utm(LetterMode::LatitudeBand).unwrap();
        let back = coord.to_latlon().unwrap();

        prop_assert!((back.latitude() - lat).abs() < 1e-4, "lat {} -> {}", lat, back.latitude());
        prop_assert!((back.longitude() - lon).abs() < 1e-4, "lon {} -> {}", lon, back.longitude());
    }

    #[test]
    fn hemisphere_round_trip(lat in -80.0..=84.0_f64, lon in -180.0..=180.0_f64) {
        let coord = from_geodetic(lat, lon, true).unwrap();
        let back = coord.to_latlon().unwrap();

        prop_assert!((back.latitude() - lat).abs() < 1e-4, "lat {} -> {}", lat, back.latitude());
        prop_assert!((back.longitude() - lon).abs() < 1e-4, "lon {} -> {}", lon, back.longitude());
    }

    #[test]
    fn equator_hemisphere_round_trip(lon in -180.0..=180.0_f64) {
        let coord = from_geodetic(0.0, lon, true).unwrap();
        let back = coord.to_latlon().unwrap();

        prop_assert!(back.latitude().abs() < 1e-4);
        prop_assert!((back.longitude() - lon).abs() < 1e-4);
    }

    #[test]
    fn flag_round_trip(lat in -80.0..=84.0_f64, lon in -180.0..=180.0_f64) {
        let coord = from_geodetic(lat, lon, true).unwrap();
        let northern = lat >= 0.0;
        let (easting, northing, zone) = (coord.easting(), coord.northing(), coord.zone_number());
        let back = to_geodetic(easting, northing, zone, None, Some(northern)).unwrap();

        prop_assert!((back.latitude() - lat).abs() < 1e-4);
        prop_assert!((back.longitude() - lon).abs() < 1e-4);
    }

    #[test]
    fn band_contains_latitude(lat in -80.0..84.0_f64) {
        let letter = latitude_band(lat).unwrap();
        let index = BANDS.find(letter).unwrap();
        let min_lat = -80.0 + 8.0 * index as f64;
        let max_lat = if letter == 'X' { 84.0 } else { min_lat + 8.0 };

        prop_assert!(min_lat <= lat && lat < max_lat, "{} in band {}", lat, letter);
    }

    #[test]
    fn band_is_monotonic(a in -80.0..=84.0_f64, b in -80.0..=84.0_f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_index = BANDS.find(latitude_band(low).unwrap()).unwrap();
        let high_index = BANDS.find(latitude_band(high).unwrap()).unwrap();

        prop_assert!(low_index <= high_index);
    }

    #[test]
    fn zone_number_in_range(lat in -80.0..=84.0_f64, lon in -180.0..=180.0_f64) {
        prop_assert!((1..=60).contains(&zone_number(lat, lon)));
    }
}
