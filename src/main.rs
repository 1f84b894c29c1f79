use utmconv::{from_geodetic, to_geodetic, Error};

fn main() -> Result<(), Error> {
    for northern_hemisphere in [false, true] {
        let coord = from_geodetic(40.71435, -74.00597, northern_hemisphere)?;

        println!(
            "Easting: {:.6}; Northing: {:.6}; ZoneNumber: {}; ZoneLetter: {};",
            coord.easting(),
            coord.northing(),
            coord.zone_number(),
            coord.zone_letter(),
        );
    }

    let coord = to_geodetic(377_486., 6_296_562., 30, None, Some(true))?;
    println!("Latitude: {:.5}; Longitude: {:.5};", coord.latitude(), coord.longitude());

    let coord = to_geodetic(377_486., 6_296_562., 30, Some('V'), None)?;
    println!("Latitude: {:.5}; Longitude: {:.5};", coord.latitude(), coord.longitude());

    match to_geodetic(377_486., 6_296_562., 30, Some('V'), Some(true)) {
        Ok(coord) => println!("Unexpected success: {coord}"),
        Err(err) => println!("Rejected: {err}"),
    }

    Ok(())
}
