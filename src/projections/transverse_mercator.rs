use lazy_static::lazy_static;

use crate::constants::{UTM_K0, WGS84_E, WGS84_R};

// ================================
// Transverse Mercator Constants
// ================================

lazy_static! {
    static ref UTM: TransverseMercator = TransverseMercator::new(WGS84_R, WGS84_E, UTM_K0);
}

/// Series coefficients of the truncated Krüger expansion for one ellipsoid.
/// Built once per process and only ever read afterwards.
#[derive(Debug)]
pub(crate) struct TransverseMercator {
    r: f64,
    k0: f64,
    e: f64,
    e_p2: f64,
    n: f64,
    m1: f64,
    m2: f64,
    m3: f64,
    m4: f64,
    p2: f64,
    p3: f64,
    p4: f64,
    p5: f64,
}

impl TransverseMercator {
    /// Shared UTM projection on the WGS84 ellipsoid.
    pub fn utm() -> &'static TransverseMercator {
        &UTM
    }

    #[allow(clippy::similar_names)]
    fn new(r: f64, e: f64, k0: f64) -> TransverseMercator {
        let e2 = e * e;
        let e3 = e2 * e;
        let e_p2 = e / (1. - e);

        let sqrt_e = (1. - e).sqrt();
        // Third flattening
        let n = (1. - sqrt_e) / (1. + sqrt_e);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;

        Self {
            r,
            k0,
            e,
            e_p2,
            n,
            m1: 1. - e / 4. - 3. * e2 / 64. - 5. * e3 / 256.,
            m2: 3. * e / 8. + 3. * e2 / 32. + 45. * e3 / 1024.,
            m3: 15. * e2 / 256. + 45. * e3 / 1024.,
            m4: 35. * e3 / 3072.,
            p2: 3. / 2. * n - 27. / 32. * n3 + 269. / 512. * n5,
            p3: 21. / 16. * n2 - 55. / 32. * n4,
            p4: 151. / 96. * n3 - 417. / 128. * n5,
            p5: 1097. / 512. * n4,
        }
    }

    /// Meridian arc length from the equator to `lat_rad`.
    fn meridian_arc(&self, lat_rad: f64) -> f64 {
        self.r * (self.m1 * lat_rad
            - self.m2 * (2. * lat_rad).sin()
            + self.m3 * (4. * lat_rad).sin()
            - self.m4 * (6. * lat_rad).sin())
    }

    /// Projects a point onto the plane tangent along meridian `lon0`.
    /// Returns `(x, y)` without the false easting/northing applied.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let lat_rad = lat.to_radians();
        let lat_sin = lat_rad.sin();
        let lat_cos = lat_rad.cos();

        let lat_tan = lat_sin / lat_cos;
        let lat_tan2 = lat_tan * lat_tan;
        let lat_tan4 = lat_tan2 * lat_tan2;

        let n = self.r / (1. - self.e * lat_sin * lat_sin).sqrt();
        let c = self.e_p2 * lat_cos * lat_cos;

        let a = lat_cos * (lon.to_radians() - lon0.to_radians());
        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let m = self.meridian_arc(lat_rad);

        let x = self.k0 * n * (a
            + a3 / 6. * (1. - lat_tan2 + c)
            + a5 / 120. * (5. - 18. * lat_tan2 + lat_tan4 + 72. * c - 58. * self.e_p2));
        let y = self.k0 * (m + n * lat_tan * (a2 / 2.
            + a4 / 24. * (5. - lat_tan2 + 9. * c + 4. * c * c)
            + a6 / 720. * (61. - 58. * lat_tan2 + lat_tan4 + 600. * c - 330. * self.e_p2)));

        (x, y)
    }

    /// Inverse of [`TransverseMercator::from_latlon`]. `x` and `y` must
    /// already have the false easting/northing removed. Returns
    /// `(lat, lon)` in degrees.
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> (f64, f64) {
        let m = y / self.k0;
        let mu = m / (self.r * self.m1);

        // Footprint latitude
        let p_rad = mu
            + self.p2 * (2. * mu).sin()
            + self.p3 * (4. * mu).sin()
            + self.p4 * (6. * mu).sin()
            + self.p5 * (8. * mu).sin();

        let p_sin = p_rad.sin();
        let p_sin2 = p_sin * p_sin;
        let p_cos = p_rad.cos();

        let p_tan = p_sin / p_cos;
        let p_tan2 = p_tan * p_tan;
        let p_tan4 = p_tan2 * p_tan2;

        let ep_sin = 1. - self.e * p_sin2;
        let ep_sin_sqrt = ep_sin.sqrt();

        let n = self.r / ep_sin_sqrt;
        // Ratio of meridional to prime-vertical radius of curvature
        let rho = (1. - self.e) / ep_sin;

        let c = self.n * p_cos * p_cos;
        let c2 = c * c;

        let d = x / (n * self.k0);
        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        // Sixth-order term applied without the tan/rho factor, as in the
        // classical truncated series
        let lat = p_rad
            - (p_tan / rho)
                * (d2 / 2. - d4 / 24. * (5. + 3. * p_tan2 + 10. * c - 4. * c2 - 9. * self.e_p2))
            + d6 / 720.
                * (61. + 90. * p_tan2 + 298. * c + 45. * p_tan4 - 252. * self.e_p2 - 3. * c2);

        let lon = (d
            - d3 / 6. * (1. + 2. * p_tan2 + c)
            + d5 / 120. * (5. - 2. * c + 28. * p_tan2 - 3. * c2 + 8. * self.e_p2 + 24. * p_tan4))
            / p_cos;

        (lat.to_degrees(), lon.to_degrees() + lon0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn derived_constants() {
        let tm = TransverseMercator::utm();

        assert_abs_diff_eq!(tm.e_p2, 0.006_739_496_7, epsilon = 1e-9);
        assert_abs_diff_eq!(tm.n, 0.001_679_220_4, epsilon = 1e-9);
        assert_abs_diff_eq!(tm.m1, 0.998_324_298, epsilon = 1e-8);
        assert_abs_diff_eq!(tm.p5, 1097. / 512. * tm.n.powi(4), epsilon = 1e-18);
    }

    #[test]
    fn shared_instance() {
        assert!(std::ptr::eq(TransverseMercator::utm(), TransverseMercator::utm()));
    }

    #[test]
    fn central_meridian_maps_to_zero_easting() {
        let tm = TransverseMercator::utm();

        let (x, y) = tm.from_latlon(-75., 0., -75.);
        assert_abs_diff_eq!(x, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(y, 0., epsilon = 1e-9);

        let (x, _) = tm.from_latlon(9., 45., 9.);
        assert_abs_diff_eq!(x, 0., epsilon = 1e-9);
    }

    #[test]
    fn meridian_arc_at_45_degrees() {
        let tm = TransverseMercator::utm();
        let (_, y) = tm.from_latlon(3., 45., 3.);

        // Scaled meridian distance to 45N on WGS84
        assert_abs_diff_eq!(y, 4_982_950.4, epsilon = 1.);
    }

    #[test]
    fn inverse_recovers_input() {
        let tm = TransverseMercator::utm();
        let (x, y) = tm.from_latlon(-3., 56.7968, -5.00601);
        let (lat, lon) = tm.to_latlon(-3., x, y);

        assert_abs_diff_eq!(lat, 56.7968, epsilon = 1e-5);
        assert_abs_diff_eq!(lon, -5.00601, epsilon = 1e-5);
    }
}
