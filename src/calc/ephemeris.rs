//! Solar, lunar, and ascendant ecliptic longitudes.
//!
//! Sun: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25 (apparent
//! longitude, accuracy ~0.01 deg). Moon: truncated ELP-2000 principal
//! longitude series from Meeus ch. 47 (accuracy a few hundredths of a
//! degree, ample for sign and gate placement). Obliquity: Meeus ch. 22.
//! Ascendant: standard horizon formula from local sidereal time,
//! obliquity, and geographic latitude.

use crate::calc::julian::{datetime_to_jd, gmst_deg, julian_centuries, local_sidereal_deg};
use chrono::NaiveDateTime;

/// Ecliptic longitudes, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisResult {
    pub sun_long: f64,
    pub moon_long: f64,
    pub asc_long: f64,
}

/// Sun's apparent ecliptic longitude in degrees, [0, 360).
///
/// Meeus ch. 25: geometric mean longitude + equation of center, then
/// the nutation/aberration correction to apparent longitude.
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    // geometric mean longitude and mean anomaly
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();

    // equation of center
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_long = l0 + c;

    // correction to apparent longitude (nutation + aberration)
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_long - 0.005_69 - 0.004_78 * omega.sin();

    apparent.rem_euclid(360.0)
}

/// Principal longitude terms of the lunar theory, Meeus ch. 47 table 47.A.
///
/// Each row: multipliers of (D, M, M', F) and the sine amplitude in
/// 1e-6 degrees. Terms whose argument contains M are scaled by the
/// eccentricity factor E per power of M.
#[rustfmt::skip]
static MOON_LONGITUDE_TERMS: [(i8, i8, i8, i8, i64); 24] = [
    (0, 0, 1, 0,  6_288_774),
    (2, 0, -1, 0, 1_274_027),
    (2, 0, 0, 0,    658_314),
    (0, 0, 2, 0,    213_618),
    (0, 1, 0, 0,   -185_116),
    (0, 0, 0, 2,   -114_332),
    (2, 0, -2, 0,    58_793),
    (2, -1, -1, 0,   57_066),
    (2, 0, 1, 0,     53_322),
    (2, -1, 0, 0,    45_758),
    (0, 1, -1, 0,   -40_923),
    (1, 0, 0, 0,    -34_720),
    (0, 1, 1, 0,    -30_383),
    (2, 0, 0, -2,    15_327),
    (0, 0, 1, 2,    -12_528),
    (0, 0, 1, -2,    10_980),
    (4, 0, -1, 0,    10_675),
    (0, 0, 3, 0,     10_034),
    (4, 0, -2, 0,     8_548),
    (2, 1, -1, 0,    -7_888),
    (2, 1, 0, 0,     -6_766),
    (1, 0, -1, 0,    -5_163),
    (1, 1, 0, 0,      4_987),
    (2, -1, 1, 0,     4_036),
];

/// Moon's ecliptic longitude in degrees, [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // mean longitude, elongation, anomalies, argument of latitude
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    // eccentricity of Earth's orbit decreases slowly with time
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum = 0.0_f64;
    for &(nd, nm, nmp, nf, amp) in MOON_LONGITUDE_TERMS.iter() {
        let arg = (nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f).to_radians();
        let e_factor = match nm.abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += amp as f64 * e_factor * arg.sin();
    }

    (lp + sum / 1_000_000.0).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees (Meeus ch. 22).
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.439_291_1 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t
}

/// Ascendant longitude from local sidereal time, obliquity, and latitude,
/// all in degrees. Returns degrees in [0, 360).
///
/// lambda = atan2(cos theta, -(sin theta * cos eps + tan phi * sin eps))
pub fn ascendant_deg(lst_deg: f64, obliquity_deg: f64, lat_deg: f64) -> f64 {
    // tan(phi) diverges at the poles; the ascendant is undefined there
    let phi = lat_deg.clamp(-89.9, 89.9).to_radians();
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let asc = theta
        .cos()
        .atan2(-(theta.sin() * eps.cos() + phi.tan() * eps.sin()));
    // rem_euclid of a tiny negative can round up to exactly 360.0
    let deg = asc.to_degrees().rem_euclid(360.0);
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Sun, Moon, and ascendant longitudes for a UTC birth instant and
/// observer coordinates.
pub fn compute(utc: NaiveDateTime, lat: f64, lon: f64) -> EphemerisResult {
    let jd = datetime_to_jd(utc);
    let sun_long = sun_longitude_deg(jd);
    let moon_long = moon_longitude_deg(jd);
    let lst = local_sidereal_deg(gmst_deg(jd), lon);
    let asc_long = ascendant_deg(lst, mean_obliquity_deg(jd), lat);
    EphemerisResult {
        sun_long,
        moon_long,
        asc_long,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::julian::J2000_JD;
    use chrono::NaiveDate;

    #[test]
    fn sun_longitude_at_j2000() {
        // apparent solar longitude at J2000.0 is about 280.37 deg
        let lon = sun_longitude_deg(J2000_JD);
        assert!((lon - 280.37).abs() < 0.1, "sun = {lon}");
    }

    #[test]
    fn sun_longitude_meeus_example_25a() {
        // 1992 October 13.0 TD: apparent longitude 199.90895 deg
        let jd = 2_448_908.5;
        let lon = sun_longitude_deg(jd);
        assert!((lon - 199.909).abs() < 0.01, "sun = {lon}");
    }

    #[test]
    fn moon_longitude_meeus_example_47a() {
        // 1992 April 12.0 TD: lambda = 133.1626 deg (full series);
        // the truncated series lands within a few hundredths
        let jd = 2_448_724.5;
        let lon = moon_longitude_deg(jd);
        assert!((lon - 133.1626).abs() < 0.1, "moon = {lon}");
    }

    #[test]
    fn obliquity_near_j2000() {
        let eps = mean_obliquity_deg(J2000_JD);
        assert!((eps - 23.4393).abs() < 0.001);
    }

    #[test]
    fn ascendant_at_equator_when_aries_culminates() {
        // RAMC = 0 at the equator puts 0 Cancer on the horizon
        let asc = ascendant_deg(0.0, 23.4393, 0.0);
        assert!((asc - 90.0).abs() < 1e-6, "asc = {asc}");
    }

    #[test]
    fn ascendant_at_equator_quadrants() {
        let eps = 23.4393;
        assert!((ascendant_deg(90.0, eps, 0.0) - 180.0).abs() < 1e-6);
        assert!((ascendant_deg(270.0, eps, 0.0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn ascendant_always_in_range() {
        for lst in [0.0, 45.0, 123.4, 200.0, 359.9] {
            for lat in [-66.0, -23.5, 0.0, 40.7, 66.5, 89.99] {
                let asc = ascendant_deg(lst, 23.44, lat);
                assert!((0.0..360.0).contains(&asc), "asc {asc} at {lst}/{lat}");
            }
        }
    }

    #[test]
    fn compute_returns_normalized_longitudes() {
        let utc = NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        let result = compute(utc, 40.7128, -74.0060);
        for lon in [result.sun_long, result.moon_long, result.asc_long] {
            assert!((0.0..360.0).contains(&lon));
        }
        // the Sun sits in Capricorn in early January
        assert!(result.sun_long > 270.0 && result.sun_long < 300.0);
    }
}
