//! Julian day and sidereal time.
//!
//! Calendar-to-JD conversion and Greenwich Mean Sidereal Time, both from
//! Meeus, *Astronomical Algorithms* (2nd ed.), chapters 7 and 12. These
//! feed the ephemeris and ascendant calculations; the sub-second
//! UT1/UTC distinction is irrelevant at the precision needed here.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// JD of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day for a Gregorian calendar date with fractional day.
///
/// Meeus ch. 7, eq. 7.1. Valid for all Gregorian dates.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Julian Day for a UTC civil instant.
pub fn datetime_to_jd(utc: NaiveDateTime) -> f64 {
    let day_frac = utc.day() as f64
        + (utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0) / 24.0;
    calendar_to_jd(utc.year(), utc.month(), day_frac)
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// Meeus ch. 12, eq. 12.4.
pub fn gmst_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local sidereal time in degrees from GMST and east longitude.
pub fn local_sidereal_deg(gmst: f64, lon_east_deg: f64) -> f64 {
    (gmst + lon_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn jd_at_j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn jd_meeus_example_7b() {
        // 1987 June 19.5 -> JD 2446966.0
        assert!((calendar_to_jd(1987, 6, 19.5) - 2_446_966.0).abs() < 1e-9);
    }

    #[test]
    fn jd_from_datetime() {
        let dt = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!((datetime_to_jd(dt) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST = 6h 39m 51.17s = 99.9678 deg
        let gmst = gmst_deg(2_451_544.5);
        assert!((gmst - 99.9678).abs() < 0.001, "gmst = {gmst}");
    }

    #[test]
    fn gmst_in_range_over_a_year() {
        for i in 0..365 {
            let g = gmst_deg(2_451_544.5 + i as f64 + 0.31);
            assert!((0.0..360.0).contains(&g));
        }
    }

    #[test]
    fn local_sidereal_wraps() {
        assert!((local_sidereal_deg(350.0, 20.0) - 10.0).abs() < 1e-9);
        assert!((local_sidereal_deg(10.0, -20.0) - 350.0).abs() < 1e-9);
    }
}
