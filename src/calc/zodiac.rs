//! Tropical zodiac sign mapping.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees. Mapping is total: every longitude
//! in [0, 360) selects exactly one sign.

/// The 12 tropical zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

/// Sign and degrees-within-sign for an ecliptic longitude.
///
/// Returns `(sign, deg)` with `0 <= deg < 30`. Input outside [0, 360)
/// is normalized first.
pub fn sign_from_longitude(longitude_deg: f64) -> (Sign, f64) {
    let lon = longitude_deg.rem_euclid(360.0);
    let idx = ((lon / 30.0).floor() as usize) % 12;
    (ALL_SIGNS[idx], lon % 30.0)
}

/// Degrees-within-sign rounded to 2 decimals, for display.
pub fn round_deg(deg: f64) -> f64 {
    (deg * 100.0).round() / 100.0
}
