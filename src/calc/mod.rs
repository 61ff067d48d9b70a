pub mod chinese;
pub mod design;
pub mod ephemeris;
pub mod gates;
pub mod julian;
pub mod numerology;
pub mod zodiac;
