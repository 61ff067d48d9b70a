//! Chinese zodiac: animal, element, and polarity cycles.
//!
//! Pure modular arithmetic anchored so that years congruent to 4 mod 12
//! map to Rat (1984 is a Wood Rat year). Elements run on a 10-year
//! cycle with each element spanning two consecutive years. Total
//! function, no failure mode.

#[derive(Debug, Clone, PartialEq)]
pub struct ChineseZodiacResult {
    pub animal: &'static str,
    pub element: &'static str,
    pub yin_yang: &'static str,
}

const ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

const ELEMENTS: [&str; 10] = [
    "Wood", "Wood", "Fire", "Fire", "Earth", "Earth", "Metal", "Metal", "Water", "Water",
];

pub fn compute(year: i32) -> ChineseZodiacResult {
    let anchored = (year - 4).rem_euclid(60);
    ChineseZodiacResult {
        animal: ANIMALS[(anchored % 12) as usize],
        element: ELEMENTS[(anchored % 10) as usize],
        yin_yang: if year % 2 == 0 { "Yang" } else { "Yin" },
    }
}
