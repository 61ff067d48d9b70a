//! Numerology: life path and name-derived numbers.
//!
//! Life path uses master-number-aware digit-sum reduction applied to the
//! day, the month, and the digit-sum of the year independently, then to
//! the total. The name numbers (expression, soul urge, personality) use
//! plain mod-9 reduction with 0 mapped to 9 and no master exception.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct NumerologyResult {
    pub life_path: u32,
    pub life_path_keyword: String,
    pub expression: u32,
    pub expression_keyword: String,
    pub soul_urge: u32,
    pub soul_urge_keyword: String,
    pub personality: u32,
    pub personality_keyword: String,
}

const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit-summing until a single digit, stopping early at a
/// master number. Idempotent on its own results.
pub fn reduce_component(mut n: u32) -> u32 {
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

/// Life-path number in {1..9, 11, 22, 33}.
pub fn life_path(date: NaiveDate) -> u32 {
    let day = reduce_component(date.day());
    let month = reduce_component(date.month());
    let year = reduce_component(digit_sum(date.year().unsigned_abs()));
    reduce_component(day + month + year)
}

fn letter_value(c: char) -> u32 {
    (c as u8 - b'a' + 1) as u32
}

fn mod_nine(sum: u32) -> u32 {
    match sum % 9 {
        0 => 9,
        n => n,
    }
}

fn name_sum<F: Fn(char) -> bool>(name: &str, keep: F) -> u32 {
    name.chars()
        .filter_map(|c| {
            let lower = c.to_ascii_lowercase();
            (lower.is_ascii_lowercase() && keep(lower)).then(|| letter_value(lower))
        })
        .sum()
}

/// Expression number: all letters, a=1..z=26, reduced mod 9.
pub fn expression(name: &str) -> u32 {
    mod_nine(name_sum(name, |_| true))
}

/// Soul-urge number: vowels only.
pub fn soul_urge(name: &str) -> u32 {
    mod_nine(name_sum(name, |c| VOWELS.contains(&c)))
}

/// Personality number: consonants only.
pub fn personality(name: &str) -> u32 {
    mod_nine(name_sum(name, |c| !VOWELS.contains(&c)))
}

/// Fixed keyword for a numerology number, shared by all four numbers;
/// out-of-table values fall back to a generic keyword rather than
/// erroring.
pub fn keyword_for(n: u32) -> &'static str {
    match n {
        1 => "Independent Leader",
        2 => "Diplomat",
        3 => "Creative Communicator",
        4 => "Builder",
        5 => "Freedom Seeker",
        6 => "Nurturer",
        7 => "Seeker of Truth",
        8 => "Powerhouse",
        9 => "Humanitarian",
        11 => "Intuitive Visionary",
        22 => "Master Builder",
        33 => "Master Teacher",
        _ => "Seeker",
    }
}

pub fn compute(date: NaiveDate, full_name: &str) -> NumerologyResult {
    let life_path = life_path(date);
    let expression = expression(full_name);
    let soul_urge = soul_urge(full_name);
    let personality = personality(full_name);
    NumerologyResult {
        life_path,
        life_path_keyword: keyword_for(life_path).to_string(),
        expression,
        expression_keyword: keyword_for(expression).to_string(),
        soul_urge,
        soul_urge_keyword: keyword_for(soul_urge).to_string(),
        personality,
        personality_keyword: keyword_for(personality).to_string(),
    }
}
