use crate::utils::error::{BlueprintError, Result};
use crate::utils::validation::{validate_mbti, validate_non_empty};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Validated user-supplied birth data. Constructed through [`BirthInput::parse`]
/// so downstream code never sees a malformed date or time.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub full_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub city: String,
    pub country: String,
    pub mbti: String,
}

impl BirthInput {
    /// Parse and validate raw request fields. `birth_time` may be empty,
    /// which defaults to local midnight. `mbti` may be empty.
    pub fn parse(
        full_name: &str,
        birth_date: &str,
        birth_time: &str,
        city: &str,
        country: &str,
        mbti: &str,
    ) -> Result<Self> {
        validate_non_empty("full_name", full_name)?;
        validate_non_empty("birth_city", city)?;
        // country may be empty; geocoding can work from the city alone
        validate_mbti(mbti)?;

        let date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").map_err(|e| {
            BlueprintError::input(format!("birth_date '{}' is not YYYY-MM-DD: {}", birth_date, e))
        })?;

        let time = if birth_time.is_empty() {
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        } else {
            NaiveTime::parse_from_str(birth_time, "%H:%M").map_err(|e| {
                BlueprintError::input(format!(
                    "birth_time '{}' is not HH:MM (24-hour): {}",
                    birth_time, e
                ))
            })?
        };

        Ok(Self {
            full_name: full_name.trim().to_string(),
            date,
            time,
            city: city.trim().to_string(),
            country: country.trim().to_string(),
            mbti: mbti.to_uppercase(),
        })
    }

    /// Split a free-text `"City, Country"` (or `"City/Country"`) location
    /// into its two parts. A bare city gets an empty country.
    pub fn split_location(location: &str) -> (String, String) {
        let sep = if location.contains(',') { ',' } else { '/' };
        match location.split_once(sep) {
            Some((city, country)) => (city.trim().to_string(), country.trim().to_string()),
            None => (location.trim().to_string(), String::new()),
        }
    }
}

/// Geocoded birth place. Held for the duration of one request only.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

impl ResolvedLocation {
    pub fn new(lat: f64, lon: f64, display_name: String) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(BlueprintError::resolution(
                "geocoding",
                format!("latitude {} out of range [-90, 90]", lat),
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(BlueprintError::resolution(
                "geocoding",
                format!("longitude {} out of range [-180, 180]", lon),
            ));
        }
        Ok(Self {
            lat,
            lon,
            display_name,
        })
    }
}

// --- The canonical FactRecord and its sub-records -----------------------
//
// Field names below are the stable wire contract consumed by the
// narrative stage; do not rename them.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthFacts {
    pub local: String,
    pub utc: String,
    pub lat: f64,
    pub lon: f64,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLongitudes {
    pub sun_long: f64,
    pub moon_long: f64,
    pub asc_long: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WesternFacts {
    pub sun_sign: String,
    pub sun_deg: f64,
    pub moon_sign: String,
    pub moon_deg: f64,
    pub ascendant_sign: String,
    pub asc_deg: f64,
    pub raw: RawLongitudes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChineseFacts {
    pub animal: String,
    pub element: String,
    pub yin_yang: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumerologyFacts {
    pub life_path: u32,
    pub life_path_keyword: String,
    pub expression: u32,
    pub expression_keyword: String,
    pub soul_urge: u32,
    pub soul_urge_keyword: String,
    pub personality: u32,
    pub personality_keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFacts {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub strategy: String,
    pub authority: String,
    pub profile: String,
    pub incarnation_cross: String,
    pub definition: String,
    pub channels: Vec<String>,
    pub gates: Vec<String>,
}

/// The pipeline's sole output: pure data, safe to serialize verbatim and
/// hand to the narrative stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
    pub name: String,
    pub birth: BirthFacts,
    pub western: WesternFacts,
    pub chinese: ChineseFacts,
    pub numerology: NumerologyFacts,
    pub human_design: DesignFacts,
    pub mbti: String,
}
