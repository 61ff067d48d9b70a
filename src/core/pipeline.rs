use crate::calc::{chinese, design, ephemeris, numerology, zodiac};
use crate::domain::model::{
    BirthFacts, BirthInput, ChineseFacts, DesignFacts, FactRecord, NumerologyFacts, RawLongitudes,
    WesternFacts,
};
use crate::domain::ports::{FactsPipeline, Geocoder, TimezoneProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDateTime};

/// The fact-computation pipeline: location resolution, time
/// normalization, then the four independent symbolic calculators,
/// assembled into one canonical record. Stateless across requests.
pub struct FactPipeline<G: Geocoder, T: TimezoneProvider> {
    geocoder: G,
    timezones: T,
    strict_timezone: bool,
}

impl<G: Geocoder, T: TimezoneProvider> FactPipeline<G, T> {
    pub fn new(geocoder: G, timezones: T, strict_timezone: bool) -> Self {
        Self {
            geocoder,
            timezones,
            strict_timezone,
        }
    }

    /// Resolve the UTC offset, honoring strictness. In lenient mode a
    /// failed lookup degrades to treating local time as UTC; the
    /// degradation is logged, never silent.
    async fn resolve_offset(&self, lat: f64, lon: f64, input: &BirthInput) -> Result<i64> {
        match self.timezones.utc_offset_seconds(lat, lon, input.date).await {
            Ok(offset) => Ok(offset),
            Err(e) if !self.strict_timezone => {
                tracing::warn!(
                    "Timezone lookup failed ({}); degrading to local time as UTC",
                    e
                );
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    fn western_facts(utc: NaiveDateTime, lat: f64, lon: f64) -> WesternFacts {
        let eph = ephemeris::compute(utc, lat, lon);
        let (sun_sign, sun_deg) = zodiac::sign_from_longitude(eph.sun_long);
        let (moon_sign, moon_deg) = zodiac::sign_from_longitude(eph.moon_long);
        let (asc_sign, asc_deg) = zodiac::sign_from_longitude(eph.asc_long);
        WesternFacts {
            sun_sign: sun_sign.name().to_string(),
            sun_deg: zodiac::round_deg(sun_deg),
            moon_sign: moon_sign.name().to_string(),
            moon_deg: zodiac::round_deg(moon_deg),
            ascendant_sign: asc_sign.name().to_string(),
            asc_deg: zodiac::round_deg(asc_deg),
            raw: RawLongitudes {
                sun_long: eph.sun_long,
                moon_long: eph.moon_long,
                asc_long: eph.asc_long,
            },
        }
    }

    fn design_facts(utc: NaiveDateTime, lat: f64, lon: f64) -> DesignFacts {
        // a failed chart falls back to the documented default so one
        // symbolic system cannot block the whole record
        let chart = match design::compute(utc, lat, lon) {
            Ok(chart) => chart,
            Err(e) => {
                tracing::warn!("Design chart failed ({}); using fallback sub-record", e);
                design::DesignChartResult::fallback()
            }
        };
        DesignFacts {
            chart_type: chart.chart_type.name().to_string(),
            strategy: chart.strategy.to_string(),
            authority: chart.authority.to_string(),
            profile: chart.profile,
            incarnation_cross: chart.incarnation_cross,
            definition: chart.definition.to_string(),
            channels: chart.channels,
            gates: chart.gates,
        }
    }
}

#[async_trait]
impl<G: Geocoder, T: TimezoneProvider> FactsPipeline for FactPipeline<G, T> {
    async fn compute_facts(&self, input: &BirthInput) -> Result<FactRecord> {
        // 1. geocode; no coordinates, no record
        let location = self.geocoder.resolve(&input.city, &input.country).await?;
        tracing::debug!(
            "Resolved '{}' to ({}, {})",
            location.display_name,
            location.lat,
            location.lon
        );

        // 2. normalize local civil time to UTC
        let offset = self
            .resolve_offset(location.lat, location.lon, input)
            .await?;
        let local = input.date.and_time(input.time);
        let utc = local - Duration::seconds(offset);
        tracing::debug!("Local {} with offset {}s -> UTC {}", local, offset, utc);

        // 3. the four symbolic calculators, independent given (utc, lat, lon)
        let western = Self::western_facts(utc, location.lat, location.lon);
        let numerology = numerology::compute(input.date, &input.full_name);
        let chinese = chinese::compute(input.date.year());
        let human_design = Self::design_facts(utc, location.lat, location.lon);

        // 4. assemble the canonical record
        Ok(FactRecord {
            name: input.full_name.clone(),
            birth: BirthFacts {
                local: local.format("%Y-%m-%dT%H:%M:%S").to_string(),
                utc: utc.format("%Y-%m-%dT%H:%M:%S").to_string(),
                lat: location.lat,
                lon: location.lon,
                location: location.display_name,
            },
            western,
            chinese: ChineseFacts {
                animal: chinese.animal.to_string(),
                element: chinese.element.to_string(),
                yin_yang: chinese.yin_yang.to_string(),
            },
            numerology: NumerologyFacts {
                life_path: numerology.life_path,
                life_path_keyword: numerology.life_path_keyword,
                expression: numerology.expression,
                expression_keyword: numerology.expression_keyword,
                soul_urge: numerology.soul_urge,
                soul_urge_keyword: numerology.soul_urge_keyword,
                personality: numerology.personality,
                personality_keyword: numerology.personality_keyword,
            },
            human_design,
            mbti: input.mbti.clone(),
        })
    }
}
