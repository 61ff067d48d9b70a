//! Concrete lookup adapters: Nominatim geocoding and GeoNames timezone.
//! Both issue one timeout-bounded HTTP call per invocation and surface
//! non-2xx responses and empty results as resolution errors.

use crate::domain::model::ResolvedLocation;
use crate::domain::ports::{Geocoder, TimezoneProvider};
use crate::utils::error::{BlueprintError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("blueprint-facts/", env!("CARGO_PKG_VERSION"));

fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

// --- Geocoding ----------------------------------------------------------

/// Nominatim returns coordinates as JSON strings.
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
    display_name: String,
}

pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.into(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, city: &str, country: &str) -> Result<ResolvedLocation> {
        tracing::debug!("Geocoding '{}', '{}'", city, country);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("city", city),
                ("country", country),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BlueprintError::resolution(
                "geocoding",
                format!("service returned status {}", response.status()),
            ));
        }

        let hits: Vec<GeocodeHit> = response.json().await?;
        let hit = hits.into_iter().next().ok_or_else(|| {
            BlueprintError::resolution(
                "geocoding",
                format!("no match for '{}', '{}'", city, country),
            )
        })?;

        let lat: f64 = hit.lat.parse().map_err(|_| {
            BlueprintError::resolution("geocoding", format!("unparseable latitude '{}'", hit.lat))
        })?;
        let lon: f64 = hit.lon.parse().map_err(|_| {
            BlueprintError::resolution("geocoding", format!("unparseable longitude '{}'", hit.lon))
        })?;

        ResolvedLocation::new(lat, lon, hit.display_name)
    }
}

// --- Timezone offset ----------------------------------------------------

#[derive(Debug, Deserialize)]
struct TimezoneReply {
    /// Offset in hours, possibly fractional (e.g. 5.5 for IST).
    #[serde(rename = "gmtOffset")]
    gmt_offset: Option<f64>,
}

pub struct GeoNamesTimezones {
    client: Client,
    endpoint: String,
    username: String,
}

impl GeoNamesTimezones {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.into(),
            username: username.into(),
        })
    }
}

impl TimezoneProvider for GeoNamesTimezones {
    async fn utc_offset_seconds(&self, lat: f64, lon: f64, date: NaiveDate) -> Result<i64> {
        let date_str = date.format("%Y-%m-%d").to_string();
        tracing::debug!("Timezone lookup at ({}, {}) for {}", lat, lon, date_str);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lon.to_string()),
                ("date", date_str),
                ("username", self.username.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BlueprintError::resolution(
                "timezone",
                format!("service returned status {}", response.status()),
            ));
        }

        let reply: TimezoneReply = response.json().await?;
        let hours = reply.gmt_offset.ok_or_else(|| {
            BlueprintError::resolution("timezone", "response carried no gmtOffset")
        })?;

        Ok((hours * 3600.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn geocoder_parses_first_hit() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("city", "New York")
                .query_param("format", "json")
                .query_param("limit", "1");
            then.status(200).json_body(serde_json::json!([
                {"lat": "40.7128", "lon": "-74.0060", "display_name": "New York, USA"},
                {"lat": "0", "lon": "0", "display_name": "other"}
            ]));
        });

        let geocoder =
            NominatimGeocoder::new(server.url("/search"), Duration::from_secs(5)).unwrap();
        let loc = geocoder.resolve("New York", "United States").await.unwrap();

        mock.assert();
        assert!((loc.lat - 40.7128).abs() < 1e-9);
        assert!((loc.lon - -74.0060).abs() < 1e-9);
        assert_eq!(loc.display_name, "New York, USA");
    }

    #[tokio::test]
    async fn geocoder_zero_matches_is_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([]));
        });

        let geocoder =
            NominatimGeocoder::new(server.url("/search"), Duration::from_secs(5)).unwrap();
        let err = geocoder.resolve("Atlantis", "Nowhere").await.unwrap_err();
        assert_eq!(err.kind(), "resolution");
    }

    #[tokio::test]
    async fn geocoder_non_2xx_is_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        });

        let geocoder =
            NominatimGeocoder::new(server.url("/search"), Duration::from_secs(5)).unwrap();
        let err = geocoder.resolve("Paris", "France").await.unwrap_err();
        assert_eq!(err.kind(), "resolution");
    }

    #[tokio::test]
    async fn timezone_offset_converts_hours_to_seconds() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/timezoneJSON")
                .query_param("username", "demo")
                .query_param("date", "1990-01-01");
            then.status(200)
                .json_body(serde_json::json!({"gmtOffset": -5.0}));
        });

        let tz = GeoNamesTimezones::new(server.url("/timezoneJSON"), "demo", Duration::from_secs(5))
            .unwrap();
        let offset = tz
            .utc_offset_seconds(40.7, -74.0, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
            .await
            .unwrap();

        mock.assert();
        assert_eq!(offset, -18_000);
    }

    #[tokio::test]
    async fn timezone_fractional_offsets() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/timezoneJSON");
            then.status(200)
                .json_body(serde_json::json!({"gmtOffset": 5.5}));
        });

        let tz = GeoNamesTimezones::new(server.url("/timezoneJSON"), "demo", Duration::from_secs(5))
            .unwrap();
        let offset = tz
            .utc_offset_seconds(19.0, 72.8, NaiveDate::from_ymd_opt(2001, 6, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(offset, 19_800);
    }

    #[tokio::test]
    async fn timezone_missing_offset_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/timezoneJSON");
            then.status(200)
                .json_body(serde_json::json!({"status": {"message": "user limit"}}));
        });

        let tz = GeoNamesTimezones::new(server.url("/timezoneJSON"), "demo", Duration::from_secs(5))
            .unwrap();
        let err = tz
            .utc_offset_seconds(0.0, 0.0, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "resolution");
    }
}
