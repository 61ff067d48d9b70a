use crate::domain::model::{BirthInput, FactRecord, ResolvedLocation};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Resolves a free-text place to coordinates. One outbound call per
/// invocation; zero matches is a hard failure.
pub trait Geocoder: Send + Sync {
    fn resolve(
        &self,
        city: &str,
        country: &str,
    ) -> impl std::future::Future<Output = Result<ResolvedLocation>> + Send;
}

/// Looks up the UTC offset (in seconds) in effect at a given civil date
/// and location. Must be date-aware: DST and historical rules shift the
/// offset across dates.
pub trait TimezoneProvider: Send + Sync {
    fn utc_offset_seconds(
        &self,
        lat: f64,
        lon: f64,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn geocoder_endpoint(&self) -> &str;
    fn timezone_endpoint(&self) -> &str;
    fn geonames_username(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    /// When true, a failed timezone lookup fails the request instead of
    /// degrading to treating local time as UTC.
    fn strict_timezone(&self) -> bool;
}

/// The pipeline seam: one entry point from validated input to the
/// canonical record.
#[async_trait]
pub trait FactsPipeline: Send + Sync {
    async fn compute_facts(&self, input: &BirthInput) -> Result<FactRecord>;
}
