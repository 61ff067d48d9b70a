pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{BirthInput, FactRecord, ResolvedLocation};
pub use crate::domain::ports::{ConfigProvider, FactsPipeline, Geocoder, TimezoneProvider};
pub use crate::utils::error::Result;
