pub mod adapters;
pub mod calc;
pub mod config;
pub mod core;
pub mod domain;
pub mod narrative;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::file_config::FileConfig;

pub use adapters::{GeoNamesTimezones, NominatimGeocoder};
pub use crate::core::{engine::BlueprintEngine, pipeline::FactPipeline};
pub use domain::model::{BirthInput, FactRecord};
pub use domain::ports::{ConfigProvider, FactsPipeline, Geocoder, TimezoneProvider};
pub use utils::error::{BlueprintError, Result};
