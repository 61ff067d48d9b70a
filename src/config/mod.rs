pub mod file_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

pub const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_TIMEZONE_ENDPOINT: &str = "http://api.geonames.org/timezoneJSON";

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "blueprint-facts")]
#[command(about = "Compute a deterministic personal-facts record from birth data")]
pub struct CliConfig {
    /// Full name as given at birth
    pub full_name: String,

    /// Birth date, YYYY-MM-DD
    pub birth_date: String,

    /// Birth place as free text, "City, Country" or "City/Country"
    pub birth_location: String,

    /// Birth time, HH:MM 24-hour; midnight when omitted
    #[arg(long, default_value = "")]
    pub birth_time: String,

    /// Optional 4-letter MBTI code
    #[arg(long, default_value = "")]
    pub mbti: String,

    #[arg(long, default_value = DEFAULT_GEOCODER_ENDPOINT)]
    pub geocoder_endpoint: String,

    #[arg(long, default_value = DEFAULT_TIMEZONE_ENDPOINT)]
    pub timezone_endpoint: String,

    /// GeoNames account name for the timezone lookup
    #[arg(long, default_value = "demo")]
    pub geonames_username: String,

    /// Timeout for each outbound lookup, seconds
    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    /// Fail the request when the timezone lookup fails, instead of
    /// degrading to local-time-as-UTC
    #[arg(long)]
    pub strict_timezone: bool,

    /// Load endpoints and strictness from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    /// Emit the narrative-stage payload instead of the bare record
    #[arg(long)]
    pub narrative_payload: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn geocoder_endpoint(&self) -> &str {
        &self.geocoder_endpoint
    }

    fn timezone_endpoint(&self) -> &str {
        &self.timezone_endpoint
    }

    fn geonames_username(&self) -> &str {
        &self.geonames_username
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn strict_timezone(&self) -> bool {
        self.strict_timezone
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("geocoder_endpoint", &self.geocoder_endpoint)?;
        validate_url("timezone_endpoint", &self.timezone_endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
