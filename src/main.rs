use anyhow::Context;
use blueprint_facts::utils::{logger, validation::Validate};
use blueprint_facts::{
    narrative, BirthInput, BlueprintEngine, CliConfig, ConfigProvider, FactPipeline, FileConfig,
    GeoNamesTimezones, NominatimGeocoder,
};
use clap::Parser;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting blueprint-facts");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // lookup settings come from the TOML file when given, CLI flags otherwise
    let lookups: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let file = FileConfig::load(path)
                .with_context(|| format!("failed to load config file {}", path))?;
            Box::new(file)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(e.exit_code());
            }
            Box::new(cli.clone())
        }
    };

    let (city, country) = BirthInput::split_location(&cli.birth_location);
    let input = match BirthInput::parse(
        &cli.full_name,
        &cli.birth_date,
        &cli.birth_time,
        &city,
        &country,
        &cli.mbti,
    ) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!("Invalid input ({}): {}", e.kind(), e);
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let timeout = Duration::from_secs(lookups.timeout_seconds());
    let geocoder = NominatimGeocoder::new(lookups.geocoder_endpoint(), timeout)?;
    let timezones = GeoNamesTimezones::new(
        lookups.timezone_endpoint(),
        lookups.geonames_username(),
        timeout,
    )?;
    let pipeline = FactPipeline::new(geocoder, timezones, lookups.strict_timezone());
    let engine = BlueprintEngine::new(pipeline);

    match engine.run(&input).await {
        Ok(record) => {
            let json = if cli.narrative_payload {
                serde_json::to_string_pretty(&narrative::narrative_payload(&record)?)?
            } else {
                serde_json::to_string_pretty(&record)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Fact computation failed ({}): {}", e.kind(), e);
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
