//! src/configuration.rs
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub aggregation: AggregationSettings,
    pub io: IoSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct AggregationSettings {
    pub mode: AggregationMode,
}

/// Which reduce implementation the driver runs by default.
#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Streaming fold; requires the input grouped by key.
    Sorted,
    /// In-memory per-key totals; no ordering requirement.
    Grouped,
}

#[derive(serde::Deserialize, Clone)]
pub struct IoSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub write_buffer_bytes: usize,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory.");
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("pipeline.yaml")))
        .add_source(
            config::Environment::with_prefix("WORDFREQ")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
