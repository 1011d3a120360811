use thiserror::Error;

mod app_config;
mod config;
pub mod features;
pub mod geo;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use features::{FeatureRecord, ASSUMED_PARCEL_AREA_M2, DEFAULT_ROAD_DISTANCE_M};
pub use geo::Coordinate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
