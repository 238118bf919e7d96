//! Error types for tripledger

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Store-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    IoError(String),

    #[error("Store data corrupted: {0}")]
    Corrupted(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("CSV import error: {0}")]
    CsvImport(String),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Trip is not active: {0}")]
    TripNotActive(String),

    #[error("Invalid slip: {0}")]
    InvalidSlip(String),

    #[error("Invalid trip field: {0}")]
    InvalidTrip(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
