use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up the scene or its GPU resources.
///
/// Nothing in the per-frame path returns these; they all surface at startup.
#[derive(Debug, Error)]
pub enum PillarsError {
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read environment map {path}: {source}")]
    EnvMapIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode environment map: {0}")]
    EnvMapDecode(#[from] image::ImageError),

    #[error("GPU adapter not found")]
    AdapterNotFound,

    #[error("failed to request GPU device: {0}")]
    DeviceRequest(String),

    #[error("surface is not usable: {0}")]
    Surface(String),

    #[error("shader validation failed: {0}")]
    Shader(String),
}

pub type Result<T> = std::result::Result<T, PillarsError>;
