//! Error types for the Sandcraft GUI.

use std::io;

/// Errors produced by the Sandcraft GUI layer.
#[derive(Debug, thiserror::Error)]
pub enum SandcraftError {
    #[error("image {width}x{height} is too small for a border of {border}px")]
    ImageTooSmall { width: u32, height: u32, border: u32 },

    #[error("invalid border: {0}")]
    InvalidBorder(String),

    #[error(
        "region {x},{y} {width}x{height} lies outside its {parent_width}x{parent_height} parent"
    )]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        parent_width: u32,
        parent_height: u32,
    },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SandcraftError>;
