//! Error types for rendering and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single render call. Nothing written to the sink should be
/// treated as a valid image when this is returned.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    FontAsset(#[from] FontAssetError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The font asset could not be loaded.
#[derive(Error, Debug)]
pub enum FontAssetError {
    /// The font file is missing or unreadable.
    #[error("failed to read font asset '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not a font `ab_glyph` can parse.
    #[error("malformed font asset '{}'", .path.display())]
    Malformed { path: PathBuf },
}

/// PNG serialization or the final flush failed.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),

    #[error("failed to flush image output: {0}")]
    Flush(#[from] io::Error),
}

/// A configuration file could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A request file could not be loaded.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("failed to read request '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid request '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
