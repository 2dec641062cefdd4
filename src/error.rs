use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// SDL2 reports its failures as plain strings.
    #[error("window error: {0}")]
    Window(String),
    #[error("pixel buffer holds {len} pixels, expected {width}x{height}")]
    FrameSize { len: usize, width: u32, height: u32 },
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to write step trace: {0}")]
    Trace(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
