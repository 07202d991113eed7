//! Rendering-boundary requests and thumbnail source resolution
//!
//! Builds avatar-imaging request URLs from figure state and resolves, for
//! each catalog item, which of several heterogeneous image sources to
//! display: a pre-mapped local asset, a remote-imaging reconstruction of
//! the single item, or the static placeholder glyph.

pub mod presets;
pub mod request;
pub mod resolver;
pub mod sources;

pub use presets::{preset_for, ThumbPreset};
pub use request::RenderRequest;
pub use resolver::{AssetResolver, HttpProbe, ResolverStats, SourceProbe, ThumbnailBoard};
pub use sources::{ImageSource, SourceChain, PLACEHOLDER_ASSET};

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ImagingError {
    #[error("Invalid imaging endpoint: {reason}")]
    InvalidUrl { reason: String },

    #[error("Imaging request failed: {reason}")]
    Http { reason: String },

    #[error("Imaging probe timed out")]
    Timeout,
}

pub type ImagingResult<T> = Result<T, ImagingError>;

impl From<reqwest::Error> for ImagingError {
    fn from(err: reqwest::Error) -> Self {
        ImagingError::Http { reason: err.to_string() }
    }
}
