//! Clothing catalog ingestion and indexing
//!
//! Normalizes raw per-category item records from the external catalog API
//! (or the builtin static table), partitions them per part slot by rarity
//! tier and gender compatibility, and guarantees that no slot is ever
//! presented empty.

pub mod index;
pub mod ingest;
pub mod types;

pub use index::CatalogIndex;
pub use ingest::{build_builtin_catalog, build_catalog, builtin_items, fetch_catalog};
pub use types::{CatalogItem, RarityTier, RawCatalogRecord};

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Catalog fetch failed: {reason}")]
    Fetch { reason: String },

    #[error("Catalog response rejected: HTTP {status}")]
    Status { status: u16 },

    #[error("Catalog parse failed: {reason}")]
    Parse { reason: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Fetch { reason: err.to_string() }
    }
}
