//! Thumbnail source resolution
//!
//! Walks each catalog item's fallback chain with bounded availability
//! probes, advancing strictly forward on failure until a usable source is
//! found; the placeholder is the defined terminal state. Completed loads
//! are applied through a generation-stamped board so results arriving after
//! their category context went stale are discarded.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};
use url::Url;

use crate::catalog::CatalogItem;

use super::request::RenderRequest;
use super::sources::{local_asset_for, ImageSource, SourceChain};
use super::{ImagingError, ImagingResult};

/// Resolution statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct ResolverStats {
    pub resolutions: u64,
    pub literal_hits: u64,
    pub imaging_hits: u64,
    pub placeholder_exhaustions: u64,
    pub probes_failed: u64,
}

impl ResolverStats {
    /// Share of resolutions that fell through every real source
    pub fn exhaustion_rate(&self) -> f64 {
        if self.resolutions == 0 {
            0.0
        } else {
            (self.placeholder_exhaustions as f64 / self.resolutions as f64) * 100.0
        }
    }
}

/// Availability check for one image source
#[async_trait]
pub trait SourceProbe: Send + Sync {
    /// Whether the source can currently be displayed. Probes must be
    /// bounded; a probe that cannot decide in time reports failure.
    async fn probe(&self, source: &ImageSource) -> bool;
}

/// Production probe: filesystem check for literal assets, bounded HTTP GET
/// for remote-imaging sources
pub struct HttpProbe {
    client: reqwest::Client,
    assets_root: PathBuf,
    probe_timeout: Duration,
}

impl HttpProbe {
    pub fn new(client: reqwest::Client, assets_root: PathBuf, probe_timeout: Duration) -> Self {
        Self { client, assets_root, probe_timeout }
    }

    async fn probe_remote(&self, url: &Url) -> ImagingResult<bool> {
        let response = timeout(self.probe_timeout, self.client.get(url.clone()).send())
            .await
            .map_err(|_| ImagingError::Timeout)??;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Ok(false);
        }

        // An empty body is a broken image, not a hit
        let body: bytes::Bytes = response.bytes().await?;
        Ok(!body.is_empty())
    }
}

#[async_trait]
impl SourceProbe for HttpProbe {
    async fn probe(&self, source: &ImageSource) -> bool {
        match source {
            ImageSource::Literal { path } => {
                tokio::fs::try_exists(self.assets_root.join(path))
                    .await
                    .unwrap_or(false)
            }
            ImageSource::RemoteImaging { url } => match self.probe_remote(url).await {
                Ok(available) => available,
                Err(e) => {
                    debug!("🖼️ Imaging probe failed for {}: {}", url, e);
                    false
                }
            },
            ImageSource::Placeholder => true,
        }
    }
}

/// Resolves the display source for catalog thumbnails
pub struct AssetResolver {
    imaging_base: Url,
    probe: Arc<dyn SourceProbe>,
    stats: Arc<RwLock<ResolverStats>>,
}

impl AssetResolver {
    /// Create a resolver with the production HTTP/filesystem probe
    pub fn new(
        imaging_base: &str,
        assets_root: PathBuf,
        client: reqwest::Client,
        probe_timeout: Duration,
    ) -> ImagingResult<Self> {
        let imaging_base = Url::parse(imaging_base)
            .map_err(|e| ImagingError::InvalidUrl { reason: e.to_string() })?;

        info!("🖼️ Asset resolver targeting {}", imaging_base);

        Ok(Self {
            probe: Arc::new(HttpProbe::new(client, assets_root, probe_timeout)),
            imaging_base,
            stats: Arc::new(RwLock::new(ResolverStats::default())),
        })
    }

    /// Create a resolver with a custom probe (used by tests)
    pub fn with_probe(imaging_base: Url, probe: Arc<dyn SourceProbe>) -> Self {
        Self {
            imaging_base,
            probe,
            stats: Arc::new(RwLock::new(ResolverStats::default())),
        }
    }

    /// Build the ordered candidate list for one item:
    /// literal asset (declared or table-mapped), then the remote-imaging
    /// single-item reconstruction, then the placeholder.
    pub fn resolve_sources(&self, item: &CatalogItem) -> SourceChain {
        let mut sources = Vec::with_capacity(3);

        let literal = item
            .local_asset
            .clone()
            .or_else(|| local_asset_for(item.part_slot, item.rarity).map(String::from));
        if let Some(path) = literal {
            sources.push(ImageSource::Literal { path });
        }

        let url = RenderRequest::thumbnail(item).to_url(&self.imaging_base);
        sources.push(ImageSource::RemoteImaging { url });

        SourceChain::new(sources)
    }

    /// Probe the chain front to back and return the first usable source.
    ///
    /// Failures only advance this item's own cursor; there is no
    /// backtracking and no retry of an earlier source.
    pub async fn resolve(&self, item: &CatalogItem) -> ImageSource {
        let mut chain = self.resolve_sources(item);

        loop {
            let source = chain.current().clone();
            if self.probe.probe(&source).await {
                let mut stats = self.stats.write().await;
                stats.resolutions += 1;
                match &source {
                    ImageSource::Literal { .. } => stats.literal_hits += 1,
                    ImageSource::RemoteImaging { .. } => stats.imaging_hits += 1,
                    ImageSource::Placeholder => {
                        stats.placeholder_exhaustions += 1;
                        warn!("🖼️ Item {} exhausted every image source", item.id);
                    }
                }
                debug!("🖼️ Item {} resolved via {} source", item.id, source.kind());
                return source;
            }

            {
                let mut stats = self.stats.write().await;
                stats.probes_failed += 1;
            }
            debug!("🖼️ Item {} {} source failed, advancing", item.id, source.kind());
            chain.advance();
        }
    }

    pub async fn stats(&self) -> ResolverStats {
        self.stats.read().await.clone()
    }
}

/// One applied thumbnail result
#[derive(Debug, Clone)]
pub struct ResolvedThumb {
    pub generation: u64,
    pub source: ImageSource,
}

/// Generation-stamped thumbnail results for the current category context.
///
/// Navigating to a new category or search context bumps the generation;
/// loads completing with an older stamp are discarded instead of applied.
/// Within a generation the per-item handle is last-write-wins.
#[derive(Debug, Default)]
pub struct ThumbnailBoard {
    generation: u64,
    entries: HashMap<u32, ResolvedThumb>,
}

impl ThumbnailBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter a new category/search context, invalidating in-flight loads
    pub fn begin_context(&mut self) -> u64 {
        self.generation += 1;
        self.entries.clear();
        debug!("🖼️ Thumbnail context advanced to generation {}", self.generation);
        self.generation
    }

    /// Apply a completed load. Returns false when the result was stale and
    /// discarded.
    pub fn complete(&mut self, item_id: u32, generation: u64, source: ImageSource) -> bool {
        if generation != self.generation {
            debug!(
                "🖼️ Discarding stale thumbnail for item {} (gen {} != {})",
                item_id, generation, self.generation
            );
            return false;
        }
        self.entries.insert(item_id, ResolvedThumb { generation, source });
        true
    }

    pub fn source_for(&self, item_id: u32) -> Option<&ImageSource> {
        self.entries.get(&item_id).map(|thumb| &thumb.source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
