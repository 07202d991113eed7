//! Thumbnail image sources and the ordered fallback chain
//!
//! Every catalog item resolves to an ordered list of candidate image
//! sources. The chain is traversed strictly forward on failure and its last
//! element is always the placeholder glyph, so resolution never terminates
//! without a usable result.

use url::Url;

use crate::catalog::RarityTier;
use crate::figure::PartSlot;

/// The static glyph shown when every other source has failed
pub const PLACEHOLDER_ASSET: &str = "assets/placeholder_item.png";

/// One candidate image source for a catalog thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Pre-mapped asset bundled with the site
    Literal { path: String },
    /// Remote-imaging reconstruction of the single item
    RemoteImaging { url: Url },
    /// Terminal fallback, always available
    Placeholder,
}

impl ImageSource {
    /// Short tag for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::Literal { .. } => "literal",
            ImageSource::RemoteImaging { .. } => "imaging",
            ImageSource::Placeholder => "placeholder",
        }
    }
}

/// Ordered fallback chain with a forward-only cursor
#[derive(Debug, Clone)]
pub struct SourceChain {
    sources: Vec<ImageSource>,
    cursor: usize,
}

impl SourceChain {
    /// Build a chain; a terminating placeholder is appended if absent
    pub fn new(mut sources: Vec<ImageSource>) -> Self {
        if sources.last() != Some(&ImageSource::Placeholder) {
            sources.push(ImageSource::Placeholder);
        }
        Self { sources, cursor: 0 }
    }

    pub fn current(&self) -> &ImageSource {
        &self.sources[self.cursor]
    }

    /// Move past the current (failed) source.
    ///
    /// Traversal is forward-only; once the placeholder is reached the chain
    /// is exhausted and stays there.
    pub fn advance(&mut self) -> &ImageSource {
        if self.cursor + 1 < self.sources.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Whether the cursor sits on the terminal placeholder
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.sources.len() - 1
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        false // a chain always carries at least the placeholder
    }

    pub fn sources(&self) -> &[ImageSource] {
        &self.sources
    }
}

/// Static table of pre-mapped thumbnails per slot and rarity.
///
/// Consulted before any network path; items may also declare their own
/// literal asset, which takes precedence over this table.
pub fn local_asset_for(slot: PartSlot, rarity: RarityTier) -> Option<&'static str> {
    match (slot, rarity) {
        (PartSlot::Hat, RarityTier::Limited) => Some("assets/rare/hat_generic.png"),
        (PartSlot::FaceAccessory, RarityTier::Limited) => Some("assets/rare/mask_generic.png"),
        (PartSlot::EyeAccessory, RarityTier::Limited) => Some("assets/rare/glasses_generic.png"),
        (PartSlot::Jacket, RarityTier::Limited) => Some("assets/rare/jacket_generic.png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_always_ends_with_placeholder() {
        let chain = SourceChain::new(vec![ImageSource::Literal {
            path: "assets/rare/golden_crown.png".to_string(),
        }]);
        assert_eq!(chain.sources().last(), Some(&ImageSource::Placeholder));
        assert_eq!(chain.len(), 2);

        let empty = SourceChain::new(Vec::new());
        assert_eq!(empty.current(), &ImageSource::Placeholder);
        assert!(empty.is_exhausted());
    }

    #[test]
    fn test_advance_is_forward_only_and_terminal() {
        let mut chain = SourceChain::new(vec![
            ImageSource::Literal { path: "a.png".to_string() },
            ImageSource::RemoteImaging {
                url: Url::parse("https://imaging.example.net/avatarimage?figure=ha-1-61-").unwrap(),
            },
        ]);

        assert_eq!(chain.current().kind(), "literal");
        assert_eq!(chain.advance().kind(), "imaging");
        assert_eq!(chain.advance().kind(), "placeholder");
        assert!(chain.is_exhausted());

        // Advancing past the placeholder stays on the placeholder
        assert_eq!(chain.advance().kind(), "placeholder");
    }

    #[test]
    fn test_local_asset_table_covers_limited_hats() {
        assert!(local_asset_for(PartSlot::Hat, RarityTier::Limited).is_some());
        assert!(local_asset_for(PartSlot::Hat, RarityTier::Common).is_none());
        assert!(local_asset_for(PartSlot::Chest, RarityTier::Limited).is_none());
    }
}
