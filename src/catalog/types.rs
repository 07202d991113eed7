//! Catalog item types and raw-record normalization
//!
//! Raw records arrive from the external catalog service with loosely typed,
//! frequently missing fields. Normalization happens here at the ingestion
//! boundary: malformed fields degrade to defaults, records without an
//! identity are dropped, and nothing deeper in the engine sees raw shapes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::figure::{palette, Gender, PartSlot};

/// Rarity classification controlling default display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RarityTier {
    /// Free items everyone can wear; always listed first
    Common,
    /// Requires an active subscription
    SubscriberOnly,
    /// Sold for credits
    Purchasable,
    /// Limited-run collectibles
    Limited,
}

impl RarityTier {
    /// Tiers in presentation order, common-first
    pub const ALL: [RarityTier; 4] = [
        RarityTier::Common,
        RarityTier::SubscriberOnly,
        RarityTier::Purchasable,
        RarityTier::Limited,
    ];

    /// Map a raw rarity tag to a tier; unknown tags degrade to `Common`
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "hc" | "club" | "subscriber" => RarityTier::SubscriberOnly,
            "sellable" | "purchasable" | "credits" => RarityTier::Purchasable,
            "rare" | "limited" => RarityTier::Limited,
            _ => RarityTier::Common,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RarityTier::Common => "Basic",
            RarityTier::SubscriberOnly => "Club",
            RarityTier::Purchasable => "Shop",
            RarityTier::Limited => "Rare",
        }
    }
}

/// A selectable item within a part slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub display_name: String,
    pub part_slot: PartSlot,
    pub rarity: RarityTier,
    pub gender: Gender,
    pub default_color_index: u16,
    /// Pre-mapped local thumbnail, consulted before any network source
    pub local_asset: Option<String>,
}

/// Raw per-category record as delivered by the catalog boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCatalogRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub part_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub color: Option<u16>,
    #[serde(default)]
    pub asset: Option<String>,
}

impl RawCatalogRecord {
    /// Normalize into a [`CatalogItem`].
    ///
    /// Records without an id or a recognizable slot code cannot name an
    /// item and are dropped; every other missing field gets a default.
    pub fn normalize(self) -> Option<CatalogItem> {
        let id = match self.id {
            Some(id) => id,
            None => {
                debug!("📦 Dropping catalog record without id: {:?}", self.name);
                return None;
            }
        };
        let part_slot = match self.part_type.as_deref().and_then(PartSlot::from_code) {
            Some(slot) => slot,
            None => {
                debug!("📦 Dropping catalog record {} with unknown type {:?}", id, self.part_type);
                return None;
            }
        };

        let rarity = self
            .rarity
            .as_deref()
            .map(RarityTier::from_raw)
            .unwrap_or(RarityTier::Common);
        let gender = self
            .gender
            .as_deref()
            .and_then(Gender::from_code)
            .unwrap_or(Gender::Unisex);
        let default_color_index = self
            .color
            .filter(|c| palette::is_valid_color(part_slot, *c))
            .unwrap_or_else(|| palette::default_color(part_slot));
        let display_name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Item {}", id));

        Some(CatalogItem {
            id,
            display_name,
            part_slot,
            rarity,
            gender,
            default_color_index,
            local_asset: self.asset,
        })
    }
}
