//! Per-slot catalog index
//!
//! Partitions catalog items by part slot, then by rarity tier. Presentation
//! order is tier-then-insertion: tiers are always listed common-first and
//! ties within a tier keep their original ingestion order.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::figure::{palette, Gender, PartSlot};

use super::types::{CatalogItem, RarityTier};

/// Items of one part slot, bucketed by rarity tier
#[derive(Debug, Clone, Default)]
pub struct SlotCatalog {
    tiers: BTreeMap<RarityTier, Vec<CatalogItem>>,
}

impl SlotCatalog {
    fn push(&mut self, item: CatalogItem) {
        self.tiers.entry(item.rarity).or_default().push(item);
    }

    /// Items in presentation order: tiers common-first, insertion order within
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.tiers.values().flatten()
    }

    pub fn tier(&self, tier: RarityTier) -> &[CatalogItem] {
        self.tiers.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.tiers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.values().all(Vec::is_empty)
    }
}

/// Catalog items partitioned per part slot
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    slots: BTreeMap<PartSlot, SlotCatalog>,
}

impl CatalogIndex {
    /// Group normalized items by slot and rarity tier
    pub fn build(items: Vec<CatalogItem>) -> Self {
        let mut index = Self::default();
        let total = items.len();
        for item in items {
            index.slots.entry(item.part_slot).or_default().push(item);
        }
        info!("📦 Catalog index built: {} items across {} slots", total, index.slots.len());
        index
    }

    /// Synthesize a minimal placeholder set for any slot left empty.
    ///
    /// A UI category is never presented empty; the placeholder is a plain
    /// common unisex item carrying the slot's default color.
    pub fn ensure_non_empty(&mut self) {
        for slot in PartSlot::ALL {
            let entry = self.slots.entry(slot).or_default();
            if entry.is_empty() {
                debug!("📦 Synthesizing placeholder item for empty slot {:?}", slot);
                entry.push(placeholder_item(slot));
            }
        }
    }

    /// Items of one slot in presentation order
    pub fn items(&self, slot: PartSlot) -> Vec<&CatalogItem> {
        self.slots
            .get(&slot)
            .map(|sc| sc.items().collect())
            .unwrap_or_default()
    }

    /// Items of one slot wearable by the requested gender
    pub fn filter_for_gender(&self, slot: PartSlot, gender: Gender) -> Vec<&CatalogItem> {
        self.slots
            .get(&slot)
            .map(|sc| {
                sc.items()
                    .filter(|item| item.gender.compatible_with(gender))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Look up one item of a slot by id
    pub fn item(&self, slot: PartSlot, id: u32) -> Option<&CatalogItem> {
        self.slots
            .get(&slot)
            .and_then(|sc| sc.items().find(|item| item.id == id))
    }

    pub fn slot(&self, slot: PartSlot) -> Option<&SlotCatalog> {
        self.slots.get(&slot)
    }

    pub fn total_len(&self) -> usize {
        self.slots.values().map(SlotCatalog::len).sum()
    }
}

/// Reserved id for synthesized placeholder items
const PLACEHOLDER_ITEM_ID: u32 = 1;

fn placeholder_item(slot: PartSlot) -> CatalogItem {
    CatalogItem {
        id: PLACEHOLDER_ITEM_ID,
        display_name: format!("Basic {}", slot.label()),
        part_slot: slot,
        rarity: RarityTier::Common,
        gender: Gender::Unisex,
        default_color_index: palette::default_color(slot),
        local_asset: None,
    }
}
