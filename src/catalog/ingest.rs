//! Catalog ingestion
//!
//! Pulls raw item records from the remote catalog API and normalizes them
//! into a [`CatalogIndex`]. A failed or unreachable remote degrades to the
//! builtin static table; ingestion itself never aborts the session.

use tracing::{info, warn};

use crate::figure::{Gender, PartSlot};

use super::index::CatalogIndex;
use super::types::{CatalogItem, RarityTier, RawCatalogRecord};
use super::{CatalogError, CatalogResult};

/// Fetch raw catalog records from the configured API endpoint
pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
) -> CatalogResult<Vec<RawCatalogRecord>> {
    let response = client.get(url).send().await?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(CatalogError::Status { status });
    }

    let records: Vec<RawCatalogRecord> = response
        .json()
        .await
        .map_err(|e| CatalogError::Parse { reason: e.to_string() })?;

    info!("📦 Fetched {} raw catalog records from {}", records.len(), url);
    Ok(records)
}

/// Build the catalog from the remote API, degrading to the builtin table.
///
/// The returned index has passed `ensure_non_empty`; every slot is usable.
pub async fn build_catalog(client: &reqwest::Client, url: &str) -> CatalogIndex {
    let items = match fetch_catalog(client, url).await {
        Ok(records) => {
            let total = records.len();
            let items: Vec<CatalogItem> = records
                .into_iter()
                .filter_map(RawCatalogRecord::normalize)
                .collect();
            if items.len() < total {
                warn!("📦 Dropped {} malformed catalog records", total - items.len());
            }
            items
        }
        Err(e) => {
            warn!("📦 Catalog fetch failed ({}), using builtin table", e);
            builtin_items()
        }
    };

    let mut index = CatalogIndex::build(items);
    index.ensure_non_empty();
    index
}

/// Build the catalog from the builtin table only, no network involved
pub fn build_builtin_catalog() -> CatalogIndex {
    let mut index = CatalogIndex::build(builtin_items());
    index.ensure_non_empty();
    index
}

fn entry(
    id: u32,
    name: &str,
    slot: PartSlot,
    rarity: RarityTier,
    gender: Gender,
    color: u16,
) -> CatalogItem {
    CatalogItem {
        id,
        display_name: name.to_string(),
        part_slot: slot,
        rarity,
        gender,
        default_color_index: color,
        local_asset: None,
    }
}

/// Builtin static item table, the offline fallback for the catalog boundary
pub fn builtin_items() -> Vec<CatalogItem> {
    use Gender::*;
    use PartSlot::*;
    use RarityTier::*;

    let mut items = vec![
        // Faces
        entry(180, "Neutral Face", Head, Common, Unisex, 1),
        entry(185, "Cheerful Face", Head, Common, Unisex, 2),
        entry(190, "Stern Face", Head, Common, Unisex, 3),
        // Hair
        entry(100, "Short Crop", Hair, Common, Male, 31),
        entry(105, "Side Part", Hair, Common, Male, 34),
        entry(110, "Long Straight", Hair, Common, Female, 40),
        entry(115, "Ponytail", Hair, Common, Female, 32),
        entry(120, "Mohawk", Hair, Purchasable, Unisex, 44),
        entry(125, "Pigtails", Hair, SubscriberOnly, Female, 42),
        // Shirts
        entry(210, "Plain Tee", Chest, Common, Unisex, 66),
        entry(215, "Polo Shirt", Chest, Common, Unisex, 73),
        entry(220, "Blouse", Chest, Common, Female, 106),
        entry(225, "Hoodie", Chest, Purchasable, Unisex, 80),
        entry(230, "Tuxedo Shirt", Chest, SubscriberOnly, Male, 61),
        // Trousers
        entry(270, "Jeans", Legs, Common, Unisex, 82),
        entry(275, "Shorts", Legs, Common, Unisex, 66),
        entry(280, "Skirt", Legs, Common, Female, 110),
        entry(285, "Cargo Pants", Legs, Purchasable, Unisex, 90),
        // Shoes
        entry(290, "Sneakers", Shoes, Common, Unisex, 80),
        entry(295, "Boots", Shoes, Common, Unisex, 68),
        entry(300, "Sandals", Shoes, Purchasable, Unisex, 72),
        // Hats
        entry(1001, "Cap", Hat, Common, Unisex, 63),
        entry(1002, "Beanie", Hat, Common, Unisex, 85),
        entry(1006, "Top Hat", Hat, SubscriberOnly, Unisex, 110),
        // Eye accessories
        entry(1401, "Round Glasses", EyeAccessory, Common, Unisex, 64),
        entry(1405, "Shades", EyeAccessory, Purchasable, Unisex, 110),
        // Jackets
        entry(3001, "Denim Jacket", Jacket, Common, Unisex, 82),
        entry(3005, "Trench Coat", Jacket, SubscriberOnly, Unisex, 64),
    ];

    // Limited-run collectibles ship with pre-mapped local thumbnails
    let mut dragon_mask = entry(5001, "Dragon Mask", FaceAccessory, Limited, Unisex, 73);
    dragon_mask.local_asset = Some("assets/rare/dragon_mask.png".to_string());
    items.push(dragon_mask);

    let mut crown = entry(5002, "Golden Crown", Hat, Limited, Unisex, 70);
    crown.local_asset = Some("assets/rare/golden_crown.png".to_string());
    items.push(crown);

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_every_slot() {
        let index = build_builtin_catalog();
        for slot in PartSlot::ALL {
            assert!(!index.items(slot).is_empty(), "slot {:?} empty", slot);
        }
    }

    #[test]
    fn test_builtin_catalog_orders_tiers_common_first() {
        let index = build_builtin_catalog();
        let hats = index.items(PartSlot::Hat);

        let mut last_tier = RarityTier::Common;
        for hat in hats {
            assert!(hat.rarity >= last_tier, "tier order violated at {}", hat.id);
            last_tier = hat.rarity;
        }
    }

    #[test]
    fn test_builtin_rare_items_declare_local_assets() {
        let index = build_builtin_catalog();
        let crown = index.item(PartSlot::Hat, 5002).unwrap();
        assert_eq!(crown.rarity, RarityTier::Limited);
        assert!(crown.local_asset.is_some());
    }
}
