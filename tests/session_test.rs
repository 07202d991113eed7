use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use avatar_studio::catalog::{build_builtin_catalog, CatalogItem, RarityTier};
use avatar_studio::figure::{
    codec, ActionToken, DirectionState, FigureModel, Gender, HeldItem, PartSlot, RotationAxis,
};
use avatar_studio::imaging::{AssetResolver, ImageSource, SourceProbe};
use avatar_studio::session::EditorSession;

fn imaging_base() -> Url {
    Url::parse("https://imaging.example.net/avatarimage").unwrap()
}

#[test]
fn parse_yields_expected_selections() {
    let model = codec::parse("hd-180-7-.ch-210-66-");

    assert_eq!(model.part(PartSlot::Head).unwrap().item_id, 180);
    assert_eq!(model.part(PartSlot::Head).unwrap().color_index, 7);
    assert_eq!(model.part(PartSlot::Chest).unwrap().item_id, 210);
    assert_eq!(model.part(PartSlot::Chest).unwrap().color_index, 66);
    assert_eq!(model.occupied().count(), 2);
}

#[test]
fn round_trip_is_order_independent_and_idempotent() {
    let mut model = FigureModel::new();
    model.set_part(PartSlot::Shoes, 290, 80);
    model.set_part(PartSlot::Head, 180, 3);
    model.set_part(PartSlot::Jacket, 3001, 82);

    let encoded = codec::serialize(&model);
    let reparsed = codec::parse(&encoded);

    for (slot, sel) in model.occupied() {
        assert_eq!(reparsed.part(slot), Some(sel));
    }
    assert_eq!(codec::serialize(&reparsed), encoded);
}

#[test]
fn holding_token_follows_held_item() {
    let mut session = EditorSession::new(build_builtin_catalog());
    assert!(session.figure().actions().is_empty());

    session.set_held_item(HeldItem::Item(305));

    let actions: Vec<ActionToken> = session.figure().actions().iter().collect();
    assert_eq!(actions, vec![ActionToken::Carry]);
}

#[test]
fn head_rotation_is_bounded_by_body() {
    let mut state = DirectionState::new(2, 2);

    state.rotate(RotationAxis::Head, 1);
    state.rotate(RotationAxis::Head, 1);
    assert_eq!(state.head(), 4);

    state.rotate(RotationAxis::Head, 1);
    assert_eq!(state.head(), 4, "rotation past the bound must be rejected");
    assert_eq!(state.body(), 2, "body must never be dragged by the head");
}

#[test]
fn synthesized_items_fill_empty_categories() {
    // The builtin table leaves several accessory slots empty on purpose
    let index = build_builtin_catalog();

    for slot in PartSlot::ALL {
        assert!(!index.items(slot).is_empty(), "slot {:?} left empty", slot);
    }

    // Slots the builtin table does not cover get synthesized common items
    for slot in [
        PartSlot::HairAccessory,
        PartSlot::ChestAccessory,
        PartSlot::WaistAccessory,
    ] {
        let items = index.items(slot);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rarity, RarityTier::Common);
        assert_eq!(items[0].gender, Gender::Unisex);
    }
}

/// Probe failing everything but the placeholder
struct FailingProbe;

#[async_trait]
impl SourceProbe for FailingProbe {
    async fn probe(&self, source: &ImageSource) -> bool {
        matches!(source, ImageSource::Placeholder)
    }
}

/// Probe failing only literal assets
struct NoLiteralProbe;

#[async_trait]
impl SourceProbe for NoLiteralProbe {
    async fn probe(&self, source: &ImageSource) -> bool {
        !matches!(source, ImageSource::Literal { .. })
    }
}

fn crown() -> CatalogItem {
    build_builtin_catalog()
        .item(PartSlot::Hat, 5002)
        .expect("builtin crown")
        .clone()
}

#[tokio::test]
async fn failed_literal_falls_to_imaging_not_placeholder() {
    let resolver = AssetResolver::with_probe(imaging_base(), Arc::new(NoLiteralProbe));
    let source = resolver.resolve(&crown()).await;

    assert!(
        matches!(source, ImageSource::RemoteImaging { .. }),
        "literal failure must advance to remote imaging, got {:?}",
        source
    );
}

#[tokio::test]
async fn every_chain_terminates_at_the_placeholder() {
    let resolver = AssetResolver::with_probe(imaging_base(), Arc::new(FailingProbe));
    let index = build_builtin_catalog();

    for slot in PartSlot::ALL {
        for item in index.items(slot) {
            let chain = resolver.resolve_sources(item);
            assert!(chain.len() >= 1);
            assert_eq!(chain.sources().last(), Some(&ImageSource::Placeholder));

            let resolved = resolver.resolve(item).await;
            assert_eq!(resolved, ImageSource::Placeholder);
        }
    }
}

#[test]
fn render_url_carries_all_modifier_parameters() {
    let mut session = EditorSession::new(build_builtin_catalog());
    session.select_item(PartSlot::Chest, 210);
    session.set_gender(Gender::Female);
    session.set_held_item(HeldItem::Item(6));
    session.set_posture(Some(ActionToken::Lay));

    let url = session.render_url(&imaging_base());
    let query = url.query().unwrap();

    assert!(query.contains("figure=ch-210-66-"));
    assert!(query.contains("gender=F"));
    assert!(query.contains("direction=2"));
    assert!(query.contains("head_direction=2"));
    assert!(query.contains("gesture=std"));
    assert!(query.contains("action=lay%2Ccrr%3D6"));
    assert!(query.contains("size=m"));
}

#[test]
fn stale_thumbnail_completions_are_discarded() {
    let mut session = EditorSession::new(build_builtin_catalog());
    let old_generation = session.change_context();
    let new_generation = session.change_context();

    let applied = session
        .thumbs_mut()
        .complete(210, old_generation, ImageSource::Placeholder);
    assert!(!applied);

    let applied = session
        .thumbs_mut()
        .complete(210, new_generation, ImageSource::Placeholder);
    assert!(applied);
    assert!(session.thumbs().source_for(210).is_some());
}
