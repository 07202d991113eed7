use anyhow::Context;
use tracing::info;
use url::Url;

use avatar_studio::catalog::build_catalog;
use avatar_studio::config::load_settings;
use avatar_studio::figure::{ActionToken, HeldItem, PartSlot};
use avatar_studio::imaging::AssetResolver;
use avatar_studio::session::EditorSession;
use avatar_studio::utils::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    info!("🧩 {} {}", avatar_studio::APP_NAME, avatar_studio::VERSION);

    let settings = load_settings();
    let client = settings.http_client().context("building HTTP client")?;
    let imaging_base =
        Url::parse(&settings.imaging_base_url).context("parsing imaging endpoint")?;

    let catalog = build_catalog(&client, &settings.catalog_api_url).await;
    info!("🧩 Catalog ready with {} items", catalog.total_len());

    // Compose a demonstration look and print its render URL
    let mut session = EditorSession::new(catalog);
    session.set_size(settings.default_size);
    session.select_item(PartSlot::Head, 180);
    session.select_item(PartSlot::Hair, 100);
    session.select_item(PartSlot::Chest, 215);
    session.select_item(PartSlot::Legs, 270);
    session.select_item(PartSlot::Shoes, 290);
    session.set_held_item(HeldItem::Item(2));
    session.set_posture(Some(ActionToken::Sit));

    info!("🧩 Figure: {}", session.figure_string());
    info!("🧩 Preview: {}", session.render_url(&imaging_base));

    // Resolve a thumbnail for the first hat to exercise the fallback chain
    let resolver = AssetResolver::new(
        &settings.imaging_base_url,
        settings.assets_dir.clone(),
        client,
        settings.http_timeout(),
    )?;
    if let Some(hat) = session.catalog().items(PartSlot::Hat).first().copied() {
        let hat = hat.clone();
        let source = resolver.resolve(&hat).await;
        info!("🧩 {} thumbnail via {} source", hat.display_name, source.kind());
    }

    Ok(())
}
