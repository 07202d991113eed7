//! Avatar editing session
//!
//! An [`EditorSession`] is the explicitly owned value holding one user's
//! figure, the catalog it selects from, and the thumbnail generation state.
//! Every discrete user action goes through a session method; the methods
//! keep the consistency rules applied so callers never update coupled
//! fields independently.

use rand::Rng;
use tracing::{debug, info};
use url::Url;

use crate::catalog::CatalogIndex;
use crate::figure::{
    codec, ActionToken, AvatarSize, FigureModel, Gender, Gesture, HeldItem, PartSlot,
    RotationAxis,
};
use crate::imaging::{RenderRequest, ThumbnailBoard};

/// Slots the random-look generator always dresses
const RANDOMIZED_SLOTS: [PartSlot; 5] = [
    PartSlot::Head,
    PartSlot::Hair,
    PartSlot::Chest,
    PartSlot::Legs,
    PartSlot::Shoes,
];

/// One user's avatar editing session
#[derive(Debug)]
pub struct EditorSession {
    figure: FigureModel,
    catalog: CatalogIndex,
    thumbs: ThumbnailBoard,
}

impl EditorSession {
    /// Start a session with an empty figure
    pub fn new(catalog: CatalogIndex) -> Self {
        info!("🧑 Editing session started");
        Self {
            figure: FigureModel::new(),
            catalog,
            thumbs: ThumbnailBoard::new(),
        }
    }

    /// Start a session from a previously composed figure string
    pub fn from_figure_string(catalog: CatalogIndex, encoded: &str) -> Self {
        Self {
            figure: codec::parse(encoded),
            catalog,
            thumbs: ThumbnailBoard::new(),
        }
    }

    pub fn figure(&self) -> &FigureModel {
        &self.figure
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn thumbs(&self) -> &ThumbnailBoard {
        &self.thumbs
    }

    pub fn thumbs_mut(&mut self) -> &mut ThumbnailBoard {
        &mut self.thumbs
    }

    /// Items to present for a slot, filtered to the figure's gender
    pub fn items_for_slot(&self, slot: PartSlot) -> Vec<&crate::catalog::CatalogItem> {
        self.catalog.filter_for_gender(slot, self.figure.gender)
    }

    /// Select a catalog item; unknown ids are ignored.
    ///
    /// The item's default color is applied; a later `select_color` refines it.
    pub fn select_item(&mut self, slot: PartSlot, item_id: u32) {
        match self.catalog.item(slot, item_id) {
            Some(item) => {
                self.figure.set_part(slot, item.id, item.default_color_index);
                debug!("🧑 Selected {:?} item {}", slot, item_id);
            }
            None => {
                debug!("🧑 Ignoring selection of unknown {:?} item {}", slot, item_id);
            }
        }
    }

    pub fn clear_slot(&mut self, slot: PartSlot) {
        self.figure.remove_part(slot);
    }

    pub fn select_color(&mut self, slot: PartSlot, color_index: u16) {
        self.figure.set_color(slot, color_index);
    }

    pub fn toggle_action(&mut self, token: ActionToken) {
        self.figure.toggle_action(token);
    }

    pub fn set_posture(&mut self, posture: Option<ActionToken>) {
        self.figure.set_posture(posture);
    }

    pub fn set_held_item(&mut self, held: HeldItem) {
        self.figure.set_held_item(held);
    }

    pub fn rotate(&mut self, axis: RotationAxis, delta: i8) {
        self.figure.rotate(axis, delta);
    }

    pub fn set_gesture(&mut self, gesture: Gesture) {
        self.figure.gesture = gesture;
    }

    pub fn set_size(&mut self, size: AvatarSize) {
        self.figure.size = size;
    }

    /// Change the figure's gender. Thumbnails are context-dependent on the
    /// gender filter, so the generation advances and in-flight loads die.
    pub fn set_gender(&mut self, gender: Gender) {
        if self.figure.gender != gender {
            self.figure.gender = gender;
            self.thumbs.begin_context();
        }
    }

    /// Navigate to a different category/search context
    pub fn change_context(&mut self) -> u64 {
        self.thumbs.begin_context()
    }

    /// Dress the always-dressed slots with uniformly sampled items and
    /// colors legal for the figure's gender
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for slot in RANDOMIZED_SLOTS {
            let items = self.catalog.filter_for_gender(slot, self.figure.gender);
            if items.is_empty() {
                continue;
            }
            let item = items[rng.random_range(0..items.len())];
            let palette = crate::figure::palette::palette_for(slot);
            let color = palette[rng.random_range(0..palette.len())].palette_index;
            self.figure.set_part(slot, item.id, color);
        }
        info!("🎲 Randomized look: {}", self.figure_string());
    }

    /// The canonical figure string for the current state
    pub fn figure_string(&self) -> String {
        codec::serialize(&self.figure)
    }

    /// The preview render URL for the current state
    pub fn render_url(&self, imaging_base: &Url) -> Url {
        RenderRequest::for_model(&self.figure).to_url(imaging_base)
    }
}
