//! In-memory avatar figure model
//!
//! One avatar's part/color selections plus render modifiers. The model is
//! an explicitly owned session value: it is created when an editing session
//! starts, mutated synchronously by discrete user actions and discarded at
//! session end. It is never persisted here.

use std::collections::BTreeMap;

use tracing::debug;

use super::actions::{sync_holding, ActionSet, ActionToken, HeldItem};
use super::direction::{DirectionState, RotationAxis};
use super::palette;
use super::{AvatarSize, Gender, Gesture, PartSlot};

/// Figure string substituted at render time when no part is selected
pub const DEFAULT_FIGURE: &str = "hd-180-1-.hr-100-31-.ch-210-66-.lg-270-82-.sh-290-80-";

/// One occupied part slot: the selected item and its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSelection {
    pub item_id: u32,
    pub color_index: u16,
}

/// Complete avatar state for one editing session
#[derive(Debug, Clone, Default)]
pub struct FigureModel {
    parts: BTreeMap<PartSlot, PartSelection>,
    actions: ActionSet,
    held_item: HeldItem,
    directions: DirectionState,
    pub gesture: Gesture,
    pub gender: Gender,
    pub size: AvatarSize,
}

impl FigureModel {
    /// Create an all-empty model with default modifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item for a slot, replacing any previous selection.
    ///
    /// A color outside the slot's palette is substituted with the slot
    /// default rather than rejected.
    pub fn set_part(&mut self, slot: PartSlot, item_id: u32, color_index: u16) {
        let color_index = if palette::is_valid_color(slot, color_index) {
            color_index
        } else {
            let substituted = palette::default_color(slot);
            debug!(
                "🎨 Color {} not in {:?} palette, substituting {}",
                color_index, slot, substituted
            );
            substituted
        };
        self.parts.insert(slot, PartSelection { item_id, color_index });
    }

    /// Change only the color of an occupied slot; empty slots are ignored
    pub fn set_color(&mut self, slot: PartSlot, color_index: u16) {
        if let Some(selection) = self.parts.get(&slot).copied() {
            self.set_part(slot, selection.item_id, color_index);
        }
    }

    /// Clear a slot's selection
    pub fn remove_part(&mut self, slot: PartSlot) {
        self.parts.remove(&slot);
    }

    pub fn part(&self, slot: PartSlot) -> Option<PartSelection> {
        self.parts.get(&slot).copied()
    }

    /// Occupied slots in canonical order
    pub fn occupied(&self) -> impl Iterator<Item = (PartSlot, PartSelection)> + '_ {
        PartSlot::ALL
            .into_iter()
            .filter_map(|slot| self.parts.get(&slot).map(|sel| (slot, *sel)))
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    pub fn held_item(&self) -> HeldItem {
        self.held_item
    }

    /// Set or clear the held item; the holding token follows automatically
    pub fn set_held_item(&mut self, held: HeldItem) {
        self.held_item = held;
        sync_holding(&mut self.actions, &self.held_item);
    }

    /// Toggle an action token on or off.
    ///
    /// The holding token cannot be toggled away while an item is held; the
    /// consistency pass reinstates it.
    pub fn toggle_action(&mut self, token: ActionToken) {
        if self.actions.contains(token) {
            self.actions.remove(token);
        } else {
            self.actions.insert(token);
        }
        sync_holding(&mut self.actions, &self.held_item);
    }

    /// Activate a posture (clearing any other posture) or clear all postures
    pub fn set_posture(&mut self, posture: Option<ActionToken>) {
        match posture {
            Some(token) if token.is_posture() => self.actions.insert(token),
            Some(token) => {
                debug!("🚷 Ignoring non-posture token {:?} in set_posture", token);
            }
            None => {
                for token in ActionToken::POSTURES {
                    self.actions.remove(token);
                }
            }
        }
        sync_holding(&mut self.actions, &self.held_item);
    }

    pub fn directions(&self) -> DirectionState {
        self.directions
    }

    /// Rotate body or head one tick; illegal head rotations are no-ops
    pub fn rotate(&mut self, axis: RotationAxis, delta: i8) {
        self.directions.rotate(axis, delta);
    }

    /// Verify the model invariants; used by tests and debug assertions
    pub fn invariants_hold(&self) -> bool {
        let colors_valid = self
            .parts
            .iter()
            .all(|(slot, sel)| palette::is_valid_color(*slot, sel.color_index));
        let holding_consistent = if self.held_item.is_none() {
            !self.actions.contains(ActionToken::HOLDING) || self.actions.implies_held_item()
        } else {
            self.actions.contains(ActionToken::HOLDING)
        };
        let single_posture = self
            .actions
            .iter()
            .filter(ActionToken::is_posture)
            .count()
            <= 1;
        colors_valid && holding_consistent && single_posture && self.directions.is_legal()
    }
}
