//! Per-slot thumbnail framing presets
//!
//! Each catalog category renders its thumbnails with a fixed zoom/offset
//! preset so the crop isolates the relevant body region instead of showing
//! a full-body shot.

use crate::figure::{AvatarSize, PartSlot};

/// Framing parameters for one part slot's thumbnails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbPreset {
    pub size: AvatarSize,
    /// Render only the head region
    pub head_only: bool,
    /// Facing direction used for the thumbnail shot
    pub direction: u8,
    /// Vertical crop bias in pixels; positive values push toward the feet
    pub offset_y: i16,
}

/// Static framing table, keyed by part slot
pub fn preset_for(slot: PartSlot) -> ThumbPreset {
    match slot {
        // Head-region items crop tight on the face
        PartSlot::Head
        | PartSlot::Hair
        | PartSlot::Hat
        | PartSlot::HairAccessory
        | PartSlot::EyeAccessory
        | PartSlot::FaceAccessory => ThumbPreset {
            size: AvatarSize::Large,
            head_only: true,
            direction: 2,
            offset_y: -12,
        },
        // Torso garments center on the chest
        PartSlot::Chest | PartSlot::ChestAccessory | PartSlot::Jacket => ThumbPreset {
            size: AvatarSize::Medium,
            head_only: false,
            direction: 2,
            offset_y: -4,
        },
        PartSlot::WaistAccessory => ThumbPreset {
            size: AvatarSize::Medium,
            head_only: false,
            direction: 2,
            offset_y: 6,
        },
        // Lower-body items bias the crop toward the feet
        PartSlot::Legs | PartSlot::Shoes => ThumbPreset {
            size: AvatarSize::Medium,
            head_only: false,
            direction: 4,
            offset_y: 14,
        },
    }
}
