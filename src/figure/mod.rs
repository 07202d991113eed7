//! Avatar figure composition
//!
//! In-memory representation of one avatar's part and color selections plus
//! render modifiers, the canonical textual figure codec, and the rules that
//! keep held-item/action and body/head direction state consistent.

use serde::{Deserialize, Serialize};

pub mod actions;
pub mod codec;
pub mod direction;
pub mod model;
pub mod palette;

pub use actions::{ActionSet, ActionToken, HeldItem};
pub use direction::{DirectionState, RotationAxis};
pub use model::{FigureModel, PartSelection, DEFAULT_FIGURE};
pub use palette::ColorSwatch;

/// Avatar part categories understood by the figure format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartSlot {
    Head,
    Hair,
    Chest,
    Legs,
    Shoes,
    Hat,
    HairAccessory,
    EyeAccessory,
    FaceAccessory,
    ChestAccessory,
    Jacket,
    WaistAccessory,
}

impl PartSlot {
    /// Canonical slot ordering used when serializing figure strings
    pub const ALL: [PartSlot; 12] = [
        PartSlot::Head,
        PartSlot::Hair,
        PartSlot::Chest,
        PartSlot::Legs,
        PartSlot::Shoes,
        PartSlot::Hat,
        PartSlot::HairAccessory,
        PartSlot::EyeAccessory,
        PartSlot::FaceAccessory,
        PartSlot::ChestAccessory,
        PartSlot::Jacket,
        PartSlot::WaistAccessory,
    ];

    /// Get the two-letter code used in figure strings and catalog records
    pub fn code(&self) -> &'static str {
        match self {
            PartSlot::Head => "hd",
            PartSlot::Hair => "hr",
            PartSlot::Chest => "ch",
            PartSlot::Legs => "lg",
            PartSlot::Shoes => "sh",
            PartSlot::Hat => "ha",
            PartSlot::HairAccessory => "he",
            PartSlot::EyeAccessory => "ea",
            PartSlot::FaceAccessory => "fa",
            PartSlot::ChestAccessory => "ca",
            PartSlot::Jacket => "cc",
            PartSlot::WaistAccessory => "wa",
        }
    }

    /// Parse a slot code; unknown codes yield `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hd" => Some(PartSlot::Head),
            "hr" => Some(PartSlot::Hair),
            "ch" => Some(PartSlot::Chest),
            "lg" => Some(PartSlot::Legs),
            "sh" => Some(PartSlot::Shoes),
            "ha" => Some(PartSlot::Hat),
            "he" => Some(PartSlot::HairAccessory),
            "ea" => Some(PartSlot::EyeAccessory),
            "fa" => Some(PartSlot::FaceAccessory),
            "ca" => Some(PartSlot::ChestAccessory),
            "cc" => Some(PartSlot::Jacket),
            "wa" => Some(PartSlot::WaistAccessory),
            _ => None,
        }
    }

    /// Human-readable category label for UI listings
    pub fn label(&self) -> &'static str {
        match self {
            PartSlot::Head => "Face",
            PartSlot::Hair => "Hair",
            PartSlot::Chest => "Shirts",
            PartSlot::Legs => "Trousers",
            PartSlot::Shoes => "Shoes",
            PartSlot::Hat => "Hats",
            PartSlot::HairAccessory => "Hair Accessories",
            PartSlot::EyeAccessory => "Glasses",
            PartSlot::FaceAccessory => "Face Accessories",
            PartSlot::ChestAccessory => "Chest Accessories",
            PartSlot::Jacket => "Jackets",
            PartSlot::WaistAccessory => "Belts",
        }
    }

    /// Whether the slot sits in the head region of the avatar
    pub fn is_head_region(&self) -> bool {
        matches!(
            self,
            PartSlot::Head
                | PartSlot::Hair
                | PartSlot::Hat
                | PartSlot::HairAccessory
                | PartSlot::EyeAccessory
                | PartSlot::FaceAccessory
        )
    }
}

/// Avatar gender used for rendering and catalog filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Male
    }
}

impl Gender {
    /// Single-letter code used at the rendering boundary
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unisex => "U",
        }
    }

    /// Parse a gender code, case-insensitive; unknown codes yield `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            "U" => Some(Gender::Unisex),
            _ => None,
        }
    }

    /// Check whether an item with this gender tag can be worn by `wearer`
    pub fn compatible_with(&self, wearer: Gender) -> bool {
        *self == Gender::Unisex || *self == wearer
    }
}

/// Preview image size token accepted by the rendering boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarSize {
    Small,
    Medium,
    Large,
}

impl Default for AvatarSize {
    fn default() -> Self {
        AvatarSize::Medium
    }
}

impl AvatarSize {
    pub fn token(&self) -> &'static str {
        match self {
            AvatarSize::Small => "s",
            AvatarSize::Medium => "m",
            AvatarSize::Large => "l",
        }
    }
}

/// Facial gesture codes accepted by the rendering boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    Standard,
    Smile,
    Sad,
    Angry,
    Surprised,
    Speak,
}

impl Default for Gesture {
    fn default() -> Self {
        Gesture::Standard
    }
}

impl Gesture {
    pub fn code(&self) -> &'static str {
        match self {
            Gesture::Standard => "std",
            Gesture::Smile => "sml",
            Gesture::Sad => "sad",
            Gesture::Angry => "agr",
            Gesture::Surprised => "srp",
            Gesture::Speak => "spk",
        }
    }
}
