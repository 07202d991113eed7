//! Color palettes for avatar parts
//!
//! Each part slot draws its colors from one of three palettes (skin, hair,
//! clothing). Color indexes in figure strings are only meaningful relative
//! to the palette of their slot.

use super::PartSlot;

/// One selectable color within a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    pub palette_index: u16,
    pub hex: &'static str,
    pub name: &'static str,
}

const fn swatch(palette_index: u16, hex: &'static str, name: &'static str) -> ColorSwatch {
    ColorSwatch { palette_index, hex, name }
}

/// Skin tones, used by the head slot
const SKIN_PALETTE: &[ColorSwatch] = &[
    swatch(1, "FFDBC1", "Pale"),
    swatch(2, "FFCB98", "Light"),
    swatch(3, "F4AC54", "Tan"),
    swatch(4, "E0A9A9", "Rose"),
    swatch(5, "CA8154", "Bronze"),
    swatch(6, "B87560", "Brown"),
    swatch(7, "9C543F", "Deep"),
];

/// Hair colors, used by the hair slot
const HAIR_PALETTE: &[ColorSwatch] = &[
    swatch(31, "2D2D2D", "Black"),
    swatch(32, "3B2A20", "Dark Brown"),
    swatch(34, "6E4A2F", "Brown"),
    swatch(36, "A76644", "Chestnut"),
    swatch(37, "BB8855", "Light Brown"),
    swatch(39, "D8BA87", "Dark Blonde"),
    swatch(40, "F2E1A9", "Blonde"),
    swatch(42, "C74400", "Ginger"),
    swatch(44, "AC2A44", "Red"),
    swatch(45, "F6E5CE", "Platinum"),
    swatch(47, "4D6EB0", "Blue"),
    swatch(49, "6B9E3C", "Green"),
];

/// Clothing colors, shared by every garment and accessory slot
const CLOTHING_PALETTE: &[ColorSwatch] = &[
    swatch(61, "FFFFFF", "White"),
    swatch(62, "EEEEEE", "Chalk"),
    swatch(63, "C8C8C8", "Grey"),
    swatch(64, "5A5A5A", "Charcoal"),
    swatch(66, "96743D", "Khaki"),
    swatch(68, "773A11", "Umber"),
    swatch(70, "E7B027", "Gold"),
    swatch(72, "F8C790", "Cream"),
    swatch(73, "BD2118", "Crimson"),
    swatch(74, "F2563F", "Coral"),
    swatch(75, "FF7B3A", "Orange"),
    swatch(80, "45586E", "Slate"),
    swatch(82, "6B8FB8", "Denim"),
    swatch(85, "1E6C99", "Ocean"),
    swatch(90, "2E7A4C", "Forest"),
    swatch(92, "8FBF4D", "Lime"),
    swatch(100, "6E4AA0", "Violet"),
    swatch(106, "C94E8C", "Pink"),
    swatch(110, "141414", "Ink"),
];

/// Get the palette valid for a given part slot
pub fn palette_for(slot: PartSlot) -> &'static [ColorSwatch] {
    match slot {
        PartSlot::Head => SKIN_PALETTE,
        PartSlot::Hair => HAIR_PALETTE,
        _ => CLOTHING_PALETTE,
    }
}

/// Default color index substituted for missing or invalid colors
pub fn default_color(slot: PartSlot) -> u16 {
    match slot {
        PartSlot::Head => 1,
        PartSlot::Hair => 31,
        _ => 61,
    }
}

/// Check whether a color index belongs to the slot's palette
pub fn is_valid_color(slot: PartSlot, color_index: u16) -> bool {
    palette_for(slot)
        .iter()
        .any(|swatch| swatch.palette_index == color_index)
}

/// Look up a swatch by palette index within a slot's palette
pub fn swatch_for(slot: PartSlot, color_index: u16) -> Option<&'static ColorSwatch> {
    palette_for(slot)
        .iter()
        .find(|swatch| swatch.palette_index == color_index)
}
