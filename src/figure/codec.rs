//! Canonical figure string codec
//!
//! Serializes a [`FigureModel`] to the dot-delimited textual format consumed
//! by the rendering boundary and parses such strings back. Parsing is
//! tolerant: unknown slot codes and malformed segments are dropped, missing
//! colors get the slot default, and duplicates resolve last-wins. The codec
//! never fails.

use tracing::debug;

use super::model::FigureModel;
use super::{palette, PartSlot};

/// Serialize the occupied slots in canonical order.
///
/// Each occupied slot emits `"<slotCode>-<itemId>-<colorIndex>-"`; segments
/// are joined with `.`. Render modifiers are not part of the string; they
/// travel as separate request parameters.
pub fn serialize(model: &FigureModel) -> String {
    let segments: Vec<String> = model
        .occupied()
        .map(|(slot, sel)| format!("{}-{}-{}-", slot.code(), sel.item_id, sel.color_index))
        .collect();
    segments.join(".")
}

/// Parse a figure string into a model with default modifiers.
///
/// An empty input parses to an all-empty model; the default figure is a
/// render-time substitution, not a codec concern.
pub fn parse(input: &str) -> FigureModel {
    let mut model = FigureModel::new();

    for segment in input.split('.') {
        if segment.is_empty() {
            continue;
        }
        let mut fields = segment.split('-');

        let slot = match fields.next().and_then(PartSlot::from_code) {
            Some(slot) => slot,
            None => {
                debug!("👗 Ignoring figure segment with unknown slot code: {:?}", segment);
                continue;
            }
        };

        let item_id = match fields.next().and_then(|f| f.parse::<u32>().ok()) {
            Some(id) => id,
            None => {
                debug!("👗 Ignoring {:?} segment without a parsable item id", slot);
                continue;
            }
        };

        let color_index = fields
            .next()
            .and_then(|f| f.parse::<u16>().ok())
            .unwrap_or_else(|| palette::default_color(slot));

        // set_part validates the color and overwrites earlier duplicates
        model.set_part(slot, item_id, color_index);
    }

    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_segment_figure() {
        let model = parse("hd-180-7-.ch-210-66-");

        let head = model.part(PartSlot::Head).unwrap();
        assert_eq!(head.item_id, 180);
        assert_eq!(head.color_index, 7);

        let chest = model.part(PartSlot::Chest).unwrap();
        assert_eq!(chest.item_id, 210);
        assert_eq!(chest.color_index, 66);

        assert_eq!(model.occupied().count(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        let model = parse("");
        assert!(model.is_empty());
    }

    #[test]
    fn test_unknown_slot_code_ignored() {
        let model = parse("xx-123-66-.ch-210-66-");
        assert_eq!(model.occupied().count(), 1);
        assert!(model.part(PartSlot::Chest).is_some());
    }

    #[test]
    fn test_missing_color_gets_default() {
        let model = parse("hr-100-");
        let hair = model.part(PartSlot::Hair).unwrap();
        assert_eq!(hair.item_id, 100);
        assert_eq!(hair.color_index, palette::default_color(PartSlot::Hair));
    }

    #[test]
    fn test_malformed_item_id_drops_segment() {
        let model = parse("hd-abc-7-.lg-270-82-");
        assert!(model.part(PartSlot::Head).is_none());
        assert!(model.part(PartSlot::Legs).is_some());
    }

    #[test]
    fn test_duplicate_slot_last_wins() {
        let model = parse("ch-210-66-.ch-215-73-");
        let chest = model.part(PartSlot::Chest).unwrap();
        assert_eq!(chest.item_id, 215);
        assert_eq!(chest.color_index, 73);
    }

    #[test]
    fn test_round_trip_preserves_selections() {
        let mut model = FigureModel::new();
        model.set_part(PartSlot::Head, 180, 3);
        model.set_part(PartSlot::Hair, 105, 40);
        model.set_part(PartSlot::Chest, 215, 73);
        model.set_part(PartSlot::Shoes, 290, 80);
        model.set_part(PartSlot::Hat, 1002, 61);

        let reparsed = parse(&serialize(&model));

        assert_eq!(reparsed.occupied().count(), model.occupied().count());
        for (slot, sel) in model.occupied() {
            assert_eq!(reparsed.part(slot), Some(sel));
        }
    }

    #[test]
    fn test_serialize_is_idempotent_through_parse() {
        let encoded = "hd-180-7-.ch-210-66-.lg-270-82-";
        let once = serialize(&parse(encoded));
        let twice = serialize(&parse(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serialize_uses_canonical_order() {
        let mut model = FigureModel::new();
        model.set_part(PartSlot::Shoes, 290, 80);
        model.set_part(PartSlot::Head, 180, 1);

        assert_eq!(serialize(&model), "hd-180-1-.sh-290-80-");
    }
}
