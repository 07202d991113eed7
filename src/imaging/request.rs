//! Render request construction
//!
//! A [`RenderRequest`] describes one call to the external avatar-imaging
//! endpoint: the canonical figure string plus the render modifiers, which
//! travel as separate query parameters rather than inside the string.

use url::Url;

use crate::catalog::CatalogItem;
use crate::figure::{codec, ActionSet, ActionToken, AvatarSize, FigureModel, Gesture, HeldItem, PartSlot, DEFAULT_FIGURE};

use super::presets::preset_for;

/// Fixed baseline figure that single-item thumbnails are composed against
const BASELINE_FIGURE: &str = "hd-180-1-";

/// One fully parameterized avatar-imaging request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub figure: String,
    pub gender: &'static str,
    pub direction: u8,
    pub head_direction: u8,
    pub gesture: &'static str,
    /// Comma-joined action tokens; the holding token carries `=itemId`
    pub action: Option<String>,
    pub size: AvatarSize,
    pub head_only: bool,
    pub offset_y: i16,
}

impl RenderRequest {
    /// Describe the full preview render of an editing session's figure.
    ///
    /// An all-empty model substitutes the documented default figure; the
    /// codec itself never does.
    pub fn for_model(model: &FigureModel) -> Self {
        let figure = if model.is_empty() {
            DEFAULT_FIGURE.to_string()
        } else {
            codec::serialize(model)
        };
        let directions = model.directions();

        Self {
            figure,
            gender: model.gender.code(),
            direction: directions.body(),
            head_direction: directions.head(),
            gesture: model.gesture.code(),
            action: action_parameter(model.actions(), model.held_item()),
            size: model.size,
            head_only: false,
            offset_y: 0,
        }
    }

    /// Describe a single-item thumbnail: the item alone against the fixed
    /// baseline figure, framed by its slot's preset.
    pub fn thumbnail(item: &CatalogItem) -> Self {
        let preset = preset_for(item.part_slot);
        let segment = format!(
            "{}-{}-{}-",
            item.part_slot.code(),
            item.id,
            item.default_color_index
        );
        let figure = if item.part_slot == PartSlot::Head {
            segment
        } else {
            format!("{}.{}", BASELINE_FIGURE, segment)
        };

        Self {
            figure,
            gender: item.gender.code(),
            direction: preset.direction,
            head_direction: preset.direction,
            gesture: Gesture::Standard.code(),
            action: None,
            size: preset.size,
            head_only: preset.head_only,
            offset_y: preset.offset_y,
        }
    }

    /// Compose the request URL against the configured imaging endpoint
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("figure", &self.figure);
            query.append_pair("gender", self.gender);
            query.append_pair("direction", &self.direction.to_string());
            query.append_pair("head_direction", &self.head_direction.to_string());
            query.append_pair("gesture", self.gesture);
            if let Some(action) = &self.action {
                query.append_pair("action", action);
            }
            query.append_pair("size", self.size.token());
            if self.head_only {
                query.append_pair("headonly", "1");
            }
            if self.offset_y != 0 {
                query.append_pair("offset_y", &self.offset_y.to_string());
            }
        }
        url
    }
}

/// Encode the action set for the wire.
///
/// Posture first, then plain actions, the holding token last with its
/// `=itemId` suffix. Legacy single-token consumers therefore see the
/// posture when both compete.
fn action_parameter(actions: &ActionSet, held: HeldItem) -> Option<String> {
    if actions.is_empty() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(posture) = actions.active_posture() {
        parts.push(posture.code().to_string());
    }
    for token in actions
        .iter()
        .filter(|t| !t.is_posture() && *t != ActionToken::HOLDING)
    {
        parts.push(token.code().to_string());
    }
    if actions.contains(ActionToken::HOLDING) {
        match held.item_id() {
            Some(id) => parts.push(format!("{}={}", ActionToken::HOLDING.code(), id)),
            None => parts.push(ActionToken::HOLDING.code().to_string()),
        }
    }

    Some(parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RarityTier;
    use crate::figure::{Gender, RotationAxis};

    fn base() -> Url {
        Url::parse("https://imaging.example.net/avatarimage").unwrap()
    }

    #[test]
    fn test_empty_model_renders_default_figure() {
        let request = RenderRequest::for_model(&FigureModel::new());
        assert_eq!(request.figure, DEFAULT_FIGURE);
    }

    #[test]
    fn test_for_model_carries_modifiers() {
        let mut model = FigureModel::new();
        model.set_part(PartSlot::Chest, 210, 66);
        model.gender = Gender::Female;
        model.gesture = crate::figure::Gesture::Smile;
        model.size = AvatarSize::Large;
        model.rotate(RotationAxis::Body, 1);
        model.set_held_item(HeldItem::Item(2));
        model.set_posture(Some(ActionToken::Sit));

        let request = RenderRequest::for_model(&model);
        assert_eq!(request.figure, "ch-210-66-");
        assert_eq!(request.gender, "F");
        assert_eq!(request.direction, 3);
        assert_eq!(request.head_direction, 2);
        assert_eq!(request.gesture, "sml");
        assert_eq!(request.action.as_deref(), Some("sit,crr=2"));

        let url = request.to_url(&base());
        let query = url.query().unwrap();
        assert!(query.contains("figure=ch-210-66-"));
        assert!(query.contains("gender=F"));
        assert!(query.contains("direction=3"));
        assert!(query.contains("head_direction=2"));
        assert!(query.contains("action=sit%2Ccrr%3D2"));
        assert!(query.contains("size=l"));
    }

    #[test]
    fn test_action_parameter_orders_posture_before_holding() {
        let mut actions = ActionSet::new();
        actions.insert(ActionToken::Wave);
        actions.insert(ActionToken::Lay);
        actions.insert(ActionToken::Carry);

        let encoded = action_parameter(&actions, HeldItem::Item(55)).unwrap();
        assert_eq!(encoded, "lay,wav,crr=55");
    }

    #[test]
    fn test_thumbnail_composes_against_baseline() {
        let item = CatalogItem {
            id: 1002,
            display_name: "Beanie".to_string(),
            part_slot: PartSlot::Hat,
            rarity: RarityTier::Common,
            gender: Gender::Unisex,
            default_color_index: 85,
            local_asset: None,
        };

        let request = RenderRequest::thumbnail(&item);
        assert_eq!(request.figure, "hd-180-1-.ha-1002-85-");
        assert!(request.head_only);
        assert!(request.action.is_none());

        let url = request.to_url(&base());
        assert!(url.query().unwrap().contains("headonly=1"));
    }

    #[test]
    fn test_head_item_thumbnail_needs_no_baseline() {
        let item = CatalogItem {
            id: 185,
            display_name: "Cheerful Face".to_string(),
            part_slot: PartSlot::Head,
            rarity: RarityTier::Common,
            gender: Gender::Unisex,
            default_color_index: 2,
            local_asset: None,
        };

        let request = RenderRequest::thumbnail(&item);
        assert_eq!(request.figure, "hd-185-2-");
    }
}
