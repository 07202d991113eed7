//! Avatar action tokens and held-item consistency
//!
//! The held-item reference and the action set are coupled: the holding
//! token must be present exactly when the avatar carries something (or an
//! active action implies an object). All mutations to either field must be
//! followed by [`sync_holding`], which is the single place that transition
//! is decided.

use std::collections::BTreeSet;

use tracing::debug;

/// Action tokens accepted by the rendering boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionToken {
    Sit,
    Lay,
    Walk,
    Wave,
    Carry,
    Drink,
}

impl ActionToken {
    /// Mutually exclusive posture actions; at most one may be active
    pub const POSTURES: [ActionToken; 3] = [ActionToken::Sit, ActionToken::Lay, ActionToken::Walk];

    /// The token signalling that the avatar carries its held item
    pub const HOLDING: ActionToken = ActionToken::Carry;

    /// Actions that imply object interaction even without the holding token
    pub const IMPLIES_HELD_ITEM: [ActionToken; 1] = [ActionToken::Drink];

    /// Get the wire code used in the `action` render parameter
    pub fn code(&self) -> &'static str {
        match self {
            ActionToken::Sit => "sit",
            ActionToken::Lay => "lay",
            ActionToken::Walk => "wlk",
            ActionToken::Wave => "wav",
            ActionToken::Carry => "crr",
            ActionToken::Drink => "drk",
        }
    }

    /// Parse a wire code; unknown codes yield `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sit" => Some(ActionToken::Sit),
            "lay" => Some(ActionToken::Lay),
            "wlk" => Some(ActionToken::Walk),
            "wav" => Some(ActionToken::Wave),
            "crr" => Some(ActionToken::Carry),
            "drk" => Some(ActionToken::Drink),
            _ => None,
        }
    }

    pub fn is_posture(&self) -> bool {
        Self::POSTURES.contains(self)
    }

    pub fn implies_held_item(&self) -> bool {
        Self::IMPLIES_HELD_ITEM.contains(self)
    }
}

/// Reference to the item the avatar is holding, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeldItem {
    #[default]
    None,
    Item(u32),
}

impl HeldItem {
    pub fn is_none(&self) -> bool {
        matches!(self, HeldItem::None)
    }

    pub fn item_id(&self) -> Option<u32> {
        match self {
            HeldItem::None => None,
            HeldItem::Item(id) => Some(*id),
        }
    }
}

/// The set of currently active action tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet {
    tokens: BTreeSet<ActionToken>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token: ActionToken) -> bool {
        self.tokens.contains(&token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionToken> + '_ {
        self.tokens.iter().copied()
    }

    /// Insert a token. Posture tokens are single-select: activating one
    /// clears any other active posture first.
    pub fn insert(&mut self, token: ActionToken) {
        if token.is_posture() {
            self.tokens.retain(|t| !t.is_posture() || *t == token);
        }
        self.tokens.insert(token);
    }

    pub fn remove(&mut self, token: ActionToken) {
        self.tokens.remove(&token);
    }

    /// The currently active posture token, if any
    pub fn active_posture(&self) -> Option<ActionToken> {
        self.tokens.iter().copied().find(ActionToken::is_posture)
    }

    /// Whether any active action implies object interaction
    pub fn implies_held_item(&self) -> bool {
        self.tokens.iter().any(ActionToken::implies_held_item)
    }
}

/// Re-establish the held-item/holding-token invariant.
///
/// Invoked after every mutation to the held item or the action set. A
/// non-empty held item forces the holding token in; the token is only
/// removed once the held item is gone and no remaining action implies an
/// object.
pub fn sync_holding(actions: &mut ActionSet, held: &HeldItem) {
    let holding = actions.contains(ActionToken::HOLDING);
    if !held.is_none() {
        if !holding {
            debug!("🫴 Adding holding token for item {:?}", held.item_id());
            actions.insert(ActionToken::HOLDING);
        }
    } else if holding && !actions.implies_held_item() {
        debug!("🫴 Clearing holding token");
        actions.remove(ActionToken::HOLDING);
    }
}
