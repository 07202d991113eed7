//! Body and head facing state
//!
//! Tracks the avatar's body and head directions as 8-tick rotations and
//! enforces the coupling rule that the head never faces more than two ticks
//! away from the body.

use tracing::debug;

/// Number of discrete facing values
pub const DIRECTION_TICKS: u8 = 8;

/// Maximum shortest-path distance the head may stray from the body
pub const MAX_HEAD_OFFSET: u8 = 2;

/// Which facing value a rotation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    Body,
    Head,
}

/// Body/head facing values with bounded rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionState {
    body: u8,
    head: u8,
}

impl Default for DirectionState {
    fn default() -> Self {
        // South-east, the stock editor pose
        Self { body: 2, head: 2 }
    }
}

impl DirectionState {
    /// Create a direction state, wrapping both values into 0..8 and snapping
    /// the head into the legal band around the body
    pub fn new(body: u8, head: u8) -> Self {
        let body = body % DIRECTION_TICKS;
        let mut state = Self { body, head: body };
        state.head = state.snapped_head(head % DIRECTION_TICKS);
        state
    }

    pub fn body(&self) -> u8 {
        self.body
    }

    pub fn head(&self) -> u8 {
        self.head
    }

    /// Shortest-path mod-8 distance between two facing values
    pub fn distance(a: u8, b: u8) -> u8 {
        let forward = (a + DIRECTION_TICKS - b) % DIRECTION_TICKS;
        forward.min(DIRECTION_TICKS - forward)
    }

    /// Whether the head/body coupling invariant currently holds
    pub fn is_legal(&self) -> bool {
        Self::distance(self.body, self.head) <= MAX_HEAD_OFFSET
    }

    /// Rotate one axis by a single tick in either direction.
    ///
    /// Body rotations always apply; if the head ends up outside the legal
    /// band it is snapped to the nearest legal value. Head rotations that
    /// would leave the band are rejected as silent no-ops; the body is never
    /// dragged to satisfy a head rotation.
    pub fn rotate(&mut self, axis: RotationAxis, delta: i8) {
        let delta = delta.signum();
        match axis {
            RotationAxis::Body => {
                self.body = Self::step(self.body, delta);
                if !self.is_legal() {
                    let snapped = self.snapped_head(self.head);
                    debug!(
                        "🧭 Head snapped {} -> {} after body rotation to {}",
                        self.head, snapped, self.body
                    );
                    self.head = snapped;
                }
            }
            RotationAxis::Head => {
                let candidate = Self::step(self.head, delta);
                if Self::distance(self.body, candidate) <= MAX_HEAD_OFFSET {
                    self.head = candidate;
                } else {
                    debug!(
                        "🧭 Rejected head rotation to {} (body at {})",
                        candidate, self.body
                    );
                }
            }
        }
    }

    fn step(value: u8, delta: i8) -> u8 {
        (value as i16 + delta as i16 + DIRECTION_TICKS as i16) as u8 % DIRECTION_TICKS
    }

    /// Nearest legal head value for the current body facing.
    ///
    /// A head exactly opposite the body (distance 4) is equidistant from
    /// both band edges; it snaps to `body + 2`.
    fn snapped_head(&self, head: u8) -> u8 {
        if Self::distance(self.body, head) <= MAX_HEAD_OFFSET {
            return head;
        }
        let mut offset = (head as i16 - self.body as i16).rem_euclid(DIRECTION_TICKS as i16);
        if offset > 4 {
            offset -= DIRECTION_TICKS as i16;
        }
        let clamped = if offset > 0 {
            MAX_HEAD_OFFSET as i16
        } else {
            -(MAX_HEAD_OFFSET as i16)
        };
        ((self.body as i16 + clamped).rem_euclid(DIRECTION_TICKS as i16)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_legal() {
        let state = DirectionState::default();
        assert_eq!(state.body(), 2);
        assert_eq!(state.head(), 2);
        assert!(state.is_legal());
    }

    #[test]
    fn test_head_rotation_bound() {
        let mut state = DirectionState::new(2, 2);

        state.rotate(RotationAxis::Head, 1);
        assert_eq!(state.head(), 3);

        state.rotate(RotationAxis::Head, 1);
        assert_eq!(state.head(), 4);

        // Third tick would put the head 3 away from the body
        state.rotate(RotationAxis::Head, 1);
        assert_eq!(state.head(), 4);
        assert!(state.is_legal());
    }

    #[test]
    fn test_body_rotation_snaps_head() {
        let mut state = DirectionState::new(2, 4);

        state.rotate(RotationAxis::Body, -1);
        assert_eq!(state.body(), 1);
        assert_eq!(state.head(), 3);
        assert!(state.is_legal());
    }

    #[test]
    fn test_body_rotation_keeps_legal_head() {
        let mut state = DirectionState::new(2, 3);

        state.rotate(RotationAxis::Body, 1);
        assert_eq!(state.body(), 3);
        assert_eq!(state.head(), 3);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut state = DirectionState::new(0, 0);

        state.rotate(RotationAxis::Body, -1);
        assert_eq!(state.body(), 7);

        state.rotate(RotationAxis::Body, 1);
        state.rotate(RotationAxis::Body, 1);
        assert_eq!(state.body(), 1);
    }

    #[test]
    fn test_constructor_snaps_illegal_head() {
        let state = DirectionState::new(0, 4);
        assert!(state.is_legal());
        assert_eq!(state.head(), 2);

        let state = DirectionState::new(0, 5);
        assert!(state.is_legal());
        assert_eq!(state.head(), 6);
    }

    #[test]
    fn test_invariant_holds_under_rotation_sequences() {
        let mut state = DirectionState::default();
        let moves = [
            (RotationAxis::Head, 1),
            (RotationAxis::Head, 1),
            (RotationAxis::Body, -1),
            (RotationAxis::Head, -1),
            (RotationAxis::Body, 1),
            (RotationAxis::Body, 1),
            (RotationAxis::Body, 1),
            (RotationAxis::Head, 1),
            (RotationAxis::Body, -1),
        ];
        for (axis, delta) in moves {
            state.rotate(axis, delta);
            assert!(state.is_legal(), "invariant violated at {:?} {}", axis, delta);
        }
    }
}
