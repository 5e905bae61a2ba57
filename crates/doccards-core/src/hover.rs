//! Per-card hover state machine.
//!
//! Two states, Idle and Hovered. Pointer-enter moves to Hovered,
//! pointer-leave moves back to Idle, and nothing else touches it.

use serde::Serialize;

/// Events a rendered card can receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEvent {
    PointerEnter,
    PointerLeave,
    /// Click or keyboard activation. Navigation is handled by the host's link.
    Activate,
}

/// Hover flag owned by a single card instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    pub fn is_hovered(self) -> bool {
        self == HoverState::Hovered
    }

    /// Apply an event, returning `true` if the state changed.
    pub fn apply(&mut self, event: CardEvent) -> bool {
        let next = match event {
            CardEvent::PointerEnter => HoverState::Hovered,
            CardEvent::PointerLeave => HoverState::Idle,
            CardEvent::Activate => *self,
        };
        let changed = next != *self;
        *self = next;
        changed
    }
}

impl From<bool> for HoverState {
    fn from(hovered: bool) -> Self {
        if hovered {
            HoverState::Hovered
        } else {
            HoverState::Idle
        }
    }
}
