//! Input Capture
//!
//! Named key and pointer events delivered by the input capability, and the
//! held-key state the next tick reads them from.
//!
//! Events never touch the simulation directly: they are folded into an
//! [`InputState`], which the tick consumes.

use serde::{Serialize, Deserialize};
use crate::core::vec2::Vec2;

// =============================================================================
// KEYS
// =============================================================================

/// Keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// `z`: rotate counter-clockwise
    RotateLeft,
    /// `c`: rotate clockwise
    RotateRight,
    /// `x`: fire a projectile
    Fire,
    /// `ArrowUp`: thrust along the heading
    ThrustForward,
    /// `ArrowDown`: thrust against the heading
    ThrustBack,
    /// `ArrowLeft`: strafe left
    ThrustLeft,
    /// `ArrowRight`: strafe right
    ThrustRight,
}

impl Key {
    /// Map a key name (as reported by the input capability) to a game key.
    ///
    /// Returns `None` for keys the game ignores.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "z" | "Z" => Some(Key::RotateLeft),
            "c" | "C" => Some(Key::RotateRight),
            "x" | "X" => Some(Key::Fire),
            "ArrowUp" => Some(Key::ThrustForward),
            "ArrowDown" => Some(Key::ThrustBack),
            "ArrowLeft" => Some(Key::ThrustLeft),
            "ArrowRight" => Some(Key::ThrustRight),
            _ => None,
        }
    }

    /// Bit in the held mask.
    const fn flag(self) -> u8 {
        match self {
            Key::RotateLeft => 0x01,
            Key::RotateRight => 0x02,
            Key::Fire => 0x04,
            Key::ThrustForward => 0x08,
            Key::ThrustBack => 0x10,
            Key::ThrustLeft => 0x20,
            Key::ThrustRight => 0x40,
        }
    }
}

/// One of the four discrete thrust directions, relative to the heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrustDirection {
    /// Along the heading
    Forward,
    /// Against the heading
    Back,
    /// Perpendicular, to the ship's left
    Left,
    /// Perpendicular, to the ship's right
    Right,
}

impl ThrustDirection {
    /// All directions, in a fixed order.
    pub const ALL: [ThrustDirection; 4] = [
        ThrustDirection::Forward,
        ThrustDirection::Back,
        ThrustDirection::Left,
        ThrustDirection::Right,
    ];

    fn key(self) -> Key {
        match self {
            ThrustDirection::Forward => Key::ThrustForward,
            ThrustDirection::Back => Key::ThrustBack,
            ThrustDirection::Left => Key::ThrustLeft,
            ThrustDirection::Right => Key::ThrustRight,
        }
    }
}

// =============================================================================
// EVENTS & MODES
// =============================================================================

/// Event delivered by the input capability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A game key was pressed (or auto-repeated).
    KeyDown(Key),
    /// A game key was released.
    KeyUp(Key),
    /// Pointer button clicked: fire.
    PointerClick,
    /// Pointer moved: the ship jumps to this surface position.
    PointerMove(Vec2),
}

impl InputEvent {
    /// Key-down event from a key name; `None` for ignored keys.
    pub fn key_down(name: &str) -> Option<Self> {
        Key::from_name(name).map(InputEvent::KeyDown)
    }

    /// Key-up event from a key name; `None` for ignored keys.
    pub fn key_up(name: &str) -> Option<Self> {
        Key::from_name(name).map(InputEvent::KeyUp)
    }

    fn is_keyboard(&self) -> bool {
        matches!(self, InputEvent::KeyDown(_) | InputEvent::KeyUp(_))
    }
}

/// Which input devices a session listens to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameplayMode {
    /// Keys only
    #[default]
    Keyboard,
    /// Pointer only
    Mouse,
    /// Keys and pointer
    Both,
}

impl GameplayMode {
    /// Parse a mode name as submitted by the session form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "keyboard" => Some(GameplayMode::Keyboard),
            "mouse" => Some(GameplayMode::Mouse),
            "both" => Some(GameplayMode::Both),
            _ => None,
        }
    }

    /// Whether events of this kind are listened to in this mode.
    pub fn accepts(self, event: &InputEvent) -> bool {
        match self {
            GameplayMode::Keyboard => event.is_keyboard(),
            GameplayMode::Mouse => !event.is_keyboard(),
            GameplayMode::Both => true,
        }
    }
}

// =============================================================================
// INPUT STATE
// =============================================================================

/// Input accumulated between two ticks.
///
/// Held keys persist until released; fire requests and pointer moves are
/// consumed by the tick that reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    /// Held keys (packed bits, one per [`Key`])
    held: u8,
    /// Fire presses since the last tick
    fire_requests: u8,
    /// Latest pointer position since the last tick
    pointer_target: Option<Vec2>,
}

impl InputState {
    /// Create an empty input state.
    pub const fn new() -> Self {
        Self {
            held: 0,
            fire_requests: 0,
            pointer_target: None,
        }
    }

    /// Fold one event into the state, honoring the gameplay mode.
    ///
    /// Returns `false` if the mode ignores this kind of event.
    pub fn apply(&mut self, event: InputEvent, mode: GameplayMode) -> bool {
        if !mode.accepts(&event) {
            return false;
        }

        match event {
            InputEvent::KeyDown(key) => {
                self.held |= key.flag();
                if key == Key::Fire {
                    self.fire_requests = self.fire_requests.saturating_add(1);
                }
            }
            InputEvent::KeyUp(key) => {
                self.held &= !key.flag();
            }
            InputEvent::PointerClick => {
                self.fire_requests = self.fire_requests.saturating_add(1);
            }
            InputEvent::PointerMove(position) => {
                self.pointer_target = Some(position);
            }
        }
        true
    }

    /// Check if a key is held.
    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.flag() != 0
    }

    /// Rotation direction: `1` counter-clockwise, `-1` clockwise, `0` none.
    ///
    /// Holding both rotation keys cancels out.
    pub fn rotation_direction(&self) -> i8 {
        let left = self.is_held(Key::RotateLeft) as i8;
        let right = self.is_held(Key::RotateRight) as i8;
        left - right
    }

    /// Whether any thrust key is held.
    pub fn is_thrusting(&self) -> bool {
        ThrustDirection::ALL.iter().any(|d| self.is_held(d.key()))
    }

    /// Held thrust directions, in [`ThrustDirection::ALL`] order.
    pub fn thrust_directions(&self) -> impl Iterator<Item = ThrustDirection> + '_ {
        ThrustDirection::ALL
            .into_iter()
            .filter(move |d| self.is_held(d.key()))
    }

    /// Take the pending fire requests.
    pub fn take_fire_requests(&mut self) -> u8 {
        std::mem::take(&mut self.fire_requests)
    }

    /// Take the pending pointer target.
    pub fn take_pointer_target(&mut self) -> Option<Vec2> {
        self.pointer_target.take()
    }

    /// Release everything.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
