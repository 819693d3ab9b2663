//=========================================================================
// Mouse
//=========================================================================
//
// Pointer position plus continuous and edge-triggered button queries.
//
// Architecture:
//   SharedSnapshot.mouse_buttons (live mask) ─┐
//                                              ├─> down() / pressed()
//   mask (owned, one bit per button) ─────────┘
//
// Same per-button state machine as `Keyboard`, stored as a bitmask.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::codes::MouseButton;
use super::snapshot::SharedSnapshot;

//=== Mouse ===============================================================

/// Answers "where is the pointer", "is this button down" and "was this
/// button just pressed".
///
/// The edge mask starts as a copy of the live mask, so a button already
/// held when the mouse is created reports no press until it is released
/// and pressed again.
pub struct Mouse {
    live: SharedSnapshot,
    mask: u32,
}

impl Mouse {
    /// Creates a mouse reading `live`.
    pub fn new(live: SharedSnapshot) -> Self {
        let mask = live.mouse_buttons();
        Self { live, mask }
    }

    //=====================================================================
    // Query API - Position
    //=====================================================================

    /// Pointer x in window pixels.
    pub fn x(&self) -> i32 {
        self.live.mouse_position().0
    }

    /// Pointer y in window pixels.
    pub fn y(&self) -> i32 {
        self.live.mouse_position().1
    }

    /// Pointer position as `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        self.live.mouse_position()
    }

    //=====================================================================
    // Query API - Buttons
    //=====================================================================

    /// Returns `true` while the button is held; re-arms its press edge
    /// when it is up.
    pub fn down(&mut self, button: MouseButton) -> bool {
        let bit = button.mask();
        if self.live.mouse_buttons() & bit != 0 {
            return true;
        }
        self.mask &= !bit;
        false
    }

    /// Like [`Keyboard::pressed`](super::Keyboard::pressed) but for
    /// mouse buttons.
    pub fn pressed(&mut self, button: MouseButton) -> bool {
        if !self.down(button) {
            return false;
        }
        let bit = button.mask();
        if self.mask & bit != 0 {
            return false;
        }
        self.mask |= bit;
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
