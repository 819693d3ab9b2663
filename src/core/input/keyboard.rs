//=========================================================================
// Keyboard
//=========================================================================
//
// Continuous and edge-triggered keyboard queries.
//
// Architecture:
//   SharedSnapshot (live, read-only) ─┐
//                                      ├─> down() / pressed()
//   previous[scancode] (owned) ───────┘
//
// Per-key state machine:
//   RELEASED ──live down + pressed()──> ARMED (reported once)
//   ARMED ──live up + down()/pressed()──> RELEASED
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::codes::{Scancode, NUM_SCANCODES};
use super::snapshot::SharedSnapshot;

//=== Keyboard ============================================================

/// Answers "is this key down" and "was this key just pressed".
///
/// Each instance keeps its own edge memory, so two keyboards created at
/// different times can disagree about whether a given check counts as a
/// press. Each key can report `pressed` at most once per physical press.
///
/// ```
/// use easel::core::input::{Keyboard, Scancode, SharedSnapshot};
///
/// let live = SharedSnapshot::new();
/// let mut keyboard = Keyboard::new(live.clone());
///
/// live.press_key(Scancode::SPACE);
/// assert!(keyboard.pressed(Scancode::SPACE));
/// assert!(!keyboard.pressed(Scancode::SPACE));
/// assert!(keyboard.down(Scancode::SPACE));
/// ```
pub struct Keyboard {
    live: SharedSnapshot,
    previous: Box<[bool; NUM_SCANCODES]>,
}

impl Keyboard {
    /// Creates a keyboard reading `live`, with every key unarmed.
    pub fn new(live: SharedSnapshot) -> Self {
        Self {
            live,
            previous: Box::new([false; NUM_SCANCODES]),
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` while the key is held.
    ///
    /// When the key is up this also re-arms its press edge. It never arms
    /// anything while the key is held; only [`pressed`](Self::pressed) does.
    pub fn down(&mut self, key: Scancode) -> bool {
        if self.live.key_down(key) {
            return true;
        }
        if let Some(slot) = self.slot(key) {
            *slot = false;
        }
        false
    }

    /// Returns `true` only on the first check after the key went down.
    ///
    /// Use for discrete actions like jumping or toggling menus.
    pub fn pressed(&mut self, key: Scancode) -> bool {
        if !self.down(key) {
            return false;
        }
        match self.slot(key) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn slot(&mut self, key: Scancode) -> Option<&mut bool> {
        key.index().and_then(|i| self.previous.get_mut(i))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
