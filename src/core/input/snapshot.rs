//=========================================================================
// Input Snapshot
//
// The live "what is down right now" state of the keyboard and mouse.
//
// Responsibilities:
// - Track per-scancode down flags
// - Track the mouse button mask and pointer position
// - Share one snapshot between the platform (writer) and any number of
//   Keyboard/Mouse trackers (readers)
//
// Notes:
// The platform refreshes the snapshot while pumping OS events, so its
// contents only change inside `Event::poll()`. Trackers read it without
// caching. Everything here is single-threaded (`Rc<RefCell<_>>`).
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

//=== External Crates =====================================================
use log::warn;

//=== Internal Modules ====================================================
use super::codes::{MouseButton, Scancode, NUM_SCANCODES};

//=== InputSnapshot =======================================================
//
// Plain state container. Presence of a `true` flag (or a set bit) means
// the key (or button) is currently held.
//
pub struct InputSnapshot {
    keys: Box<[bool; NUM_SCANCODES]>,
    mouse_buttons: u32,
    mouse_position: (i32, i32),
}

impl InputSnapshot {
    //--- Constructor ------------------------------------------------------
    //
    // Creates a snapshot with nothing held and the pointer at the origin.
    //
    pub fn new() -> Self {
        Self {
            keys: Box::new([false; NUM_SCANCODES]),
            mouse_buttons: 0,
            mouse_position: (0, 0),
        }
    }

    //--- set_key() --------------------------------------------------------
    //
    // Records a key as held or released.
    // Returns `true` if the stored state changed.
    //
    pub fn set_key(&mut self, key: Scancode, down: bool) -> bool {
        let Some(slot) = key.index().and_then(|i| self.keys.get_mut(i)) else {
            warn!(target: "platform::input", "Scancode {} has no snapshot slot", key.0);
            return false;
        };
        let changed = *slot != down;
        *slot = down;
        changed
    }

    //--- set_button() -----------------------------------------------------
    //
    // Sets or clears a button's bit in the mask.
    // Returns `true` if the stored state changed.
    //
    pub fn set_button(&mut self, button: MouseButton, down: bool) -> bool {
        let bit = button.mask();
        let before = self.mouse_buttons;
        if down {
            self.mouse_buttons |= bit;
        } else {
            self.mouse_buttons &= !bit;
        }
        before != self.mouse_buttons
    }

    pub fn set_mouse_position(&mut self, x: i32, y: i32) {
        self.mouse_position = (x, y);
    }

    //--- release_all() ----------------------------------------------------
    //
    // Drops every held key and button (focus loss).
    //
    pub fn release_all(&mut self) {
        self.keys.fill(false);
        self.mouse_buttons = 0;
    }

    //--- Queries ----------------------------------------------------------

    pub fn key_down(&self, key: Scancode) -> bool {
        key.index()
            .and_then(|i| self.keys.get(i).copied())
            .unwrap_or(false)
    }

    pub fn mouse_buttons(&self) -> u32 {
        self.mouse_buttons
    }

    pub fn mouse_position(&self) -> (i32, i32) {
        self.mouse_position
    }
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

//=== Debug Trait =========================================================
//
// Lists held keys instead of dumping 512 flags.
//
// ```text
// InputSnapshot {
//     keys_down: [4, 44],
//     mouse_buttons: 0b1,
//     mouse_position: (420, 255)
// }
// ```
//
impl fmt::Debug for InputSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held: Vec<usize> = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(i, down)| down.then_some(i))
            .collect();

        f.debug_struct("InputSnapshot")
            .field("keys_down", &held)
            .field("mouse_buttons", &format_args!("{:#b}", self.mouse_buttons))
            .field("mouse_position", &self.mouse_position)
            .finish()
    }
}

//=== SharedSnapshot ======================================================

/// Cheaply cloneable handle to one live [`InputSnapshot`].
///
/// The platform writes through it while pumping events; [`Keyboard`] and
/// [`Mouse`] read through it. Custom backends and tests drive it directly
/// with the writer methods.
///
/// [`Keyboard`]: super::Keyboard
/// [`Mouse`]: super::Mouse
#[derive(Clone, Default)]
pub struct SharedSnapshot(Rc<RefCell<InputSnapshot>>);

impl SharedSnapshot {
    /// Creates a fresh snapshot with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Readers ----------------------------------------------------------

    /// Returns `true` while the key is held. Unknown scancodes read as up.
    pub fn key_down(&self, key: Scancode) -> bool {
        self.0.borrow().key_down(key)
    }

    /// Returns the live button mask (bit `id - 1` per held button).
    pub fn mouse_buttons(&self) -> u32 {
        self.0.borrow().mouse_buttons()
    }

    /// Returns the pointer position in window pixels.
    pub fn mouse_position(&self) -> (i32, i32) {
        self.0.borrow().mouse_position()
    }

    //--- Writers ----------------------------------------------------------

    /// Marks a key as held. Returns `true` if it was not held before.
    pub fn press_key(&self, key: Scancode) -> bool {
        self.0.borrow_mut().set_key(key, true)
    }

    /// Marks a key as released. Returns `true` if it was held before.
    pub fn release_key(&self, key: Scancode) -> bool {
        self.0.borrow_mut().set_key(key, false)
    }

    /// Marks a mouse button as held. Returns `true` if it was not held before.
    pub fn press_button(&self, button: MouseButton) -> bool {
        self.0.borrow_mut().set_button(button, true)
    }

    /// Marks a mouse button as released. Returns `true` if it was held before.
    pub fn release_button(&self, button: MouseButton) -> bool {
        self.0.borrow_mut().set_button(button, false)
    }

    /// Moves the pointer.
    pub fn move_cursor(&self, x: i32, y: i32) {
        self.0.borrow_mut().set_mouse_position(x, y);
    }

    /// Releases every key and button.
    pub fn release_all(&self) {
        self.0.borrow_mut().release_all();
    }
}

impl fmt::Debug for SharedSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.borrow().fmt(f)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
