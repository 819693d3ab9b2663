//=========================================================================
// Input Codes
//
// Stable identifiers for physical keys, mouse buttons and gamepad
// controls.
//
// Responsibilities:
// - Name physical keys by scancode (location, not produced character)
// - Name mouse buttons and expose their bit in a button mask
// - Name gamepad buttons and axes for controller events
//
// Design:
// Identifiers are `Copy` newtypes over the platform's integer ids rather
// than closed enums. Backends may report ids this crate has no name for,
// and they still compare, hash and index correctly.
//
// Numbering follows the USB HID usage table for scancodes and the
// conventional 1-based numbering for mouse buttons, so values can be
// stored in fixed-size arrays and bitmasks.
//
//=========================================================================

//=== Scancode ============================================================

/// Number of scancode slots tracked by the live keyboard snapshot.
pub const NUM_SCANCODES: usize = 512;

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `Scancode::A` is always the same physical key regardless of keyboard
/// layout (QWERTY vs AZERTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scancode(pub u16);

impl Scancode {
    /// Key the platform could not identify.
    pub const UNKNOWN: Self = Self(0);

    //--- Letters ----------------------------------------------------------

    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);

    //--- Number Row -------------------------------------------------------

    pub const NUM_1: Self = Self(30);
    pub const NUM_2: Self = Self(31);
    pub const NUM_3: Self = Self(32);
    pub const NUM_4: Self = Self(33);
    pub const NUM_5: Self = Self(34);
    pub const NUM_6: Self = Self(35);
    pub const NUM_7: Self = Self(36);
    pub const NUM_8: Self = Self(37);
    pub const NUM_9: Self = Self(38);
    pub const NUM_0: Self = Self(39);

    //--- Editing & Whitespace ---------------------------------------------

    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);

    //--- Punctuation ------------------------------------------------------

    pub const MINUS: Self = Self(45);
    pub const EQUALS: Self = Self(46);
    pub const LEFT_BRACKET: Self = Self(47);
    pub const RIGHT_BRACKET: Self = Self(48);
    pub const BACKSLASH: Self = Self(49);
    pub const SEMICOLON: Self = Self(51);
    pub const APOSTROPHE: Self = Self(52);
    pub const GRAVE: Self = Self(53);
    pub const COMMA: Self = Self(54);
    pub const PERIOD: Self = Self(55);
    pub const SLASH: Self = Self(56);
    pub const CAPS_LOCK: Self = Self(57);

    //--- Function Keys ----------------------------------------------------

    pub const F1: Self = Self(58);
    pub const F2: Self = Self(59);
    pub const F3: Self = Self(60);
    pub const F4: Self = Self(61);
    pub const F5: Self = Self(62);
    pub const F6: Self = Self(63);
    pub const F7: Self = Self(64);
    pub const F8: Self = Self(65);
    pub const F9: Self = Self(66);
    pub const F10: Self = Self(67);
    pub const F11: Self = Self(68);
    pub const F12: Self = Self(69);

    //--- Navigation -------------------------------------------------------

    pub const INSERT: Self = Self(73);
    pub const HOME: Self = Self(74);
    pub const PAGE_UP: Self = Self(75);
    pub const DELETE: Self = Self(76);
    pub const END: Self = Self(77);
    pub const PAGE_DOWN: Self = Self(78);
    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);

    //--- Modifiers --------------------------------------------------------

    pub const LEFT_CTRL: Self = Self(224);
    pub const LEFT_SHIFT: Self = Self(225);
    pub const LEFT_ALT: Self = Self(226);
    pub const LEFT_GUI: Self = Self(227);
    pub const RIGHT_CTRL: Self = Self(228);
    pub const RIGHT_SHIFT: Self = Self(229);
    pub const RIGHT_ALT: Self = Self(230);
    pub const RIGHT_GUI: Self = Self(231);

    /// Slot of this scancode in a [`NUM_SCANCODES`]-sized table, if it has one.
    pub fn index(self) -> Option<usize> {
        let index = usize::from(self.0);
        (index < NUM_SCANCODES).then_some(index)
    }
}

//=== MouseButton =========================================================

/// Physical mouse button identifier (1-based).
///
/// Button `n` occupies bit `n - 1` of a button mask. Ids outside `1..=32`
/// have no bit and never read as down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButton(pub u8);

impl MouseButton {
    /// Primary button (typically left).
    pub const LEFT: Self = Self(1);

    /// Middle button (wheel click).
    pub const MIDDLE: Self = Self(2);

    /// Secondary button (typically right).
    pub const RIGHT: Self = Self(3);

    /// First side button (usually "back").
    pub const X1: Self = Self(4);

    /// Second side button (usually "forward").
    pub const X2: Self = Self(5);

    /// Bit of this button in a button mask, or `0` if it has none.
    pub fn mask(self) -> u32 {
        match self.0 {
            1..=32 => 1u32 << (self.0 - 1),
            _ => 0,
        }
    }
}

//=== GamepadButton =======================================================

/// Game controller button identifier, used by controller button events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadButton(pub u8);

impl GamepadButton {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const X: Self = Self(2);
    pub const Y: Self = Self(3);
    pub const BACK: Self = Self(4);
    pub const GUIDE: Self = Self(5);
    pub const START: Self = Self(6);
    pub const LEFT_STICK: Self = Self(7);
    pub const RIGHT_STICK: Self = Self(8);
    pub const LEFT_SHOULDER: Self = Self(9);
    pub const RIGHT_SHOULDER: Self = Self(10);
    pub const DPAD_UP: Self = Self(11);
    pub const DPAD_DOWN: Self = Self(12);
    pub const DPAD_LEFT: Self = Self(13);
    pub const DPAD_RIGHT: Self = Self(14);
}

//=== GamepadAxis =========================================================

/// Game controller axis identifier, used by controller motion events.
///
/// Axis values range from -32768 to 32767; triggers only report 0 and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadAxis(pub u8);

impl GamepadAxis {
    pub const LEFT_X: Self = Self(0);
    pub const LEFT_Y: Self = Self(1);
    pub const RIGHT_X: Self = Self(2);
    pub const RIGHT_Y: Self = Self(3);
    pub const TRIGGER_LEFT: Self = Self(4);
    pub const TRIGGER_RIGHT: Self = Self(5);
}

//=========================================================================
// Unit Tests
//=========================================================================
