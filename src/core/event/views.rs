//=========================================================================
// Typed Event Views
//=========================================================================
//
// Read-only projections over one event record.
//
// Each view borrows its record from the owning `Event`, so it cannot
// outlive the next `poll()`. Views are only handed out when the event's
// discriminant matches their family.
//
// Id views compare directly against identifier constants:
//   event.key().is_some_and(|key| key == Scancode::SPACE)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::record::{
    AxisRecord, ButtonRecord, ControllerButtonRecord, FingerRecord, GestureRecord, KeyRecord,
    MotionRecord, TextRecord, WheelRecord, WindowEventId, WindowRecord,
};
use crate::core::input::{GamepadAxis, GamepadButton, MouseButton, Scancode};

//=== Button ==============================================================

/// View over a mouse button down/up event.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a>(pub(super) &'a ButtonRecord);

impl Button<'_> {
    pub fn id(&self) -> MouseButton {
        self.0.button
    }

    pub fn clicks(&self) -> u8 {
        self.0.clicks
    }

    pub fn double_click(&self) -> bool {
        self.0.clicks == 2
    }

    /// Pointer x where the button changed state.
    pub fn x(&self) -> i32 {
        self.0.x
    }

    /// Pointer y where the button changed state.
    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn window_id(&self) -> u64 {
        self.0.window_id
    }
}

impl PartialEq<MouseButton> for Button<'_> {
    fn eq(&self, other: &MouseButton) -> bool {
        self.0.button == *other
    }
}

//=== Motion ==============================================================

/// View over a mouse motion event.
#[derive(Debug, Clone, Copy)]
pub struct Motion<'a>(pub(super) &'a MotionRecord);

impl Motion<'_> {
    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// Horizontal movement since the previous motion event.
    pub fn dx(&self) -> i32 {
        self.0.dx
    }

    /// Vertical movement since the previous motion event.
    pub fn dy(&self) -> i32 {
        self.0.dy
    }

    pub fn window_id(&self) -> u64 {
        self.0.window_id
    }
}

//=== Wheel ===============================================================

/// View over a mouse wheel event. Each axis is -1, 0 or 1.
#[derive(Debug, Clone, Copy)]
pub struct Wheel<'a>(pub(super) &'a WheelRecord);

impl Wheel<'_> {
    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }
}

//=== Key =================================================================

/// View over a key down/up event.
#[derive(Debug, Clone, Copy)]
pub struct Key<'a>(pub(super) &'a KeyRecord);

impl Key<'_> {
    pub fn scancode(&self) -> Scancode {
        self.0.scancode
    }

    /// `true` for auto-repeat events generated while the key is held.
    pub fn repeat(&self) -> bool {
        self.0.repeat
    }

    pub fn window_id(&self) -> u64 {
        self.0.window_id
    }
}

impl PartialEq<Scancode> for Key<'_> {
    fn eq(&self, other: &Scancode) -> bool {
        self.0.scancode == *other
    }
}

//=== Finger ==============================================================

/// View over a touch finger down/motion/up event.
#[derive(Debug, Clone, Copy)]
pub struct Finger<'a>(pub(super) &'a FingerRecord);

impl Finger<'_> {
    pub fn id(&self) -> u64 {
        self.0.finger_id
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn dx(&self) -> f32 {
        self.0.dx
    }

    pub fn dy(&self) -> f32 {
        self.0.dy
    }

    pub fn pressure(&self) -> f32 {
        self.0.pressure
    }
}

//=== Gesture =============================================================

/// View over a multi-finger gesture event.
#[derive(Debug, Clone, Copy)]
pub struct Gesture<'a>(pub(super) &'a GestureRecord);

impl Gesture<'_> {
    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Radians rotated during this motion.
    pub fn rotate(&self) -> f32 {
        self.0.rotate
    }

    pub fn pinch(&self) -> f32 {
        self.0.pinch
    }

    pub fn num_fingers(&self) -> u16 {
        self.0.num_fingers
    }
}

//=== TextInput ===========================================================

/// View over a text input event.
#[derive(Debug, Clone, Copy)]
pub struct TextInput<'a>(pub(super) &'a TextRecord);

impl<'a> TextInput<'a> {
    /// The text entered (usually a single character).
    pub fn character(&self) -> &'a str {
        &self.0.text
    }
}

//=== ControllerMotion ====================================================

/// View over a controller axis event.
#[derive(Debug, Clone, Copy)]
pub struct ControllerMotion<'a>(pub(super) &'a AxisRecord);

impl ControllerMotion<'_> {
    pub fn axis(&self) -> GamepadAxis {
        self.0.axis
    }

    /// Axis position, -32768 to 32767.
    pub fn value(&self) -> i16 {
        self.0.value
    }

    pub fn controller_id(&self) -> u32 {
        self.0.controller_id
    }
}

impl PartialEq<GamepadAxis> for ControllerMotion<'_> {
    fn eq(&self, other: &GamepadAxis) -> bool {
        self.0.axis == *other
    }
}

//=== ControllerButton ====================================================

/// View over a controller button down/up event.
#[derive(Debug, Clone, Copy)]
pub struct ControllerButton<'a>(pub(super) &'a ControllerButtonRecord);

impl ControllerButton<'_> {
    pub fn id(&self) -> GamepadButton {
        self.0.button
    }

    pub fn controller_id(&self) -> u32 {
        self.0.controller_id
    }
}

impl PartialEq<GamepadButton> for ControllerButton<'_> {
    fn eq(&self, other: &GamepadButton) -> bool {
        self.0.button == *other
    }
}

//=== WindowEvent =========================================================

/// View over a window state event.
#[derive(Debug, Clone, Copy)]
pub struct WindowEvent<'a>(pub(super) &'a WindowRecord);

impl WindowEvent<'_> {
    /// Which window change happened.
    pub fn id(&self) -> WindowEventId {
        self.0.event
    }

    /// Matches [`Window::id`](crate::Window::id) of the affected window.
    pub fn window_id(&self) -> u64 {
        self.0.window_id
    }

    /// Width for `RESIZED`, x for `MOVED`, otherwise 0.
    pub fn data1(&self) -> i32 {
        self.0.data1
    }

    /// Height for `RESIZED`, y for `MOVED`, otherwise 0.
    pub fn data2(&self) -> i32 {
        self.0.data2
    }
}

impl PartialEq<WindowEventId> for WindowEvent<'_> {
    fn eq(&self, other: &WindowEventId) -> bool {
        self.0.event == *other
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
