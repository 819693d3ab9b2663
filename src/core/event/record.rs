//=========================================================================
// Event Records
//
// The owned payload of one polled event.
//
// Responsibilities:
// - Name every event family (`EventType`)
// - Carry the per-family fields as plain record structs
// - Map a record to its discriminant
//
// Design:
// One enum variant per event type, built once by the producer (platform
// or custom backend). Typed views in `views.rs` borrow these records.
//
// Event Flow:
// ```text
// Platform (winit) / EventSender
//         ↓
//    EventRecord (this module)
//         ↓
//    Event::poll() → kind() / typed views
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{GamepadAxis, GamepadButton, MouseButton, Scancode};

//=== EventType ===========================================================

/// Discriminant of a polled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// The application was asked to quit (last window closed).
    Quit,
    KeyDown,
    KeyUp,
    MouseMotion,
    MouseButtonDown,
    MouseButtonUp,
    MouseWheel,
    /// A window changed state; see [`WindowEventId`].
    Window,
    TextInput,
    FingerMotion,
    FingerUp,
    FingerDown,
    Gesture,
    /// A game controller axis moved.
    ControllerMotion,
    /// A game controller button was released.
    ControllerUp,
    /// A game controller button was pressed.
    ControllerDown,
}

//=== WindowEventId =======================================================

/// Sub-event carried by [`EventType::Window`] events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowEventId(pub u8);

impl WindowEventId {
    pub const SHOWN: Self = Self(1);
    pub const HIDDEN: Self = Self(2);
    /// `data1`/`data2` hold the new x/y.
    pub const MOVED: Self = Self(4);
    /// `data1`/`data2` hold the new width/height.
    pub const RESIZED: Self = Self(5);
    pub const MINIMIZED: Self = Self(7);
    pub const MAXIMIZED: Self = Self(8);
    pub const RESTORED: Self = Self(9);
    pub const MOUSE_ENTER: Self = Self(10);
    pub const MOUSE_LEAVE: Self = Self(11);
    pub const KEYBOARD_ENTER: Self = Self(12);
    pub const KEYBOARD_LEAVE: Self = Self(13);
    pub const CLOSED: Self = Self(14);
}

//=== Record Structs ======================================================

/// Key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRecord {
    pub window_id: u64,
    pub scancode: Scancode,
    /// Generated by key auto-repeat while held.
    pub repeat: bool,
}

/// Mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRecord {
    pub window_id: u64,
    pub button: MouseButton,
    /// 1 for a single click, 2 for a double click, and so on.
    pub clicks: u8,
    pub x: i32,
    pub y: i32,
}

/// Pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionRecord {
    pub window_id: u64,
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

/// Wheel scroll, one notch per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelRecord {
    pub window_id: u64,
    pub x: i32,
    pub y: i32,
}

/// Touch contact down, moved or lifted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerRecord {
    pub window_id: u64,
    pub finger_id: u64,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Normalized to `0.0..=1.0`; `1.0` when the device reports no force.
    pub pressure: f32,
}

/// Multi-finger pinch/rotate gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRecord {
    pub window_id: u64,
    /// Gesture center.
    pub x: f32,
    pub y: f32,
    /// Rotation during this motion, in radians.
    pub rotate: f32,
    /// Pinch amount during this motion (positive spreads).
    pub pinch: f32,
    pub num_fingers: u16,
}

/// Committed text from the keyboard or an input method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub window_id: u64,
    pub text: String,
}

/// Game controller axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRecord {
    pub controller_id: u32,
    pub axis: GamepadAxis,
    pub value: i16,
}

/// Game controller button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerButtonRecord {
    pub controller_id: u32,
    pub button: GamepadButton,
}

/// Window state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRecord {
    pub window_id: u64,
    pub event: WindowEventId,
    pub data1: i32,
    pub data2: i32,
}

//=== EventRecord =========================================================

/// One event as produced by the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum EventRecord {
    Quit,
    KeyDown(KeyRecord),
    KeyUp(KeyRecord),
    MouseMotion(MotionRecord),
    MouseButtonDown(ButtonRecord),
    MouseButtonUp(ButtonRecord),
    MouseWheel(WheelRecord),
    Window(WindowRecord),
    TextInput(TextRecord),
    FingerMotion(FingerRecord),
    FingerUp(FingerRecord),
    FingerDown(FingerRecord),
    Gesture(GestureRecord),
    ControllerMotion(AxisRecord),
    ControllerUp(ControllerButtonRecord),
    ControllerDown(ControllerButtonRecord),
}

impl EventRecord {
    /// Returns the discriminant of this record.
    pub fn kind(&self) -> EventType {
        match self {
            Self::Quit => EventType::Quit,
            Self::KeyDown(_) => EventType::KeyDown,
            Self::KeyUp(_) => EventType::KeyUp,
            Self::MouseMotion(_) => EventType::MouseMotion,
            Self::MouseButtonDown(_) => EventType::MouseButtonDown,
            Self::MouseButtonUp(_) => EventType::MouseButtonUp,
            Self::MouseWheel(_) => EventType::MouseWheel,
            Self::Window(_) => EventType::Window,
            Self::TextInput(_) => EventType::TextInput,
            Self::FingerMotion(_) => EventType::FingerMotion,
            Self::FingerUp(_) => EventType::FingerUp,
            Self::FingerDown(_) => EventType::FingerDown,
            Self::Gesture(_) => EventType::Gesture,
            Self::ControllerMotion(_) => EventType::ControllerMotion,
            Self::ControllerUp(_) => EventType::ControllerUp,
            Self::ControllerDown(_) => EventType::ControllerDown,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
