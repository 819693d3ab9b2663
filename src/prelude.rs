//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use easel::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Entry point and windows
pub use crate::{delay, Context, ContextBuilder, Window, WindowConfig};

// Events
pub use crate::core::event::{Event, EventRecord, EventType, WindowEventId};

// Input
pub use crate::core::input::{GamepadAxis, GamepadButton, Keyboard, Mouse, MouseButton, Scancode};

// Drawing
pub use crate::core::draw::{Canvas, Circle, Color, Ellipse, Point, Rect};
pub use crate::core::image::Image;

// Errors
pub use crate::core::error::{DrawError, DrawResult, EaselError};
