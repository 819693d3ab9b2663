//=========================================================================
// Input
//
// Keyboard and mouse state for gameplay code.
//
// Responsibilities:
// - Name keys, mouse buttons and gamepad controls (`codes`)
// - Hold the live "down right now" snapshot written by the platform
// - Derive edge-triggered "just pressed" signals per tracker instance
//
// Notes:
// Trackers read the live snapshot, which only changes while events are
// pumped. Run the `Event::poll()` drain loop first each frame, then query
// `Keyboard`/`Mouse`.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod codes;
mod keyboard;
mod mouse;
mod snapshot;

//=== Public Exports ======================================================
pub use codes::{GamepadAxis, GamepadButton, MouseButton, Scancode, NUM_SCANCODES};
pub use keyboard::Keyboard;
pub use mouse::Mouse;
pub use snapshot::{InputSnapshot, SharedSnapshot};
