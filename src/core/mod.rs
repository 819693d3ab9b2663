//=========================================================================
// Core
//
// Platform-independent building blocks.
//
// Responsibilities:
// - Event records, the event queue and the polling dispatcher (`event`)
// - Key/button naming, the live input snapshot and edge trackers (`input`)
// - Software drawing (`draw`) and decoded images (`image`)
// - Error types shared by every subsystem (`error`)
//
// Notes:
// Nothing in here touches Winit; tests and custom backends can drive
// `event::event_channel` and `input::SharedSnapshot` directly.
//
//=========================================================================

pub mod draw;
pub mod error;
pub mod event;
pub mod image;
pub mod input;
