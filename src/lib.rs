//=========================================================================
// Easel Library Root
//
// A small windowing, drawing and input layer for learning game
// programming.
//
// Responsibilities:
// - Expose the entry point (`Context`) and its windows
// - Keep Winit integration (`platform`) hidden from end users
// - Publish the event, input and drawing types under `core`
//
// Typical usage:
// ```no_run
// use easel::core::draw::{Circle, Color};
// use easel::core::event::EventType;
// use easel::{Context, WindowConfig};
//
// fn main() -> Result<(), easel::core::error::EaselError> {
//     let context = Context::new()?;
//     let mut window = context.window(&WindowConfig::default())?;
//     let mut event = context.event();
//
//     loop {
//         while event.poll() {
//             if event.kind() == Some(EventType::Quit) {
//                 return Ok(());
//             }
//         }
//         window.clear(Color::BLACK);
//         let _ = window.put_circle(Circle::new(320, 240, 40), Color::ORANGE);
//         window.present()?;
//         easel::delay(16);
//     }
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that does not depend on the OS: events, input
// tracking, drawing, images and errors.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit event loop and OS windows and is not part of
// the public API surface beyond the re-exported `Window` types.
//
// `context` wires the platform to the core types.
//
mod context;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use context::{delay, Context, ContextBuilder};
pub use platform::{Window, WindowConfig};
