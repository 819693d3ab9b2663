//=========================================================================
// Drawing
//
// Software rasterization onto a window's framebuffer.
//
// Responsibilities:
// - Color and geometry value types (`Color`, `Point`, `Rect`, ...)
// - The `Canvas` framebuffer and its `put_*` primitives
//
//=========================================================================

//=== Submodules ==========================================================
mod canvas;
mod color;

//=== Public Exports ======================================================
pub use canvas::Canvas;
pub use color::{Circle, Color, Ellipse, Point, Rect};
