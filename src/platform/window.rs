//=========================================================================
// Window
//=========================================================================
//
// An OS window with a software canvas presented through softbuffer.
//
// Architecture:
//   put_*() → Canvas (via Deref) ──present()──> softbuffer Surface → OS
//
// The canvas keeps its own size. `present()` copies the overlap of the
// canvas and the window's current inner size; any uncovered window area
// is shown black.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

//=== External Dependencies ===============================================

use log::{debug, info};
use winit::{
    dpi::PhysicalSize,
    window::{Fullscreen, Window as WinitWindow, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use super::Platform;
use crate::core::draw::{Canvas, Color};
use crate::core::error::EaselError;

type Surface = softbuffer::Surface<Rc<WinitWindow>, Rc<WinitWindow>>;

//=== WindowConfig ========================================================

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in physical pixels.
    pub width: u32,
    /// Inner height in physical pixels.
    pub height: u32,
    pub resizable: bool,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    fn attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(self.width.max(1), self.height.max(1)))
            .with_resizable(self.resizable)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_owned(),
            width: 640,
            height: 480,
            resizable: false,
        }
    }
}

//=== Window ==============================================================

/// A visible OS window owning a drawable [`Canvas`].
///
/// Drawing calls go to the canvas through `Deref`; nothing reaches the
/// screen until [`present`](Self::present). Dropping the window closes it.
pub struct Window {
    canvas: Canvas,
    surface: Surface,
    handle: Rc<WinitWindow>,
}

impl Window {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(platform: &mut Platform, config: &WindowConfig) -> Result<Self, EaselError> {
        let handle = platform.create_window(config.attributes())?;

        let context = softbuffer::Context::new(handle.clone())?;
        let surface = softbuffer::Surface::new(&context, handle.clone())?;

        let mut window = Self {
            canvas: Canvas::new(config.width, config.height),
            surface,
            handle,
        };

        window.canvas.clear(Color::BLACK);
        window.present()?;

        info!(target: "platform", "Window '{}' ready (id {})", config.title, window.id());
        Ok(window)
    }

    //--- Queries ----------------------------------------------------------

    /// Identifier carried by this window's events.
    pub fn id(&self) -> u64 {
        u64::from(self.handle.id())
    }

    /// Current inner size of the OS window in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let size = self.handle.inner_size();
        (size.width, size.height)
    }

    //--- State ------------------------------------------------------------

    /// Requests a new inner size and resizes (clears) the canvas to match.
    pub fn set_size(&mut self, width: u32, height: u32) {
        let _ = self.handle.request_inner_size(PhysicalSize::new(width.max(1), height.max(1)));
        self.canvas.resize(width, height);
        debug!(target: "platform", "Window {} resized to {}x{}", self.id(), width, height);
    }

    pub fn hide(&self) {
        self.handle.set_visible(false);
    }

    pub fn show(&self) {
        self.handle.set_visible(true);
    }

    /// Switches to borderless fullscreen on the current monitor.
    pub fn fullscreen(&self) {
        self.handle.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    /// Leaves fullscreen.
    pub fn windowed(&self) {
        self.handle.set_fullscreen(None);
    }

    pub fn set_title(&self, title: &str) {
        self.handle.set_title(title);
    }

    //--- Presentation -----------------------------------------------------

    /// Copies the canvas to the screen.
    ///
    /// Does nothing while the window has a zero-sized inner area
    /// (minimized on some platforms).
    pub fn present(&mut self) -> Result<(), EaselError> {
        let size = self.handle.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };

        self.surface.resize(width, height)?;
        let mut buffer = self.surface.buffer_mut()?;
        blit(&self.canvas, &mut buffer, size.width as usize, size.height as usize);
        buffer.present()?;
        Ok(())
    }
}

impl Deref for Window {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        &self.canvas
    }
}

impl DerefMut for Window {
    fn deref_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id())
            .field("canvas", &self.canvas)
            .finish()
    }
}

//--- Internal Helpers ----------------------------------------------------

/// Copies the overlapping region of `canvas` into a `width × height`
/// framebuffer and blacks out the rest.
fn blit(canvas: &Canvas, target: &mut [u32], width: usize, height: usize) {
    target.fill(0);

    let cols = width.min(canvas.width() as usize);
    let rows = height.min(canvas.height() as usize);
    let stride = canvas.width() as usize;
    let source = canvas.pixels();

    for row in 0..rows {
        let src = &source[row * stride..row * stride + cols];
        target[row * width..row * width + cols].copy_from_slice(src);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
