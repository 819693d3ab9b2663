//=========================================================================
// Color & Geometry
//
// Plain value types passed to drawing primitives.
//
//=========================================================================

//=== Color ===============================================================

/// RGBA color, 8 bits per channel. Alpha 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(255, 50, 50);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    pub const DARKGRAY: Self = Self::rgb(50, 50, 50);
    pub const YELLOW: Self = Self::rgb(231, 228, 13);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const ORANGE: Self = Self::rgb(255, 114, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs into the `0x00RRGGBB` framebuffer format (alpha dropped).
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks a `0x00RRGGBB` framebuffer pixel as an opaque color.
    pub const fn from_pixel(pixel: u32) -> Self {
        Self::rgb((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
    }

    /// Composites `self` over an opaque `dst` (source-over).
    pub fn over(self, dst: Color) -> Color {
        let a = u32::from(self.a);
        let mix = |s: u8, d: u8| ((u32::from(s) * a + u32::from(d) * (255 - a) + 127) / 255) as u8;
        Self::rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

//=== Geometry ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, r: i32) -> Self {
        Self { x, y, r }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ellipse {
    pub x: i32,
    pub y: i32,
    pub rx: i32,
    pub ry: i32,
}

impl Ellipse {
    pub const fn new(x: i32, y: i32, rx: i32, ry: i32) -> Self {
        Self { x, y, rx, ry }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
