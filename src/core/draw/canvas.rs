//=========================================================================
// Canvas
//=========================================================================
//
// Software framebuffer with primitive drawing calls.
//
// Architecture:
//   put_*() → plot()/span() → pixels: Vec<u32> (0x00RRGGBB, row-major)
//
// Every primitive clips to the canvas silently, and only visits rows and
// line steps that land on it, so far-off coordinates cost nothing. Colors with alpha below
// 255 are composited source-over; alpha 255 overwrites. Outline shapes
// collect their points first so no pixel is blended twice.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::RangeInclusive;

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::color::{Circle, Color, Ellipse, Point, Rect};
use crate::core::error::{DrawError, DrawResult};
use crate::core::image::Image;

//=== Canvas ==============================================================

/// A `width × height` framebuffer.
#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    //=====================================================================
    // Framebuffer Access
    //=====================================================================

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw `0x00RRGGBB` pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Opaque color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_pixel(self.pixels[i]))
    }

    /// Changes the canvas size and clears it to black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, 0);
    }

    /// Fills the whole canvas with `color`, ignoring alpha.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    //=====================================================================
    // Points & Lines
    //=====================================================================

    pub fn put_point(&mut self, x: i32, y: i32, color: Color) -> DrawResult {
        self.plot(i64::from(x), i64::from(y), color);
        Ok(())
    }

    /// Straight line between two endpoints, both included.
    pub fn put_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> DrawResult {
        let mut points = Vec::new();
        self.line_points(x0, y0, x1, y1, &mut points);
        self.plot_unique(points, color);
        Ok(())
    }

    /// Connected line segments through `points`.
    pub fn put_lines(&mut self, points: &[Point], color: Color) -> DrawResult {
        require_points(points, 2)?;
        let mut pixels = Vec::new();
        for pair in points.windows(2) {
            self.line_points(pair[0].x, pair[0].y, pair[1].x, pair[1].y, &mut pixels);
        }
        self.plot_unique(pixels, color);
        Ok(())
    }

    //=====================================================================
    // Rectangles
    //=====================================================================

    pub fn put_rect(&mut self, rect: Rect, color: Color) -> DrawResult {
        if rect.w == 0 || rect.h == 0 {
            return Ok(());
        }
        let (x0, y0) = (i64::from(rect.x), i64::from(rect.y));
        let (x1, y1) = (x0 + i64::from(rect.w) - 1, y0 + i64::from(rect.h) - 1);
        for y in self.visible_rows(y0, y1) {
            self.span(x0, x1, y, color);
        }
        Ok(())
    }

    pub fn put_unfilled_rect(&mut self, rect: Rect, color: Color) -> DrawResult {
        if rect.w == 0 || rect.h == 0 {
            return Ok(());
        }
        let (x0, y0) = (rect.x, rect.y);
        let x1 = x0.saturating_add(rect.w.saturating_sub(1).min(i32::MAX as u32) as i32);
        let y1 = y0.saturating_add(rect.h.saturating_sub(1).min(i32::MAX as u32) as i32);

        let mut points = Vec::new();
        self.line_points(x0, y0, x1, y0, &mut points);
        self.line_points(x0, y1, x1, y1, &mut points);
        self.line_points(x0, y0, x0, y1, &mut points);
        self.line_points(x1, y0, x1, y1, &mut points);
        self.plot_unique(points, color);
        Ok(())
    }

    //=====================================================================
    // Circles & Ellipses
    //=====================================================================

    pub fn put_circle(&mut self, circle: Circle, color: Color) -> DrawResult {
        let r = radius(circle.r)?;
        let (cx, cy) = (i64::from(circle.x), i64::from(circle.y));
        self.fill_rows(cx, cy, r, |dy| isqrt(r * r - dy * dy), color);
        Ok(())
    }

    pub fn put_unfilled_circle(&mut self, circle: Circle, color: Color) -> DrawResult {
        let r = radius(circle.r)?;
        let (cx, cy) = (i64::from(circle.x), i64::from(circle.y));
        self.outline_rows(cx, cy, r, |dy| isqrt(r * r - dy * dy), color);
        Ok(())
    }

    pub fn put_ellipse(&mut self, ellipse: Ellipse, color: Color) -> DrawResult {
        let (rx, ry) = (radius(ellipse.rx)?, radius(ellipse.ry)?);
        let (cx, cy) = (i64::from(ellipse.x), i64::from(ellipse.y));
        self.fill_rows(cx, cy, ry, |dy| ellipse_extent(rx, ry, dy), color);
        Ok(())
    }

    pub fn put_unfilled_ellipse(&mut self, ellipse: Ellipse, color: Color) -> DrawResult {
        let (rx, ry) = (radius(ellipse.rx)?, radius(ellipse.ry)?);
        let (cx, cy) = (i64::from(ellipse.x), i64::from(ellipse.y));
        self.outline_rows(cx, cy, ry, |dy| ellipse_extent(rx, ry, dy), color);
        Ok(())
    }

    //=====================================================================
    // Polygons
    //=====================================================================

    /// Filled polygon (even-odd rule, pixel centers sampled).
    pub fn put_polygon(&mut self, points: &[Point], color: Color) -> DrawResult {
        require_points(points, 3)?;

        let y_min = points.iter().map(|p| i64::from(p.y)).min().unwrap_or(0);
        let y_max = points.iter().map(|p| i64::from(p.y)).max().unwrap_or(0);
        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

        for y in self.visible_rows(y_min, y_max) {
            let sample = y as f64 + 0.5;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let (ax, ay, bx, by) = (a.x as f64, a.y as f64, b.x as f64, b.y as f64);
                if (ay <= sample && sample < by) || (by <= sample && sample < ay) {
                    crossings.push(ax + (sample - ay) * (bx - ax) / (by - ay));
                }
            }

            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let first = (pair[0] - 0.5).ceil() as i64;
                let last = (pair[1] - 0.5).ceil() as i64 - 1;
                self.span(first, last, y, color);
            }
        }
        Ok(())
    }

    /// Closed outline through `points`.
    pub fn put_unfilled_polygon(&mut self, points: &[Point], color: Color) -> DrawResult {
        require_points(points, 3)?;
        let mut pixels = Vec::new();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.line_points(a.x, a.y, b.x, b.y, &mut pixels);
        }
        self.plot_unique(pixels, color);
        Ok(())
    }

    //=====================================================================
    // Images
    //=====================================================================

    /// Copies `src` (whole image when `None`) into `dst`, scaling with
    /// nearest-neighbour sampling and blending by image alpha.
    pub fn put_image(&mut self, image: &Image, src: Option<Rect>, dst: Rect) -> DrawResult {
        let src = src.unwrap_or_else(|| image.rect());
        let inside = src.x >= 0
            && src.y >= 0
            && u64::from(src.x as u32) + u64::from(src.w) <= u64::from(image.width())
            && u64::from(src.y as u32) + u64::from(src.h) <= u64::from(image.height());
        if !inside {
            debug!(target: "easel::draw", "Image source {:?} outside {:?}", src, image.rect());
            return Err(DrawError::SourceOutOfBounds);
        }
        if src.w == 0 || src.h == 0 || dst.w == 0 || dst.h == 0 {
            return Ok(());
        }

        let (dst_x, dst_y) = (i64::from(dst.x), i64::from(dst.y));
        let cols = (-dst_x).max(0)..(i64::from(self.width) - dst_x).min(i64::from(dst.w));
        let rows = (-dst_y).max(0)..(i64::from(self.height) - dst_y).min(i64::from(dst.h));

        for row in rows {
            let sy = src.y as u32 + (row as u64 * u64::from(src.h) / u64::from(dst.h)) as u32;
            for col in cols.clone() {
                let sx = src.x as u32 + (col as u64 * u64::from(src.w) / u64::from(dst.w)) as u32;
                if let Some(color) = image.pixel(sx, sy) {
                    self.plot(dst_x + col, dst_y + row, color);
                }
            }
        }
        Ok(())
    }

    //=====================================================================
    // Internal Helpers
    //=====================================================================

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.index_wide(i64::from(x), i64::from(y))
    }

    fn index_wide(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Writes one pixel, blending by alpha. Off-canvas pixels are dropped.
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        let Some(i) = self.index_wide(x, y) else {
            return;
        };
        self.pixels[i] = match color.a {
            255 => color.to_pixel(),
            0 => return,
            _ => color.over(Color::from_pixel(self.pixels[i])).to_pixel(),
        };
    }

    /// Horizontal run from `x0` to `x1` inclusive on row `y`.
    fn span(&mut self, x0: i64, x1: i64, y: i64, color: Color) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let first = x0.max(0);
        let last = x1.min(i64::from(self.width) - 1);
        for x in first..=last {
            self.plot(x, y, color);
        }
    }

    fn plot_unique(&mut self, mut points: Vec<(i64, i64)>, color: Color) {
        points.sort_unstable();
        points.dedup();
        for (x, y) in points {
            self.plot(x, y, color);
        }
    }

    /// Rows of `top..=bottom` that lie on the canvas.
    fn visible_rows(&self, top: i64, bottom: i64) -> RangeInclusive<i64> {
        top.max(0)..=bottom.min(i64::from(self.height) - 1)
    }

    /// Line pixels from `(x0, y0)` to `(x1, y1)` that fall on the canvas.
    ///
    /// Steps the major axis one pixel at a time and rounds the minor axis,
    /// starting at the first step inside the canvas. Work is bounded by the
    /// canvas size, not the segment length.
    fn line_points(&self, x0: i32, y0: i32, x1: i32, y1: i32, out: &mut Vec<(i64, i64)>) {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let (w, h) = (i64::from(self.width), i64::from(self.height));

        let x_major = (x1 - x0).abs() >= (y1 - y0).abs();
        let (major, major_end, major_len, minor, minor_end, minor_len) = if x_major {
            (x0, x1, w, y0, y1, h)
        } else {
            (y0, y1, h, x0, x1, w)
        };

        let steps = (major_end - major).abs();
        let rise = minor_end - minor;
        let (first, last) = if major_end >= major {
            (-major, major_len - 1 - major)
        } else {
            (major - (major_len - 1), major)
        };
        let step = if major_end >= major { 1 } else { -1 };

        for i in first.max(0)..=last.min(steps) {
            let m = major + step * i;
            let n = minor + round_div(i128::from(i) * i128::from(rise), steps);
            if !(0..minor_len).contains(&n) {
                continue;
            }
            out.push(if x_major { (m, n) } else { (n, m) });
        }
    }

    /// Fills rows `cy - ry..=cy + ry`, each `extent(dy)` pixels either side
    /// of `cx`.
    fn fill_rows(&mut self, cx: i64, cy: i64, ry: i64, extent: impl Fn(i64) -> i64, color: Color) {
        for y in self.visible_rows(cy - ry, cy + ry) {
            let dx = extent(y - cy);
            self.span(cx - dx, cx + dx, y, color);
        }
    }

    /// Outline of the shape `fill_rows` draws: its pixels that have a
    /// 4-neighbour outside it.
    fn outline_rows(&mut self, cx: i64, cy: i64, ry: i64, extent: impl Fn(i64) -> i64, color: Color) {
        let half_width = |dy: i64| if dy.abs() > ry { -1 } else { extent(dy) };
        let right = i64::from(self.width) - 1;
        let mut points = Vec::new();

        for y in self.visible_rows(cy - ry, cy + ry) {
            let dy = y - cy;
            let outer = half_width(dy);
            let inner = (half_width(dy - 1).min(half_width(dy + 1)) + 1).min(outer);

            points.extend(((cx + inner).max(0)..=(cx + outer).min(right)).map(|x| (x, y)));
            points.extend(((cx - outer).max(0)..=(cx - inner).min(right)).map(|x| (x, y)));
        }

        self.plot_unique(points, color);
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

//=== Rasterization Helpers ===============================================

fn require_points(points: &[Point], needed: usize) -> DrawResult {
    if points.len() < needed {
        debug!(target: "easel::draw", "Need {} points, got {}", needed, points.len());
        return Err(DrawError::TooFewPoints { needed, got: points.len() });
    }
    Ok(())
}

fn radius(r: i32) -> Result<i64, DrawError> {
    if r < 0 {
        return Err(DrawError::NegativeRadius(r));
    }
    Ok(i64::from(r))
}

/// `num / den` rounded half away from zero. Zero when `den` is zero.
fn round_div(num: i128, den: i64) -> i64 {
    if den == 0 {
        return 0;
    }
    let den = i128::from(den);
    let half = if num < 0 { -den } else { den };
    ((2 * num + half) / (2 * den)) as i64
}

/// Half-width of an ellipse with radii `(along, across)` at offset `at`
/// on the `across` axis.
fn ellipse_extent(along: i64, across: i64, at: i64) -> i64 {
    if across == 0 {
        return along;
    }
    let t = at as f64 / across as f64;
    (along as f64 * (1.0 - t * t).max(0.0).sqrt()).floor() as i64
}

/// Largest `s` with `s * s <= n`.
fn isqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut s = (n as f64).sqrt() as i64;
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    //--- Test Helpers -----------------------------------------------------

    fn lit(canvas: &Canvas) -> usize {
        canvas.pixels().iter().filter(|&&p| p != 0).count()
    }

    fn is(canvas: &Canvas, x: i32, y: i32, color: Color) -> bool {
        canvas.pixel(x, y) == Some(color)
    }

    //=====================================================================
    // Framebuffer
    //=====================================================================

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.pixels().len(), 12);
        assert_eq!(lit(&canvas), 0);
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn clear_fills_everything() {
        let mut canvas = Canvas::new(3, 3);
        canvas.clear(Color::CYAN);
        assert!(canvas.pixels().iter().all(|&p| p == Color::CYAN.to_pixel()));
    }

    #[test]
    fn resize_clears() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Color::WHITE);
        canvas.resize(5, 1);
        assert_eq!((canvas.width(), canvas.height()), (5, 1));
        assert_eq!(lit(&canvas), 0);
    }

    //=====================================================================
    // Points & Lines
    //=====================================================================

    #[test]
    fn point_outside_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        assert_eq!(canvas.put_point(-1, 2, Color::WHITE), Ok(()));
        assert_eq!(canvas.put_point(4, 0, Color::WHITE), Ok(()));
        assert_eq!(lit(&canvas), 0);

        canvas.put_point(3, 3, Color::WHITE).unwrap();
        assert!(is(&canvas, 3, 3, Color::WHITE));
    }

    #[test]
    fn horizontal_line_includes_endpoints() {
        let mut canvas = Canvas::new(10, 3);
        canvas.put_line(2, 1, 6, 1, Color::RED).unwrap();
        assert_eq!(lit(&canvas), 5);
        assert!(is(&canvas, 2, 1, Color::RED));
        assert!(is(&canvas, 6, 1, Color::RED));
    }

    #[test]
    fn diagonal_line_steps_once_per_row() {
        let mut canvas = Canvas::new(5, 5);
        canvas.put_line(4, 4, 0, 0, Color::GREEN).unwrap();
        for i in 0..5 {
            assert!(is(&canvas, i, i, Color::GREEN));
        }
        assert_eq!(lit(&canvas), 5);
    }

    #[test]
    fn far_lines_are_clipped_to_canvas() {
        let mut canvas = Canvas::new(64, 64);
        let start = Instant::now();

        canvas.put_line(0, 0, i32::MAX, 0, Color::WHITE).unwrap();
        canvas.put_line(i32::MIN, 5, i32::MAX, 5, Color::WHITE).unwrap();
        canvas.put_line(10, -2_000_000_000, 10, 2_000_000_000, Color::WHITE).unwrap();

        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(lit(&canvas), 64 + 64 + 64 - 2);
        assert!(is(&canvas, 63, 0, Color::WHITE));
        assert!(is(&canvas, 10, 63, Color::WHITE));
    }

    #[test]
    fn far_diagonal_keeps_its_slope() {
        let mut canvas = Canvas::new(64, 64);
        canvas.put_line(i32::MAX, i32::MAX, 0, 0, Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 64);
        assert!((0..64).all(|i| is(&canvas, i, i, Color::WHITE)));
    }

    #[test]
    fn polyline_needs_two_points() {
        let mut canvas = Canvas::new(4, 4);
        let result = canvas.put_lines(&[Point::new(1, 1)], Color::WHITE);
        assert_eq!(result, Err(DrawError::TooFewPoints { needed: 2, got: 1 }));
    }

    #[test]
    fn polyline_shares_vertices_once() {
        let mut canvas = Canvas::new(8, 8);
        let half = Color::rgba(255, 255, 255, 128);
        let points = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4)];
        canvas.put_lines(&points, half).unwrap();

        // The shared corner is blended exactly once.
        assert!(is(&canvas, 4, 0, Color::rgb(128, 128, 128)));
        assert_eq!(lit(&canvas), 9);
    }

    //=====================================================================
    // Rectangles
    //=====================================================================

    #[test]
    fn filled_rect_area() {
        let mut canvas = Canvas::new(10, 10);
        canvas.put_rect(Rect::new(2, 3, 4, 2), Color::BLUE).unwrap();
        assert_eq!(lit(&canvas), 8);
        assert!(is(&canvas, 5, 4, Color::BLUE));
        assert!(!is(&canvas, 6, 4, Color::BLUE));
    }

    #[test]
    fn filled_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_rect(Rect::new(-2, -2, 4, 4), Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 4);
    }

    #[test]
    fn unfilled_rect_perimeter() {
        let mut canvas = Canvas::new(10, 10);
        canvas.put_unfilled_rect(Rect::new(1, 1, 4, 3), Color::WHITE).unwrap();
        // 2*4 + 2*3 - 4 corners
        assert_eq!(lit(&canvas), 10);
        assert!(!is(&canvas, 2, 2, Color::WHITE));
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_rect(Rect::new(0, 0, 0, 3), Color::WHITE).unwrap();
        canvas.put_unfilled_rect(Rect::new(0, 0, 3, 0), Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 0);
    }

    //=====================================================================
    // Circles & Ellipses
    //=====================================================================

    #[test]
    fn filled_circle_is_symmetric() {
        let mut canvas = Canvas::new(21, 21);
        canvas.put_circle(Circle::new(10, 10, 5), Color::WHITE).unwrap();

        assert!(is(&canvas, 10, 10, Color::WHITE));
        assert!(is(&canvas, 15, 10, Color::WHITE));
        assert!(is(&canvas, 5, 10, Color::WHITE));
        assert!(is(&canvas, 10, 5, Color::WHITE));
        assert!(is(&canvas, 10, 15, Color::WHITE));
        assert!(!is(&canvas, 15, 15, Color::WHITE));
        assert!(!is(&canvas, 16, 10, Color::WHITE));
    }

    #[test]
    fn zero_radius_circle_is_a_point() {
        let mut canvas = Canvas::new(5, 5);
        canvas.put_circle(Circle::new(2, 2, 0), Color::WHITE).unwrap();
        canvas.put_unfilled_circle(Circle::new(2, 2, 0), Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 1);
    }

    #[test]
    fn negative_radius_fails() {
        let mut canvas = Canvas::new(5, 5);
        assert_eq!(
            canvas.put_circle(Circle::new(2, 2, -1), Color::WHITE),
            Err(DrawError::NegativeRadius(-1))
        );
        assert_eq!(
            canvas.put_unfilled_ellipse(Ellipse::new(2, 2, 3, -2), Color::WHITE),
            Err(DrawError::NegativeRadius(-2))
        );
    }

    #[test]
    fn unfilled_circle_leaves_center_empty() {
        let mut canvas = Canvas::new(21, 21);
        canvas.put_unfilled_circle(Circle::new(10, 10, 6), Color::WHITE).unwrap();
        assert!(is(&canvas, 16, 10, Color::WHITE));
        assert!(is(&canvas, 10, 4, Color::WHITE));
        assert!(!is(&canvas, 10, 10, Color::WHITE));
    }

    #[test]
    fn ellipse_extents() {
        let mut canvas = Canvas::new(30, 20);
        canvas.put_ellipse(Ellipse::new(15, 10, 8, 3), Color::WHITE).unwrap();
        assert!(is(&canvas, 23, 10, Color::WHITE));
        assert!(is(&canvas, 7, 10, Color::WHITE));
        assert!(is(&canvas, 15, 13, Color::WHITE));
        assert!(!is(&canvas, 24, 10, Color::WHITE));
        assert!(!is(&canvas, 15, 14, Color::WHITE));
    }

    #[test]
    fn unfilled_ellipse_touches_axes() {
        let mut canvas = Canvas::new(30, 20);
        canvas.put_unfilled_ellipse(Ellipse::new(15, 10, 8, 3), Color::WHITE).unwrap();
        assert!(is(&canvas, 23, 10, Color::WHITE));
        assert!(is(&canvas, 15, 7, Color::WHITE));
        assert!(!is(&canvas, 15, 10, Color::WHITE));
    }

    #[test]
    fn huge_circles_only_visit_visible_rows() {
        let mut canvas = Canvas::new(64, 64);
        let start = Instant::now();

        canvas.put_unfilled_circle(Circle::new(0, 0, 50_000_000), Color::WHITE).unwrap();
        canvas.put_unfilled_ellipse(Ellipse::new(0, 0, i32::MAX, 50_000_000), Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 0);

        canvas.put_circle(Circle::new(32, 32, i32::MAX), Color::WHITE).unwrap();
        canvas.put_ellipse(Ellipse::new(32, 32, i32::MAX, i32::MAX), Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 64 * 64);

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn huge_circle_outline_crossing_canvas() {
        let mut canvas = Canvas::new(64, 64);
        canvas.put_unfilled_circle(Circle::new(32, 50_000_032, 50_000_000), Color::WHITE).unwrap();

        // The top of the circle grazes row 32; lower rows are far wider.
        assert!(is(&canvas, 32, 32, Color::WHITE));
        assert!(!is(&canvas, 32, 31, Color::WHITE));
        assert!(!is(&canvas, 32, 40, Color::WHITE));
        assert!(!is(&canvas, 0, 40, Color::WHITE));
    }

    //=====================================================================
    // Polygons
    //=====================================================================

    #[test]
    fn polygon_needs_three_points() {
        let mut canvas = Canvas::new(4, 4);
        let points = [Point::new(0, 0), Point::new(3, 3)];
        assert_eq!(
            canvas.put_polygon(&points, Color::WHITE),
            Err(DrawError::TooFewPoints { needed: 3, got: 2 })
        );
        assert_eq!(
            canvas.put_unfilled_polygon(&points, Color::WHITE),
            Err(DrawError::TooFewPoints { needed: 3, got: 2 })
        );
    }

    #[test]
    fn square_polygon_fills_pixel_centers() {
        let mut canvas = Canvas::new(8, 8);
        let square = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)];
        canvas.put_polygon(&square, Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 16);
        assert!(is(&canvas, 3, 3, Color::WHITE));
        assert!(!is(&canvas, 4, 4, Color::WHITE));
    }

    #[test]
    fn unfilled_triangle_closes() {
        let mut canvas = Canvas::new(8, 8);
        let triangle = [Point::new(0, 0), Point::new(6, 0), Point::new(0, 6)];
        canvas.put_unfilled_polygon(&triangle, Color::WHITE).unwrap();
        assert!(is(&canvas, 3, 3, Color::WHITE), "Hypotenuse drawn");
        assert!(is(&canvas, 0, 3, Color::WHITE), "Closing edge drawn");
        assert!(!is(&canvas, 1, 1, Color::WHITE));
    }

    #[test]
    fn far_polygon_vertices_are_clipped() {
        let mut canvas = Canvas::new(64, 64);
        let triangle = [Point::new(0, 0), Point::new(i32::MAX, 0), Point::new(0, i32::MAX)];
        let start = Instant::now();

        canvas.put_unfilled_polygon(&triangle, Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 64 + 64 - 1);

        canvas.put_polygon(&triangle, Color::WHITE).unwrap();
        assert_eq!(lit(&canvas), 64 * 64);

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn far_unfilled_rect_keeps_visible_edges() {
        let mut canvas = Canvas::new(8, 8);
        canvas.put_unfilled_rect(Rect::new(2, 2, u32::MAX, u32::MAX), Color::WHITE).unwrap();
        // Only the top and left edges are on the canvas.
        assert_eq!(lit(&canvas), 6 + 6 - 1);
        assert!(!is(&canvas, 3, 3, Color::WHITE));
    }

    //=====================================================================
    // Images
    //=====================================================================

    #[test]
    fn image_blit_copies_pixels() {
        let mut canvas = Canvas::new(6, 6);
        let image = Image::filled(2, 2, Color::ORANGE);
        canvas.put_image(&image, None, Rect::new(1, 1, 2, 2)).unwrap();
        assert_eq!(lit(&canvas), 4);
        assert!(is(&canvas, 2, 2, Color::ORANGE));
    }

    #[test]
    fn image_blit_scales_and_clips() {
        let mut canvas = Canvas::new(4, 4);
        let image = Image::filled(1, 1, Color::WHITE);
        canvas.put_image(&image, None, Rect::new(2, 2, 4, 4)).unwrap();
        assert_eq!(lit(&canvas), 4);
    }

    #[test]
    fn image_blit_uses_source_rect() {
        let bytes = vec![255, 0, 0, 255, 0, 0, 255, 255];
        let image = Image::from_rgba(2, 1, bytes).unwrap();
        let mut canvas = Canvas::new(2, 2);
        canvas.put_image(&image, Some(Rect::new(1, 0, 1, 1)), Rect::new(0, 0, 2, 2)).unwrap();
        assert!(canvas.pixels().iter().all(|&p| p == Color::BLUE.to_pixel()));
    }

    #[test]
    fn image_source_out_of_bounds_fails() {
        let mut canvas = Canvas::new(4, 4);
        let image = Image::filled(2, 2, Color::WHITE);
        let result = canvas.put_image(&image, Some(Rect::new(1, 1, 2, 2)), Rect::new(0, 0, 2, 2));
        assert_eq!(result, Err(DrawError::SourceOutOfBounds));
        assert_eq!(lit(&canvas), 0);
    }

    #[test]
    fn transparent_image_pixels_are_skipped() {
        let mut canvas = Canvas::new(2, 1);
        canvas.clear(Color::GREEN);
        let image = Image::filled(2, 1, Color::rgba(255, 0, 0, 0));
        canvas.put_image(&image, None, Rect::new(0, 0, 2, 1)).unwrap();
        assert!(is(&canvas, 0, 0, Color::GREEN));
    }

    #[test]
    fn round_div_is_symmetric() {
        assert_eq!(round_div(3, 2), 2);
        assert_eq!(round_div(-3, 2), -2);
        assert_eq!(round_div(1, 3), 0);
        assert_eq!(round_div(5, 0), 0);
    }

    #[test]
    fn isqrt_floors() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(24), 4);
        assert_eq!(isqrt(25), 5);
        assert_eq!(isqrt(-3), 0);
    }
}
