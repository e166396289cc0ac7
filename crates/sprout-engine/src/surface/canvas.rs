use super::color::Color;

/// Stroke width of the debug helpers.
const DEBUG_STROKE: u32 = 3;

/// Radius of `debug_dot`.
const DEBUG_DOT_RADIUS: i32 = 3;

/// Fixed-size pixel buffer hooks draw into.
///
/// All drawing clips to the buffer bounds; coordinates outside it are silently
/// dropped. Rectangles with a negative width or height are normalized first.
/// Shape arithmetic is done in `i64`, so any `i32` input is accepted, and the
/// work done is bounded by the visible part of the shape.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Allocates a black surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_pixel(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major `0x00RRGGBB` pixels.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, pixel: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }

    /// Fills the whole surface.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x as i64, y as i64)
            .map(|i| Color::from_pixel(self.pixels[i]))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.put(x as i64, y as i64, color.to_pixel());
    }

    /// Fills the half-open rectangle `[x, x + w) × [y, y + h)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.fill_box(x as i64, y as i64, w as i64, h as i64, color.to_pixel());
    }

    fn fill_box(&mut self, x: i64, y: i64, w: i64, h: i64, pixel: u32) {
        let (x, w) = if w < 0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0 { (y + h, -h) } else { (y, h) };

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i64);
        let y1 = (y + h).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for row in y0 as usize..y1 as usize {
            let start = row * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(pixel);
        }
    }

    /// Outlines a rectangle with a stroke of `thickness` pixels centred on its edges.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: u32, color: Color) {
        self.stroke_box(x as i64, y as i64, w as i64, h as i64, thickness, color.to_pixel());
    }

    fn stroke_box(&mut self, x: i64, y: i64, w: i64, h: i64, thickness: u32, pixel: u32) {
        if thickness == 0 {
            return;
        }
        let (x, w) = if w < 0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0 { (y + h, -h) } else { (y, h) };

        let t = thickness as i64;
        let half = t / 2;

        self.fill_box(x - half, y - half, w + t, t, pixel);
        self.fill_box(x - half, y + h - half, w + t, t, pixel);
        self.fill_box(x - half, y - half, t, h + t, pixel);
        self.fill_box(x + w - half, y - half, t, h + t, pixel);
    }

    /// Draws a line from `(x0, y0)` to `(x1, y1)` inclusive (Bresenham).
    ///
    /// The segment is first clipped to the surface widened by `thickness`, so
    /// only the visible part is walked.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: u32, color: Color) {
        if thickness == 0 || self.width == 0 || self.height == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) =
            self.clip_segment(x0 as i64, y0 as i64, x1 as i64, y1 as i64, thickness as i64)
        else {
            return;
        };

        let pixel = color.to_pixel();
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let (mut x, mut y) = (x0, y0);
        loop {
            self.stamp(x, y, thickness, pixel);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip against the surface grown by `margin` on every side.
    ///
    /// Endpoints already inside are returned unchanged.
    fn clip_segment(
        &self,
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
        margin: i64,
    ) -> Option<(i64, i64, i64, i64)> {
        let min = -margin as f64;
        let x_max = (self.width as i64 - 1 + margin) as f64;
        let y_max = (self.height as i64 - 1 + margin) as f64;

        let (fx, fy) = (x0 as f64, y0 as f64);
        let (dx, dy) = ((x1 - x0) as f64, (y1 - y0) as f64);

        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;
        for (p, q) in [(-dx, fx - min), (dx, x_max - fx), (-dy, fy - min), (dy, y_max - fy)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| ((fx + dx * t).round() as i64, (fy + dy * t).round() as i64);
        let (ax, ay) = if t0 > 0.0 { at(t0) } else { (x0, y0) };
        let (bx, by) = if t1 < 1.0 { at(t1) } else { (x1, y1) };
        Some((ax, ay, bx, by))
    }

    fn stamp(&mut self, x: i64, y: i64, thickness: u32, pixel: u32) {
        if thickness <= 1 {
            self.put(x, y, pixel);
        } else {
            let t = thickness as i64;
            self.fill_box(x - t / 2, y - t / 2, t, t, pixel);
        }
    }

    /// Inclusive pixel range `[c - reach, c + reach]` clamped to `0..len`.
    fn span(c: i64, reach: i64, len: u32) -> std::ops::RangeInclusive<i64> {
        (c - reach).max(0)..=(c + reach).min(len as i64 - 1)
    }

    /// Outlines a circle; pixels whose centre lies within `thickness / 2` of
    /// the radius are set.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, thickness: u32, color: Color) {
        if radius < 0 || thickness == 0 {
            return;
        }
        let pixel = color.to_pixel();
        let (cx, cy, radius) = (cx as i64, cy as i64, radius as i64);
        let half = thickness as f64 / 2.0;
        let reach = radius + thickness as i64;

        for y in Self::span(cy, reach, self.height) {
            for x in Self::span(cx, reach, self.width) {
                let dx = (x - cx) as f64;
                let dy = (y - cy) as f64;
                let d = (dx * dx + dy * dy).sqrt();
                if (d - radius as f64).abs() <= half {
                    self.put(x, y, pixel);
                }
            }
        }
    }

    /// Fills a disc of `radius` pixels.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        let pixel = color.to_pixel();
        let (cx, cy, radius) = (cx as i64, cy as i64, radius as i64);
        let r2 = radius as i128 * radius as i128;

        for y in Self::span(cy, radius, self.height) {
            for x in Self::span(cx, radius, self.width) {
                let dx = (x - cx) as i128;
                let dy = (y - cy) as i128;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, pixel);
                }
            }
        }
    }

    // Debug helpers: red, 3 px strokes.

    pub fn debug_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.stroke_rect(x, y, w, h, DEBUG_STROKE, Color::RED);
    }

    /// Like `debug_rect`, with `(x, y)` as the centre.
    pub fn debug_crect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let (x, y) = (x as i64 - (w / 2) as i64, y as i64 - (h / 2) as i64);
        self.stroke_box(x, y, w as i64, h as i64, DEBUG_STROKE, Color::RED.to_pixel());
    }

    pub fn debug_circle(&mut self, x: i32, y: i32, r: i32) {
        self.circle(x, y, r, DEBUG_STROKE, Color::RED);
    }

    pub fn debug_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.line(x1, y1, x2, y2, DEBUG_STROKE, Color::RED);
    }

    pub fn debug_dot(&mut self, x: i32, y: i32) {
        self.fill_circle(x, y, DEBUG_DOT_RADIUS, Color::RED);
    }
}
