/// Double-buffered indexed-color framebuffer and line rasterizer
use crate::palette::PaletteIndex;

/// Two pages of `width * height` palette indices.
///
/// Drawing always targets the back page. [`Framebuffer::flip`] swaps which
/// page is back and which is front.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pages: [Vec<PaletteIndex>; 2],
    back: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            pages: [vec![0; size], vec![0; size]],
            back: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the page currently being drawn into
    pub fn back_index(&self) -> usize {
        self.back
    }

    pub fn back_page(&self) -> &[PaletteIndex] {
        &self.pages[self.back]
    }

    pub fn front_page(&self) -> &[PaletteIndex] {
        &self.pages[self.back ^ 1]
    }

    /// Swap front and back
    pub fn flip(&mut self) {
        self.back ^= 1;
    }

    pub fn clear(&mut self, color: PaletteIndex) {
        self.pages[self.back].fill(color);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Write one pixel to the back page; off-screen writes are dropped.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: PaletteIndex) {
        if let Some(i) = self.index(x, y) {
            self.pages[self.back][i] = color;
        }
    }

    /// Back page pixel, `None` off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<PaletteIndex> {
        self.index(x, y).map(|i| self.pages[self.back][i])
    }

    /// Front page pixel, `None` off-screen
    pub fn front_pixel(&self, x: i32, y: i32) -> Option<PaletteIndex> {
        self.index(x, y).map(|i| self.pages[self.back ^ 1][i])
    }

    /// Bresenham line, inclusive of both endpoints.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: PaletteIndex) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, color);
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
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: PaletteIndex = 1;

    fn lit(fb: &Framebuffer) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.pixel(x, y) == Some(C) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    #[test]
    fn test_degenerate_line_is_one_pixel() {
        let mut fb = Framebuffer::new(240, 160);
        fb.draw_line(0, 0, 0, 0, C);
        assert_eq!(lit(&fb), vec![(0, 0)]);
    }

    #[test]
    fn test_horizontal_line() {
        let mut fb = Framebuffer::new(240, 160);
        fb.draw_line(0, 0, 4, 0, C);
        assert_eq!(lit(&fb), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_all_octants() {
        let (cx, cy) = (50, 50);
        let ends = [
            (60, 53),
            (53, 60),
            (47, 60),
            (40, 53),
            (40, 47),
            (47, 40),
            (53, 40),
            (60, 47),
        ];
        for (ex, ey) in ends {
            let mut fb = Framebuffer::new(100, 100);
            fb.draw_line(cx, cy, ex, ey, C);
            let points = lit(&fb);
            let expected = (ex - cx).abs().max((ey - cy).abs()) + 1;
            assert_eq!(points.len() as i32, expected, "to ({ex}, {ey})");
            assert!(points.contains(&(cx, cy)));
            assert!(points.contains(&(ex, ey)));
            // Each step moves at most one pixel on each axis
            for (x, y) in &points {
                assert!(points
                    .iter()
                    .any(|(ox, oy)| (ox, oy) != (x, y) && (ox - x).abs() <= 1 && (oy - y).abs() <= 1));
            }
        }
    }

    #[test]
    fn test_steep_and_diagonal() {
        let mut fb = Framebuffer::new(20, 20);
        fb.draw_line(3, 3, 7, 7, C);
        assert_eq!(lit(&fb), vec![(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)]);

        let mut fb = Framebuffer::new(20, 20);
        fb.draw_line(2, 10, 2, 6, C);
        assert_eq!(lit(&fb).len(), 5);
    }

    #[test]
    fn test_plot_out_of_bounds_is_noop() {
        let mut fb = Framebuffer::new(240, 160);
        fb.plot(-1, 0, C);
        fb.plot(240, 0, C);
        fb.plot(0, 160, C);
        fb.plot(0, -1, C);
        assert!(lit(&fb).is_empty());
        assert_eq!(fb.pixel(240, 0), None);
    }

    #[test]
    fn test_line_partly_off_screen() {
        let mut fb = Framebuffer::new(10, 10);
        fb.draw_line(-5, 2, 4, 2, C);
        assert_eq!(lit(&fb), vec![(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_double_flip_restores_back_page() {
        let mut fb = Framebuffer::new(4, 4);
        let original = fb.back_index();
        fb.flip();
        assert_ne!(fb.back_index(), original);
        fb.flip();
        assert_eq!(fb.back_index(), original);
    }

    #[test]
    fn test_clear_after_flip_only_touches_new_back() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(7);
        fb.plot(1, 1, C);
        fb.flip();
        fb.clear(3);
        assert!(fb.back_page().iter().all(|p| *p == 3));
        assert_eq!(fb.front_pixel(1, 1), Some(C));
        assert_eq!(fb.front_pixel(0, 0), Some(7));
        fb.flip();
        assert_eq!(fb.pixel(1, 1), Some(C));
        assert_eq!(fb.front_pixel(2, 2), Some(3));
    }
}
