//! Viewport clipping for projected edges
//!
//! Outcodes give the cheap answers: both endpoints inside, or both beyond the
//! same boundary. Everything else goes through a fixed-point Liang-Barsky pass
//! over the four boundaries in the order left, right, bottom, top.

use bitflags::bitflags;
use nalgebra::Point2;

bitflags! {
    /// Viewport boundaries a point lies beyond
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const BOTTOM = 0b0100;
        const TOP = 0b1000;
    }
}

/// A screen-space line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point2<i32>,
    pub end: Point2<i32>,
}

impl Segment {
    pub fn new(start: Point2<i32>, end: Point2<i32>) -> Self {
        Self { start, end }
    }
}

/// Outcome of clipping one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Entirely inside, untouched
    Accepted(Segment),
    /// Shortened to the part inside the viewport
    Clipped(Segment),
    /// Nothing to draw
    Rejected,
}

impl Clip {
    pub fn segment(self) -> Option<Segment> {
        match self {
            Clip::Accepted(s) | Clip::Clipped(s) => Some(s),
            Clip::Rejected => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
}

/// The drawable rectangle `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    fn x_max(&self) -> i32 {
        self.width - 1
    }

    fn y_max(&self) -> i32 {
        self.height - 1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn outcode(&self, x: i32, y: i32) -> Outcode {
        let mut code = Outcode::empty();
        if x < 0 {
            code |= Outcode::LEFT;
        } else if x > self.x_max() {
            code |= Outcode::RIGHT;
        }
        if y < 0 {
            code |= Outcode::BOTTOM;
        } else if y > self.y_max() {
            code |= Outcode::TOP;
        }
        code
    }

    /// Trivial accept/reject by outcode, otherwise the parametric clip.
    pub fn clip(&self, segment: Segment, frac_bits: u32) -> Clip {
        let start = self.outcode(segment.start.x, segment.start.y);
        let end = self.outcode(segment.end.x, segment.end.y);

        if (start | end).is_empty() {
            return Clip::Accepted(segment);
        }
        if start.intersects(end) {
            return Clip::Rejected;
        }
        match self.clip_parametric(segment, frac_bits) {
            Some(clipped) => Clip::Clipped(clipped),
            None => Clip::Rejected,
        }
    }

    /// Liang-Barsky with the parameter `t` in fixed point, `[0, unit]`.
    ///
    /// The coordinate along the boundary that limited `t` is placed exactly on
    /// that boundary; the other coordinate is clamped into the viewport to
    /// absorb truncation in `t`.
    pub fn clip_parametric(&self, segment: Segment, frac_bits: u32) -> Option<Segment> {
        let unit = 1i64 << frac_bits;
        let (x0, y0) = (segment.start.x as i64, segment.start.y as i64);
        let dx = segment.end.x as i64 - x0;
        let dy = segment.end.y as i64 - y0;

        let mut span = ParamSpan::new(unit);
        let planes = [
            (Boundary::Left, -dx, x0),
            (Boundary::Right, dx, self.x_max() as i64 - x0),
            (Boundary::Bottom, -dy, y0),
            (Boundary::Top, dy, self.y_max() as i64 - y0),
        ];
        for (boundary, p, q) in planes {
            if !span.narrow(boundary, p, q, frac_bits) {
                return None;
            }
        }

        // A truncated `t` can leave an outside endpoint at 0 or unit, so
        // anything outside is settled regardless of how far `t` moved.
        let mut clipped = segment;
        if span.t1 < unit || !self.outcode(segment.end.x, segment.end.y).is_empty() {
            let x = x0 + ((span.t1 * dx) >> frac_bits);
            let y = y0 + ((span.t1 * dy) >> frac_bits);
            clipped.end = self.settle(x, y, span.t1_boundary);
        }
        if span.t0 > 0 || !self.outcode(segment.start.x, segment.start.y).is_empty() {
            let x = x0 + ((span.t0 * dx) >> frac_bits);
            let y = y0 + ((span.t0 * dy) >> frac_bits);
            clipped.start = self.settle(x, y, span.t0_boundary);
        }
        Some(clipped)
    }

    fn settle(&self, x: i64, y: i64, boundary: Option<Boundary>) -> Point2<i32> {
        let x = x.clamp(0, self.x_max() as i64) as i32;
        let y = y.clamp(0, self.y_max() as i64) as i32;
        match boundary {
            Some(Boundary::Left) => Point2::new(0, y),
            Some(Boundary::Right) => Point2::new(self.x_max(), y),
            Some(Boundary::Bottom) => Point2::new(x, 0),
            Some(Boundary::Top) => Point2::new(x, self.y_max()),
            None => Point2::new(x, y),
        }
    }
}

/// Entering and leaving parameters, plus which boundary set each
struct ParamSpan {
    t0: i64,
    t1: i64,
    t0_boundary: Option<Boundary>,
    t1_boundary: Option<Boundary>,
}

impl ParamSpan {
    fn new(unit: i64) -> Self {
        Self {
            t0: 0,
            t1: unit,
            t0_boundary: None,
            t1_boundary: None,
        }
    }

    /// Returns false once the segment is known to miss the viewport.
    fn narrow(&mut self, boundary: Boundary, p: i64, q: i64, frac_bits: u32) -> bool {
        if p == 0 {
            // Parallel to this boundary: inside or entirely outside
            return q >= 0;
        }
        let r = (q << frac_bits) / p;
        if p < 0 {
            if r > self.t1 {
                return false;
            }
            if r > self.t0 {
                self.t0 = r;
                self.t0_boundary = Some(boundary);
            }
        } else {
            if r < self.t0 {
                return false;
            }
            if r < self.t1 {
                self.t1 = r;
                self.t1_boundary = Some(boundary);
            }
        }
        true
    }
}
