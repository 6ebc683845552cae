//! Mouse edge detection and rectangle hit tests.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Edges count as inside.
    pub fn contains(&self, p: Point) -> bool {
        let (x, y) = (self.x as f32, self.y as f32);
        p.x >= x && p.x <= x + self.w as f32 && p.y >= y && p.y <= y + self.h as f32
    }

    /// Grows the rectangle by `thickness` (half on each side), for outlines.
    pub fn outline(&self, thickness: i32) -> Rect {
        Rect {
            x: self.x - thickness / 2,
            y: self.y - thickness / 2,
            w: self.w + thickness,
            h: self.h + thickness,
        }
    }
}

/// Raw input sampled by the host once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    pub cursor: Point,
    pub left_down: bool,
}

impl InputFrame {
    pub fn new(x: f32, y: f32, left_down: bool) -> Self {
        Self { cursor: Point::new(x, y), left_down }
    }
}

/// Keeps the previous and current frames so button edges can be derived.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    current: InputFrame,
    past: InputFrame,
}

impl InputState {
    pub fn refresh(&mut self, frame: InputFrame) {
        self.past = self.current;
        self.current = frame;
    }

    pub fn cursor(&self) -> Point {
        self.current.cursor
    }

    /// Left button went down this tick.
    pub fn left_pressed(&self) -> bool {
        self.current.left_down && !self.past.left_down
    }

    /// Left button went up this tick.
    pub fn left_released(&self) -> bool {
        !self.current.left_down && self.past.left_down
    }

    pub fn hovering(&self, rect: Rect) -> bool {
        rect.contains(self.current.cursor)
    }

    /// Press edge with the cursor inside `rect`.
    pub fn clicked(&self, rect: Rect) -> bool {
        self.hovering(rect) && self.left_pressed()
    }
}
