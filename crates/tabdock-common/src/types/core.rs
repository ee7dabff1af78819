use serde::{Deserialize, Serialize};

/// An integer pixel rectangle. `contains` is half-open on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Split orientation. A horizontal container lays its children out left to
/// right, a vertical one top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Extent of `rect` along this axis.
    pub fn extent(self, rect: Rect) -> i32 {
        match self {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    /// Start coordinate of `rect` along this axis.
    pub fn start(self, rect: Rect) -> i32 {
        match self {
            Orientation::Horizontal => rect.x,
            Orientation::Vertical => rect.y,
        }
    }

    /// Coordinate of `p` along this axis.
    pub fn coord(self, p: Point) -> i32 {
        match self {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }

    /// A slice of `rect` that starts at `offset` and is `len` long on this
    /// axis, keeping the full cross-axis extent.
    pub fn slice(self, rect: Rect, offset: i32, len: i32) -> Rect {
        match self {
            Orientation::Horizontal => Rect::new(offset, rect.y, len, rect.height),
            Orientation::Vertical => Rect::new(rect.x, offset, rect.width, len),
        }
    }
}
