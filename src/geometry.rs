//! Integer axis-aligned rectangles in playfield pixels.
//!
//! The origin is the top-left corner of the playfield; `y` grows downward.
//! `right()`/`bottom()` are exclusive edges, so a rectangle at `x = 0` with
//! `w = 640` exactly fills a 640-pixel-wide playfield.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Build a `w`×`h` rectangle whose bottom-centre sits on `(cx, bottom)`.
    pub fn from_midbottom(w: i32, h: i32, (cx, bottom): (i32, i32)) -> Self {
        Rect::new(cx - w / 2, bottom - h, w, h)
    }

    /// Build a `w`×`h` rectangle centred on `(cx, cy)`.
    pub fn from_center(w: i32, h: i32, (cx, cy): (i32, i32)) -> Self {
        Rect::new(cx - w / 2, cy - h / 2, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn midbottom(&self) -> (i32, i32) {
        (self.center_x(), self.bottom())
    }

    /// Move so the right edge lands on `right`, keeping the width.
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Translate in place.
    pub fn move_ip(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Standard AABB overlap: both axis ranges must intersect. Touching
    /// edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Return a copy moved inside `bounds`. On an axis where `self` is
    /// larger than `bounds` it is centred on that axis instead.
    pub fn clamp(&self, bounds: &Rect) -> Rect {
        let x = clamp_axis(self.x, self.w, bounds.x, bounds.w);
        let y = clamp_axis(self.y, self.h, bounds.y, bounds.h);
        Rect::new(x, y, self.w, self.h)
    }
}

fn clamp_axis(pos: i32, len: i32, lo: i32, span: i32) -> i32 {
    if len >= span {
        lo + span / 2 - len / 2
    } else {
        pos.clamp(lo, lo + span - len)
    }
}
