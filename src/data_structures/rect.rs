//! Axis-aligned rectangles that grow point by point.
//!
//! A [`Rect`] starts out as the empty sentinel ([`Rect::empty`]) and is
//! extended with [`Rect::extend`] until it bounds every visited point. Points
//! can then be mapped into the rectangle's normalized space with
//! [`Rect::normalize`].

use cgmath::Vector2;

/// An axis-aligned rectangle given by its minimum corner and its extent.
///
/// The empty rectangle is encoded as all-NaN fields. Width and height are
/// taken as they come: zero is a valid (degenerate) extent and the sign is
/// never normalized.
///
/// Note that the derived `PartialEq` follows IEEE semantics, so two empty
/// rectangles never compare equal. Use [`Rect::is_empty`] instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x_min: f32, y_min: f32, width: f32, height: f32) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    /// The empty sentinel. Extending it yields a point rectangle.
    pub fn empty() -> Self {
        Self::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN)
    }

    pub fn from_min_max(min: Vector2<f32>, max: Vector2<f32>) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Bounding rectangle of all `points`; empty if there are none.
    pub fn bounding<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<f32>>,
    {
        points
            .into_iter()
            .fold(Self::empty(), |rect, point| rect.extend(point))
    }

    pub fn x_max(&self) -> f32 {
        self.x_min + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y_min + self.height
    }

    pub fn min(&self) -> Vector2<f32> {
        Vector2::new(self.x_min, self.y_min)
    }

    pub fn max(&self) -> Vector2<f32> {
        Vector2::new(self.x_max(), self.y_max())
    }

    pub fn is_empty(&self) -> bool {
        self.x_min.is_nan() || self.y_min.is_nan()
    }

    /// True if either extent is zero. A zero-width rectangle with a non-zero
    /// height counts as degenerate too.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Half-open containment: the min edges are inside, the max edges are not.
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x >= self.x_min
            && point.x < self.x_max()
            && point.y >= self.y_min
            && point.y < self.y_max()
    }

    /// Returns a rectangle that contains `point`.
    ///
    /// An empty rectangle becomes the zero-sized rectangle at `point`. If
    /// `point` is already inside, `self` is returned unchanged; otherwise the
    /// bounds are grown on each axis just enough to reach it.
    pub fn extend(self, point: Vector2<f32>) -> Self {
        if self.is_empty() {
            return Self::new(point.x, point.y, 0.0, 0.0);
        }
        if self.contains(point) {
            return self;
        }

        let x_min = self.x_min.min(point.x);
        let y_min = self.y_min.min(point.y);
        let x_max = self.x_max().max(point.x);
        let y_max = self.y_max().max(point.y);

        Self::new(x_min, y_min, x_max - x_min, y_max - y_min)
    }

    /// Maps `point` into the rectangle's unit space.
    ///
    /// Points inside land in `[0, 1]` on both axes, points outside are
    /// extrapolated. A zero extent divides by zero and yields NaN or infinity;
    /// check [`Rect::is_zero`] first.
    pub fn normalize(&self, point: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            (point.x - self.x_min) / self.width,
            (point.y - self.y_min) / self.height,
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::empty()
    }
}
