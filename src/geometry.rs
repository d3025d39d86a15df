//! Coordinate math shared by the layout generators.
//!
//! Angles are in degrees, 0° points along +X and angles grow clockwise on
//! screen because rows grow downwards.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A continuous position in tile units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Screen-space bearing from `origin` to this point, normalised to [0, 360).
    pub fn angle_from(self, origin: Point) -> f64 {
        (self.y - origin.y)
            .atan2(self.x - origin.x)
            .to_degrees()
            .rem_euclid(360.0)
    }
}

/// An axis-aligned rectangle of whole tiles. The top-left corner is signed so
/// placements may hang off the grid; painting clips them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(x: i32, y: i32, size: u32) -> Self {
        Rect::new(x, y, size, size)
    }

    /// Rectangle of the given size whose top-left is chosen by [`rect_centered_at`].
    pub fn centered_at(center: Point, width: u32, height: u32) -> Self {
        let (x, y) = rect_centered_at(center.x, center.y, width, height);
        Rect::new(x, y, width, height)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(extent(self.width))
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(extent(self.height))
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// The part of the rectangle inside a `width` x `height` grid anchored at
    /// the origin, or `None` if they share no tile.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Rect> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(extent(width));
        let y1 = self.bottom().min(extent(height));

        if x0 < x1 && y0 < y1 {
            Some(Rect::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
        } else {
            None
        }
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }

    /// Every tile covered by the rectangle, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (i32, i32)> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *self;
        let right = x.saturating_add(extent(width));
        (y..y.saturating_add(extent(height)))
            .flat_map(move |row| (x..right).map(move |col| (col, row)))
    }
}

#[inline]
fn extent(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_degrees: f64) -> Point {
    let angle = degrees_to_radians(angle_degrees);
    Point::new(
        center_x + radius * angle.cos(),
        center_y + radius * angle.sin(),
    )
}

/// Round half up: ties go towards positive infinity (2.5 -> 3, -1.5 -> -1).
#[inline]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Top-left tile of a `width` x `height` rectangle centered on a point.
/// Each axis is rounded independently with [`round_half_up`].
pub fn rect_centered_at(center_x: f64, center_y: f64, width: u32, height: u32) -> (i32, i32) {
    (
        round_half_up(center_x - width as f64 / 2.0),
        round_half_up(center_y - height as f64 / 2.0),
    )
}
