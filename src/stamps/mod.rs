pub mod base_block;

use crate::geometry::Rect;
use crate::plan::StructureKind;

/// A placement within a stamp: a square structure at a tile offset from the
/// stamp anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct StampPlacement {
    pub kind: StructureKind,
    pub dx: i32,
    pub dy: i32,
    pub size: u32,
}

/// A fixed arrangement of structures relative to an anchor tile.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    pub name: &'static str,
    pub placements: Vec<StampPlacement>,
}

impl Stamp {
    /// All placements in absolute tile coordinates, in declaration order.
    /// Nothing is clipped; placements may fall outside the grid.
    pub fn place_at(&self, anchor_x: i32, anchor_y: i32) -> Vec<(StructureKind, Rect)> {
        self.placements
            .iter()
            .map(|p| (p.kind, Rect::square(anchor_x + p.dx, anchor_y + p.dy, p.size)))
            .collect()
    }

    /// Bounding box of the stamp when anchored at the origin.
    pub fn bounds(&self) -> Option<Rect> {
        let rects = self.place_at(0, 0);
        let x0 = rects.iter().map(|(_, r)| r.x).min()?;
        let y0 = rects.iter().map(|(_, r)| r.y).min()?;
        let x1 = rects.iter().map(|(_, r)| r.right()).max()?;
        let y1 = rects.iter().map(|(_, r)| r.bottom()).max()?;
        Some(Rect::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// No two placements of the stamp overlap.
    pub fn validate(&self) -> bool {
        let rects = self.place_at(0, 0);
        rects.iter().enumerate().all(|(i, (_, a))| {
            rects[i + 1..].iter().all(|(_, b)| !a.intersects(b))
        })
    }
}

/// Helper to create a square placement.
pub fn sp(kind: StructureKind, dx: i32, dy: i32, size: u32) -> StampPlacement {
    StampPlacement { kind, dx, dy, size }
}
