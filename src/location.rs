/// A tile on the grid, addressed by column and row.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u32,
}

impl Location {
    pub fn from_coords(col: u16, row: u16) -> Self {
        Location {
            packed: ((col as u32) << 16) | row as u32,
        }
    }

    /// Convert a signed tile position, returning `None` when it falls outside
    /// a `width` x `height` grid.
    pub fn checked(col: i32, row: i32, width: u32, height: u32) -> Option<Self> {
        if col >= 0 && row >= 0 && (col as u32) < width && (row as u32) < height {
            Some(Location::from_coords(col as u16, row as u16))
        } else {
            None
        }
    }

    #[inline]
    pub fn col(self) -> u16 {
        ((self.packed >> 16) & 0xFFFF) as u16
    }

    #[inline]
    pub fn row(self) -> u16 {
        (self.packed & 0xFFFF) as u16
    }
}
