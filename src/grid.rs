use crate::config::grid_dimensions_valid;
use crate::error::ConfigError;
use crate::geometry::Rect;
use crate::location::*;
use crate::plan::Style;
use fnv::FnvHashMap;
use log::*;

/// A width x height tile surface. Each tile is empty or carries one style.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSurface {
    width: u32,
    height: u32,
    tiles: Vec<Option<Style>>,
}

impl GridSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let mut grid = GridSurface {
            width: 0,
            height: 0,
            tiles: Vec::new(),
        };
        grid.reset(width, height)?;
        Ok(grid)
    }

    /// Resize the surface and empty every tile.
    pub fn reset(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        if !grid_dimensions_valid(width, height) {
            return Err(ConfigError::InvalidGridDimensions { width, height });
        }

        self.width = width;
        self.height = height;
        self.tiles.clear();
        self.tiles.resize(width as usize * height as usize, None);

        Ok(())
    }

    /// Empty every tile, keeping the dimensions.
    pub fn clear(&mut self) {
        self.tiles.iter_mut().for_each(|tile| *tile = None);
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
    fn index(&self, col: u32, row: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Style at a tile, or `None` if it is empty or outside the grid.
    pub fn get(&self, col: i32, row: i32) -> Option<Style> {
        Location::checked(col, row, self.width, self.height).and_then(|loc| self.get_location(loc))
    }

    pub fn get_location(&self, loc: Location) -> Option<Style> {
        if (loc.col() as u32) < self.width && (loc.row() as u32) < self.height {
            self.tiles[self.index(loc.col() as u32, loc.row() as u32)]
        } else {
            None
        }
    }

    /// Overwrite every in-bounds tile of `rect` with `style`. Tiles outside the
    /// grid are skipped. Returns the number of tiles written.
    pub fn paint_rect(&mut self, rect: Rect, style: Style) -> usize {
        let clipped = rect.clip_to(self.width, self.height);
        let painted = clipped.map_or(0, |r| r.area());

        if let Some(clipped) = clipped {
            for (col, row) in clipped.tiles() {
                let index = self.index(col as u32, row as u32);
                self.tiles[index] = Some(style);
            }
        }

        let skipped = rect.area() - painted;
        if skipped > 0 {
            trace!(
                "Skipped {} out-of-bounds tiles painting {} at ({}, {})",
                skipped,
                style,
                rect.x,
                rect.y
            );
        }

        painted as usize
    }

    /// Every tile with its location, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Option<Style>)> + '_ {
        let width = self.width as usize;
        self.tiles.iter().enumerate().map(move |(i, style)| {
            let col = (i % width) as u16;
            let row = (i / width) as u16;
            (Location::from_coords(col, row), *style)
        })
    }

    pub fn is_clear(&self) -> bool {
        self.tiles.iter().all(Option::is_none)
    }

    pub fn painted_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    /// Number of tiles carrying each style.
    pub fn style_counts(&self) -> FnvHashMap<Style, usize> {
        let mut counts = FnvHashMap::default();
        for style in self.tiles.iter().flatten() {
            *counts.entry(*style).or_default() += 1;
        }
        counts
    }
}
