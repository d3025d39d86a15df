use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Immutable constants the generators and renderers work from.
///
/// `Default` is the reference configuration. Only the grid size and the cell
/// pixel size are expected to vary; structure dimensions are fixed game rules
/// and are exposed so tests can tighten them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    pub cell_size_px: u32,
    pub ct_size: u32,
    pub mud_diameter: u32,
    pub base_size: u32,
    pub furnace_size: u32,
    pub mg_size: u32,
    pub spacing: u32,
    pub furnace_spacing: u32,
    pub corner_offset: (i32, i32),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size_px: CELL_SIZE_PX,
            ct_size: CT_SIZE,
            mud_diameter: MUD_DIAMETER,
            base_size: BASE_SIZE,
            furnace_size: FURNACE_SIZE,
            mg_size: MG_SIZE,
            spacing: STRUCTURE_SPACING,
            furnace_spacing: FURNACE_CTC_SPACING,
            corner_offset: (CORNER_OFFSET_X, CORNER_OFFSET_Y),
        }
    }
}

impl LayoutConfig {
    pub fn with_grid_size(mut self, width: u32, height: u32) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_cell_size(mut self, cell_size_px: u32) -> Self {
        self.cell_size_px = cell_size_px;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !grid_dimensions_valid(self.grid_width, self.grid_height) {
            return Err(ConfigError::InvalidGridDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if !(1..=MAX_CELL_SIZE_PX).contains(&self.cell_size_px) {
            return Err(ConfigError::InvalidCellSize(self.cell_size_px));
        }

        let sizes = [
            ("central structure", self.ct_size),
            ("mud ring", self.mud_diameter),
            ("base", self.base_size),
            ("furnace", self.furnace_size),
            ("machine gun", self.mg_size),
        ];
        let spacings = [
            ("spacing", self.spacing),
            ("furnace spacing", self.furnace_spacing),
        ];
        let out_of_range = sizes
            .iter()
            .find(|(_, size)| !(1..=MAX_TILE_EXTENT).contains(size))
            .or_else(|| spacings.iter().find(|(_, size)| *size > MAX_TILE_EXTENT));
        if let Some(&(name, size)) = out_of_range {
            return Err(ConfigError::InvalidStructureSize { name, size });
        }

        let (x, y) = self.corner_offset;
        if x.unsigned_abs() > MAX_TILE_EXTENT || y.unsigned_abs() > MAX_TILE_EXTENT {
            return Err(ConfigError::InvalidCornerOffset { x, y });
        }

        Ok(())
    }

    /// Tile the ring layout is centered on.
    pub fn grid_center(&self) -> (i32, i32) {
        ((self.grid_width / 2) as i32, (self.grid_height / 2) as i32)
    }

    /// Distance between the top-left corners of neighbouring bases in a block.
    pub fn base_pitch(&self) -> u32 {
        self.base_size + self.spacing
    }
}

/// Grid sides must be non-zero and addressable by a [`crate::location::Location`].
pub fn grid_dimensions_valid(width: u32, height: u32) -> bool {
    (1..=MAX_TILE_EXTENT).contains(&width) && (1..=MAX_TILE_EXTENT).contains(&height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_grid_dimension_is_rejected() {
        let config = LayoutConfig::default().with_grid_size(0, 100);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidGridDimensions {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let config = LayoutConfig::default().with_grid_size(70_000, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let config = LayoutConfig::default().with_cell_size(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidCellSize(0)));
    }

    #[test]
    fn oversized_cell_is_rejected() {
        let config = LayoutConfig::default()
            .with_grid_size(65_535, 65_535)
            .with_cell_size(70_000);
        assert_eq!(config.validate(), Err(ConfigError::InvalidCellSize(70_000)));
        assert_eq!(config.with_cell_size(MAX_CELL_SIZE_PX).validate(), Ok(()));
    }

    #[test]
    fn zero_structure_size_is_rejected() {
        let config = LayoutConfig {
            furnace_size: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidStructureSize {
                name: "furnace",
                size: 0
            })
        );
    }

    #[test]
    fn oversized_structure_or_spacing_is_rejected() {
        let config = LayoutConfig {
            base_size: 60_000,
            ..LayoutConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = LayoutConfig {
            base_size: 70_000,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidStructureSize {
                name: "base",
                size: 70_000
            })
        );

        let config = LayoutConfig {
            furnace_spacing: 1_000_000_000,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidStructureSize {
                name: "furnace spacing",
                size: 1_000_000_000
            })
        );
    }

    #[test]
    fn zero_spacing_is_allowed() {
        let config = LayoutConfig {
            spacing: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn far_corner_offset_is_rejected() {
        let config = LayoutConfig {
            corner_offset: (5, i32::MIN),
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCornerOffset { x: 5, y: i32::MIN })
        );
    }

    #[test]
    fn center_floors_odd_dimensions() {
        let config = LayoutConfig::default().with_grid_size(51, 40);
        assert_eq!(config.grid_center(), (25, 20));
    }
}
