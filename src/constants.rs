pub const GRID_WIDTH: u32 = 100;
pub const GRID_HEIGHT: u32 = 100;
pub const CELL_SIZE_PX: u32 = 8;
/// Largest tile count any grid side, structure size, spacing or offset may take.
pub const MAX_TILE_EXTENT: u32 = u16::MAX as u32;
pub const MAX_CELL_SIZE_PX: u32 = 1024;

pub const CT_SIZE: u32 = 7;
pub const MUD_DIAMETER: u32 = 21;
pub const BASE_SIZE: u32 = 3;
pub const FURNACE_SIZE: u32 = 5;
pub const MG_SIZE: u32 = 3;
pub const STRUCTURE_SPACING: u32 = 1;
/// Center-to-center distance between neighbouring furnaces.
pub const FURNACE_CTC_SPACING: u32 = 29;

pub const ALLIANCE_COUNT: usize = 8;

/// Angular width of the ring wedge owned by one alliance.
pub const WEDGE_DEGREES: f64 = 360.0 / ALLIANCE_COUNT as f64;

pub const CORNER_OFFSET_X: i32 = 5;
pub const CORNER_OFFSET_Y: i32 = 5;
pub const CORNER_COLUMNS: usize = 4;
/// Bases per side of the block packed next to each corner furnace.
pub const CORNER_BASE_BLOCK: u32 = 5;

pub const RING_BUFFER_LAYERS: u32 = 3;
pub const RING_BUFFER_OFFSETS_DEG: [f64; 3] = [-10.0, 0.0, 10.0];
pub const RING_OUTER_STEPS: u32 = 3;
pub const RING_OUTER_OFFSETS_DEG: [f64; 3] = [-8.0, 0.0, 8.0];
pub const RING_MG_OFFSET_DEG: f64 = 5.0;

pub const CT_STYLE_TAG: &str = "ct-tile";
pub const FURNACE_STYLE_TAG: &str = "furnace-tile";
pub const MG_STYLE_TAG: &str = "mg-tile";

/// Style tags for each alliance, indexed by alliance id.
pub const ALLIANCE_STYLE_TAGS: [&str; ALLIANCE_COUNT] = [
    "alliance1-base",
    "alliance2-base",
    "alliance3-base",
    "alliance4-base",
    "alliance5-base",
    "alliance6-base",
    "alliance7-base",
    "alliance8-base",
];
