use super::*;
use crate::config::LayoutConfig;
use crate::constants::CORNER_BASE_BLOCK;
use itertools::iproduct;

/// Square block of bases packed beside a corner furnace.
///
/// ```text
/// B . B . B . B . B
/// . . . . . . . . .
/// B . B . B . B . B
/// ```
///
/// B = top-left tile of a base. Bases are `base_size` wide with `spacing`
/// empty tiles between them; `CORNER_BASE_BLOCK` bases per side. The anchor
/// is the top-left tile of the first base and placements are row-major.
pub fn base_block_stamp(config: &LayoutConfig) -> Stamp {
    let pitch = config.base_pitch() as i32;

    Stamp {
        name: "base_block",
        placements: iproduct!(0..CORNER_BASE_BLOCK as i32, 0..CORNER_BASE_BLOCK as i32)
            .map(|(row, col)| sp(StructureKind::Base, col * pitch, row * pitch, config.base_size))
            .collect(),
    }
}
