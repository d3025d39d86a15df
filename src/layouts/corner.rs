//! Corner fortress: eight furnaces in a 4x2 grid, each with a block of bases
//! to its right and a machine gun to its left.
//!
//! Base packing is deliberately simple. A base is dropped when it overlaps
//! another alliance's furnace; there is no search for an alternate spot and
//! bases are never checked against each other or against machine guns.

use super::LayoutGenerator;
use crate::config::LayoutConfig;
use crate::constants::*;
use crate::geometry::Rect;
use crate::plan::*;
use crate::stamps::base_block::base_block_stamp;
use log::*;

pub struct CornerLayout;

impl CornerLayout {
    /// Furnace footprint for each alliance, in alliance order.
    pub fn furnace_rects(config: &LayoutConfig) -> Vec<(AllianceId, Rect)> {
        let (offset_x, offset_y) = config.corner_offset;
        let spacing = config.furnace_spacing as i32;

        AllianceId::all()
            .map(|alliance| {
                let i = alliance.index();
                let x = offset_x + (i % CORNER_COLUMNS) as i32 * spacing;
                let y = offset_y + (i / CORNER_COLUMNS) as i32 * spacing;
                (alliance, Rect::square(x, y, config.furnace_size))
            })
            .collect()
    }

    /// Machine gun sitting one spacing tile left of a furnace, top-aligned.
    pub fn machine_gun_rect(config: &LayoutConfig, furnace: &Rect) -> Rect {
        Rect::square(
            furnace.x - config.mg_size as i32 - config.spacing as i32,
            furnace.y,
            config.mg_size,
        )
    }
}

impl LayoutGenerator for CornerLayout {
    fn name(&self) -> &str {
        "corner"
    }

    fn generate(&self, config: &LayoutConfig) -> Vec<Structure> {
        let furnaces = Self::furnace_rects(config);
        let block = base_block_stamp(config);
        debug_assert!(block.validate(), "base block stamp overlaps itself");
        if let Some(bounds) = block.bounds() {
            debug!(
                "Corner: {} spans {}x{} tiles beside each furnace",
                block.name, bounds.width, bounds.height
            );
        }

        let mut structures: Vec<Structure> = furnaces
            .iter()
            .map(|(alliance, rect)| Structure::furnace(*rect, *alliance))
            .collect();

        let mut rejected = 0;

        for (alliance, furnace) in &furnaces {
            let anchor_x = furnace.right() + config.spacing as i32;

            for (_, base) in block.place_at(anchor_x, furnace.y) {
                let blocked = furnaces
                    .iter()
                    .any(|(other, other_rect)| other != alliance && base.intersects(other_rect));

                if blocked {
                    rejected += 1;
                    trace!(
                        "Corner: base for alliance {} at ({}, {}) overlaps a furnace",
                        alliance.number(),
                        base.x,
                        base.y
                    );
                    continue;
                }

                structures.push(Structure::base(base, *alliance, 'B'));
            }

            structures.push(Structure::machine_gun(
                Self::machine_gun_rect(config, furnace),
                *alliance,
            ));
        }

        debug!(
            "Corner: placed {} structures, rejected {} bases",
            structures.len(),
            rejected
        );

        structures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn furnaces_fill_four_columns_then_wrap() {
        let rects = CornerLayout::furnace_rects(&LayoutConfig::default());
        let corners: Vec<_> = rects.iter().map(|(_, r)| (r.x, r.y)).collect();

        assert_eq!(
            corners,
            vec![
                (5, 5),
                (34, 5),
                (63, 5),
                (92, 5),
                (5, 34),
                (34, 34),
                (63, 34),
                (92, 34)
            ]
        );
    }

    #[test]
    fn default_spacing_rejects_no_bases() {
        let structures = CornerLayout.generate(&LayoutConfig::default());
        let bases = structures
            .iter()
            .filter(|s| s.kind == StructureKind::Base)
            .count();

        assert_eq!(bases, ALLIANCE_COUNT * 25);
    }

    #[test]
    fn tight_spacing_drops_bases_over_neighbouring_furnaces() {
        let config = LayoutConfig {
            furnace_spacing: 12,
            ..LayoutConfig::default()
        };
        let structures = CornerLayout.generate(&config);
        let furnaces = CornerLayout::furnace_rects(&config);

        let bases: Vec<_> = structures
            .iter()
            .filter(|s| s.kind == StructureKind::Base)
            .collect();

        assert!(bases.len() < ALLIANCE_COUNT * 25);
        for base in &bases {
            for (alliance, furnace) in &furnaces {
                if Some(*alliance) != base.owner {
                    assert!(
                        !base.rect.intersects(furnace),
                        "base {:?} overlaps furnace {:?}",
                        base.rect,
                        furnace
                    );
                }
            }
        }
    }

    #[test]
    fn bases_are_not_checked_against_machine_guns() {
        // One tile closer and furnace 1's machine gun lands in furnace 0's base block.
        let config = LayoutConfig {
            furnace_spacing: 28,
            ..LayoutConfig::default()
        };
        let structures = CornerLayout.generate(&config);
        let mg = structures
            .iter()
            .find(|s| s.label() == Some("MG2"))
            .unwrap();

        assert_eq!((mg.rect.x, mg.rect.y), (29, 5));
        assert!(structures
            .iter()
            .filter(|s| s.kind == StructureKind::Base)
            .any(|b| b.rect.intersects(&mg.rect)));
    }

    #[test]
    fn widest_valid_config_generates_without_overflow() {
        let config = LayoutConfig {
            furnace_spacing: MAX_TILE_EXTENT,
            base_size: MAX_TILE_EXTENT,
            spacing: MAX_TILE_EXTENT,
            corner_offset: (MAX_TILE_EXTENT as i32, MAX_TILE_EXTENT as i32),
            ..LayoutConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let structures = CornerLayout.generate(&config);
        let last = CornerLayout::furnace_rects(&config)[7].1;
        assert_eq!((last.x, last.y), (4 * 65_535, 2 * 65_535));
        let mg = structures
            .iter()
            .find(|s| s.label() == Some("MG1"))
            .unwrap();
        assert_eq!((mg.rect.x, mg.rect.y), (-3, 65_535));
    }

    #[test]
    fn alliance_structures_follow_their_furnace() {
        let structures = CornerLayout.generate(&LayoutConfig::default());
        let first = AllianceId::new(0).unwrap();

        // 8 furnaces, then alliance 0's bases, then its machine gun.
        assert_eq!(structures[8].rect, Rect::square(11, 5, 3));
        assert_eq!(structures[8].style, Style::Alliance(first));
        assert_eq!(structures[8 + 25].kind, StructureKind::MachineGun);
        assert_eq!(structures[8 + 25].rect, Rect::square(1, 5, 3));
    }
}
