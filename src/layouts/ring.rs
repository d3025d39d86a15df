//! Buffered ring fortress, centered on the grid midpoint.
//!
//! Paint order:
//! 1. central structure
//! 2. buffer bases: 3 layers x 3 per alliance wedge, just outside the mud ring
//! 3. furnace ring: one furnace per alliance at the wedge center angle
//! 4. per furnace: 3 steps x 3 outer bases, then a machine gun
//!
//! Nothing is collision checked. Overlaps between rings are accepted.

use super::LayoutGenerator;
use crate::config::LayoutConfig;
use crate::constants::*;
use crate::geometry::*;
use crate::plan::*;
use itertools::iproduct;
use log::*;
use std::f64::consts::PI;

/// Where an alliance's furnace sits on the furnace ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingSlot {
    pub alliance: AllianceId,
    pub angle_deg: f64,
    pub center: Point,
}

pub struct RingLayout;

impl RingLayout {
    pub fn center(config: &LayoutConfig) -> Point {
        let (cx, cy) = config.grid_center();
        Point::new(cx as f64, cy as f64)
    }

    /// Wedge center angle for an alliance: `i * 45 + 22.5` degrees.
    pub fn wedge_angle(alliance: AllianceId) -> f64 {
        alliance.index() as f64 * WEDGE_DEGREES + WEDGE_DEGREES / 2.0
    }

    /// Radius of the circle whose circumference fits every furnace at the
    /// configured center-to-center spacing.
    pub fn furnace_ring_radius(config: &LayoutConfig) -> f64 {
        (ALLIANCE_COUNT as f64 * config.furnace_spacing as f64) / (2.0 * PI)
    }

    /// Radius of the innermost buffer layer.
    pub fn buffer_start_radius(config: &LayoutConfig) -> f64 {
        let mud_outer_radius = config.mud_diameter as f64 / 2.0 + config.spacing as f64;
        mud_outer_radius + config.base_size as f64 / 2.0
    }

    pub fn furnace_slots(config: &LayoutConfig) -> Vec<RingSlot> {
        let center = Self::center(config);
        let radius = Self::furnace_ring_radius(config);

        AllianceId::all()
            .map(|alliance| {
                let angle_deg = Self::wedge_angle(alliance);
                RingSlot {
                    alliance,
                    angle_deg,
                    center: polar_to_cartesian(center.x, center.y, radius, angle_deg),
                }
            })
            .collect()
    }

    pub fn central_rect(config: &LayoutConfig) -> Rect {
        let (cx, cy) = config.grid_center();
        let half = (config.ct_size / 2) as i32;
        Rect::square(cx - half, cy - half, config.ct_size)
    }

    fn buffer_bases(config: &LayoutConfig, alliance: AllianceId) -> Vec<Structure> {
        let center = Self::center(config);
        let start = Self::buffer_start_radius(config);
        let step = config.base_pitch() as f64;
        let wedge = Self::wedge_angle(alliance);

        iproduct!(0..RING_BUFFER_LAYERS, RING_BUFFER_OFFSETS_DEG.iter())
            .map(|(layer, offset)| {
                let radius = start + layer as f64 * step;
                let at = polar_to_cartesian(center.x, center.y, radius, wedge + offset);
                let rect = Rect::centered_at(at, config.base_size, config.base_size);
                Structure::base(rect, alliance, 'A')
            })
            .collect()
    }

    fn outer_bases(config: &LayoutConfig, slot: &RingSlot) -> Vec<Structure> {
        let center = Self::center(config);
        let ring_radius = Self::furnace_ring_radius(config);
        let half_furnace = config.furnace_size as f64 / 2.0;
        let half_base = config.base_size as f64 / 2.0;
        let step = config.base_pitch() as f64;

        iproduct!(1..=RING_OUTER_STEPS, RING_OUTER_OFFSETS_DEG.iter())
            .map(|(k, offset)| {
                let radius = ring_radius + half_furnace + k as f64 * step - half_base;
                let at = polar_to_cartesian(center.x, center.y, radius, slot.angle_deg + offset);
                let rect = Rect::centered_at(at, config.base_size, config.base_size);
                Structure::base(rect, slot.alliance, 'B')
            })
            .collect()
    }

    fn machine_gun(config: &LayoutConfig, slot: &RingSlot) -> Structure {
        let center = Self::center(config);
        let radius = Self::furnace_ring_radius(config)
            + config.furnace_size as f64 / 2.0
            + config.spacing as f64
            + config.mg_size as f64 / 2.0;
        let at = polar_to_cartesian(
            center.x,
            center.y,
            radius,
            slot.angle_deg + RING_MG_OFFSET_DEG,
        );

        Structure::machine_gun(
            Rect::centered_at(at, config.mg_size, config.mg_size),
            slot.alliance,
        )
    }
}

impl LayoutGenerator for RingLayout {
    fn name(&self) -> &str {
        "ring"
    }

    fn generate(&self, config: &LayoutConfig) -> Vec<Structure> {
        let mut structures = vec![Structure::central(Self::central_rect(config))];

        for alliance in AllianceId::all() {
            structures.extend(Self::buffer_bases(config, alliance));
        }

        let slots = Self::furnace_slots(config);
        structures.extend(slots.iter().map(|slot| {
            Structure::furnace(
                Rect::centered_at(slot.center, config.furnace_size, config.furnace_size),
                slot.alliance,
            )
        }));

        for slot in &slots {
            structures.extend(Self::outer_bases(config, slot));
            structures.push(Self::machine_gun(config, slot));
        }

        debug!(
            "Ring: placed {} structures, furnace ring radius {:.3}",
            structures.len(),
            Self::furnace_ring_radius(config)
        );

        structures
    }
}
