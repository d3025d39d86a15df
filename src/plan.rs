use crate::constants::*;
use crate::geometry::Rect;
use crate::planner::LayoutKind;
use crate::visual::*;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight symmetric factions.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllianceId(u8);

impl AllianceId {
    pub fn new(index: usize) -> Option<Self> {
        if index < ALLIANCE_COUNT {
            Some(AllianceId(index as u8))
        } else {
            None
        }
    }

    /// All alliances in index order.
    pub fn all() -> impl Iterator<Item = AllianceId> {
        (0..ALLIANCE_COUNT as u8).map(AllianceId)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number used in labels.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn style_tag(self) -> &'static str {
        ALLIANCE_STYLE_TAGS[self.index()]
    }
}

/// Visual style of a painted tile.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    CentralStructure,
    Furnace,
    MachineGun,
    Alliance(AllianceId),
}

impl Style {
    pub fn tag(self) -> &'static str {
        match self {
            Style::CentralStructure => CT_STYLE_TAG,
            Style::Furnace => FURNACE_STYLE_TAG,
            Style::MachineGun => MG_STYLE_TAG,
            Style::Alliance(alliance) => alliance.style_tag(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    CentralStructure,
    Furnace,
    Base,
    MachineGun,
}

/// A single rectangle placed by a layout generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub rect: Rect,
    /// `None` for the neutral central structure.
    pub owner: Option<AllianceId>,
    pub style: Style,
    pub label: Option<String>,
}

impl Structure {
    pub fn central(rect: Rect) -> Self {
        Structure {
            kind: StructureKind::CentralStructure,
            rect,
            owner: None,
            style: Style::CentralStructure,
            label: Some("CT".to_string()),
        }
    }

    pub fn furnace(rect: Rect, owner: AllianceId) -> Self {
        Structure {
            kind: StructureKind::Furnace,
            rect,
            owner: Some(owner),
            style: Style::Furnace,
            label: Some(format!("F{}", owner.number())),
        }
    }

    /// A base with the owner's style. `prefix` distinguishes ring buffer
    /// bases (`A`) from main bases (`B`).
    pub fn base(rect: Rect, owner: AllianceId, prefix: char) -> Self {
        Structure {
            kind: StructureKind::Base,
            rect,
            owner: Some(owner),
            style: Style::Alliance(owner),
            label: Some(format!("{}{}", prefix, owner.number())),
        }
    }

    pub fn machine_gun(rect: Rect, owner: AllianceId) -> Self {
        Structure {
            kind: StructureKind::MachineGun,
            rect,
            owner: Some(owner),
            style: Style::MachineGun,
            label: Some(format!("MG{}", owner.number())),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Structure counts of a generated layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub central_structures: usize,
    pub furnaces: usize,
    pub bases: usize,
    pub machine_guns: usize,
}

impl LayoutSummary {
    pub fn total(&self) -> usize {
        self.central_structures + self.furnaces + self.bases + self.machine_guns
    }
}

/// The ordered output of one layout generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub kind: LayoutKind,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Placements in paint order; later entries overwrite earlier ones.
    pub structures: Vec<Structure>,
}

impl LayoutPlan {
    /// Paint every structure, in order, onto a renderer.
    pub fn visualize<R: GridRenderer + ?Sized>(&self, renderer: &mut R) {
        for structure in &self.structures {
            renderer.paint_rect(structure.rect, structure.style, structure.label());
        }
    }

    pub fn structures_of(&self, kind: StructureKind) -> impl Iterator<Item = &Structure> {
        self.structures.iter().filter(move |s| s.kind == kind)
    }

    pub fn count(&self, kind: StructureKind) -> usize {
        self.structures_of(kind).count()
    }

    pub fn owned_by(&self, alliance: AllianceId) -> impl Iterator<Item = &Structure> {
        self.structures
            .iter()
            .filter(move |s| s.owner == Some(alliance))
    }

    pub fn summary(&self) -> LayoutSummary {
        let mut counts: FnvHashMap<StructureKind, usize> = FnvHashMap::default();
        for structure in &self.structures {
            *counts.entry(structure.kind).or_default() += 1;
        }

        let count = |kind: StructureKind| counts.get(&kind).copied().unwrap_or(0);

        LayoutSummary {
            central_structures: count(StructureKind::CentralStructure),
            furnaces: count(StructureKind::Furnace),
            bases: count(StructureKind::Base),
            machine_guns: count(StructureKind::MachineGun),
        }
    }
}
